//! Settings overlay shown while the engine is in the menu state.
//!
//! The overlay is anchored to the top-right corner of the screen. All of its
//! elements are positioned relative to the anchor `(screen_width - 150, 30)`:
//!
//! | Element | Offset from anchor |
//! |---------|--------------------|
//! | background panel (140 x 150) | `(-15, -10)` |
//! | "Number of Particles" caption / slider | `(-5, 0)` / `(0, 20)` |
//! | "Particles Radius" caption / slider | `(-5, 40)` / `(0, 60)` |
//! | "Particles Spacing" caption / slider | `(-5, 80)` / `(0, 100)` |

use glam::Vec2;

use crate::canvas::{Color, Rect, Surface};
use crate::config::{
    ParticleSettings, ScreenSize, PARTICLE_COUNT_RANGE, PARTICLE_RADIUS_RANGE,
    PARTICLE_SPACING_RANGE,
};
use crate::input::InputEvent;
use crate::signal::Signal;
use crate::slider::Slider;

const RIGHT_MARGIN: f32 = 150.0;
const TOP_MARGIN: f32 = 30.0;

const SLIDER_WIDTH: f32 = 100.0;
const SLIDER_HEIGHT: f32 = 10.0;

const BACKGROUND_COLOR: Color = Color::rgb(55, 55, 55);
const SLIDER_COLOR: Color = Color::rgb(40, 40, 40);
const HANDLE_COLOR: Color = Color::rgb(0, 0, 0);
const TEXT_COLOR: Color = Color::rgb(170, 170, 170);
const FONT_SIZE: f32 = 12.0;

pub const COUNT_LABEL: &str = "Number of Particles";
pub const RADIUS_LABEL: &str = "Particles Radius";
pub const SPACING_LABEL: &str = "Particles Spacing";

/// Which of the three settings a slider edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Count,
    Radius,
    Spacing,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [MenuItem::Count, MenuItem::Radius, MenuItem::Spacing];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Count => COUNT_LABEL,
            MenuItem::Radius => RADIUS_LABEL,
            MenuItem::Spacing => SPACING_LABEL,
        }
    }

    fn signal(self, value: f32) -> Signal {
        match self {
            MenuItem::Count => Signal::ParticleCount(value.round() as u32),
            MenuItem::Radius => Signal::ParticleRadius(value),
            MenuItem::Spacing => Signal::ParticleSpacing(value),
        }
    }
}

/// The settings panel: three sliders with captions.
#[derive(Debug, Clone)]
pub struct Menu {
    origin: Vec2,
    sliders: [Slider; 3],
}

impl Menu {
    pub fn new(screen: ScreenSize, initial: &ParticleSettings) -> Self {
        let origin = Vec2::new(screen.width - RIGHT_MARGIN, TOP_MARGIN);
        let slider = |row: f32, min: f32, max: f32, step: f32, value: f32| {
            Slider::new(
                Rect::new(origin.x, origin.y + 20.0 + row * 40.0, SLIDER_WIDTH, SLIDER_HEIGHT),
                min,
                max,
                step,
                value,
            )
            .with_colors(SLIDER_COLOR, HANDLE_COLOR)
        };

        let sliders = [
            slider(
                0.0,
                *PARTICLE_COUNT_RANGE.start() as f32,
                *PARTICLE_COUNT_RANGE.end() as f32,
                1.0,
                initial.count as f32,
            ),
            slider(
                1.0,
                *PARTICLE_RADIUS_RANGE.start(),
                *PARTICLE_RADIUS_RANGE.end(),
                0.1,
                initial.radius,
            ),
            slider(
                2.0,
                *PARTICLE_SPACING_RANGE.start(),
                *PARTICLE_SPACING_RANGE.end(),
                0.1,
                initial.spacing,
            ),
        ];

        // Sliders stay hidden until the first `on`.
        let mut menu = Self { origin, sliders };
        menu.off();
        menu
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn background(&self) -> Rect {
        Rect::new(self.origin.x - 15.0, self.origin.y - 10.0, 140.0, 150.0)
    }

    pub fn slider(&self, item: MenuItem) -> &Slider {
        &self.sliders[item as usize]
    }

    pub fn sliders(&self) -> &[Slider; 3] {
        &self.sliders
    }

    fn caption_pos(&self, item: MenuItem) -> Vec2 {
        self.origin + Vec2::new(-5.0, item as usize as f32 * 40.0)
    }

    /// Current slider values as particle settings.
    pub fn settings(&self) -> ParticleSettings {
        ParticleSettings {
            count: self.slider(MenuItem::Count).value().round() as u32,
            radius: self.slider(MenuItem::Radius).value(),
            spacing: self.slider(MenuItem::Spacing).value(),
        }
    }

    /// Draw the panel, show and draw the sliders, then the captions.
    pub fn on<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.fill_rect(self.background(), BACKGROUND_COLOR, 5.0);
        for slider in &mut self.sliders {
            slider.show();
            slider.draw(surface);
        }
        for item in MenuItem::ALL {
            surface.draw_text(self.caption_pos(item), item.label(), TEXT_COLOR, FONT_SIZE);
        }
    }

    /// Make the sliders interactive without drawing anything.
    pub fn show(&mut self) {
        for slider in &mut self.sliders {
            slider.show();
        }
    }

    /// Hide all sliders.
    pub fn off(&mut self) {
        for slider in &mut self.sliders {
            slider.hide();
        }
    }

    /// Route an input event to the sliders and report any changed settings.
    pub fn handle_event(&mut self, event: &InputEvent) -> Vec<Signal> {
        MenuItem::ALL
            .iter()
            .zip(self.sliders.iter_mut())
            .filter_map(|(item, slider)| slider.handle_event(event).map(|v| item.signal(v)))
            .collect()
    }
}
