//! Horizontal value slider.

use glam::Vec2;

use crate::canvas::{Color, Rect, Surface};
use crate::input::{InputEvent, MouseButton};

/// A horizontal slider over `min..=max` in increments of `step`.
///
/// The slider only reacts to input while visible. Pressing on the track (or
/// the handle, which overhangs it vertically) jumps the value to the pointer
/// and starts a drag that follows the pointer until release.
#[derive(Debug, Clone)]
pub struct Slider {
    rect: Rect,
    min: f32,
    max: f32,
    step: f32,
    value: f32,
    visible: bool,
    dragging: bool,
    color: Color,
    handle_color: Color,
}

impl Slider {
    pub fn new(rect: Rect, min: f32, max: f32, step: f32, initial: f32) -> Self {
        let mut slider = Self {
            rect,
            min,
            max,
            step,
            value: min,
            visible: true,
            dragging: false,
            color: Color::rgb(40, 40, 40),
            handle_color: Color::BLACK,
        };
        slider.value = slider.snap(initial);
        slider
    }

    pub fn with_colors(mut self, color: Color, handle_color: Color) -> Self {
        self.color = color;
        self.handle_color = handle_color;
        self
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.dragging = false;
    }

    /// Clamp to range and round to the nearest step.
    pub fn snap(&self, v: f32) -> f32 {
        let v = v.clamp(self.min, self.max);
        if self.step <= 0.0 {
            return v;
        }
        let steps = ((v - self.min) / self.step).round();
        // Round away float drift so 0.1 + 29 * 0.1 reads back as 3.0.
        let snapped = ((self.min + steps * self.step) * 1e4).round() / 1e4;
        snapped.clamp(self.min, self.max)
    }

    /// Set the value, returning `true` if it changed.
    pub fn set_value(&mut self, v: f32) -> bool {
        let v = self.snap(v);
        if v == self.value {
            return false;
        }
        self.value = v;
        true
    }

    /// Value the slider takes when the pointer is at screen x-coordinate `x`.
    pub fn value_at(&self, x: f32) -> f32 {
        let t = ((x - self.rect.min.x) / self.rect.size.x).clamp(0.0, 1.0);
        self.snap(self.min + t * (self.max - self.min))
    }

    fn handle_radius(&self) -> f32 {
        self.rect.size.y / 1.3
    }

    /// Screen position of the handle centre.
    pub fn handle_pos(&self) -> Vec2 {
        let t = if self.max > self.min {
            (self.value - self.min) / (self.max - self.min)
        } else {
            0.0
        };
        Vec2::new(
            self.rect.min.x + t * self.rect.size.x,
            self.rect.center().y,
        )
    }

    fn hit(&self, p: Vec2) -> bool {
        let overhang = (self.handle_radius() - self.rect.size.y * 0.5).max(0.0);
        let grab = Rect {
            min: self.rect.min - Vec2::new(0.0, overhang),
            size: self.rect.size + Vec2::new(0.0, overhang * 2.0),
        };
        grab.contains(p) || p.distance(self.handle_pos()) <= self.handle_radius()
    }

    /// Feed one input event. Returns the new value if it changed.
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<f32> {
        if !self.visible {
            return None;
        }
        match *event {
            InputEvent::PointerPressed {
                pos,
                button: MouseButton::Left,
            } if self.hit(pos) => {
                self.dragging = true;
                self.set_value(self.value_at(pos.x)).then_some(self.value)
            }
            InputEvent::PointerMoved(pos) if self.dragging => {
                self.set_value(self.value_at(pos.x)).then_some(self.value)
            }
            InputEvent::PointerReleased {
                button: MouseButton::Left,
                ..
            } => {
                self.dragging = false;
                None
            }
            _ => None,
        }
    }

    /// Paint the track and handle. Hidden sliders draw nothing.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        if !self.visible {
            return;
        }
        surface.fill_rect(self.rect, self.color, self.rect.size.y * 0.5);
        surface.fill_circle(self.handle_pos(), self.handle_radius(), self.handle_color);
    }
}
