//! Backend-neutral drawing.
//!
//! The engine never talks to a windowing toolkit. It draws into a [`Surface`],
//! and the only surface shipped with the crate is [`DrawList`], which records
//! commands for a frontend to paint (the egui viewer) or for tests to inspect.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 8-bit RGB color. Serializes as `[r, g, b]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Color> for [u8; 3] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b]
    }
}

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Inclusive containment test.
    pub fn contains(&self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.min.x && p.x <= max.x && p.y >= self.min.y && p.y <= max.y
    }
}

/// A single recorded drawing operation.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Rect {
        rect: Rect,
        color: Color,
        corner_radius: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Text {
        /// Top-left anchor of the text.
        pos: Vec2,
        text: String,
        color: Color,
        size: f32,
    },
}

/// Drawing target for one frame.
pub trait Surface {
    fn fill_rect(&mut self, rect: Rect, color: Color, corner_radius: f32);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    fn draw_text(&mut self, pos: Vec2, text: &str, color: Color, size: f32);

    /// Give up the surface. Called exactly once, when the engine ends.
    fn release(&mut self);
}

/// A [`Surface`] that records every command it receives.
#[derive(Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    released: bool,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the list empty for the next frame.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl Surface for DrawList {
    fn fill_rect(&mut self, rect: Rect, color: Color, corner_radius: f32) {
        self.commands.push(DrawCommand::Rect {
            rect,
            color,
            corner_radius,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn draw_text(&mut self, pos: Vec2, text: &str, color: Color, size: f32) {
        self.commands.push(DrawCommand::Text {
            pos,
            text: text.to_string(),
            color,
            size,
        });
    }

    fn release(&mut self) {
        self.commands.clear();
        self.released = true;
    }
}
