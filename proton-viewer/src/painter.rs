//! Paints a recorded draw list with egui.

use eframe::egui;
use proton::{Color, DrawCommand};

pub fn color32(c: Color) -> egui::Color32 {
    egui::Color32::from_rgb(c.r, c.g, c.b)
}

/// Convert one command to an egui shape. Text needs the painter's fonts, so
/// it is laid out here too.
fn shape(painter: &egui::Painter, command: &DrawCommand) -> egui::Shape {
    match command {
        DrawCommand::Rect {
            rect,
            color,
            corner_radius,
        } => egui::Shape::rect_filled(
            egui::Rect::from_min_size(
                egui::pos2(rect.min.x, rect.min.y),
                egui::vec2(rect.size.x, rect.size.y),
            ),
            egui::CornerRadius::same(corner_radius.round().clamp(0.0, 255.0) as u8),
            color32(*color),
        ),
        DrawCommand::Circle {
            center,
            radius,
            color,
        } => egui::Shape::circle_filled(egui::pos2(center.x, center.y), *radius, color32(*color)),
        DrawCommand::Text {
            pos,
            text,
            color,
            size,
        } => {
            let galley = painter.layout_no_wrap(
                text.clone(),
                egui::FontId::proportional(*size),
                color32(*color),
            );
            egui::Shape::galley(egui::pos2(pos.x, pos.y), galley, color32(*color))
        }
    }
}

pub fn paint(painter: &egui::Painter, commands: &[DrawCommand]) {
    painter.extend(commands.iter().map(|c| shape(painter, c)));
}
