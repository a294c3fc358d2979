//! Translation from egui input events to Proton input events.

use eframe::egui;
use proton::{InputEvent, KeyCode, MouseButton, Vec2};

fn pos(p: egui::Pos2) -> Vec2 {
    Vec2::new(p.x, p.y)
}

fn button(b: egui::PointerButton) -> Option<MouseButton> {
    match b {
        egui::PointerButton::Primary => Some(MouseButton::Left),
        egui::PointerButton::Secondary => Some(MouseButton::Right),
        egui::PointerButton::Middle => Some(MouseButton::Middle),
        _ => None,
    }
}

fn key(k: egui::Key) -> KeyCode {
    match k {
        egui::Key::Enter => KeyCode::Enter,
        egui::Key::Space => KeyCode::Space,
        egui::Key::Escape => KeyCode::Escape,
        egui::Key::M => KeyCode::M,
        egui::Key::O => KeyCode::O,
        _ => KeyCode::Other,
    }
}

/// Convert one egui event. Events Proton has no use for map to `None`.
pub fn translate(event: &egui::Event) -> Option<InputEvent> {
    match event {
        egui::Event::PointerMoved(p) => Some(InputEvent::PointerMoved(pos(*p))),
        egui::Event::PointerButton {
            pos: p,
            button: b,
            pressed,
            ..
        } => {
            let button = button(*b)?;
            let pos = pos(*p);
            Some(if *pressed {
                InputEvent::PointerPressed { pos, button }
            } else {
                InputEvent::PointerReleased { pos, button }
            })
        }
        egui::Event::Key {
            key: k,
            pressed: true,
            repeat: false,
            ..
        } => Some(InputEvent::KeyPressed(key(*k))),
        _ => None,
    }
}
