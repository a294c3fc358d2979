//! Input events for Proton.
//!
//! Frontends translate their native events into [`InputEvent`] and push them
//! onto an [`EventQueue`]. The engine drains the queue once per frame through
//! [`Proton::events`](crate::Proton::events).

use glam::Vec2;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Keys the controller reacts to. Anything else arrives as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Enter,
    Space,
    Escape,
    M,
    O,
    Other,
}

/// A single input event in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerMoved(Vec2),
    PointerPressed { pos: Vec2, button: MouseButton },
    PointerReleased { pos: Vec2, button: MouseButton },
    KeyPressed(KeyCode),
    /// The window asked to close.
    CloseRequested,
}

/// Shared FIFO of pending input events.
///
/// Cloning yields another handle to the same queue, so the frontend can keep
/// pushing while the engine drains.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    inner: Rc<RefCell<VecDeque<InputEvent>>>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: InputEvent) {
        self.inner.borrow_mut().push_back(event);
    }

    /// Remove and return every pending event, oldest first.
    pub fn drain(&self) -> Vec<InputEvent> {
        self.inner.borrow_mut().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}
