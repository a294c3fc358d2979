//! The particle view the engine draws.

use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;

use crate::canvas::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub color: Color,
    pub radius: f32,
}

/// Particle collection owned by the controller and read by the engine.
pub type SharedParticles = Rc<RefCell<Vec<Particle>>>;
