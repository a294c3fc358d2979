//! # Proton
//!
//! Lifecycle state machine and settings overlay for a particle simulation
//! front end.
//!
//! Proton does no physics. It decides, frame by frame, what the screen shows:
//! an idle screen, a settings menu over the particles, or nothing while the
//! simulation runs elsewhere. Drawing goes into a backend-neutral
//! [`Surface`], so the same engine drives the egui viewer and the tests.
//!
//! ## Quick Start
//!
//! ```ignore
//! use proton::prelude::*;
//!
//! let mut controller = SimulationController::new(ProtonConfig::default(), DrawList::new());
//!
//! loop {
//!     controller.push_event(InputEvent::KeyPressed(KeyCode::Enter));
//!     if controller.frame() == FrameOutcome::Shutdown {
//!         break;
//!     }
//!     let commands = controller
//!         .engine_mut()
//!         .surface_mut()
//!         .map(DrawList::take_commands)
//!         .unwrap_or_default();
//!     // paint `commands` with your toolkit
//! }
//! ```
//!
//! ## States
//!
//! | State | Per-frame behavior |
//! |-------|--------------------|
//! | [`EngineState::Off`] | nothing |
//! | [`EngineState::Menu`] | draw the overlay, then the particles |
//! | [`EngineState::Running`] | nothing |
//! | [`EngineState::Paused`] | nothing |
//! | [`EngineState::Ended`] | nothing; terminal |
//!
//! [`Proton::terminate`] never exits the process. It releases the surface and
//! returns [`Shutdown`]; the caller decides what to do with it.

pub mod canvas;
pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod input;
pub mod menu;
pub mod particle;
pub mod signal;
pub mod slider;
pub mod spawn;
pub mod state;

pub use canvas::{Color, DrawCommand, DrawList, Rect, Surface};
pub use config::{ParticleSettings, ProtonConfig, ScreenSize};
pub use controller::{FrameOutcome, SimulationController};
pub use engine::{Proton, Shutdown};
pub use error::{ConfigError, TransitionError};
pub use glam::Vec2;
pub use input::{EventQueue, InputEvent, KeyCode, MouseButton};
pub use menu::{Menu, MenuItem};
pub use particle::{Particle, SharedParticles};
pub use signal::Signal;
pub use slider::Slider;
pub use state::{EngineState, StateContext};

/// Everything a frontend usually needs.
pub mod prelude {
    pub use crate::{
        Color, DrawCommand, DrawList, EngineState, EventQueue, FrameOutcome, InputEvent,
        KeyCode, MouseButton, Particle, Proton, ProtonConfig, Rect, Shutdown,
        SimulationController, Surface, Vec2,
    };
}
