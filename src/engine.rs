//! The Proton engine: lifecycle state, menu overlay and drawing.

use std::sync::mpsc::Sender;

use crate::canvas::Surface;
use crate::config::ProtonConfig;
use crate::error::TransitionError;
use crate::input::{EventQueue, InputEvent};
use crate::menu::Menu;
use crate::particle::SharedParticles;
use crate::signal::Signal;
use crate::state::{EngineState, StateContext};

/// Returned by [`Proton::terminate`]. The caller owns the actual shutdown
/// (closing the window, leaving the frame loop).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shutdown;

/// Front-end engine.
///
/// Holds the current [`EngineState`] and dispatches one [`step`](Self::step)
/// per frame to it. The render surface, event queue, particle collection and
/// signal channel are supplied by the simulation controller.
pub struct Proton<S: Surface> {
    state: EngineState,
    surface: Option<S>,
    events: EventQueue,
    particles: SharedParticles,
    signals: Sender<Signal>,
    menu: Menu,
    on: bool,
}

impl<S: Surface> Proton<S> {
    pub fn new(
        config: &ProtonConfig,
        surface: S,
        events: EventQueue,
        particles: SharedParticles,
        signals: Sender<Signal>,
    ) -> Self {
        Self {
            state: EngineState::Off,
            surface: Some(surface),
            events,
            particles,
            signals,
            menu: Menu::new(config.screen, &config.particles),
            on: true,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// `false` once the engine has been terminated.
    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// The render surface, or `None` after termination released it.
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    pub fn particles(&self) -> &SharedParticles {
        &self.particles
    }

    fn set_state(&mut self, next: EngineState) {
        if self.state == next {
            return;
        }
        if self.state == EngineState::Menu {
            self.undraw_menu();
        }
        if next == EngineState::Menu {
            self.menu.show();
        }
        log::debug!("engine state {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    fn transition(&mut self, next: EngineState) -> Result<(), TransitionError> {
        if !self.state.can_transition_to(next) {
            return Err(TransitionError {
                from: self.state,
                to: next,
            });
        }
        self.set_state(next);
        Ok(())
    }

    /// Enter the menu.
    pub fn start(&mut self) {
        if self.state.is_terminal() {
            log::warn!("start() ignored: engine has ended");
            return;
        }
        self.set_state(EngineState::Menu);
    }

    /// Return to the idle state.
    pub fn stop(&mut self) {
        if self.state.is_terminal() {
            log::warn!("stop() ignored: engine has ended");
            return;
        }
        self.set_state(EngineState::Off);
    }

    /// Leave the menu and run the simulation.
    pub fn run(&mut self) -> Result<(), TransitionError> {
        if self.state != EngineState::Menu {
            return Err(TransitionError {
                from: self.state,
                to: EngineState::Running,
            });
        }
        self.transition(EngineState::Running)
    }

    pub fn pause(&mut self) -> Result<(), TransitionError> {
        if self.state != EngineState::Running {
            return Err(TransitionError {
                from: self.state,
                to: EngineState::Paused,
            });
        }
        self.transition(EngineState::Paused)
    }

    pub fn resume(&mut self) -> Result<(), TransitionError> {
        if self.state != EngineState::Paused {
            return Err(TransitionError {
                from: self.state,
                to: EngineState::Running,
            });
        }
        self.transition(EngineState::Running)
    }

    /// Stop, enter the terminal state and release the surface.
    ///
    /// Safe to call more than once; the surface is released only the first
    /// time.
    pub fn terminate(&mut self) -> Shutdown {
        if self.state.is_terminal() {
            return Shutdown;
        }
        self.stop();
        self.set_state(EngineState::Ended);
        self.on = false;
        if let Some(mut surface) = self.surface.take() {
            surface.release();
        }
        log::info!("engine terminated");
        Shutdown
    }

    /// Pending input events since the last call.
    pub fn events(&self) -> Vec<InputEvent> {
        self.events.drain()
    }

    /// Run the active state's behavior for one frame.
    pub fn step(&mut self) {
        let state = self.state;
        state.step(self);
    }

    /// Draw the menu overlay and make its sliders interactive.
    pub fn draw_menu(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            self.menu.on(surface);
        }
    }

    /// Hide the menu sliders.
    pub fn undraw_menu(&mut self) {
        self.menu.off();
    }

    pub fn draw_particles(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        for p in self.particles.borrow().iter() {
            surface.fill_circle(p.position, p.radius, p.color);
        }
    }

    /// Forward an input event to the menu sliders while the menu is active.
    /// Changed values go out on the signal channel.
    pub fn handle_menu_event(&mut self, event: &InputEvent) {
        if self.state != EngineState::Menu {
            return;
        }
        for signal in self.menu.handle_event(event) {
            if self.signals.send(signal).is_err() {
                log::warn!("dropping {:?}: signal receiver is gone", signal);
            }
        }
    }
}

impl<S: Surface> StateContext for Proton<S> {
    fn draw_menu(&mut self) {
        Proton::draw_menu(self);
    }

    fn draw_particles(&mut self) {
        Proton::draw_particles(self);
    }
}
