//! Simulation controller: owns everything the engine borrows and drives it
//! one frame at a time.
//!
//! # Key bindings
//!
//! | Key | Action |
//! |-----|--------|
//! | `M` | open the menu ([`Proton::start`]) |
//! | `O` | switch off ([`Proton::stop`]) |
//! | `Enter` | run from the menu |
//! | `Space` | pause / resume |
//! | `Escape` | terminate |

use std::sync::mpsc::Receiver;

use crate::canvas::Surface;
use crate::config::{ParticleSettings, ProtonConfig};
use crate::engine::{Proton, Shutdown};
use crate::input::{EventQueue, InputEvent, KeyCode};
use crate::particle::SharedParticles;
use crate::signal::{signal_channel, Signal};
use crate::spawn::spawn_particles;
use crate::state::EngineState;

/// Result of one [`SimulationController::frame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Shutdown,
}

pub struct SimulationController<S: Surface> {
    config: ProtonConfig,
    settings: ParticleSettings,
    particles: SharedParticles,
    events: EventQueue,
    signals: Receiver<Signal>,
    engine: Proton<S>,
    frame: u64,
}

impl<S: Surface> SimulationController<S> {
    /// Build the engine, lay out the initial particles and open the menu.
    ///
    /// Particle settings are read back from the menu sliders, so the layout
    /// always matches the values the menu shows.
    pub fn new(config: ProtonConfig, surface: S) -> Self {
        if let Err(e) = config.validate() {
            log::warn!("{}", e);
        }
        let particles = SharedParticles::default();
        let events = EventQueue::new();
        let (tx, rx) = signal_channel();

        let mut engine = Proton::new(&config, surface, events.clone(), particles.clone(), tx);
        let settings = engine.menu().settings();
        *particles.borrow_mut() = spawn_particles(&config, &settings);
        engine.start();
        log::info!(
            "controller ready: {} particles, radius {}, spacing {}",
            settings.count,
            settings.radius,
            settings.spacing
        );

        Self {
            config,
            settings,
            particles,
            events,
            signals: rx,
            engine,
            frame: 0,
        }
    }

    pub fn engine(&self) -> &Proton<S> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Proton<S> {
        &mut self.engine
    }

    pub fn config(&self) -> &ProtonConfig {
        &self.config
    }

    /// Particle settings as last edited through the menu.
    pub fn settings(&self) -> ParticleSettings {
        self.settings
    }

    pub fn particles(&self) -> &SharedParticles {
        &self.particles
    }

    /// Frames processed so far.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Queue an input event for the next frame.
    pub fn push_event(&self, event: InputEvent) {
        self.events.push(event);
    }

    /// A handle frontends can push events into directly.
    pub fn event_queue(&self) -> EventQueue {
        self.events.clone()
    }

    /// Process pending input, apply menu changes and step the engine.
    pub fn frame(&mut self) -> FrameOutcome {
        if !self.engine.is_on() {
            return FrameOutcome::Shutdown;
        }
        self.frame += 1;

        for event in self.engine.events() {
            if self.handle_event(&event).is_some() {
                return FrameOutcome::Shutdown;
            }
        }

        self.apply_signals();
        self.engine.step();
        FrameOutcome::Continue
    }

    fn handle_event(&mut self, event: &InputEvent) -> Option<Shutdown> {
        match *event {
            InputEvent::CloseRequested | InputEvent::KeyPressed(KeyCode::Escape) => {
                return Some(self.engine.terminate());
            }
            InputEvent::KeyPressed(KeyCode::M) => self.engine.start(),
            InputEvent::KeyPressed(KeyCode::O) => self.engine.stop(),
            InputEvent::KeyPressed(KeyCode::Enter) => {
                if let Err(e) = self.engine.run() {
                    log::debug!("{}", e);
                }
            }
            InputEvent::KeyPressed(KeyCode::Space) => {
                let result = match self.engine.state() {
                    EngineState::Paused => self.engine.resume(),
                    _ => self.engine.pause(),
                };
                if let Err(e) = result {
                    log::debug!("{}", e);
                }
            }
            _ => {}
        }
        self.engine.handle_menu_event(event);
        None
    }

    fn apply_signals(&mut self) {
        let mut changed = false;
        for signal in self.signals.try_iter() {
            log::debug!("menu signal {:?}", signal);
            signal.apply(&mut self.settings);
            changed = true;
        }
        if changed {
            *self.particles.borrow_mut() = spawn_particles(&self.config, &self.settings);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::DrawList;
    use crate::input::MouseButton;
    use glam::Vec2;

    fn controller() -> SimulationController<DrawList> {
        SimulationController::new(ProtonConfig::default(), DrawList::new())
    }

    #[test]
    fn test_new_opens_menu_with_configured_particles() {
        let c = controller();
        assert_eq!(c.engine().state(), EngineState::Menu);
        assert_eq!(c.particles().borrow().len(), 100);
    }

    #[test]
    fn test_keys_drive_transitions() {
        let mut c = controller();

        c.push_event(InputEvent::KeyPressed(KeyCode::Enter));
        c.frame();
        assert_eq!(c.engine().state(), EngineState::Running);

        c.push_event(InputEvent::KeyPressed(KeyCode::Space));
        c.frame();
        assert_eq!(c.engine().state(), EngineState::Paused);

        c.push_event(InputEvent::KeyPressed(KeyCode::Space));
        c.frame();
        assert_eq!(c.engine().state(), EngineState::Running);

        c.push_event(InputEvent::KeyPressed(KeyCode::O));
        c.frame();
        assert_eq!(c.engine().state(), EngineState::Off);

        // Invalid transitions are ignored
        c.push_event(InputEvent::KeyPressed(KeyCode::Space));
        c.frame();
        assert_eq!(c.engine().state(), EngineState::Off);

        c.push_event(InputEvent::KeyPressed(KeyCode::M));
        c.frame();
        assert_eq!(c.engine().state(), EngineState::Menu);
    }

    #[test]
    fn test_escape_shuts_down() {
        let mut c = controller();
        c.push_event(InputEvent::KeyPressed(KeyCode::Escape));
        assert_eq!(c.frame(), FrameOutcome::Shutdown);
        assert_eq!(c.engine().state(), EngineState::Ended);
        assert!(!c.engine().is_on());

        // Later frames keep reporting shutdown without doing anything.
        assert_eq!(c.frame(), FrameOutcome::Shutdown);
    }

    #[test]
    fn test_close_request_shuts_down() {
        let mut c = controller();
        c.push_event(InputEvent::CloseRequested);
        assert_eq!(c.frame(), FrameOutcome::Shutdown);
    }

    #[test]
    fn test_slider_change_relays_particles() {
        let mut c = controller();
        assert_eq!(c.frame(), FrameOutcome::Continue);

        let count_slider = c.engine().menu().sliders()[0].rect();
        c.push_event(InputEvent::PointerPressed {
            pos: count_slider.min + Vec2::new(0.0, 5.0),
            button: MouseButton::Left,
        });
        c.push_event(InputEvent::PointerReleased {
            pos: Vec2::ZERO,
            button: MouseButton::Left,
        });
        c.frame();

        assert_eq!(c.settings().count, 1);
        assert_eq!(c.particles().borrow().len(), 1);
    }

    #[test]
    fn test_settings_match_snapped_menu_values() {
        let mut config = ProtonConfig::default();
        config.particles.radius = 2.55;
        config.particles.spacing = 1.04;
        let c = SimulationController::new(config, DrawList::new());

        let menu = c.engine().menu().settings();
        assert_eq!(c.settings(), menu);
        assert_eq!(c.settings().spacing, 1.0);
        assert!(c
            .particles()
            .borrow()
            .iter()
            .all(|p| p.radius == menu.radius));
    }

    #[test]
    fn test_non_finite_jitter_does_not_panic() {
        let config = ProtonConfig {
            jitter: f32::INFINITY,
            ..ProtonConfig::default()
        };
        let mut c = SimulationController::new(config, DrawList::new());
        assert_eq!(c.particles().borrow().len(), 100);
        assert_eq!(c.frame(), FrameOutcome::Continue);
    }

    #[test]
    fn test_menu_key_and_press_in_same_frame() {
        let mut c = controller();
        c.push_event(InputEvent::KeyPressed(KeyCode::O));
        c.frame();
        assert_eq!(c.engine().state(), EngineState::Off);

        let count_slider = c.engine().menu().sliders()[0].rect();
        c.push_event(InputEvent::KeyPressed(KeyCode::M));
        c.push_event(InputEvent::PointerPressed {
            pos: count_slider.min + Vec2::new(count_slider.size.x, 5.0),
            button: MouseButton::Left,
        });
        c.frame();

        assert_eq!(c.engine().state(), EngineState::Menu);
        assert_eq!(c.settings().count, 300);
    }

    #[test]
    fn test_frame_counts() {
        let mut c = controller();
        c.frame();
        c.frame();
        assert_eq!(c.frame_count(), 2);
    }
}
