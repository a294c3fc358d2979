//! Lifecycle states and their per-frame behavior.
//!
//! ```text
//!   Off ──start──▶ Menu ──run──▶ Running ──pause──▶ Paused
//!    ▲              ▲                ▲                 │
//!    │              │                └─────resume──────┘
//!    └────stop──────┴── start / stop from any non-terminal state
//!
//!   any ──terminate──▶ Off ──▶ Ended (terminal)
//! ```
//!
//! States carry no data. Behavior is dispatched by [`EngineState::step`],
//! which receives the engine capabilities it needs through [`StateContext`].

/// The engine's current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EngineState {
    #[default]
    Off,
    Menu,
    Running,
    Paused,
    Ended,
}

/// What a state may ask of the engine during a step.
pub trait StateContext {
    fn draw_menu(&mut self);
    fn draw_particles(&mut self);
}

impl EngineState {
    pub const ALL: [EngineState; 5] = [
        EngineState::Off,
        EngineState::Menu,
        EngineState::Running,
        EngineState::Paused,
        EngineState::Ended,
    ];

    /// Run this state's per-frame behavior.
    pub fn step<C: StateContext + ?Sized>(self, ctx: &mut C) {
        match self {
            EngineState::Menu => {
                ctx.draw_menu();
                ctx.draw_particles();
            }
            EngineState::Off | EngineState::Running | EngineState::Paused | EngineState::Ended => {}
        }
    }

    /// No transition leaves this state.
    pub fn is_terminal(self) -> bool {
        self == EngineState::Ended
    }

    /// Whether the validated transitions (`run`, `pause`, `resume`) allow
    /// moving from `self` to `to`.
    pub fn can_transition_to(self, to: EngineState) -> bool {
        use EngineState::*;
        match (self, to) {
            (Ended, _) => false,
            (_, Off) | (_, Menu) | (_, Ended) => true,
            (Menu, Running) | (Paused, Running) => true,
            (Running, Paused) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<&'static str>,
    }

    impl StateContext for Recorder {
        fn draw_menu(&mut self) {
            self.calls.push("menu");
        }

        fn draw_particles(&mut self) {
            self.calls.push("particles");
        }
    }

    #[test]
    fn test_default_is_off() {
        assert_eq!(EngineState::default(), EngineState::Off);
    }

    #[test]
    fn test_menu_step_draws_menu_then_particles() {
        let mut rec = Recorder::default();
        EngineState::Menu.step(&mut rec);
        assert_eq!(rec.calls, vec!["menu", "particles"]);
    }

    #[test]
    fn test_other_states_draw_nothing() {
        for state in EngineState::ALL {
            if state == EngineState::Menu {
                continue;
            }
            let mut rec = Recorder::default();
            state.step(&mut rec);
            assert!(rec.calls.is_empty(), "{:?} drew {:?}", state, rec.calls);
        }
    }

    #[test]
    fn test_ended_is_only_terminal_state() {
        for state in EngineState::ALL {
            assert_eq!(state.is_terminal(), state == EngineState::Ended);
        }
        for to in EngineState::ALL {
            assert!(!EngineState::Ended.can_transition_to(to));
        }
    }

    #[test]
    fn test_validated_transitions() {
        use EngineState::*;
        assert!(Menu.can_transition_to(Running));
        assert!(Running.can_transition_to(Paused));
        assert!(Paused.can_transition_to(Running));

        assert!(!Off.can_transition_to(Running));
        assert!(!Menu.can_transition_to(Paused));
        assert!(!Paused.can_transition_to(Paused));
        assert!(!Running.can_transition_to(Running));
    }
}
