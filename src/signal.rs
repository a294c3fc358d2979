//! Messages from the menu back to the simulation controller.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::config::ParticleSettings;

/// A setting changed through the menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Signal {
    ParticleCount(u32),
    ParticleRadius(f32),
    ParticleSpacing(f32),
}

impl Signal {
    /// Write this change into `settings`.
    pub fn apply(self, settings: &mut ParticleSettings) {
        match self {
            Signal::ParticleCount(n) => settings.count = n,
            Signal::ParticleRadius(r) => settings.radius = r,
            Signal::ParticleSpacing(s) => settings.spacing = s,
        }
    }
}

/// Create the channel the engine sends menu changes through.
pub fn signal_channel() -> (Sender<Signal>, Receiver<Signal>) {
    mpsc::channel()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_updates_single_field() {
        let mut settings = ParticleSettings::default();
        Signal::ParticleRadius(7.5).apply(&mut settings);
        assert_eq!(settings.radius, 7.5);
        assert_eq!(settings.count, ParticleSettings::default().count);

        Signal::ParticleCount(12).apply(&mut settings);
        Signal::ParticleSpacing(0.3).apply(&mut settings);
        assert_eq!(settings.count, 12);
        assert_eq!(settings.spacing, 0.3);
    }

    #[test]
    fn test_channel_delivers_in_order() {
        let (tx, rx) = signal_channel();
        tx.send(Signal::ParticleCount(1)).unwrap();
        tx.send(Signal::ParticleCount(2)).unwrap();
        let got: Vec<_> = rx.try_iter().collect();
        assert_eq!(got, vec![Signal::ParticleCount(1), Signal::ParticleCount(2)]);
    }
}
