//! Configuration for a Proton session.
//!
//! Configurations serialize to JSON. Every field has a default, so a file only
//! needs to name the values it changes:
//!
//! ```ignore
//! let config = ProtonConfig::load("proton.json")?;
//! config.save("proton.json")?;
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use crate::canvas::Color;
use crate::error::ConfigError;

/// Range accepted by the "Number of Particles" slider.
pub const PARTICLE_COUNT_RANGE: RangeInclusive<u32> = 1..=300;
/// Range accepted by the "Particles Radius" slider.
pub const PARTICLE_RADIUS_RANGE: RangeInclusive<f32> = 0.1..=10.0;
/// Range accepted by the "Particles Spacing" slider.
pub const PARTICLE_SPACING_RANGE: RangeInclusive<f32> = 0.1..=5.0;

/// Size of the drawing area in logical pixels.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScreenSize {
    pub width: f32,
    pub height: f32,
}

impl Default for ScreenSize {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Initial conditions edited through the menu sliders.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParticleSettings {
    /// Number of particles to lay out.
    pub count: u32,
    /// Radius of every particle.
    pub radius: f32,
    /// Gap between neighbours, as a multiple of the particle diameter.
    pub spacing: f32,
}

impl Default for ParticleSettings {
    fn default() -> Self {
        Self {
            count: 100,
            radius: 3.0,
            spacing: 1.0,
        }
    }
}

/// Top-level configuration.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProtonConfig {
    pub screen: ScreenSize,
    pub particles: ParticleSettings,
    pub particle_color: Color,
    pub background_color: Color,
    /// Random offset applied to each particle, as a fraction of the grid cell.
    pub jitter: f32,
    /// Seed for the jitter RNG.
    pub seed: u64,
}

impl Default for ProtonConfig {
    fn default() -> Self {
        Self {
            screen: ScreenSize::default(),
            particles: ParticleSettings::default(),
            particle_color: Color::rgb(200, 200, 255),
            background_color: Color::rgb(20, 20, 20),
            jitter: 0.0,
            seed: 0,
        }
    }
}

impl ProtonConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Check that every value is one the menu could have produced.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.particles;
        if !PARTICLE_COUNT_RANGE.contains(&p.count) {
            return Err(ConfigError::Invalid(format!(
                "particle count {} outside {:?}",
                p.count, PARTICLE_COUNT_RANGE
            )));
        }
        if !PARTICLE_RADIUS_RANGE.contains(&p.radius) {
            return Err(ConfigError::Invalid(format!(
                "particle radius {} outside {:?}",
                p.radius, PARTICLE_RADIUS_RANGE
            )));
        }
        if !PARTICLE_SPACING_RANGE.contains(&p.spacing) {
            return Err(ConfigError::Invalid(format!(
                "particle spacing {} outside {:?}",
                p.spacing, PARTICLE_SPACING_RANGE
            )));
        }
        if self.screen.width <= 0.0 || self.screen.height <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "screen size {}x{} must be positive",
                self.screen.width, self.screen.height
            )));
        }
        if !(0.0..=1.0).contains(&self.jitter) {
            return Err(ConfigError::Invalid(format!(
                "jitter {} outside 0..=1",
                self.jitter
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ProtonConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ProtonConfig =
            serde_json::from_str(r#"{ "particles": { "count": 42 } }"#).unwrap();
        assert_eq!(config.particles.count, 42);
        assert_eq!(config.particles.radius, 3.0);
        assert_eq!(config.screen, ScreenSize::default());
    }

    #[test]
    fn test_out_of_range_count_rejected() {
        let mut config = ProtonConfig::default();
        config.particles.count = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.particles.count = 301;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_out_of_range_radius_rejected() {
        let mut config = ProtonConfig::default();
        config.particles.radius = 10.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_out_of_range_spacing_rejected() {
        let mut config = ProtonConfig::default();
        config.particles.spacing = 0.05;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.particles.spacing = 5.1;
        assert!(config.validate().is_err());

        config.particles.spacing = 5.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_non_positive_screen_rejected() {
        let mut config = ProtonConfig::default();
        config.screen.width = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = ProtonConfig::default();
        config.screen.height = -10.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_jitter_outside_unit_range_rejected() {
        let mut config = ProtonConfig::default();
        config.jitter = -0.1;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.jitter = 1.5;
        assert!(config.validate().is_err());

        config.jitter = f32::NAN;
        assert!(config.validate().is_err());

        config.jitter = 1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_malformed_file_is_parse_error() {
        let path = std::env::temp_dir().join(format!("proton-bad-{}.json", std::process::id()));
        fs::write(&path, "{ \"particles\": { \"count\": ").unwrap();

        let result = ProtonConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_rejects_out_of_range_values() {
        let path = std::env::temp_dir().join(format!("proton-range-{}.json", std::process::id()));
        fs::write(&path, r#"{ "particles": { "count": 500 } }"#).unwrap();

        let result = ProtonConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("proton-config-{}.json", std::process::id()));
        let mut config = ProtonConfig::default();
        config.particles.spacing = 2.5;
        config.save(&path).unwrap();

        let loaded = ProtonConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = ProtonConfig::load("/nonexistent/proton.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
