//! Initial particle placement.
//!
//! Particles are laid out on a square grid centred on the screen. The
//! distance between neighbouring centres is `2 * radius * (1 + spacing)`, so a
//! spacing of 1.0 leaves one diameter of empty space between particles.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{ParticleSettings, ProtonConfig, ScreenSize};
use crate::particle::Particle;

/// Distance between neighbouring particle centres.
#[inline]
pub fn pitch(settings: &ParticleSettings) -> f32 {
    2.0 * settings.radius * (1.0 + settings.spacing)
}

/// Columns and rows of the smallest near-square grid holding `count` cells.
pub fn grid_dims(count: u32) -> (u32, u32) {
    if count == 0 {
        return (0, 0);
    }
    let cols = (count as f32).sqrt().ceil() as u32;
    let rows = count.div_ceil(cols);
    (cols, rows)
}

/// Lay out `settings.count` particles centred on `screen`, without jitter.
pub fn grid_layout(settings: &ParticleSettings, screen: ScreenSize) -> Vec<Vec2> {
    let (cols, rows) = grid_dims(settings.count);
    if cols == 0 {
        return Vec::new();
    }

    let pitch = pitch(settings);
    let extent = Vec2::new((cols - 1) as f32, (rows - 1) as f32) * pitch;
    let origin = Vec2::new(screen.width, screen.height) * 0.5 - extent * 0.5;

    (0..settings.count)
        .map(|i| {
            let col = (i % cols) as f32;
            let row = (i / cols) as f32;
            origin + Vec2::new(col, row) * pitch
        })
        .collect()
}

/// Build the particle collection described by `config` using `settings`.
///
/// `settings` is passed separately because the menu edits it while the
/// rest of the configuration stays fixed.
pub fn spawn_particles(config: &ProtonConfig, settings: &ParticleSettings) -> Vec<Particle> {
    let positions = grid_layout(settings, config.screen);
    let jitter = if config.jitter.is_finite() {
        config.jitter.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let max_offset = jitter * pitch(settings) * 0.5;
    let mut rng = StdRng::seed_from_u64(config.seed);

    positions
        .into_iter()
        .map(|position| {
            let offset = if max_offset.is_finite() && max_offset > 0.0 {
                Vec2::new(
                    rng.gen_range(-max_offset..=max_offset),
                    rng.gen_range(-max_offset..=max_offset),
                )
            } else {
                Vec2::ZERO
            };
            Particle {
                position: position + offset,
                color: config.particle_color,
                radius: settings.radius,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(count: u32, radius: f32, spacing: f32) -> ParticleSettings {
        ParticleSettings {
            count,
            radius,
            spacing,
        }
    }

    #[test]
    fn test_grid_dims() {
        assert_eq!(grid_dims(0), (0, 0));
        assert_eq!(grid_dims(1), (1, 1));
        assert_eq!(grid_dims(4), (2, 2));
        assert_eq!(grid_dims(5), (3, 2));
        assert_eq!(grid_dims(300), (18, 17));
    }

    #[test]
    fn test_layout_count_and_pitch() {
        let s = settings(4, 2.0, 1.0);
        let pts = grid_layout(&s, ScreenSize { width: 100.0, height: 100.0 });

        assert_eq!(pts.len(), 4);
        // pitch = 2 * 2 * (1 + 1) = 8
        assert_eq!(pts[1].x - pts[0].x, 8.0);
        assert_eq!(pts[2].y - pts[0].y, 8.0);
    }

    #[test]
    fn test_layout_is_centred() {
        let s = settings(9, 1.0, 0.5);
        let screen = ScreenSize { width: 200.0, height: 120.0 };
        let pts = grid_layout(&s, screen);

        let sum: Vec2 = pts.iter().copied().sum();
        let mean = sum / pts.len() as f32;
        assert!((mean - Vec2::new(100.0, 60.0)).length() < 1e-4);
    }

    #[test]
    fn test_single_particle_at_centre() {
        let pts = grid_layout(&settings(1, 5.0, 5.0), ScreenSize::default());
        assert_eq!(pts, vec![Vec2::new(400.0, 300.0)]);
    }

    #[test]
    fn test_spawn_uses_settings_radius_and_color() {
        let config = ProtonConfig::default();
        let s = settings(10, 4.5, 1.0);
        let particles = spawn_particles(&config, &s);

        assert_eq!(particles.len(), 10);
        assert!(particles.iter().all(|p| p.radius == 4.5));
        assert!(particles.iter().all(|p| p.color == config.particle_color));
    }

    #[test]
    fn test_non_finite_jitter_ignored() {
        let s = settings(9, 2.0, 1.0);
        let grid = grid_layout(&s, ScreenSize::default());
        for jitter in [f32::INFINITY, f32::NEG_INFINITY, f32::NAN] {
            let config = ProtonConfig {
                jitter,
                ..ProtonConfig::default()
            };
            let positions: Vec<Vec2> = spawn_particles(&config, &s)
                .iter()
                .map(|p| p.position)
                .collect();
            assert_eq!(positions, grid);
        }
    }

    #[test]
    fn test_jitter_is_bounded_and_seeded() {
        let config = ProtonConfig {
            jitter: 0.5,
            seed: 7,
            ..ProtonConfig::default()
        };
        let s = settings(16, 2.0, 1.0);
        let grid = grid_layout(&s, config.screen);
        let a = spawn_particles(&config, &s);
        let b = spawn_particles(&config, &s);

        assert_eq!(a, b);
        let max = config.jitter * pitch(&s) * 0.5;
        for (p, g) in a.iter().zip(&grid) {
            let d = p.position - *g;
            assert!(d.x.abs() <= max && d.y.abs() <= max);
        }
    }
}
