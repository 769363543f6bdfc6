//! Particle burst factories
//!
//! Each factory draws from the caller's RNG so a seeded world produces the
//! same bursts every run.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::particles::{Particle, ParticleShape};
use crate::Rgb;
use crate::config::BurstConfig;

fn unit(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Radial burst of squares and triangles for an enemy death
pub fn enemy_explosion(
    pos: Vec2,
    color: Rgb,
    cfg: &BurstConfig,
    rng: &mut impl Rng,
) -> Vec<Particle> {
    let count = rng.random_range(cfg.count.0..=cfg.count.1);
    (0..count)
        .map(|_| {
            let angle = rng.random_range(0.0..TAU);
            let speed = rng.random_range(cfg.speed.0..=cfg.speed.1);
            let lifetime = rng.random_range(cfg.lifetime.0..=cfg.lifetime.1);
            let size = rng.random_range(cfg.size.0..=cfg.size.1);
            let shape = if rng.random_bool(0.5) {
                ParticleShape::Square
            } else {
                ParticleShape::Triangle
            };
            Particle::new(
                pos,
                unit(angle) * speed,
                color,
                cfg.color_end,
                size,
                1.0,
                lifetime,
                shape,
            )
        })
        .collect()
}

/// Large burst of shrinking triangles for the player's death
pub fn player_explosion(
    pos: Vec2,
    color: Rgb,
    cfg: &BurstConfig,
    rng: &mut impl Rng,
) -> Vec<Particle> {
    let count = rng.random_range(cfg.count.0..=cfg.count.1);
    (0..count)
        .map(|_| {
            let angle = rng.random_range(0.0..TAU);
            let speed = rng.random_range(cfg.speed.0..=cfg.speed.1);
            let lifetime = rng.random_range(cfg.lifetime.0..=cfg.lifetime.1);
            let size = rng.random_range(cfg.size.0..=cfg.size.1);
            Particle::new(
                pos,
                unit(angle) * speed,
                color,
                cfg.color_end,
                size,
                0.0,
                lifetime,
                ParticleShape::Triangle,
            )
        })
        .collect()
}

/// Evenly spaced ring of circles for a powerup pickup
pub fn powerup_burst(
    pos: Vec2,
    color: Rgb,
    cfg: &BurstConfig,
    rng: &mut impl Rng,
) -> Vec<Particle> {
    let count = rng.random_range(cfg.count.0..=cfg.count.1);
    (0..count)
        .map(|i| {
            let angle = TAU * i as f32 / count as f32;
            let speed = rng.random_range(cfg.speed.0..=cfg.speed.1);
            let lifetime = rng.random_range(cfg.lifetime.0..=cfg.lifetime.1);
            let size = rng.random_range(cfg.size.0..=cfg.size.1);
            Particle::new(
                pos,
                unit(angle) * speed,
                color,
                cfg.color_end,
                size,
                size * 0.5,
                lifetime,
                ParticleShape::Circle,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParticleConfig;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const ORIGIN: Vec2 = Vec2::new(200.0, 300.0);

    #[test]
    fn test_enemy_explosion_within_ranges() {
        let cfg = ParticleConfig::default().enemy_explosion;
        let mut rng = Pcg32::seed_from_u64(7);
        let particles = enemy_explosion(ORIGIN, [255, 60, 120], &cfg, &mut rng);

        assert!((cfg.count.0 as usize..=cfg.count.1 as usize).contains(&particles.len()));
        for p in &particles {
            assert_eq!(p.pos, ORIGIN);
            let speed = p.vel.length();
            assert!(speed >= cfg.speed.0 - 0.01 && speed <= cfg.speed.1 + 0.01);
            assert!(p.lifetime >= cfg.lifetime.0 && p.lifetime <= cfg.lifetime.1);
            assert!(matches!(p.shape, ParticleShape::Square | ParticleShape::Triangle));
            assert_eq!(p.size_end, 1.0);
        }
    }

    #[test]
    fn test_player_explosion_all_triangles_shrinking_to_zero() {
        let cfg = ParticleConfig::default().player_explosion;
        let mut rng = Pcg32::seed_from_u64(11);
        let particles = player_explosion(ORIGIN, [0, 200, 255], &cfg, &mut rng);

        assert!((cfg.count.0 as usize..=cfg.count.1 as usize).contains(&particles.len()));
        assert!(particles.iter().all(|p| p.shape == ParticleShape::Triangle));
        assert!(particles.iter().all(|p| p.size_end == 0.0));
    }

    #[test]
    fn test_powerup_burst_is_even_ring() {
        let cfg = ParticleConfig::default().powerup_burst;
        let mut rng = Pcg32::seed_from_u64(3);
        let particles = powerup_burst(ORIGIN, [255, 220, 0], &cfg, &mut rng);

        assert!((cfg.count.0 as usize..=cfg.count.1 as usize).contains(&particles.len()));
        let step = TAU / particles.len() as f32;
        for (i, p) in particles.iter().enumerate() {
            let dir = p.vel.normalize();
            let expected = unit(step * i as f32);
            assert!(dir.dot(expected) > 0.999);
            assert!((p.size_end - p.size_start * 0.5).abs() < 1e-6);
            assert_eq!(p.shape, ParticleShape::Circle);
        }
    }

    #[test]
    fn test_same_seed_same_burst() {
        let cfg = ParticleConfig::default().enemy_explosion;
        let a = enemy_explosion(ORIGIN, [1, 2, 3], &cfg, &mut Pcg32::seed_from_u64(42));
        let b = enemy_explosion(ORIGIN, [1, 2, 3], &cfg, &mut Pcg32::seed_from_u64(42));
        assert_eq!(a.len(), b.len());
        assert!(a.iter().zip(&b).all(|(x, y)| x.vel == y.vel && x.lifetime == y.lifetime));
    }
}
