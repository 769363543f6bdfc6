//! Parallax scrolling starfield
//!
//! Stars never die: when one scrolls past the left edge it reappears just
//! beyond the right edge at a new random height.

use rand::Rng;

use glam::Vec2;

use crate::config::{ScreenConfig, StarfieldConfig};

/// Random extra distance past the right edge for a wrapped star
const WRAP_JITTER: f32 = 20.0;

#[derive(Debug, Clone)]
pub struct Star {
    pub pos: Vec2,
    pub speed: f32,
    pub size: f32,
    pub alpha: u8,
}

#[derive(Debug, Clone)]
pub struct Starfield {
    screen: ScreenConfig,
    pub stars: Vec<Star>,
}

impl Starfield {
    /// Scatter every layer's stars uniformly over the screen
    pub fn new(cfg: &StarfieldConfig, screen: ScreenConfig, rng: &mut impl Rng) -> Self {
        let mut stars = Vec::with_capacity(cfg.layers.iter().map(|l| l.count as usize).sum());
        for layer in &cfg.layers {
            for _ in 0..layer.count {
                stars.push(Star {
                    pos: Vec2::new(
                        rng.random_range(0.0..=screen.width),
                        rng.random_range(0.0..=screen.height),
                    ),
                    speed: layer.speed,
                    size: layer.size,
                    alpha: layer.alpha,
                });
            }
        }
        Self { screen, stars }
    }

    pub fn update(&mut self, dt: f32, rng: &mut impl Rng) {
        for star in &mut self.stars {
            star.pos.x -= star.speed * dt;
            if star.pos.x < 0.0 {
                star.pos.x = self.screen.width + rng.random_range(0.0..=WRAP_JITTER);
                star.pos.y = rng.random_range(0.0..=self.screen.height);
            }
        }
    }
}
