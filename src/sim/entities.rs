//! Enemies, projectiles and powerups
//!
//! Each entity keeps a copy of its config section so it can update and
//! answer off-screen queries without reaching back into the world.

use std::f32::consts::TAU;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::{EnemyConfig, MovementPattern, PowerupConfig, ProjectileConfig};

/// An enemy drifting leftward, optionally weaving on a sine wave
#[derive(Debug, Clone)]
pub struct Enemy {
    cfg: EnemyConfig,
    pub pos: Vec2,
    pub pattern: MovementPattern,
    /// Center line of the sine oscillation
    pub base_y: f32,
    pub time_alive: f32,
}

impl Enemy {
    pub fn new(pos: Vec2, pattern: MovementPattern, cfg: EnemyConfig) -> Self {
        Self {
            cfg,
            pos,
            pattern,
            base_y: pos.y,
            time_alive: 0.0,
        }
    }

    /// Collision radius and half-extent
    pub fn radius(&self) -> f32 {
        self.cfg.size
    }

    pub fn update(&mut self, dt: f32) {
        self.pos.x -= self.cfg.speed * dt;
        self.time_alive += dt;
        if self.pattern == MovementPattern::Sine {
            self.pos.y = self.base_y
                + self.cfg.sine_amplitude * (self.cfg.sine_frequency * self.time_alive * TAU).sin();
        }
    }

    /// Past the left edge
    pub fn is_off_screen(&self) -> bool {
        self.pos.x < -self.cfg.size
    }
}

/// A laser bolt moving rightward
#[derive(Debug, Clone)]
pub struct Projectile {
    cfg: ProjectileConfig,
    screen_width: f32,
    pub pos: Vec2,
}

impl Projectile {
    pub fn new(pos: Vec2, cfg: ProjectileConfig, screen_width: f32) -> Self {
        Self {
            cfg,
            screen_width,
            pos,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.pos.x += self.cfg.speed * dt;
    }

    /// Past the right edge
    pub fn is_off_screen(&self) -> bool {
        self.pos.x > self.screen_width + self.cfg.length
    }

    /// Half length and half width of the bolt
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.cfg.length / 2.0, self.cfg.width / 2.0)
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerupKind {
    Speed,
}

impl PowerupKind {
    /// Name shown by the HUD
    pub fn name(&self) -> &'static str {
        match self {
            PowerupKind::Speed => "speed",
        }
    }
}

/// A collectible drifting leftward with a cosmetic pulse
#[derive(Debug, Clone)]
pub struct Powerup {
    cfg: PowerupConfig,
    pub pos: Vec2,
    pub kind: PowerupKind,
    pub time_alive: f32,
}

impl Powerup {
    pub fn new(pos: Vec2, kind: PowerupKind, cfg: PowerupConfig) -> Self {
        Self {
            cfg,
            pos,
            kind,
            time_alive: 0.0,
        }
    }

    pub fn radius(&self) -> f32 {
        self.cfg.size
    }

    pub fn update(&mut self, dt: f32) {
        self.pos.x -= self.cfg.speed * dt;
        self.time_alive += dt;
    }

    pub fn is_off_screen(&self) -> bool {
        self.pos.x < -self.cfg.size
    }

    /// Draw scale oscillating around 1.0
    pub fn pulse(&self) -> f32 {
        1.0 + self.cfg.pulse_amount * (self.time_alive * self.cfg.pulse_speed * TAU).sin()
    }
}
