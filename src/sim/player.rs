//! Player ship with momentum-based 8-directional movement

use std::f32::consts::FRAC_1_SQRT_2;

use glam::Vec2;

use super::entities::PowerupKind;
use super::tick::TickInput;
use crate::config::{PlayerConfig, ScreenConfig};

#[derive(Debug, Clone)]
pub struct Player {
    cfg: PlayerConfig,
    screen: ScreenConfig,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Seconds until the next shot is allowed
    pub shoot_timer: f32,
    /// 1.0 normally; raised by the speed powerup (never stacks)
    pub speed_multiplier: f32,
    /// Seconds of damage immunity left
    pub invulnerable_timer: f32,
}

impl Player {
    pub fn new(pos: Vec2, cfg: PlayerConfig, screen: ScreenConfig) -> Self {
        Self {
            cfg,
            screen,
            pos,
            vel: Vec2::ZERO,
            shoot_timer: 0.0,
            speed_multiplier: 1.0,
            invulnerable_timer: 0.0,
        }
    }

    /// Player at the configured start position
    pub fn at_start(cfg: PlayerConfig, screen: ScreenConfig) -> Self {
        Self::new(Vec2::new(cfg.start_x, cfg.start_y), cfg, screen)
    }

    /// Collision radius
    pub fn radius(&self) -> f32 {
        self.cfg.ship_size
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable_timer > 0.0
    }

    /// Effective top speed including any active boost
    pub fn max_speed(&self) -> f32 {
        self.cfg.max_speed * self.speed_multiplier
    }

    /// Advance timers, apply input acceleration, friction and bounds
    pub fn update(&mut self, dt: f32, input: &TickInput) {
        self.invulnerable_timer = (self.invulnerable_timer - dt).max(0.0);
        self.shoot_timer = (self.shoot_timer - dt).max(0.0);

        let mut accel = Vec2::ZERO;
        if input.right {
            accel.x += self.cfg.acceleration;
        }
        if input.left {
            accel.x -= self.cfg.acceleration;
        }
        if input.up {
            accel.y += self.cfg.acceleration;
        }
        if input.down {
            accel.y -= self.cfg.acceleration;
        }
        // Diagonals get the same magnitude as a single axis
        if accel.x != 0.0 && accel.y != 0.0 {
            accel *= FRAC_1_SQRT_2;
        }

        self.vel += accel * self.speed_multiplier * dt;

        // Friction is defined per reference frame, so scale the exponent by
        // how many reference frames this step covers
        let friction = self.cfg.friction.powf(dt * self.screen.reference_fps);
        self.vel *= friction;

        self.vel = self.vel.clamp_length_max(self.max_speed());

        self.pos += self.vel * dt;

        let half = self.cfg.ship_size;
        self.pos.x = self.pos.x.clamp(half, self.screen.width - half);
        self.pos.y = self.pos.y.clamp(half, self.screen.height - half);
    }

    pub fn can_shoot(&self) -> bool {
        self.shoot_timer <= 0.0
    }

    pub fn reset_shoot_timer(&mut self) {
        self.shoot_timer = self.cfg.shoot_cooldown;
    }

    /// Where projectiles leave the ship
    pub fn nose(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.cfg.ship_size, self.pos.y)
    }

    /// Blink while invulnerable; purely cosmetic
    pub fn is_visible(&self) -> bool {
        if !self.is_invulnerable() {
            return true;
        }
        let phase = (self.invulnerable_timer * self.cfg.blink_rate * 2.0) as u32;
        phase % 2 != 0
    }

    /// Apply a speed boost unless one is already active. Returns whether it applied.
    pub fn apply_speed_boost(&mut self, multiplier: f32) -> bool {
        if self.speed_multiplier > 1.0 {
            return false;
        }
        self.speed_multiplier = multiplier;
        true
    }

    /// Active effects for the HUD
    pub fn active_powerups(&self) -> Vec<PowerupKind> {
        let mut active = Vec::new();
        if self.speed_multiplier > 1.0 {
            active.push(PowerupKind::Speed);
        }
        active
    }

    /// Put the ship back at the start position with a fresh invulnerability window
    pub fn respawn(&mut self) {
        self.pos = Vec2::new(self.cfg.start_x, self.cfg.start_y);
        self.vel = Vec2::ZERO;
        self.invulnerable_timer = self.cfg.respawn_invulnerability;
    }
}
