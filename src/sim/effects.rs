//! Screen-level effects: flash overlay and camera shake
//!
//! Both are plain timers. The world drops them once `is_done` reports true.

use glam::Vec2;
use rand::Rng;

use crate::Rgb;

/// Overlay alpha during the full-brightness phase
const FLASH_PEAK_ALPHA: f32 = 180.0;

/// Full-screen color flash: a hold phase followed by a linear fade
#[derive(Debug, Clone)]
pub struct ScreenFlash {
    pub color: Rgb,
    pub duration: f32,
    pub fade: f32,
    pub elapsed: f32,
}

impl ScreenFlash {
    pub fn new(color: Rgb, duration: f32, fade: f32) -> Self {
        Self {
            color,
            duration,
            fade,
            elapsed: 0.0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration + self.fade
    }

    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    /// Overlay alpha for the renderer
    pub fn alpha(&self) -> u8 {
        if self.is_done() {
            return 0;
        }
        if self.elapsed < self.duration {
            return FLASH_PEAK_ALPHA as u8;
        }
        let fade_progress = (self.elapsed - self.duration) / self.fade;
        (FLASH_PEAK_ALPHA * (1.0 - fade_progress)).max(0.0) as u8
    }
}

/// Camera shake whose amplitude decays linearly to zero
#[derive(Debug, Clone)]
pub struct ScreenShake {
    pub intensity: f32,
    pub duration: f32,
    pub elapsed: f32,
    offset: Vec2,
}

impl ScreenShake {
    pub fn new(intensity: f32, duration: f32) -> Self {
        Self {
            intensity,
            duration,
            elapsed: 0.0,
            offset: Vec2::ZERO,
        }
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Current maximum offset on each axis
    pub fn amplitude(&self) -> f32 {
        if self.is_done() {
            return 0.0;
        }
        self.intensity * (1.0 - self.elapsed / self.duration)
    }

    /// Advance the timer and pick a new random offset
    pub fn update(&mut self, dt: f32, rng: &mut impl Rng) {
        self.elapsed += dt;
        let amplitude = self.amplitude();
        self.offset = if amplitude > 0.0 {
            Vec2::new(
                rng.random_range(-amplitude..=amplitude),
                rng.random_range(-amplitude..=amplitude),
            )
        } else {
            Vec2::ZERO
        };
    }

    /// Offset sampled by the last update
    pub fn offset(&self) -> Vec2 {
        if self.is_done() { Vec2::ZERO } else { self.offset }
    }
}
