//! Score, combo and multiplier tracking
//!
//! The combo state is implicit in `has_killed`, `time_since_kill`, `combo`
//! and `multiplier`. Kills inside the combo window chain; a long enough gap
//! hard-resets the multiplier back to 1.0.

use crate::config::ScoringConfig;

#[derive(Debug, Clone)]
pub struct ScoringSystem {
    cfg: ScoringConfig,
    pub score: u64,
    pub multiplier: f32,
    pub combo: u32,
    pub time_since_kill: f32,
    pub has_killed: bool,
}

impl ScoringSystem {
    pub fn new(cfg: ScoringConfig) -> Self {
        Self {
            cfg,
            score: 0,
            multiplier: 1.0,
            combo: 0,
            time_since_kill: 0.0,
            has_killed: false,
        }
    }

    /// Register a kill and return the points it earned
    pub fn register_kill(&mut self, base_points: u32) -> u64 {
        if self.has_killed && self.time_since_kill <= self.cfg.combo_window {
            self.combo += 1;
        } else {
            self.combo = 1;
        }

        let multiplier = self.multiplier_for(self.combo);
        self.multiplier = multiplier as f32;
        self.has_killed = true;
        self.time_since_kill = 0.0;
        let points = (base_points as f64 * multiplier).floor() as u64;
        self.score += points;
        points
    }

    /// Multiplier earned by a chain of `combo` kills. Derived from the chain
    /// length rather than accumulated, so long chains do not drift.
    fn multiplier_for(&self, combo: u32) -> f64 {
        let steps = combo.saturating_sub(1) as f64;
        (1.0 + steps * self.cfg.multiplier_increment as f64).min(self.cfg.multiplier_max as f64)
    }

    /// Reset multiplier and combo once the decay delay passes without a kill
    pub fn update(&mut self, dt: f32) {
        if !self.has_killed {
            return;
        }
        self.time_since_kill += dt;
        if self.time_since_kill > self.cfg.decay_delay {
            self.multiplier = 1.0;
            self.combo = 0;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.cfg);
    }
}
