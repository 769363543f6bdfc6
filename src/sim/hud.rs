//! HUD animation state
//!
//! Layout and text rendering belong to the host. The simulation only keeps
//! the timers that drive the combo milestone banner and the multiplier pulse.

use std::f32::consts::TAU;

use crate::alpha_from_unit;
use crate::config::HudConfig;

#[derive(Debug, Clone)]
pub struct HudState {
    cfg: HudConfig,
    pub milestone_text: Option<String>,
    pub milestone_timer: f32,
    pub multi_pulse_timer: f32,
}

impl HudState {
    pub fn new(cfg: HudConfig) -> Self {
        Self {
            cfg,
            milestone_text: None,
            milestone_timer: 0.0,
            multi_pulse_timer: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32) {
        if self.milestone_timer > 0.0 {
            self.milestone_timer = (self.milestone_timer - dt).max(0.0);
            if self.milestone_timer == 0.0 {
                self.milestone_text = None;
            }
        }
        self.multi_pulse_timer += dt;
    }

    /// Show a banner if `combo` is one of the configured milestones
    pub fn check_milestone(&mut self, combo: u32) -> bool {
        let Some(text) = self.cfg.milestone_for(combo) else {
            return false;
        };
        let text = text.to_string();
        log::debug!("Combo milestone {}: {}", combo, text);
        self.trigger_milestone(text);
        true
    }

    pub fn trigger_milestone(&mut self, text: String) {
        self.milestone_text = Some(text);
        self.milestone_timer = self.cfg.milestone_duration;
    }

    /// Banner text and alpha while a milestone is on screen
    pub fn milestone(&self) -> Option<(&str, u8)> {
        if self.milestone_timer <= 0.0 {
            return None;
        }
        let opacity = if self.cfg.milestone_fade > 0.0 {
            (self.milestone_timer / self.cfg.milestone_fade).min(1.0)
        } else {
            1.0
        };
        self.milestone_text
            .as_deref()
            .map(|text| (text, alpha_from_unit(opacity)))
    }

    /// Pulsing alpha for the multiplier readout; zero while it is hidden
    pub fn multiplier_alpha(&self, multiplier: f32) -> u8 {
        if multiplier <= 1.0 {
            return 0;
        }
        let pulse = (self.multi_pulse_timer * self.cfg.multi_pulse_speed * TAU).sin();
        alpha_from_unit(0.7 + self.cfg.multi_pulse_amount * pulse)
    }

    pub fn reset(&mut self) {
        self.milestone_text = None;
        self.milestone_timer = 0.0;
        self.multi_pulse_timer = 0.0;
    }
}
