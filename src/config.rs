//! Game configuration
//!
//! Every tunable number lives here. Components receive a copy of their
//! section when they are constructed, so tests can override any value
//! without touching global state. All sections deserialize with defaults,
//! so a JSON override only needs to name the fields it changes.
//!
//! Coordinates are in pixels with the origin at the bottom-left corner and
//! y growing upward.

use serde::{Deserialize, Serialize};

use crate::Rgb;
use crate::error::{ConfigError, Result};

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Maximum live particles for this preset
    pub fn max_particles(&self) -> usize {
        match self {
            QualityPreset::Low => 100,
            QualityPreset::Medium => 500,
            QualityPreset::High => 2000,
        }
    }

    /// Star count multiplier (1.0 = default density)
    pub fn star_density(&self) -> f32 {
        match self {
            QualityPreset::Low => 0.5,
            QualityPreset::Medium => 1.0,
            QualityPreset::High => 1.5,
        }
    }
}

/// Viewport dimensions and the frame rate friction is calibrated against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: f32,
    pub height: f32,
    /// Friction is expressed per frame at this rate
    pub reference_fps: f32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 540.0,
            reference_fps: 60.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Pixels/sec²
    pub acceleration: f32,
    /// Velocity multiplier per reference frame
    pub friction: f32,
    /// Pixels/sec
    pub max_speed: f32,
    /// Half-width of the ship, also its collision radius
    pub ship_size: f32,
    pub start_x: f32,
    pub start_y: f32,
    /// Seconds between shots
    pub shoot_cooldown: f32,
    /// Seconds of invulnerability after a respawn
    pub respawn_invulnerability: f32,
    /// Blinks per second while invulnerable
    pub blink_rate: f32,
    /// Speed multiplier granted by the speed powerup
    pub speed_boost_multiplier: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            acceleration: 600.0,
            friction: 0.88,
            max_speed: 350.0,
            ship_size: 20.0,
            start_x: 100.0,
            start_y: 270.0,
            shoot_cooldown: 0.18,
            respawn_invulnerability: 2.0,
            blink_rate: 10.0,
            speed_boost_multiplier: 1.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    pub speed: f32,
    pub length: f32,
    pub width: f32,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            speed: 700.0,
            length: 16.0,
            width: 3.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    /// Half-size of the diamond, also its collision radius
    pub size: f32,
    pub speed: f32,
    /// Vertical swing of the sine pattern (pixels)
    pub sine_amplitude: f32,
    /// Oscillations per second of the sine pattern
    pub sine_frequency: f32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            size: 16.0,
            speed: 180.0,
            sine_amplitude: 60.0,
            sine_frequency: 0.8,
        }
    }
}

/// Movement pattern of an enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementPattern {
    Straight,
    Sine,
}

/// One entry of the cyclic wave table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveDef {
    /// Spawn height as a fraction of the screen height
    pub lane: f32,
    pub pattern: MovementPattern,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    /// Seconds before the very first wave
    pub start_delay: f32,
    pub enemies_per_wave: u32,
    /// Seconds between enemies inside a wave
    pub spawn_spacing: f32,
    /// Seconds between the end of one wave and the start of the next
    pub pause: f32,
    /// Played in order, then repeated
    pub waves: Vec<WaveDef>,
    /// Completing the wave at this table index schedules a powerup
    pub powerup_after_wave: usize,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            start_delay: 3.0,
            enemies_per_wave: 5,
            spawn_spacing: 0.3,
            pause: 2.0,
            waves: vec![
                WaveDef {
                    lane: 0.75,
                    pattern: MovementPattern::Straight,
                },
                WaveDef {
                    lane: 0.25,
                    pattern: MovementPattern::Straight,
                },
                WaveDef {
                    lane: 0.5,
                    pattern: MovementPattern::Sine,
                },
            ],
            powerup_after_wave: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerupConfig {
    /// Radius, also the collision radius
    pub size: f32,
    pub speed: f32,
    /// Seconds between the wave that earns a powerup and its appearance
    pub spawn_delay: f32,
    /// Spawn height as a fraction of the screen height
    pub spawn_lane: f32,
    /// Pulses per second
    pub pulse_speed: f32,
    /// Relative size swing of the pulse
    pub pulse_amount: f32,
}

impl Default for PowerupConfig {
    fn default() -> Self {
        Self {
            size: 14.0,
            speed: 100.0,
            spawn_delay: 1.0,
            spawn_lane: 0.5,
            pulse_speed: 2.0,
            pulse_amount: 0.15,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub points_basic_enemy: u32,
    /// Max seconds between kills for them to chain
    pub combo_window: f32,
    /// Seconds without a kill before multiplier and combo reset
    pub decay_delay: f32,
    pub multiplier_increment: f32,
    pub multiplier_max: f32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            points_basic_enemy: 100,
            combo_window: 2.0,
            decay_delay: 3.0,
            multiplier_increment: 0.1,
            multiplier_max: 5.0,
        }
    }
}

/// Random ranges for one kind of particle burst (inclusive bounds)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BurstConfig {
    pub count: (u32, u32),
    pub speed: (f32, f32),
    pub lifetime: (f32, f32),
    pub size: (f32, f32),
    pub color_end: Rgb,
}

impl BurstConfig {
    fn validate(&self, field: &'static str) -> Result<()> {
        let ordered = self.count.0 <= self.count.1
            && self.speed.0 <= self.speed.1
            && self.lifetime.0 <= self.lifetime.1
            && self.size.0 <= self.size.1;
        if !ordered {
            return Err(ConfigError::invalid(field, "range minimum exceeds maximum"));
        }
        if self.lifetime.0 <= 0.0 {
            return Err(ConfigError::invalid(field, "particle lifetime must be positive"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Live particle cap; the oldest particles are dropped first
    pub pool_size: usize,
    pub enemy_explosion: BurstConfig,
    pub player_explosion: BurstConfig,
    pub powerup_burst: BurstConfig,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            pool_size: QualityPreset::default().max_particles(),
            enemy_explosion: BurstConfig {
                count: (12, 20),
                speed: (80.0, 220.0),
                lifetime: (0.3, 0.7),
                size: (3.0, 6.0),
                color_end: [255, 200, 50],
            },
            player_explosion: BurstConfig {
                count: (40, 60),
                speed: (100.0, 350.0),
                lifetime: (0.6, 1.2),
                size: (4.0, 8.0),
                color_end: [255, 255, 255],
            },
            powerup_burst: BurstConfig {
                count: (16, 24),
                speed: (120.0, 200.0),
                lifetime: (0.4, 0.7),
                size: (3.0, 5.0),
                color_end: [255, 255, 255],
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub flash_color: Rgb,
    /// Full-brightness phase (seconds)
    pub flash_duration: f32,
    /// Fade-out phase (seconds)
    pub flash_fade: f32,
    /// Peak shake offset (pixels)
    pub shake_intensity: f32,
    pub shake_duration: f32,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            flash_color: [255, 255, 255],
            flash_duration: 0.08,
            flash_fade: 0.25,
            shake_intensity: 8.0,
            shake_duration: 0.35,
        }
    }
}

/// One parallax layer of the starfield
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarLayer {
    pub count: u32,
    pub speed: f32,
    pub size: f32,
    pub alpha: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    /// Back to front
    pub layers: Vec<StarLayer>,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            layers: vec![
                StarLayer {
                    count: 60,
                    speed: 40.0,
                    size: 1.5,
                    alpha: 100,
                },
                StarLayer {
                    count: 30,
                    speed: 100.0,
                    size: 2.5,
                    alpha: 200,
                },
            ],
        }
    }
}

/// A combo count that shows a banner when reached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComboMilestone {
    pub combo: u32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    pub milestones: Vec<ComboMilestone>,
    /// Seconds a milestone banner stays up
    pub milestone_duration: f32,
    /// Trailing seconds over which the banner fades
    pub milestone_fade: f32,
    /// Multiplier readout pulses per second
    pub multi_pulse_speed: f32,
    pub multi_pulse_amount: f32,
    /// Lifetime of a floating score popup
    pub popup_duration: f32,
    /// Pixels/sec
    pub popup_rise_speed: f32,
}

impl Default for HudConfig {
    fn default() -> Self {
        let milestone = |combo, text: &str| ComboMilestone {
            combo,
            text: text.to_string(),
        };
        Self {
            milestones: vec![
                milestone(5, "NICE!"),
                milestone(10, "GREAT!"),
                milestone(20, "UNSTOPPABLE!"),
            ],
            milestone_duration: 1.5,
            milestone_fade: 0.5,
            multi_pulse_speed: 2.0,
            multi_pulse_amount: 0.3,
            popup_duration: 0.8,
            popup_rise_speed: 40.0,
        }
    }
}

impl HudConfig {
    /// Banner text for a combo count, if it is a milestone
    pub fn milestone_for(&self, combo: u32) -> Option<&str> {
        self.milestones
            .iter()
            .find(|m| m.combo == combo)
            .map(|m| m.text.as_str())
    }
}

/// Entity colors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgb,
    pub player: Rgb,
    pub laser: Rgb,
    pub enemy: Rgb,
    pub powerup: Rgb,
    pub star: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [5, 5, 15],
            player: [0, 200, 255],
            laser: [255, 80, 80],
            enemy: [255, 60, 120],
            powerup: [255, 220, 0],
            star: [255, 255, 255],
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub quality: QualityPreset,
    pub starting_lives: u32,
    pub screen: ScreenConfig,
    pub player: PlayerConfig,
    pub projectile: ProjectileConfig,
    pub enemy: EnemyConfig,
    pub waves: WaveConfig,
    pub powerup: PowerupConfig,
    pub scoring: ScoringConfig,
    pub particles: ParticleConfig,
    pub effects: EffectsConfig,
    pub starfield: StarfieldConfig,
    pub hud: HudConfig,
    pub palette: Palette,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            starting_lives: 3,
            screen: ScreenConfig::default(),
            player: PlayerConfig::default(),
            projectile: ProjectileConfig::default(),
            enemy: EnemyConfig::default(),
            waves: WaveConfig::default(),
            powerup: PowerupConfig::default(),
            scoring: ScoringConfig::default(),
            particles: ParticleConfig::default(),
            effects: EffectsConfig::default(),
            starfield: StarfieldConfig::default(),
            hud: HudConfig::default(),
            palette: Palette::default(),
        }
    }
}

impl GameConfig {
    /// Default configuration with a quality preset applied
    pub fn with_quality(preset: QualityPreset) -> Self {
        let mut config = Self::default();
        config.apply_preset(preset);
        config
    }

    /// Apply a quality preset (updates quality-dependent settings)
    pub fn apply_preset(&mut self, preset: QualityPreset) {
        self.quality = preset;
        self.particles.pool_size = preset.max_particles();
        for layer in &mut self.starfield.layers {
            layer.count = (layer.count as f32 * preset.star_density()).round() as u32;
        }
    }

    /// Parse a (possibly partial) JSON document and validate the result
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        log::info!(
            "Loaded config (quality: {}, lives: {})",
            config.quality.as_str(),
            config.starting_lives
        );
        Ok(config)
    }

    /// Check every invariant the simulation relies on
    pub fn validate(&self) -> Result<()> {
        if self.starting_lives == 0 {
            return Err(ConfigError::invalid("starting_lives", "must be at least 1"));
        }
        if self.screen.width <= 0.0 || self.screen.height <= 0.0 {
            return Err(ConfigError::invalid("screen", "width and height must be positive"));
        }
        if self.screen.reference_fps <= 0.0 {
            return Err(ConfigError::invalid("screen.reference_fps", "must be positive"));
        }

        let player = &self.player;
        if !(player.friction > 0.0 && player.friction <= 1.0) {
            return Err(ConfigError::invalid("player.friction", "must be in (0, 1]"));
        }
        if player.max_speed <= 0.0 || player.acceleration < 0.0 {
            return Err(ConfigError::invalid(
                "player",
                "max_speed must be positive and acceleration non-negative",
            ));
        }
        if player.ship_size <= 0.0
            || player.ship_size * 2.0 > self.screen.width.min(self.screen.height)
        {
            return Err(ConfigError::invalid("player.ship_size", "ship must fit on screen"));
        }
        if player.speed_boost_multiplier < 1.0 {
            return Err(ConfigError::invalid(
                "player.speed_boost_multiplier",
                "must be at least 1.0",
            ));
        }

        let waves = &self.waves;
        if waves.waves.is_empty() {
            return Err(ConfigError::invalid("waves.waves", "wave table is empty"));
        }
        if waves.enemies_per_wave == 0 {
            return Err(ConfigError::invalid("waves.enemies_per_wave", "must be at least 1"));
        }
        if waves.powerup_after_wave >= waves.waves.len() {
            return Err(ConfigError::invalid(
                "waves.powerup_after_wave",
                format!("index {} outside a table of {}", waves.powerup_after_wave, waves.waves.len()),
            ));
        }
        if waves.waves.iter().any(|w| !(0.0..=1.0).contains(&w.lane)) {
            return Err(ConfigError::invalid("waves.waves", "lanes must be in [0, 1]"));
        }

        let scoring = &self.scoring;
        if scoring.multiplier_max < 1.0 || scoring.multiplier_increment < 0.0 {
            return Err(ConfigError::invalid(
                "scoring",
                "multiplier_max must be >= 1.0 and the increment non-negative",
            ));
        }

        if self.particles.pool_size == 0 {
            return Err(ConfigError::invalid("particles.pool_size", "must be at least 1"));
        }
        self.particles.enemy_explosion.validate("particles.enemy_explosion")?;
        self.particles.player_explosion.validate("particles.player_explosion")?;
        self.particles.powerup_burst.validate("particles.powerup_burst")?;

        if self.effects.flash_duration < 0.0
            || self.effects.flash_fade < 0.0
            || self.effects.shake_duration < 0.0
        {
            return Err(ConfigError::invalid("effects", "durations must be non-negative"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "starting_lives": 5, "player": { "max_speed": 400.0 } }"#)
            .expect("valid config");
        assert_eq!(config.starting_lives, 5);
        assert_eq!(config.player.max_speed, 400.0);
        assert_eq!(config.player.acceleration, PlayerConfig::default().acceleration);
        assert_eq!(config.waves.waves.len(), 3);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_empty_wave_table_rejected() {
        let err = GameConfig::from_json(r#"{ "waves": { "waves": [] } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "waves.waves", .. }));
    }

    #[test]
    fn test_friction_out_of_range_rejected() {
        let mut config = GameConfig::default();
        config.player.friction = 1.5;
        assert!(config.validate().is_err());
        config.player.friction = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_burst_range_rejected() {
        let mut config = GameConfig::default();
        config.particles.enemy_explosion.count = (20, 12);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("particles.enemy_explosion"));
    }

    #[test]
    fn test_quality_preset_sets_pool_size() {
        let low = GameConfig::with_quality(QualityPreset::Low);
        assert_eq!(low.particles.pool_size, 100);
        assert_eq!(low.starfield.layers[0].count, 30);

        let high = GameConfig::with_quality(QualityPreset::High);
        assert_eq!(high.particles.pool_size, 2000);
        assert_eq!(high.starfield.layers[1].count, 45);
    }

    #[test]
    fn test_quality_preset_scales_custom_star_layers() {
        let mut config = GameConfig::from_json(
            r#"{"starfield": {"layers": [{"count": 10, "speed": 20.0, "size": 1.0, "alpha": 100}]}}"#,
        )
        .unwrap();
        config.apply_preset(QualityPreset::Low);
        assert_eq!(config.starfield.layers.len(), 1);
        assert_eq!(config.starfield.layers[0].count, 5);
    }

    #[test]
    fn test_quality_preset_parse() {
        assert_eq!(QualityPreset::parse("MED"), Some(QualityPreset::Medium));
        assert_eq!(QualityPreset::parse("ultra"), None);
    }

    #[test]
    fn test_milestone_lookup() {
        let hud = HudConfig::default();
        assert_eq!(hud.milestone_for(5), Some("NICE!"));
        assert_eq!(hud.milestone_for(6), None);
    }
}
