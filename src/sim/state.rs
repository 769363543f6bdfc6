//! Game state and lifecycle
//!
//! Everything one run needs lives on [`GameState`]. All randomness flows
//! through a single seeded RNG so equal seeds and inputs replay identically.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::effects::{ScreenFlash, ScreenShake};
use super::entities::{Enemy, Powerup, PowerupKind, Projectile};
use super::hud::HudState;
use super::particles::ParticleSystem;
use super::player::Player;
use super::popups::ScorePopups;
use super::scoring::ScoringSystem;
use super::spawner::WaveSpawner;
use super::starfield::Starfield;
use crate::config::GameConfig;
use crate::error::Result;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Out of lives; waiting for a restart
    GameOver,
}

/// Gameplay events raised during the last tick, for hosts that want to
/// react (sound cues, analytics) without diffing state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    WaveStarted { wave: u32 },
    EnemyKilled { points: u64, combo: u32 },
    PlayerHit { lives_left: u32 },
    PowerupSpawned,
    PowerupCollected { kind: PowerupKind, applied: bool },
    GameOver { score: u64 },
    Restarted,
}

/// Complete world state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub lives: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    pub projectiles: Vec<Projectile>,
    pub enemies: Vec<Enemy>,
    pub powerups: Vec<Powerup>,
    /// Seconds until an earned powerup appears
    pub powerup_spawn_timer: Option<f32>,
    pub spawner: WaveSpawner,
    pub scoring: ScoringSystem,
    pub starfield: Starfield,
    pub particles: ParticleSystem,
    pub flash: Option<ScreenFlash>,
    pub shake: Option<ScreenShake>,
    pub popups: ScorePopups,
    pub hud: HudState,
    /// Events raised by the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with the given configuration and seed. Fails if the
    /// configuration does not validate.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let mut rng = Pcg32::seed_from_u64(seed);
        let starfield = Starfield::new(&config.starfield, config.screen, &mut rng);

        let state = Self {
            seed,
            rng,
            phase: GamePhase::Playing,
            lives: config.starting_lives,
            time_ticks: 0,
            player: Player::at_start(config.player, config.screen),
            projectiles: Vec::new(),
            enemies: Vec::new(),
            powerups: Vec::new(),
            powerup_spawn_timer: None,
            spawner: WaveSpawner::new(config.waves.clone(), config.enemy, config.screen),
            scoring: ScoringSystem::new(config.scoring),
            starfield,
            particles: ParticleSystem::new(config.particles.pool_size),
            flash: None,
            shake: None,
            popups: ScorePopups::new(config.hud.popup_duration, config.hud.popup_rise_speed),
            hud: HudState::new(config.hud.clone()),
            events: Vec::new(),
            config,
        };

        log::info!(
            "New game (seed: {}, lives: {}, quality: {})",
            seed,
            state.lives,
            state.config.quality.as_str()
        );
        Ok(state)
    }

    /// Re-initialize everything for a new game. The RNG keeps running so a
    /// restarted game does not replay the previous one.
    pub fn reset(&mut self) {
        let config = &self.config;
        self.phase = GamePhase::Playing;
        self.lives = config.starting_lives;
        self.player = Player::at_start(config.player, config.screen);
        self.projectiles.clear();
        self.enemies.clear();
        self.powerups.clear();
        self.powerup_spawn_timer = None;
        self.spawner.reset();
        self.scoring.reset();
        self.starfield = Starfield::new(&config.starfield, config.screen, &mut self.rng);
        self.particles.clear();
        self.flash = None;
        self.shake = None;
        self.popups = ScorePopups::new(config.hud.popup_duration, config.hud.popup_rise_speed);
        self.hud.reset();
        log::info!("Game reset (seed: {}, lives: {})", self.seed, self.lives);
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Fire a projectile from the ship's nose if the cooldown allows
    pub fn try_shoot(&mut self) -> bool {
        if !self.player.can_shoot() {
            return false;
        }
        self.projectiles.push(Projectile::new(
            self.player.nose(),
            self.config.projectile,
            self.config.screen.width,
        ));
        self.player.reset_shoot_timer();
        true
    }

    /// Active powerup names for the HUD
    pub fn active_powerup_names(&self) -> Vec<&'static str> {
        self.player
            .active_powerups()
            .iter()
            .map(PowerupKind::name)
            .collect()
    }
}
