//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied dt only, no clocks
//! - One seeded RNG owned by the world
//! - Stable iteration order (insertion order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod effects;
pub mod entities;
pub mod explosions;
pub mod hud;
pub mod particles;
pub mod player;
pub mod popups;
pub mod scoring;
pub mod spawner;
pub mod starfield;
pub mod state;
pub mod tick;

pub use autopilot::autopilot;
pub use collision::{circle_circle, point_in_circle};
pub use effects::{ScreenFlash, ScreenShake};
pub use entities::{Enemy, Powerup, PowerupKind, Projectile};
pub use explosions::{enemy_explosion, player_explosion, powerup_burst};
pub use hud::HudState;
pub use particles::{Particle, ParticleShape, ParticleSystem};
pub use player::Player;
pub use popups::{ScorePopup, ScorePopups};
pub use scoring::ScoringSystem;
pub use spawner::WaveSpawner;
pub use starfield::{Star, Starfield};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
