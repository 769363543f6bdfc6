//! Demo pilot
//!
//! Produces input for attract mode and headless runs: line up with the
//! nearest enemy ahead of the ship and keep firing. With nothing to shoot it
//! goes after a powerup, otherwise it drifts back to the start lane.

use super::state::{GamePhase, GameState};
use super::tick::TickInput;

/// Vertical distance treated as "lined up"
const DEADBAND: f32 = 4.0;

pub fn autopilot(state: &GameState) -> TickInput {
    if state.phase == GamePhase::GameOver {
        return TickInput {
            restart: true,
            ..Default::default()
        };
    }

    let player = &state.player;
    let nearest_enemy = state
        .enemies
        .iter()
        .filter(|e| e.pos.x > player.pos.x)
        .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x))
        .map(|e| e.pos.y);
    let nearest_powerup = state
        .powerups
        .iter()
        .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x))
        .map(|p| p.pos.y);

    let target_y = nearest_enemy
        .or(nearest_powerup)
        .unwrap_or(state.config.player.start_y);
    let error = target_y - player.pos.y;

    TickInput {
        up: error > DEADBAND,
        down: error < -DEADBAND,
        fire: nearest_enemy.is_some(),
        ..Default::default()
    }
}
