//! Simulation tick
//!
//! Advances the world by one step in a fixed order. The order matters: an
//! enemy destroyed by a projectile is gone before the enemy/player pass, so
//! it cannot also damage the player in the same tick.

use glam::Vec2;

use super::collision::{circle_circle, point_in_circle};
use super::effects::{ScreenFlash, ScreenShake};
use super::entities::{Powerup, PowerupKind};
use super::explosions::{enemy_explosion, player_explosion, powerup_burst};
use super::state::{GameEvent, GamePhase, GameState};

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Held fire; shots are rate-limited by the ship's cooldown
    pub fire: bool,
    /// Start a new game (only honored after game over)
    pub restart: bool,
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let dt = if dt < 0.0 {
        log::warn!("Negative dt {} treated as 0", dt);
        0.0
    } else {
        dt
    };
    state.events.clear();

    if state.is_game_over() && input.restart {
        state.reset();
        state.events.push(GameEvent::Restarted);
    }

    update_cosmetics(state, dt);

    if state.phase == GamePhase::Playing {
        update_gameplay(state, input, dt);
    }

    state.time_ticks += 1;
}

/// Systems that keep animating regardless of phase
fn update_cosmetics(state: &mut GameState, dt: f32) {
    state.starfield.update(dt, &mut state.rng);
    state.particles.update(dt);

    if let Some(flash) = &mut state.flash {
        flash.update(dt);
        if flash.is_done() {
            state.flash = None;
        }
    }
    if let Some(shake) = &mut state.shake {
        shake.update(dt, &mut state.rng);
        if shake.is_done() {
            state.shake = None;
        }
    }

    state.scoring.update(dt);
    state.hud.update(dt);
    state.popups.update(dt);
}

fn update_gameplay(state: &mut GameState, input: &TickInput, dt: f32) {
    state.player.update(dt, input);

    for projectile in &mut state.projectiles {
        projectile.update(dt);
    }
    state.projectiles.retain(|p| !p.is_off_screen());

    let was_active = state.spawner.wave_active;
    let spawned = state.spawner.update(dt);
    if !was_active && state.spawner.wave_active {
        state.events.push(GameEvent::WaveStarted {
            wave: state.spawner.waves_completed + 1,
        });
    }
    state.enemies.extend(spawned);

    for enemy in &mut state.enemies {
        enemy.update(dt);
    }
    state.enemies.retain(|e| !e.is_off_screen());

    update_powerup_timer(state, dt);

    for powerup in &mut state.powerups {
        powerup.update(dt);
    }
    state.powerups.retain(|p| !p.is_off_screen());

    if input.fire {
        state.try_shoot();
    }

    resolve_projectile_hits(state);
    resolve_player_hit(state);
    resolve_powerup_pickups(state);
}

/// Turn a completed powerup wave into a delayed powerup spawn
fn update_powerup_timer(state: &mut GameState, dt: f32) {
    if state.spawner.take_powerup_due() {
        state.powerup_spawn_timer = Some(state.config.powerup.spawn_delay);
    }

    let Some(remaining) = state.powerup_spawn_timer else {
        return;
    };
    let remaining = remaining - dt;
    if remaining > 0.0 {
        state.powerup_spawn_timer = Some(remaining);
        return;
    }

    state.powerup_spawn_timer = None;
    let cfg = state.config.powerup;
    let screen = state.config.screen;
    let pos = Vec2::new(screen.width + cfg.size, screen.height * cfg.spawn_lane);
    state.powerups.push(Powerup::new(pos, PowerupKind::Speed, cfg));
    state.events.push(GameEvent::PowerupSpawned);
    log::debug!("Powerup spawned at ({:.0}, {:.0})", pos.x, pos.y);
}

/// Each projectile destroys at most one enemy and each enemy absorbs at most
/// one projectile; pairs are matched greedily in iteration order.
fn resolve_projectile_hits(state: &mut GameState) {
    let mut projectile_hit = vec![false; state.projectiles.len()];
    let mut enemy_hit = vec![false; state.enemies.len()];
    let mut kills = Vec::new();

    for (pi, projectile) in state.projectiles.iter().enumerate() {
        let target = state
            .enemies
            .iter()
            .enumerate()
            .find(|(ei, enemy)| {
                !enemy_hit[*ei] && point_in_circle(projectile.pos, enemy.pos, enemy.radius())
            })
            .map(|(ei, enemy)| (ei, enemy.pos));

        if let Some((ei, pos)) = target {
            projectile_hit[pi] = true;
            enemy_hit[ei] = true;
            kills.push(pos);
        }
    }

    if kills.is_empty() {
        return;
    }

    let mut hits = projectile_hit.into_iter();
    state.projectiles.retain(|_| !hits.next().unwrap_or(false));
    let mut hits = enemy_hit.into_iter();
    state.enemies.retain(|_| !hits.next().unwrap_or(false));

    let base = state.config.scoring.points_basic_enemy;
    for pos in kills {
        let burst = enemy_explosion(
            pos,
            state.config.palette.enemy,
            &state.config.particles.enemy_explosion,
            &mut state.rng,
        );
        state.particles.add(burst);

        let points = state.scoring.register_kill(base);
        state.popups.spawn(pos, points);
        let combo = state.scoring.combo;
        state.hud.check_milestone(combo);
        state.events.push(GameEvent::EnemyKilled { points, combo });
        log::debug!("Enemy destroyed: +{} (combo {})", points, combo);
    }
}

/// The first enemy touching the ship costs a life. The enemy itself survives.
fn resolve_player_hit(state: &mut GameState) {
    if state.player.is_invulnerable() {
        return;
    }

    let player_pos = state.player.pos;
    let player_radius = state.player.radius();
    let hit = state
        .enemies
        .iter()
        .any(|e| circle_circle(e.pos, e.radius(), player_pos, player_radius));
    if !hit {
        return;
    }

    let burst = player_explosion(
        player_pos,
        state.config.palette.player,
        &state.config.particles.player_explosion,
        &mut state.rng,
    );
    state.particles.add(burst);

    let effects = state.config.effects;
    state.flash = Some(ScreenFlash::new(
        effects.flash_color,
        effects.flash_duration,
        effects.flash_fade,
    ));
    state.shake = Some(ScreenShake::new(effects.shake_intensity, effects.shake_duration));

    state.lives = state.lives.saturating_sub(1);
    state.events.push(GameEvent::PlayerHit {
        lives_left: state.lives,
    });

    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver {
            score: state.scoring.score,
        });
        log::info!("Game over! Final score: {}", state.scoring.score);
    } else {
        state.player.respawn();
        log::debug!("Player hit, {} lives left", state.lives);
    }
}

fn resolve_powerup_pickups(state: &mut GameState) {
    let player_pos = state.player.pos;
    let player_radius = state.player.radius();
    let (collected, remaining): (Vec<Powerup>, Vec<Powerup>) = state
        .powerups
        .drain(..)
        .partition(|p| circle_circle(p.pos, p.radius(), player_pos, player_radius));
    state.powerups = remaining;

    for powerup in collected {
        let applied = match powerup.kind {
            PowerupKind::Speed => state
                .player
                .apply_speed_boost(state.config.player.speed_boost_multiplier),
        };

        let burst = powerup_burst(
            powerup.pos,
            state.config.palette.powerup,
            &state.config.particles.powerup_burst,
            &mut state.rng,
        );
        state.particles.add(burst);
        state.events.push(GameEvent::PowerupCollected {
            kind: powerup.kind,
            applied,
        });
        log::debug!("Collected {} powerup (applied: {})", powerup.kind.name(), applied);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameConfig;
    use crate::config::MovementPattern;
    use crate::sim::entities::{Enemy, Projectile};

    const DT: f32 = 1.0 / 60.0;

    fn new_state() -> GameState {
        GameState::new(GameConfig::default(), 42).unwrap()
    }

    fn enemy_at(state: &GameState, x: f32, y: f32) -> Enemy {
        Enemy::new(Vec2::new(x, y), MovementPattern::Straight, state.config.enemy)
    }

    fn projectile_at(state: &GameState, x: f32, y: f32) -> Projectile {
        Projectile::new(
            Vec2::new(x, y),
            state.config.projectile,
            state.config.screen.width,
        )
    }

    #[test]
    fn test_tick_advances_counter_and_clears_events() {
        let mut state = new_state();
        state.events.push(GameEvent::PowerupSpawned);
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.time_ticks, 1);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_fire_spawns_projectile() {
        let mut state = new_state();
        let input = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        assert_eq!(state.projectiles.len(), 1);
        // Cooldown blocks the next shot
        tick(&mut state, &input, DT);
        assert_eq!(state.projectiles.len(), 1);
    }

    #[test]
    fn test_projectile_hit_removes_pair_once() {
        let mut state = new_state();
        // Two projectiles on the same enemy: only one is consumed
        state.enemies.push(enemy_at(&state, 500.0, 270.0));
        state.projectiles.push(projectile_at(&state, 495.0, 270.0));
        state.projectiles.push(projectile_at(&state, 496.0, 270.0));
        tick(&mut state, &TickInput::default(), DT);

        assert!(state.enemies.is_empty());
        assert_eq!(state.projectiles.len(), 1);
        assert_eq!(state.scoring.score, 100);
        assert_eq!(state.popups.len(), 1);
        assert!(!state.particles.is_empty());
        assert!(matches!(
            state.events.as_slice(),
            [GameEvent::EnemyKilled { points: 100, combo: 1 }]
        ));
    }

    #[test]
    fn test_player_hit_respawns_with_invulnerability() {
        let mut state = new_state();
        let pos = state.player.pos;
        state.player.pos.x += 30.0;
        state.enemies.push(enemy_at(&state, pos.x + 40.0, pos.y));
        tick(&mut state, &TickInput::default(), DT);

        assert_eq!(state.lives, 2);
        assert_eq!(state.player.pos, pos);
        assert_eq!(state.player.vel, Vec2::ZERO);
        assert!(state.player.is_invulnerable());
        assert!(state.flash.is_some());
        assert!(state.shake.is_some());
        // The colliding enemy is not consumed
        assert_eq!(state.enemies.len(), 1);
        assert!(state.events.contains(&GameEvent::PlayerHit { lives_left: 2 }));
    }

    #[test]
    fn test_game_over_freezes_gameplay() {
        let mut state = new_state();
        state.lives = 1;
        let pos = state.player.pos;
        state.enemies.push(enemy_at(&state, pos.x, pos.y));
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.events.contains(&GameEvent::GameOver { score: 0 }));

        let enemy_x = state.enemies[0].pos.x;
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.enemies[0].pos.x, enemy_x);
        assert_eq!(state.lives, 0);
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut state = new_state();
        state.lives = 2;
        let input = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        assert_eq!(state.lives, 2);
        assert!(!state.events.contains(&GameEvent::Restarted));
    }

    #[test]
    fn test_wave_started_event() {
        let mut state = new_state();
        let mut started = Vec::new();
        for _ in 0..200 {
            tick(&mut state, &TickInput::default(), DT);
            started.extend(
                state
                    .events
                    .iter()
                    .filter(|e| matches!(e, GameEvent::WaveStarted { .. }))
                    .cloned(),
            );
        }
        assert_eq!(started, vec![GameEvent::WaveStarted { wave: 1 }]);
    }

    #[test]
    fn test_powerup_spawns_after_delay() {
        let mut state = new_state();
        state.powerup_spawn_timer = Some(0.04);
        for _ in 0..2 {
            tick(&mut state, &TickInput::default(), DT);
        }
        assert!(state.powerups.is_empty());
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.powerups.len(), 1);
        assert_eq!(state.powerup_spawn_timer, None);
        assert!(state.events.contains(&GameEvent::PowerupSpawned));
    }

    #[test]
    fn test_powerup_countdown_starts_on_arming_tick() {
        let mut state = new_state();
        state.spawner.wave_index = state.config.waves.powerup_after_wave;
        state.spawner.wave_active = true;
        state.spawner.timer = 0.0;
        state.spawner.spawned_in_wave = state.config.waves.enemies_per_wave - 1;
        // Keep the wave's last enemy away from the ship
        state.player.invulnerable_timer = 10.0;

        tick(&mut state, &TickInput::default(), DT);
        let remaining = state.powerup_spawn_timer.unwrap();
        assert!((remaining - (state.config.powerup.spawn_delay - DT)).abs() < 1e-6);
    }

    #[test]
    fn test_powerup_spawns_when_delay_elapses() {
        let mut config = GameConfig::default();
        config.powerup.spawn_delay = 2.5 * DT;
        let mut state = GameState::new(config, 42).unwrap();
        state.spawner.wave_index = state.config.waves.powerup_after_wave;
        state.spawner.wave_active = true;
        state.spawner.timer = 0.0;
        state.spawner.spawned_in_wave = state.config.waves.enemies_per_wave - 1;
        state.player.invulnerable_timer = 10.0;

        let mut spawned_on = None;
        for i in 1..=5 {
            tick(&mut state, &TickInput::default(), DT);
            if state.events.contains(&GameEvent::PowerupSpawned) {
                spawned_on = Some(i);
                break;
            }
        }
        assert_eq!(spawned_on, Some(3));
    }

    #[test]
    fn test_flash_and_shake_expire() {
        let mut state = new_state();
        state.flash = Some(ScreenFlash::new([255, 255, 255], 0.05, 0.05));
        state.shake = Some(ScreenShake::new(8.0, 0.1));
        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), DT);
        }
        assert!(state.flash.is_none());
        assert!(state.shake.is_none());
    }
}
