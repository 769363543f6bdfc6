//! Wave spawner: a two-state timer machine
//!
//! `waiting` counts down to the next wave; `active` emits one enemy every
//! `spawn_spacing` seconds until the wave is complete. Waves cycle through
//! the configured table.

use glam::Vec2;

use super::entities::Enemy;
use crate::config::{EnemyConfig, ScreenConfig, WaveConfig, WaveDef};

#[derive(Debug, Clone)]
pub struct WaveSpawner {
    cfg: WaveConfig,
    enemy_cfg: EnemyConfig,
    screen: ScreenConfig,
    pub wave_index: usize,
    /// Countdown; may dip below zero by up to one tick before it is handled
    pub timer: f32,
    pub spawned_in_wave: u32,
    pub wave_active: bool,
    /// Waves finished since the last reset
    pub waves_completed: u32,
    powerup_spawn_due: bool,
}

impl WaveSpawner {
    pub fn new(cfg: WaveConfig, enemy_cfg: EnemyConfig, screen: ScreenConfig) -> Self {
        let timer = cfg.start_delay;
        Self {
            cfg,
            enemy_cfg,
            screen,
            wave_index: 0,
            timer,
            spawned_in_wave: 0,
            wave_active: false,
            waves_completed: 0,
            powerup_spawn_due: false,
        }
    }

    /// Tick the spawner. Returns a new enemy if one spawned this tick.
    pub fn update(&mut self, dt: f32) -> Option<Enemy> {
        self.timer -= dt;

        if !self.wave_active {
            if self.timer <= 0.0 {
                self.wave_active = true;
                // Spawn on the very next tick
                self.timer = 0.0;
                log::info!(
                    "Wave {} starting (table entry {})",
                    self.waves_completed + 1,
                    self.wave_index
                );
            }
            return None;
        }

        if self.timer > 0.0 {
            return None;
        }

        let enemy = self.spawn_enemy();
        self.spawned_in_wave += 1;

        if self.spawned_in_wave >= self.cfg.enemies_per_wave {
            self.finish_wave();
        } else {
            self.timer = self.cfg.spawn_spacing;
        }

        Some(enemy)
    }

    fn finish_wave(&mut self) {
        if self.wave_index == self.cfg.powerup_after_wave {
            self.powerup_spawn_due = true;
        }
        self.wave_active = false;
        self.spawned_in_wave = 0;
        self.waves_completed += 1;
        self.wave_index = (self.wave_index + 1) % self.cfg.waves.len();
        self.timer = self.cfg.pause;
        log::debug!(
            "Wave {} complete, next table entry {}",
            self.waves_completed,
            self.wave_index
        );
    }

    /// The wave definition currently being (or about to be) spawned
    pub fn current_wave(&self) -> WaveDef {
        self.cfg.waves[self.wave_index]
    }

    /// Build an enemy for the current wave just beyond the right edge
    pub fn spawn_enemy(&self) -> Enemy {
        let wave = self.current_wave();
        let pos = Vec2::new(
            self.screen.width + self.enemy_cfg.size,
            self.screen.height * wave.lane,
        );
        Enemy::new(pos, wave.pattern, self.enemy_cfg)
    }

    /// Consume the one-shot powerup signal
    pub fn take_powerup_due(&mut self) -> bool {
        std::mem::take(&mut self.powerup_spawn_due)
    }

    pub fn reset(&mut self) {
        self.wave_index = 0;
        self.timer = self.cfg.start_delay;
        self.spawned_in_wave = 0;
        self.wave_active = false;
        self.waves_completed = 0;
        self.powerup_spawn_due = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MovementPattern;

    const DT: f32 = 1.0 / 60.0;

    fn spawner() -> WaveSpawner {
        WaveSpawner::new(
            WaveConfig::default(),
            EnemyConfig::default(),
            ScreenConfig::default(),
        )
    }

    /// Advance by whole frames covering `seconds`, collecting spawns
    fn run(s: &mut WaveSpawner, seconds: f32) -> Vec<Enemy> {
        let frames = (seconds * 60.0) as usize;
        (0..frames).filter_map(|_| s.update(DT)).collect()
    }

    #[test]
    fn test_no_spawn_during_initial_delay() {
        let mut s = spawner();
        assert!(run(&mut s, 2.9).is_empty());
    }

    #[test]
    fn test_first_spawn_after_delay() {
        let mut s = spawner();
        assert!(!run(&mut s, 3.1).is_empty());
    }

    #[test]
    fn test_first_wave_spawns_exactly_five() {
        let mut s = spawner();
        let enemies = run(&mut s, 6.0);
        assert_eq!(enemies.len(), 5);
        assert!(!s.wave_active);
    }

    #[test]
    fn test_pause_between_waves() {
        let mut s = spawner();
        let mut collected = 0;
        for _ in 0..600 {
            if s.update(DT).is_some() {
                collected += 1;
            }
            if collected == 5 {
                break;
            }
        }
        assert_eq!(collected, 5);
        assert!(!s.wave_active);
        assert!(run(&mut s, 1.0).is_empty());
    }

    #[test]
    fn test_waves_wrap_after_three() {
        let mut s = spawner();
        let mut spawned = 0;
        while s.waves_completed < 3 {
            if s.update(DT).is_some() {
                spawned += 1;
            }
        }
        assert_eq!(spawned, 15);
        assert_eq!(s.wave_index, 0);
        assert!(!s.wave_active);
    }

    #[test]
    fn test_at_most_one_enemy_per_update() {
        let mut s = spawner();
        // One enormous step activates the wave but spawns nothing
        assert!(s.update(100.0).is_none());
        assert!(s.wave_active);
        // Further enormous steps still hand out a single enemy each
        assert!(s.update(100.0).is_some());
        assert!(s.update(100.0).is_some());
        assert_eq!(s.spawned_in_wave, 2);
    }

    #[test]
    fn test_wave_lanes_and_patterns() {
        let mut s = spawner();
        let screen = ScreenConfig::default();
        let first = run(&mut s, 3.1);
        assert!((first[0].pos.y - screen.height * 0.75).abs() < 1.0);
        assert_eq!(first[0].pattern, MovementPattern::Straight);
        assert_eq!(first[0].pos.x, screen.width + EnemyConfig::default().size);

        s.wave_index = 1;
        assert!((s.spawn_enemy().pos.y - screen.height * 0.25).abs() < 1.0);

        s.wave_index = 2;
        let e = s.spawn_enemy();
        assert!((e.pos.y - screen.height * 0.5).abs() < 1.0);
        assert_eq!(e.pattern, MovementPattern::Sine);
        assert_eq!(e.base_y, e.pos.y);
    }

    #[test]
    fn test_powerup_due_after_last_wave_only() {
        let mut s = spawner();
        while s.waves_completed < 2 {
            s.update(DT);
        }
        assert!(!s.take_powerup_due());
        while s.waves_completed < 3 {
            s.update(DT);
        }
        assert!(s.take_powerup_due());
        assert!(!s.take_powerup_due());
    }

    #[test]
    fn test_reset() {
        let mut s = spawner();
        run(&mut s, 4.0);
        s.reset();
        assert_eq!(s.wave_index, 0);
        assert_eq!(s.timer, 3.0);
        assert_eq!(s.spawned_in_wave, 0);
        assert!(!s.wave_active);
        assert!(!s.take_powerup_due());
    }
}
