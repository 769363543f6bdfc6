//! Headless B.O.R.K. driver
//!
//! Runs the simulation under the demo pilot with a fixed-timestep
//! accumulator, logs gameplay events and prints the final HUD as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use bork::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use bork::renderer::hud_snapshot;
use bork::sim::{GameEvent, GameState, autopilot, tick};
use bork::{GameConfig, QualityPreset};

#[derive(Parser, Debug)]
#[command(name = "bork")]
#[command(about = "Run the B.O.R.K. simulation headless under the demo pilot")]
struct Cli {
    /// JSON config override (missing fields keep their defaults)
    config: Option<PathBuf>,
    /// Simulated seconds to run
    #[arg(long, default_value_t = 60.0, value_parser = parse_seconds)]
    seconds: f32,
    /// World RNG seed
    #[arg(long, default_value_t = 0xB0B)]
    seed: u64,
    /// Simulated host frame rate; differs from the tick rate on purpose
    #[arg(long, default_value_t = 60.0, value_parser = parse_fps)]
    fps: f32,
    /// Quality preset: low, medium or high
    #[arg(long, value_parser = parse_quality)]
    quality: Option<QualityPreset>,
}

fn parse_seconds(s: &str) -> Result<f32, String> {
    match s.parse::<f32>() {
        Ok(v) if v >= 0.0 => Ok(v),
        Ok(_) => Err("must be non-negative".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

fn parse_fps(s: &str) -> Result<f32, String> {
    match s.parse::<f32>() {
        Ok(v) if v > 0.0 && v.is_finite() => Ok(v),
        Ok(_) => Err("must be positive".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

fn parse_quality(s: &str) -> Result<QualityPreset, String> {
    QualityPreset::parse(s).ok_or_else(|| format!("unknown quality preset '{}'", s))
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            GameConfig::from_json(&json).with_context(|| format!("loading {}", path.display()))?
        }
        None => GameConfig::default(),
    };
    if let Some(preset) = cli.quality {
        config.apply_preset(preset);
    }
    Ok(config)
}

/// Drive `state` until it has advanced `target_ticks` simulation steps,
/// feeding host frames of `frame_dt` seconds. Returns the kill count.
fn run(state: &mut GameState, frame_dt: f32, target_ticks: u64) -> u32 {
    let frame_dt = frame_dt.min(MAX_FRAME_DT);
    let start_tick = state.time_ticks;
    let mut accumulator = 0.0f32;
    let mut kills = 0;

    while state.time_ticks - start_tick < target_ticks {
        accumulator += frame_dt;

        let mut substeps = 0;
        while accumulator >= SIM_DT
            && substeps < MAX_SUBSTEPS
            && state.time_ticks - start_tick < target_ticks
        {
            let input = autopilot(state);
            tick(state, &input, SIM_DT);
            accumulator -= SIM_DT;
            substeps += 1;

            for event in &state.events {
                match event {
                    GameEvent::EnemyKilled { .. } => kills += 1,
                    GameEvent::WaveStarted { wave } => log::info!("Wave {} incoming", wave),
                    GameEvent::GameOver { score } => log::info!("Game over at {}", score),
                    other => log::debug!("{:?}", other),
                }
            }
        }
        // Drop time we could not catch up on
        if substeps == MAX_SUBSTEPS {
            accumulator = accumulator.min(SIM_DT);
        }
    }
    kills
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    log::info!("B.O.R.K. (headless) starting with seed {:#x}", cli.seed);

    let mut state = GameState::new(config, cli.seed)?;
    let target_ticks = (cli.seconds / SIM_DT).round() as u64;
    let kills = run(&mut state, 1.0 / cli.fps, target_ticks);

    log::info!(
        "Finished after {} ticks, {} kills",
        state.time_ticks,
        kills
    );
    let hud = hud_snapshot(&state);
    println!("{}", serde_json::to_string_pretty(&hud)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["bork"]).unwrap();
        assert_eq!(cli.seconds, 60.0);
        assert_eq!(cli.seed, 0xB0B);
        assert_eq!(cli.fps, 60.0);
        assert!(cli.config.is_none());
        assert!(cli.quality.is_none());
    }

    #[test]
    fn test_cli_parses_all_options() {
        let cli = Cli::try_parse_from([
            "bork", "custom.json", "--seconds", "5", "--seed", "7", "--fps", "30", "--quality",
            "low",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.json")));
        assert_eq!(cli.seconds, 5.0);
        assert_eq!(cli.seed, 7);
        assert_eq!(cli.fps, 30.0);
        assert_eq!(cli.quality, Some(QualityPreset::Low));
    }

    #[test]
    fn test_cli_rejects_bad_values() {
        assert!(Cli::try_parse_from(["bork", "--seconds", "-1"]).is_err());
        assert!(Cli::try_parse_from(["bork", "--fps", "0"]).is_err());
        assert!(Cli::try_parse_from(["bork", "--quality", "ultra"]).is_err());
        assert!(Cli::try_parse_from(["bork", "--bogus"]).is_err());
    }

    #[test]
    fn test_run_covers_requested_time_at_low_fps() {
        // 2 fps frames exceed both the frame clamp and the substep cap
        let mut state = GameState::new(GameConfig::default(), 1).unwrap();
        run(&mut state, 0.5, 600);
        assert_eq!(state.time_ticks, 600);
    }

    #[test]
    fn test_run_at_tick_rate() {
        let mut state = GameState::new(GameConfig::default(), 1).unwrap();
        run(&mut state, SIM_DT, 120);
        assert_eq!(state.time_ticks, 120);
    }
}
