//! Frame snapshot for the host renderer
//!
//! Reads the world without mutating it and flattens everything visible into
//! primitive sprites. Sprites are listed back to front.

use glam::Vec2;
use serde::Serialize;

use crate::sim::effects::ScreenShake;
use crate::sim::particles::ParticleShape;
use crate::sim::state::{GamePhase, GameState};
use crate::{Rgb, Rgba, with_alpha};

/// Primitive shapes the host knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Shape {
    /// Pointing right (+x)
    Triangle,
    Diamond,
    Circle,
    Rectangle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sprite {
    pub shape: Shape,
    pub pos: Vec2,
    pub half_extents: Vec2,
    pub color: Rgba,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopupSnapshot {
    pub pos: Vec2,
    pub text: String,
    pub alpha: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MilestoneBanner {
    pub text: String,
    pub alpha: u8,
}

/// Everything the HUD overlay shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HudSnapshot {
    pub score: u64,
    pub multiplier: f32,
    pub combo: u32,
    pub lives: u32,
    pub max_lives: u32,
    pub powerups: Vec<String>,
    pub milestone: Option<MilestoneBanner>,
    /// Zero while the multiplier is 1.0 and the readout is hidden
    pub multiplier_alpha: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub background: Rgb,
    pub sprites: Vec<Sprite>,
    /// Camera offset to apply to every sprite
    pub shake_offset: Vec2,
    /// Full-screen overlay color, if a flash is active
    pub flash: Option<Rgba>,
    pub popups: Vec<PopupSnapshot>,
    pub hud: HudSnapshot,
    pub phase: GamePhase,
}

/// Capture the current frame
pub fn snapshot(state: &GameState) -> RenderSnapshot {
    RenderSnapshot {
        background: state.config.palette.background,
        sprites: sprites(state),
        shake_offset: state.shake.as_ref().map_or(Vec2::ZERO, ScreenShake::offset),
        flash: state
            .flash
            .as_ref()
            .map(|f| with_alpha(f.color, f.alpha()))
            .filter(|c| c[3] > 0),
        popups: state
            .popups
            .iter()
            .map(|p| PopupSnapshot {
                pos: p.pos,
                text: format!("+{}", p.points),
                alpha: state.popups.alpha(p),
            })
            .collect(),
        hud: hud_snapshot(state),
        phase: state.phase,
    }
}

pub fn hud_snapshot(state: &GameState) -> HudSnapshot {
    let scoring = &state.scoring;
    HudSnapshot {
        score: scoring.score,
        multiplier: scoring.multiplier,
        combo: scoring.combo,
        lives: state.lives,
        max_lives: state.config.starting_lives,
        powerups: state
            .active_powerup_names()
            .into_iter()
            .map(String::from)
            .collect(),
        milestone: state.hud.milestone().map(|(text, alpha)| MilestoneBanner {
            text: text.to_string(),
            alpha,
        }),
        multiplier_alpha: state.hud.multiplier_alpha(scoring.multiplier),
    }
}

fn sprites(state: &GameState) -> Vec<Sprite> {
    let palette = &state.config.palette;
    let mut out = Vec::with_capacity(
        state.starfield.stars.len()
            + state.enemies.len()
            + state.powerups.len()
            + state.projectiles.len()
            + state.particles.len()
            + 1,
    );

    out.extend(state.starfield.stars.iter().map(|star| Sprite {
        shape: Shape::Rectangle,
        pos: star.pos,
        half_extents: Vec2::splat(star.size / 2.0),
        color: with_alpha(palette.star, star.alpha),
    }));

    out.extend(state.enemies.iter().map(|enemy| Sprite {
        shape: Shape::Diamond,
        pos: enemy.pos,
        half_extents: Vec2::splat(enemy.radius()),
        color: with_alpha(palette.enemy, 255),
    }));

    out.extend(state.powerups.iter().map(|powerup| Sprite {
        shape: Shape::Circle,
        pos: powerup.pos,
        half_extents: Vec2::splat(powerup.radius() * powerup.pulse()),
        color: with_alpha(palette.powerup, 255),
    }));

    let player = &state.player;
    if state.phase == GamePhase::Playing && player.is_visible() {
        out.push(Sprite {
            shape: Shape::Triangle,
            pos: player.pos,
            half_extents: Vec2::splat(player.radius()),
            color: with_alpha(palette.player, 255),
        });
    }

    out.extend(state.projectiles.iter().map(|projectile| Sprite {
        shape: Shape::Rectangle,
        pos: projectile.pos,
        half_extents: projectile.half_extents(),
        color: with_alpha(palette.laser, 255),
    }));

    out.extend(state.particles.particles().iter().map(|particle| Sprite {
        shape: match particle.shape {
            ParticleShape::Square => Shape::Rectangle,
            ParticleShape::Triangle => Shape::Triangle,
            ParticleShape::Circle => Shape::Circle,
        },
        pos: particle.pos,
        half_extents: Vec2::splat(particle.size() / 2.0),
        color: particle.color(),
    }));

    out
}
