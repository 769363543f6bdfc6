//! B.O.R.K. - a side-scrolling arcade shooter core
//!
//! Core modules:
//! - `sim`: Simulation (entities, spawner, scoring, collisions, game loop)
//! - `renderer`: Flat render snapshots for an external drawing layer
//! - `config`: Data-driven game balance
//! - `error`: Configuration errors

pub mod config;
pub mod error;
pub mod renderer;
pub mod sim;

pub use config::{GameConfig, QualityPreset};
pub use error::ConfigError;

/// Simulation constants
pub mod consts {
    /// Fixed simulation timestep used by the driver (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest real frame delta the driver will feed into the accumulator
    pub const MAX_FRAME_DT: f32 = 0.25;
}

/// An RGB color triple
pub type Rgb = [u8; 3];

/// An RGBA color
pub type Rgba = [u8; 4];

/// Linearly interpolate between two colors, truncating each channel
#[inline]
pub fn lerp_rgb(from: Rgb, to: Rgb, t: f32) -> Rgb {
    let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
    [
        channel(from[0], to[0]),
        channel(from[1], to[1]),
        channel(from[2], to[2]),
    ]
}

/// Attach an alpha channel to an RGB color
#[inline]
pub fn with_alpha(rgb: Rgb, alpha: u8) -> Rgba {
    [rgb[0], rgb[1], rgb[2], alpha]
}

/// Convert a `[0, 1]` opacity into an 8-bit alpha, clamping out-of-range input
#[inline]
pub fn alpha_from_unit(opacity: f32) -> u8 {
    (255.0 * opacity).clamp(0.0, 255.0) as u8
}
