//! Rendering boundary
//!
//! The core never draws. Hosts call [`snapshot`] once per frame and draw the
//! resulting primitives with whatever backend they use.

pub mod snapshot;

pub use snapshot::{
    HudSnapshot, MilestoneBanner, PopupSnapshot, RenderSnapshot, Shape, Sprite, hud_snapshot,
    snapshot,
};
