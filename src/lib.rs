//! Neon Survival - A top-down arena survival shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, spawning, combat, progression)
//! - `tuning`: Data-driven game balance
//! - `audio`: Event boundary for an external sound collaborator
//! - `error`: Configuration errors

pub mod audio;
pub mod error;
pub mod sim;
pub mod tuning;

pub use error::{ConfigError, ConfigResult};
pub use tuning::{GameVariant, Tuning};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Logical frame rate the simulation constants are expressed in
    pub const FRAMES_PER_SECOND: f32 = 60.0;
    /// Fixed logical timestep (seconds per simulation frame)
    pub const FRAME_DT: f32 = 1.0 / FRAMES_PER_SECOND;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;
}

/// Unit vector for an angle (radians, y-down screen space)
#[inline]
pub fn direction_from_angle(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Angle of the ray from `from` to `to`
#[inline]
pub fn angle_to(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}

/// Center of the playfield
#[inline]
pub fn canvas_center() -> Vec2 {
    Vec2::new(consts::CANVAS_WIDTH / 2.0, consts::CANVAS_HEIGHT / 2.0)
}
