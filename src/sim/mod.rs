//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Whole logical frames only (wall-clock pacing lives in `pacing`)
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod combat;
pub mod events;
pub mod motion;
pub mod pacing;
pub mod progression;
pub mod session;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod weapon;

pub use collision::{Circle, circle_collision, circles_overlap, distance};
pub use combat::chain_reaction;
pub use events::{GameEvent, KillCause};
pub use pacing::FixedStep;
pub use session::{GamePhase, Session};
pub use snapshot::{Hud, Snapshot};
pub use state::{
    Enemy, GameState, MAX_PARTICLES, Particle, ParticleKind, Player, Powerup, PowerupKind,
    Projectile,
};
pub use tick::{TickInput, step, tick};
