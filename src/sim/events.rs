//! Events emitted by the simulation for audio and UI feedback.
//!
//! `tick` returns the events raised during that frame in the order they
//! happened. Adapters consume them fire-and-forget; nothing flows back.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::PowerupKind;

/// What destroyed an enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KillCause {
    /// Direct projectile hit
    Projectile,
    /// Caught in a chain-reaction blast at the given recursion depth
    ChainReaction { depth: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The player's weapon fired a volley
    ShotFired { pos: Vec2, count: u32 },
    /// An enemy was destroyed by the player
    EnemyDestroyed { pos: Vec2, cause: KillCause },
    /// An enemy rammed the player
    PlayerHit { pos: Vec2, hp: u32 },
    /// The player picked up a power-up
    PowerupCollected { pos: Vec2, kind: PowerupKind },
    /// Kill-count progression improved the weapon
    WeaponUpgraded {
        fire_cooldown: u32,
        bullet_count: u32,
    },
    /// Player hp reached zero
    GameOver { score: u64 },
    /// A new session started
    Restarted,
}
