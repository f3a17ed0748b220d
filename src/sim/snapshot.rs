//! Read-only view of a frame for presentation layers
//!
//! Renderers draw from a [`Snapshot`] and never write back. The snapshot also
//! carries the derived HUD numbers so every frontend shows the same values.

use serde::{Deserialize, Serialize};

use super::session::Session;
use super::state::{Enemy, GameState, Particle, Player, Powerup, Projectile};
use crate::consts::FRAMES_PER_SECOND;

/// Derived values for the heads-up display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hud {
    pub score: u64,
    pub kills: u32,
    pub bullets: u32,
    /// Volleys per second at the current cooldown
    pub shots_per_second: f32,
    /// Remaining health in [0, 1]
    pub hp_fraction: f32,
    pub difficulty: f32,
    pub game_over: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub session: Session,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    pub particles: Vec<Particle>,
    pub powerups: Vec<Powerup>,
    pub hud: Hud,
}

impl GameState {
    /// Capture the current frame for drawing
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            session: self.session.clone(),
            player: self.player.clone(),
            enemies: self.enemies.clone(),
            projectiles: self.projectiles.clone(),
            particles: self.particles.clone(),
            powerups: self.powerups.clone(),
            hud: Hud {
                score: self.session.score,
                kills: self.player.kills,
                bullets: self.player.bullet_count,
                // A volley needs cooldown + 1 frames (strict comparison)
                shots_per_second: FRAMES_PER_SECOND / (self.player.fire_cooldown + 1) as f32,
                hp_fraction: self.player.hp_fraction(),
                difficulty: self.session.difficulty,
                game_over: !self.session.is_running(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_snapshot_hud() {
        let mut state = GameState::new(4);
        state.player.hp = 25;
        state.spawn_enemy(Vec2::new(1.0, 2.0));

        let snap = state.snapshot();

        assert_eq!(snap.enemies.len(), 1);
        assert_eq!(snap.hud.hp_fraction, 0.25);
        assert_eq!(snap.hud.bullets, 3);
        assert!((snap.hud.shots_per_second - 60.0 / 41.0).abs() < 1e-5);
        assert!(!snap.hud.game_over);
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let state = GameState::new(4);
        let json = serde_json::to_value(state.snapshot()).unwrap();
        assert_eq!(json["hud"]["score"], 0);
        assert_eq!(json["session"]["phase"], "Running");
        assert!(json["enemies"].as_array().unwrap().is_empty());
    }
}
