//! Session clock: frame counter, difficulty curve, camera shake
//!
//! The session is the only place the Running/Stopped state machine lives.
//! Running -> Stopped happens when the player's hp reaches zero; Stopped ->
//! Running only through an explicit restart, which rebuilds the session.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Player defeated, waiting for restart
    Stopped,
}

/// Per-run bookkeeping shared by every subsystem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub phase: GamePhase,
    pub score: u64,
    /// Simulation frames elapsed since (re)start
    pub frame: u64,
    /// 1.0 at start, grows linearly with elapsed frames
    pub difficulty: f32,
    /// Camera shake magnitude in pixels (read by the renderer)
    pub shake: f32,
    /// Frame of the most recent enemy wave
    pub last_spawn_frame: u64,
    /// Blast radius used for chain reactions on projectile kills
    pub explosion_radius: f32,
}

impl Session {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            phase: GamePhase::Running,
            score: 0,
            frame: 0,
            difficulty: 1.0,
            shake: 0.0,
            last_spawn_frame: 0,
            explosion_radius: tuning.explosion_radius,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Advance one frame: tick the counter, ramp difficulty, decay shake
    pub fn advance(&mut self, tuning: &Tuning) {
        self.frame += 1;
        self.difficulty = difficulty_at(self.frame, tuning);

        self.shake *= tuning.shake_decay;
        if self.shake < tuning.shake_cutoff {
            self.shake = 0.0;
        }
    }

    /// Kick the camera (hits set, not add, the intensity)
    pub fn shake_camera(&mut self, intensity: f32) {
        self.shake = intensity;
    }

    /// End the session
    pub fn stop(&mut self) {
        if self.phase == GamePhase::Running {
            log::info!(
                "Game over at frame {} with score {}",
                self.frame,
                self.score
            );
        }
        self.phase = GamePhase::Stopped;
    }
}

/// Difficulty factor after `frame` frames
#[inline]
pub fn difficulty_at(frame: u64, tuning: &Tuning) -> f32 {
    1.0 + frame as f32 / tuning.difficulty_ramp_frames
}
