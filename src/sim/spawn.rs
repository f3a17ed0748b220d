//! Enemy wave scheduler
//!
//! Waves come faster and larger as difficulty rises. Each wave picks one
//! screen edge and drops a jittered cluster just outside it, so enemies
//! arrive as a coherent group rather than scattered noise.

use glam::Vec2;
use rand::Rng;

use super::state::GameState;
use crate::consts::*;
use crate::tuning::Tuning;

/// Screen edge a wave enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    /// Point `offset` pixels outside this edge, `along` in [0, 1] of its length
    pub fn anchor(self, along: f32, offset: f32) -> Vec2 {
        match self {
            Edge::Top => Vec2::new(along * CANVAS_WIDTH, -offset),
            Edge::Right => Vec2::new(CANVAS_WIDTH + offset, along * CANVAS_HEIGHT),
            Edge::Bottom => Vec2::new(along * CANVAS_WIDTH, CANVAS_HEIGHT + offset),
            Edge::Left => Vec2::new(-offset, along * CANVAS_HEIGHT),
        }
    }
}

/// Frames between waves: clamped linear decrease with difficulty
pub fn spawn_rate(difficulty: f32, tuning: &Tuning) -> u64 {
    let rate = tuning.spawn_base_rate as f32 - (difficulty * tuning.spawn_rate_per_difficulty).floor();
    rate.max(tuning.spawn_min_rate as f32) as u64
}

/// Enemies per wave: clamped linear increase with difficulty
pub fn spawn_count(difficulty: f32, tuning: &Tuning) -> u32 {
    let count = (tuning.spawn_base_count + difficulty * tuning.spawn_count_per_difficulty).floor();
    (count.max(0.0) as u32).min(tuning.spawn_max_count)
}

/// Spawn a wave if the gate is open. Returns the number of enemies spawned.
pub fn run(state: &mut GameState) -> Option<u32> {
    let frame = state.session.frame;
    let difficulty = state.session.difficulty;
    let rate = spawn_rate(difficulty, &state.tuning);
    if frame.saturating_sub(state.session.last_spawn_frame) < rate {
        return None;
    }

    let count = spawn_count(difficulty, &state.tuning);
    let edge = Edge::ALL[state.rng.random_range(0..Edge::ALL.len())];
    let anchor = edge.anchor(state.rng.random::<f32>(), state.tuning.spawn_edge_offset);
    let jitter = state.tuning.spawn_jitter;

    for _ in 0..count {
        let offset = Vec2::new(
            (state.rng.random::<f32>() * 2.0 - 1.0) * jitter,
            (state.rng.random::<f32>() * 2.0 - 1.0) * jitter,
        );
        state.spawn_enemy(anchor + offset);
    }
    state.session.last_spawn_frame = frame;

    log::debug!(
        "Wave of {} from {:?} at frame {} (difficulty {:.2}, rate {}), {} enemies alive",
        count,
        edge,
        frame,
        difficulty,
        rate,
        state.enemies.len()
    );
    Some(count)
}
