//! Fixed-timestep pacing
//!
//! The simulation is written in whole frames at 60 Hz. Hosts feed real
//! elapsed time into [`FixedStep`], which decides how many logical frames to
//! run so game speed does not depend on the display refresh rate.

use serde::{Deserialize, Serialize};

use super::events::GameEvent;
use super::state::GameState;
use super::tick::{TickInput, tick};
use crate::consts::*;

/// Longest wall-clock gap accepted per call (seconds); longer stalls are
/// treated as this long
pub const MAX_FRAME_TIME: f32 = 0.1;

/// Accumulator turning wall-clock time into whole simulation frames
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedStep {
    accumulator: f32,
    step: f32,
    max_substeps: u32,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(FRAME_DT, MAX_SUBSTEPS)
    }
}

impl FixedStep {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            accumulator: 0.0,
            step,
            max_substeps,
        }
    }

    /// Add elapsed time; returns how many frames should run now
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        self.accumulator += elapsed.clamp(0.0, MAX_FRAME_TIME);

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            self.accumulator -= self.step;
            substeps += 1;
        }

        // Drop the backlog rather than spiral
        if substeps == self.max_substeps && self.accumulator >= self.step {
            self.accumulator %= self.step;
        }
        substeps
    }

    /// Fraction of a frame left in the accumulator, for render interpolation
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step
    }

    /// Run as many ticks as `elapsed` covers. One-shot inputs (restart) only
    /// apply to the first substep.
    pub fn drive(&mut self, state: &mut GameState, input: &TickInput, elapsed: f32) -> Vec<GameEvent> {
        let substeps = self.advance(elapsed);
        let mut events = Vec::new();
        let mut input = input.clone();
        for _ in 0..substeps {
            events.extend(tick(state, &input));
            input.restart = false;
        }
        events
    }
}
