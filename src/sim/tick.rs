//! Per-frame simulation step
//!
//! Core game loop that advances the simulation deterministically. Order
//! within a frame: clock -> motion (player, weapon, enemies, projectiles,
//! particles, power-ups) -> wave spawning -> combat resolution.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::autopilot;
use super::combat;
use super::events::GameEvent;
use super::motion;
use super::spawn;
use super::state::GameState;
use super::weapon;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Start a fresh session (one-shot)
    pub restart: bool,
    /// Idle/demo mode - the autopilot drives the ship
    pub autopilot: bool,
}

impl TickInput {
    /// Raw sum of held directions (y grows downward). Diagonals are not
    /// normalized, so they accelerate faster than a single axis.
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.up {
            dir.y -= 1.0;
        }
        if self.down {
            dir.y += 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        dir
    }
}

/// Advance the game state by one frame, returning the events it raised
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    let mut input = input.clone();
    if input.autopilot {
        autopilot::drive(state, &mut input);
    }
    let input = &input;

    if input.restart {
        state.restart();
        events.push(GameEvent::Restarted);
    }

    // Stopped sessions stay frozen until restarted
    if !state.session.is_running() {
        return events;
    }

    state.session.advance(&state.tuning);

    motion::move_player(&mut state.player, input.direction());
    if let Some(shot) = weapon::try_fire(state) {
        events.push(shot);
    }
    motion::move_enemies(state);
    motion::move_projectiles(state);
    motion::move_particles(state);
    motion::update_powerups(state);

    spawn::run(state);

    combat::resolve(state, &mut events);

    events
}

/// Value-in, value-out form of [`tick`] for replay and testing
pub fn step(mut state: GameState, input: &TickInput) -> (GameState, Vec<GameEvent>) {
    let events = tick(&mut state, input);
    (state, events)
}
