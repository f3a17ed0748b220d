//! Idle/demo mode - a simple bot that keeps the ship alive
//!
//! Flees the nearest enemy inside a danger radius, otherwise drifts back to
//! the middle of the arena. Restarts automatically after a defeat.

use glam::Vec2;

use super::state::GameState;
use super::tick::TickInput;
use super::weapon::nearest_enemy;
use crate::canvas_center;

/// Enemies closer than this are actively avoided
pub const DANGER_RADIUS: f32 = 150.0;
/// Distance from center considered "home"
pub const HOME_RADIUS: f32 = 40.0;
/// Ignore tiny steering components to avoid jitter
const DEADZONE: f32 = 0.25;

/// Desired heading for the ship (not normalized to key presses yet)
pub fn desired_heading(state: &GameState) -> Vec2 {
    let pos = state.player.pos;

    if let Some(enemy) = nearest_enemy(&state.enemies, pos) {
        let away = pos - enemy.pos;
        if away.length() < DANGER_RADIUS {
            // Blend in a pull toward center so the bot doesn't pin itself to a wall
            let home = (canvas_center() - pos).normalize_or_zero() * 0.5;
            return (away.normalize_or_zero() + home).normalize_or_zero();
        }
    }

    let to_center = canvas_center() - pos;
    if to_center.length() > HOME_RADIUS {
        to_center.normalize_or_zero()
    } else {
        Vec2::ZERO
    }
}

/// Overwrite `input` with the bot's decision for this frame
pub fn drive(state: &GameState, input: &mut TickInput) {
    if !state.session.is_running() {
        input.restart = true;
        return;
    }

    let heading = desired_heading(state);
    input.left = heading.x < -DEADZONE;
    input.right = heading.x > DEADZONE;
    input.up = heading.y < -DEADZONE;
    input.down = heading.y > DEADZONE;
}
