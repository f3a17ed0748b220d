//! Auto-aiming spread gun
//!
//! The player never aims manually: once the cooldown has elapsed the gun
//! locks onto the nearest enemy and fires a symmetric fan of bullets.

use glam::Vec2;

use super::events::GameEvent;
use super::state::{Enemy, GameState};
use crate::angle_to;

/// Nearest live enemy to `from`, if any
pub fn nearest_enemy(enemies: &[Enemy], from: Vec2) -> Option<&Enemy> {
    enemies
        .iter()
        .filter(|e| e.is_alive())
        .min_by(|a, b| {
            a.pos
                .distance_squared(from)
                .partial_cmp(&b.pos.distance_squared(from))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
}

/// Angular offsets of each bullet in a volley, centered on the aim line
pub fn spread_offsets(bullet_count: u32, spread_angle: f32) -> impl Iterator<Item = f32> {
    let center = (bullet_count as f32 - 1.0) / 2.0;
    (0..bullet_count).map(move |i| (i as f32 - center) * spread_angle)
}

/// Fire a volley if the cooldown has strictly elapsed and a target exists
pub fn try_fire(state: &mut GameState) -> Option<GameEvent> {
    let frame = state.session.frame;
    let since_last = frame.saturating_sub(state.player.last_shot_frame);
    if since_last <= state.player.fire_cooldown as u64 {
        return None;
    }

    let origin = state.player.pos;
    let target = nearest_enemy(&state.enemies, origin)?.pos;
    let aim = angle_to(origin, target);

    let count = state.player.bullet_count;
    let offsets: Vec<f32> = spread_offsets(count, state.player.spread_angle).collect();
    for offset in offsets {
        state.spawn_projectile(origin, aim + offset);
    }
    state.player.last_shot_frame = frame;

    Some(GameEvent::ShotFired { pos: origin, count })
}
