//! Weapon progression driven by kills and power-ups
//!
//! Upgrades only ever improve the weapon within a session: the cooldown
//! never rises and the bullet count never drops. Both are clamped by the
//! tuning caps.

use super::events::GameEvent;
use super::state::{Player, PowerupKind};
use crate::tuning::Tuning;

fn shorten_cooldown(player: &mut Player, step: u32, tuning: &Tuning) -> bool {
    let next = player
        .fire_cooldown
        .saturating_sub(step)
        .max(tuning.min_fire_cooldown_frames);
    let changed = next < player.fire_cooldown;
    if changed {
        player.fire_cooldown = next;
    }
    changed
}

fn add_bullet(player: &mut Player, tuning: &Tuning) -> bool {
    if player.bullet_count < tuning.max_bullet_count {
        player.bullet_count += 1;
        true
    } else {
        false
    }
}

fn upgraded(player: &Player) -> GameEvent {
    GameEvent::WeaponUpgraded {
        fire_cooldown: player.fire_cooldown,
        bullet_count: player.bullet_count,
    }
}

/// Count a kill and apply milestone upgrades (every 10th kill: faster fire,
/// every 25th kill: one more bullet)
pub fn record_kill(player: &mut Player, tuning: &Tuning) -> Option<GameEvent> {
    player.kills += 1;
    let mut changed = false;

    if player.kills % tuning.kills_per_fire_upgrade == 0 {
        changed |= shorten_cooldown(player, tuning.fire_upgrade_step, tuning);
    }
    if player.kills % tuning.kills_per_bullet_upgrade == 0 {
        changed |= add_bullet(player, tuning);
    }

    if changed {
        log::info!(
            "Weapon upgraded at {} kills: cooldown {}, bullets {}",
            player.kills,
            player.fire_cooldown,
            player.bullet_count
        );
        Some(upgraded(player))
    } else {
        None
    }
}

/// Apply a power-up's effect to the player
pub fn apply_powerup(player: &mut Player, kind: PowerupKind, tuning: &Tuning) -> Option<GameEvent> {
    let changed = match kind {
        PowerupKind::FireRate => shorten_cooldown(player, tuning.powerup_fire_step, tuning),
        PowerupKind::Spread => add_bullet(player, tuning),
        PowerupKind::Power => {
            // Reserved for a piercing upgrade
            log::debug!("POWER pickup collected (no effect)");
            false
        }
    };
    changed.then(|| upgraded(player))
}
