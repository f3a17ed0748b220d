//! Collision and combat resolution
//!
//! Interactions resolve in a fixed order every frame:
//! 1. projectile x enemy (piercing, kill rewards, chain reactions)
//! 2. enemy x player (contact damage, defeat)
//! 3. player x power-up (pickup effects)
//!
//! Destroyed entities are only marked during resolution (enemy hp = 0,
//! projectile piercing = 0, power-up life = 0) and swept once at the end, so
//! indices stay valid while chain reactions remove enemies mid-loop.

use glam::Vec2;
use rand::Rng;

use super::collision::{circle_collision, distance};
use super::events::{GameEvent, KillCause};
use super::progression;
use super::state::{GameState, ParticleKind, PowerupKind};

/// Resolve every interaction for this frame, then sweep destroyed entities
pub fn resolve(state: &mut GameState, events: &mut Vec<GameEvent>) {
    resolve_projectile_hits(state, events);
    resolve_enemy_contacts(state, events);
    resolve_powerup_pickups(state, events);
    sweep(state);
}

/// Drop everything marked destroyed during resolution
pub fn sweep(state: &mut GameState) {
    state.enemies.retain(|e| e.is_alive());
    state.projectiles.retain(|b| !b.is_spent());
    state.powerups.retain(|p| p.life > 0);
}

/// Every live projectile against every live enemy. A projectile loses one
/// piercing charge per hit and stops hitting once it has none left.
pub fn resolve_projectile_hits(state: &mut GameState, events: &mut Vec<GameEvent>) {
    for pi in 0..state.projectiles.len() {
        for ei in 0..state.enemies.len() {
            if state.projectiles[pi].piercing == 0 {
                break;
            }
            let enemy = &state.enemies[ei];
            if !enemy.is_alive() || !circle_collision(&state.projectiles[pi], enemy) {
                continue;
            }

            let enemy = &mut state.enemies[ei];
            enemy.hp -= 1;
            if enemy.hp == 0 {
                let pos = enemy.pos;
                reward_kill(state, pos, KillCause::Projectile, events);
                state.emit_particles(pos, 3, ParticleKind::Ring);
                state.emit_particles(pos, 8, ParticleKind::Spark);

                let radius = state.session.explosion_radius;
                chain_reaction(state, pos, radius, 1, events);
            }

            state.projectiles[pi].piercing -= 1;
        }
    }
}

/// Blast every live enemy within `radius` of `origin`, then recurse from
/// each victim with a shrinking radius. Stops below the radius floor or past
/// the depth cap. Returns the deepest level that destroyed anything (0 if
/// none did).
pub fn chain_reaction(
    state: &mut GameState,
    origin: Vec2,
    radius: f32,
    depth: u32,
    events: &mut Vec<GameEvent>,
) -> u32 {
    if radius < state.tuning.explosion_min_radius || depth > state.tuning.explosion_max_depth {
        return 0;
    }

    // Snapshot candidates before any removal at this level
    let candidates: Vec<u32> = state
        .enemies
        .iter()
        .filter(|e| e.is_alive() && distance(e.pos, origin) <= radius)
        .map(|e| e.id)
        .collect();

    let mut victims = Vec::with_capacity(candidates.len());
    for id in candidates {
        // Re-resolve by id; an earlier blast may already have claimed it
        let Some(enemy) = state.enemies.iter_mut().find(|e| e.id == id) else {
            continue;
        };
        if !enemy.is_alive() {
            continue;
        }
        enemy.hp = 0;
        let pos = enemy.pos;

        reward_kill(state, pos, KillCause::ChainReaction { depth }, events);
        state.emit_particles(pos, 1, ParticleKind::Explosion);
        state.emit_particles(pos, 8, ParticleKind::Spark);
        victims.push(pos);
    }

    if victims.is_empty() {
        return 0;
    }

    let next_radius = radius * state.tuning.explosion_falloff;
    let mut deepest = depth;
    for pos in victims {
        deepest = deepest.max(chain_reaction(state, pos, next_radius, depth + 1, events));
    }
    deepest
}

/// Score, kill count, progression and power-up drop for one destroyed enemy
fn reward_kill(state: &mut GameState, pos: Vec2, cause: KillCause, events: &mut Vec<GameEvent>) {
    state.session.score += state.tuning.score_per_kill;
    events.push(GameEvent::EnemyDestroyed { pos, cause });

    if let Some(upgrade) = progression::record_kill(&mut state.player, &state.tuning) {
        events.push(upgrade);
    }

    if state.rng.random_bool(state.tuning.powerup_drop_chance) {
        let kind = PowerupKind::ALL[state.rng.random_range(0..PowerupKind::ALL.len())];
        state.spawn_powerup(pos, kind);
    }
}

/// Enemies that reach the player deal contact damage and die on impact
pub fn resolve_enemy_contacts(state: &mut GameState, events: &mut Vec<GameEvent>) {
    for ei in 0..state.enemies.len() {
        let enemy = &state.enemies[ei];
        if !enemy.is_alive() || !circle_collision(&state.player, enemy) {
            continue;
        }
        let enemy_pos = enemy.pos;
        state.enemies[ei].hp = 0;

        let fatal = state.player.take_damage(state.tuning.contact_damage);
        state.session.shake_camera(state.tuning.shake_on_hit);

        let player_pos = state.player.pos;
        state.emit_particles(enemy_pos, 3, ParticleKind::Ring);
        state.emit_particles(player_pos, 12, ParticleKind::Spark);
        events.push(GameEvent::PlayerHit {
            pos: player_pos,
            hp: state.player.hp,
        });

        if fatal && state.session.is_running() {
            state.session.stop();
            events.push(GameEvent::GameOver {
                score: state.session.score,
            });
        }
    }
}

/// Player touching a power-up collects it. A defeated player collects nothing.
pub fn resolve_powerup_pickups(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if !state.session.is_running() {
        return;
    }

    for i in 0..state.powerups.len() {
        let powerup = &state.powerups[i];
        if powerup.life == 0 || !circle_collision(&state.player, powerup) {
            continue;
        }
        let (pos, kind) = (powerup.pos, powerup.kind);
        state.powerups[i].life = 0;

        events.push(GameEvent::PowerupCollected { pos, kind });
        if let Some(upgrade) = progression::apply_powerup(&mut state.player, kind, &state.tuning) {
            events.push(upgrade);
        }
        state.emit_particles(pos, 6, ParticleKind::Spark);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Projectile;
    use crate::tuning::Tuning;

    fn state_without_drops() -> GameState {
        let tuning = Tuning {
            powerup_drop_chance: 0.0,
            ..Tuning::default()
        };
        GameState::with_tuning(1, tuning)
    }

    fn bullet_at(state: &mut GameState, pos: Vec2, piercing: u32) {
        let id = state.next_entity_id();
        state.projectiles.push(Projectile {
            id,
            pos,
            vel: Vec2::ZERO,
            radius: 5.0,
            life: 60,
            piercing,
        });
    }

    fn kills(events: &[GameEvent]) -> usize {
        events
            .iter()
            .filter(|e| matches!(e, GameEvent::EnemyDestroyed { .. }))
            .count()
    }

    #[test]
    fn test_projectile_kill_scores_and_consumes_charge() {
        let mut state = state_without_drops();
        state.session.explosion_radius = 0.0;
        state.spawn_enemy(Vec2::new(100.0, 100.0));
        bullet_at(&mut state, Vec2::new(105.0, 100.0), 3);

        let mut events = Vec::new();
        resolve(&mut state, &mut events);

        assert!(state.enemies.is_empty());
        assert_eq!(state.session.score, 10);
        assert_eq!(state.player.kills, 1);
        assert_eq!(state.projectiles.len(), 1);
        assert_eq!(state.projectiles[0].piercing, 2);
        assert_eq!(
            events,
            vec![GameEvent::EnemyDestroyed {
                pos: Vec2::new(100.0, 100.0),
                cause: KillCause::Projectile
            }]
        );
        // 3 rings + 8 sparks
        assert_eq!(state.particles.len(), 11);
    }

    #[test]
    fn test_piercing_limits_kills_per_projectile() {
        let mut state = state_without_drops();
        state.session.explosion_radius = 0.0;
        for _ in 0..5 {
            state.spawn_enemy(Vec2::new(200.0, 200.0));
        }
        bullet_at(&mut state, Vec2::new(200.0, 200.0), 3);

        let mut events = Vec::new();
        resolve(&mut state, &mut events);

        assert_eq!(kills(&events), 3);
        assert_eq!(state.enemies.len(), 2);
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_multi_hit_enemy_survives_first_hit() {
        let mut state = state_without_drops();
        state.session.explosion_radius = 0.0;
        let id = state.spawn_enemy(Vec2::new(50.0, 50.0));
        state.enemies[0].hp = 2;
        bullet_at(&mut state, Vec2::new(50.0, 50.0), 1);

        let mut events = Vec::new();
        resolve(&mut state, &mut events);

        assert!(events.is_empty());
        assert_eq!(state.find_enemy(id).map(|e| e.hp), Some(1));
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_chain_reaction_spreads_and_rewards() {
        let mut state = state_without_drops();
        // Direct kill at x=100, neighbours at 160 (within 80) and 200 (within 48 of 160)
        state.spawn_enemy(Vec2::new(100.0, 100.0));
        state.spawn_enemy(Vec2::new(160.0, 100.0));
        state.spawn_enemy(Vec2::new(200.0, 100.0));
        // Far away, untouched
        state.spawn_enemy(Vec2::new(600.0, 500.0));
        bullet_at(&mut state, Vec2::new(95.0, 100.0), 1);

        let mut events = Vec::new();
        resolve(&mut state, &mut events);

        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.session.score, 30);
        assert_eq!(state.player.kills, 3);
        assert!(events.contains(&GameEvent::EnemyDestroyed {
            pos: Vec2::new(160.0, 100.0),
            cause: KillCause::ChainReaction { depth: 1 }
        }));
        assert!(events.contains(&GameEvent::EnemyDestroyed {
            pos: Vec2::new(200.0, 100.0),
            cause: KillCause::ChainReaction { depth: 2 }
        }));
    }

    #[test]
    fn test_chain_reaction_respects_radius_floor() {
        let mut state = state_without_drops();
        state.spawn_enemy(Vec2::new(100.0, 100.0));
        let mut events = Vec::new();
        assert_eq!(chain_reaction(&mut state, Vec2::new(100.0, 100.0), 19.9, 1, &mut events), 0);
        assert!(events.is_empty());
        assert_eq!(state.live_enemy_count(), 1);
    }

    #[test]
    fn test_chain_reaction_depth_is_capped() {
        let mut state = state_without_drops();
        state.tuning.explosion_falloff = 0.99;
        // A long line of enemies 10px apart; only the depth cap can stop it
        for i in 0..60 {
            state.spawn_enemy(Vec2::new(10.0 + i as f32 * 10.0, 300.0));
        }
        let mut events = Vec::new();
        let deepest = chain_reaction(&mut state, Vec2::new(0.0, 300.0), 25.0, 1, &mut events);

        assert_eq!(deepest, 5);
        let max_depth = events
            .iter()
            .filter_map(|e| match e {
                GameEvent::EnemyDestroyed {
                    cause: KillCause::ChainReaction { depth },
                    ..
                } => Some(*depth),
                _ => None,
            })
            .max();
        assert_eq!(max_depth, Some(5));
        assert!(state.live_enemy_count() > 0);
    }

    #[test]
    fn test_coincident_enemies_each_destroyed_once() {
        let mut state = state_without_drops();
        for _ in 0..4 {
            state.spawn_enemy(Vec2::new(300.0, 300.0));
        }
        let mut events = Vec::new();
        chain_reaction(&mut state, Vec2::new(300.0, 300.0), 80.0, 1, &mut events);
        assert_eq!(kills(&events), 4);
        assert_eq!(state.player.kills, 4);
    }

    #[test]
    fn test_enemy_contact_damages_and_shakes() {
        let mut state = state_without_drops();
        state.player.pos = Vec2::new(400.0, 300.0);
        state.spawn_enemy(Vec2::new(400.0, 300.0));

        let mut events = Vec::new();
        resolve(&mut state, &mut events);

        assert_eq!(state.player.hp, 90);
        assert_eq!(state.session.shake, 10.0);
        assert!(state.enemies.is_empty());
        assert_eq!(
            events,
            vec![GameEvent::PlayerHit {
                pos: Vec2::new(400.0, 300.0),
                hp: 90
            }]
        );
        // Contact kills award nothing
        assert_eq!(state.session.score, 0);
        assert_eq!(state.player.kills, 0);
    }

    #[test]
    fn test_fatal_contact_stops_session_once() {
        let mut state = state_without_drops();
        state.player.hp = 10;
        let pos = state.player.pos;
        state.spawn_enemy(pos);
        state.spawn_enemy(pos);

        let mut events = Vec::new();
        resolve(&mut state, &mut events);

        assert_eq!(state.player.hp, 0);
        assert!(!state.session.is_running());
        let game_overs = events
            .iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .count();
        assert_eq!(game_overs, 1);
    }

    #[test]
    fn test_powerup_pickup_applies_effect() {
        let mut state = state_without_drops();
        let pos = state.player.pos + Vec2::new(5.0, 0.0);
        state.spawn_powerup(pos, PowerupKind::Spread);
        state.spawn_powerup(Vec2::new(10.0, 10.0), PowerupKind::FireRate);

        let mut events = Vec::new();
        resolve(&mut state, &mut events);

        assert_eq!(state.player.bullet_count, 4);
        assert_eq!(state.powerups.len(), 1);
        assert_eq!(events[0], GameEvent::PowerupCollected { pos, kind: PowerupKind::Spread });
        assert!(matches!(events[1], GameEvent::WeaponUpgraded { bullet_count: 4, .. }));
    }

    #[test]
    fn test_guaranteed_drop_spawns_powerup() {
        let tuning = Tuning {
            powerup_drop_chance: 1.0,
            ..Tuning::default()
        };
        let mut state = GameState::with_tuning(9, tuning);
        state.session.explosion_radius = 0.0;
        state.spawn_enemy(Vec2::new(100.0, 500.0));
        bullet_at(&mut state, Vec2::new(100.0, 500.0), 1);

        let mut events = Vec::new();
        resolve(&mut state, &mut events);

        assert_eq!(state.powerups.len(), 1);
        assert_eq!(state.powerups[0].pos, Vec2::new(100.0, 500.0));
    }
}
