//! Per-frame motion integration
//!
//! Every mover advances exactly one logical frame per call. Entities whose
//! life runs out or that leave their allowed area are swept before return,
//! so collections never carry expired entries across a frame boundary.

use glam::Vec2;

use super::state::{GameState, ParticleKind, Player};
use crate::consts::*;

/// Particle velocity multiplier per frame
pub const PARTICLE_DRAG: f32 = 0.98;

/// Accelerate, apply friction, move, then stop against the canvas walls.
/// `dir` is the raw sum of held directions; diagonals are not normalized.
pub fn move_player(player: &mut Player, dir: Vec2) {
    player.vel += dir * player.speed;
    player.vel *= player.friction;
    player.pos += player.vel;

    // Inelastic wall stop on the clamped axis
    if player.pos.x - player.radius < 0.0 {
        player.pos.x = player.radius;
        player.vel.x = 0.0;
    }
    if player.pos.x + player.radius > CANVAS_WIDTH {
        player.pos.x = CANVAS_WIDTH - player.radius;
        player.vel.x = 0.0;
    }
    if player.pos.y - player.radius < 0.0 {
        player.pos.y = player.radius;
        player.vel.y = 0.0;
    }
    if player.pos.y + player.radius > CANVAS_HEIGHT {
        player.pos.y = CANVAS_HEIGHT - player.radius;
        player.vel.y = 0.0;
    }
}

/// Pure pursuit: each enemy heads straight at the player at its own speed.
/// Enemies that overshoot far past the canvas are culled.
pub fn move_enemies(state: &mut GameState) {
    let target = state.player.pos;
    let margin = state.tuning.enemy_despawn_margin;

    for enemy in &mut state.enemies {
        let to_player = target - enemy.pos;
        if to_player.length() > 0.0 {
            enemy.vel = to_player.normalize() * enemy.speed;
        }
        enemy.pos += enemy.vel;
    }

    state.enemies.retain(|e| {
        e.pos.x >= -margin
            && e.pos.x <= CANVAS_WIDTH + margin
            && e.pos.y >= -margin
            && e.pos.y <= CANVAS_HEIGHT + margin
    });
}

/// Straight-line flight; no margin past the canvas edge
pub fn move_projectiles(state: &mut GameState) {
    for bullet in &mut state.projectiles {
        bullet.pos += bullet.vel;
        bullet.life = bullet.life.saturating_sub(1);
    }
    state
        .projectiles
        .retain(|b| b.life > 0 && GameState::in_canvas(b.pos));
}

pub fn move_particles(state: &mut GameState) {
    for particle in &mut state.particles {
        particle.pos += particle.vel;
        particle.vel *= PARTICLE_DRAG;
        particle.life = particle.life.saturating_sub(1);
        particle.alpha = particle.life as f32 / particle.max_life as f32;

        if matches!(particle.kind, ParticleKind::Ring | ParticleKind::Explosion) {
            particle.radius += particle.expansion;
        }
    }
    state.particles.retain(|p| p.life > 0);
}

/// Power-ups stay put; they pulse and fade out near the end of their life
pub fn update_powerups(state: &mut GameState) {
    let t = &state.tuning;
    for powerup in &mut state.powerups {
        powerup.pulse_phase += t.powerup_pulse_speed;
        powerup.radius = powerup.base_radius + powerup.pulse_phase.sin() * t.powerup_pulse_amplitude;
        powerup.life = powerup.life.saturating_sub(1);
        powerup.alpha = if powerup.life < t.powerup_fade_frames {
            powerup.life as f32 / t.powerup_fade_frames as f32
        } else {
            1.0
        };
    }
    state.powerups.retain(|p| p.life > 0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Particle, PowerupKind, Projectile};
    use crate::tuning::Tuning;

    #[test]
    fn test_player_clamps_at_left_wall() {
        let mut player = Player::new(&Tuning::default());
        player.pos = Vec2::new(0.0, 300.0);
        player.vel = Vec2::new(-3.0, 0.0);

        move_player(&mut player, Vec2::new(-1.0, 0.0));

        assert_eq!(player.pos.x, 12.0);
        assert_eq!(player.vel.x, 0.0);
    }

    #[test]
    fn test_player_clamps_at_bottom_right() {
        let mut player = Player::new(&Tuning::default());
        player.pos = Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT);
        player.vel = Vec2::new(5.0, 5.0);

        move_player(&mut player, Vec2::ONE);

        assert_eq!(player.pos, Vec2::new(CANVAS_WIDTH - 12.0, CANVAS_HEIGHT - 12.0));
        assert_eq!(player.vel, Vec2::ZERO);
    }

    #[test]
    fn test_player_friction_decays_to_stop() {
        let mut player = Player::new(&Tuning::default());
        move_player(&mut player, Vec2::X);
        // (0 + 0.5) * 0.92
        assert!((player.vel.x - 0.46).abs() < 1e-6);

        for _ in 0..200 {
            move_player(&mut player, Vec2::ZERO);
        }
        assert!(player.vel.length() < 1e-5);
    }

    #[test]
    fn test_diagonal_is_not_normalized() {
        let mut straight = Player::new(&Tuning::default());
        let mut diagonal = Player::new(&Tuning::default());
        move_player(&mut straight, Vec2::X);
        move_player(&mut diagonal, Vec2::new(1.0, 1.0));
        assert!(diagonal.vel.length() > straight.vel.length());
    }

    #[test]
    fn test_enemy_homes_on_player() {
        let mut state = GameState::new(1);
        state.player.pos = Vec2::new(400.0, 300.0);
        let id = state.spawn_enemy(Vec2::new(100.0, 300.0));
        let speed = state.find_enemy(id).unwrap().speed;

        move_enemies(&mut state);

        let enemy = state.find_enemy(id).unwrap();
        assert!((enemy.vel - Vec2::new(speed, 0.0)).length() < 1e-5);
        assert!((enemy.pos.x - (100.0 + speed)).abs() < 1e-4);
    }

    #[test]
    fn test_enemy_culled_past_margin() {
        let mut state = GameState::new(1);
        state.player.pos = Vec2::new(-500.0, 300.0);
        state.spawn_enemy(Vec2::new(-100.0, 300.0));
        state.spawn_enemy(Vec2::new(50.0, 300.0));

        move_enemies(&mut state);

        assert_eq!(state.enemies.len(), 1);
        assert!(state.enemies[0].pos.x > 0.0);
    }

    #[test]
    fn test_projectile_with_one_frame_left_is_removed() {
        let mut state = GameState::new(1);
        state.projectiles.push(Projectile {
            id: 99,
            pos: Vec2::new(400.0, 300.0),
            vel: Vec2::new(1.0, 0.0),
            radius: 5.0,
            life: 1,
            piercing: 3,
        });

        move_projectiles(&mut state);

        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_projectile_leaving_canvas_is_removed() {
        let mut state = GameState::new(1);
        state.spawn_projectile(Vec2::new(CANVAS_WIDTH - 5.0, 300.0), 0.0);
        state.spawn_projectile(Vec2::new(400.0, 300.0), 0.0);

        move_projectiles(&mut state);

        assert_eq!(state.projectiles.len(), 1);
        assert_eq!(state.projectiles[0].life, 119);
    }

    #[test]
    fn test_particles_drag_grow_and_fade() {
        let mut state = GameState::new(1);
        state.particles.push(Particle {
            pos: Vec2::ZERO,
            vel: Vec2::new(2.0, 0.0),
            radius: 5.0,
            expansion: 2.0,
            life: 30,
            max_life: 30,
            alpha: 1.0,
            kind: ParticleKind::Ring,
        });
        state.particles.push(Particle {
            pos: Vec2::ZERO,
            vel: Vec2::new(4.0, 0.0),
            radius: 2.0,
            expansion: 0.0,
            life: 1,
            max_life: 40,
            alpha: 1.0 / 40.0,
            kind: ParticleKind::Spark,
        });

        move_particles(&mut state);

        assert_eq!(state.particles.len(), 1);
        let ring = &state.particles[0];
        assert_eq!(ring.radius, 7.0);
        assert!((ring.vel.x - 1.96).abs() < 1e-6);
        assert!((ring.alpha - 29.0 / 30.0).abs() < 1e-6);
    }

    #[test]
    fn test_powerup_pulses_and_fades() {
        let mut state = GameState::new(1);
        state.spawn_powerup(Vec2::new(100.0, 100.0), PowerupKind::Spread);
        let fade = state.tuning.powerup_fade_frames;
        let life = state.tuning.powerup_life_frames;

        update_powerups(&mut state);
        let p = &state.powerups[0];
        assert!((p.radius - (10.0 + 0.1f32.sin() * 3.0)).abs() < 1e-5);
        assert_eq!(p.alpha, 1.0);

        for _ in 0..(life - fade / 2 - 1) {
            update_powerups(&mut state);
        }
        let p = &state.powerups[0];
        assert!((p.alpha - 0.5).abs() < 1e-5);

        for _ in 0..fade {
            update_powerups(&mut state);
        }
        assert!(state.powerups.is_empty());
    }
}
