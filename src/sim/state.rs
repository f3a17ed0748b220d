//! Game state and core simulation types
//!
//! Everything a step reads or writes lives on [`GameState`]. Entities are
//! plain records owned by value; cross-references go through stable ids.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::session::Session;
use crate::consts::*;
use crate::tuning::Tuning;
use crate::{canvas_center, direction_from_angle};

/// Maximum particles kept alive at once (oldest are dropped first)
pub const MAX_PARTICLES: usize = 512;

/// Enemy tint (magenta)
pub const ENEMY_COLOR: u32 = 0xff00ff;

/// The player's ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub hp: u32,
    pub max_hp: u32,
    /// Acceleration per held direction
    pub speed: f32,
    pub friction: f32,
    /// Frames between volleys
    pub fire_cooldown: u32,
    pub last_shot_frame: u64,
    /// Angle between adjacent bullets (radians)
    pub spread_angle: f32,
    pub bullet_count: u32,
    pub kills: u32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: canvas_center(),
            vel: Vec2::ZERO,
            radius: tuning.player_radius,
            hp: tuning.player_max_hp,
            max_hp: tuning.player_max_hp,
            speed: tuning.player_accel,
            friction: tuning.player_friction,
            fire_cooldown: tuning.fire_cooldown_frames,
            last_shot_frame: 0,
            spread_angle: tuning.spread_angle,
            bullet_count: tuning.start_bullet_count,
            kills: 0,
        }
    }

    /// Remaining health in [0, 1]
    pub fn hp_fraction(&self) -> f32 {
        self.hp as f32 / self.max_hp as f32
    }

    /// Apply contact damage; returns true when this hit was fatal
    pub fn take_damage(&mut self, amount: u32) -> bool {
        self.hp = self.hp.saturating_sub(amount);
        self.hp == 0
    }
}

/// A homing enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub speed: f32,
    /// Zero once destroyed; swept at the end of the frame
    pub hp: u32,
    pub color: u32,
}

impl Enemy {
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}

/// A player bullet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Frames left before expiry
    pub life: u32,
    /// Enemies this bullet may still hit
    pub piercing: u32,
}

impl Projectile {
    #[inline]
    pub fn is_spent(&self) -> bool {
        self.life == 0 || self.piercing == 0
    }
}

/// Cosmetic particle shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleKind {
    Spark,
    Ring,
    Explosion,
}

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Radius growth per frame (rings and explosions)
    pub expansion: f32,
    pub life: u32,
    pub max_life: u32,
    /// life / max_life, refreshed every frame
    pub alpha: f32,
    pub kind: ParticleKind,
}

impl Particle {
    /// Build one particle of a burst. `index`/`count` spread the burst evenly
    /// around the circle before random jitter.
    pub fn burst(pos: Vec2, index: usize, count: usize, kind: ParticleKind, rng: &mut Pcg32) -> Self {
        let angle = std::f32::consts::TAU / count as f32 * index as f32 + rng.random::<f32>() * 0.5;
        let (speed, radius, expansion, life, max_life) = match kind {
            ParticleKind::Spark => (2.0 + rng.random::<f32>() * 3.0, 2.0, 0.0, rng.random_range(20..40), 40),
            ParticleKind::Ring => (0.0, 5.0, 2.0, 30, 30),
            ParticleKind::Explosion => (0.0, 10.0, 4.0, 20, 20),
        };
        Self {
            pos,
            vel: direction_from_angle(angle) * speed,
            radius,
            expansion,
            life,
            max_life,
            alpha: life as f32 / max_life as f32,
            kind,
        }
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerupKind {
    /// Shorter fire cooldown
    FireRate,
    /// One more bullet per volley
    Spread,
    /// Reserved for a piercing upgrade; currently does nothing
    Power,
}

impl PowerupKind {
    pub const ALL: [PowerupKind; 3] = [PowerupKind::FireRate, PowerupKind::Spread, PowerupKind::Power];
}

/// A stationary pickup dropped by a destroyed enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Powerup {
    pub id: u32,
    pub pos: Vec2,
    pub kind: PowerupKind,
    pub base_radius: f32,
    /// Pulsing radius used for drawing and pickup tests
    pub radius: f32,
    pub pulse_phase: f32,
    pub life: u32,
    pub alpha: f32,
}

impl Powerup {
    pub fn new(id: u32, pos: Vec2, kind: PowerupKind, tuning: &Tuning) -> Self {
        Self {
            id,
            pos,
            kind,
            base_radius: tuning.powerup_radius,
            radius: tuning.powerup_radius,
            pulse_phase: 0.0,
            life: tuning.powerup_life_frames,
            alpha: 1.0,
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG driving every random decision
    pub rng: Pcg32,
    /// Balance constants for this run
    pub tuning: Tuning,
    pub session: Session,
    pub player: Player,
    /// Enemies in spawn order
    pub enemies: Vec<Enemy>,
    /// Projectiles in fire order
    pub projectiles: Vec<Projectile>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    pub powerups: Vec<Powerup>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed and default balance
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        log::info!("New session (seed {}, bullet cap {})", seed, tuning.max_bullet_count);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            session: Session::new(&tuning),
            player: Player::new(&tuning),
            tuning,
            enemies: Vec::new(),
            projectiles: Vec::new(),
            particles: Vec::new(),
            powerups: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Reset session, player and every collection. Ids and the RNG keep
    /// running so replays stay deterministic across restarts.
    pub fn restart(&mut self) {
        self.session = Session::new(&self.tuning);
        self.player = Player::new(&self.tuning);
        self.enemies.clear();
        self.projectiles.clear();
        self.particles.clear();
        self.powerups.clear();
        log::info!("Session restarted");
    }

    /// Spawn an enemy at `pos` using the current difficulty for its speed
    pub fn spawn_enemy(&mut self, pos: Vec2) -> u32 {
        let id = self.next_entity_id();
        let t = &self.tuning;
        self.enemies.push(Enemy {
            id,
            pos,
            vel: Vec2::ZERO,
            radius: t.enemy_radius,
            speed: t.enemy_base_speed + self.session.difficulty * t.enemy_speed_per_difficulty,
            hp: t.enemy_hp,
            color: ENEMY_COLOR,
        });
        id
    }

    /// Fire a single projectile from `pos` along `angle`
    pub fn spawn_projectile(&mut self, pos: Vec2, angle: f32) -> u32 {
        let id = self.next_entity_id();
        let t = &self.tuning;
        self.projectiles.push(Projectile {
            id,
            pos,
            vel: direction_from_angle(angle) * t.projectile_speed,
            radius: t.projectile_radius,
            life: t.projectile_life_frames,
            piercing: t.projectile_piercing,
        });
        id
    }

    pub fn spawn_powerup(&mut self, pos: Vec2, kind: PowerupKind) -> u32 {
        let id = self.next_entity_id();
        self.powerups.push(Powerup::new(id, pos, kind, &self.tuning));
        id
    }

    /// Emit a burst of `count` particles at `pos`
    pub fn emit_particles(&mut self, pos: Vec2, count: usize, kind: ParticleKind) {
        for i in 0..count {
            self.particles.push(Particle::burst(pos, i, count, kind, &mut self.rng));
        }
        if self.particles.len() > MAX_PARTICLES {
            let excess = self.particles.len() - MAX_PARTICLES;
            self.particles.drain(..excess);
        }
    }

    /// Whether a point lies within the canvas rectangle
    pub fn in_canvas(pos: Vec2) -> bool {
        pos.x >= 0.0 && pos.x <= CANVAS_WIDTH && pos.y >= 0.0 && pos.y <= CANVAS_HEIGHT
    }

    pub fn live_enemy_count(&self) -> usize {
        self.enemies.iter().filter(|e| e.is_alive()).count()
    }

    pub fn find_enemy(&self, id: u32) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id == id)
    }
}
