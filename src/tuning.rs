//! Data-driven game balance
//!
//! Every constant the simulation reads lives on [`Tuning`]. Defaults match the
//! power-up variant of the game; [`Tuning::classic`] restores the reference
//! variant without power-ups or chain explosions. A JSON file may override any
//! subset of fields, missing keys keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Named balance presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GameVariant {
    /// Reference behavior: no drops, no chain reactions, 7-bullet cap
    Classic,
    /// Power-ups and chain-reaction explosions enabled, 9-bullet cap
    #[default]
    Powerups,
}

impl GameVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameVariant::Classic => "classic",
            GameVariant::Powerups => "powerups",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(GameVariant::Classic),
            "powerups" | "powerup" => Some(GameVariant::Powerups),
            _ => None,
        }
    }

    /// Balance preset for this variant
    pub fn tuning(&self) -> Tuning {
        match self {
            GameVariant::Classic => Tuning::classic(),
            GameVariant::Powerups => Tuning::default(),
        }
    }
}

/// Runtime-tunable gameplay constants. Distances are in pixels, durations in
/// simulation frames, speeds in pixels per frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    pub player_radius: f32,
    pub player_max_hp: u32,
    /// Acceleration added per held direction key
    pub player_accel: f32,
    /// Velocity multiplier applied every frame
    pub player_friction: f32,
    pub fire_cooldown_frames: u32,
    pub min_fire_cooldown_frames: u32,
    /// Angle between adjacent bullets of a volley (radians)
    pub spread_angle: f32,
    pub start_bullet_count: u32,
    pub max_bullet_count: u32,

    // === Projectiles ===
    pub projectile_speed: f32,
    pub projectile_radius: f32,
    pub projectile_life_frames: u32,
    pub projectile_piercing: u32,

    // === Enemies ===
    pub enemy_radius: f32,
    pub enemy_base_speed: f32,
    pub enemy_speed_per_difficulty: f32,
    pub enemy_hp: u32,
    /// Distance past the canvas edge before an enemy is culled
    pub enemy_despawn_margin: f32,
    pub contact_damage: u32,

    // === Spawning ===
    pub spawn_base_rate: u32,
    pub spawn_rate_per_difficulty: f32,
    pub spawn_min_rate: u32,
    pub spawn_base_count: f32,
    pub spawn_count_per_difficulty: f32,
    pub spawn_max_count: u32,
    pub spawn_edge_offset: f32,
    pub spawn_jitter: f32,
    /// Frames for the difficulty factor to grow by 1.0
    pub difficulty_ramp_frames: f32,

    // === Scoring & progression ===
    pub score_per_kill: u64,
    pub kills_per_fire_upgrade: u32,
    pub fire_upgrade_step: u32,
    pub kills_per_bullet_upgrade: u32,

    // === Power-ups ===
    pub powerup_drop_chance: f64,
    pub powerup_life_frames: u32,
    /// Remaining-life window over which a power-up fades out
    pub powerup_fade_frames: u32,
    pub powerup_radius: f32,
    pub powerup_pulse_amplitude: f32,
    pub powerup_pulse_speed: f32,
    pub powerup_fire_step: u32,

    // === Chain reaction ===
    /// Initial blast radius around a projectile kill (0 disables chains)
    pub explosion_radius: f32,
    /// Radius multiplier per recursion level
    pub explosion_falloff: f32,
    pub explosion_min_radius: f32,
    pub explosion_max_depth: u32,

    // === Camera ===
    pub shake_on_hit: f32,
    pub shake_decay: f32,
    pub shake_cutoff: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_radius: 12.0,
            player_max_hp: 100,
            player_accel: 0.5,
            player_friction: 0.92,
            fire_cooldown_frames: 40,
            min_fire_cooldown_frames: 15,
            spread_angle: 0.3,
            start_bullet_count: 3,
            max_bullet_count: 9,

            projectile_speed: 10.0,
            projectile_radius: 5.0,
            projectile_life_frames: 120,
            projectile_piercing: 3,

            enemy_radius: 10.0,
            enemy_base_speed: 1.0,
            enemy_speed_per_difficulty: 0.2,
            enemy_hp: 1,
            enemy_despawn_margin: 100.0,
            contact_damage: 10,

            spawn_base_rate: 25,
            spawn_rate_per_difficulty: 2.0,
            spawn_min_rate: 5,
            spawn_base_count: 3.0,
            spawn_count_per_difficulty: 1.0,
            spawn_max_count: 10,
            spawn_edge_offset: 20.0,
            spawn_jitter: 50.0,
            difficulty_ramp_frames: 3600.0,

            score_per_kill: 10,
            kills_per_fire_upgrade: 10,
            fire_upgrade_step: 2,
            kills_per_bullet_upgrade: 25,

            powerup_drop_chance: 0.3,
            powerup_life_frames: 600,
            powerup_fade_frames: 120,
            powerup_radius: 10.0,
            powerup_pulse_amplitude: 3.0,
            powerup_pulse_speed: 0.1,
            powerup_fire_step: 5,

            explosion_radius: 80.0,
            explosion_falloff: 0.6,
            explosion_min_radius: 20.0,
            explosion_max_depth: 5,

            shake_on_hit: 10.0,
            shake_decay: 0.9,
            shake_cutoff: 0.1,
        }
    }
}

impl Tuning {
    /// Reference variant: no power-ups, no chain reactions, 7-bullet cap
    pub fn classic() -> Self {
        Self {
            max_bullet_count: 7,
            powerup_drop_chance: 0.0,
            explosion_radius: 0.0,
            ..Self::default()
        }
    }

    /// Parse a (possibly partial) JSON override and validate it
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let tuning = Self::from_json_str(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Resolve a command-line style argument: a preset name or a JSON path
    pub fn from_arg(arg: &str) -> ConfigResult<Self> {
        if let Some(variant) = GameVariant::from_str(arg) {
            return Ok(variant.tuning());
        }
        if arg.ends_with(".json") {
            return Self::load(arg);
        }
        Err(ConfigError::UnknownVariant(arg.to_string()))
    }

    /// Reject values that would break simulation invariants
    pub fn validate(&self) -> ConfigResult<()> {
        let positive = [
            ("player_radius", self.player_radius),
            ("projectile_radius", self.projectile_radius),
            ("enemy_radius", self.enemy_radius),
            ("powerup_radius", self.powerup_radius),
            ("difficulty_ramp_frames", self.difficulty_ramp_frames),
            ("explosion_min_radius", self.explosion_min_radius),
        ];
        for (field, value) in positive {
            if value <= 0.0 || !value.is_finite() {
                return Err(ConfigError::Invalid {
                    field,
                    value,
                    expected: "(0, inf)",
                });
            }
        }

        // Pulse must never shrink a power-up to a non-positive radius
        if self.powerup_pulse_amplitude < 0.0
            || self.powerup_pulse_amplitude >= self.powerup_radius
        {
            return Err(ConfigError::Invalid {
                field: "powerup_pulse_amplitude",
                value: self.powerup_pulse_amplitude,
                expected: "[0, powerup_radius)",
            });
        }

        let nonzero = [
            ("player_max_hp", self.player_max_hp),
            ("min_fire_cooldown_frames", self.min_fire_cooldown_frames),
            ("start_bullet_count", self.start_bullet_count),
            ("projectile_piercing", self.projectile_piercing),
            ("enemy_hp", self.enemy_hp),
            ("spawn_min_rate", self.spawn_min_rate),
            ("kills_per_fire_upgrade", self.kills_per_fire_upgrade),
            ("kills_per_bullet_upgrade", self.kills_per_bullet_upgrade),
        ];
        for (field, value) in nonzero {
            if value == 0 {
                return Err(ConfigError::Invalid {
                    field,
                    value: 0.0,
                    expected: "[1, inf)",
                });
            }
        }

        if self.max_bullet_count < self.start_bullet_count {
            return Err(ConfigError::Invalid {
                field: "max_bullet_count",
                value: self.max_bullet_count as f32,
                expected: ">= start_bullet_count",
            });
        }
        if self.fire_cooldown_frames < self.min_fire_cooldown_frames {
            return Err(ConfigError::Invalid {
                field: "fire_cooldown_frames",
                value: self.fire_cooldown_frames as f32,
                expected: ">= min_fire_cooldown_frames",
            });
        }
        if !(0.0..=1.0).contains(&self.powerup_drop_chance) {
            return Err(ConfigError::Invalid {
                field: "powerup_drop_chance",
                value: self.powerup_drop_chance as f32,
                expected: "[0, 1]",
            });
        }
        if self.explosion_falloff <= 0.0 || self.explosion_falloff >= 1.0 {
            return Err(ConfigError::Invalid {
                field: "explosion_falloff",
                value: self.explosion_falloff,
                expected: "(0, 1)",
            });
        }
        if !(0.0..1.0).contains(&self.shake_decay) {
            return Err(ConfigError::Invalid {
                field: "shake_decay",
                value: self.shake_decay,
                expected: "[0, 1)",
            });
        }
        if self.player_friction < 0.0 || self.player_friction >= 1.0 {
            return Err(ConfigError::Invalid {
                field: "player_friction",
                value: self.player_friction,
                expected: "[0, 1)",
            });
        }

        Ok(())
    }
}
