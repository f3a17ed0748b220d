//! Audio boundary
//!
//! The simulation never plays sound itself. Hosts pass each frame's events
//! to [`dispatch`], which forwards the audible ones to an [`AudioSink`].

use glam::Vec2;

use crate::sim::events::{GameEvent, KillCause};
use crate::sim::state::PowerupKind;

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Weapon volley
    Shoot,
    /// Enemy destroyed by a bullet
    EnemyPop,
    /// Enemy destroyed by a chain-reaction blast
    Explosion,
    /// Enemy rammed the player
    PlayerHit,
    /// Pickup collected
    PickupCollect,
}

impl SoundEffect {
    /// Cue for an event, if the event is audible
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::ShotFired { .. } => Some(Self::Shoot),
            GameEvent::EnemyDestroyed {
                cause: KillCause::Projectile,
                ..
            } => Some(Self::EnemyPop),
            GameEvent::EnemyDestroyed {
                cause: KillCause::ChainReaction { .. },
                ..
            } => Some(Self::Explosion),
            GameEvent::PlayerHit { .. } => Some(Self::PlayerHit),
            GameEvent::PowerupCollected { .. } => Some(Self::PickupCollect),
            GameEvent::WeaponUpgraded { .. } | GameEvent::GameOver { .. } | GameEvent::Restarted => {
                None
            }
        }
    }
}

/// Receiver for gameplay sound cues. Every callback defaults to a no-op.
pub trait AudioSink {
    fn on_shot_fired(&mut self, _pos: Vec2, _count: u32) {}
    fn on_enemy_destroyed(&mut self, _pos: Vec2, _cause: KillCause) {}
    fn on_player_hit(&mut self, _pos: Vec2, _hp: u32) {}
    fn on_powerup_collected(&mut self, _pos: Vec2, _kind: PowerupKind) {}
}

/// Forward a frame's events to `sink`, in order
pub fn dispatch(events: &[GameEvent], sink: &mut impl AudioSink) {
    for event in events {
        match *event {
            GameEvent::ShotFired { pos, count } => sink.on_shot_fired(pos, count),
            GameEvent::EnemyDestroyed { pos, cause } => sink.on_enemy_destroyed(pos, cause),
            GameEvent::PlayerHit { pos, hp } => sink.on_player_hit(pos, hp),
            GameEvent::PowerupCollected { pos, kind } => sink.on_powerup_collected(pos, kind),
            _ => {}
        }
    }
}

/// Sink that writes each cue to the debug log (headless runs)
#[derive(Debug, Default)]
pub struct LogAudio {
    pub played: u64,
    muted: bool,
}

impl LogAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mute/unmute
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn play(&mut self, effect: SoundEffect, pos: Vec2) {
        if self.muted {
            return;
        }
        self.played += 1;
        log::debug!("Sound {:?} at ({:.0}, {:.0})", effect, pos.x, pos.y);
    }
}

impl AudioSink for LogAudio {
    fn on_shot_fired(&mut self, pos: Vec2, _count: u32) {
        self.play(SoundEffect::Shoot, pos);
    }

    fn on_enemy_destroyed(&mut self, pos: Vec2, cause: KillCause) {
        let effect = match cause {
            KillCause::Projectile => SoundEffect::EnemyPop,
            KillCause::ChainReaction { .. } => SoundEffect::Explosion,
        };
        self.play(effect, pos);
    }

    fn on_player_hit(&mut self, pos: Vec2, _hp: u32) {
        self.play(SoundEffect::PlayerHit, pos);
    }

    fn on_powerup_collected(&mut self, pos: Vec2, _kind: PowerupKind) {
        self.play(SoundEffect::PickupCollect, pos);
    }
}
