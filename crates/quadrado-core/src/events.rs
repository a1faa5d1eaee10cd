//! Events and spawn requests emitted by the simulation.

use serde::{Deserialize, Serialize};

use crate::enums::ActorKind;
use crate::types::{ActorId, Rgb};

/// Audio events for the sound collaborator. Fire-and-forget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// Play the synthesized shot sound on `channel`.
    Shot { actor: ActorId, channel: u8 },
}

/// Gameplay events for score keeping and UI feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Damage was applied; `life` is what remains.
    ActorDamaged {
        actor: ActorId,
        life: u32,
        tick: u64,
    },
    /// Life reached zero and the actor was removed (or the game ended).
    ActorDestroyed {
        actor: ActorId,
        kind: ActorKind,
        tick: u64,
    },
}

/// A projectile creation request for the external projectile component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileSpawn {
    pub x: f32,
    pub y: f32,
    pub dir_x: f32,
    pub dir_y: f32,
    pub color: Rgb,
    pub speed: f32,
}
