//! Commands sent from the game loop to the simulation.
//!
//! Commands are queued and applied at the next tick boundary, after every
//! actor has run its per-tick update.

use serde::{Deserialize, Serialize};

use crate::types::{ActorId, Rgb};

/// All actions the game loop can request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimCommand {
    /// Add an enemy actor to the arena.
    SpawnEnemy {
        x: f32,
        y: f32,
        size: f32,
        color: Rgb,
        speed: f32,
    },
    /// Move an actor one step along `(dx, dy)`.
    Move { actor: ActorId, dx: f32, dy: f32 },
    /// Fire, optionally along a pre-normalized direction.
    Shoot {
        actor: ActorId,
        direction: Option<[f32; 2]>,
    },
    /// A collision reported by the external collision pass.
    Hit { actor: ActorId },
}
