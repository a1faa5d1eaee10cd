//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Who controls an actor. Decides steering, trail recording, shot color
/// and the fallback fire direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorKind {
    Player,
    #[default]
    Enemy,
}

impl ActorKind {
    pub fn is_player(&self) -> bool {
        matches!(self, ActorKind::Player)
    }
}

/// Proximity band of a candidate position relative to the arena edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BorderZone {
    /// Far enough from every edge; movement is not adjusted.
    #[default]
    Clear,
    /// Inside the safety margin; movement is blended toward the center.
    Safety,
    /// Inside the critical margin; movement is replaced by an escape impulse.
    Critical,
}

/// Lifecycle phase of the simulation engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Engine created, no ticks run yet.
    #[default]
    Idle,
    /// Player alive, simulation advancing.
    Active,
    /// Player life reached zero.
    GameOver,
}
