//! Game state snapshot: the read-only view handed to the renderer each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{ActorKind, GamePhase};
use crate::events::{AudioEvent, GameEvent, ProjectileSpawn};
use crate::types::{ActorId, Rgb, SimTime};

/// Complete visible state after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: Option<ActorView>,
    pub enemies: Vec<ActorView>,
    pub particles: Vec<ParticleView>,
    pub flashes: Vec<FlashView>,
    /// Projectiles requested during this tick.
    pub projectiles: Vec<ProjectileSpawn>,
    pub audio_events: Vec<AudioEvent>,
    pub events: Vec<GameEvent>,
}

/// Everything the renderer needs to draw one actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorView {
    pub id: ActorId,
    pub kind: ActorKind,
    pub position: Vec2,
    pub size: f32,
    pub color: Rgb,
    pub dark_color: Rgb,
    pub bright_color: Rgb,
    /// Body color for this frame (white while the damage flash runs).
    pub display_color: Rgb,
    pub life: u32,
    pub max_life: u32,
    /// `life / max_life`, for the health bar.
    pub health_ratio: f32,
    pub invulnerable: bool,
    /// False during the hidden half of the invulnerability blink.
    pub visible: bool,
    /// Extra pixels added to the body size by the pulse animation.
    pub pulse_offset: u8,
    /// Cosmetic rotation in degrees.
    pub angle: f32,
    /// Fading trail, most recent first. Empty for the player.
    pub trail: Vec<TrailSegment>,
}

/// One faded copy of an enemy drawn at a past position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailSegment {
    pub position: Vec2,
    pub size: f32,
    pub alpha: u8,
    pub color: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleView {
    pub position: Vec2,
    pub size: f32,
    pub color: Rgb,
    /// Degrees.
    pub rotation: f32,
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlashView {
    pub position: Vec2,
    pub radius: f32,
    pub lifetime: u32,
    pub color: Rgb,
}
