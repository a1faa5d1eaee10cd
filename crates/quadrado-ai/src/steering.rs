//! Border-avoidance steering.
//!
//! Enemies that wander toward an arena edge are pushed back toward the
//! center in two escalating bands: inside the safety margin the requested
//! direction is blended with a center-directed vector, inside the critical
//! margin it is replaced by a stronger escape impulse. The player is exempt
//! and only gets clamped to the arena.
//!
//! Zones are tested against the *candidate* position, with the far edges
//! offset by the actor's size, while the center vector is taken from the
//! *current* position.

use glam::Vec2;

use quadrado_core::config::{ArenaConfig, SteeringConfig};
use quadrado_core::enums::{ActorKind, BorderZone};

/// Input to the steering step for a single actor.
#[derive(Debug, Clone, Copy)]
pub struct SteeringContext {
    pub kind: ActorKind,
    /// Top-left corner before the move.
    pub position: Vec2,
    /// Requested direction, usually unit-ish components in `-1..=1`.
    pub direction: Vec2,
    pub speed: f32,
    pub size: f32,
}

/// Output of the steering step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringUpdate {
    /// Resolved position, always inside the arena.
    pub position: Vec2,
    /// Zone the naive candidate fell into. Always `Clear` for the player.
    pub zone: BorderZone,
}

/// Steer one move and resolve it against the arena bounds.
pub fn evaluate(
    ctx: &SteeringContext,
    arena: &ArenaConfig,
    steering: &SteeringConfig,
) -> SteeringUpdate {
    let naive = ctx.position + ctx.direction * ctx.speed;

    if ctx.kind.is_player() {
        return SteeringUpdate {
            position: resolve_bounds(naive, ctx.size, ctx.kind, arena, steering),
            zone: BorderZone::Clear,
        };
    }

    let zone = classify(naive, ctx.size, arena, steering);
    let candidate = match zone {
        BorderZone::Critical => {
            ctx.position
                + toward_center(ctx.position, arena) * ctx.speed * steering.escape_impulse
        }
        BorderZone::Safety => {
            let blend = steering.center_blend;
            let heading =
                toward_center(ctx.position, arena) * blend + ctx.direction * (1.0 - blend);
            ctx.position + heading * ctx.speed
        }
        BorderZone::Clear => naive,
    };

    SteeringUpdate {
        position: resolve_bounds(candidate, ctx.size, ctx.kind, arena, steering),
        zone,
    }
}

/// Which proximity band `candidate` falls into.
pub fn classify(
    candidate: Vec2,
    size: f32,
    arena: &ArenaConfig,
    steering: &SteeringConfig,
) -> BorderZone {
    if near_edge(candidate, size, arena, steering.critical_margin) {
        BorderZone::Critical
    } else if near_edge(candidate, size, arena, steering.safety_margin) {
        BorderZone::Safety
    } else {
        BorderZone::Clear
    }
}

fn near_edge(p: Vec2, size: f32, arena: &ArenaConfig, margin: f32) -> bool {
    p.x < margin
        || p.x > arena.width - size - margin
        || p.y < margin
        || p.y > arena.height - size - margin
}

/// Unit vector from `position` to the arena center, or zero at the center.
pub fn toward_center(position: Vec2, arena: &ArenaConfig) -> Vec2 {
    (arena.center() - position).normalize_or_zero()
}

/// Bring `candidate` inside `[0, arena - size]` on each axis.
///
/// In-range coordinates pass through. Out of range, the player is clamped
/// to the violated edge while enemies are placed `bounce_inset` pixels
/// inside it so they do not stick to the wall. The inset never pushes an
/// enemy past the opposite edge.
pub fn resolve_bounds(
    candidate: Vec2,
    size: f32,
    kind: ActorKind,
    arena: &ArenaConfig,
    steering: &SteeringConfig,
) -> Vec2 {
    let inset = steering.bounce_inset;
    Vec2::new(
        resolve_axis(candidate.x, arena.width - size, kind, inset),
        resolve_axis(candidate.y, arena.height - size, kind, inset),
    )
}

fn resolve_axis(value: f32, max: f32, kind: ActorKind, inset: f32) -> f32 {
    if (0.0..=max).contains(&value) {
        return value;
    }
    let bounced = match kind {
        ActorKind::Player => value,
        ActorKind::Enemy if value < 0.0 => inset,
        ActorKind::Enemy => max - inset,
    };
    bounced.min(max).max(0.0)
}
