//! Gameplay balance hooks derived from actor color.
//!
//! Enemy difficulty is tied to visual identity: redder enemies wait longer
//! between shots, and shot color mixes in part of the shooter's color.

use quadrado_core::config::{CombatConfig, Palette};
use quadrado_core::enums::ActorKind;
use quadrado_core::types::Rgb;

/// Enemy shot cooldown: the base plus redness times the spread, truncated
/// to whole milliseconds. With the defaults this spans 400 to 600 ms.
pub fn enemy_cooldown_ms(color: Rgb, combat: &CombatConfig) -> u64 {
    let spread = color.redness() * combat.enemy_cooldown_spread_ms as f32;
    combat.enemy_cooldown_base_ms + spread as u64
}

/// Shot cooldown for any actor.
pub fn shot_cooldown_ms(kind: ActorKind, color: Rgb, combat: &CombatConfig) -> u64 {
    match kind {
        ActorKind::Player => combat.player_cooldown_ms,
        ActorKind::Enemy => enemy_cooldown_ms(color, combat),
    }
}

/// Projectile color for a shooter.
///
/// Enemies of the canonical color fire plain enemy shots; every other enemy
/// keeps the full enemy-shot green and mixes in a third of its red and half
/// of its blue.
pub fn shot_color(kind: ActorKind, color: Rgb, palette: &Palette) -> Rgb {
    match kind {
        ActorKind::Player => palette.player_shot,
        ActorKind::Enemy if palette.is_canonical_enemy(color) => palette.enemy_shot,
        ActorKind::Enemy => Rgb::new(color.r / 3, palette.enemy_shot.g, color.b / 2),
    }
}
