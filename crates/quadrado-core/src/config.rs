//! Injected game configuration.
//!
//! Every tunable the simulation reads lives here instead of in free globals.
//! Each section falls back to the defaults in [`crate::constants`] when a
//! field is missing from the JSON source.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;
use crate::types::Rgb;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub tick_rate: TickRate,
    pub arena: ArenaConfig,
    pub combat: CombatConfig,
    pub steering: SteeringConfig,
    pub palette: Palette,
}

/// Ticks per second. Wrapped so the serde default is the real tick rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TickRate(pub u32);

impl Default for TickRate {
    fn default() -> Self {
        Self(TICK_RATE)
    }
}

/// Arena bounds shared by all border logic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

impl ArenaConfig {
    pub fn center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Cooldowns, invulnerability, and projectile speeds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    pub player_cooldown_ms: u64,
    pub enemy_cooldown_base_ms: u64,
    pub enemy_cooldown_spread_ms: u64,
    pub invulnerability_ms: u64,
    pub player_shot_speed: f32,
    pub aimed_shot_speed: f32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            player_cooldown_ms: PLAYER_SHOT_COOLDOWN_MS,
            enemy_cooldown_base_ms: ENEMY_SHOT_COOLDOWN_MS,
            enemy_cooldown_spread_ms: ENEMY_COOLDOWN_SPREAD_MS,
            invulnerability_ms: INVULNERABILITY_MS,
            player_shot_speed: PLAYER_SHOT_SPEED,
            aimed_shot_speed: AIMED_SHOT_SPEED,
        }
    }
}

/// Border-avoidance parameters for enemy movement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SteeringConfig {
    pub safety_margin: f32,
    pub critical_margin: f32,
    pub escape_impulse: f32,
    pub center_blend: f32,
    pub bounce_inset: f32,
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self {
            safety_margin: SAFETY_MARGIN,
            critical_margin: CRITICAL_MARGIN,
            escape_impulse: ESCAPE_IMPULSE,
            center_blend: CENTER_BLEND,
            bounce_inset: BOUNCE_INSET,
        }
    }
}

/// Named colors with gameplay meaning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub player: Rgb,
    /// The plain enemy color. Its shots skip color mixing.
    pub canonical_enemy: Rgb,
    pub player_shot: Rgb,
    pub enemy_shot: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            player: BLUE,
            canonical_enemy: RED,
            player_shot: YELLOW,
            enemy_shot: GREEN,
        }
    }
}

impl Palette {
    /// Whether `color` is the canonical enemy color. Only that exact color
    /// fires unmixed enemy shots.
    pub fn is_canonical_enemy(&self, color: Rgb) -> bool {
        color == self.canonical_enemy
    }
}

impl GameConfig {
    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate.0 == 0 {
            return Err(ConfigError::Invalid {
                field: "tick_rate",
                reason: "must be at least 1".into(),
            });
        }
        if !(self.arena.width > 0.0 && self.arena.height > 0.0) {
            return Err(ConfigError::Invalid {
                field: "arena",
                reason: format!(
                    "width and height must be positive, got {}x{}",
                    self.arena.width, self.arena.height
                ),
            });
        }
        if self.steering.critical_margin > self.steering.safety_margin {
            return Err(ConfigError::Invalid {
                field: "steering.critical_margin",
                reason: format!(
                    "{} exceeds safety margin {}",
                    self.steering.critical_margin, self.steering.safety_margin
                ),
            });
        }
        if !(0.0..=1.0).contains(&self.steering.center_blend) {
            return Err(ConfigError::Invalid {
                field: "steering.center_blend",
                reason: format!("{} is outside 0.0..=1.0", self.steering.center_blend),
            });
        }
        Ok(())
    }
}
