//! Simulation constants and tuning parameters.
//!
//! These are the defaults baked into [`crate::config::GameConfig`]. Systems
//! read tunables through the config so tests can vary them; the fixed
//! values below (particle ranges, trail cap, flash shape) are not tunable.

use crate::types::Rgb;

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

// --- Arena ---

pub const ARENA_WIDTH: f32 = 800.0;
pub const ARENA_HEIGHT: f32 = 600.0;

// --- Palette ---

pub const BLUE: Rgb = Rgb::new(0, 120, 255);
pub const RED: Rgb = Rgb::new(255, 0, 0);
pub const GREEN: Rgb = Rgb::new(0, 255, 0);
pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);

// --- Combat ---

/// Player shot cooldown (ms).
pub const PLAYER_SHOT_COOLDOWN_MS: u64 = 250;

/// Enemy shot cooldown floor (ms). Redness adds up to `ENEMY_COOLDOWN_SPREAD_MS`.
pub const ENEMY_SHOT_COOLDOWN_MS: u64 = 400;

/// Extra enemy cooldown at full redness (ms).
pub const ENEMY_COOLDOWN_SPREAD_MS: u64 = 200;

/// Invulnerability window after a hit (ms).
pub const INVULNERABILITY_MS: u64 = 1500;

/// Speed of the player's straight-line shot.
pub const PLAYER_SHOT_SPEED: f32 = 8.0;

/// Speed of enemy shots and of any aimed shot.
pub const AIMED_SHOT_SPEED: f32 = 7.0;

/// Audio channel reserved for shot sounds.
pub const SHOT_AUDIO_CHANNEL: u8 = 1;

/// Frames the actor renders white after taking damage.
pub const DAMAGE_FLASH_FRAMES: u32 = 10;

// --- Steering ---

/// Distance from an edge at which enemies start blending toward the center.
pub const SAFETY_MARGIN: f32 = 50.0;

/// Distance from an edge at which enemies escape straight to the center.
pub const CRITICAL_MARGIN: f32 = 20.0;

/// Speed multiplier for the critical-zone escape.
pub const ESCAPE_IMPULSE: f32 = 1.5;

/// Share of the center-directed vector in the safety-zone blend.
pub const CENTER_BLEND: f32 = 0.6;

/// How far inside the violated edge an out-of-bounds enemy is placed.
pub const BOUNCE_INSET: f32 = 10.0;

// --- Actor cosmetics ---

/// Maximum number of trail positions kept per enemy.
pub const MAX_TRAIL_POSITIONS: usize = 15;

/// Degrees the cosmetic rotation advances per moving step.
pub const ROTATION_STEP_DEG: f32 = 5.0;

/// Milliseconds between pulse phase steps.
pub const PULSE_INTERVAL_MS: u64 = 100;

/// Number of pulse phases in one full grow/shrink cycle.
pub const PULSE_PHASES: u8 = 12;

/// Blink period while invulnerable (ms). Hidden during the first half.
pub const BLINK_PERIOD_MS: u64 = 200;

/// Channel offset applied to the base color for trail segments.
pub const TRAIL_COLOR_OFFSET: i16 = -100;

// --- Particles ---

pub const PARTICLE_SIZE_MIN: u32 = 3;
pub const PARTICLE_SIZE_MAX: u32 = 7;
pub const PARTICLE_SPEED_MAX: f32 = 4.0;
pub const PARTICLE_LIFETIME_MIN: u32 = 30;
pub const PARTICLE_LIFETIME_MAX: u32 = 60;
pub const PARTICLE_GRAVITY_MIN: f32 = 0.05;
pub const PARTICLE_GRAVITY_MAX: f32 = 0.15;
pub const PARTICLE_SPIN_MAX: i32 = 8;

/// Geometric size decay per tick.
pub const PARTICLE_SHRINK: f32 = 0.95;

/// Particles smaller than this are not drawn.
pub const PARTICLE_MIN_VISIBLE_SIZE: f32 = 0.5;

/// Maximum per-channel color perturbation for explosion particles.
pub const PARTICLE_COLOR_JITTER: i16 = 30;

/// Particles per explosion burst.
pub const EXPLOSION_PARTICLES: usize = 30;

/// Particles per non-lethal hit burst.
pub const HIT_PARTICLES: usize = 10;

// --- Flash ---

pub const FLASH_RADIUS: f32 = 40.0;
pub const FLASH_LIFETIME: u32 = 10;
