//! Decaying visual fragments and the flash marker that accompanies a burst.

use glam::Vec2;
use rand::Rng;

use quadrado_core::constants::*;
use quadrado_core::state::{FlashView, ParticleView};
use quadrado_core::types::Rgb;

/// A short-lived fragment with gravity, geometric shrink, and a linear fade.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Current color, the base color faded by remaining lifetime.
    pub color: Rgb,
    pub size: f32,
    /// Remaining lifetime in ticks.
    pub lifetime: u32,
    pub max_lifetime: u32,
    /// Downward acceleration added to `velocity.y` each tick.
    pub gravity: f32,
    /// Degrees. Cosmetic only.
    pub rotation: f32,
    /// Degrees per tick.
    pub spin: f32,
    base_color: Rgb,
}

impl Particle {
    /// Create a particle at `(x, y)` with randomized size, velocity,
    /// lifetime, gravity and spin.
    pub fn spawn(x: f32, y: f32, color: Rgb, rng: &mut impl Rng) -> Self {
        let lifetime = rng.gen_range(PARTICLE_LIFETIME_MIN..=PARTICLE_LIFETIME_MAX);
        Self {
            position: Vec2::new(x, y),
            velocity: Vec2::new(
                rng.gen_range(-PARTICLE_SPEED_MAX..=PARTICLE_SPEED_MAX),
                rng.gen_range(-PARTICLE_SPEED_MAX..=PARTICLE_SPEED_MAX),
            ),
            color,
            size: rng.gen_range(PARTICLE_SIZE_MIN..=PARTICLE_SIZE_MAX) as f32,
            lifetime,
            max_lifetime: lifetime,
            gravity: rng.gen_range(PARTICLE_GRAVITY_MIN..=PARTICLE_GRAVITY_MAX),
            rotation: rng.gen_range(0..=360) as f32,
            spin: rng.gen_range(-PARTICLE_SPIN_MAX..=PARTICLE_SPIN_MAX) as f32,
            base_color: color,
        }
    }

    /// Color the particle was spawned with.
    pub fn base_color(&self) -> Rgb {
        self.base_color
    }

    /// Advance one tick.
    pub fn update(&mut self) {
        self.position += self.velocity;
        self.velocity.y += self.gravity;
        self.lifetime = self.lifetime.saturating_sub(1);
        self.rotation = (self.rotation + self.spin).rem_euclid(360.0);
        self.size = (self.size * PARTICLE_SHRINK).max(0.0);

        let fade = self.lifetime as f32 / self.max_lifetime.max(1) as f32;
        self.color = self.base_color.scale(fade);
    }

    pub fn is_expired(&self) -> bool {
        self.lifetime == 0
    }

    pub fn view(&self) -> ParticleView {
        ParticleView {
            position: self.position,
            size: self.size,
            color: self.color,
            rotation: self.rotation,
            visible: self.size > PARTICLE_MIN_VISIBLE_SIZE,
        }
    }
}

/// Bright marker drawn for a few frames at the center of an explosion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flash {
    pub position: Vec2,
    pub radius: f32,
    /// Remaining lifetime in ticks.
    pub lifetime: u32,
    pub color: Rgb,
}

impl Flash {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            radius: FLASH_RADIUS,
            lifetime: FLASH_LIFETIME,
            color: WHITE,
        }
    }

    pub fn update(&mut self) {
        self.lifetime = self.lifetime.saturating_sub(1);
    }

    pub fn is_expired(&self) -> bool {
        self.lifetime == 0
    }

    pub fn view(&self) -> FlashView {
        FlashView {
            position: self.position,
            radius: self.radius,
            lifetime: self.lifetime,
            color: self.color,
        }
    }
}
