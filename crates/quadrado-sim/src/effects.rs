//! Particle effects: explosion bursts, flash markers, and per-tick ageing.
//!
//! The free functions operate on caller-owned collections so the game loop
//! decides where particles live. [`Effects`] bundles both collections for
//! callers that want the manager to own them.

use rand::Rng;

use quadrado_core::constants::{EXPLOSION_PARTICLES, PARTICLE_COLOR_JITTER};
use quadrado_core::state::{FlashView, ParticleView};
use quadrado_core::types::Rgb;

use crate::particle::{Flash, Particle};

/// Spawn `count` particles at `(x, y)` and return the accompanying flash.
///
/// Each particle gets `base` with every channel independently jittered by up
/// to ±30, clamped to `0..=255`.
pub fn spawn_explosion(
    rng: &mut impl Rng,
    x: f32,
    y: f32,
    base: Rgb,
    particles: &mut Vec<Particle>,
    count: usize,
) -> Flash {
    particles.reserve(count);
    for _ in 0..count {
        let jitter = [
            rng.gen_range(-PARTICLE_COLOR_JITTER..=PARTICLE_COLOR_JITTER),
            rng.gen_range(-PARTICLE_COLOR_JITTER..=PARTICLE_COLOR_JITTER),
            rng.gen_range(-PARTICLE_COLOR_JITTER..=PARTICLE_COLOR_JITTER),
        ];
        particles.push(Particle::spawn(x, y, base.offset_each(jitter), rng));
    }
    Flash::new(x, y)
}

/// Update every particle, then drop the expired ones.
/// Survivor order is not part of the contract.
pub fn update_all(particles: &mut Vec<Particle>) {
    for particle in particles.iter_mut() {
        particle.update();
    }
    particles.retain(|p| !p.is_expired());
}

/// Age every flash, then drop the expired ones.
pub fn update_flashes(flashes: &mut Vec<Flash>) {
    for flash in flashes.iter_mut() {
        flash.update();
    }
    flashes.retain(|f| !f.is_expired());
}

/// Live particles and flashes owned together.
#[derive(Debug, Clone, Default)]
pub struct Effects {
    particles: Vec<Particle>,
    flashes: Vec<Flash>,
}

impl Effects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full-size explosion with a flash.
    pub fn explode(&mut self, rng: &mut impl Rng, x: f32, y: f32, base: Rgb) {
        self.burst(rng, x, y, base, EXPLOSION_PARTICLES);
    }

    /// Explosion of `count` particles with a flash.
    pub fn burst(&mut self, rng: &mut impl Rng, x: f32, y: f32, base: Rgb, count: usize) {
        let flash = spawn_explosion(rng, x, y, base, &mut self.particles, count);
        self.flashes.push(flash);
    }

    /// Age and cull everything by one tick.
    pub fn update(&mut self) {
        update_all(&mut self.particles);
        update_flashes(&mut self.flashes);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn flashes(&self) -> &[Flash] {
        &self.flashes
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty() && self.flashes.is_empty()
    }

    pub fn particle_views(&self) -> Vec<ParticleView> {
        self.particles.iter().map(Particle::view).collect()
    }

    pub fn flash_views(&self) -> Vec<FlashView> {
        self.flashes.iter().map(Flash::view).collect()
    }
}
