//! Projectile spawn contract.
//!
//! Actors never own projectiles. They append [`ProjectileSpawn`] requests to
//! a sink supplied by the caller, and the external projectile component
//! takes it from there.

pub use quadrado_core::events::ProjectileSpawn;

/// Anything that accepts projectile creation requests.
pub trait ProjectileSink {
    fn push_projectile(&mut self, spawn: ProjectileSpawn);
}

impl ProjectileSink for Vec<ProjectileSpawn> {
    fn push_projectile(&mut self, spawn: ProjectileSpawn) {
        self.push(spawn);
    }
}
