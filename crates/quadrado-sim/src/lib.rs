//! Simulation engine for QUADRADO.
//!
//! Actors, particle effects, projectile spawning and upgrade persistence,
//! plus a headless `SimulationEngine` that runs them at a fixed tick rate
//! and produces `GameStateSnapshot`s for the renderer.

pub mod actor;
pub mod balance;
pub mod effects;
pub mod engine;
pub mod particle;
pub mod persistence;
pub mod projectile;

pub use engine::SimulationEngine;
pub use quadrado_core as core;
