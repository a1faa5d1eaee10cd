//! Enemy movement AI for QUADRADO.
//!
//! Implements border-avoidance steering and arena bounds resolution as
//! pure functions over plain data. Actors call into this crate from their
//! movement step; nothing here owns state.

pub mod steering;

pub use quadrado_core as core;

#[cfg(test)]
mod tests;
