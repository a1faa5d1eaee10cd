//! Core types and definitions for the QUADRADO simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! colors, configuration, commands, state snapshots, events, and constants.
//! It has no dependency on any renderer, audio backend, or windowing layer.

pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
