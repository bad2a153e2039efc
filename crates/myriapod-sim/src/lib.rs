//! Simulation engine for MYRIAPOD.
//!
//! Owns the hecs ECS world, runs systems once per host-supplied tick,
//! and produces GameStateSnapshots for the presentation layer.

pub mod chains;
pub mod effects;
pub mod engine;
pub mod score;
pub mod spawn;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, Simulation};
pub use myriapod_core as core;
