//! Simulation systems, run in a fixed order each tick by the engine.

pub mod cleanup;
pub mod collision;
pub mod combat;
pub mod critters;
pub mod locomotion;
pub mod movement;
pub mod player;
pub mod snapshot;
pub mod spawning;
