//! Chained-actor locomotion and fragmentation for MYRIAPOD.
//!
//! Pure functions over plain data — no ECS dependency. The simulation
//! crate feeds in per-segment context each tick and applies the
//! resulting updates.

pub mod locomotion;
pub mod split;

#[cfg(test)]
mod tests;
