//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Velocity;

/// Collision extent of an entity (circle radius, pixels).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collider {
    pub radius: f64,
}

/// The player's ship. Position and Collider are separate components.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerShip {
    /// Movement speed (pixels/second).
    pub speed: f64,
    /// Seconds until the next dart may fire.
    pub fire_cooldown: f64,
    /// Hit-flash visual; reverted by a deferred effect.
    pub flashing: bool,
}

/// Marks an entity as a player dart (projectile).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Dart;

/// One segment of a chained enemy body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    /// Which chain this segment belongs to.
    pub chain_id: u32,
    /// Exactly one per non-empty chain.
    pub is_head: bool,
    /// Locomotion state.
    pub state: SegmentState,
    /// Unit heading: horizontal while Moving, straight down while
    /// descending.
    pub direction: Velocity,
    /// Current speed (pixels/second); reduced once on entering the
    /// player band.
    pub speed: f64,
    /// Accumulated descent progress toward one row.
    pub descend_progress: f64,
    /// Horizontal sign to resume after a poison dive ends.
    pub resume_dx: f64,
    /// One-time player-band slowdown already applied.
    pub in_player_area: bool,
}

/// A static, damageable obstacle. Becomes hazardous when poisoned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    /// Hits absorbed so far; `hits < max_hits` while alive.
    pub hits: u32,
    /// Hits required to destroy.
    pub max_hits: u32,
    /// Poison flag; persists until an explicit heal.
    pub hazard: bool,
    /// Hit-flash visual; reverted by a deferred effect.
    pub flashing: bool,
}

/// A spawned enemy (flier, roamer, or poisoner).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Critter {
    pub kind: CritterKind,
    /// Hits absorbed so far (fliers take two).
    pub hits_taken: u32,
    /// Seconds since the roamer last changed its zigzag heading.
    pub zigzag_timer: f64,
}
