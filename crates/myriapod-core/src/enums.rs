//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Locomotion state of a chain segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentState {
    /// Advancing horizontally along the current direction.
    #[default]
    Moving,
    /// Dropping one row after a boundary or obstacle turn.
    Descending,
    /// Diving straight down after touching a hazardous obstacle.
    PoisonDescending,
    /// Terminal; excluded from further simulation.
    Destroyed,
}

/// Spawned-enemy category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CritterKind {
    /// Fast vertical flier that seeds obstacles as it falls.
    Flier,
    /// Zigzag roamer that prowls the player band and eats obstacles.
    Roamer,
    /// Cross-field hazard that poisons the obstacles it passes.
    Poisoner,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
    GameOver,
}
