//! Game state snapshot — the complete visible state produced each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, SimTime};

/// Complete game state handed to the host after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u32,
    pub wave: u32,
    pub player: Option<PlayerView>,
    pub segments: Vec<SegmentView>,
    pub obstacles: Vec<ObstacleView>,
    pub critters: Vec<CritterView>,
    pub darts: Vec<Position>,
    pub events: Vec<GameEvent>,
}

/// The player's ship for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub flashing: bool,
}

/// A live chain segment for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentView {
    pub position: Position,
    pub chain_id: u32,
    pub is_head: bool,
    pub state: SegmentState,
}

/// A live obstacle for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleView {
    pub position: Position,
    pub hits: u32,
    pub max_hits: u32,
    pub hazard: bool,
    pub flashing: bool,
}

/// A live spawned enemy for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CritterView {
    pub position: Position,
    pub kind: CritterKind,
}
