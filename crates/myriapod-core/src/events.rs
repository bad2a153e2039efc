//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::CritterKind;

/// One-shot events drained into each tick's snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Player fired a dart.
    DartFired,
    /// A chain segment was destroyed.
    SegmentDestroyed { head: bool },
    /// An obstacle absorbed its final hit.
    ObstacleDestroyed,
    /// Damaged obstacles healed after a player death.
    ObstaclesRegenerated { count: u32 },
    /// A spawned enemy was destroyed.
    CritterDestroyed { kind: CritterKind },
    /// Player touched an enemy.
    PlayerDeath { lives_remaining: u32 },
    /// One-time bonus life awarded.
    ExtraLife,
    /// All chain segments cleared; next wave begins.
    WaveComplete { wave: u32 },
    /// Last life lost.
    GameOver { score: u64 },
}
