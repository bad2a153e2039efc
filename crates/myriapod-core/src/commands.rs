//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a new game from the menu (or after game over).
    StartGame,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Discard all live entities and reset to initial state.
    Restart,
    /// Set the held movement input; components are clamped to [-1, 1]
    /// and the vector is normalized before use.
    SetMoveInput { dx: f64, dy: f64 },
    /// Fire a dart if the cooldown allows.
    Fire,
}
