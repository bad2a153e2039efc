//! Running score state owned by the engine.
//!
//! All score, lives, and bonus mutation funnels through this struct;
//! nothing outside the tick path touches it.

use myriapod_core::constants::STARTING_LIVES;

/// Score, lives, and the one-shot extra-life latch.
#[derive(Debug, Clone)]
pub struct ScoreState {
    pub score: u64,
    pub lives: u32,
    pub extra_life_awarded: bool,
}

impl Default for ScoreState {
    fn default() -> Self {
        Self {
            score: 0,
            lives: STARTING_LIVES,
            extra_life_awarded: false,
        }
    }
}

impl ScoreState {
    pub fn award(&mut self, points: u64) {
        self.score += points;
    }
}
