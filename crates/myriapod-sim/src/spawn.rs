//! Spawn and wave scheduling state.
//!
//! Per-category timers decide when to attempt a spawn; the wave
//! counter drives monotonic, floor-clamped difficulty scaling.

use myriapod_core::constants::*;

/// Timer and budget for one spawn category.
#[derive(Debug, Clone)]
pub struct CategoryState {
    /// Seconds between spawn attempts.
    pub rate: f64,
    /// Seconds accumulated since the last attempt.
    pub elapsed: f64,
    /// Spawns performed this wave.
    pub spawned: u32,
    /// Per-wave spawn budget.
    pub cap: u32,
}

impl CategoryState {
    fn new(rate: f64, cap: u32) -> Self {
        Self {
            rate,
            elapsed: 0.0,
            spawned: 0,
            cap,
        }
    }

    /// Advance the timer. Returns true when a spawn attempt is due.
    /// The timer resets on every attempt, even one the caller then
    /// refuses — there is no retry backlog.
    pub fn due(&mut self, dt: f64) -> bool {
        self.elapsed += dt;
        if self.elapsed >= self.rate {
            self.elapsed = 0.0;
            true
        } else {
            false
        }
    }

    /// Whether the per-wave budget allows another spawn.
    pub fn under_cap(&self) -> bool {
        self.spawned < self.cap
    }
}

/// Wave counter plus per-category spawn state.
#[derive(Debug, Clone)]
pub struct SpawnController {
    /// Monotonic difficulty epoch, starting at 1.
    pub wave: u32,
    pub flier: CategoryState,
    pub roamer: CategoryState,
    pub poisoner: CategoryState,
    /// Segments in the next chain to spawn; shrinks each wave, floor 1.
    pub chain_length: u32,
    /// The current wave's chain has been created.
    pub chain_spawned: bool,
    /// Chain speed escalation, clamped at the configured maximum.
    pub speed_multiplier: f64,
}

impl Default for SpawnController {
    fn default() -> Self {
        Self::new()
    }
}

impl SpawnController {
    pub fn new() -> Self {
        Self {
            wave: 1,
            flier: CategoryState::new(
                scaled_rate(FLIER_BASE_RATE, FLIER_RATE_DECREMENT, FLIER_RATE_FLOOR, 1),
                FLIER_BASE_CAP + 1,
            ),
            roamer: CategoryState::new(
                scaled_rate(ROAMER_BASE_RATE, ROAMER_RATE_DECREMENT, ROAMER_RATE_FLOOR, 1),
                ROAMER_BASE_CAP + 1,
            ),
            poisoner: CategoryState::new(
                scaled_rate(
                    POISONER_BASE_RATE,
                    POISONER_RATE_DECREMENT,
                    POISONER_RATE_FLOOR,
                    1,
                ),
                POISONER_BASE_CAP + 1,
            ),
            chain_length: INITIAL_CHAIN_LENGTH,
            chain_spawned: false,
            speed_multiplier: speed_multiplier(1),
        }
    }

    /// Escalate to the next wave: faster rates (floor-clamped), larger
    /// caps, a shorter but faster chain, and a fresh chain pending.
    pub fn advance_wave(&mut self) {
        self.wave += 1;
        let w = self.wave;

        self.flier = CategoryState::new(
            scaled_rate(FLIER_BASE_RATE, FLIER_RATE_DECREMENT, FLIER_RATE_FLOOR, w),
            FLIER_BASE_CAP + w,
        );
        self.roamer = CategoryState::new(
            scaled_rate(ROAMER_BASE_RATE, ROAMER_RATE_DECREMENT, ROAMER_RATE_FLOOR, w),
            ROAMER_BASE_CAP + w,
        );
        self.poisoner = CategoryState::new(
            scaled_rate(
                POISONER_BASE_RATE,
                POISONER_RATE_DECREMENT,
                POISONER_RATE_FLOOR,
                w,
            ),
            POISONER_BASE_CAP + w,
        );

        self.chain_length = self.chain_length.saturating_sub(1).max(1);
        self.chain_spawned = false;
        self.speed_multiplier = speed_multiplier(w);
    }

    /// Horizontal chain speed for the current wave.
    pub fn chain_speed(&self) -> f64 {
        SEGMENT_BASE_SPEED * self.speed_multiplier
    }
}

/// Spawn interval for a wave: `base - (wave - 1) * decrement`, never
/// below the floor.
pub fn scaled_rate(base: f64, decrement: f64, floor: f64, wave: u32) -> f64 {
    (base - (wave - 1) as f64 * decrement).max(floor)
}

/// Chain speed multiplier for a wave, clamped at the maximum.
pub fn speed_multiplier(wave: u32) -> f64 {
    (1.0 + (wave - 1) as f64 * CHAIN_SPEED_WAVE_INCREMENT).min(CHAIN_SPEED_MULTIPLIER_MAX)
}
