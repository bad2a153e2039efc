//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D position in field space (pixels, Cartesian).
/// x grows rightward, y grows downward (toward the player area).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity or direction vector (pixels/second, or a unit heading).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking. The host frame loop supplies a variable
/// `dt` each tick; elapsed time accumulates whatever it is given.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Speed magnitude.
    pub fn speed(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit-length copy; the zero vector normalizes to itself.
    pub fn normalized(&self) -> Velocity {
        let mag = self.speed();
        if mag > 0.0 {
            Velocity::new(self.x / mag, self.y / mag)
        } else {
            *self
        }
    }
}

impl SimTime {
    /// Advance by one tick of the given duration.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
