//! Proximity collision kernel — pure predicates, no state.
//!
//! Callers pick the appropriate test: the circle test covers actor,
//! obstacle, and projectile bodies; the box test covers rectangular
//! paddle/brick style bodies.

use crate::types::Position;

/// Euclidean distance between two positions.
pub fn distance(a: &Position, b: &Position) -> f64 {
    a.distance_to(b)
}

/// Circle-vs-circle overlap: strictly `distance < ra + rb`.
/// Touching circles (distance exactly equal to the radius sum) do
/// not overlap.
pub fn circles_overlap(pa: &Position, ra: f64, pb: &Position, rb: f64) -> bool {
    distance(pa, pb) < ra + rb
}

/// Axis-aligned box overlap via half-extent comparison on both axes.
/// `half_*` are (half-width, half-height) pairs; all four axis
/// conditions must hold simultaneously.
pub fn boxes_overlap(
    ca: &Position,
    half_a: (f64, f64),
    cb: &Position,
    half_b: (f64, f64),
) -> bool {
    (ca.x - cb.x).abs() < half_a.0 + half_b.0 && (ca.y - cb.y).abs() < half_a.1 + half_b.1
}
