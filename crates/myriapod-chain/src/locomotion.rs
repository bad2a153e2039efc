//! Segment locomotion finite state machine.
//!
//! Computes state transitions and positional updates for one chain
//! segment per tick. Boundary and obstacle checks are evaluated by the
//! caller against the *prospective* position (never the current one)
//! and passed in; nothing here touches the world.

use myriapod_core::constants::{DESCENT_DISTANCE, DESCENT_RATE_MULTIPLIER, PLAYER_AREA_TOP};
use myriapod_core::enums::SegmentState;
use myriapod_core::types::{Position, Velocity};

/// What the caller found at the segment's prospective position.
#[derive(Debug, Clone, Copy)]
pub struct Blocker {
    /// The blocking obstacle is poisoned.
    pub hazard: bool,
}

/// Input to the locomotion FSM for a single segment.
pub struct SegmentContext {
    pub state: SegmentState,
    pub position: Position,
    /// Unit heading. Horizontal while Moving, straight down while
    /// descending.
    pub direction: Velocity,
    pub speed: f64,
    /// Accumulated descent progress toward one row.
    pub descend_progress: f64,
    /// Horizontal sign to resume after a poison dive.
    pub resume_dx: f64,
    /// Obstacle overlapping the prospective position, if any.
    pub blocking: Option<Blocker>,
    /// Prospective position crosses a lateral field boundary.
    pub at_lateral_bound: bool,
    pub dt: f64,
}

/// Output from the locomotion FSM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentUpdate {
    pub state: SegmentState,
    pub position: Position,
    pub direction: Velocity,
    pub descend_progress: f64,
    pub resume_dx: f64,
}

/// The position a Moving segment would occupy next tick. The caller
/// runs its boundary and obstacle checks against this before calling
/// [`step`], so no partial move is ever committed and then corrected.
pub fn prospective(position: &Position, direction: &Velocity, speed: f64, dt: f64) -> Position {
    Position::new(
        position.x + direction.x * speed * dt,
        position.y + direction.y * speed * dt,
    )
}

/// Advance one segment by one tick.
pub fn step(ctx: &SegmentContext) -> SegmentUpdate {
    match ctx.state {
        SegmentState::Moving => step_moving(ctx),
        SegmentState::Descending => step_descending(ctx),
        SegmentState::PoisonDescending => step_poison(ctx),
        // Terminal; excluded from simulation by the caller, but a
        // defensive no-op if it does get here.
        SegmentState::Destroyed => unchanged(ctx),
    }
}

fn unchanged(ctx: &SegmentContext) -> SegmentUpdate {
    SegmentUpdate {
        state: ctx.state,
        position: ctx.position,
        direction: ctx.direction,
        descend_progress: ctx.descend_progress,
        resume_dx: ctx.resume_dx,
    }
}

fn step_moving(ctx: &SegmentContext) -> SegmentUpdate {
    // Hazard contact overrides the normal turn: dive straight down,
    // remembering the horizontal sign for when the dive ends.
    if let Some(blocker) = ctx.blocking {
        if blocker.hazard {
            return SegmentUpdate {
                state: SegmentState::PoisonDescending,
                position: ctx.position,
                direction: Velocity::new(0.0, 1.0),
                descend_progress: 0.0,
                resume_dx: ctx.direction.x,
            };
        }
    }

    // Boundary or plain obstacle: begin a one-row descent. The
    // prospective horizontal move is discarded this tick.
    if ctx.at_lateral_bound || ctx.blocking.is_some() {
        return SegmentUpdate {
            state: SegmentState::Descending,
            descend_progress: 0.0,
            ..unchanged(ctx)
        };
    }

    SegmentUpdate {
        position: prospective(&ctx.position, &ctx.direction, ctx.speed, ctx.dt),
        ..unchanged(ctx)
    }
}

fn step_descending(ctx: &SegmentContext) -> SegmentUpdate {
    let advance = ctx.speed * DESCENT_RATE_MULTIPLIER * ctx.dt;
    let progress = ctx.descend_progress + advance;

    if progress >= DESCENT_DISTANCE {
        // Row complete: reverse horizontal direction and resume. No
        // vertical move on the completing tick.
        return SegmentUpdate {
            state: SegmentState::Moving,
            direction: Velocity::new(-ctx.direction.x, 0.0),
            descend_progress: 0.0,
            ..unchanged(ctx)
        };
    }

    SegmentUpdate {
        position: Position::new(ctx.position.x, ctx.position.y + advance),
        descend_progress: progress,
        ..unchanged(ctx)
    }
}

fn step_poison(ctx: &SegmentContext) -> SegmentUpdate {
    // Straight down at normal speed; no accumulator, no reversal. The
    // dive ends at the player-area boundary, where the segment resumes
    // its remembered horizontal heading.
    let new_y = ctx.position.y + ctx.speed * ctx.dt;

    if new_y >= PLAYER_AREA_TOP {
        return SegmentUpdate {
            state: SegmentState::Moving,
            position: Position::new(ctx.position.x, PLAYER_AREA_TOP),
            direction: Velocity::new(ctx.resume_dx, 0.0),
            descend_progress: 0.0,
            ..unchanged(ctx)
        };
    }

    SegmentUpdate {
        position: Position::new(ctx.position.x, new_y),
        ..unchanged(ctx)
    }
}
