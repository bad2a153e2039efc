//! Chain segment locomotion system.
//!
//! Gathers each segment's surroundings — boundary and obstacle tests
//! run against the *prospective* position, over a snapshot of live
//! obstacles — then steps the pure FSM and applies the result.

use hecs::World;

use myriapod_core::components::{Obstacle, Segment};
use myriapod_core::constants::*;
use myriapod_core::enums::SegmentState;
use myriapod_core::geometry;
use myriapod_core::types::Position;

use myriapod_chain::locomotion::{prospective, step, Blocker, SegmentContext};

/// Advance every live segment by one tick.
pub fn run(world: &mut World, dt: f64) {
    // Obstacle snapshot: segments may trigger obstacle spawns later in
    // the tick, and iterating a stable copy keeps the pass safe.
    let obstacles: Vec<(Position, f64, bool)> = world
        .query::<(&Obstacle, &Position)>()
        .iter()
        .map(|(_, (obs, pos))| (*pos, OBSTACLE_RADIUS, obs.hazard))
        .collect();

    for (_entity, (segment, pos)) in world.query_mut::<(&mut Segment, &mut Position)>() {
        if segment.state == SegmentState::Destroyed {
            continue;
        }

        // Surroundings are only consulted while Moving; descent states
        // ignore them.
        let (blocking, at_lateral_bound) = if segment.state == SegmentState::Moving {
            let next = prospective(pos, &segment.direction, segment.speed, dt);
            let blocking = obstacles
                .iter()
                .find(|(opos, oradius, _)| {
                    geometry::circles_overlap(&next, SEGMENT_RADIUS, opos, *oradius)
                })
                .map(|(_, _, hazard)| Blocker { hazard: *hazard });
            // A boundary only blocks a segment moving into it, so a
            // chain entering from off-field walks in cleanly.
            let at_bound = (next.x <= FIELD_LEFT_BOUND && segment.direction.x < 0.0)
                || (next.x >= FIELD_RIGHT_BOUND && segment.direction.x > 0.0);
            (blocking, at_bound)
        } else {
            (None, false)
        };

        let update = step(&SegmentContext {
            state: segment.state,
            position: *pos,
            direction: segment.direction,
            speed: segment.speed,
            descend_progress: segment.descend_progress,
            resume_dx: segment.resume_dx,
            blocking,
            at_lateral_bound,
            dt,
        });

        segment.state = update.state;
        segment.direction = update.direction;
        segment.descend_progress = update.descend_progress;
        segment.resume_dx = update.resume_dx;
        *pos = update.position;

        // One-time slowdown on first entry into the player band.
        if !segment.in_player_area && pos.y > PLAYER_AREA_TOP {
            segment.in_player_area = true;
            segment.speed *= PLAYER_AREA_SPEED_FACTOR;
        }
    }
}
