//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the player, the initial obstacle field, chain segments,
//! and spawned enemies with appropriate component bundles.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use myriapod_core::components::*;
use myriapod_core::constants::*;
use myriapod_core::enums::{CritterKind, SegmentState};
use myriapod_core::types::{Position, Velocity};

use crate::chains::ChainSet;

/// Spawn the player's ship at the start position.
pub fn spawn_player(world: &mut World) -> Entity {
    world.spawn((
        PlayerShip {
            speed: PLAYER_SPEED,
            fire_cooldown: 0.0,
            flashing: false,
        },
        Position::new(PLAYER_START_X, PLAYER_START_Y),
        Collider {
            radius: PLAYER_RADIUS,
        },
    ))
}

/// Spawn one dart just above the player.
pub fn spawn_dart(world: &mut World, player_pos: &Position) -> Entity {
    world.spawn((
        Dart,
        Position::new(player_pos.x, player_pos.y - 10.0),
        Velocity::new(0.0, -DART_SPEED),
        Collider {
            radius: DART_RADIUS,
        },
    ))
}

/// Spawn a fresh, undamaged obstacle.
pub fn spawn_obstacle(world: &mut World, position: Position) -> Entity {
    world.spawn((
        Obstacle {
            hits: 0,
            max_hits: OBSTACLE_MAX_HITS,
            hazard: false,
            flashing: false,
        },
        position,
        Collider {
            radius: OBSTACLE_RADIUS,
        },
    ))
}

/// Seed the field with obstacles on a sparse grid.
pub fn generate_field(world: &mut World, rng: &mut ChaCha8Rng) {
    let step = FIELD_GRID_STEP as usize;
    for y in ((FIELD_GRID_MIN_Y as usize)..(FIELD_GRID_MAX_Y as usize)).step_by(step) {
        for x in ((FIELD_GRID_MIN_X as usize)..(FIELD_GRID_MAX_X as usize)).step_by(step) {
            if rng.gen::<f64>() < FIELD_DENSITY {
                spawn_obstacle(world, Position::new(x as f64, y as f64));
            }
        }
    }
}

/// Spawn a chain of `length` segments at the top of the field, entering
/// from a random side, and register it with the chain set. Index 0 is
/// the head.
pub fn spawn_chain(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    chains: &mut ChainSet,
    length: u32,
    speed: f64,
) -> u32 {
    let from_left = rng.gen_bool(0.5);
    let start_x = if from_left { 50.0 } else { 750.0 };
    let dx = if from_left { 1.0 } else { -1.0 };

    let mut segments = Vec::with_capacity(length as usize);
    for i in 0..length {
        let entity = world.spawn((
            Segment {
                chain_id: 0, // stamped by ChainSet::register
                is_head: i == 0,
                state: SegmentState::Moving,
                direction: Velocity::new(dx, 0.0),
                speed,
                descend_progress: 0.0,
                resume_dx: dx,
                in_player_area: false,
            },
            Position::new(start_x + i as f64 * SEGMENT_SPACING, CHAIN_SPAWN_Y),
            Collider {
                radius: SEGMENT_RADIUS,
            },
        ));
        segments.push(entity);
    }

    chains.register(world, segments)
}

/// Spawn one enemy of the given category at its entry point.
pub fn spawn_critter(world: &mut World, rng: &mut ChaCha8Rng, kind: CritterKind) -> Entity {
    let (position, velocity, radius) = match kind {
        // Drops in from a random spot along the top edge.
        CritterKind::Flier => {
            let x = rng.gen_range(FLIER_SPAWN_MIN_X..=FLIER_SPAWN_MAX_X);
            (
                Position::new(x, -10.0),
                Velocity::new(0.0, FLIER_SPEED),
                FLIER_RADIUS,
            )
        }
        // Enters the player band from a random side, heading inward.
        CritterKind::Roamer => {
            let from_left = rng.gen_bool(0.5);
            let x = if from_left { 50.0 } else { 750.0 };
            let dx = if from_left { 1.0 } else { -1.0 };
            let y = rng.gen_range(ROAMER_SPAWN_MIN_Y..=ROAMER_SPAWN_MAX_Y);
            (
                Position::new(x, y),
                Velocity::new(dx * ROAMER_SPEED, 0.0),
                ROAMER_RADIUS,
            )
        }
        // Crosses the upper field horizontally from off-screen.
        CritterKind::Poisoner => {
            let from_left = rng.gen_bool(0.5);
            let x = if from_left { -20.0 } else { 820.0 };
            let dx = if from_left { 1.0 } else { -1.0 };
            let y = rng.gen_range(POISONER_SPAWN_MIN_Y..=POISONER_SPAWN_MAX_Y);
            (
                Position::new(x, y),
                Velocity::new(dx * POISONER_SPEED, 0.0),
                POISONER_RADIUS,
            )
        }
    };

    world.spawn((
        Critter {
            kind,
            hits_taken: 0,
            zigzag_timer: 0.0,
        },
        position,
        velocity,
        Collider { radius },
    ))
}
