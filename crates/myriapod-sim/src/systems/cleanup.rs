//! Cleanup system: removes entities that are out of the field or in a
//! terminal state. Uses a pre-allocated buffer to avoid per-tick
//! allocation.

use hecs::{Entity, World};

use myriapod_core::components::{Critter, Dart, Segment};
use myriapod_core::constants::{FIELD_HEIGHT, PLAYER_AREA_TOP};
use myriapod_core::enums::{CritterKind, SegmentState};
use myriapod_core::types::Position;

use crate::chains::ChainSet;

pub fn run(world: &mut World, chains: &mut ChainSet, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    // Darts that left through the top edge.
    for (entity, (_, pos)) in world.query_mut::<(&Dart, &Position)>() {
        if pos.y < -10.0 {
            despawn_buffer.push(entity);
        }
    }

    // Destroyed segments (fragmentation already dropped them from
    // their chain).
    for (entity, segment) in world.query_mut::<&Segment>() {
        if segment.state == SegmentState::Destroyed {
            despawn_buffer.push(entity);
        }
    }

    // Critters that wandered off their operating region.
    for (entity, (critter, pos)) in world.query_mut::<(&Critter, &Position)>() {
        let gone = match critter.kind {
            CritterKind::Flier => pos.y > FIELD_HEIGHT + 10.0,
            CritterKind::Roamer => {
                pos.x < -20.0 || pos.x > 820.0 || pos.y < PLAYER_AREA_TOP || pos.y > FIELD_HEIGHT
            }
            CritterKind::Poisoner => pos.x < -30.0 || pos.x > 830.0,
        };
        if gone {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    chains.purge_destroyed(world);
}
