//! Snapshot system: queries the ECS world and builds a complete
//! GameStateSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use myriapod_core::components::*;
use myriapod_core::enums::{GamePhase, SegmentState};
use myriapod_core::events::GameEvent;
use myriapod_core::state::*;
use myriapod_core::types::{Position, SimTime};

use crate::score::ScoreState;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    wave: u32,
    score: &ScoreState,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        score: score.score,
        lives: score.lives,
        wave,
        player: build_player(world),
        segments: build_segments(world),
        obstacles: build_obstacles(world),
        critters: build_critters(world),
        darts: build_darts(world),
        events,
    }
}

fn build_player(world: &World) -> Option<PlayerView> {
    world
        .query::<(&PlayerShip, &Position)>()
        .iter()
        .next()
        .map(|(_, (player, pos))| PlayerView {
            position: *pos,
            flashing: player.flashing,
        })
}

fn build_segments(world: &World) -> Vec<SegmentView> {
    world
        .query::<(&Segment, &Position)>()
        .iter()
        .filter(|(_, (segment, _))| segment.state != SegmentState::Destroyed)
        .map(|(_, (segment, pos))| SegmentView {
            position: *pos,
            chain_id: segment.chain_id,
            is_head: segment.is_head,
            state: segment.state,
        })
        .collect()
}

fn build_obstacles(world: &World) -> Vec<ObstacleView> {
    world
        .query::<(&Obstacle, &Position)>()
        .iter()
        .map(|(_, (obstacle, pos))| ObstacleView {
            position: *pos,
            hits: obstacle.hits,
            max_hits: obstacle.max_hits,
            hazard: obstacle.hazard,
            flashing: obstacle.flashing,
        })
        .collect()
}

fn build_critters(world: &World) -> Vec<CritterView> {
    world
        .query::<(&Critter, &Position)>()
        .iter()
        .map(|(_, (critter, pos))| CritterView {
            position: *pos,
            kind: critter.kind,
        })
        .collect()
}

fn build_darts(world: &World) -> Vec<Position> {
    world
        .query::<(&Dart, &Position)>()
        .iter()
        .map(|(_, (_, pos))| *pos)
        .collect()
}
