//! Collision resolution.
//!
//! Proximity queries run over read snapshots of the live entities, and
//! hit outcomes are applied afterwards through the combat entry points,
//! so collections are never mutated while being scanned. A collision
//! check against an empty collection is simply no collision.

use hecs::{Entity, World};

use myriapod_core::components::{Collider, Critter, Dart, Obstacle, PlayerShip, Segment};
use myriapod_core::enums::SegmentState;
use myriapod_core::events::GameEvent;
use myriapod_core::geometry;
use myriapod_core::types::Position;

use crate::chains::ChainSet;
use crate::effects::DeferredEffect;
use crate::score::ScoreState;
use crate::systems::combat;

enum Target {
    Obstacle(Entity),
    Segment(Entity),
    Critter(Entity),
}

/// Resolve all dart and player contacts for one tick. Returns true
/// when the player lost their last life.
pub fn run(
    world: &mut World,
    chains: &mut ChainSet,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
    effects: &mut Vec<DeferredEffect>,
) -> bool {
    resolve_dart_hits(world, chains, score, events, effects);
    resolve_player_contact(world, score, events, effects)
}

fn resolve_dart_hits(
    world: &mut World,
    chains: &mut ChainSet,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
    effects: &mut Vec<DeferredEffect>,
) {
    let darts: Vec<(Entity, Position, f64)> = world
        .query::<(&Dart, &Position, &Collider)>()
        .iter()
        .map(|(entity, (_, pos, collider))| (entity, *pos, collider.radius))
        .collect();
    if darts.is_empty() {
        return;
    }

    let obstacles = snapshot::<Obstacle>(world);
    let segments: Vec<(Entity, Position, f64)> = world
        .query::<(&Segment, &Position, &Collider)>()
        .iter()
        .filter(|(_, (segment, _, _))| segment.state != SegmentState::Destroyed)
        .map(|(entity, (_, pos, collider))| (entity, *pos, collider.radius))
        .collect();
    let critters = snapshot::<Critter>(world);

    // Each dart is consumed by its first overlap, checked in field
    // order: obstacles, then segments, then critters.
    let mut hits: Vec<(Entity, Target)> = Vec::new();
    for (dart, dart_pos, dart_radius) in darts {
        let target = find_overlap(&dart_pos, dart_radius, &obstacles)
            .map(Target::Obstacle)
            .or_else(|| find_overlap(&dart_pos, dart_radius, &segments).map(Target::Segment))
            .or_else(|| find_overlap(&dart_pos, dart_radius, &critters).map(Target::Critter));
        if let Some(target) = target {
            hits.push((dart, target));
        }
    }

    for (dart, target) in hits {
        let _ = world.despawn(dart);
        match target {
            Target::Obstacle(entity) => combat::hit_obstacle(world, entity, score, events, effects),
            Target::Segment(entity) => combat::hit_segment(world, entity, chains, score, events),
            Target::Critter(entity) => combat::hit_critter(world, entity, score, events),
        }
    }
}

fn resolve_player_contact(
    world: &mut World,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
    effects: &mut Vec<DeferredEffect>,
) -> bool {
    let player = world
        .query::<(&PlayerShip, &Position, &Collider)>()
        .iter()
        .next()
        .map(|(_, (_, pos, collider))| (*pos, collider.radius));
    let (player_pos, player_radius) = match player {
        Some(p) => p,
        None => return false,
    };

    // Enemy snapshots are taken after dart application, so anything a
    // dart destroyed this tick is already excluded.
    let mut touched = false;
    for (_, (segment, pos, collider)) in world.query::<(&Segment, &Position, &Collider)>().iter() {
        if segment.state != SegmentState::Destroyed
            && geometry::circles_overlap(&player_pos, player_radius, pos, collider.radius)
        {
            touched = true;
            break;
        }
    }
    if !touched {
        for (_, (_, pos, collider)) in world.query::<(&Critter, &Position, &Collider)>().iter() {
            if geometry::circles_overlap(&player_pos, player_radius, pos, collider.radius) {
                touched = true;
                break;
            }
        }
    }

    if touched {
        combat::player_death(world, score, events, effects)
    } else {
        false
    }
}

/// Stable (entity, position, radius) copy of every live entity holding
/// component `T`.
fn snapshot<T: hecs::Component>(world: &World) -> Vec<(Entity, Position, f64)> {
    world
        .query::<(&T, &Position, &Collider)>()
        .iter()
        .map(|(entity, (_, pos, collider))| (entity, *pos, collider.radius))
        .collect()
}

fn find_overlap(
    pos: &Position,
    radius: f64,
    candidates: &[(Entity, Position, f64)],
) -> Option<Entity> {
    candidates
        .iter()
        .find(|(_, cpos, cradius)| geometry::circles_overlap(pos, radius, cpos, *cradius))
        .map(|(entity, _, _)| *entity)
}
