//! Hit application — the entry points a resolved collision funnels
//! through. Every hit is idempotent: applying one to an entity that is
//! already destroyed (or gone) is a no-op.

use hecs::{Entity, World};

use myriapod_core::components::{Critter, Obstacle, PlayerShip, Segment};
use myriapod_core::constants::*;
use myriapod_core::enums::{CritterKind, SegmentState};
use myriapod_core::events::GameEvent;
use myriapod_core::types::Position;

use crate::chains::ChainSet;
use crate::effects::{DeferredEffect, EffectAction};
use crate::score::ScoreState;
use crate::world_setup;

/// Apply one dart hit to an obstacle. Increments durability damage;
/// the final hit destroys it and awards its point value, earlier hits
/// flash it briefly.
pub fn hit_obstacle(
    world: &mut World,
    entity: Entity,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
    effects: &mut Vec<DeferredEffect>,
) {
    let destroyed = match world.get::<&mut Obstacle>(entity) {
        Ok(mut obstacle) => {
            if obstacle.hits >= obstacle.max_hits {
                return; // already dead, double-destroy is a no-op
            }
            obstacle.hits += 1;
            if obstacle.hits >= obstacle.max_hits {
                true
            } else {
                obstacle.flashing = true;
                effects.push(DeferredEffect::new(
                    HIT_FLASH_SECS,
                    EffectAction::ClearObstacleFlash(entity),
                ));
                false
            }
        }
        Err(_) => return,
    };

    if destroyed {
        score.award(OBSTACLE_POINTS);
        events.push(GameEvent::ObstacleDestroyed);
        let _ = world.despawn(entity);
    }
}

/// Apply one dart hit to a chain segment: award the head or body
/// value, leave an obstacle at its last position, fragment the owning
/// chain, and mark the segment destroyed.
pub fn hit_segment(
    world: &mut World,
    entity: Entity,
    chains: &mut ChainSet,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
) {
    let (position, is_head) = match world.get::<&Segment>(entity) {
        Ok(segment) if segment.state != SegmentState::Destroyed => {
            let pos = world
                .get::<&Position>(entity)
                .map(|p| *p)
                .unwrap_or_default();
            (pos, segment.is_head)
        }
        _ => return,
    };

    score.award(if is_head { HEAD_POINTS } else { BODY_POINTS });
    events.push(GameEvent::SegmentDestroyed { head: is_head });

    world_setup::spawn_obstacle(world, position);
    chains.split_on_hit(world, entity);

    if let Ok(mut segment) = world.get::<&mut Segment>(entity) {
        segment.state = SegmentState::Destroyed;
    }
}

/// Apply one dart hit to a spawned enemy. Fliers absorb two hits; the
/// roamer's value scales with its distance to the player at the kill.
pub fn hit_critter(
    world: &mut World,
    entity: Entity,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
) {
    let kind = match world.get::<&mut Critter>(entity) {
        Ok(mut critter) => {
            critter.hits_taken += 1;
            let required = match critter.kind {
                CritterKind::Flier => FLIER_HITS_REQUIRED,
                CritterKind::Roamer | CritterKind::Poisoner => 1,
            };
            if critter.hits_taken < required {
                return;
            }
            critter.kind
        }
        Err(_) => return,
    };

    let points = match kind {
        CritterKind::Flier => FLIER_POINTS,
        CritterKind::Poisoner => POISONER_POINTS,
        CritterKind::Roamer => roamer_points(world, entity),
    };

    score.award(points);
    events.push(GameEvent::CritterDestroyed { kind });
    let _ = world.despawn(entity);
}

/// Roamer value: base, doubled inside the mid ring, tripled inside the
/// close ring around the player.
fn roamer_points(world: &World, entity: Entity) -> u64 {
    let roamer_pos = match world.get::<&Position>(entity) {
        Ok(p) => *p,
        Err(_) => return ROAMER_BASE_POINTS,
    };
    let player_pos = world
        .query::<(&PlayerShip, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos);

    match player_pos {
        Some(pos) => {
            let distance = roamer_pos.distance_to(&pos);
            if distance < ROAMER_CLOSE_RANGE {
                ROAMER_BASE_POINTS * 3
            } else if distance < ROAMER_MID_RANGE {
                ROAMER_BASE_POINTS * 2
            } else {
                ROAMER_BASE_POINTS
            }
        }
        None => ROAMER_BASE_POINTS,
    }
}

/// Handle the player touching an enemy. Returns true when the last
/// life was lost; otherwise heals the obstacle field and respawns the
/// player at the start position.
pub fn player_death(
    world: &mut World,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
    effects: &mut Vec<DeferredEffect>,
) -> bool {
    score.lives = score.lives.saturating_sub(1);
    events.push(GameEvent::PlayerDeath {
        lives_remaining: score.lives,
    });

    if score.lives == 0 {
        return true;
    }

    // Global regenerate: every damaged or poisoned obstacle heals, and
    // each one healed is worth a small bonus.
    let mut healed = 0u32;
    for (_entity, obstacle) in world.query_mut::<&mut Obstacle>() {
        if obstacle.hits > 0 || obstacle.hazard {
            obstacle.hits = 0;
            obstacle.hazard = false;
            obstacle.flashing = false;
            healed += 1;
        }
    }
    if healed > 0 {
        score.award(healed as u64 * OBSTACLE_REGEN_POINTS);
        events.push(GameEvent::ObstaclesRegenerated { count: healed });
    }

    for (_entity, (player, pos)) in world.query_mut::<(&mut PlayerShip, &mut Position)>() {
        pos.x = PLAYER_START_X;
        pos.y = PLAYER_START_Y;
        player.flashing = true;
    }
    effects.push(DeferredEffect::new(
        HIT_FLASH_SECS,
        EffectAction::ClearPlayerFlash,
    ));

    false
}
