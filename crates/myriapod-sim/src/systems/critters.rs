//! Spawned-enemy behaviors.
//!
//! Fliers seed obstacles as they fall, roamers zigzag through the
//! player band eating obstacles, poisoners mark the obstacles they
//! cross as hazardous. Decisions are collected over a read pass, then
//! applied, so obstacle mutation never races the iteration.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use myriapod_core::components::{Collider, Critter, Obstacle};
use myriapod_core::constants::*;
use myriapod_core::enums::CritterKind;
use myriapod_core::geometry;
use myriapod_core::types::{Position, Velocity};

use crate::world_setup;

enum Action {
    DropObstacle(Position),
    EatObstacle(Entity),
    PoisonObstacle(Entity),
    Zigzag(Entity, Velocity),
}

/// Run all critter behaviors for one tick.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, dt: f64) {
    let obstacles: Vec<(Entity, Position)> = world
        .query::<(&Obstacle, &Position)>()
        .iter()
        .map(|(entity, (_, pos))| (entity, *pos))
        .collect();

    let mut actions: Vec<Action> = Vec::new();

    for (entity, (critter, pos, vel, collider)) in world
        .query::<(&mut Critter, &Position, &Velocity, &Collider)>()
        .iter()
    {
        match critter.kind {
            CritterKind::Flier => {
                // Random obstacle drops once inside the field.
                if pos.y > FLIER_DROP_MIN_Y && rng.gen::<f64>() < FLIER_DROP_CHANCE * dt {
                    actions.push(Action::DropObstacle(*pos));
                }
            }
            CritterKind::Roamer => {
                critter.zigzag_timer += dt;
                if critter.zigzag_timer >= ROAMER_ZIGZAG_INTERVAL {
                    critter.zigzag_timer = 0.0;
                    let dy = [-1.0, 0.0, 1.0][rng.gen_range(0..3)] * 0.5;
                    let dx = if vel.x < 0.0 { -1.0 } else { 1.0 };
                    let heading = Velocity::new(dx, dy).normalized();
                    actions.push(Action::Zigzag(
                        entity,
                        Velocity::new(heading.x * ROAMER_SPEED, heading.y * ROAMER_SPEED),
                    ));
                }
                // Eats at most one obstacle per tick.
                if let Some((target, _)) = obstacles.iter().find(|(_, opos)| {
                    geometry::circles_overlap(pos, collider.radius, opos, OBSTACLE_RADIUS)
                }) {
                    actions.push(Action::EatObstacle(*target));
                }
            }
            CritterKind::Poisoner => {
                for (target, opos) in &obstacles {
                    if geometry::circles_overlap(pos, collider.radius, opos, OBSTACLE_RADIUS) {
                        actions.push(Action::PoisonObstacle(*target));
                    }
                }
            }
        }
    }

    for action in actions {
        match action {
            Action::DropObstacle(pos) => {
                world_setup::spawn_obstacle(world, pos);
            }
            Action::EatObstacle(entity) => {
                let _ = world.despawn(entity);
            }
            Action::PoisonObstacle(entity) => {
                if let Ok(mut obstacle) = world.get::<&mut Obstacle>(entity) {
                    obstacle.hazard = true;
                }
            }
            Action::Zigzag(entity, velocity) => {
                if let Ok(mut vel) = world.get::<&mut Velocity>(entity) {
                    *vel = velocity;
                }
            }
        }
    }
}
