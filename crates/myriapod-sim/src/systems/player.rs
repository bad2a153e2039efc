//! Player movement and dart firing.
//!
//! The held movement input and one-shot fire request arrive as queued
//! commands; this system applies them inside the player band.

use hecs::World;

use myriapod_core::components::PlayerShip;
use myriapod_core::constants::*;
use myriapod_core::events::GameEvent;
use myriapod_core::types::{Position, Velocity};

use crate::world_setup;

/// Apply movement input and fire requests for one tick.
pub fn run(
    world: &mut World,
    move_input: Velocity,
    fire_requested: bool,
    dt: f64,
    events: &mut Vec<GameEvent>,
) {
    let mut fire_from: Option<Position> = None;

    for (_entity, (player, pos)) in world.query_mut::<(&mut PlayerShip, &mut Position)>() {
        player.fire_cooldown -= dt;

        let heading = move_input.normalized();
        if heading.speed() > 0.0 {
            pos.x = (pos.x + heading.x * player.speed * dt).clamp(PLAYER_MIN_X, PLAYER_MAX_X);
            pos.y = (pos.y + heading.y * player.speed * dt)
                .clamp(PLAYER_AREA_TOP, PLAYER_AREA_BOTTOM);
        }

        if fire_requested && player.fire_cooldown <= 0.0 {
            player.fire_cooldown = FIRE_COOLDOWN;
            fire_from = Some(*pos);
        }
    }

    if let Some(pos) = fire_from {
        world_setup::spawn_dart(world, &pos);
        events.push(GameEvent::DartFired);
    }
}
