//! Spawn and wave scheduling system.
//!
//! Advances per-category timers, applies population guards and caps,
//! spawns the wave's chain, and escalates the wave when the chain is
//! cleared.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use myriapod_core::components::Obstacle;
use myriapod_core::constants::{FLIER_OBSTACLE_GUARD, PLAYER_AREA_TOP};
use myriapod_core::enums::CritterKind;
use myriapod_core::events::GameEvent;
use myriapod_core::types::Position;

use crate::chains::ChainSet;
use crate::spawn::SpawnController;
use crate::world_setup;

/// Run spawn timers and the wave lifecycle for one tick.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    controller: &mut SpawnController,
    chains: &mut ChainSet,
    events: &mut Vec<GameEvent>,
    dt: f64,
) {
    // The wave's chain spawns first so completion can never trigger
    // before the wave has begun.
    if !controller.chain_spawned {
        world_setup::spawn_chain(
            world,
            rng,
            chains,
            controller.chain_length,
            controller.chain_speed(),
        );
        controller.chain_spawned = true;
    }

    // Fliers are additionally gated on the obstacle population in the
    // player area. A refused attempt still resets the timer.
    if controller.flier.due(dt)
        && controller.flier.under_cap()
        && player_area_obstacles(world) < FLIER_OBSTACLE_GUARD
    {
        world_setup::spawn_critter(world, rng, CritterKind::Flier);
        controller.flier.spawned += 1;
    }

    if controller.roamer.due(dt) && controller.roamer.under_cap() {
        world_setup::spawn_critter(world, rng, CritterKind::Roamer);
        controller.roamer.spawned += 1;
    }

    if controller.poisoner.due(dt) && controller.poisoner.under_cap() {
        world_setup::spawn_critter(world, rng, CritterKind::Poisoner);
        controller.poisoner.spawned += 1;
    }

    // Wave completes when the chain has been spawned and fully cleared.
    if controller.chain_spawned && chains.live_segments() == 0 {
        events.push(GameEvent::WaveComplete {
            wave: controller.wave,
        });
        controller.advance_wave();
    }
}

/// Live obstacles inside the player band.
fn player_area_obstacles(world: &World) -> usize {
    world
        .query::<(&Obstacle, &Position)>()
        .iter()
        .filter(|(_, (_, pos))| pos.y > PLAYER_AREA_TOP)
        .count()
}
