//! One-shot deferred effects.
//!
//! Cosmetic state reverts (hit flashes) are scheduled with a delay and
//! fire exactly once. Actions are a tagged variant rather than boxed
//! closures so the pending set stays plain data.

use hecs::{Entity, World};

use myriapod_core::components::{Obstacle, PlayerShip};

/// What a deferred effect does when it fires.
#[derive(Debug, Clone, Copy)]
pub enum EffectAction {
    /// Revert an obstacle's hit flash.
    ClearObstacleFlash(Entity),
    /// Revert the player's hit flash.
    ClearPlayerFlash,
}

/// A countdown paired with an action. Self-removes after firing.
#[derive(Debug, Clone)]
pub struct DeferredEffect {
    pub remaining: f64,
    pub action: EffectAction,
}

impl DeferredEffect {
    pub fn new(delay_secs: f64, action: EffectAction) -> Self {
        Self {
            remaining: delay_secs,
            action,
        }
    }
}

/// Tick all pending effects down; fire and drop the expired ones.
/// Effects are independent; ordering within one tick is unspecified
/// but each fires exactly once.
pub fn run(world: &mut World, effects: &mut Vec<DeferredEffect>, dt: f64) {
    effects.retain_mut(|effect| {
        effect.remaining -= dt;
        if effect.remaining <= 0.0 {
            fire(world, effect.action);
            false
        } else {
            true
        }
    });
}

fn fire(world: &mut World, action: EffectAction) {
    match action {
        EffectAction::ClearObstacleFlash(entity) => {
            // The obstacle may have been destroyed in the meantime.
            if let Ok(mut obstacle) = world.get::<&mut Obstacle>(entity) {
                obstacle.flashing = false;
            }
        }
        EffectAction::ClearPlayerFlash => {
            for (_entity, player) in world.query_mut::<&mut PlayerShip>() {
                player.flashing = false;
            }
        }
    }
}
