//! Simulation engine — the core of the game.
//!
//! `Simulation` owns the hecs ECS world, processes player commands at
//! tick boundaries, runs all systems, and produces `GameStateSnapshot`s.
//! Completely headless (no rendering or input dependency), enabling
//! deterministic testing: the same seed and command/dt sequence yields
//! bit-identical snapshots.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use myriapod_core::commands::PlayerCommand;
use myriapod_core::constants::EXTRA_LIFE_SCORE;
use myriapod_core::enums::GamePhase;
use myriapod_core::events::GameEvent;
use myriapod_core::state::GameStateSnapshot;
use myriapod_core::types::{SimTime, Velocity};

use crate::chains::ChainSet;
use crate::effects::{self, DeferredEffect};
use crate::score::ScoreState;
use crate::spawn::SpawnController;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the ECS world and all game state.
pub struct Simulation {
    world: World,
    time: SimTime,
    phase: GamePhase,
    seed: u64,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    chains: ChainSet,
    spawner: SpawnController,
    score: ScoreState,
    effects: Vec<DeferredEffect>,
    move_input: Velocity,
    fire_requested: bool,
}

impl Simulation {
    /// Create a new simulation with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            seed: config.seed,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            chains: ChainSet::new(),
            spawner: SpawnController::new(),
            score: ScoreState::default(),
            effects: Vec::new(),
            move_input: Velocity::default(),
            fire_requested: false,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick of `dt` seconds (supplied by
    /// the host frame loop) and return the resulting snapshot.
    pub fn tick(&mut self, dt: f64) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active && dt > 0.0 {
            self.run_systems(dt);
            self.time.advance(dt);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.spawner.wave,
            &self.score,
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the score state.
    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Get a read-only reference to the spawn/wave controller.
    pub fn spawner(&self) -> &SpawnController {
        &self.spawner
    }

    /// Get a read-only reference to the chain set.
    pub fn chains(&self) -> &ChainSet {
        &self.chains
    }

    /// Get a mutable reference to the ECS world (for tests).
    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Add points directly (for tests exercising score thresholds).
    #[cfg(test)]
    pub(crate) fn award_points(&mut self, points: u64) {
        self.score.award(points);
    }

    /// Destroy every live chain segment through the normal hit path
    /// (for tests exercising wave completion).
    #[cfg(test)]
    pub(crate) fn destroy_all_segments(&mut self) {
        let segments: Vec<hecs::Entity> = self
            .chains
            .chains()
            .iter()
            .flat_map(|c| c.segments.iter().copied())
            .collect();
        for entity in segments {
            systems::combat::hit_segment(
                &mut self.world,
                entity,
                &mut self.chains,
                &mut self.score,
                &mut self.events,
            );
        }
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if matches!(self.phase, GamePhase::MainMenu | GamePhase::GameOver) {
                    self.reset();
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::Restart => {
                self.reset();
            }
            PlayerCommand::SetMoveInput { dx, dy } => {
                self.move_input = Velocity::new(dx.clamp(-1.0, 1.0), dy.clamp(-1.0, 1.0));
            }
            PlayerCommand::Fire => {
                self.fire_requested = true;
            }
        }
    }

    /// Discard all live entities and reset controller state to initial
    /// values. The RNG is reseeded, so a restarted game replays
    /// identically for the same inputs.
    fn reset(&mut self) {
        self.world = World::new();
        self.time = SimTime::default();
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.despawn_buffer.clear();
        self.events.clear();
        self.chains.clear();
        self.spawner = SpawnController::new();
        self.score = ScoreState::default();
        self.effects.clear();
        self.move_input = Velocity::default();
        self.fire_requested = false;

        world_setup::spawn_player(&mut self.world);
        world_setup::generate_field(&mut self.world, &mut self.rng);
        self.phase = GamePhase::Active;
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        // 1. Spawn timers, wave lifecycle, chain creation
        systems::spawning::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawner,
            &mut self.chains,
            &mut self.events,
            dt,
        );
        // 2. Player movement + darts
        systems::player::run(
            &mut self.world,
            self.move_input,
            self.fire_requested,
            dt,
            &mut self.events,
        );
        self.fire_requested = false;
        // 3. Chain locomotion (prospective-position checks + FSM)
        systems::locomotion::run(&mut self.world, dt);
        // 4. Critter behaviors
        systems::critters::run(&mut self.world, &mut self.rng, dt);
        // 5. Kinematic integration (darts, critters)
        systems::movement::run(&mut self.world, dt);
        // 6. Collision resolution and hit outcomes
        let game_over = systems::collision::run(
            &mut self.world,
            &mut self.chains,
            &mut self.score,
            &mut self.events,
            &mut self.effects,
        );
        if game_over {
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver {
                score: self.score.score,
            });
        }
        // 7. Deferred effects
        effects::run(&mut self.world, &mut self.effects, dt);
        // 8. Cleanup (OOB, destroyed)
        systems::cleanup::run(&mut self.world, &mut self.chains, &mut self.despawn_buffer);
        // 9. One-time extra life
        if !self.score.extra_life_awarded && self.score.score >= EXTRA_LIFE_SCORE {
            self.score.extra_life_awarded = true;
            self.score.lives += 1;
            self.events.push(GameEvent::ExtraLife);
        }
    }
}
