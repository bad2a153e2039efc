//! Simulation constants and tuning parameters.

// --- Field geometry ---

/// Field width in pixels.
pub const FIELD_WIDTH: f64 = 800.0;

/// Field height in pixels.
pub const FIELD_HEIGHT: f64 = 600.0;

/// Leftmost x a chain segment may occupy before turning.
pub const FIELD_LEFT_BOUND: f64 = 16.0;

/// Rightmost x a chain segment may occupy before turning.
pub const FIELD_RIGHT_BOUND: f64 = 784.0;

/// One row of descent when a chain segment turns.
pub const DESCENT_DISTANCE: f64 = 16.0;

/// Top of the player-operating band.
pub const PLAYER_AREA_TOP: f64 = 400.0;

/// Bottom of the player-operating band.
pub const PLAYER_AREA_BOTTOM: f64 = 580.0;

/// Player lateral limits.
pub const PLAYER_MIN_X: f64 = 20.0;
pub const PLAYER_MAX_X: f64 = 780.0;

/// Player respawn position.
pub const PLAYER_START_X: f64 = 400.0;
pub const PLAYER_START_Y: f64 = 550.0;

// --- Collision extents ---

pub const PLAYER_RADIUS: f64 = 6.0;
pub const DART_RADIUS: f64 = 2.0;
pub const SEGMENT_RADIUS: f64 = 6.0;
pub const OBSTACLE_RADIUS: f64 = 6.0;
pub const FLIER_RADIUS: f64 = 4.0;
pub const ROAMER_RADIUS: f64 = 5.0;
pub const POISONER_RADIUS: f64 = 7.0;

// --- Player ---

/// Player movement speed (pixels/second).
pub const PLAYER_SPEED: f64 = 200.0;

/// Minimum delay between darts (seconds).
pub const FIRE_COOLDOWN: f64 = 0.1;

/// Dart vertical speed (upward, pixels/second).
pub const DART_SPEED: f64 = 400.0;

/// Starting lives.
pub const STARTING_LIVES: u32 = 3;

/// One-time extra life threshold (points).
pub const EXTRA_LIFE_SCORE: u64 = 12_000;

// --- Chain segments ---

/// Base horizontal speed of a chain segment (pixels/second).
pub const SEGMENT_BASE_SPEED: f64 = 50.0;

/// Descent advances this much faster than horizontal travel.
pub const DESCENT_RATE_MULTIPLIER: f64 = 2.0;

/// One-time speed factor applied on first entry into the player band.
pub const PLAYER_AREA_SPEED_FACTOR: f64 = 0.7;

/// Spacing between segments at spawn (pixels).
pub const SEGMENT_SPACING: f64 = 16.0;

/// Segments in the first wave's chain; shrinks by one per wave, floor 1.
pub const INITIAL_CHAIN_LENGTH: u32 = 12;

/// Per-wave chain speed escalation, clamped at the max multiplier.
pub const CHAIN_SPEED_WAVE_INCREMENT: f64 = 0.1;
pub const CHAIN_SPEED_MULTIPLIER_MAX: f64 = 2.0;

/// Chain spawn row.
pub const CHAIN_SPAWN_Y: f64 = 50.0;

// --- Obstacles ---

/// Hits required to destroy an obstacle.
pub const OBSTACLE_MAX_HITS: u32 = 4;

/// Points for destroying an obstacle.
pub const OBSTACLE_POINTS: u64 = 1;

/// Points per obstacle healed on player death.
pub const OBSTACLE_REGEN_POINTS: u64 = 5;

/// Duration of the hit flash before the deferred revert fires (seconds).
pub const HIT_FLASH_SECS: f64 = 0.1;

/// Initial field density: chance of an obstacle per grid cell.
pub const FIELD_DENSITY: f64 = 0.15;

/// Field generation grid (x from 50 to 750, y from 100 to 380, step 20).
pub const FIELD_GRID_STEP: f64 = 20.0;
pub const FIELD_GRID_MIN_X: f64 = 50.0;
pub const FIELD_GRID_MAX_X: f64 = 750.0;
pub const FIELD_GRID_MIN_Y: f64 = 100.0;
pub const FIELD_GRID_MAX_Y: f64 = 380.0;

// --- Scoring ---

/// Points for destroying a chain head segment.
pub const HEAD_POINTS: u64 = 100;

/// Points for destroying a chain body segment.
pub const BODY_POINTS: u64 = 10;

/// Flier kill value; fliers take two hits.
pub const FLIER_POINTS: u64 = 200;
pub const FLIER_HITS_REQUIRED: u32 = 2;

/// Roamer base value; doubled inside 100 px of the player, tripled
/// inside 50 px.
pub const ROAMER_BASE_POINTS: u64 = 300;
pub const ROAMER_CLOSE_RANGE: f64 = 50.0;
pub const ROAMER_MID_RANGE: f64 = 100.0;

/// Poisoner kill value.
pub const POISONER_POINTS: u64 = 1000;

// --- Critter behavior ---

/// Flier fall speed (pixels/second).
pub const FLIER_SPEED: f64 = 100.0;

/// Flier obstacle-drop probability per second, active below this row.
pub const FLIER_DROP_CHANCE: f64 = 0.3;
pub const FLIER_DROP_MIN_Y: f64 = 50.0;

/// Flier spawn band (x range at the top edge).
pub const FLIER_SPAWN_MIN_X: f64 = 50.0;
pub const FLIER_SPAWN_MAX_X: f64 = 750.0;

/// Roamer speed and zigzag cadence.
pub const ROAMER_SPEED: f64 = 80.0;
pub const ROAMER_ZIGZAG_INTERVAL: f64 = 0.5;

/// Roamer spawn rows within the player band.
pub const ROAMER_SPAWN_MIN_Y: f64 = 450.0;
pub const ROAMER_SPAWN_MAX_Y: f64 = 550.0;

/// Poisoner speed and spawn rows (upper field).
pub const POISONER_SPEED: f64 = 60.0;
pub const POISONER_SPAWN_MIN_Y: f64 = 100.0;
pub const POISONER_SPAWN_MAX_Y: f64 = 300.0;

// --- Spawn rates (seconds between spawn attempts) ---

pub const FLIER_BASE_RATE: f64 = 8.0;
pub const FLIER_RATE_DECREMENT: f64 = 0.5;
pub const FLIER_RATE_FLOOR: f64 = 5.0;

pub const ROAMER_BASE_RATE: f64 = 15.0;
pub const ROAMER_RATE_DECREMENT: f64 = 1.0;
pub const ROAMER_RATE_FLOOR: f64 = 10.0;

pub const POISONER_BASE_RATE: f64 = 25.0;
pub const POISONER_RATE_DECREMENT: f64 = 2.0;
pub const POISONER_RATE_FLOOR: f64 = 15.0;

// --- Spawn caps and guards ---

/// Per-wave spawn caps: `base + wave`.
pub const FLIER_BASE_CAP: u32 = 4;
pub const ROAMER_BASE_CAP: u32 = 3;
pub const POISONER_BASE_CAP: u32 = 2;

/// Fliers spawn only while fewer than this many live obstacles sit in
/// the player area.
pub const FLIER_OBSTACLE_GUARD: usize = 3;
