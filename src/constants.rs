// Game timing constants
pub const TICK_INTERVAL_MS: u64 = 100;

// Playfield dimensions (fixed; scenes clip to the real terminal area)
pub const PLAYFIELD_WIDTH: i32 = 120;
pub const PLAYFIELD_HEIGHT: i32 = 30;

// Obstacle constants
pub const OBSTACLE_WIDTH: i32 = 1;
pub const GAP_HEIGHT: i32 = 10;
pub const MAX_OBSTACLES: usize = 100;
pub const SPAWN_INTERVAL_TICKS: u64 = 20;

// Bird physics (rows per tick)
pub const GRAVITY: i32 = 1;
pub const FLAP_VELOCITY: i32 = -3;
