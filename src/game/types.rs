//! Data structures for a flight run: the bird, the scrolling obstacles,
//! and the per-run state owned by the game loop.

use crate::constants::{GAP_HEIGHT, OBSTACLE_WIDTH, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};

/// The player-controlled bird. Its column never changes during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bird {
    pub x: i32,
    /// Vertical position, kept in `[0, PLAYFIELD_HEIGHT - 1]`.
    pub y: i32,
    /// Rows per tick, positive = downward.
    pub velocity: i32,
}

impl Bird {
    /// Starting position: a quarter of the way in, vertically centered.
    pub fn new() -> Self {
        Self {
            x: PLAYFIELD_WIDTH / 4,
            y: PLAYFIELD_HEIGHT / 2,
            velocity: 0,
        }
    }
}

/// A single obstacle column with a passable vertical gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Obstacle {
    /// Column position; decreases by one each tick.
    pub x: i32,
    /// Top row of the gap. The gap spans `[gap_start, gap_start + GAP_HEIGHT)`.
    pub gap_start: i32,
}

impl Obstacle {
    /// True if `col` lies within this obstacle's horizontal span.
    pub fn occupies_column(&self, col: i32) -> bool {
        col >= self.x && col < self.x + OBSTACLE_WIDTH
    }

    /// True if `row` is solid (outside the gap) on this obstacle's column.
    pub fn is_solid_at(&self, row: i32) -> bool {
        row < self.gap_start || row >= self.gap_start + GAP_HEIGHT
    }
}

/// Per-run state: bird, obstacles, score, and tick counter.
///
/// Owned by the game loop and passed by reference through the tick helpers.
/// A restart replaces the whole value with `FlightState::new()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightState {
    pub bird: Bird,
    /// Active obstacles, oldest (leftmost) first.
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    /// Ticks elapsed this run; drives the spawn cadence.
    pub tick_count: u64,
    /// Set when the bird hit an obstacle this tick. The loop still draws
    /// the colliding frame before acting on it.
    pub crashed: bool,
}

impl FlightState {
    pub fn new() -> Self {
        Self {
            bird: Bird::new(),
            obstacles: Vec::new(),
            score: 0,
            tick_count: 0,
            crashed: false,
        }
    }
}
