//! Game logic for a flight run: bird physics, obstacle scrolling,
//! collision detection, and scoring.
//!
//! Everything here is a pure state transition over `FlightState`. The only
//! outside dependency is the RNG used for gap placement, injected as a
//! generic so tests can seed it.

use super::types::{FlightState, Obstacle};
use crate::constants::{
    FLAP_VELOCITY, GAP_HEIGHT, GRAVITY, MAX_OBSTACLES, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH,
    SPAWN_INTERVAL_TICKS,
};
use crate::input::PlayerAction;
use rand::Rng;

/// Apply the tick's player action to the run.
///
/// Only `Flap` touches flight state: it sets the bird's velocity outright
/// rather than adding an impulse. Screen-level actions (quit, confirm,
/// restart) belong to the outer state machine, and anything else is ignored.
pub fn process_input(state: &mut FlightState, action: PlayerAction) {
    if state.crashed {
        return;
    }

    if let PlayerAction::Flap = action {
        state.bird.velocity = FLAP_VELOCITY;
    }
}

/// Advance the run by one tick: spawn, scroll, physics, scoring, collision.
///
/// The caller renders after this returns and only then acts on `crashed`,
/// so the colliding frame is still drawn.
pub fn process_tick<R: Rng>(state: &mut FlightState, rng: &mut R) {
    if state.crashed {
        return;
    }

    // 1. Spawn on the fixed cadence, tick 0 included
    if state.tick_count % SPAWN_INTERVAL_TICKS == 0 {
        spawn_obstacle(state, rng);
    }

    // 2. Scroll obstacles left, dropping the ones past the left edge
    advance_obstacles(state);

    // 3. Gravity and movement
    update_bird(state);

    // 4. Credit obstacles crossing the bird's column
    update_score(state);

    // 5. Collision against everything overlapping the bird's column
    state.crashed = check_collision(state);

    state.tick_count += 1;
}

/// Spawn an obstacle at the right edge with a uniformly random gap.
/// A spawn request at capacity is silently dropped.
pub fn spawn_obstacle<R: Rng>(state: &mut FlightState, rng: &mut R) {
    if state.obstacles.len() >= MAX_OBSTACLES {
        return;
    }

    state.obstacles.push(Obstacle {
        x: PLAYFIELD_WIDTH - 1,
        gap_start: rng.gen_range(0..PLAYFIELD_HEIGHT - GAP_HEIGHT),
    });
}

/// Move every obstacle one column left and drop any that left the
/// playfield. Survivor order is preserved.
pub fn advance_obstacles(state: &mut FlightState) {
    for obstacle in &mut state.obstacles {
        obstacle.x -= 1;
    }
    state.obstacles.retain(|o| o.x >= 0);
}

/// Apply gravity and move the bird, clamping to the playfield. The clamp
/// only affects position; velocity carries through a ceiling or floor bump.
pub fn update_bird(state: &mut FlightState) {
    let bird = &mut state.bird;
    bird.velocity += GRAVITY;
    bird.y += bird.velocity;
    bird.y = bird.y.clamp(0, PLAYFIELD_HEIGHT - 1);
}

/// Credit one point for every obstacle exactly on the bird's column.
/// With one-column-per-tick scrolling and a fixed bird column this fires
/// at most once per obstacle lifetime.
pub fn update_score(state: &mut FlightState) {
    let bird_x = state.bird.x;
    for obstacle in &state.obstacles {
        if obstacle.x == bird_x {
            state.score += 1;
        }
    }
}

/// True if any obstacle overlapping the bird's column is solid at the
/// bird's row.
pub fn check_collision(state: &FlightState) -> bool {
    state
        .obstacles
        .iter()
        .filter(|o| o.occupies_column(state.bird.x))
        .any(|o| o.is_solid_at(state.bird.y))
}
