//! Core flight-run mechanics: entity physics, obstacle spawning and
//! scrolling, collision detection, and scoring.

pub mod logic;
pub mod types;

#[allow(unused_imports)]
pub use logic::*;
#[allow(unused_imports)]
pub use types::*;
