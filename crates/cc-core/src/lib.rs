//! cc-core: Dungeon generation and spatial queries for Craven Caverns
//!
//! This crate contains the procedural dungeon generator and the grid query
//! layer with no I/O dependencies. It is designed to be pure and testable:
//! rendering, audio, input, and the game state machine live elsewhere and
//! consume the types exported here.

pub mod dungeon;

mod consts;
mod rng;

pub use consts::*;
pub use rng::GameRng;
