//! Dungeon system
//!
//! Contains the tile grid, room placement, corridor carving, the
//! post-processing passes, and the spatial queries used by movement code.

mod corridor;
mod decor;
mod errors;
mod generation;
mod grid;
mod level;
mod position;
mod props;
mod room;
mod tile;

pub use errors::{GenerationError, QueryError};
pub use generation::GenParams;
pub use grid::Grid;
pub use level::Dungeon;
pub use position::Point3;
pub use props::{Prop, PropKind};
pub use room::Room;
pub use tile::{Theme, TileType};
