//! Dungeon generation pipeline.
//!
//! Stages run in a fixed order: room placement, corridor connectivity,
//! corner clearing, doors, stairs, hazards, props. Each stage only reads
//! what earlier stages produced, so the whole pipeline is a straight-line
//! function of the parameters and the RNG stream.

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_HEIGHT, DEFAULT_MAX_ROOMS, DEFAULT_WIDTH, PLACEMENT_ATTEMPTS_PER_ROOM, ROOM_MAX,
    ROOM_MIN, SPAWN_HEIGHT,
};
use crate::rng::GameRng;

use super::corridor::connect_rooms;
use super::decor::{clear_corner_blocks, place_chests, place_doors, place_traps};
use super::errors::GenerationError;
use super::grid::Grid;
use super::level::Dungeon;
use super::position::Point3;
use super::props::scatter_props;
use super::room::Room;
use super::tile::{Theme, TileType};

/// Parameters for one level's generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenParams {
    pub width: usize,
    pub height: usize,
    pub max_rooms: usize,
    pub theme: Theme,
}

impl Default for GenParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_rooms: DEFAULT_MAX_ROOMS,
            theme: Theme::Dungeon,
        }
    }
}

impl GenParams {
    /// Difficulty scaling per dungeon depth
    ///
    /// Depth 0 is the starting 30x30 ten-room level; each later depth adds
    /// five cells per side and one more room.
    pub fn for_depth(depth: usize) -> Self {
        Self {
            width: DEFAULT_WIDTH + 5 * depth,
            height: DEFAULT_HEIGHT + 5 * depth,
            max_rooms: DEFAULT_MAX_ROOMS + depth,
            theme: Theme::Dungeon,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Smallest grid side that can hold a minimum-size room plus its
    /// one-cell wall margin on both sides
    pub const fn min_side() -> usize {
        ROOM_MIN + 2
    }
}

/// Build a dungeon from the given parameters
///
/// Fails when the grid cannot hold a single room, or when every placement
/// attempt was rejected (dense parameters on a small grid).
pub(super) fn generate(params: &GenParams, rng: &mut GameRng) -> Result<Dungeon, GenerationError> {
    if params.width < GenParams::min_side() || params.height < GenParams::min_side() {
        return Err(GenerationError::GridTooSmall {
            width: params.width,
            height: params.height,
            min: GenParams::min_side(),
        });
    }

    let mut grid = Grid::new(params.width, params.height);
    let mut rooms = place_rooms(&mut grid, params, rng);

    if rooms.is_empty() {
        return Err(GenerationError::NoRoomsPlaced);
    }

    connect_rooms(&mut grid, &mut rooms, rng);
    clear_corner_blocks(&mut grid);
    place_doors(&mut grid, rng);

    // Stairs overwrite whatever carving left at the room centers; this is
    // the one stage allowed to replace non-wall tiles.
    let (sx, sy) = rooms[0].center();
    let (ex, ey) = rooms[rooms.len() - 1].center();
    let start_position = Point3::new(sx as f32, SPAWN_HEIGHT, sy as f32);
    let end_position = Point3::new(ex as f32, 0.0, ey as f32);
    grid.set(sx, sy, TileType::StairsUp);
    grid.set(ex, ey, TileType::StairsDown);

    place_traps(&mut grid, start_position, end_position, rng);
    place_chests(&mut grid, &rooms, params.max_rooms / 2, rng);
    let props = scatter_props(&grid, rng);

    Ok(Dungeon::from_parts(
        grid,
        rooms,
        start_position,
        end_position,
        *params,
        props,
    ))
}

/// Rejection-sampling room placement
///
/// Candidates get a random interior size in `[ROOM_MIN, ROOM_MAX]` and a
/// random origin one cell in from the border. A candidate whose bounding
/// box, expanded by one cell, touches any accepted room is discarded.
/// Attempts stop at `max_rooms` acceptances or at the attempt cap, so the
/// final count may fall short on dense grids.
fn place_rooms(grid: &mut Grid, params: &GenParams, rng: &mut GameRng) -> Vec<Room> {
    let mut rooms: Vec<Room> = Vec::new();
    let attempts = params.max_rooms * PLACEMENT_ATTEMPTS_PER_ROOM;

    for _ in 0..attempts {
        if rooms.len() >= params.max_rooms {
            break;
        }

        let room_width = rng.range(ROOM_MIN, ROOM_MAX.min(params.width - 2));
        let room_height = rng.range(ROOM_MIN, ROOM_MAX.min(params.height - 2));
        let x = rng.range(1, params.width - room_width - 1);
        let y = rng.range(1, params.height - room_height - 1);

        let candidate = Room::new(x, y, room_width, room_height);
        if rooms.iter().any(|r| candidate.overlaps(r, 1)) {
            continue;
        }

        for cx in candidate.x..candidate.x + candidate.width {
            for cy in candidate.y..candidate.y + candidate.height {
                grid.set(cx, cy, TileType::Floor);
            }
        }
        rooms.push(candidate);
    }

    rooms
}
