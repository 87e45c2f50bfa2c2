//! Post-processing passes over the carved grid: corner clearing, door
//! placement, and trap/chest scattering.
//!
//! Pass order matters: corners are cleared after all corridor carving and
//! before doors, so a freshly opened corner cell can still qualify as a
//! door site.

use crate::consts::{DOOR_CHANCE, HAZARD_CLEARANCE, TRAP_AREA_DIVISOR};
use crate::rng::GameRng;

use super::grid::Grid;
use super::position::Point3;
use super::room::Room;
use super::tile::TileType;

/// Open up single-cell diagonal pinch points at 90-degree turns
///
/// A wall cell with floor on two orthogonally adjacent sides whose shared
/// diagonal neighbor is also wall would force agents to clip the corner;
/// it becomes floor instead.
pub(super) fn clear_corner_blocks(grid: &mut Grid) {
    let floor = Some(TileType::Floor);
    let wall = Some(TileType::Wall);

    for x in 1..grid.width().saturating_sub(1) {
        for y in 1..grid.height().saturating_sub(1) {
            if grid.get(x, y) != wall {
                continue;
            }

            // Floor left and above, wall at the shared diagonal
            if grid.get(x - 1, y) == floor && grid.get(x, y - 1) == floor
                && grid.get(x - 1, y - 1) == wall
            {
                grid.set(x, y, TileType::Floor);
            }
            // Floor right and above
            else if grid.get(x + 1, y) == floor && grid.get(x, y - 1) == floor
                && grid.get(x + 1, y - 1) == wall
            {
                grid.set(x, y, TileType::Floor);
            }
            // Floor left and below
            else if grid.get(x - 1, y) == floor && grid.get(x, y + 1) == floor
                && grid.get(x - 1, y + 1) == wall
            {
                grid.set(x, y, TileType::Floor);
            }
            // Floor right and below
            else if grid.get(x + 1, y) == floor && grid.get(x, y + 1) == floor
                && grid.get(x + 1, y + 1) == wall
            {
                grid.set(x, y, TileType::Floor);
            }
        }
    }
}

/// Turn the occasional one-wide corridor cell into a door
///
/// A floor cell walled on both sides of either axis reads as a corridor
/// cross-section; each such cell independently becomes a door with
/// probability 1 in `DOOR_CHANCE`.
pub(super) fn place_doors(grid: &mut Grid, rng: &mut GameRng) {
    let floor = Some(TileType::Floor);
    let wall = Some(TileType::Wall);

    for x in 1..grid.width().saturating_sub(1) {
        for y in 1..grid.height().saturating_sub(1) {
            if grid.get(x, y) != floor {
                continue;
            }

            let pinched_vertical = grid.get(x, y - 1) == wall && grid.get(x, y + 1) == wall;
            let pinched_horizontal = grid.get(x - 1, y) == wall && grid.get(x + 1, y) == wall;

            if (pinched_vertical || pinched_horizontal) && rng.one_in(DOOR_CHANCE) {
                grid.set(x, y, TileType::Door);
            }
        }
    }
}

/// Scatter traps on floor cells away from the stairs
///
/// One attempt per `TRAP_AREA_DIVISOR` grid cells; a candidate converts
/// only when it hits floor and keeps `HAZARD_CLEARANCE` world units of
/// distance from both the start and end positions.
pub(super) fn place_traps(grid: &mut Grid, start: Point3, end: Point3, rng: &mut GameRng) {
    let attempts = grid.width() * grid.height() / TRAP_AREA_DIVISOR;

    for _ in 0..attempts {
        let x = rng.range(1, grid.width().saturating_sub(2));
        let y = rng.range(1, grid.height().saturating_sub(2));

        if grid.get(x, y) != Some(TileType::Floor) {
            continue;
        }

        let pos = Point3::from_cell(x, y);
        if pos.distance(&start) > HAZARD_CLEARANCE && pos.distance(&end) > HAZARD_CLEARANCE {
            grid.set(x, y, TileType::Trap);
        }
    }
}

/// Scatter chests through the middle rooms
///
/// One attempt per chest: pick a room that is neither the first (spawn)
/// nor the last (exit), then a random interior cell; place only when that
/// cell is still plain floor. Needs at least three rooms to do anything.
pub(super) fn place_chests(grid: &mut Grid, rooms: &[Room], count: usize, rng: &mut GameRng) {
    if rooms.len() <= 2 {
        return;
    }

    for _ in 0..count {
        let idx = rng.range(1, rooms.len() - 2);
        let (x, y) = rooms[idx].random_interior_point(rng);
        grid.replace(x, y, TileType::Floor, TileType::Chest);
    }
}
