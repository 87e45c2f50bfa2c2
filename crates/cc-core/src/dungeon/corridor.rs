//! Corridor carving and room connectivity.
//!
//! Rooms are joined with L-shaped corridors: a horizontal and a vertical
//! segment meeting at one room's center line, with the leg order picked at
//! random per connection. Three passes run in order:
//! 1. chain each room to its successor in generation order,
//! 2. repair any room still flagged unconnected by joining it to a random
//!    earlier room,
//! 3. add `room_count * EXTRA_CONNECTION_RATIO` random pair connections so
//!    the room graph has cycles, not just a tree.

use crate::consts::{CORRIDOR_WIDTH, EXTRA_CONNECTION_RATIO};
use crate::rng::GameRng;

use super::grid::Grid;
use super::room::Room;
use super::tile::TileType;

/// Carve a horizontal corridor between x1 and x2 at the given centerline y
///
/// Cells are carved `CORRIDOR_WIDTH` wide, symmetric around the centerline
/// and clipped to grid bounds. Only `Wall` cells become `Floor`, so carving
/// the same corridor twice leaves the grid unchanged.
pub(super) fn carve_horizontal(grid: &mut Grid, x1: usize, x2: usize, y: usize) {
    let (lo, hi) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
    let half = CORRIDOR_WIDTH / 2;

    for x in lo..=hi {
        for offset in 0..CORRIDOR_WIDTH {
            let Some(cy) = (y + offset).checked_sub(half) else {
                continue;
            };
            grid.replace(x, cy, TileType::Wall, TileType::Floor);
        }
    }
}

/// Carve a vertical corridor between y1 and y2 at the given centerline x
pub(super) fn carve_vertical(grid: &mut Grid, y1: usize, y2: usize, x: usize) {
    let (lo, hi) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
    let half = CORRIDOR_WIDTH / 2;

    for y in lo..=hi {
        for offset in 0..CORRIDOR_WIDTH {
            let Some(cx) = (x + offset).checked_sub(half) else {
                continue;
            };
            grid.replace(cx, y, TileType::Wall, TileType::Floor);
        }
    }
}

/// Join two room centers with an L-shaped corridor, leg order randomized
fn join(grid: &mut Grid, a: (usize, usize), b: (usize, usize), rng: &mut GameRng) {
    let (ax, ay) = a;
    let (bx, by) = b;

    if rng.one_in(2) {
        // Horizontal then vertical
        carve_horizontal(grid, ax, bx, ay);
        carve_vertical(grid, ay, by, bx);
    } else {
        // Vertical then horizontal
        carve_vertical(grid, ay, by, ax);
        carve_horizontal(grid, ax, bx, by);
    }
}

/// Connect every room to every other room
///
/// After this returns, the walkable graph over the carved cells is
/// connected (every room reachable from every other).
pub(super) fn connect_rooms(grid: &mut Grid, rooms: &mut [Room], rng: &mut GameRng) {
    if rooms.is_empty() {
        return;
    }

    // Chain pass: room i to room i+1
    for i in 0..rooms.len().saturating_sub(1) {
        let a = rooms[i].center();
        let b = rooms[i + 1].center();
        join(grid, a, b, rng);
        rooms[i].connected = true;
        rooms[i + 1].connected = true;
    }
    rooms[0].connected = true;

    // Repair pass: anything the chain missed joins a random earlier room
    for i in 1..rooms.len() {
        if !rooms[i].connected {
            let target = rng.rn2(i as u32) as usize;
            let a = rooms[i].center();
            let b = rooms[target].center();
            join(grid, a, b, rng);
            rooms[i].connected = true;
        }
    }

    // Loop pass: redundant connections between random pairs
    let extra = (rooms.len() as f32 * EXTRA_CONNECTION_RATIO).round() as usize;
    for _ in 0..extra {
        let a = rng.rn2(rooms.len() as u32) as usize;
        let b = rng.rn2(rooms.len() as u32) as usize;
        if a != b {
            join(grid, rooms[a].center(), rooms[b].center(), rng);
        }
    }
}
