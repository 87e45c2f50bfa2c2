//! Decorative prop placement.
//!
//! Props never change tile semantics; generation emits an explicit list of
//! placements and the rendering layer binds models/textures per `PropKind`.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::rng::GameRng;

use super::grid::Grid;
use super::position::Point3;
use super::tile::TileType;

/// Kind of decorative prop
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum PropKind {
    /// Wall-mounted torch
    Torch,
    Barrel,
    Crate,
    Table,
}

/// One placed prop
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prop {
    pub kind: PropKind,
    pub position: Point3,
    /// Yaw in degrees, 0..360
    pub rotation_deg: f32,
}

/// Wall cells with an orthogonally adjacent floor can hold a torch
fn wall_faces_floor(grid: &Grid, x: usize, y: usize) -> bool {
    [(x.wrapping_sub(1), y), (x + 1, y), (x, y.wrapping_sub(1)), (x, y + 1)]
        .into_iter()
        .any(|(nx, ny)| grid.get(nx, ny) == Some(TileType::Floor))
}

/// Floor cells with floor on all four sides read as room interior
/// (corridors are at most three cells wide and keep walls alongside)
fn is_open_floor(grid: &Grid, x: usize, y: usize) -> bool {
    x >= 2
        && y >= 2
        && x + 2 < grid.width()
        && y + 2 < grid.height()
        && grid.get(x - 1, y) == Some(TileType::Floor)
        && grid.get(x + 1, y) == Some(TileType::Floor)
        && grid.get(x, y - 1) == Some(TileType::Floor)
        && grid.get(x, y + 1) == Some(TileType::Floor)
}

/// Scatter decorative props over the finished grid
///
/// Torches go on walls that face a floor cell (1-in-20); barrels and
/// crates (1-in-100 each) and tables (1-in-200) go on open room floor.
pub(super) fn scatter_props(grid: &Grid, rng: &mut GameRng) -> Vec<Prop> {
    let mut props = Vec::new();

    for x in 1..grid.width().saturating_sub(1) {
        for y in 1..grid.height().saturating_sub(1) {
            match grid.get(x, y) {
                Some(TileType::Wall) => {
                    if wall_faces_floor(grid, x, y) && rng.one_in(20) {
                        props.push(Prop {
                            kind: PropKind::Torch,
                            position: Point3::new(x as f32, 1.5, y as f32),
                            rotation_deg: rng.rn2(360) as f32,
                        });
                    }
                }
                Some(TileType::Floor) if is_open_floor(grid, x, y) => {
                    for (kind, chance, height) in [
                        (PropKind::Barrel, 100, 0.3),
                        (PropKind::Crate, 100, 0.25),
                        (PropKind::Table, 200, 0.25),
                    ] {
                        if rng.one_in(chance) {
                            props.push(Prop {
                                kind,
                                position: Point3::new(x as f32, height, y as f32),
                                rotation_deg: rng.rn2(360) as f32,
                            });
                        }
                    }
                }
                _ => {}
            }
        }
    }

    props
}
