//! The tile grid.

use serde::{Deserialize, Serialize};

use super::tile::TileType;

/// Fixed-size 2D grid of tiles, indexed `[x][y]`
///
/// Dimensions are set once at generation time; cell contents mutate while
/// the generator runs and are read-only during play.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<Vec<TileType>>,
}

impl Grid {
    /// Create a solid-wall grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![vec![TileType::Wall; height]; width],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if a cell coordinate is within the grid
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Get the tile at a cell, or None when out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<TileType> {
        if self.in_bounds(x, y) {
            Some(self.tiles[x][y])
        } else {
            None
        }
    }

    /// Set the tile at a cell; out-of-bounds writes are ignored
    pub fn set(&mut self, x: usize, y: usize, tile: TileType) {
        if self.in_bounds(x, y) {
            self.tiles[x][y] = tile;
        }
    }

    /// Replace the tile at a cell only if it currently holds `from`
    pub fn replace(&mut self, x: usize, y: usize, from: TileType, to: TileType) {
        if self.in_bounds(x, y) && self.tiles[x][y] == from {
            self.tiles[x][y] = to;
        }
    }

    /// Count cells holding the given tile
    pub fn count(&self, tile: TileType) -> usize {
        self.tiles
            .iter()
            .flat_map(|col| col.iter())
            .filter(|&&t| t == tile)
            .count()
    }

    /// Iterate over all cells as `(x, y, tile)`
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, TileType)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .flat_map(|(x, col)| col.iter().enumerate().map(move |(y, &t)| (x, y, t)))
    }
}
