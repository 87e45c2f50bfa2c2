//! Room rectangles.

use serde::{Deserialize, Serialize};

use crate::rng::GameRng;

/// Axis-aligned rectangular room
///
/// `connected` is transient bookkeeping for corridor construction and
/// carries no meaning once generation has finished.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// X coordinate of room interior (left edge)
    pub x: usize,
    /// Y coordinate of room interior (top edge)
    pub y: usize,
    /// Width of room interior
    pub width: usize,
    /// Height of room interior
    pub height: usize,
    /// Whether a corridor has been carved to this room yet
    pub connected: bool,
}

impl Room {
    /// Create a new room
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            connected: false,
        }
    }

    /// Check if this room overlaps with another (with buffer)
    pub fn overlaps(&self, other: &Room, buffer: usize) -> bool {
        let x1 = self.x.saturating_sub(buffer);
        let y1 = self.y.saturating_sub(buffer);
        let x2 = self.x + self.width + buffer;
        let y2 = self.y + self.height + buffer;

        let ox1 = other.x.saturating_sub(buffer);
        let oy1 = other.y.saturating_sub(buffer);
        let ox2 = other.x + other.width + buffer;
        let oy2 = other.y + other.height + buffer;

        !(x2 <= ox1 || x1 >= ox2 || y2 <= oy1 || y1 >= oy2)
    }

    /// Get center point of room
    pub fn center(&self) -> (usize, usize) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Check if a grid cell lies inside the room
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Get a random cell at least one cell in from the room's edge
    pub fn random_interior_point(&self, rng: &mut GameRng) -> (usize, usize) {
        let x = self.x + rng.range(1, self.width.saturating_sub(2));
        let y = self.y + rng.range(1, self.height.saturating_sub(2));
        (x, y)
    }

    /// Get room area (interior cells)
    pub fn area(&self) -> usize {
        self.width * self.height
    }
}
