//! World-space coordinates.
//!
//! Grid x maps to world x and grid y to world z; y is height above the
//! floor plane.

use serde::{Deserialize, Serialize};

/// A point in world space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// A point on the floor plane above the given grid cell
    pub fn from_cell(x: usize, z: usize) -> Self {
        Self::new(x as f32, 0.0, z as f32)
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point3) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(3.0, 0.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_from_cell_on_floor_plane() {
        let p = Point3::from_cell(7, 12);
        assert_eq!(p, Point3::new(7.0, 0.0, 12.0));
    }
}
