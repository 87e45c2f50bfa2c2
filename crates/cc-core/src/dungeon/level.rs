//! The dungeon aggregate and its spatial query layer.
//!
//! Movement code calls the queries here every simulation tick; they are
//! all read-only with respect to the grid.

use serde::{Deserialize, Serialize};

use crate::consts::{COLLISION_RADIUS_SCALE, LEVEL_EXIT_RADIUS};
use crate::rng::GameRng;

use super::errors::{GenerationError, QueryError};
use super::generation::{self, GenParams};
use super::grid::Grid;
use super::position::Point3;
use super::props::Prop;
use super::room::Room;
use super::tile::{Theme, TileType};

/// Offsets probed by the disc walkability test, as multiples of the
/// effective collision radius. The east/south offsets run slightly long
/// and get two extra probes each: converting continuous coordinates to
/// tile indices truncates toward negative infinity, which makes collision
/// softer when approaching a wall from the north/west. The asymmetric
/// ring plus the ceiling conversion below restores directional fairness;
/// it is intentional, not an oversight.
const COLLISION_RING: [(f32, f32); 12] = [
    (0.0, -1.0),   // N
    (1.1, 0.0),    // E, extended
    (0.0, 1.1),    // S, extended
    (-1.0, 0.0),   // W
    (0.7, -0.7),   // NE
    (0.8, 0.8),    // SE, extended
    (-0.7, 0.8),   // SW, extended
    (-0.7, -0.7),  // NW
    (-0.3, 1.0),   // extra south pair
    (0.3, 1.0),
    (1.0, -0.3),   // extra east pair
    (1.0, 0.3),
];

/// A fully generated dungeon level
///
/// Constructed once by [`Dungeon::generate`], then queried read-only until
/// the level transition discards it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dungeon {
    grid: Grid,
    rooms: Vec<Room>,
    start_position: Point3,
    end_position: Point3,
    params: GenParams,
    props: Vec<Prop>,
}

impl Dungeon {
    /// Generate a new dungeon level
    pub fn generate(params: &GenParams, rng: &mut GameRng) -> Result<Self, GenerationError> {
        generation::generate(params, rng)
    }

    pub(super) fn from_parts(
        grid: Grid,
        rooms: Vec<Room>,
        start_position: Point3,
        end_position: Point3,
        params: GenParams,
        props: Vec<Prop>,
    ) -> Self {
        Self {
            grid,
            rooms,
            start_position,
            end_position,
            params,
            props,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Player spawn point, one unit above the first room's center
    pub fn start_position(&self) -> Point3 {
        self.start_position
    }

    /// Exit stairs in the last room's center, on the floor plane
    pub fn end_position(&self) -> Point3 {
        self.end_position
    }

    pub fn theme(&self) -> Theme {
        self.params.theme
    }

    pub fn params(&self) -> &GenParams {
        &self.params
    }

    /// Decorative prop placements emitted by generation
    pub fn props(&self) -> &[Prop] {
        &self.props
    }

    /// Check if world coordinates fall inside the grid
    pub fn is_inside(&self, x: f32, z: f32) -> bool {
        let tile_x = x as i64;
        let tile_z = z as i64;
        tile_x >= 0
            && (tile_x as usize) < self.grid.width()
            && tile_z >= 0
            && (tile_z as usize) < self.grid.height()
    }

    /// Point walkability: the tile under (x, z) is legal to occupy
    pub fn is_walkable(&self, x: f32, z: f32) -> bool {
        self.tile_at(x.floor(), z.floor())
            .is_some_and(|t| t.is_walkable())
    }

    /// Disc walkability for an agent of the given radius
    ///
    /// The center tile is checked first, then the fixed sample ring scaled
    /// by `radius * COLLISION_RADIUS_SCALE`. Probes east/south of the
    /// center convert to tile coordinates with a ceiling (minus a small
    /// epsilon), probes north/west with a floor; see [`COLLISION_RING`].
    pub fn is_walkable_radius(&self, x: f32, z: f32, radius: f32) -> bool {
        if !self.is_inside(x, z) {
            return false;
        }

        if self.tile_at(x.floor(), z.floor()) == Some(TileType::Wall) {
            return false;
        }

        let collision_radius = radius * COLLISION_RADIUS_SCALE;
        for (dx, dz) in COLLISION_RING {
            let px = x + dx * collision_radius;
            let pz = z + dz * collision_radius;

            let tile_x = if px > x { (px - 0.01).ceil() } else { px.floor() };
            let tile_z = if pz > z { (pz - 0.01).ceil() } else { pz.floor() };

            match self.tile_at(tile_x, tile_z) {
                Some(TileType::Wall) | None => return false,
                Some(_) => {}
            }
        }

        true
    }

    /// Pick a uniformly random floor tile and return its world position
    ///
    /// Attempts are bounded, so a dungeon without floor tiles reports
    /// [`QueryError::NoFloorTiles`] instead of looping forever.
    pub fn random_floor_position(&self, rng: &mut GameRng) -> Result<Point3, QueryError> {
        let attempts = self.grid.width() * self.grid.height() * 10;

        for _ in 0..attempts {
            let x = rng.rn2(self.grid.width() as u32) as usize;
            let z = rng.rn2(self.grid.height() as u32) as usize;
            if self.grid.get(x, z) == Some(TileType::Floor) {
                return Ok(Point3::from_cell(x, z));
            }
        }

        Err(QueryError::NoFloorTiles)
    }

    /// Check if an agent at `pos` has reached the exit stairs
    pub fn reached_exit(&self, pos: &Point3) -> bool {
        pos.distance(&self.end_position) < LEVEL_EXIT_RADIUS
    }

    /// Look up the tile under floating tile coordinates; None when the
    /// coordinates are negative or out of range
    fn tile_at(&self, tile_x: f32, tile_z: f32) -> Option<TileType> {
        if tile_x < 0.0 || tile_z < 0.0 {
            return None;
        }
        self.grid.get(tile_x as usize, tile_z as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walled_dungeon(width: usize, height: usize) -> Dungeon {
        Dungeon::from_parts(
            Grid::new(width, height),
            Vec::new(),
            Point3::default(),
            Point3::default(),
            GenParams::default(),
            Vec::new(),
        )
    }

    fn open_dungeon(width: usize, height: usize) -> Dungeon {
        let mut grid = Grid::new(width, height);
        for x in 1..width - 1 {
            for y in 1..height - 1 {
                grid.set(x, y, TileType::Floor);
            }
        }
        Dungeon::from_parts(
            grid,
            Vec::new(),
            Point3::default(),
            Point3::new(width as f32 / 2.0, 0.0, height as f32 / 2.0),
            GenParams::default(),
            Vec::new(),
        )
    }

    #[test]
    fn test_is_inside_bounds() {
        let dungeon = walled_dungeon(30, 20);
        assert!(dungeon.is_inside(0.0, 0.0));
        assert!(dungeon.is_inside(29.9, 19.9));
        assert!(!dungeon.is_inside(30.0, 5.0));
        assert!(!dungeon.is_inside(5.0, 20.0));
        assert!(!dungeon.is_inside(-1.0, 5.0));
    }

    #[test]
    fn test_point_walkability_matches_tiles() {
        let dungeon = open_dungeon(10, 10);
        assert!(dungeon.is_walkable(5.5, 5.5));
        assert!(!dungeon.is_walkable(0.5, 5.5)); // border wall
        assert!(!dungeon.is_walkable(-0.5, 5.5)); // outside
        assert!(!dungeon.is_walkable(10.5, 5.5));
    }

    #[test]
    fn test_walkable_on_special_tiles() {
        let mut grid = Grid::new(10, 10);
        grid.set(2, 2, TileType::Door);
        grid.set(3, 3, TileType::Trap);
        grid.set(4, 4, TileType::StairsDown);
        let dungeon = Dungeon::from_parts(
            grid,
            Vec::new(),
            Point3::default(),
            Point3::default(),
            GenParams::default(),
            Vec::new(),
        );

        assert!(dungeon.is_walkable(2.5, 2.5));
        assert!(dungeon.is_walkable(3.5, 3.5));
        assert!(dungeon.is_walkable(4.5, 4.5));
        assert!(!dungeon.is_walkable(5.5, 5.5));
    }

    #[test]
    fn test_disc_rejects_wall_center_any_radius() {
        let dungeon = open_dungeon(12, 12);
        // (0,0) is border wall
        for radius in [0.0, 0.1, 0.5, 2.0] {
            assert!(!dungeon.is_walkable_radius(0.5, 0.5, radius));
        }
    }

    #[test]
    fn test_disc_accepts_room_center() {
        let dungeon = open_dungeon(12, 12);
        assert!(dungeon.is_walkable_radius(6.0, 6.0, 0.4));
    }

    #[test]
    fn test_disc_tighter_than_point_near_walls() {
        let dungeon = open_dungeon(12, 12);
        // Standing almost against the east border wall: the point test
        // passes but a fat agent does not fit
        let x = 10.9;
        assert!(dungeon.is_walkable(x, 6.0));
        assert!(!dungeon.is_walkable_radius(x, 6.0, 0.5));
    }

    #[test]
    fn test_disc_outside_bounds() {
        let dungeon = open_dungeon(12, 12);
        assert!(!dungeon.is_walkable_radius(-3.0, 6.0, 0.3));
        assert!(!dungeon.is_walkable_radius(6.0, 14.0, 0.3));
    }

    #[test]
    fn test_random_floor_position_lands_on_floor() {
        let dungeon = open_dungeon(16, 16);
        let mut rng = GameRng::new(41);
        for _ in 0..50 {
            let pos = dungeon.random_floor_position(&mut rng).unwrap();
            assert_eq!(
                dungeon.grid().get(pos.x as usize, pos.z as usize),
                Some(TileType::Floor)
            );
        }
    }

    #[test]
    fn test_random_floor_position_fails_on_all_wall() {
        let dungeon = walled_dungeon(8, 8);
        let mut rng = GameRng::new(41);
        assert_eq!(
            dungeon.random_floor_position(&mut rng),
            Err(QueryError::NoFloorTiles)
        );
    }

    #[test]
    fn test_reached_exit_threshold() {
        let dungeon = open_dungeon(12, 12);
        let end = dungeon.end_position();
        assert!(dungeon.reached_exit(&Point3::new(end.x + 1.0, 0.0, end.z)));
        assert!(!dungeon.reached_exit(&Point3::new(end.x + 2.0, 0.0, end.z)));
    }
}
