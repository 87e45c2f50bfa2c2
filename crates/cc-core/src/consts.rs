//! Core generation and collision constants.

/// Default grid dimensions for the first level
pub const DEFAULT_WIDTH: usize = 30;
pub const DEFAULT_HEIGHT: usize = 30;

/// Default room budget for the first level
pub const DEFAULT_MAX_ROOMS: usize = 10;

/// Room interior size range (cells)
pub const ROOM_MIN: usize = 4;
pub const ROOM_MAX: usize = 10;

/// Placement attempts allowed per requested room before giving up
pub const PLACEMENT_ATTEMPTS_PER_ROOM: usize = 3;

/// Corridor width in cells, carved symmetrically around the centerline
pub const CORRIDOR_WIDTH: usize = 3;

/// Fraction of extra room-pair connections added to create loops
pub const EXTRA_CONNECTION_RATIO: f32 = 0.3;

/// Door probability denominator: each qualifying corridor cell becomes a
/// door with probability 1 in DOOR_CHANCE
pub const DOOR_CHANCE: u32 = 21;

/// One trap is attempted per this many grid cells
pub const TRAP_AREA_DIVISOR: usize = 100;

/// Minimum world-space distance between a trap and the start/end stairs
pub const HAZARD_CLEARANCE: f32 = 5.0;

/// Fraction of an agent's radius actually used for wall collision
pub const COLLISION_RADIUS_SCALE: f32 = 0.65;

/// World-space height at which the player spawns above the start tile
pub const SPAWN_HEIGHT: f32 = 1.0;

/// Distance to the end stairs at which a level counts as complete
pub const LEVEL_EXIT_RADIUS: f32 = 1.5;
