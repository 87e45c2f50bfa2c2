//! Tile and theme types.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Cell state of the dungeon grid
///
/// Every cell holds exactly one of these; a freshly allocated grid is solid
/// `Wall` and generation carves the rest out of it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum TileType {
    Empty = 0,
    Floor = 1,
    #[default]
    Wall = 2,
    Door = 3,
    StairsDown = 4,
    StairsUp = 5,
    Trap = 6,
    Chest = 7,
}

impl TileType {
    /// Check if an agent may legally occupy this tile
    pub const fn is_walkable(&self) -> bool {
        matches!(
            self,
            TileType::Floor
                | TileType::Door
                | TileType::StairsDown
                | TileType::StairsUp
                | TileType::Trap
                | TileType::Chest
        )
    }

    /// Get the display character for this tile type
    pub const fn symbol(&self) -> char {
        match self {
            TileType::Empty => ' ',
            TileType::Floor => '.',
            TileType::Wall => '#',
            TileType::Door => '+',
            TileType::StairsDown => '>',
            TileType::StairsUp => '<',
            TileType::Trap => '^',
            TileType::Chest => '$',
        }
    }
}

/// Visual theme for a level
///
/// Opaque to generation; the rendering layer keys its models and textures
/// off this value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum Theme {
    #[default]
    Dungeon = 0,
    Cave = 1,
    Crypt = 2,
}

impl Theme {
    /// Map an arbitrary theme index onto a valid theme (wraps modulo 3)
    pub const fn from_index(index: usize) -> Self {
        match index % 3 {
            0 => Theme::Dungeon,
            1 => Theme::Cave,
            _ => Theme::Crypt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_walkable_set() {
        assert!(!TileType::Wall.is_walkable());
        assert!(!TileType::Empty.is_walkable());
        for tile in TileType::iter() {
            let expected = !matches!(tile, TileType::Wall | TileType::Empty);
            assert_eq!(tile.is_walkable(), expected, "{tile}");
        }
    }

    #[test]
    fn test_symbols_unique() {
        let mut seen = std::collections::HashSet::new();
        for tile in TileType::iter() {
            assert!(seen.insert(tile.symbol()), "duplicate symbol for {tile}");
        }
    }

    #[test]
    fn test_theme_from_index_wraps() {
        assert_eq!(Theme::from_index(0), Theme::Dungeon);
        assert_eq!(Theme::from_index(1), Theme::Cave);
        assert_eq!(Theme::from_index(2), Theme::Crypt);
        assert_eq!(Theme::from_index(5), Theme::Crypt);
    }
}
