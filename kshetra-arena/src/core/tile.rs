//! Tile classification for arena cells.

use serde::{Deserialize, Serialize};

/// Kind of a single arena tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileKind {
    /// Open floor.
    #[default]
    Empty,
    /// Border wall.
    Wall,
    /// Interior obstacle.
    Obstacle,
    /// Collectible marker.
    Marker,
}

impl TileKind {
    /// Check if the agent may occupy this tile (Empty or Marker).
    #[inline]
    pub fn is_passable(self) -> bool {
        matches!(self, TileKind::Empty | TileKind::Marker)
    }

    /// Check if this tile blocks movement (Wall or Obstacle).
    #[inline]
    pub fn is_blocking(self) -> bool {
        !self.is_passable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passability() {
        assert!(TileKind::Empty.is_passable());
        assert!(TileKind::Marker.is_passable());
        assert!(TileKind::Wall.is_blocking());
        assert!(TileKind::Obstacle.is_blocking());
    }

    #[test]
    fn test_default_is_empty() {
        assert_eq!(TileKind::default(), TileKind::Empty);
    }
}
