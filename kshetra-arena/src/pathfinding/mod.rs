//! Shortest-path search over the arena.

mod bfs;

pub use bfs::find_path;

use crate::core::GridCoord;

/// A planned route through the arena.
///
/// Waypoints run from the tile after the start (exclusive) to the goal
/// (inclusive); each waypoint is the next tile to move onto. An empty
/// path means start and goal coincide.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path {
    /// Tiles to traverse, in order.
    pub waypoints: Vec<GridCoord>,
}

impl Path {
    /// Create an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of steps in the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Check whether the path has no steps.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Final tile of the path, if any.
    #[inline]
    pub fn goal(&self) -> Option<GridCoord> {
        self.waypoints.last().copied()
    }
}
