//! Integer tile coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use super::heading::Heading;

/// Grid coordinates (integer cell indices).
///
/// (0, 0) is the top-left corner of the arena; X grows right and Y
/// grows down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCoord {
    /// X coordinate (column index).
    pub x: i32,
    /// Y coordinate (row index).
    pub y: i32,
}

impl GridCoord {
    /// Create a new grid coordinate.
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another coordinate.
    #[inline]
    pub fn manhattan_distance(&self, other: &GridCoord) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Squared Euclidean distance, for comparisons without a sqrt.
    #[inline]
    pub fn distance_squared(&self, other: &GridCoord) -> i32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// The 4 cardinal neighbors, clockwise from North.
    ///
    /// The fixed order makes tie-breaking deterministic everywhere a
    /// neighbor scan happens (BFS expansion, explorer local steps).
    #[inline]
    pub fn neighbors_4(&self) -> [GridCoord; 4] {
        [
            GridCoord::new(self.x, self.y - 1), // North
            GridCoord::new(self.x + 1, self.y), // East
            GridCoord::new(self.x, self.y + 1), // South
            GridCoord::new(self.x - 1, self.y), // West
        ]
    }

    /// The adjacent coordinate one step along a heading.
    #[inline]
    pub fn step(self, heading: Heading) -> GridCoord {
        let (dx, dy) = heading.delta();
        GridCoord::new(self.x + dx, self.y + dy)
    }
}

impl Add for GridCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GridCoord::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for GridCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridCoord::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbor_order() {
        let c = GridCoord::new(5, 5);
        let n = c.neighbors_4();
        assert_eq!(n[0], GridCoord::new(5, 4)); // North
        assert_eq!(n[1], GridCoord::new(6, 5)); // East
        assert_eq!(n[2], GridCoord::new(5, 6)); // South
        assert_eq!(n[3], GridCoord::new(4, 5)); // West
    }

    #[test]
    fn test_step_matches_neighbors() {
        let c = GridCoord::new(2, 7);
        for (i, h) in Heading::ALL.iter().enumerate() {
            assert_eq!(c.step(*h), c.neighbors_4()[i]);
        }
    }

    #[test]
    fn test_manhattan_distance() {
        let a = GridCoord::new(1, 1);
        let b = GridCoord::new(4, 5);
        assert_eq!(a.manhattan_distance(&b), 7);
        assert_eq!(b.manhattan_distance(&a), 7);
    }
}
