//! Agent heading with explicit rotation tables.

use serde::{Deserialize, Serialize};

use super::coord::GridCoord;

/// One of the four cardinal headings.
///
/// The arena's Y axis grows downward, so North decreases Y and South
/// increases it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// All headings, clockwise from North. The order doubles as the
    /// neighbor-scan order for search and exploration.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Rotate 90° clockwise (N→E→S→W→N).
    #[inline]
    pub fn turn_right(self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// Rotate 90° counter-clockwise (N→W→S→E→N).
    #[inline]
    pub fn turn_left(self) -> Self {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }

    /// Unit step for this heading as (dx, dy).
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::North => (0, -1),
            Heading::East => (1, 0),
            Heading::South => (0, 1),
            Heading::West => (-1, 0),
        }
    }

    /// Heading that moves from one tile toward an adjacent one.
    ///
    /// Horizontal displacement wins when both axes differ; for equal
    /// coordinates North is returned. Only meaningful for 4-adjacent
    /// pairs, which is all the exploration code ever passes.
    #[inline]
    pub fn toward(from: GridCoord, to: GridCoord) -> Self {
        if to.x > from.x {
            Heading::East
        } else if to.x < from.x {
            Heading::West
        } else if to.y > from.y {
            Heading::South
        } else {
            Heading::North
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_right_turn_cycle() {
        let mut h = Heading::North;
        let expected = [Heading::East, Heading::South, Heading::West, Heading::North];
        for e in expected {
            h = h.turn_right();
            assert_eq!(h, e);
        }
    }

    #[test]
    fn test_left_turn_cycle() {
        let mut h = Heading::North;
        let expected = [Heading::West, Heading::South, Heading::East, Heading::North];
        for e in expected {
            h = h.turn_left();
            assert_eq!(h, e);
        }
    }

    #[test]
    fn test_left_inverts_right() {
        for h in Heading::ALL {
            assert_eq!(h.turn_right().turn_left(), h);
        }
    }

    #[test]
    fn test_deltas() {
        assert_eq!(Heading::North.delta(), (0, -1));
        assert_eq!(Heading::South.delta(), (0, 1));
        assert_eq!(Heading::East.delta(), (1, 0));
        assert_eq!(Heading::West.delta(), (-1, 0));
    }

    #[test]
    fn test_toward_adjacent() {
        let c = GridCoord::new(3, 3);
        assert_eq!(Heading::toward(c, GridCoord::new(4, 3)), Heading::East);
        assert_eq!(Heading::toward(c, GridCoord::new(2, 3)), Heading::West);
        assert_eq!(Heading::toward(c, GridCoord::new(3, 4)), Heading::South);
        assert_eq!(Heading::toward(c, GridCoord::new(3, 2)), Heading::North);
    }
}
