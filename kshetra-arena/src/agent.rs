//! Agent state and atomic movement primitives.
//!
//! Every primitive consults the grid but mutates at most one tile and
//! the agent's own fields; there is no hidden state. A blocked move is
//! silently absorbed (bump-and-stay), never an error.

use log::trace;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::{GridCoord, Heading, TileKind};
use crate::error::{ArenaError, Result};
use crate::grid::Grid;

/// Attempt budget for random placement before giving up.
const PLACEMENT_ATTEMPTS: usize = 1000;

/// The exploring agent: position, heading, and held markers.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Agent {
    position: GridCoord,
    heading: Heading,
    markers_held: usize,
}

impl Agent {
    /// Create an agent at a fixed position. The caller is responsible
    /// for choosing an open interior tile; [`Agent::validate_start`]
    /// checks one.
    pub fn new(position: GridCoord, heading: Heading) -> Self {
        Self {
            position,
            heading,
            markers_held: 0,
        }
    }

    /// Check that a requested start tile is open interior.
    pub fn validate_start(grid: &Grid, position: GridCoord) -> Result<()> {
        if grid.is_interior(position) && grid.tile(position) == TileKind::Empty {
            Ok(())
        } else {
            Err(ArenaError::BlockedStart(position))
        }
    }

    /// Place an agent on a random empty tile away from the wall ring,
    /// facing a random heading.
    pub fn place_random<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Result<Self> {
        for _ in 0..PLACEMENT_ATTEMPTS {
            let position = GridCoord::new(
                rng.gen_range(2..grid.width() as i32 - 2),
                rng.gen_range(2..grid.height() as i32 - 2),
            );
            if grid.tile(position) == TileKind::Empty {
                let heading = Heading::ALL[rng.gen_range(0..4)];
                return Ok(Self::new(position, heading));
            }
        }
        Err(ArenaError::NoOpenTile)
    }

    /// Current position.
    #[inline]
    pub fn position(&self) -> GridCoord {
        self.position
    }

    /// Current heading.
    #[inline]
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Markers currently held.
    #[inline]
    pub fn markers_held(&self) -> usize {
        self.markers_held
    }

    /// The tile one step ahead. Pure; no bounds guarantee beyond the
    /// wall ring keeping the agent interior.
    #[inline]
    pub fn next_position(&self) -> GridCoord {
        self.position.step(self.heading)
    }

    /// Check whether the tile ahead can be stepped onto.
    #[inline]
    pub fn can_move_forward(&self, grid: &Grid) -> bool {
        grid.tile(self.next_position()).is_passable()
    }

    /// Step forward when the tile ahead is passable. Returns whether
    /// the position changed; a blocked move is a no-op.
    pub fn move_forward(&mut self, grid: &Grid) -> bool {
        let next = self.next_position();
        if grid.tile(next).is_blocking() {
            trace!("move blocked at {next}");
            return false;
        }
        self.position = next;
        true
    }

    /// Rotate 90° counter-clockwise.
    pub fn turn_left(&mut self) {
        self.heading = self.heading.turn_left();
    }

    /// Rotate 90° clockwise.
    pub fn turn_right(&mut self) {
        self.heading = self.heading.turn_right();
    }

    /// Rotate (clockwise) until facing the given heading.
    pub fn turn_to(&mut self, target: Heading) {
        while self.heading != target {
            self.turn_right();
        }
    }

    /// Check whether the agent stands on a marker.
    #[inline]
    pub fn is_on_marker(&self, grid: &Grid) -> bool {
        grid.tile(self.position) == TileKind::Marker
    }

    /// Pick up the marker underfoot, if any. Returns whether one was
    /// collected; a marker-less tile is a no-op.
    pub fn pick_up_marker(&mut self, grid: &mut Grid) -> bool {
        if !self.is_on_marker(grid) {
            return false;
        }
        grid.set_tile(self.position, TileKind::Empty);
        self.markers_held += 1;
        trace!("picked up marker at {}, holding {}", self.position, self.markers_held);
        true
    }

    /// Drop one held marker onto the current tile. Returns whether a
    /// marker was dropped; empty-handed is a no-op.
    pub fn drop_marker(&mut self, grid: &mut Grid) -> bool {
        if self.markers_held == 0 {
            return false;
        }
        grid.set_tile(self.position, TileKind::Marker);
        self.markers_held -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_grid() -> Grid {
        Grid::new(7, 7).unwrap()
    }

    #[test]
    fn test_move_forward_commits_open_tile() {
        let grid = open_grid();
        let mut agent = Agent::new(GridCoord::new(2, 2), Heading::East);
        assert!(agent.can_move_forward(&grid));
        assert!(agent.move_forward(&grid));
        assert_eq!(agent.position(), GridCoord::new(3, 2));
    }

    #[test]
    fn test_blocked_move_is_noop() {
        let grid = open_grid();
        let mut agent = Agent::new(GridCoord::new(1, 1), Heading::West);
        assert!(!agent.can_move_forward(&grid));
        assert!(!agent.move_forward(&grid));
        assert_eq!(agent.position(), GridCoord::new(1, 1));
    }

    #[test]
    fn test_obstacle_blocks_like_wall() {
        let mut grid = open_grid();
        grid.set_tile(GridCoord::new(3, 2), TileKind::Obstacle);
        let mut agent = Agent::new(GridCoord::new(2, 2), Heading::East);
        assert!(!agent.move_forward(&grid));
        assert_eq!(agent.position(), GridCoord::new(2, 2));
    }

    #[test]
    fn test_turn_to_reaches_any_heading() {
        for start in Heading::ALL {
            for target in Heading::ALL {
                let mut agent = Agent::new(GridCoord::new(2, 2), start);
                agent.turn_to(target);
                assert_eq!(agent.heading(), target);
            }
        }
    }

    #[test]
    fn test_pickup_and_drop_roundtrip() {
        let mut grid = open_grid();
        let at = GridCoord::new(3, 3);
        grid.set_tile(at, TileKind::Marker);
        let mut agent = Agent::new(at, Heading::North);

        assert!(agent.pick_up_marker(&mut grid));
        assert_eq!(agent.markers_held(), 1);
        assert_eq!(grid.tile(at), TileKind::Empty);
        assert_eq!(grid.marker_count(), 0);

        assert!(agent.drop_marker(&mut grid));
        assert_eq!(agent.markers_held(), 0);
        assert_eq!(grid.tile(at), TileKind::Marker);
        assert_eq!(grid.marker_count(), 1);
    }

    #[test]
    fn test_pickup_off_marker_is_noop() {
        let mut grid = open_grid();
        let mut agent = Agent::new(GridCoord::new(2, 2), Heading::North);
        assert!(!agent.pick_up_marker(&mut grid));
        assert_eq!(agent.markers_held(), 0);
    }

    #[test]
    fn test_drop_empty_handed_is_noop() {
        let mut grid = open_grid();
        let mut agent = Agent::new(GridCoord::new(2, 2), Heading::North);
        assert!(!agent.drop_marker(&mut grid));
        assert_eq!(grid.tile(GridCoord::new(2, 2)), TileKind::Empty);
    }

    #[test]
    fn test_random_placement_lands_on_empty_interior() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut grid = Grid::new(15, 15).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        grid.scatter_obstacles(&mut rng, 10, crate::grid::ArenaShape::Rectangle);

        for _ in 0..50 {
            let agent = Agent::place_random(&grid, &mut rng).unwrap();
            assert_eq!(grid.tile(agent.position()), TileKind::Empty);
            assert!(grid.is_interior(agent.position()));
        }
    }
}
