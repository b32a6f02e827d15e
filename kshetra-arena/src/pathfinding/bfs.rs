//! Breadth-first shortest path with parent-pointer reconstruction.
//!
//! Every invocation is a fresh search: a visited mask, a predecessor
//! map, and a ring-buffer queue are allocated per call and discarded
//! with it. Cost is O(width × height) in time and space.

use log::{debug, trace};

use crate::core::GridCoord;
use crate::grid::Grid;

use super::Path;

/// Fixed-capacity ring buffer of coordinates.
///
/// Sized by the caller well above the tile count; overflowing it would
/// mean a tile was enqueued twice, which the visited mask rules out,
/// so `push` treats overflow as a defect and asserts.
struct RingQueue {
    slots: Vec<GridCoord>,
    head: usize,
    tail: usize,
    len: usize,
}

impl RingQueue {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![GridCoord::default(); capacity],
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn push(&mut self, coord: GridCoord) {
        assert!(self.len < self.slots.len(), "BFS queue overflow");
        self.slots[self.tail] = coord;
        self.tail = (self.tail + 1) % self.slots.len();
        self.len += 1;
    }

    fn pop(&mut self) -> Option<GridCoord> {
        if self.is_empty() {
            return None;
        }
        let coord = self.slots[self.head];
        self.head = (self.head + 1) % self.slots.len();
        self.len -= 1;
        Some(coord)
    }
}

/// Find the shortest 4-connected path between two interior tiles.
///
/// Neighbors expand in the fixed N, E, S, W order, which makes the
/// tie-break among equal-length paths deterministic. Only tiles
/// strictly inside the wall ring that are neither Wall nor Obstacle
/// are searched.
///
/// Returns `None` exactly when the goal is unreachable from the start;
/// `start == goal` yields an empty path.
pub fn find_path(grid: &Grid, start: GridCoord, goal: GridCoord) -> Option<Path> {
    trace!("find_path: start={start} goal={goal}");

    let mut visited = vec![false; grid.cell_count()];
    let mut parent: Vec<Option<GridCoord>> = vec![None; grid.cell_count()];
    // Twice the tile count leaves headroom even though the visited
    // mask already caps enqueues at one per tile.
    let mut queue = RingQueue::with_capacity(grid.cell_count() * 2);

    visited[grid.index(start)] = true;
    queue.push(start);

    while let Some(current) = queue.pop() {
        if current == goal {
            return Some(reconstruct(grid, &parent, start, goal));
        }

        for neighbor in current.neighbors_4() {
            if !grid.is_interior(neighbor) {
                continue;
            }
            let idx = grid.index(neighbor);
            if visited[idx] || grid.tile(neighbor).is_blocking() {
                continue;
            }
            visited[idx] = true;
            parent[idx] = Some(current);
            queue.push(neighbor);
        }
    }

    debug!("find_path: no route from {start} to {goal}");
    None
}

/// Walk predecessors backward from the goal, then reverse so the path
/// runs start→goal with the start itself excluded.
fn reconstruct(grid: &Grid, parent: &[Option<GridCoord>], start: GridCoord, goal: GridCoord) -> Path {
    let mut waypoints = Vec::new();
    let mut current = goal;

    // The start is the only discovered tile without a parent, so the
    // walk terminates there.
    while let Some(prev) = parent[grid.index(current)] {
        waypoints.push(current);
        current = prev;
    }
    waypoints.reverse();

    trace!("find_path: {} steps from {start} to {goal}", waypoints.len());
    Path { waypoints }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileKind;

    #[test]
    fn test_straight_line_path() {
        let grid = Grid::new(9, 9).unwrap();
        let path = find_path(&grid, GridCoord::new(1, 1), GridCoord::new(5, 1)).unwrap();
        assert_eq!(path.len(), 4);
        assert_eq!(path.waypoints[0], GridCoord::new(2, 1));
        assert_eq!(path.goal(), Some(GridCoord::new(5, 1)));
    }

    #[test]
    fn test_start_equals_goal_is_empty() {
        let grid = Grid::new(7, 7).unwrap();
        let path = find_path(&grid, GridCoord::new(3, 3), GridCoord::new(3, 3)).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn test_path_steps_are_4_adjacent() {
        let mut grid = Grid::new(11, 11).unwrap();
        for y in [3, 4, 5, 6] {
            grid.set_tile(GridCoord::new(5, y), TileKind::Obstacle);
        }
        let start = GridCoord::new(2, 5);
        let path = find_path(&grid, start, GridCoord::new(8, 5)).unwrap();

        let mut prev = start;
        for wp in &path.waypoints {
            assert_eq!(prev.manhattan_distance(wp), 1, "{prev} -> {wp}");
            assert!(grid.tile(*wp).is_passable());
            prev = *wp;
        }
    }

    #[test]
    fn test_detour_length_matches_flood_fill() {
        let mut grid = Grid::new(11, 11).unwrap();
        // Vertical bar with a gap at the bottom.
        for y in 1..8 {
            grid.set_tile(GridCoord::new(5, y), TileKind::Obstacle);
        }
        let start = GridCoord::new(2, 2);
        let goal = GridCoord::new(8, 2);

        let path = find_path(&grid, start, goal).unwrap();
        let dist = grid.distance_field(start);
        assert_eq!(path.len() as u32, dist[grid.index(goal)].unwrap());
    }

    #[test]
    fn test_walled_off_goal_reports_failure() {
        let mut grid = Grid::new(9, 9).unwrap();
        let goal = GridCoord::new(6, 6);
        for neighbor in goal.neighbors_4() {
            grid.set_tile(neighbor, TileKind::Obstacle);
        }
        assert!(find_path(&grid, GridCoord::new(1, 1), goal).is_none());
    }

    #[test]
    fn test_unreachable_iff_flood_fill_unreached() {
        let mut grid = Grid::new(13, 13).unwrap();
        // Split the interior with a full vertical wall of obstacles.
        for y in 1..12 {
            grid.set_tile(GridCoord::new(6, y), TileKind::Obstacle);
        }
        let start = GridCoord::new(2, 2);
        let dist = grid.distance_field(start);

        for coord in grid.interior_coords().collect::<Vec<_>>() {
            if grid.tile(coord).is_blocking() {
                continue;
            }
            let reachable = dist[grid.index(coord)].is_some();
            let found = find_path(&grid, start, coord).is_some();
            assert_eq!(reachable, found, "disagreement at {coord}");
        }
    }

    #[test]
    fn test_ring_queue_wraps() {
        let mut q = RingQueue::with_capacity(3);
        q.push(GridCoord::new(1, 0));
        q.push(GridCoord::new(2, 0));
        assert_eq!(q.pop(), Some(GridCoord::new(1, 0)));
        q.push(GridCoord::new(3, 0));
        q.push(GridCoord::new(4, 0)); // wraps into freed slot
        assert_eq!(q.pop(), Some(GridCoord::new(2, 0)));
        assert_eq!(q.pop(), Some(GridCoord::new(3, 0)));
        assert_eq!(q.pop(), Some(GridCoord::new(4, 0)));
        assert_eq!(q.pop(), None);
    }

    #[test]
    #[should_panic(expected = "BFS queue overflow")]
    fn test_ring_queue_overflow_asserts() {
        let mut q = RingQueue::with_capacity(2);
        q.push(GridCoord::new(1, 0));
        q.push(GridCoord::new(2, 0));
        q.push(GridCoord::new(3, 0));
    }
}
