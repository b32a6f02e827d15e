//! Interior connectivity check via flood fill.

use crate::core::GridCoord;

use super::Grid;

impl Grid {
    /// Check that every passable interior tile is reachable from the
    /// arena center through 4-connected passable tiles.
    ///
    /// Returns false when the center itself is blocked while passable
    /// tiles exist elsewhere; generation treats that layout the same
    /// as any other disconnected one.
    pub fn verify_connectivity(&self) -> bool {
        let mut reached = vec![false; self.cell_count()];
        let center = self.center();

        if self.is_passable(center) {
            let mut stack = vec![center];
            reached[self.index(center)] = true;

            while let Some(coord) = stack.pop() {
                for neighbor in coord.neighbors_4() {
                    if !self.is_interior(neighbor) || !self.is_passable(neighbor) {
                        continue;
                    }
                    let idx = self.index(neighbor);
                    if !reached[idx] {
                        reached[idx] = true;
                        stack.push(neighbor);
                    }
                }
            }
        }

        self.interior_coords()
            .all(|c| !self.is_passable(c) || reached[self.index(c)])
    }

    /// Shortest-path distance from `start` to every passable tile, by
    /// breadth-first sweep. Unreached tiles hold `None`.
    ///
    /// This is the reference distance map the pathfinder tests compare
    /// against; exploration itself never needs it.
    pub fn distance_field(&self, start: GridCoord) -> Vec<Option<u32>> {
        let mut dist = vec![None; self.cell_count()];
        if !self.is_interior(start) || !self.is_passable(start) {
            return dist;
        }

        dist[self.index(start)] = Some(0);
        let mut frontier = std::collections::VecDeque::from([start]);

        while let Some(coord) = frontier.pop_front() {
            let d = dist[self.index(coord)].unwrap_or(0);
            for neighbor in coord.neighbors_4() {
                if !self.is_interior(neighbor) || !self.is_passable(neighbor) {
                    continue;
                }
                let idx = self.index(neighbor);
                if dist[idx].is_none() {
                    dist[idx] = Some(d + 1);
                    frontier.push_back(neighbor);
                }
            }
        }

        dist
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileKind;

    #[test]
    fn test_open_interior_is_connected() {
        let grid = Grid::new(11, 11).unwrap();
        assert!(grid.verify_connectivity());
    }

    #[test]
    fn test_sealed_pocket_is_detected() {
        let mut grid = Grid::new(9, 9).unwrap();
        // Wall off (1, 1) behind two obstacles; the border supplies
        // the other two sides.
        grid.set_tile(GridCoord::new(2, 1), TileKind::Obstacle);
        grid.set_tile(GridCoord::new(1, 2), TileKind::Obstacle);
        assert!(!grid.verify_connectivity());
    }

    #[test]
    fn test_blocked_center_counts_as_disconnected() {
        let mut grid = Grid::new(9, 9).unwrap();
        grid.set_tile(grid.center(), TileKind::Obstacle);
        assert!(!grid.verify_connectivity());
    }

    #[test]
    fn test_distance_field_simple_corridor() {
        let grid = Grid::new(7, 5).unwrap();
        let dist = grid.distance_field(GridCoord::new(1, 1));
        assert_eq!(dist[grid.index(GridCoord::new(1, 1))], Some(0));
        assert_eq!(dist[grid.index(GridCoord::new(5, 1))], Some(4));
        assert_eq!(dist[grid.index(GridCoord::new(5, 3))], Some(6));
        // Border walls stay unreached.
        assert_eq!(dist[grid.index(GridCoord::new(0, 0))], None);
    }
}
