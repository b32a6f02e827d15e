//! Per-run visited mask.

use crate::core::GridCoord;
use crate::grid::Grid;

/// Boolean mask over the whole arena, fresh for each exploration run.
#[derive(Clone, Debug)]
pub struct VisitedSet {
    cells: Vec<bool>,
    width: usize,
}

impl VisitedSet {
    /// Create a cleared mask sized to the grid.
    pub fn new(grid: &Grid) -> Self {
        Self {
            cells: vec![false; grid.cell_count()],
            width: grid.width(),
        }
    }

    #[inline]
    fn index(&self, coord: GridCoord) -> usize {
        coord.y as usize * self.width + coord.x as usize
    }

    /// Mark a tile visited.
    #[inline]
    pub fn mark(&mut self, coord: GridCoord) {
        let idx = self.index(coord);
        self.cells[idx] = true;
    }

    /// Check whether a tile has been visited.
    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        self.cells[self.index(coord)]
    }

    /// Number of visited tiles.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|v| **v).count()
    }
}
