//! Bounded 2-D tile store with border walls and a live marker counter.
//!
//! The grid is an owned row-major buffer with width and height stored
//! alongside; the maximum dimension is a runtime parameter rather than
//! a compile-time constant. Tiles are mutated only during generation
//! and by marker pickup/drop; the arena is never resized.

mod connectivity;
mod generation;

pub use generation::{random_dimension, ArenaShape, GenerationPolicy, GeneratorConfig};

use crate::core::{GridCoord, TileKind};
use crate::error::{ArenaError, Result};

/// Smallest accepted dimension: a wall ring around at least one
/// interior tile.
pub const MIN_DIMENSION: usize = 5;

/// Default upper bound on either dimension.
pub const DEFAULT_MAX_DIMENSION: usize = 40;

/// A width×height arena of tiles.
///
/// Invariants held from construction onward:
/// - every border tile is [`TileKind::Wall`] and no interior tile is;
/// - `marker_count()` equals the number of tiles holding
///   [`TileKind::Marker`], maintained incrementally by [`set_tile`].
///
/// [`set_tile`]: Grid::set_tile
#[derive(Clone, Debug)]
pub struct Grid {
    tiles: Vec<TileKind>,
    width: usize,
    height: usize,
    marker_count: usize,
}

impl Grid {
    /// Create an arena with border walls and an empty interior.
    ///
    /// Dimensions below [`MIN_DIMENSION`] or above
    /// [`DEFAULT_MAX_DIMENSION`] are a configuration error.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::with_max_dimension(width, height, DEFAULT_MAX_DIMENSION)
    }

    /// Create an arena with a caller-chosen upper bound on dimensions.
    pub fn with_max_dimension(width: usize, height: usize, max: usize) -> Result<Self> {
        if width < MIN_DIMENSION || height < MIN_DIMENSION || width > max || height > max {
            return Err(ArenaError::InvalidDimensions {
                width,
                height,
                min: MIN_DIMENSION,
                max,
            });
        }

        let mut grid = Self {
            tiles: vec![TileKind::Empty; width * height],
            width,
            height,
            marker_count: 0,
        };

        for y in 0..height as i32 {
            for x in 0..width as i32 {
                if x == 0 || x == width as i32 - 1 || y == 0 || y == height as i32 - 1 {
                    grid.tiles[y as usize * width + x as usize] = TileKind::Wall;
                }
            }
        }

        Ok(grid)
    }

    /// Arena width in tiles.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Arena height in tiles.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of tiles.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Live marker count, O(1).
    #[inline]
    pub fn marker_count(&self) -> usize {
        self.marker_count
    }

    /// The arena's center tile.
    #[inline]
    pub fn center(&self) -> GridCoord {
        GridCoord::new(self.width as i32 / 2, self.height as i32 / 2)
    }

    /// Check if a coordinate lies anywhere on the arena.
    #[inline]
    pub fn in_bounds(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// Check if a coordinate lies strictly inside the wall ring.
    #[inline]
    pub fn is_interior(&self, coord: GridCoord) -> bool {
        coord.x >= 1
            && coord.y >= 1
            && (coord.x as usize) < self.width - 1
            && (coord.y as usize) < self.height - 1
    }

    /// Row-major buffer index for a coordinate.
    ///
    /// Panics when out of bounds; callers are expected to stay inside
    /// the arena by construction.
    #[inline]
    pub(crate) fn index(&self, coord: GridCoord) -> usize {
        assert!(
            self.in_bounds(coord),
            "coordinate {} outside {}x{} arena",
            coord,
            self.width,
            self.height
        );
        coord.y as usize * self.width + coord.x as usize
    }

    /// The tile at a coordinate. Panics when out of bounds.
    #[inline]
    pub fn tile(&self, coord: GridCoord) -> TileKind {
        self.tiles[self.index(coord)]
    }

    /// Overwrite the tile at a coordinate, keeping the live marker
    /// counter consistent. Panics when out of bounds.
    pub fn set_tile(&mut self, coord: GridCoord, kind: TileKind) {
        let idx = self.index(coord);
        let old = self.tiles[idx];
        if old == TileKind::Marker && kind != TileKind::Marker {
            self.marker_count -= 1;
        } else if old != TileKind::Marker && kind == TileKind::Marker {
            self.marker_count += 1;
        }
        self.tiles[idx] = kind;
    }

    /// Check if the tile at a coordinate can be stood on. Out-of-bounds
    /// coordinates are not passable.
    #[inline]
    pub fn is_passable(&self, coord: GridCoord) -> bool {
        self.in_bounds(coord) && self.tile(coord).is_passable()
    }

    /// Iterate interior coordinates in row-major order.
    pub fn interior_coords(&self) -> impl Iterator<Item = GridCoord> + '_ {
        let (w, h) = (self.width as i32, self.height as i32);
        (1..h - 1).flat_map(move |y| (1..w - 1).map(move |x| GridCoord::new(x, y)))
    }

    /// Reset every interior tile to Empty. Used by generation policies
    /// that retry obstacle placement from scratch.
    pub(crate) fn clear_interior(&mut self) {
        for y in 1..self.height - 1 {
            for x in 1..self.width - 1 {
                self.tiles[y * self.width + x] = TileKind::Empty;
            }
        }
        self.marker_count = 0;
    }
}
