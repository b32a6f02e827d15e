//! # Kshetra-Arena: Grid Exploration Engine
//!
//! Simulation core for an autonomous agent that sweeps a bounded 2-D
//! arena, collecting scattered markers while steering around walls and
//! obstacles.
//!
//! ## Components
//!
//! - [`grid`]: bounded tile store with border walls, shape carving,
//!   randomized obstacle/marker scatter, and a flood-fill
//!   connectivity check
//! - [`agent`]: position, heading, and the atomic
//!   move/turn/pickup/drop primitives
//! - [`pathfinding`]: stateless BFS shortest path with parent-pointer
//!   reconstruction
//! - [`exploration`]: the hybrid strategy of greedy local steps, BFS
//!   jumps to the nearest unvisited tile, and corner delivery
//!
//! ## Quick Start
//!
//! ```rust
//! use kshetra_arena::{Agent, Explorer, Grid, GridCoord, Heading, NullObserver, TileKind};
//!
//! let mut grid = Grid::new(9, 9).unwrap();
//! grid.set_tile(GridCoord::new(4, 4), TileKind::Marker);
//!
//! let mut agent = Agent::new(GridCoord::new(1, 1), Heading::East);
//! let summary = Explorer::new(&mut grid, &mut agent).run(&mut NullObserver);
//!
//! assert_eq!(grid.marker_count(), 0);
//! assert_eq!(summary.markers_collected, 1);
//! ```
//!
//! ## Coordinate Frame
//!
//! (0, 0) is the top-left wall tile; X grows right, Y grows down, so
//! North means decreasing Y. Movement is 4-connected; no diagonals.
//!
//! Everything runs single-threaded and turn-based: each move, turn,
//! pickup, or drop is atomic and there is no concurrent access to the
//! grid or the agent.

pub mod agent;
pub mod core;
pub mod error;
pub mod exploration;
pub mod grid;
pub mod pathfinding;

pub use agent::Agent;
pub use core::{GridCoord, Heading, TileKind};
pub use error::{ArenaError, Result};
pub use exploration::{
    deliver_to_corner, nearest_open_corner, ExploreSummary, Explorer, NullObserver, Outcome,
    StepObserver, VisitedSet,
};
pub use grid::{
    random_dimension, ArenaShape, GenerationPolicy, GeneratorConfig, Grid, DEFAULT_MAX_DIMENSION,
    MIN_DIMENSION,
};
pub use pathfinding::{find_path, Path};
