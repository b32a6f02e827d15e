//! Observation seam between the exploration core and presentation.
//!
//! Rendering, trail recording, and animation pacing all hang off this
//! trait; nothing flows back into exploration decisions.

use crate::agent::Agent;
use crate::core::GridCoord;
use crate::grid::Grid;

/// Callbacks fired while the agent moves through the arena.
///
/// All methods default to no-ops, so observers implement only what
/// they care about.
pub trait StepObserver {
    /// Called after each committed move, with the agent already on its
    /// new tile.
    fn on_step(&mut self, agent: &Agent, grid: &Grid) {
        let _ = (agent, grid);
    }

    /// Called after a marker is collected at `position`.
    fn on_marker_collected(&mut self, position: GridCoord) {
        let _ = position;
    }

    /// Called after held markers are dropped at `position`.
    fn on_markers_dropped(&mut self, position: GridCoord, count: usize) {
        let _ = (position, count);
    }
}

/// Observer that ignores everything; for headless runs and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl StepObserver for NullObserver {}
