//! Movement trail recording.
//!
//! Listens to exploration steps and keeps, per tile and axis, how many
//! times the agent has crossed it. The pass ordinal (first, second,
//! third) drives the trail color in the SVG report; crossings beyond
//! the third reuse the last ordinal.

use std::thread;
use std::time::Duration;

use tracing::debug;

use kshetra_arena::{Agent, Grid, GridCoord, StepObserver};

/// Pass ordinals are capped here; later crossings keep this value.
pub const MAX_TRAIL_PASSES: u8 = 3;

/// One recorded tile-to-tile move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrailSegment {
    /// Tile the agent left.
    pub from: GridCoord,
    /// Tile the agent entered.
    pub to: GridCoord,
    /// 1-based crossing ordinal of the entered tile along this axis,
    /// capped at [`MAX_TRAIL_PASSES`].
    pub pass: u8,
}

/// Records every committed step of a run, plus pickup and drop events.
pub struct TrailRecorder {
    width: usize,
    horizontal: Vec<u8>,
    vertical: Vec<u8>,
    segments: Vec<TrailSegment>,
    collected: Vec<GridCoord>,
    drop: Option<(GridCoord, usize)>,
    last_position: GridCoord,
    step_delay: Duration,
}

impl TrailRecorder {
    /// Create a recorder for one run starting at the given tile.
    pub fn new(grid: &Grid, start: GridCoord, step_delay: Duration) -> Self {
        Self {
            width: grid.width(),
            horizontal: vec![0; grid.cell_count()],
            vertical: vec![0; grid.cell_count()],
            segments: Vec::new(),
            collected: Vec::new(),
            drop: None,
            last_position: start,
            step_delay,
        }
    }

    /// All recorded moves, in order.
    pub fn segments(&self) -> &[TrailSegment] {
        &self.segments
    }

    /// Tiles where markers were picked up, in order.
    pub fn collected(&self) -> &[GridCoord] {
        &self.collected
    }

    /// Delivery drop site and count, when one happened.
    pub fn drop_site(&self) -> Option<(GridCoord, usize)> {
        self.drop
    }

    fn bump(counts: &mut [u8], idx: usize) -> u8 {
        if counts[idx] < MAX_TRAIL_PASSES {
            counts[idx] += 1;
        }
        counts[idx]
    }
}

impl StepObserver for TrailRecorder {
    fn on_step(&mut self, agent: &Agent, _grid: &Grid) {
        let from = self.last_position;
        let to = agent.position();
        self.last_position = to;

        // A blocked move leaves the agent in place; nothing to draw.
        if from == to {
            return;
        }

        let idx = to.y as usize * self.width + to.x as usize;
        let pass = if from.y == to.y {
            Self::bump(&mut self.horizontal, idx)
        } else {
            Self::bump(&mut self.vertical, idx)
        };
        self.segments.push(TrailSegment { from, to, pass });

        if !self.step_delay.is_zero() {
            thread::sleep(self.step_delay);
        }
    }

    fn on_marker_collected(&mut self, position: GridCoord) {
        debug!("trail: marker collected at {position}");
        self.collected.push(position);
    }

    fn on_markers_dropped(&mut self, position: GridCoord, count: usize) {
        debug!("trail: {count} markers dropped at {position}");
        self.drop = Some((position, count));
    }
}
