//! Hybrid coverage strategy: greedy local steps with BFS fallback.
//!
//! Most moves are O(1): the agent walks onto whichever 4-neighbor is
//! still unvisited. Only when no neighbor qualifies does a full
//! row-major scan pick the next target and a BFS route leads there.
//! The run ends when the arena runs out of markers or out of
//! reachable unvisited tiles.

use log::{debug, info, warn};

use crate::agent::Agent;
use crate::core::{GridCoord, Heading};
use crate::grid::Grid;
use crate::pathfinding::{find_path, Path};

use super::observer::StepObserver;
use super::visited::VisitedSet;

/// Why an exploration run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The live marker counter reached zero.
    MarkersCleared,
    /// No unvisited passable tile remains anywhere.
    CoverageExhausted,
    /// A discovered target had no route to it; the run stops rather
    /// than trying further candidates.
    TargetUnreachable,
}

/// Result of one exploration run.
#[derive(Clone, Copy, Debug)]
pub struct ExploreSummary {
    /// Committed moves.
    pub steps: usize,
    /// Markers picked up during the run.
    pub markers_collected: usize,
    /// Distinct tiles visited, including the start.
    pub tiles_visited: usize,
    /// Termination reason.
    pub outcome: Outcome,
}

/// Drives one agent through one arena until a termination condition.
pub struct Explorer<'a> {
    grid: &'a mut Grid,
    agent: &'a mut Agent,
    visited: VisitedSet,
    steps: usize,
    markers_collected: usize,
}

impl<'a> Explorer<'a> {
    /// Create an explorer with a fresh visited mask.
    pub fn new(grid: &'a mut Grid, agent: &'a mut Agent) -> Self {
        let visited = VisitedSet::new(grid);
        Self {
            grid,
            agent,
            visited,
            steps: 0,
            markers_collected: 0,
        }
    }

    /// Run the exploration loop to completion.
    pub fn run(mut self, observer: &mut dyn StepObserver) -> ExploreSummary {
        info!(
            "exploration start at {} facing {:?}, {} markers in the arena",
            self.agent.position(),
            self.agent.heading(),
            self.grid.marker_count()
        );

        self.visited.mark(self.agent.position());
        self.collect_here(observer);

        let outcome = loop {
            if self.grid.marker_count() == 0 {
                break Outcome::MarkersCleared;
            }

            if self.try_local_step(observer) {
                continue;
            }

            let Some(target) = self.next_unvisited() else {
                break Outcome::CoverageExhausted;
            };

            match find_path(self.grid, self.agent.position(), target) {
                Some(path) => self.follow(&path, observer),
                None => {
                    // Generation's retry budget makes this unlikely but
                    // not impossible; the strategy gives up instead of
                    // cycling through further candidates.
                    warn!("no route to unvisited tile {target}, ending exploration");
                    break Outcome::TargetUnreachable;
                }
            }
        };

        info!(
            "exploration done: {:?}, {} steps, {} markers collected, {} tiles visited",
            outcome,
            self.steps,
            self.markers_collected,
            self.visited.count()
        );

        ExploreSummary {
            steps: self.steps,
            markers_collected: self.markers_collected,
            tiles_visited: self.visited.count(),
            outcome,
        }
    }

    /// Step onto the first unvisited passable 4-neighbor, if any.
    fn try_local_step(&mut self, observer: &mut dyn StepObserver) -> bool {
        let from = self.agent.position();
        for neighbor in from.neighbors_4() {
            if self.is_unvisited_passable(neighbor) {
                self.step_onto(neighbor, observer);
                return true;
            }
        }
        false
    }

    /// First unvisited passable interior tile in row-major order.
    fn next_unvisited(&self) -> Option<GridCoord> {
        self.grid
            .interior_coords()
            .find(|c| self.is_unvisited_passable(*c))
    }

    /// Walk a BFS route waypoint by waypoint, collecting along the way.
    fn follow(&mut self, path: &Path, observer: &mut dyn StepObserver) {
        debug!("following {}-step route to {:?}", path.len(), path.goal());
        for waypoint in &path.waypoints {
            self.step_onto(*waypoint, observer);
        }
    }

    /// Turn toward an adjacent tile, move, mark, and collect.
    fn step_onto(&mut self, target: GridCoord, observer: &mut dyn StepObserver) {
        let heading = Heading::toward(self.agent.position(), target);
        self.agent.turn_to(heading);
        self.agent.move_forward(self.grid);
        self.steps += 1;
        self.visited.mark(self.agent.position());
        observer.on_step(self.agent, self.grid);
        self.collect_here(observer);
    }

    /// Pick up the marker underfoot, if any.
    fn collect_here(&mut self, observer: &mut dyn StepObserver) {
        let position = self.agent.position();
        if self.agent.pick_up_marker(self.grid) {
            self.markers_collected += 1;
            debug!(
                "collected marker at {position}, {} remain",
                self.grid.marker_count()
            );
            observer.on_marker_collected(position);
        }
    }

    fn is_unvisited_passable(&self, coord: GridCoord) -> bool {
        self.grid.is_interior(coord)
            && !self.visited.contains(coord)
            && self.grid.tile(coord).is_passable()
    }
}
