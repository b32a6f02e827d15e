//! Delivery phase: route the agent to a corner and drop its haul.
//!
//! A thin composition of the pathfinder and the agent primitives; no
//! visited bookkeeping happens here.

use log::{info, warn};

use crate::agent::Agent;
use crate::core::{GridCoord, Heading, TileKind};
use crate::grid::Grid;
use crate::pathfinding::{find_path, Path};

use super::observer::StepObserver;

/// Nearest open interior corner by squared distance, if any is Empty.
pub fn nearest_open_corner(grid: &Grid, from: GridCoord) -> Option<GridCoord> {
    let (w, h) = (grid.width() as i32, grid.height() as i32);
    let corners = [
        GridCoord::new(1, 1),
        GridCoord::new(w - 2, 1),
        GridCoord::new(1, h - 2),
        GridCoord::new(w - 2, h - 2),
    ];

    corners
        .into_iter()
        .filter(|c| grid.tile(*c) == TileKind::Empty)
        .min_by_key(|c| c.distance_squared(&from))
}

/// Walk an already-planned route, turning and stepping per waypoint.
pub fn follow_path(
    grid: &Grid,
    agent: &mut Agent,
    path: &Path,
    observer: &mut dyn StepObserver,
) {
    for waypoint in &path.waypoints {
        let heading = Heading::toward(agent.position(), *waypoint);
        agent.turn_to(heading);
        agent.move_forward(grid);
        observer.on_step(agent, grid);
    }
}

/// Deliver all held markers to the nearest open corner.
///
/// When no corner is open or no route exists, the markers are dropped
/// where the agent stands. Returns the number of markers dropped.
pub fn deliver_to_corner(
    grid: &mut Grid,
    agent: &mut Agent,
    observer: &mut dyn StepObserver,
) -> usize {
    if agent.markers_held() == 0 {
        return 0;
    }

    match nearest_open_corner(grid, agent.position()) {
        Some(corner) => match find_path(grid, agent.position(), corner) {
            Some(path) => {
                info!(
                    "delivering {} markers to corner {corner}",
                    agent.markers_held()
                );
                follow_path(grid, agent, &path, observer);
            }
            None => warn!("no route to corner {corner}, dropping in place"),
        },
        None => warn!("no open corner, dropping in place"),
    }

    let mut dropped = 0;
    while agent.drop_marker(grid) {
        dropped += 1;
    }
    observer.on_markers_dropped(agent.position(), dropped);
    dropped
}
