//! Coverage exploration and marker delivery.

mod delivery;
mod explorer;
mod observer;
mod visited;

pub use delivery::{deliver_to_corner, follow_path, nearest_open_corner};
pub use explorer::{ExploreSummary, Explorer, Outcome};
pub use observer::{NullObserver, StepObserver};
pub use visited::VisitedSet;
