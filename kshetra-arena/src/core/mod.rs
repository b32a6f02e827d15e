//! Fundamental types shared across the arena crate.

mod coord;
mod heading;
mod tile;

pub use coord::GridCoord;
pub use heading::Heading;
pub use tile::TileKind;
