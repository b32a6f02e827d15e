//! Error types for the arena crate.

use thiserror::Error;

/// Arena error type.
#[derive(Error, Debug)]
pub enum ArenaError {
    #[error("arena dimensions {width}x{height} outside supported range {min}..={max}")]
    InvalidDimensions {
        width: usize,
        height: usize,
        min: usize,
        max: usize,
    },

    #[error("no open interior tile found for agent placement")]
    NoOpenTile,

    #[error("agent start {0} is not an open interior tile")]
    BlockedStart(crate::core::GridCoord),
}

pub type Result<T> = std::result::Result<T, ArenaError>;
