//! Grid error type.

use thiserror::Error;

use crowd_core::GridPos;

use crate::Occupant;

/// Errors produced by [`Grid`][crate::Grid] mutations.
///
/// Read-only queries never fail: an out-of-bounds cell is simply "not
/// empty".
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("cell {pos} is already occupied by {by}")]
    Occupied { pos: GridPos, by: Occupant },

    #[error("cell {0} is outside the grid")]
    OutOfBounds(GridPos),

    #[error("{0} is not on the grid")]
    NotPlaced(Occupant),

    #[error("{0} is already on the grid")]
    AlreadyPlaced(Occupant),
}

pub type GridResult<T> = Result<T, GridError>;
