//! `crowd-grid`: the shared occupancy grid and its static contents.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`grid`]        | `Grid` (one occupant per cell), `Occupant`               |
//! | [`obstacle`]    | `Obstacle`, `ObstacleIndex` (R-tree nearest-obstacle)    |
//! | [`destination`] | `Destination` (position, preset, colour)                 |
//! | [`error`]       | `GridError`, `GridResult<T>`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod destination;
pub mod error;
pub mod grid;
pub mod obstacle;

#[cfg(test)]
mod tests;

pub use destination::Destination;
pub use error::{GridError, GridResult};
pub use grid::{Grid, Occupant};
pub use obstacle::{Obstacle, ObstacleIndex};
