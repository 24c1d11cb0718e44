//! `crowd-core`: foundational types for the `rust_crowd` simulator.
//!
//! This crate is a dependency of every other `crowd-*` crate.  It has no
//! `crowd-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `ObstacleId`, `DestinationId`              |
//! | [`pos`]         | `GridPos`, `Direction`, Manhattan/Euclidean distance  |
//! | [`preset`]      | `Preset` (`hold` / `exit`), `Rgb`                     |
//! | [`time`]        | `Tick`, `RunConfig`                                   |
//! | [`rng`]         | `SimRng` (model-level, seeded)                        |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod pos;
pub mod preset;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, DestinationId, ObstacleId};
pub use pos::{Direction, GridPos};
pub use preset::{Preset, Rgb};
pub use rng::SimRng;
pub use time::{RunConfig, Tick};
