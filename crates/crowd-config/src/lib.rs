//! `crowd-config`: the scenario document consumed once at model setup.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`config`]  | `CrowdConfig`, `StartRegion`, `ObstacleSpec`, `ObjectiveSpec` |
//! | [`loader`]  | `load_config`, `load_config_reader`, `load_config_str`     |
//! | [`error`]   | `ConfigError`, `ConfigResult<T>`                           |
//!
//! Every field has a default, so a missing field is never an error; only
//! values no run could use are rejected by [`CrowdConfig::validate`].

pub mod config;
pub mod error;
pub mod loader;


pub use config::{CrowdConfig, MAX_CELLS, ObjectiveSpec, ObstacleSpec, StartRegion};
pub use error::{ConfigError, ConfigResult};
pub use loader::{load_config, load_config_reader, load_config_str};
