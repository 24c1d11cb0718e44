//! `crowd-sim`: model setup and tick loop for the rust_crowd simulator.
//!
//! # Two-phase tick
//!
//! ```text
//! for tick in 0..run.max_ticks:
//!   ① Decide:  snapshot live positions; Behavior::decide for every agent
//!               against the start-of-tick grid (parallel with `parallel`).
//!   ② Apply:   in ascending AgentId order:
//!                 Arrive{exit}     → mark reached; queue exits for removal
//!                 MoveTo{target}   → grid move, memory, visit count
//!                                    (lost if a lower id took the cell)
//!                 Stay             → nothing
//!   ③ Remove:  exited agents leave the grid and the live collection.
//!   then: intruder zones, snapshot hook, quiescence stop, spawn.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                          |
//! |------------|-------------------------------------------------|
//! | `parallel` | Runs the decide phase on Rayon's thread pool.   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use crowd_config::load_config_str;
//! use crowd_core::RunConfig;
//! use crowd_sim::{ModelBuilder, NoopObserver};
//!
//! let config = load_config_str(json)?;
//! let run = RunConfig { spawn_agents: true, ..RunConfig::default() };
//! let mut model = ModelBuilder::crowd(config, run.seed).build()?;
//! let ticks = model.run(&run, &mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod model;
pub mod observer;
pub mod report;


pub use builder::ModelBuilder;
pub use error::{SimError, SimResult};
pub use model::{Model, PLACEMENT_ATTEMPTS, SPAWN_HEADROOM};
pub use observer::{NoopObserver, SimObserver};
pub use report::{
    CollisionCounts, IntruderCounts, IntruderHistory, TickReport, VisitCounts, INTIMATE_ZONE,
    PERSONAL_ZONE, SOCIAL_ZONE,
};
