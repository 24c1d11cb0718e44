//! `crowd-behavior`: how an agent decides its next move.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`intent`]  | `Intent` enum (`Arrive`, `MoveTo`, `Stay`)                      |
//! | [`context`] | `StepContext<'a>`: read-only tick snapshot shared by all agents |
//! | [`model`]   | `Behavior` trait                                                |
//! | [`crowd`]   | `CrowdBehavior`: goal seeking, repulsion, wall escape           |
//! | [`noop`]    | `NoopBehavior`: agents that never move                          |
//!
//! # Design notes
//!
//! The two-phase tick loop in crowd-sim works as follows:
//!
//! 1. **Decide phase**: for every live agent call `Behavior::decide` against
//!    the same `StepContext`.  All reads go through shared borrows of the
//!    grid as it stood at the start of the tick; no mutation.
//!
//! 2. **Apply phase** (sequential, ascending `AgentId`): consume the
//!    collected `Intent`s and mutate the grid, the agents, and the model's
//!    counters.
//!
//! Because nothing is written while deciding, the order in which agents are
//! asked cannot change any agent's decision.

pub mod context;
pub mod crowd;
pub mod intent;
pub mod model;
pub mod noop;


pub use context::StepContext;
pub use crowd::{CrowdBehavior, REVISIT_PENALTY};
pub use intent::Intent;
pub use model::Behavior;
pub use noop::NoopBehavior;
