//! `crowd-agent`: per-agent state and the live agent collection.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`agent`]   | `Agent`, `MoveStrategy`, personal-space and memory constants |
//! | [`memory`]  | `RecentPositions`: bounded FIFO of recently entered cells    |
//! | [`store`]   | `AgentStore`: live agents keyed and iterated by `AgentId`    |
//!
//! Agents hold no behavior: deciding a move is `crowd-behavior`'s job and
//! applying it is `crowd-sim`'s.  This crate only describes what an agent
//! *is*.

pub mod agent;
pub mod memory;
pub mod store;


pub use agent::{Agent, MoveStrategy, MEMORY_CAPACITY, PERSONAL_SPACE_RADIUS};
pub use memory::RecentPositions;
pub use store::AgentStore;
