//! The live agent collection.
//!
//! # Why a `BTreeMap`?
//!
//! Agents are created and destroyed during a run (spawning, exit arrivals),
//! so dense `AgentId`-indexed arrays would accumulate holes.  A `BTreeMap`
//! keyed by `AgentId` keeps removal cheap and, more importantly, always
//! iterates in ascending id order.  The apply phase depends on that order to
//! resolve two agents claiming the same cell deterministically.

use std::collections::BTreeMap;

use crowd_core::{AgentId, GridPos};

use crate::Agent;

/// All live agents.
#[derive(Clone, Debug, Default)]
pub struct AgentStore {
    agents: BTreeMap<AgentId, Agent>,
}

impl AgentStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Add `agent`.  Returns the agent previously stored under the same id,
    /// which never happens when ids come from the model's allocator.
    pub fn insert(&mut self, agent: Agent) -> Option<Agent> {
        self.agents.insert(agent.id, agent)
    }

    pub fn remove(&mut self, id: AgentId) -> Option<Agent> {
        self.agents.remove(&id)
    }

    #[inline]
    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(&id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(&id)
    }

    pub fn contains(&self, id: AgentId) -> bool {
        self.agents.contains_key(&id)
    }

    /// Ascending `AgentId` order.
    pub fn iter(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.values()
    }

    /// Ascending `AgentId` order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Agent> + '_ {
        self.agents.values_mut()
    }

    /// Ascending `AgentId` order.
    pub fn ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.agents.keys().copied()
    }

    /// `(id, position)` of every live agent, ascending by id.  This is the
    /// per-tick snapshot the decide phase reads.
    pub fn positions(&self) -> Vec<(AgentId, GridPos)> {
        self.agents.values().map(|a| (a.id, a.pos)).collect()
    }

    /// `true` if any live agent moved during the last tick.
    pub fn any_moved(&self) -> bool {
        self.agents.values().any(|a| a.has_moved)
    }
}
