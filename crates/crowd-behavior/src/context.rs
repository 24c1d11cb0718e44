//! Read-only simulation state passed to every decision.

use crowd_core::{AgentId, DestinationId, GridPos, Tick};
use crowd_grid::{Destination, Grid, ObstacleIndex};

/// A read-only snapshot of the world passed to every
/// [`Behavior`][crate::Behavior] call.
///
/// `StepContext` is built once per tick by crowd-sim and shared (immutably)
/// across all agents during the decide phase.
///
/// # Lifetimes
///
/// All borrows live for the duration of one tick's decide phase.  crowd-sim
/// never allows mutable access to these structures while `StepContext` is
/// live, so `grid` is exactly the start-of-tick occupancy.
pub struct StepContext<'a> {
    /// Current simulation tick.
    pub tick: Tick,

    /// Occupancy at the start of the tick (agents and obstacles).
    pub grid: &'a Grid,

    /// Nearest-obstacle lookup for the wall-escape move.
    pub obstacles: &'a ObstacleIndex,

    /// All destinations, indexed by `DestinationId`.
    pub destinations: &'a [Destination],

    /// `(id, position)` of every live agent at the start of the tick,
    /// ascending by id.
    pub agents: &'a [(AgentId, GridPos)],
}

impl<'a> StepContext<'a> {
    /// Build a new context for a single tick.
    #[inline]
    pub fn new(
        tick:         Tick,
        grid:         &'a Grid,
        obstacles:    &'a ObstacleIndex,
        destinations: &'a [Destination],
        agents:       &'a [(AgentId, GridPos)],
    ) -> Self {
        Self { tick, grid, obstacles, destinations, agents }
    }

    #[inline]
    pub fn destination(&self, id: DestinationId) -> Option<&'a Destination> {
        self.destinations.get(id.index())
    }

    /// A cell an agent may step into: inside the grid, holding neither an
    /// agent nor an obstacle.
    #[inline]
    pub fn is_open(&self, pos: GridPos) -> bool {
        self.grid.is_empty(pos)
    }
}
