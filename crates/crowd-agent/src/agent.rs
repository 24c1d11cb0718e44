//! The pedestrian agent.

use std::fmt;

use crowd_core::{AgentId, DestinationId, GridPos};

use crate::RecentPositions;

/// Distance (grid units, Euclidean, inclusive) within which another agent
/// counts as an intruder.
pub const PERSONAL_SPACE_RADIUS: f64 = 2.0;

/// Number of recently entered cells an agent remembers.
pub const MEMORY_CAPACITY: usize = 4;

/// Which branch of the step algorithm produced a move.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveStrategy {
    /// No intruders: step toward the destination.
    GoalSeek,
    /// Intruders present: step to the least-repelled neighbour.
    Repulsion,
    /// Fallback when the other two found nothing: step away from walls.
    Escape,
}

impl MoveStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            MoveStrategy::GoalSeek  => "goal_seek",
            MoveStrategy::Repulsion => "repulsion",
            MoveStrategy::Escape    => "escape",
        }
    }
}

impl fmt::Display for MoveStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One pedestrian.
///
/// All fields are `pub` for the model's apply phase and for output writers;
/// behaviors only ever see `&Agent`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id: AgentId,

    /// Current cell.  Mirrors the grid's reverse index.
    pub pos: GridPos,

    /// Assigned destination (non-owning).
    pub destination: DestinationId,

    /// Ticks this agent has been stepped.
    pub step_count: u64,

    pub recent: RecentPositions,

    /// Whether the last step changed `pos`.
    pub has_moved: bool,

    /// Set once the agent stands on its destination; never cleared.
    pub reached_destination: bool,

    /// Branch that produced the last applied move.
    pub last_strategy: Option<MoveStrategy>,
}

impl Agent {
    pub fn new(id: AgentId, pos: GridPos, destination: DestinationId) -> Self {
        Self {
            id,
            pos,
            destination,
            step_count: 0,
            recent: RecentPositions::new(MEMORY_CAPACITY),
            has_moved: false,
            reached_destination: false,
            last_strategy: None,
        }
    }

    #[inline]
    pub fn personal_space_radius(&self) -> f64 {
        PERSONAL_SPACE_RADIUS
    }

    /// `true` if `other` is within this agent's personal space.
    #[inline]
    pub fn is_intruded_by(&self, other: GridPos) -> bool {
        self.pos.distance(other) <= self.personal_space_radius()
    }

    /// Record a successful move into `to`.
    pub fn record_move(&mut self, to: GridPos, strategy: MoveStrategy) {
        self.pos = to;
        self.recent.push(to);
        self.has_moved = true;
        self.last_strategy = Some(strategy);
    }
}
