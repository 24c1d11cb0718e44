//! Agent intents: what an agent asks the model to do this tick.

use crowd_agent::MoveStrategy;
use crowd_core::GridPos;

/// The outcome of one agent's decision.
///
/// Intents are produced by [`Behavior::decide`][crate::Behavior::decide] and
/// consumed by the apply phase in crowd-sim.  A `MoveTo` is only a request:
/// another agent with a lower id may claim the same cell first, in which
/// case the move is dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    /// The agent stands on its destination.
    ///
    /// `exit == true` asks the model to remove the agent once every agent
    /// has been applied; otherwise the agent holds its cell for good.
    Arrive { exit: bool },

    /// Step into the neighbouring cell `target`.
    MoveTo {
        target:   GridPos,
        strategy: MoveStrategy,
    },

    /// No valid move this tick.
    Stay,
}

impl Intent {
    /// The requested cell, if this is a move.
    #[inline]
    pub fn target(&self) -> Option<GridPos> {
        match *self {
            Intent::MoveTo { target, .. } => Some(target),
            _ => None,
        }
    }
}
