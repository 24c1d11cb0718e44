//! A no-op behavior: agents never move.

use crowd_agent::Agent;

use crate::{Behavior, Intent, StepContext};

/// A [`Behavior`] that always returns [`Intent::Stay`].
///
/// Useful in tests, or for populations that only occupy space.
pub struct NoopBehavior;

impl Behavior for NoopBehavior {
    fn decide(&self, _agent: &Agent, _ctx: &StepContext<'_>) -> Intent {
        Intent::Stay
    }
}
