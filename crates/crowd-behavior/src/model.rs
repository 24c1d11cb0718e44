//! The `Behavior` trait: the extension point for movement rules.

use crowd_agent::Agent;

use crate::{Intent, StepContext};

/// Pluggable movement rule.
///
/// # Thread safety
///
/// With crowd-sim's `parallel` feature the decide phase calls `decide` for
/// many agents from Rayon workers, so implementations must be
/// `Send + Sync`.  Per-agent state lives on [`Agent`], not in the behavior.
///
/// # Example
///
/// ```rust
/// use crowd_agent::Agent;
/// use crowd_behavior::{Behavior, Intent, StepContext};
///
/// /// Agents only ever leave through their destination.
/// struct WaitForExit;
///
/// impl Behavior for WaitForExit {
///     fn decide(&self, agent: &Agent, ctx: &StepContext<'_>) -> Intent {
///         match ctx.destination(agent.destination) {
///             Some(d) if d.is_reached_from(agent.pos) => Intent::Arrive { exit: d.preset.is_exit() },
///             _ => Intent::Stay,
///         }
///     }
/// }
/// ```
pub trait Behavior: Send + Sync + 'static {
    /// Called once per live agent per tick.
    ///
    /// Must not depend on any other agent's decision for the same tick:
    /// `ctx` is the only view of the world.
    fn decide(&self, agent: &Agent, ctx: &StepContext<'_>) -> Intent;
}
