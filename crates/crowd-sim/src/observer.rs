//! Simulation observer trait for progress reporting and data collection.

use crowd_agent::AgentStore;
use crowd_core::Tick;

use crate::{TickReport, VisitCounts};

/// Callbacks invoked by [`Model::run`][crate::Model::run] at key points in
/// the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, report: &TickReport) {
///         println!("{tick}: {} live, {} moved", report.live, report.moved);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the tick's removals, with what the tick did.
    fn on_tick_end(&mut self, _tick: Tick, _report: &TickReport) {}

    /// Called at snapshot intervals (every `output_interval_ticks` ticks)
    /// with the live agents as they stand after the tick.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &AgentStore) {}

    /// Called once when the run stops, at quiescence or at `max_ticks`.
    fn on_sim_end(&mut self, _final_tick: Tick, _visits: &VisitCounts) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
