//! Discrete simulation time and run-level settings.
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is one
//! simultaneous step of every live agent; there is no mapping to wall-clock
//! time.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// Settings for one run, supplied by the driver rather than the scenario
/// document.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Hard stop for runs that never go quiescent (for example when spawning
    /// keeps refilling the grid).
    pub max_ticks: u64,

    /// Call `SimObserver::on_snapshot` every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,

    /// Attempt one spawn after every tick that did not end the run.
    pub spawn_agents: bool,

    /// Count intruder zones after every tick.
    pub track_intruder_zones: bool,
}

impl RunConfig {
    /// The tick at which the run stops even without quiescence.
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.max_ticks)
    }

    /// `true` if a snapshot is due after `tick`.
    #[inline]
    pub fn snapshot_due(&self, tick: Tick) -> bool {
        self.output_interval_ticks > 0 && tick.0 % self.output_interval_ticks == 0
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed:                  42,
            max_ticks:             1_000,
            output_interval_ticks: 1,
            spawn_agents:          false,
            track_intruder_zones:  false,
        }
    }
}
