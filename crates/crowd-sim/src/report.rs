//! Per-tick results and run-long instrumentation.

use rustc_hash::FxHashMap;

use crowd_core::{GridPos, Tick};

/// Cumulative count of successful moves into each cell.
pub type VisitCounts = FxHashMap<GridPos, u64>;

/// Cumulative count of lost cell conflicts at each cell.
pub type CollisionCounts = FxHashMap<GridPos, u64>;

/// Outer edge (inclusive, grid units) of the intimate zone.
pub const INTIMATE_ZONE: f64 = 2.0;
/// Outer edge (inclusive) of the personal zone.
pub const PERSONAL_ZONE: f64 = 5.0;
/// Outer edge (inclusive) of the social zone.
pub const SOCIAL_ZONE: f64 = 8.0;

// ── TickReport ────────────────────────────────────────────────────────────────

/// What one call to [`Model::step`][crate::Model::step] did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub tick: Tick,

    /// Live agents after removals.
    pub live: usize,

    /// Agents whose position changed.
    pub moved: usize,

    /// Agents that stood on their destination for the first time.
    pub arrived: usize,

    /// Agents removed at an exit.
    pub removed: usize,

    /// Moves lost because a lower-id agent took the cell first.
    pub conflicts: usize,
}

// ── Intruder zones ────────────────────────────────────────────────────────────

/// Ordered pairs of distinct live agents per proxemic zone at one instant.
///
/// A pair lands in the first zone whose edge its distance does not exceed;
/// pairs beyond [`SOCIAL_ZONE`] are not counted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct IntruderCounts {
    pub intimate: u64,
    pub personal: u64,
    pub social:   u64,
}

impl IntruderCounts {
    /// Count every ordered pair in `positions`.
    pub fn from_positions(positions: &[GridPos]) -> Self {
        let mut counts = Self::default();
        for (i, &a) in positions.iter().enumerate() {
            for (j, &b) in positions.iter().enumerate() {
                if i != j {
                    counts.add(a.distance(b));
                }
            }
        }
        counts
    }

    fn add(&mut self, d: f64) {
        if d <= INTIMATE_ZONE {
            self.intimate += 1;
        } else if d <= PERSONAL_ZONE {
            self.personal += 1;
        } else if d <= SOCIAL_ZONE {
            self.social += 1;
        }
    }
}

/// One sample per zone for every call to
/// [`Model::count_intruders`][crate::Model::count_intruders].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntruderHistory {
    pub intimate: Vec<u64>,
    pub personal: Vec<u64>,
    pub social:   Vec<u64>,
}

impl IntruderHistory {
    pub fn push(&mut self, counts: IntruderCounts) {
        self.intimate.push(counts.intimate);
        self.personal.push(counts.personal);
        self.social.push(counts.social);
    }

    pub fn len(&self) -> usize {
        self.intimate.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intimate.is_empty()
    }
}
