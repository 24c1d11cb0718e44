//! Plain data row types written by output backends.

/// One live agent at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentSnapshotRow {
    pub tick:                u64,
    pub agent_id:            u32,
    pub x:                   i32,
    pub y:                   i32,
    pub destination_id:      u16,
    pub has_moved:           bool,
    pub reached_destination: bool,
}

/// What one tick did, plus the running conflict total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:             u64,
    pub live_agents:      u64,
    pub moved:            u64,
    pub arrived:          u64,
    pub removed:          u64,
    pub conflicts:        u64,
    pub collisions_total: u64,
}

/// Cumulative successful moves into one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct VisitCountRow {
    pub x:      i32,
    pub y:      i32,
    pub visits: u64,
}
