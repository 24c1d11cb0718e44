//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `agent_snapshots.csv`
//! - `tick_summaries.csv`
//! - `visit_counts.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{AgentSnapshotRow, OutputResult, TickSummaryRow, VisitCountRow};
use crate::writer::OutputWriter;

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    visits:    Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the three CSV files and write the header
    /// rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record([
            "tick", "agent_id", "x", "y", "destination_id", "has_moved", "reached_destination",
        ])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record([
            "tick", "live_agents", "moved", "arrived", "removed", "conflicts", "collisions_total",
        ])?;

        let mut visits = Writer::from_path(dir.join("visit_counts.csv"))?;
        visits.write_record(["x", "y", "visits"])?;

        Ok(Self {
            snapshots,
            summaries,
            visits,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.agent_id.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.destination_id.to_string(),
                (row.has_moved as u8).to_string(),
                (row.reached_destination as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.live_agents.to_string(),
            row.moved.to_string(),
            row.arrived.to_string(),
            row.removed.to_string(),
            row.conflicts.to_string(),
            row.collisions_total.to_string(),
        ])?;
        Ok(())
    }

    fn write_visit_counts(&mut self, rows: &[VisitCountRow]) -> OutputResult<()> {
        for row in rows {
            self.visits.write_record(&[
                row.x.to_string(),
                row.y.to_string(),
                row.visits.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        self.visits.flush()?;
        Ok(())
    }
}
