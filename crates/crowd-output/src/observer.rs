//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use crowd_agent::AgentStore;
use crowd_core::Tick;
use crowd_sim::{SimObserver, TickReport, VisitCounts};

use crate::row::{AgentSnapshotRow, TickSummaryRow, VisitCountRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes agent snapshots, tick summaries and the
/// final visit counts to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `model.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:           W,
    collisions_total: u64,
    last_error:       Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            collisions_total: 0,
            last_error:       None,
        }
    }

    /// Take the stored write error (if any) after `model.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, report: &TickReport) {
        self.collisions_total += report.conflicts as u64;
        let row = TickSummaryRow {
            tick:             tick.0,
            live_agents:      report.live as u64,
            moved:            report.moved as u64,
            arrived:          report.arrived as u64,
            removed:          report.removed as u64,
            conflicts:        report.conflicts as u64,
            collisions_total: self.collisions_total,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore) {
        let rows: Vec<AgentSnapshotRow> = agents
            .iter()
            .map(|a| AgentSnapshotRow {
                tick:                tick.0,
                agent_id:            a.id.0,
                x:                   a.pos.x,
                y:                   a.pos.y,
                destination_id:      a.destination.0,
                has_moved:           a.has_moved,
                reached_destination: a.reached_destination,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick, visits: &VisitCounts) {
        let result = self.writer.write_visit_counts(&visit_rows(visits));
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}

/// Visit counts as rows sorted by `(x, y)`.
pub fn visit_rows(visits: &VisitCounts) -> Vec<VisitCountRow> {
    let mut rows: Vec<VisitCountRow> = visits
        .iter()
        .map(|(pos, &visits)| VisitCountRow { x: pos.x, y: pos.y, visits })
        .collect();
    rows.sort_unstable();
    rows
}
