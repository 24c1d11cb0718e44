//! `crowd-output`: CSV output for the rust_crowd simulator.
//!
//! | File                  | Written                       | Columns                                                              |
//! |-----------------------|-------------------------------|----------------------------------------------------------------------|
//! | `agent_snapshots.csv` | every `output_interval_ticks` | `tick,agent_id,x,y,destination_id,has_moved,reached_destination`     |
//! | `tick_summaries.csv`  | every tick                    | `tick,live_agents,moved,arrived,removed,conflicts,collisions_total`  |
//! | `visit_counts.csv`    | once, at run end              | `x,y,visits` sorted by `(x, y)`                                      |
//!
//! [`CsvWriter`] implements [`OutputWriter`] and is driven by
//! [`SimOutputObserver`], which implements `crowd_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crowd_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! model.run(&run, &mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::{SimOutputObserver, visit_rows};
pub use row::{AgentSnapshotRow, TickSummaryRow, VisitCountRow};
pub use writer::OutputWriter;
