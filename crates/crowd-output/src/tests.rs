//! Integration tests for crowd-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{AgentSnapshotRow, TickSummaryRow, VisitCountRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(agent_id: u32, tick: u64) -> AgentSnapshotRow {
        AgentSnapshotRow {
            tick,
            agent_id,
            x:                   agent_id as i32,
            y:                   2,
            destination_id:      0,
            has_moved:           true,
            reached_destination: false,
        }
    }

    fn headers(path: std::path::PathBuf) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("agent_snapshots.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
        assert!(dir.path().join("visit_counts.csv").exists());
    }

    #[test]
    fn csv_creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("a");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(dir.path().join("agent_snapshots.csv")),
            ["tick", "agent_id", "x", "y", "destination_id", "has_moved", "reached_destination"]
        );
        assert_eq!(
            headers(dir.path().join("tick_summaries.csv")),
            ["tick", "live_agents", "moved", "arrived", "removed", "conflicts", "collisions_total"]
        );
        assert_eq!(headers(dir.path().join("visit_counts.csv")), ["x", "y", "visits"]);
    }

    #[test]
    fn csv_snapshot_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 5), snap_row(1, 5), snap_row(2, 5)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "5"); // tick
        assert_eq!(&rows[1][1], "1"); // agent_id
        assert_eq!(&rows[2][2], "2"); // x
        assert_eq!(&rows[2][5], "1"); // has_moved
        assert_eq!(&rows[2][6], "0"); // reached_destination
    }

    #[test]
    fn csv_tick_summary_row() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&TickSummaryRow {
            tick:             3,
            live_agents:      8,
            moved:            6,
            arrived:          1,
            removed:          1,
            conflicts:        2,
            collisions_total: 5,
        })
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        let fields: Vec<&str> = rows[0].iter().collect();
        assert_eq!(fields, ["3", "8", "6", "1", "1", "2", "5"]);
    }

    #[test]
    fn csv_visit_count_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_visit_counts(&[
            VisitCountRow { x: 0, y: 1, visits: 4 },
            VisitCountRow { x: 2, y: 0, visits: 1 },
        ])
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("visit_counts.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][2], "4");
        assert_eq!(&rows[1][0], "2");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use std::io;

    use crowd_config::load_config_str;
    use crowd_core::{GridPos, RunConfig, Tick};
    use crowd_sim::{ModelBuilder, SimObserver, TickReport, VisitCounts};

    use crate::csv::CsvWriter;
    use crate::observer::{SimOutputObserver, visit_rows};
    use crate::row::{AgentSnapshotRow, TickSummaryRow, VisitCountRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    /// Writer whose tick summaries always fail.
    #[derive(Default)]
    struct FailingWriter {
        attempts: usize,
        finished: bool,
    }

    impl OutputWriter for FailingWriter {
        fn write_snapshots(&mut self, _rows: &[AgentSnapshotRow]) -> OutputResult<()> {
            Ok(())
        }

        fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
            self.attempts += 1;
            Err(OutputError::Io(io::Error::other(format!("disk full at tick {}", row.tick))))
        }

        fn write_visit_counts(&mut self, _rows: &[VisitCountRow]) -> OutputResult<()> {
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished = true;
            Ok(())
        }
    }

    #[test]
    fn visit_rows_sorted_by_x_then_y() {
        let mut visits = VisitCounts::default();
        visits.insert(GridPos::new(2, 0), 1);
        visits.insert(GridPos::new(0, 3), 2);
        visits.insert(GridPos::new(0, 1), 5);
        let rows = visit_rows(&visits);
        let cells: Vec<(i32, i32, u64)> = rows.iter().map(|r| (r.x, r.y, r.visits)).collect();
        assert_eq!(cells, [(0, 1, 5), (0, 3, 2), (2, 0, 1)]);
    }

    #[test]
    fn first_error_is_kept() {
        let mut obs = SimOutputObserver::new(FailingWriter::default());
        obs.on_tick_end(Tick(0), &TickReport::default());
        obs.on_tick_end(Tick(1), &TickReport { tick: Tick(1), ..TickReport::default() });
        obs.on_sim_end(Tick(2), &VisitCounts::default());

        let err = obs.take_error().unwrap();
        assert!(err.to_string().contains("tick 0"), "got {err}");
        assert!(obs.take_error().is_none());

        let writer = obs.into_writer();
        assert_eq!(writer.attempts, 2);
        assert!(writer.finished);
    }

    #[test]
    fn corner_run_writes_all_three_files() {
        let config = load_config_str(
            r#"{ "num_agents": 1, "grid_width": 10, "grid_height": 10,
                 "agent_start_positions": { "width": [0, 1], "height": [0, 1] },
                 "obstacles":  [ { "position": [5, 5] } ],
                 "objectives": [ { "position": [9, 9], "preset": "exit" } ] }"#,
        )
        .unwrap();
        let run = RunConfig { output_interval_ticks: 2, ..RunConfig::default() };
        let mut model = ModelBuilder::crowd(config, run.seed).build().unwrap();

        let dir = tempfile::tempdir().expect("create temp dir");
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        let ticks = model.run(&run, &mut obs);
        assert_eq!(ticks, 19);
        assert!(obs.take_error().is_none(), "no write errors expected");

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let summaries: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(summaries.len(), 19);
        assert_eq!(&summaries[18][1], "0"); // live_agents after the exit
        assert_eq!(&summaries[18][4], "1"); // removed

        // Snapshots at ticks 0, 2, …, 16 hold the agent; tick 18 has nobody.
        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let snapshots: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(snapshots.len(), 9);
        assert_eq!(&snapshots[0][2], "0"); // x
        assert_eq!(&snapshots[0][3], "1"); // y

        let mut rdr = csv::Reader::from_path(dir.path().join("visit_counts.csv")).unwrap();
        let visits: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(visits.len(), 18);
        assert_eq!((&visits[0][0], &visits[0][1]), ("0", "1"));
        assert_eq!((&visits[17][0], &visits[17][1]), ("9", "9"));
    }
}
