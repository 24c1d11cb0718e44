//! corridor: a crowd squeezing through a gap in a wall.
//!
//! Twenty pedestrians start in the bottom rows of a 20×20 grid, and a wall
//! across row 10 leaves a four-cell gap in the middle.  Most head for the
//! exit above the gap; a few wait at a meeting point in the top-left corner.
//! Agents keep spawning (up to ten over the initial crowd) until nobody
//! moves or the tick limit is hit.
//!
//! Pass a path to a scenario JSON file to run something else:
//!
//! ```text
//! RUST_LOG=debug cargo run --bin corridor -- my_scenario.json
//! ```

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crowd_agent::AgentStore;
use crowd_config::{CrowdConfig, load_config, load_config_str};
use crowd_core::{RunConfig, Tick};
use crowd_output::{CsvWriter, OutputWriter, SimOutputObserver};
use crowd_sim::{ModelBuilder, SimObserver, TickReport, VisitCounts};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:                  u64  = 42;
const MAX_TICKS:             u64  = 500;
const OUTPUT_INTERVAL_TICKS: u64  = 5;
const OUTPUT_DIR:            &str = "output/corridor";

// ── Scenario ──────────────────────────────────────────────────────────────────

const SCENARIO_JSON: &str = r#"{
    "num_agents": 20,
    "grid_width": 20,
    "grid_height": 20,
    "agent_start_positions": { "width": [0, 20], "height": [0, 4] },
    "obstacles": [
        { "position": [0, 10] },  { "position": [1, 10] },  { "position": [2, 10] },
        { "position": [3, 10] },  { "position": [4, 10] },  { "position": [5, 10] },
        { "position": [6, 10] },  { "position": [7, 10] },
        { "position": [12, 10] }, { "position": [13, 10] }, { "position": [14, 10] },
        { "position": [15, 10] }, { "position": [16, 10] }, { "position": [17, 10] },
        { "position": [18, 10] }, { "position": [19, 10] }
    ],
    "objectives": [
        { "position": [10, 19], "preset": "exit", "color": [0, 128, 0] },
        { "position": [9, 19],  "preset": "exit", "color": [0, 128, 0] },
        { "position": [1, 18],  "preset": "hold", "color": [200, 0, 0] }
    ]
}"#;

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    snapshot_rows: usize,
    summary_rows:  usize,
    removed:       usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, snapshot_rows: 0, summary_rows: 0, removed: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, report: &TickReport) {
        self.summary_rows += 1;
        self.removed += report.removed;
        if report.tick.0 % 50 == 0 {
            info!(%tick, live = report.live, moved = report.moved, conflicts = report.conflicts, "progress");
        }
        self.inner.on_tick_end(tick, report);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore) {
        self.snapshot_rows += agents.len();
        self.inner.on_snapshot(tick, agents);
    }

    fn on_sim_end(&mut self, final_tick: Tick, visits: &VisitCounts) {
        self.inner.on_sim_end(final_tick, visits);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn scenario() -> Result<CrowdConfig> {
    match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path)).with_context(|| format!("loading {path}")),
        None => load_config_str(SCENARIO_JSON).context("built-in corridor scenario"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    // 1. Scenario and run settings.
    let config = scenario()?;
    let run = RunConfig {
        seed:                  SEED,
        max_ticks:             MAX_TICKS,
        output_interval_ticks: OUTPUT_INTERVAL_TICKS,
        spawn_agents:          true,
        track_intruder_zones:  true,
    };
    info!(
        width = config.grid_width,
        height = config.grid_height,
        agents = config.num_agents,
        seed = run.seed,
        "=== corridor ==="
    );

    // 2. Build the model.
    let mut model = ModelBuilder::crowd(config, run.seed).build()?;
    info!(
        obstacles = model.obstacles.len(),
        destinations = model.destinations.len(),
        agents = model.agents.len(),
        "model ready"
    );

    // 3. Set up output.
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));

    // 4. Run.
    let t0 = Instant::now();
    let ticks = model.run(&run, &mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        tracing::error!("output error: {e}");
    }

    // 5. Summary.
    let quiescent = model.is_quiescent();
    info!(ticks, quiescent, secs = elapsed.as_secs_f64(), "run finished");
    info!(rows = obs.snapshot_rows, "wrote {OUTPUT_DIR}/agent_snapshots.csv");
    info!(rows = obs.summary_rows, "wrote {OUTPUT_DIR}/tick_summaries.csv");
    info!(rows = model.visit_counts.len(), "wrote {OUTPUT_DIR}/visit_counts.csv");
    info!(
        exited = obs.removed,
        still_live = model.agents.len(),
        collisions = model.collisions_total(),
        "crowd"
    );
    if let (Some(intimate), Some(personal)) = (
        model.intruders_history.intimate.iter().max(),
        model.intruders_history.personal.iter().max(),
    ) {
        info!(peak_intimate = *intimate, peak_personal = *personal, "intruder zones");
    }

    // 6. Final agent table.
    println!();
    println!("{:<10} {:<10} {:<12} {:<8}", "Agent", "Cell", "Destination", "Arrived");
    println!("{}", "-".repeat(42));
    for agent in model.agents.iter() {
        println!(
            "{:<10} {:<10} {:<12} {:<8}",
            agent.id.0,
            agent.pos.to_string(),
            agent.destination.0,
            if agent.reached_destination { "yes" } else { "no" },
        );
    }

    Ok(())
}
