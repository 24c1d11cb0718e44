//! The `Model` struct and its tick loop.

use tracing::{debug, trace, warn};

use crowd_agent::{Agent, AgentStore};
use crowd_behavior::{Behavior, Intent, StepContext};
use crowd_config::StartRegion;
use crowd_core::{AgentId, DestinationId, GridPos, RunConfig, SimRng, Tick};
use crowd_grid::{Destination, Grid, GridError, Obstacle, ObstacleIndex, Occupant};

use crate::{
    CollisionCounts, IntruderCounts, IntruderHistory, SimError, SimObserver, SimResult,
    TickReport, VisitCounts,
};

/// How many agents spawning may add on top of the initial population.
pub const SPAWN_HEADROOM: usize = 10;

/// Random draws tried before a placement falls back or is skipped.
pub const PLACEMENT_ATTEMPTS: u32 = 1_000;

// ── Model ─────────────────────────────────────────────────────────────────────

/// The crowd simulation: world state plus the tick loop that advances it.
///
/// Each [`step`](Model::step) runs three phases:
///
/// 1. **Decide** (read-only, optionally parallel with the `parallel`
///    feature): every live agent asks the behavior for an [`Intent`] against
///    the occupancy as it stood at the start of the tick.
/// 2. **Apply** (sequential, ascending `AgentId`): moves are written to the
///    grid.  A move whose target was taken earlier in the same pass is lost
///    and counted in `collision_count`.
/// 3. **Remove**: agents that stood on an exit leave the grid and the live
///    collection, so their cells are free in the next tick's snapshot.
///
/// Create via [`ModelBuilder`][crate::ModelBuilder].
pub struct Model<B: Behavior> {
    /// Occupancy of every cell.  Mutated only by the apply and remove phases.
    pub grid: Grid,

    pub obstacles: Vec<Obstacle>,

    /// Nearest-obstacle lookup, built once from `obstacles`.
    pub obstacle_index: ObstacleIndex,

    /// Indexed by `DestinationId`.
    pub destinations: Vec<Destination>,

    /// Live agents, ascending by id.
    pub agents: AgentStore,

    pub visit_counts: VisitCounts,

    pub collision_count: CollisionCounts,

    /// Cumulative lost conflicts after each tick.
    pub collision_history: Vec<u64>,

    pub intruders_history: IntruderHistory,

    /// Decides every agent's move.
    pub behavior: B,

    pub(crate) start_region:     StartRegion,
    pub(crate) initial_count:    usize,
    pub(crate) next_id:          AgentId,
    pub(crate) tick:             Tick,
    pub(crate) collisions_total: u64,
    pub(crate) rng:              SimRng,
}

impl<B: Behavior> Model<B> {
    // ── Accessors ─────────────────────────────────────────────────────────

    /// The next tick [`step`](Model::step) will run.
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// Agents created at setup.
    pub fn initial_count(&self) -> usize {
        self.initial_count
    }

    /// Most agents spawning will let live at once.
    pub fn max_live_agents(&self) -> usize {
        self.initial_count + SPAWN_HEADROOM
    }

    /// Cells agents start and spawn in, clamped to the grid.
    pub fn start_region(&self) -> StartRegion {
        self.start_region
    }

    /// Lost conflicts over the whole run.
    pub fn collisions_total(&self) -> u64 {
        self.collisions_total
    }

    /// `true` when no live agent moved in the last tick.  An empty crowd is
    /// quiescent.
    pub fn is_quiescent(&self) -> bool {
        !self.agents.any_moved()
    }

    // ── Driver ────────────────────────────────────────────────────────────

    /// Run until quiescence or `run.end_tick()`, whichever comes first.
    /// Returns the number of ticks executed.
    ///
    /// After each tick: intruder zones are counted (if enabled), the
    /// snapshot hook fires (if due), the run stops if the crowd is
    /// quiescent, and otherwise one spawn is attempted (if enabled).
    pub fn run<O: SimObserver>(&mut self, run: &RunConfig, observer: &mut O) -> u64 {
        let mut executed = 0;
        while self.tick < run.end_tick() {
            let now = self.tick;

            observer.on_tick_start(now);
            let report = self.step();
            executed += 1;

            if run.track_intruder_zones {
                self.count_intruders();
            }
            observer.on_tick_end(now, &report);
            if run.snapshot_due(now) {
                observer.on_snapshot(now, &self.agents);
            }

            if self.is_quiescent() {
                debug!(tick = %now, live = report.live, "crowd is quiescent");
                break;
            }
            if run.spawn_agents {
                self.spawn_agent();
            }
        }
        observer.on_sim_end(self.tick, &self.visit_counts);
        executed
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance every live agent by one simultaneous step.
    pub fn step(&mut self) -> TickReport {
        let now = self.tick;

        // ── Decide ───────────────────────────────────────────────────────
        let snapshot = self.agents.positions();
        let intents = {
            let ctx = StepContext::new(
                now,
                &self.grid,
                &self.obstacle_index,
                &self.destinations,
                &snapshot,
            );
            decide_all(&self.behavior, &self.agents, &ctx)
        };

        // ── Apply ────────────────────────────────────────────────────────
        let mut report = TickReport { tick: now, ..TickReport::default() };
        let mut exits = Vec::new();
        for (id, intent) in intents {
            self.apply(id, intent, &mut report, &mut exits);
        }

        // ── Remove ───────────────────────────────────────────────────────
        for id in exits {
            if self.remove_agent(id).is_some() {
                report.removed += 1;
            }
        }

        self.collisions_total += report.conflicts as u64;
        self.collision_history.push(self.collisions_total);
        report.live = self.agents.len();
        self.tick = now + 1;
        report
    }

    fn apply(
        &mut self,
        id:     AgentId,
        intent: Intent,
        report: &mut TickReport,
        exits:  &mut Vec<AgentId>,
    ) {
        let Some(agent) = self.agents.get_mut(id) else {
            return;
        };
        agent.step_count += 1;
        agent.has_moved = false;

        match intent {
            Intent::Stay => {}

            Intent::Arrive { exit } => {
                if !agent.reached_destination {
                    agent.reached_destination = true;
                    report.arrived += 1;
                }
                if exit {
                    exits.push(id);
                }
            }

            Intent::MoveTo { target, strategy } => {
                match self.grid.move_to(Occupant::Agent(id), target) {
                    Ok(_) => {
                        agent.record_move(target, strategy);
                        *self.visit_counts.entry(target).or_default() += 1;
                        report.moved += 1;
                    }
                    Err(GridError::Occupied { by, .. }) => {
                        trace!(agent = %id, cell = %target, %by, "lost cell conflict");
                        *self.collision_count.entry(target).or_default() += 1;
                        report.conflicts += 1;
                    }
                    Err(e) => {
                        warn!(agent = %id, cell = %target, error = %e, "dropping invalid move");
                    }
                }
            }
        }
    }

    // ── Population ────────────────────────────────────────────────────────

    /// Put a new agent on the empty cell `pos` heading for `destination`.
    ///
    /// The id is allocated only once placement succeeds, so ids stay
    /// contiguous and are never reused.
    pub fn add_agent(&mut self, pos: GridPos, destination: DestinationId) -> SimResult<AgentId> {
        if destination.index() >= self.destinations.len() {
            return Err(SimError::UnknownDestination(destination));
        }
        let id = self.next_id;
        self.grid.place(Occupant::Agent(id), pos)?;
        self.agents.insert(Agent::new(id, pos, destination));
        self.next_id = id.next();
        Ok(id)
    }

    /// Take `id` off the grid and out of the live collection.
    pub fn remove_agent(&mut self, id: AgentId) -> Option<Agent> {
        if let Err(e) = self.grid.remove(Occupant::Agent(id)) {
            warn!(agent = %id, error = %e, "agent was not on the grid");
        }
        self.agents.remove(id)
    }

    /// Try once to add an agent on a random start-region cell.
    ///
    /// Nothing happens when the crowd is already at
    /// [`max_live_agents`](Model::max_live_agents) or the drawn cell is
    /// taken.  A skipped spawn is not an error.
    pub fn spawn_agent(&mut self) -> Option<AgentId> {
        if self.agents.len() >= self.max_live_agents() {
            trace!(live = self.agents.len(), "spawn skipped: crowd at capacity");
            return None;
        }
        if self.start_region.is_empty() {
            return None;
        }
        let pos = random_cell(&mut self.rng, &self.start_region);
        if !self.grid.is_empty(pos) {
            trace!(cell = %pos, "spawn skipped: cell taken");
            return None;
        }
        let destination = self.random_destination()?;
        match self.add_agent(pos, destination) {
            Ok(id) => {
                trace!(agent = %id, cell = %pos, "spawned");
                Some(id)
            }
            Err(e) => {
                warn!(cell = %pos, error = %e, "spawn failed");
                None
            }
        }
    }

    /// Create `count` agents on random empty start-region cells, each with
    /// a uniformly random destination.
    ///
    /// Each agent gets [`PLACEMENT_ATTEMPTS`] random draws, then the region
    /// is scanned row by row.  If the region is full the remaining agents
    /// are skipped.
    pub fn generate_agents(&mut self, count: u32) -> SimResult<usize> {
        let mut created = 0;
        for _ in 0..count {
            let Some(pos) = self.find_start_cell() else {
                warn!(created, requested = count, "start region is full; skipping remaining agents");
                break;
            };
            let Some(destination) = self.random_destination() else {
                warn!(requested = count, "no destinations; skipping agent generation");
                break;
            };
            self.add_agent(pos, destination)?;
            created += 1;
        }
        Ok(created)
    }

    fn find_start_cell(&mut self) -> Option<GridPos> {
        if self.start_region.is_empty() {
            return None;
        }
        for _ in 0..PLACEMENT_ATTEMPTS {
            let pos = random_cell(&mut self.rng, &self.start_region);
            if self.grid.is_empty(pos) {
                return Some(pos);
            }
        }
        self.start_region.cells().find(|&pos| self.grid.is_empty(pos))
    }

    fn random_destination(&mut self) -> Option<DestinationId> {
        self.rng.choose(&self.destinations).map(|d| d.id)
    }

    // ── Instrumentation ───────────────────────────────────────────────────

    /// Count ordered pairs of live agents per proxemic zone and append the
    /// sample to `intruders_history`.
    pub fn count_intruders(&mut self) -> IntruderCounts {
        let positions: Vec<GridPos> = self.agents.iter().map(|a| a.pos).collect();
        let counts = IntruderCounts::from_positions(&positions);
        self.intruders_history.push(counts);
        counts
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Uniform cell in a non-empty region.
pub(crate) fn random_cell(rng: &mut SimRng, region: &StartRegion) -> GridPos {
    GridPos::new(
        rng.gen_range(region.width[0]..region.width[1]),
        rng.gen_range(region.height[0]..region.height[1]),
    )
}

/// Ask the behavior for every live agent's intent, ascending by id.
fn decide_all<B: Behavior>(
    behavior: &B,
    agents:   &AgentStore,
    ctx:      &StepContext<'_>,
) -> Vec<(AgentId, Intent)> {
    #[cfg(not(feature = "parallel"))]
    {
        agents
            .iter()
            .map(|agent| (agent.id, behavior.decide(agent, ctx)))
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        // Indexed collect keeps ascending id order.
        let live: Vec<&Agent> = agents.iter().collect();
        live.par_iter()
            .map(|agent| (agent.id, behavior.decide(agent, ctx)))
            .collect()
    }
}
