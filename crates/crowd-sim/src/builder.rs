//! Builder that turns a scenario document into a ready-to-run [`Model`].

use tracing::{debug, warn};

use crowd_agent::AgentStore;
use crowd_behavior::{Behavior, CrowdBehavior};
use crowd_config::{CrowdConfig, StartRegion};
use crowd_core::{AgentId, DestinationId, ObstacleId, Preset, Rgb, SimRng, Tick};
use crowd_grid::{Destination, Grid, Obstacle, ObstacleIndex, Occupant};

use crate::model::{PLACEMENT_ATTEMPTS, random_cell};
use crate::{IntruderHistory, Model, SimResult};

/// Builder for [`Model<B>`].
///
/// Setup runs in a fixed order, all of it drawing from one RNG seeded with
/// `seed`:
///
/// 1. obstacles (fixed list, or `num_obstacles` random empty cells),
/// 2. destinations (fixed list, or `num_objectives` random exits off the
///    obstacles),
/// 3. `num_agents` agents in the start region, each with a random
///    destination.
///
/// A placement that finds no cell is logged and skipped.
///
/// # Example
///
/// ```rust,ignore
/// let config = load_config(Path::new("corridor.json"))?;
/// let mut model = ModelBuilder::crowd(config, 42).build()?;
/// model.run(&RunConfig::default(), &mut NoopObserver);
/// ```
pub struct ModelBuilder<B: Behavior> {
    config:   CrowdConfig,
    seed:     u64,
    behavior: B,
}

impl ModelBuilder<CrowdBehavior> {
    /// Builder using the standard pedestrian rule, configured from the
    /// document's `edge_row_heuristic`.
    pub fn crowd(config: CrowdConfig, seed: u64) -> Self {
        let behavior = CrowdBehavior::new().with_edge_row_heuristic(config.edge_row_heuristic);
        Self::new(config, seed, behavior)
    }
}

impl<B: Behavior> ModelBuilder<B> {
    pub fn new(config: CrowdConfig, seed: u64, behavior: B) -> Self {
        Self { config, seed, behavior }
    }

    /// Validate the document, lay out the world, and populate it.
    pub fn build(self) -> SimResult<Model<B>> {
        let config = self.config;
        config.validate()?;

        let mut rng = SimRng::new(self.seed);
        let mut grid = Grid::new(config.grid_width, config.grid_height);

        let obstacles = place_obstacles(&config, &mut grid, &mut rng);
        let obstacle_index = ObstacleIndex::new(&obstacles);
        let destinations = make_destinations(&config, &grid, &mut rng);

        let mut model = Model {
            grid,
            obstacles,
            obstacle_index,
            destinations,
            agents:            AgentStore::new(),
            visit_counts:      Default::default(),
            collision_count:   Default::default(),
            collision_history: Vec::new(),
            intruders_history: IntruderHistory::default(),
            behavior:          self.behavior,
            start_region:      config.start_region(),
            initial_count:     0,
            next_id:           AgentId(0),
            tick:              Tick::ZERO,
            collisions_total:  0,
            rng,
        };
        model.initial_count = model.generate_agents(config.num_agents)?;

        debug!(
            width = config.grid_width,
            height = config.grid_height,
            obstacles = model.obstacles.len(),
            destinations = model.destinations.len(),
            agents = model.initial_count,
            "model ready"
        );
        Ok(model)
    }
}

// ── Setup helpers ─────────────────────────────────────────────────────────────

fn place_obstacles(config: &CrowdConfig, grid: &mut Grid, rng: &mut SimRng) -> Vec<Obstacle> {
    let mut obstacles: Vec<Obstacle> = Vec::new();

    if config.randomize_obstacles {
        let whole = StartRegion::full(config.grid_width, config.grid_height);
        for _ in 0..config.num_obstacles {
            let id = ObstacleId(obstacles.len() as u32);
            let placed = (0..PLACEMENT_ATTEMPTS)
                .map(|_| random_cell(rng, &whole))
                .find(|&pos| grid.place(Occupant::Obstacle(id), pos).is_ok());
            match placed {
                Some(pos) => obstacles.push(Obstacle { id, pos }),
                None => warn!(placed = obstacles.len(), "no free cell for a random obstacle; skipping"),
            }
        }
        return obstacles;
    }

    for spec in &config.obstacles {
        let id = ObstacleId(obstacles.len() as u32);
        let pos = spec.pos();
        match grid.place(Occupant::Obstacle(id), pos) {
            Ok(()) => obstacles.push(Obstacle { id, pos }),
            Err(e) => warn!(cell = %pos, error = %e, "skipping obstacle"),
        }
    }
    obstacles
}

fn make_destinations(config: &CrowdConfig, grid: &Grid, rng: &mut SimRng) -> Vec<Destination> {
    if !config.randomize_objectives {
        return config
            .objectives
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                let pos = spec.pos();
                if grid.occupant(pos).is_some() {
                    warn!(cell = %pos, "destination sits on an obstacle and cannot be reached");
                }
                Destination::new(DestinationId(i as u16), pos, spec.preset, spec.rgb())
            })
            .collect();
    }

    let whole = StartRegion::full(config.grid_width, config.grid_height);
    let mut destinations: Vec<Destination> = Vec::new();
    for _ in 0..config.num_objectives {
        let free = (0..PLACEMENT_ATTEMPTS)
            .map(|_| random_cell(rng, &whole))
            .find(|&pos| grid.is_empty(pos));
        match free {
            Some(pos) => {
                let id = DestinationId(destinations.len() as u16);
                destinations.push(Destination::new(id, pos, Preset::Exit, Rgb::NAVY));
            }
            None => warn!(placed = destinations.len(), "no free cell for a random destination; skipping"),
        }
    }
    destinations
}
