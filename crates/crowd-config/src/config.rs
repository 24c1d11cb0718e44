//! Scenario document types.

use serde::Deserialize;

use crowd_core::{GridPos, Preset, Rgb};

use crate::{ConfigError, ConfigResult};

/// Largest grid, in cells, a scenario may ask for.  The grid allocates one
/// slot per cell up front.
pub const MAX_CELLS: u64 = 1 << 24;

// ── Document ──────────────────────────────────────────────────────────────────

/// Everything model setup reads from the scenario document.
///
/// Field names match the JSON keys.  A missing key takes the value from
/// [`CrowdConfig::default`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CrowdConfig {
    /// Agents created at setup.  Spawning can add up to 10 more.
    pub num_agents: u32,

    /// Destinations generated when `randomize_objectives` is set.
    pub num_objectives: u32,

    /// Obstacles placed when `randomize_obstacles` is set.
    pub num_obstacles: u32,

    pub grid_width: u32,
    pub grid_height: u32,

    /// Rectangle agents start (and spawn) in.  `None` means the whole grid.
    pub agent_start_positions: Option<StartRegion>,

    /// Place `num_obstacles` obstacles at random instead of reading
    /// `obstacles`.
    pub randomize_obstacles: bool,

    /// Generate `num_objectives` random exits instead of reading
    /// `objectives`.
    pub randomize_objectives: bool,

    pub obstacles: Vec<ObstacleSpec>,
    pub objectives: Vec<ObjectiveSpec>,

    /// Agents on the last row walk toward the horizontal midline unless
    /// their destination is on that row.
    ///
    /// Off by default, a deliberate change from the fixed-row rule this
    /// generalizes: left on, an agent on the last row never steps off it.
    pub edge_row_heuristic: bool,
}

impl Default for CrowdConfig {
    fn default() -> Self {
        Self {
            num_agents:            10,
            num_objectives:        3,
            num_obstacles:         10,
            grid_width:            30,
            grid_height:           30,
            agent_start_positions: None,
            randomize_obstacles:   false,
            randomize_objectives:  false,
            obstacles:             Vec::new(),
            objectives:            Vec::new(),
            edge_row_heuristic:    false,
        }
    }
}

impl CrowdConfig {
    /// The start rectangle clamped to the grid.
    pub fn start_region(&self) -> StartRegion {
        let full = StartRegion::full(self.grid_width, self.grid_height);
        match &self.agent_start_positions {
            None => full,
            Some(r) => StartRegion {
                width:  clamp_range(r.width, full.width),
                height: clamp_range(r.height, full.height),
            },
        }
    }

    /// Number of destinations setup will create.
    pub fn destination_count(&self) -> usize {
        if self.randomize_objectives {
            self.num_objectives as usize
        } else {
            self.objectives.len()
        }
    }

    /// Reject values no run can use.
    ///
    /// Out-of-bounds or overlapping fixed obstacles are *not* rejected here:
    /// setup skips them, the same way it skips random placements that find
    /// no free cell.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(invalid(format!(
                "grid must be at least 1x1, got {}x{}",
                self.grid_width, self.grid_height
            )));
        }
        let cells = self.grid_width as u64 * self.grid_height as u64;
        if cells > MAX_CELLS {
            return Err(invalid(format!(
                "{}x{} grid has {cells} cells, more than the limit of {MAX_CELLS}",
                self.grid_width, self.grid_height
            )));
        }

        let region = self.start_region();
        if region.is_empty() {
            return Err(invalid(format!(
                "agent_start_positions {:?} does not overlap the {}x{} grid",
                self.agent_start_positions, self.grid_width, self.grid_height
            )));
        }

        let count = self.destination_count();
        if count > u16::MAX as usize {
            return Err(invalid(format!("{count} destinations exceed the limit of {}", u16::MAX)));
        }
        if count == 0 && self.num_agents > 0 {
            return Err(invalid("agents are configured but there are no destinations".to_owned()));
        }

        if !self.randomize_objectives {
            for (i, o) in self.objectives.iter().enumerate() {
                let pos = o.pos();
                let inside = (0..self.grid_width as i64).contains(&(pos.x as i64))
                    && (0..self.grid_height as i64).contains(&(pos.y as i64));
                if !inside {
                    return Err(invalid(format!("objective {i} at {pos} is outside the grid")));
                }
            }
        }
        Ok(())
    }
}

fn invalid(msg: String) -> ConfigError {
    ConfigError::Invalid(msg)
}

fn clamp_range(r: [i32; 2], bounds: [i32; 2]) -> [i32; 2] {
    [r[0].max(bounds[0]), r[1].min(bounds[1])]
}

// ── Parts ─────────────────────────────────────────────────────────────────────

/// Half-open rectangle `[width[0], width[1]) × [height[0], height[1])`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StartRegion {
    pub width:  [i32; 2],
    pub height: [i32; 2],
}

impl StartRegion {
    /// The whole `width × height` grid.
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            width:  [0, width.min(i32::MAX as u32) as i32],
            height: [0, height.min(i32::MAX as u32) as i32],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width[0] >= self.width[1] || self.height[0] >= self.height[1]
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        (self.width[0]..self.width[1]).contains(&pos.x)
            && (self.height[0]..self.height[1]).contains(&pos.y)
    }

    /// Number of cells in the rectangle.
    pub fn area(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width[1] - self.width[0]) as usize * (self.height[1] - self.height[0]) as usize
    }

    /// Every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = GridPos> + '_ {
        (self.height[0]..self.height[1])
            .flat_map(move |y| (self.width[0]..self.width[1]).map(move |x| GridPos::new(x, y)))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ObstacleSpec {
    pub position: [i32; 2],
}

impl ObstacleSpec {
    pub fn pos(&self) -> GridPos {
        self.position.into()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ObjectiveSpec {
    pub position: [i32; 2],

    #[serde(default)]
    pub preset: Preset,

    #[serde(default = "default_color")]
    pub color: [u8; 3],
}

impl ObjectiveSpec {
    pub fn pos(&self) -> GridPos {
        self.position.into()
    }

    pub fn rgb(&self) -> Rgb {
        self.color.into()
    }
}

fn default_color() -> [u8; 3] {
    [Rgb::NAVY.0, Rgb::NAVY.1, Rgb::NAVY.2]
}
