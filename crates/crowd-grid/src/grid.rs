//! Fixed-size single-occupancy grid.
//!
//! # Data layout
//!
//! Cells are stored row-major in one `Vec<Option<Occupant>>`:
//!
//! ```text
//! cells[ y * width + x ]
//! ```
//!
//! A reverse index (`Occupant → GridPos`) makes `move_to` and `remove` O(1)
//! without callers having to remember where an occupant was placed.
//!
//! # Invariants
//!
//! - At most one occupant per cell.
//! - Every indexed occupant sits inside `[0, width) × [0, height)`.
//! - `cells` and `positions` always describe the same placement.

use std::fmt;

use rustc_hash::FxHashMap;

use crowd_core::{AgentId, GridPos, ObstacleId};

use crate::{GridError, GridResult};

/// Anything that can hold a grid cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Occupant {
    Agent(AgentId),
    Obstacle(ObstacleId),
}

impl Occupant {
    #[inline]
    pub fn is_obstacle(self) -> bool {
        matches!(self, Occupant::Obstacle(_))
    }
}

impl fmt::Display for Occupant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Occupant::Agent(id)    => write!(f, "{id}"),
            Occupant::Obstacle(id) => write!(f, "{id}"),
        }
    }
}

/// The shared occupancy structure.
///
/// Only the model's setup and apply phases mutate it; behaviors read it
/// through a shared borrow while deciding, which is what makes the
/// start-of-tick state a consistent snapshot.
#[derive(Clone)]
pub struct Grid {
    width:     i32,
    height:    i32,
    cells:     Vec<Option<Occupant>>,
    positions: FxHashMap<Occupant, GridPos>,
}

impl Grid {
    /// Create an empty `width × height` grid.
    pub fn new(width: u32, height: u32) -> Self {
        let width = width.min(i32::MAX as u32) as i32;
        let height = height.min(i32::MAX as u32) as i32;
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
            positions: FxHashMap::default(),
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of occupied cells.
    #[inline]
    pub fn occupied_count(&self) -> usize {
        self.positions.len()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn in_bounds(&self, pos: GridPos) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }

    /// `true` if `pos` is inside the grid and holds nothing.  Out-of-bounds
    /// cells are never empty.
    #[inline]
    pub fn is_empty(&self, pos: GridPos) -> bool {
        self.index(pos).is_some_and(|i| self.cells[i].is_none())
    }

    /// Occupant of `pos`, or `None` for empty and out-of-bounds cells.
    #[inline]
    pub fn occupant(&self, pos: GridPos) -> Option<Occupant> {
        self.index(pos).and_then(|i| self.cells[i])
    }

    /// Where `occupant` currently sits.
    #[inline]
    pub fn position_of(&self, occupant: Occupant) -> Option<GridPos> {
        self.positions.get(&occupant).copied()
    }

    /// Iterator over every occupied cell, in no particular order.
    pub fn occupied(&self) -> impl Iterator<Item = (Occupant, GridPos)> + '_ {
        self.positions.iter().map(|(&occ, &pos)| (occ, pos))
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Put `occupant` on the empty cell `pos`.
    pub fn place(&mut self, occupant: Occupant, pos: GridPos) -> GridResult<()> {
        if self.positions.contains_key(&occupant) {
            return Err(GridError::AlreadyPlaced(occupant));
        }
        let i = self.vacant_index(pos)?;
        self.cells[i] = Some(occupant);
        self.positions.insert(occupant, pos);
        Ok(())
    }

    /// Vacate `occupant`'s cell and occupy `pos` in one step.  Returns the
    /// cell it left.  On error the grid is unchanged.
    pub fn move_to(&mut self, occupant: Occupant, pos: GridPos) -> GridResult<GridPos> {
        let from = self
            .position_of(occupant)
            .ok_or(GridError::NotPlaced(occupant))?;
        let to = self.vacant_index(pos)?;
        let from_i = self.index_unchecked(from);
        self.cells[from_i] = None;
        self.cells[to] = Some(occupant);
        self.positions.insert(occupant, pos);
        Ok(from)
    }

    /// Take `occupant` off the grid permanently.  Returns the freed cell.
    pub fn remove(&mut self, occupant: Occupant) -> GridResult<GridPos> {
        let pos = self
            .positions
            .remove(&occupant)
            .ok_or(GridError::NotPlaced(occupant))?;
        let i = self.index_unchecked(pos);
        self.cells[i] = None;
        Ok(pos)
    }

    // ── Indexing helpers ──────────────────────────────────────────────────

    #[inline]
    fn index(&self, pos: GridPos) -> Option<usize> {
        self.in_bounds(pos).then(|| self.index_unchecked(pos))
    }

    #[inline]
    fn index_unchecked(&self, pos: GridPos) -> usize {
        pos.y as usize * self.width as usize + pos.x as usize
    }

    fn vacant_index(&self, pos: GridPos) -> GridResult<usize> {
        let i = self.index(pos).ok_or(GridError::OutOfBounds(pos))?;
        match self.cells[i] {
            Some(by) => Err(GridError::Occupied { pos, by }),
            None     => Ok(i),
        }
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("occupied", &self.positions.len())
            .finish()
    }
}
