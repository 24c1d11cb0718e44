//! Static obstacles and the nearest-obstacle distance index.
//!
//! # Spatial index
//!
//! Obstacles never move, so an R-tree (via `rstar`) over their cells is
//! bulk-loaded once at setup.  The wall-escape move asks it for the distance
//! from each candidate cell to the closest obstacle instead of scanning the
//! whole grid.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use crowd_core::{GridPos, ObstacleId};

/// An immutable blocking cell.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    pub id:  ObstacleId,
    pub pos: GridPos,
}

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct ObstacleEntry {
    point: [i64; 2], // [x, y]
    id:    ObstacleId,
}

impl RTreeObject for ObstacleEntry {
    type Envelope = AABB<[i64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for ObstacleEntry {
    /// Squared Euclidean distance in cells.  Coordinates are widened to
    /// `i64` so gaps across the widest accepted grid still square exactly.
    fn distance_2(&self, point: &[i64; 2]) -> i64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── ObstacleIndex ─────────────────────────────────────────────────────────────

/// Nearest-obstacle lookup over every obstacle placed on the grid.
pub struct ObstacleIndex {
    tree: RTree<ObstacleEntry>,
}

impl ObstacleIndex {
    /// Bulk-load the index from the placed obstacles.
    pub fn new(obstacles: &[Obstacle]) -> Self {
        let entries = obstacles
            .iter()
            .map(|o| ObstacleEntry { point: wide(o.pos), id: o.id })
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Closest obstacle to `pos` and its Euclidean distance.
    pub fn nearest(&self, pos: GridPos) -> Option<(ObstacleId, f64)> {
        let query = wide(pos);
        self.tree
            .nearest_neighbor(&query)
            .map(|e| (e.id, (e.distance_2(&query) as f64).sqrt()))
    }

    /// Euclidean distance from `pos` to the closest obstacle, or
    /// `f64::INFINITY` when there are none.
    pub fn distance_to_nearest(&self, pos: GridPos) -> f64 {
        self.nearest(pos).map_or(f64::INFINITY, |(_, d)| d)
    }
}

#[inline]
fn wide(pos: GridPos) -> [i64; 2] {
    [pos.x as i64, pos.y as i64]
}
