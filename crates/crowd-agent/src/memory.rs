//! Bounded "recently visited" memory.

use std::collections::VecDeque;

use crowd_core::GridPos;

/// FIFO of the last few cells an agent moved into.
///
/// Used as a penalty set: the repulsion move scores remembered cells higher
/// and the wall-escape move skips them, which breaks two-cell oscillation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecentPositions {
    cells:    VecDeque<GridPos>,
    capacity: usize,
}

impl RecentPositions {
    pub fn new(capacity: usize) -> Self {
        Self { cells: VecDeque::with_capacity(capacity + 1), capacity }
    }

    /// Remember `pos`, evicting the oldest entry beyond capacity.
    pub fn push(&mut self, pos: GridPos) {
        self.cells.push_back(pos);
        while self.cells.len() > self.capacity {
            self.cells.pop_front();
        }
    }

    #[inline]
    pub fn contains(&self, pos: GridPos) -> bool {
        self.cells.contains(&pos)
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = GridPos> + '_ {
        self.cells.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
