//! Destinations agents walk toward.

use crowd_core::{DestinationId, GridPos, Preset, Rgb};

/// A target cell with its arrival behavior.
///
/// Destinations are owned by the model and never change after setup.  They
/// do not occupy their cell: agents walk onto it.  Agents refer to them by
/// [`DestinationId`], so any number of agents can share one.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Destination {
    pub id:     DestinationId,
    pub pos:    GridPos,
    pub preset: Preset,
    pub color:  Rgb,
}

impl Destination {
    pub fn new(id: DestinationId, pos: GridPos, preset: Preset, color: Rgb) -> Self {
        Self { id, pos, preset, color }
    }

    /// `true` if an agent at `pos` has arrived (Manhattan distance below 1).
    #[inline]
    pub fn is_reached_from(&self, pos: GridPos) -> bool {
        pos.manhattan(self.pos) < 1
    }
}
