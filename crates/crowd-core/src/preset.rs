//! Destination behavior tag and display colour.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// What an agent does once it stands on its destination.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Preset {
    /// Agent stays on the cell and stops issuing moves.
    Hold,
    /// Agent leaves the simulation: it is removed from the grid and from the
    /// live collection at the end of the tick.
    #[default]
    Exit,
}

impl Preset {
    #[inline]
    pub fn is_exit(self) -> bool {
        matches!(self, Preset::Exit)
    }

    /// Label used in configuration documents and CSV output.
    pub fn as_str(self) -> &'static str {
        match self {
            Preset::Hold => "hold",
            Preset::Exit => "exit",
        }
    }
}

impl FromStr for Preset {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "hold" => Ok(Preset::Hold),
            "exit" => Ok(Preset::Exit),
            other  => Err(CoreError::UnknownPreset(other.to_owned())),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display colour of a destination, consumed only by renderers.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Colour given to randomly generated exits.
    pub const NAVY: Rgb = Rgb(0, 0, 128);
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb(r, g, b)
    }
}
