//! 2D grid coordinates for fabric layout structures.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A coordinate in the 2D fabric grid.
///
/// The fabric is laid out as a regular grid of tiles; `x` counts columns
/// (left to right) and `y` counts rows (bottom to top). Coordinates are
/// also used for the sub-block positions aggregated into each tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// Column index in the grid (0-based).
    pub x: usize,
    /// Row index in the grid (0-based).
    pub y: usize,
}

impl GridCoord {
    /// Creates a coordinate from its column and row indices.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
