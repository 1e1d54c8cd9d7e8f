#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One addressable grid unit. Origin is the top-left corner; `y` grows
/// downward, matching row-major storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn manhattan(self, other: Cell) -> u32 {
        ((self.x - other.x).abs() + (self.y - other.y).abs()) as u32
    }

    /// Euclidean distance in cell units. Used by detection checks and the
    /// visibility fade; both care about straight-line range, not steps.
    pub fn euclidean(self, other: Cell) -> f32 {
        let dx = (self.x - other.x) as f32;
        let dy = (self.y - other.y) as f32;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Map a cell to world-space coordinates: `cell * tile_size * scale`.
///
/// Pure; the host engine owns the actual transform the other way.
pub fn grid_to_world(cell: Cell, tile_size: f32, scale: f32) -> (f32, f32) {
    (
        cell.x as f32 * tile_size * scale,
        cell.y as f32 * tile_size * scale,
    )
}
