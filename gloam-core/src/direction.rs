#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Cell, DeterministicRng};

/// Cardinal movement/facing direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn step(self, from: Cell) -> Cell {
        let (dx, dy) = self.delta();
        from.offset(dx, dy)
    }

    /// Uniform draw over the three directions other than `exclude`.
    pub fn random_excluding(rng: &mut impl DeterministicRng, exclude: Direction) -> Direction {
        let remaining: Vec<Direction> = Self::ALL.into_iter().filter(|d| *d != exclude).collect();
        remaining[rng.next_range(remaining.len() as u32) as usize]
    }
}
