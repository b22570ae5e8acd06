//! Grid position type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Grid position (row, column), 0-indexed from the top-left corner.
///
/// Ordering is row-major, which keeps sorted position lists stable.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Position {
    /// Row index (grows downward)
    pub row: i32,
    /// Column index (grows rightward)
    pub col: i32,
}

impl Position {
    /// Create a new position
    #[inline]
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Top-left corner
    pub const ORIGIN: Position = Position { row: 0, col: 0 };

    /// Manhattan distance to another position
    #[inline]
    pub fn manhattan_distance(&self, other: &Position) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// True when `other` is exactly one orthogonal step away
    #[inline]
    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// Get the 4 orthogonal neighbors in exploration order (up, down, left, right)
    #[inline]
    pub fn neighbors_4(&self) -> [Position; 4] {
        [
            Position::new(self.row - 1, self.col), // Up
            Position::new(self.row + 1, self.col), // Down
            Position::new(self.row, self.col - 1), // Left
            Position::new(self.row, self.col + 1), // Right
        ]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
