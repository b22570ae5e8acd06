//! Grid storage for the search environment.
//!
//! A fixed-size square matrix of [`CellType`] markers stored row-major in a
//! single contiguous array.

use crate::core::{CellType, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Square grid of cell markers.
///
/// The grid uses a coordinate system where:
/// - (0, 0) is the top-left cell
/// - Rows grow downward, columns grow rightward
/// - Cell (row, col) lives at index `row * size + col`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    /// Cell markers, row-major
    cells: Vec<CellType>,
    /// Side length in cells
    size: usize,
}

impl Grid {
    /// Create an all-empty grid of `size` x `size` cells
    pub fn new(size: usize) -> Self {
        Self {
            cells: vec![CellType::Empty; size * size],
            size,
        }
    }

    /// Parse a grid from rows of marker characters (see [`CellType::as_char`]).
    ///
    /// Returns `None` if the rows are not square or contain unknown characters.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let size = rows.len();
        let mut grid = Self::new(size);
        for (row, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != size {
                return None;
            }
            for (col, ch) in chars.into_iter().enumerate() {
                let cell = match ch {
                    '.' => CellType::Empty,
                    'S' => CellType::Start,
                    'E' => CellType::Exit,
                    'C' => CellType::Collectible,
                    'X' => CellType::Obstacle,
                    _ => return None,
                };
                grid.cells[row * size + col] = cell;
            }
        }
        Some(grid)
    }

    /// Side length in cells
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Raw access to the cell array
    #[inline]
    pub fn cells(&self) -> &[CellType] {
        &self.cells
    }

    /// Check if a position is inside the grid
    #[inline]
    pub fn is_valid(&self, pos: Position) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.size
            && (pos.col as usize) < self.size
    }

    /// Convert a position to a flat array index
    #[inline]
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        if self.is_valid(pos) {
            Some(pos.row as usize * self.size + pos.col as usize)
        } else {
            None
        }
    }

    /// Convert a flat array index to a position
    #[inline]
    pub fn position_of(&self, index: usize) -> Position {
        Position::new((index / self.size) as i32, (index % self.size) as i32)
    }

    /// Get the marker at a position
    #[inline]
    pub fn get(&self, pos: Position) -> Option<CellType> {
        self.index_of(pos).map(|i| self.cells[i])
    }

    /// Set the marker at a position. Returns false when out of bounds.
    #[inline]
    pub fn set(&mut self, pos: Position, cell: CellType) -> bool {
        match self.index_of(pos) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// All positions holding the given marker, in row-major order
    pub fn positions_of(&self, cell: CellType) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == cell)
            .map(|(i, _)| self.position_of(i))
            .collect()
    }

    /// Count cells by marker
    pub fn count_by_type(&self) -> CellCounts {
        let mut counts = CellCounts::default();
        for cell in &self.cells {
            match cell {
                CellType::Empty => counts.empty += 1,
                CellType::Start => counts.start += 1,
                CellType::Exit => counts.exit += 1,
                CellType::Collectible => counts.collectible += 1,
                CellType::Obstacle => counts.obstacle += 1,
            }
        }
        counts
    }

    /// Render the grid as text with a path overlay.
    ///
    /// Path cells that hold no other marker are drawn as `*` and the last
    /// path position (the walker) as `@`.
    pub fn render(&self, path: &[Position]) -> String {
        let mut chars: Vec<char> = self.cells.iter().map(|c| c.as_char()).collect();

        for pos in path {
            if let Some(i) = self.index_of(*pos)
                && self.cells[i] == CellType::Empty
            {
                chars[i] = '*';
            }
        }
        if let Some(i) = path.last().and_then(|p| self.index_of(*p)) {
            chars[i] = '@';
        }

        let mut out = String::with_capacity(self.size * (self.size * 2 + 1));
        for row in chars.chunks(self.size.max(1)) {
            let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(&[]))
    }
}

/// Cell counts by marker
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellCounts {
    /// Empty cells
    pub empty: usize,
    /// Start cells (1 in a generated grid)
    pub start: usize,
    /// Exit cells (1 in a generated grid)
    pub exit: usize,
    /// Collectible cells
    pub collectible: usize,
    /// Obstacle cells
    pub obstacle: usize,
}

impl CellCounts {
    /// Total cells
    pub fn total(&self) -> usize {
        self.empty + self.start + self.exit + self.collectible + self.obstacle
    }
}
