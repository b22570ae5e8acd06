//! Core types for the grid search.
//!
//! ## Coordinates
//! - [`Position`]: (row, column) cell index, row 0 at the top
//!
//! ## Grid Cells
//! - [`CellType`]: Cell marker (Empty, Start, Exit, Collectible, Obstacle)

mod cell;
mod point;

pub use cell::CellType;
pub use point::Position;
