//! Search grid.
//!
//! - [`Grid`]: Fixed square matrix of cell markers with bounds checks and text rendering
//! - [`CellCounts`]: Per-marker cell tallies

mod storage;

pub use storage::{CellCounts, Grid};
