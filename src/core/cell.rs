//! Cell markers for the search grid.
//!
//! Every cell holds exactly one marker. The start and exit cells are fixed
//! at generation time; collectibles and obstacles are scattered between them.

use serde::{Deserialize, Serialize};

/// What occupies a grid cell.
///
/// The marker hierarchy:
/// - `Empty` - Free cell, nothing to pick up
/// - `Start` - Where the walker begins (never re-entered by the search)
/// - `Exit` - Goal cell, passable before all items are collected
/// - `Collectible` - Item that must be picked up before finishing at the exit
/// - `Obstacle` - Static blocker, never traversed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellType {
    /// Free cell
    #[default]
    Empty = 0,

    /// Walker start position
    Start = 1,

    /// Designated exit cell
    Exit = 2,

    /// Item to collect
    Collectible = 3,

    /// Static obstacle
    Obstacle = 4,
}

impl CellType {
    /// Can a walk pass over this cell at all?
    ///
    /// Used by the reachability check, which only cares about obstacles.
    #[inline]
    pub fn is_passable(self) -> bool {
        !matches!(self, CellType::Obstacle)
    }

    /// Can the collect search step onto this cell?
    ///
    /// Only Empty, Collectible and Exit cells are entered; the start cell
    /// is the root of the search and is never stepped back onto.
    #[inline]
    pub fn is_enterable(self) -> bool {
        matches!(
            self,
            CellType::Empty | CellType::Collectible | CellType::Exit
        )
    }

    /// Is this cell free for random placement?
    #[inline]
    pub fn is_free(self) -> bool {
        self == CellType::Empty
    }

    /// Single character representation for debugging
    pub fn as_char(self) -> char {
        match self {
            CellType::Empty => '.',
            CellType::Start => 'S',
            CellType::Exit => 'E',
            CellType::Collectible => 'C',
            CellType::Obstacle => 'X',
        }
    }
}
