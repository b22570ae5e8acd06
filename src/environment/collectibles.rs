//! The set of cells that must be collected.

use serde::{Deserialize, Serialize};

use crate::core::Position;
use crate::error::{KhojError, Result};

/// Collectible positions in canonical (sorted, deduplicated) order.
///
/// The order fixes a bit index per collectible, which lets collected
/// subsets be tracked as a `u64` mask.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectibleSet {
    positions: Vec<Position>,
}

impl CollectibleSet {
    /// Maximum number of collectibles (width of the collected mask)
    pub const MAX: usize = 64;

    /// Build a set from positions. Duplicates collapse; order is irrelevant.
    pub fn new(positions: impl IntoIterator<Item = Position>) -> Result<Self> {
        let mut positions: Vec<Position> = positions.into_iter().collect();
        positions.sort_unstable();
        positions.dedup();

        if positions.len() > Self::MAX {
            return Err(KhojError::InvalidConfiguration(format!(
                "{} collectibles exceed the maximum of {}",
                positions.len(),
                Self::MAX
            )));
        }
        Ok(Self { positions })
    }

    /// Empty set
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of collectibles
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if there is nothing to collect
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Bit index of a position, if it is a collectible
    #[inline]
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        self.positions.binary_search(&pos).ok()
    }

    /// Check membership
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        self.index_of(pos).is_some()
    }

    /// Positions in canonical order
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Iterate positions in canonical order
    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.positions.iter()
    }
}
