//! Environment generation parameters.

use serde::{Deserialize, Serialize};

use crate::error::{KhojError, Result};

use super::CollectibleSet;

/// Largest supported grid side length
pub const MAX_GRID_SIZE: usize = 32;

/// Environment generator configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    /// Grid side length in cells (2..=MAX_GRID_SIZE)
    pub size: usize,
    /// Number of collectible cells
    pub collectibles: usize,
    /// Number of obstacle cells
    pub obstacles: usize,
    /// Grids to sample before reporting `GenerationFailed`
    pub max_attempts: usize,
    /// Fixed RNG seed for reproducible environments
    pub seed: Option<u64>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            size: 5,
            collectibles: 3,
            obstacles: 5,
            max_attempts: 1000,
            seed: None,
        }
    }
}

impl EnvironmentConfig {
    /// Create a configuration with the given counts and default retry policy
    pub fn new(size: usize, collectibles: usize, obstacles: usize) -> Self {
        Self {
            size,
            collectibles,
            obstacles,
            ..Default::default()
        }
    }

    /// Use a fixed seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Override the retry cap
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Cells left for collectibles and obstacles once start and exit are placed
    pub fn free_cells(&self) -> usize {
        self.size.saturating_mul(self.size).saturating_sub(2)
    }

    /// Reject parameters that cannot describe a valid environment.
    pub fn validate(&self) -> Result<()> {
        if self.size < 2 {
            return Err(KhojError::InvalidConfiguration(format!(
                "grid size {} is below the minimum of 2",
                self.size
            )));
        }
        if self.size > MAX_GRID_SIZE {
            return Err(KhojError::InvalidConfiguration(format!(
                "grid size {} exceeds the maximum of {}",
                self.size, MAX_GRID_SIZE
            )));
        }
        if self.collectibles > CollectibleSet::MAX {
            return Err(KhojError::InvalidConfiguration(format!(
                "{} collectibles exceed the maximum of {}",
                self.collectibles,
                CollectibleSet::MAX
            )));
        }
        let fits = self
            .collectibles
            .checked_add(self.obstacles)
            .is_some_and(|requested| requested <= self.free_cells());
        if !fits {
            return Err(KhojError::InvalidConfiguration(format!(
                "{} collectibles and {} obstacles do not fit in {} free cells",
                self.collectibles,
                self.obstacles,
                self.free_cells()
            )));
        }
        if self.max_attempts == 0 {
            return Err(KhojError::InvalidConfiguration(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
