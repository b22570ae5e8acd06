//! Environment generation configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Environment settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnvironmentSection {
    /// Grid side length in cells
    #[serde(default = "defaults::grid_size")]
    pub size: usize,

    /// Number of collectible cells to place
    #[serde(default = "defaults::collectibles")]
    pub collectibles: usize,

    /// Number of obstacle cells to place
    #[serde(default = "defaults::obstacles")]
    pub obstacles: usize,

    /// Grids to sample before giving up on the reachability check
    #[serde(default = "defaults::max_attempts")]
    pub max_attempts: usize,

    /// Fixed RNG seed (random when absent)
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for EnvironmentSection {
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
