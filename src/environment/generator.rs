//! Random environment generation.
//!
//! Start and exit sit in opposite corners. Collectibles and obstacles are
//! dropped on empty cells by rejection sampling, and a grid is only kept
//! if the exit is reachable from the start around the obstacles. Failing
//! grids are discarded whole and resampled, up to a fixed attempt cap.

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::core::{CellType, Position};
use crate::error::{KhojError, Result};
use crate::grid::Grid;

use super::config::EnvironmentConfig;
use super::reachability::is_reachable;
use super::CollectibleSet;

/// A generated search environment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// Immutable cell markers
    pub grid: Grid,
    /// Start cell, always (0, 0)
    pub start: Position,
    /// Exit cell, always (size-1, size-1)
    pub exit: Position,
    /// Cells holding collectibles
    pub collectibles: CollectibleSet,
    /// Number of grids sampled, including the accepted one
    pub attempts: usize,
}

impl Environment {
    /// Wrap a hand-built grid. Start, exit and collectibles are read from its markers.
    ///
    /// Returns `InvalidConfiguration` unless the grid holds exactly one start and one exit.
    pub fn from_grid(grid: Grid) -> Result<Self> {
        let starts = grid.positions_of(CellType::Start);
        let exits = grid.positions_of(CellType::Exit);
        if starts.len() != 1 || exits.len() != 1 {
            return Err(KhojError::InvalidConfiguration(format!(
                "grid needs exactly one start and one exit (found {} and {})",
                starts.len(),
                exits.len()
            )));
        }
        let collectibles = CollectibleSet::new(grid.positions_of(CellType::Collectible))?;
        Ok(Self {
            start: starts[0],
            exit: exits[0],
            grid,
            collectibles,
            attempts: 1,
        })
    }
}

/// Environment generator with bounded retries.
pub struct EnvironmentGenerator {
    config: EnvironmentConfig,
}

impl EnvironmentGenerator {
    /// Create a generator, rejecting invalid parameters up front.
    pub fn new(config: EnvironmentConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create with default configuration (5x5, 3 collectibles, 5 obstacles)
    pub fn with_defaults() -> Self {
        Self {
            config: EnvironmentConfig::default(),
        }
    }

    /// Generate using the configured seed, or the thread RNG when none is set.
    pub fn generate(&self) -> Result<Environment> {
        match self.config.seed {
            Some(seed) => self.generate_with_rng(&mut StdRng::seed_from_u64(seed)),
            None => self.generate_with_rng(&mut rand::rng()),
        }
    }

    /// Generate using the given RNG.
    ///
    /// Returns `GenerationFailed` when `max_attempts` grids in a row fail the
    /// reachability check.
    pub fn generate_with_rng<R: Rng>(&self, rng: &mut R) -> Result<Environment> {
        let size = self.config.size;
        let start = Position::ORIGIN;
        let exit = Position::new(size as i32 - 1, size as i32 - 1);

        for attempt in 1..=self.config.max_attempts {
            let mut grid = Grid::new(size);
            grid.set(start, CellType::Start);
            grid.set(exit, CellType::Exit);

            let collectibles =
                place_random(&mut grid, CellType::Collectible, self.config.collectibles, rng);
            place_random(&mut grid, CellType::Obstacle, self.config.obstacles, rng);

            if !is_reachable(&grid, start, exit) {
                debug!(
                    "[Generator] attempt {}: exit unreachable, discarding grid",
                    attempt
                );
                continue;
            }

            info!(
                "[Generator] {}x{} grid ready after {} attempt(s): {} collectibles, {} obstacles",
                size, size, attempt, self.config.collectibles, self.config.obstacles
            );
            trace!("[Generator] grid:\n{}", grid);

            return Ok(Environment {
                grid,
                start,
                exit,
                collectibles: CollectibleSet::new(collectibles)?,
                attempts: attempt,
            });
        }

        debug!(
            "[Generator] FAILED: no reachable grid in {} attempts",
            self.config.max_attempts
        );
        Err(KhojError::GenerationFailed {
            attempts: self.config.max_attempts,
        })
    }
}

/// Drop `count` markers on distinct empty cells, resampling occupied picks.
///
/// Callers guarantee at least `count` empty cells remain.
fn place_random<R: Rng>(
    grid: &mut Grid,
    cell: CellType,
    count: usize,
    rng: &mut R,
) -> Vec<Position> {
    let size = grid.size() as i32;
    let mut placed = Vec::with_capacity(count);

    while placed.len() < count {
        let pos = Position::new(rng.random_range(0..size), rng.random_range(0..size));
        if grid.get(pos).is_some_and(CellType::is_free) {
            grid.set(pos, cell);
            placed.push(pos);
        }
    }

    placed
}
