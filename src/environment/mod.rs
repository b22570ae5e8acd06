//! Environment generation.
//!
//! Produces the immutable grid the search runs on:
//!
//! - [`EnvironmentGenerator`]: Random placement with a bounded retry loop
//! - [`is_reachable`]: Obstacle-only reachability check used to validate grids
//! - [`CollectibleSet`]: Canonical list of cells that must be collected
//!
//! ```rust,no_run
//! use vastu_khoj::environment::{EnvironmentConfig, EnvironmentGenerator};
//!
//! let generator = EnvironmentGenerator::new(EnvironmentConfig::default().with_seed(7))?;
//! let env = generator.generate()?;
//! println!("{}", env.grid);
//! # Ok::<(), vastu_khoj::KhojError>(())
//! ```

mod collectibles;
mod config;
mod generator;
mod reachability;

pub use collectibles::CollectibleSet;
pub use config::{EnvironmentConfig, MAX_GRID_SIZE};
pub use generator::{Environment, EnvironmentGenerator};
pub use reachability::is_reachable;
