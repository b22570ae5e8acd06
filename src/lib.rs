//! # VastuKhoj
//!
//! Collect-all-then-exit search on small generated grids.
//!
//! ## Overview
//!
//! A walker starts in the top-left corner of a square grid and must reach the
//! exit in the bottom-right corner, stepping on every collectible cell first.
//! Obstacles are static and never entered. Cells hold one marker each:
//!
//! - **Empty** - Free cell
//! - **Start** - Walker start, (0, 0)
//! - **Exit** - Goal cell, (size-1, size-1)
//! - **Collectible** - Must be visited before finishing
//! - **Obstacle** - Impassable
//!
//! ## Pipeline
//!
//! ```text
//!   EnvironmentConfig
//!          │ validate()
//!          ▼
//!   EnvironmentGenerator ──► random placement ──► is_reachable()? ──no──┐
//!          │                        ▲                                     │
//!          │                        └──── retry (up to max_attempts) ─────┘
//!          ▼ yes
//!     Environment (Grid, start, exit, CollectibleSet)
//!          │
//!          ▼
//!     CollectSearch ──► SearchSteps (VisitEvent per state) ──► Renderer
//!          │
//!          ▼
//!     SearchResult (path, collected count)
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vastu_khoj::{CollectSearch, EnvironmentConfig, EnvironmentGenerator};
//!
//! let generator = EnvironmentGenerator::new(EnvironmentConfig::default())?;
//! let env = generator.generate()?;
//!
//! let result = CollectSearch::for_environment(&env).find_path();
//! if result.success {
//!     println!("Path found: {:?}", result.path);
//! }
//! # Ok::<(), vastu_khoj::KhojError>(())
//! ```

pub mod config;
pub mod core;
pub mod environment;
pub mod error;
pub mod grid;
pub mod pipeline;
pub mod render;
pub mod search;

// Re-export main types at crate root
pub use config::{ConfigLoadError, KhojConfig};
pub use crate::core::{CellType, Position};
pub use environment::{
    CollectibleSet, Environment, EnvironmentConfig, EnvironmentGenerator, is_reachable,
};
pub use error::{KhojError, Result};
pub use grid::{CellCounts, Grid};
pub use pipeline::{Episode, run_episode};
pub use render::{AsciiRenderer, NullRenderer, Renderer};
pub use search::{
    CollectSearch, CollectedMask, SearchFailure, SearchResult, SearchSteps, VisitEvent, search,
};
