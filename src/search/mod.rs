//! Augmented-state search.
//!
//! Breadth-first search over (position, collected-set) pairs. A plain
//! shortest path would stop at the first arrival on the exit; keying the
//! visited set on the collected subset as well lets the search walk past the
//! exit, gather the remaining collectibles and come back.
//!
//! ```rust,ignore
//! use vastu_khoj::search::CollectSearch;
//!
//! let search = CollectSearch::for_environment(&env);
//!
//! // Step through states one at a time
//! for event in search.steps() {
//!     println!("{} ({}/{})", event.position, event.collected, event.total);
//! }
//!
//! // Or run straight to the result
//! let result = search.find_path();
//! if result.success {
//!     println!("Path found with {} steps", result.steps());
//! }
//! ```

mod mask;
mod planner;
mod types;

pub use mask::CollectedMask;
pub use planner::{CollectSearch, SearchSteps};
pub use types::{SearchFailure, SearchResult, VisitEvent};

use crate::core::Position;
use crate::environment::CollectibleSet;
use crate::grid::Grid;

/// Quick collect search without rendering.
///
/// The returned path is empty when no walk collects everything and ends on `exit`.
pub fn search(
    grid: &Grid,
    start: Position,
    exit: Position,
    collectibles: &CollectibleSet,
) -> SearchResult {
    CollectSearch::new(grid, start, exit, collectibles).find_path()
}
