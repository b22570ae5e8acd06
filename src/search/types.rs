//! Search event and result types.

use serde::Serialize;

use crate::core::Position;

use super::mask::CollectedMask;

/// A node in the append-only search arena.
///
/// Each frontier entry is an index into the arena; the path of a branch is
/// recovered by following `parent` links, so branches never share mutable state.
#[derive(Clone, Copy, Debug)]
pub(super) struct SearchNode {
    pub position: Position,
    pub mask: CollectedMask,
    pub parent: Option<usize>,
    pub depth: usize,
}

/// One dequeued search state, as seen by a renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VisitEvent {
    /// Position of the dequeued state
    pub position: Position,
    /// Partial path of this branch, start first, ending at `position`
    pub path: Vec<Position>,
    /// Items collected on this branch so far (including `position`)
    pub collected: usize,
    /// Items to collect in total
    pub total: usize,
    /// Steps taken from the start
    pub depth: usize,
    /// This state satisfies the goal; it is the last event of the search
    pub goal_reached: bool,
}

/// Result of the collect search
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Start-to-exit path (empty if no path found)
    pub path: Vec<Position>,
    /// Items collected by the last dequeued state
    pub collected: usize,
    /// Items to collect in total
    pub total: usize,
    /// Number of states dequeued during search
    pub states_expanded: usize,
    /// Whether a path was found
    pub success: bool,
    /// Reason for failure (if any)
    pub failure_reason: Option<SearchFailure>,
}

impl SearchResult {
    /// Create a failed result
    pub(super) fn failed(
        reason: SearchFailure,
        collected: usize,
        total: usize,
        states_expanded: usize,
    ) -> Self {
        Self {
            path: Vec::new(),
            collected,
            total,
            states_expanded,
            success: false,
            failure_reason: Some(reason),
        }
    }

    /// Check if no path was found
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Path length in cells
    pub fn length_cells(&self) -> usize {
        self.path.len()
    }

    /// Number of moves along the path
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Reason for search failure
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SearchFailure {
    /// Start or exit is out of bounds
    OutOfBounds,
    /// Every reachable (position, collected) state was explored without reaching the goal
    Exhausted,
}
