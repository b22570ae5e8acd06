//! Start-to-exit reachability check.
//!
//! Existence-only depth-first search over the 4-connected grid. Obstacles
//! block; every other marker, collectibles included, is passable.

use crate::core::Position;
use crate::grid::Grid;

/// Check whether `to` can be reached from `from` without crossing an obstacle.
///
/// Returns false when either endpoint is out of bounds or is itself an obstacle.
pub fn is_reachable(grid: &Grid, from: Position, to: Position) -> bool {
    let (Some(start), Some(_)) = (grid.index_of(from), grid.index_of(to)) else {
        return false;
    };
    if !grid.cells()[start].is_passable() {
        return false;
    }

    let mut visited = vec![false; grid.cell_count()];
    let mut stack = vec![from];

    while let Some(current) = stack.pop() {
        if current == to {
            return true;
        }
        let Some(idx) = grid.index_of(current) else {
            continue;
        };
        if visited[idx] {
            continue;
        }
        visited[idx] = true;

        for neighbor in current.neighbors_4() {
            if let Some(n_idx) = grid.index_of(neighbor)
                && !visited[n_idx]
                && grid.cells()[n_idx].is_passable()
            {
                stack.push(neighbor);
            }
        }
    }

    false
}
