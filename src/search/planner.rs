//! Collect search implementation.

use crate::core::{CellType, Position};
use crate::environment::{CollectibleSet, Environment};
use crate::grid::Grid;
use crate::render::{NullRenderer, Renderer};
use log::{debug, trace};
use std::collections::{HashSet, VecDeque};

use super::mask::CollectedMask;
use super::types::{SearchFailure, SearchNode, SearchResult, VisitEvent};

/// Breadth-first search over (position, collected-set) states.
///
/// Finds a shortest walk from `start` that ends on `exit` after stepping on
/// every collectible at least once. Moves are orthogonal with unit cost and
/// ties are broken by neighbor order (up, down, left, right).
pub struct CollectSearch<'a> {
    grid: &'a Grid,
    start: Position,
    exit: Position,
    collectibles: &'a CollectibleSet,
}

impl<'a> CollectSearch<'a> {
    /// Create a new collect search over a read-only grid
    pub fn new(
        grid: &'a Grid,
        start: Position,
        exit: Position,
        collectibles: &'a CollectibleSet,
    ) -> Self {
        Self {
            grid,
            start,
            exit,
            collectibles,
        }
    }

    /// Create a search for a generated environment
    pub fn for_environment(env: &'a Environment) -> Self {
        Self::new(&env.grid, env.start, env.exit, &env.collectibles)
    }

    /// Lazily step through the search, one event per dequeued state.
    ///
    /// Each call starts a fresh search.
    pub fn steps(&self) -> SearchSteps<'a> {
        SearchSteps::new(self.grid, self.start, self.exit, self.collectibles)
    }

    /// Run to completion, feeding every visit to `renderer`
    pub fn run<R: Renderer + ?Sized>(&self, renderer: &mut R) -> SearchResult {
        renderer.on_start(self.grid);
        let mut steps = self.steps();
        for event in steps.by_ref() {
            renderer.on_visit(&event);
        }
        let result = steps.finish();
        renderer.on_finish(&result);
        result
    }

    /// Run to completion without rendering
    pub fn find_path(&self) -> SearchResult {
        self.run(&mut NullRenderer)
    }
}

/// Lazy, finite iterator over the visit events of one search run.
///
/// The frontier holds indices into an append-only node arena. Once the goal
/// is dequeued or the frontier runs dry the iterator ends and
/// [`SearchSteps::result`] reports the outcome.
pub struct SearchSteps<'a> {
    grid: &'a Grid,
    exit: Position,
    collectibles: &'a CollectibleSet,

    arena: Vec<SearchNode>,
    frontier: VecDeque<usize>,
    visited: HashSet<(Position, CollectedMask)>,

    states_expanded: usize,
    last_collected: usize,
    result: Option<SearchResult>,
}

impl<'a> SearchSteps<'a> {
    fn new(
        grid: &'a Grid,
        start: Position,
        exit: Position,
        collectibles: &'a CollectibleSet,
    ) -> Self {
        trace!(
            "[Search] start={} exit={} collectibles={}",
            start,
            exit,
            collectibles.len()
        );

        let mut steps = Self {
            grid,
            exit,
            collectibles,
            arena: Vec::new(),
            frontier: VecDeque::new(),
            visited: HashSet::new(),
            states_expanded: 0,
            last_collected: 0,
            result: None,
        };

        let Some(start_cell) = grid.get(start).filter(|_| grid.is_valid(exit)) else {
            debug!("[Search] FAILED: OutOfBounds - start or exit outside grid");
            steps.result = Some(SearchResult::failed(
                SearchFailure::OutOfBounds,
                0,
                collectibles.len(),
                0,
            ));
            return steps;
        };

        let mask = steps.collect_at(start, start_cell, CollectedMask::EMPTY);
        steps.visited.insert((start, mask));
        steps.arena.push(SearchNode {
            position: start,
            mask,
            parent: None,
            depth: 0,
        });
        steps.frontier.push_back(0);
        steps
    }

    /// Outcome of the search, once the iterator has finished
    pub fn result(&self) -> Option<&SearchResult> {
        self.result.as_ref()
    }

    /// Drain the remaining events and return the outcome
    pub fn finish(mut self) -> SearchResult {
        while self.next().is_some() {}
        let (collected, total, expanded) = (
            self.last_collected,
            self.collectibles.len(),
            self.states_expanded,
        );
        self.result.take().unwrap_or_else(|| {
            SearchResult::failed(SearchFailure::Exhausted, collected, total, expanded)
        })
    }

    /// Mask after stepping onto `pos`
    #[inline]
    fn collect_at(&self, pos: Position, cell: CellType, mask: CollectedMask) -> CollectedMask {
        if cell != CellType::Collectible {
            return mask;
        }
        match self.collectibles.index_of(pos) {
            Some(index) => mask.with(index),
            None => mask,
        }
    }

    /// Rebuild the path ending at arena node `idx`
    fn path_to(&self, idx: usize) -> Vec<Position> {
        let mut path = Vec::with_capacity(self.arena[idx].depth + 1);
        let mut current = Some(idx);
        while let Some(i) = current {
            let node = &self.arena[i];
            path.push(node.position);
            current = node.parent;
        }
        path.reverse();
        path
    }

    /// Push every unvisited enterable neighbor of arena node `idx`
    fn expand(&mut self, idx: usize) {
        let node = self.arena[idx];

        for neighbor in node.position.neighbors_4() {
            let Some(cell) = self.grid.get(neighbor) else {
                continue;
            };
            if !cell.is_enterable() {
                continue;
            }

            let mask = self.collect_at(neighbor, cell, node.mask);
            if !self.visited.insert((neighbor, mask)) {
                continue;
            }

            self.arena.push(SearchNode {
                position: neighbor,
                mask,
                parent: Some(idx),
                depth: node.depth + 1,
            });
            self.frontier.push_back(self.arena.len() - 1);
        }
    }
}

impl Iterator for SearchSteps<'_> {
    type Item = VisitEvent;

    fn next(&mut self) -> Option<VisitEvent> {
        if self.result.is_some() {
            return None;
        }

        let Some(idx) = self.frontier.pop_front() else {
            debug!(
                "[Search] FAILED: Exhausted after expanding {} states",
                self.states_expanded
            );
            self.result = Some(SearchResult::failed(
                SearchFailure::Exhausted,
                self.last_collected,
                self.collectibles.len(),
                self.states_expanded,
            ));
            return None;
        };

        self.states_expanded += 1;
        let node = self.arena[idx];
        let path = self.path_to(idx);
        let collected = node.mask.count();
        self.last_collected = collected;

        let goal_reached =
            node.position == self.exit && node.mask.is_complete(self.collectibles.len());
        if goal_reached {
            debug!(
                "[Search] SUCCESS: {} steps, {} collected, {} states expanded",
                node.depth, collected, self.states_expanded
            );
            self.result = Some(SearchResult {
                path: path.clone(),
                collected,
                total: self.collectibles.len(),
                states_expanded: self.states_expanded,
                success: true,
                failure_reason: None,
            });
        } else {
            self.expand(idx);
        }

        Some(VisitEvent {
            position: node.position,
            path,
            collected,
            total: self.collectibles.len(),
            depth: node.depth,
            goal_reached,
        })
    }
}
