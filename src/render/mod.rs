//! Renderer collaborator.
//!
//! The search hands every dequeued state to a [`Renderer`] and carries on;
//! nothing a renderer does feeds back into the search.
//!
//! - [`NullRenderer`]: Discards all events
//! - [`AsciiRenderer`]: Draws text frames to any `Write` sink
//! - Any `FnMut(&VisitEvent)` closure

mod ascii;

pub use ascii::AsciiRenderer;

use crate::grid::Grid;
use crate::search::{SearchResult, VisitEvent};

/// Consumer of search events.
pub trait Renderer {
    /// Called once before the first visit with the grid being searched.
    fn on_start(&mut self, _grid: &Grid) {}

    /// Called once per dequeued search state, in breadth-first order.
    fn on_visit(&mut self, event: &VisitEvent);

    /// Called once after the search ends.
    fn on_finish(&mut self, _result: &SearchResult) {}
}

/// Renderer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn on_visit(&mut self, _event: &VisitEvent) {}
}

impl<F> Renderer for F
where
    F: FnMut(&VisitEvent),
{
    fn on_visit(&mut self, event: &VisitEvent) {
        self(event)
    }
}
