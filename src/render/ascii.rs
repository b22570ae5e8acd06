//! Text frame renderer.

use std::io::Write;
use std::time::Duration;

use log::warn;

use crate::core::Position;
use crate::grid::Grid;
use crate::search::{SearchResult, VisitEvent};

use super::Renderer;

/// Draws one text frame per search event.
///
/// ```text
/// step 7 | (1, 2) | collected 1/3
/// S * * C .
/// . X @ . .
/// ...
/// ```
///
/// The grid is captured when the search starts. Write failures are logged
/// and otherwise ignored.
pub struct AsciiRenderer<W: Write> {
    grid: Option<Grid>,
    out: W,
    frame_delay: Duration,
    show_visits: bool,
    show_final: bool,
    frames: usize,
}

impl<W: Write> AsciiRenderer<W> {
    /// Create a renderer drawing every visit and the final path, without pausing
    pub fn new(out: W) -> Self {
        Self {
            grid: None,
            out,
            frame_delay: Duration::ZERO,
            show_visits: true,
            show_final: true,
            frames: 0,
        }
    }

    /// Pause after each visit frame
    pub fn with_frame_delay(mut self, delay: Duration) -> Self {
        self.frame_delay = delay;
        self
    }

    /// Enable or disable per-visit frames
    pub fn with_visits(mut self, enabled: bool) -> Self {
        self.show_visits = enabled;
        self
    }

    /// Enable or disable the final frame
    pub fn with_final(mut self, enabled: bool) -> Self {
        self.show_final = enabled;
        self
    }

    /// Number of frames written so far
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Consume the renderer and return the sink
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self, header: &str, path: &[Position]) {
        let body = match &self.grid {
            Some(grid) => grid.render(path),
            None => String::new(),
        };
        if let Err(e) = writeln!(self.out, "{}\n{}", header, body) {
            warn!("[Render] frame write failed: {}", e);
            return;
        }
        self.frames += 1;
    }
}

impl<W: Write> Renderer for AsciiRenderer<W> {
    fn on_start(&mut self, grid: &Grid) {
        self.grid = Some(grid.clone());
    }

    fn on_visit(&mut self, event: &VisitEvent) {
        if !self.show_visits {
            return;
        }
        let header = format!(
            "step {} | {} | collected {}/{}",
            event.depth, event.position, event.collected, event.total
        );
        self.write_frame(&header, &event.path);
        if !self.frame_delay.is_zero() {
            std::thread::sleep(self.frame_delay);
        }
    }

    fn on_finish(&mut self, result: &SearchResult) {
        if !self.show_final {
            return;
        }
        let header = if result.success {
            format!(
                "done | {} steps | collected {}/{}",
                result.steps(),
                result.collected,
                result.total
            )
        } else {
            format!("done | no path | collected {}/{}", result.collected, result.total)
        };
        self.write_frame(&header, &result.path);
        if let Err(e) = self.out.flush() {
            warn!("[Render] flush failed: {}", e);
        }
    }
}
