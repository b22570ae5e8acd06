//! Renderer configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Render settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RenderSection {
    /// Draw one frame per visited search state
    #[serde(default = "defaults::enabled")]
    pub enabled: bool,

    /// Pause between frames (milliseconds, 0 = no pause)
    #[serde(default = "defaults::frame_delay_ms")]
    pub frame_delay_ms: u64,

    /// Draw the final path once the search ends
    #[serde(default = "defaults::enabled")]
    pub show_final: bool,
}

impl Default for RenderSection {
    fn default() -> Self {
        Self {
            enabled: true,
            frame_delay_ms: 500,
            show_final: true,
        }
    }
}
