//! Result rendering section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Overlay colors and frame snapshot settings
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSection {
    /// Intensity painted on explored cells
    #[serde(default = "defaults::explored_value")]
    pub explored_value: u8,

    /// Intensity painted on path cells
    #[serde(default)]
    pub path_value: u8,

    /// Write a frame every N discoveries (0 = no frames)
    #[serde(default)]
    pub frame_every: usize,
}

impl Default for RenderSection {
    fn default() -> Self {
        Self {
            explored_value: defaults::explored_value(),
            path_value: 0,
            frame_every: 0,
        }
    }
}
