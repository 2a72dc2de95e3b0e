//! Map image interpretation section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// How map image pixels translate to free and blocked cells
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapSection {
    /// Intensity of traversable pixels (boundary and unexplored pixels use other values)
    #[serde(default = "defaults::free_value")]
    pub free_value: u8,

    /// Maximum intensity difference from `free_value` still treated as free
    #[serde(default)]
    pub tolerance: u8,
}

impl Default for MapSection {
    fn default() -> Self {
        Self {
            free_value: defaults::free_value(),
            tolerance: 0,
        }
    }
}

impl MapSection {
    /// Is a pixel of this intensity traversable?
    #[inline]
    pub fn is_free(&self, intensity: u8) -> bool {
        intensity.abs_diff(self.free_value) <= self.tolerance
    }
}
