//! Map image input and search result output.
//!
//! - [`map_image`]: grayscale PNG/PGM/BMP maps to [`OccupancyGrid`](crate::grid::OccupancyGrid)
//! - [`render`]: explored/path overlays and per-discovery frame snapshots

pub mod map_image;
pub mod render;

pub use map_image::{BLOCKED_VALUE, load_grid, load_luma};
pub use render::{FrameRecorder, Overlay};
