//! Occupancy grids from grayscale map images.
//!
//! Each pixel is one cell: pixel `(x, y)` maps to [`Cell::new(x, y)`](Cell).
//! Pixels whose intensity matches [`MapSection::free_value`] (within
//! `tolerance`) are free; every other intensity is blocked.

use std::path::Path;

use image::{GrayImage, Luma};
use log::{debug, info};

use crate::config::MapSection;
use crate::core::Cell;
use crate::error::{Error, Result};
use crate::grid::{CellState, GridOracle, OccupancyGrid};

/// Intensity written for blocked cells by [`OccupancyGrid::to_luma`]
pub const BLOCKED_VALUE: u8 = 0;

/// Load a map image as 8-bit grayscale
pub fn load_luma<P: AsRef<Path>>(path: P) -> Result<GrayImage> {
    let path = path.as_ref();
    let image = image::open(path)?.into_luma8();
    debug!(
        "Loaded map image {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Load a map image and classify its pixels into an occupancy grid
pub fn load_grid<P: AsRef<Path>>(path: P, map: &MapSection) -> Result<OccupancyGrid> {
    let image = load_luma(path)?;
    let grid = OccupancyGrid::from_luma(&image, map)?;
    info!(
        "Map {}x{}: {} traversable cells",
        grid.width(),
        grid.height(),
        grid.free_count()
    );
    Ok(grid)
}

impl OccupancyGrid {
    /// Classify each pixel of a grayscale image.
    pub fn from_luma(image: &GrayImage, map: &MapSection) -> Result<Self> {
        let cells = image
            .pixels()
            .map(|Luma([intensity])| {
                if map.is_free(*intensity) {
                    CellState::Free
                } else {
                    CellState::Blocked
                }
            })
            .collect();
        Self::from_cells(image.width() as usize, image.height() as usize, cells)
    }

    /// Render the grid as a grayscale image: free cells use `free_value`,
    /// blocked cells [`BLOCKED_VALUE`].
    pub fn to_luma(&self, map: &MapSection) -> Result<GrayImage> {
        let (width, height) = self.dimensions();
        let width = u32::try_from(width)
            .map_err(|_| Error::InvalidMap(format!("width {} too large for an image", width)))?;
        let height = u32::try_from(height)
            .map_err(|_| Error::InvalidMap(format!("height {} too large for an image", height)))?;

        Ok(GrayImage::from_fn(width, height, |x, y| {
            let free = self.is_traversable(Cell::new(x as i32, y as i32));
            Luma([if free { map.free_value } else { BLOCKED_VALUE }])
        }))
    }
}
