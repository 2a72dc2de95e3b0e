//! Search result rendering.
//!
//! [`Overlay`] paints explored and path cells on top of the source map.
//! [`FrameRecorder`] does the same incrementally from the search's discovery
//! callback and writes numbered snapshots as the search progresses.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use image::{GrayImage, Luma};
use log::{debug, warn};

use crate::config::RenderSection;
use crate::core::Cell;
use crate::error::Result;
use crate::pathfinding::SearchOutcome;

/// Grayscale map with search results painted on it.
#[derive(Clone, Debug)]
pub struct Overlay {
    image: GrayImage,
    render: RenderSection,
}

impl Overlay {
    /// Start from a copy of the map image
    pub fn new(base: &GrayImage, render: RenderSection) -> Self {
        Self {
            image: base.clone(),
            render,
        }
    }

    /// Paint one cell; cells outside the image are ignored
    pub fn paint(&mut self, cell: Cell, value: u8) {
        let (Ok(x), Ok(y)) = (u32::try_from(cell.x), u32::try_from(cell.y)) else {
            return;
        };
        if x < self.image.width() && y < self.image.height() {
            self.image.put_pixel(x, y, Luma([value]));
        }
    }

    /// Paint a cell as explored
    pub fn paint_explored(&mut self, cell: Cell) {
        self.paint(cell, self.render.explored_value);
    }

    /// Paint explored cells, then the path over them
    pub fn draw_outcome(&mut self, outcome: &SearchOutcome) {
        for &cell in outcome.explored() {
            self.paint_explored(cell);
        }
        for &cell in outcome.path() {
            self.paint(cell, self.render.path_value);
        }
    }

    /// Rendered image
    pub fn image(&self) -> &GrayImage {
        &self.image
    }

    /// Save the rendered image; format follows the file extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.image.save(path)?;
        debug!("Saved overlay {}", path.display());
        Ok(())
    }
}

/// Discovery observer that writes a snapshot every `frame_every` discoveries.
///
/// With `frame_every: 0` recording is disabled: no frame is written, not even
/// the final one from [`FrameRecorder::finish`].
///
/// The search callback cannot fail, so the first write error is held and
/// returned from [`FrameRecorder::finish`]; no frames are written after it.
pub struct FrameRecorder {
    overlay: Overlay,
    dir: PathBuf,
    every: Option<NonZeroUsize>,
    discovered: usize,
    frames: usize,
    error: Option<image::ImageError>,
}

impl FrameRecorder {
    /// Create the output directory and an empty recorder.
    pub fn new<P: Into<PathBuf>>(base: &GrayImage, render: RenderSection, dir: P) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self {
            overlay: Overlay::new(base, render),
            dir,
            every: NonZeroUsize::new(render.frame_every),
            discovered: 0,
            frames: 0,
            error: None,
        })
    }

    /// Record one discovered cell (the search's `on_expand` callback)
    pub fn observe(&mut self, cell: Cell, _cost: f32) {
        self.overlay.paint_explored(cell);
        self.discovered += 1;
        if let Some(every) = self.every {
            if self.discovered % every.get() == 0 {
                self.write_frame();
            }
        }
    }

    /// Are frames being written at all?
    pub fn is_enabled(&self) -> bool {
        self.every.is_some()
    }

    /// Number of discoveries observed
    pub fn discovered(&self) -> usize {
        self.discovered
    }

    /// Number of frames written so far
    pub fn frames_written(&self) -> usize {
        self.frames
    }

    /// Path of the n-th frame
    pub fn frame_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{:06}.png", index))
    }

    fn write_frame(&mut self) {
        if self.error.is_some() {
            return;
        }
        let path = self.frame_path(self.frames);
        match self.overlay.image().save(&path) {
            Ok(()) => self.frames += 1,
            Err(e) => {
                warn!("Frame {} not written: {}", path.display(), e);
                self.error = Some(e);
            }
        }
    }

    /// Paint the final path, write the last frame, and return frames written.
    ///
    /// A disabled recorder writes nothing and returns `Ok(0)`.
    pub fn finish(mut self, outcome: &SearchOutcome) -> Result<usize> {
        if self.every.is_none() {
            return Ok(0);
        }
        for &cell in outcome.path() {
            self.overlay.paint(cell, self.overlay.render.path_value);
        }
        self.write_frame();
        match self.error {
            Some(e) => Err(e.into()),
            None => Ok(self.frames),
        }
    }
}
