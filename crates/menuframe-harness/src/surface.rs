//! Recording render surface.

use std::fmt;

use menuframe_core::{Image, Point, RenderSurface, Size};

use crate::metrics::Bitmap;

/// One recorded draw.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    /// Frame the draw happened in.
    pub frame: u64,
    /// Label of the drawn image.
    pub label: String,
    /// Top-left corner.
    pub position: Point,
    /// Image size.
    pub size: Size,
}

impl fmt::Display for DrawCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "frame {}: {:?} at {} size {}x{}",
            self.frame, self.label, self.position, self.size.width, self.size.height
        )
    }
}

/// [`RenderSurface`] that records every draw instead of rasterizing.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    frame: u64,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start recording a new frame.
    pub fn begin_frame(&mut self) {
        self.frame += 1;
    }

    /// Current frame number. Zero before the first frame.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Every recorded draw, oldest first.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Draws of the current frame.
    pub fn last_frame(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls.iter().filter(|call| call.frame == self.frame)
    }

    /// One line per draw, for snapshot tests.
    pub fn log(&self) -> String {
        self.calls.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
    }

    /// Drop the recorded draws, keeping the frame counter.
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl RenderSurface<Bitmap> for RecordingSurface {
    fn draw(&mut self, image: &Bitmap, position: Point) {
        self.calls.push(DrawCall {
            frame: self.frame,
            label: image.label().to_owned(),
            position,
            size: image.size(),
        });
    }
}
