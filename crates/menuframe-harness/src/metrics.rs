//! Fixed-metric text rendering.
//!
//! [`FixedMetrics`] renders every glyph as a solid block of the face's glyph
//! width, so image sizes are exact and predictable in tests: `"abcd"` in a
//! 10 px face is 40 px wide.

use std::iter;

use menuframe_core::{ContentFactory, Image, Size};

/// A monospace face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    /// Width of every glyph in pixels.
    pub glyph_width: u16,
    /// Height of a line in pixels.
    pub line_height: u16,
}

impl Face {
    /// Create a face.
    pub const fn new(glyph_width: u16, line_height: u16) -> Self {
        Self { glyph_width, line_height }
    }
}

impl Default for Face {
    fn default() -> Self {
        Self::new(10, 20)
    }
}

/// 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// White.
    pub const WHITE: Self = Self(255, 255, 255);
    /// Yellow, used for highlighted options.
    pub const YELLOW: Self = Self(255, 255, 0);

    fn packed(self) -> u32 {
        (u32::from(self.0) << 16) | (u32::from(self.1) << 8) | u32::from(self.2)
    }
}

/// Row-major pixel buffer tagged with the text it shows.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    size: Size,
    label: String,
    pixels: Vec<u32>,
}

impl Bitmap {
    /// Uniform image, e.g. for plain options.
    pub fn solid(width: u16, height: u16, label: impl Into<String>) -> Self {
        let cells = usize::from(width) * usize::from(height);
        Self {
            size: Size::new(f32::from(width), f32::from(height)),
            label: label.into(),
            pixels: vec![Rgb::WHITE.packed(); cells],
        }
    }

    /// Text (or name) the image shows.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Image for Bitmap {
    type Pixel = u32;

    fn size(&self) -> Size {
        self.size
    }

    fn pixels(&self) -> &[u32] {
        &self.pixels
    }
}

/// [`ContentFactory`] with fixed glyph metrics.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedMetrics;

impl ContentFactory for FixedMetrics {
    type Font = Face;
    type Color = Rgb;
    type Image = Bitmap;

    fn render_text(&self, font: &Face, text: &str, color: Rgb) -> Bitmap {
        let row: Vec<u32> = text
            .chars()
            .flat_map(|ch| {
                iter::repeat_n(glyph_pixel(ch, color), usize::from(font.glyph_width))
            })
            .collect();
        let width = row.len();
        let pixels = iter::repeat_n(row, usize::from(font.line_height)).flatten().collect();

        Bitmap {
            size: Size::new(width as f32, f32::from(font.line_height)),
            label: text.to_owned(),
            pixels,
        }
    }
}

fn glyph_pixel(ch: char, color: Rgb) -> u32 {
    u32::from(ch).wrapping_mul(0x9E37_79B9) ^ color.packed()
}
