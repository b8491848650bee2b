//! Contracts the core consumes from its host.
//!
//! The core never creates fonts, rasterizes text, or touches a display. The
//! host provides:
//!
//! - [`Viewport`]: screen dimensions, queried once when a menu is built
//! - [`RenderSurface`]: where option images are drawn each frame
//! - [`ContentFactory`]: turns (font, text, color) into an [`Image`]
//! - [`Place`]: the active flag of a top-level screen

use std::fmt;

use crate::geometry::{Point, Size};

/// Provides the viewport size.
pub trait Viewport {
    /// Current viewport dimensions.
    fn viewport_size(&self) -> Size;
}

impl Viewport for Size {
    fn viewport_size(&self) -> Size {
        *self
    }
}

/// A rendered image with comparable pixel content.
pub trait Image: Clone + fmt::Debug {
    /// Pixel (or cell) type of the buffer.
    type Pixel: PartialEq;

    /// Dimensions of the image.
    fn size(&self) -> Size;

    /// Pixel buffer in row-major order.
    fn pixels(&self) -> &[Self::Pixel];
}

/// Exact image equality: sizes first, then the full pixel buffer.
///
/// Buffers are only compared when sizes match, so a resize is detected
/// without touching pixel data.
pub fn images_equal<I: Image>(a: &I, b: &I) -> bool {
    if a.size() != b.size() {
        return false;
    }
    a.pixels() == b.pixels()
}

/// Side-effecting draw target.
pub trait RenderSurface<I: Image> {
    /// Draw `image` with its top-left corner at `position`.
    fn draw(&mut self, image: &I, position: Point);
}

/// Produces images from text.
///
/// Fonts, colors, and images are host types; the core only stores and
/// compares them.
pub trait ContentFactory: 'static {
    /// Font handle.
    type Font: Clone + fmt::Debug;
    /// Color value.
    type Color: Copy + PartialEq + fmt::Debug;
    /// Rendered image.
    type Image: Image;

    /// Render a single line of text.
    fn render_text(&self, font: &Self::Font, text: &str, color: Self::Color) -> Self::Image;
}

/// Active flag of a top-level application screen.
///
/// Switching between screens is the host's business; menus only ask whether
/// the screen they belong to is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Place {
    active: bool,
}

impl Place {
    /// Create an inactive place.
    pub const fn new() -> Self {
        Self { active: false }
    }

    /// Mark the place as showing.
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Mark the place as hidden.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Whether the place is showing.
    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Bitmap {
        size: Size,
        pixels: Vec<u8>,
    }

    impl Image for Bitmap {
        type Pixel = u8;

        fn size(&self) -> Size {
            self.size
        }

        fn pixels(&self) -> &[u8] {
            &self.pixels
        }
    }

    fn bitmap(width: f32, pixels: &[u8]) -> Bitmap {
        Bitmap { size: Size::new(width, 1.0), pixels: pixels.to_vec() }
    }

    #[test]
    fn equal_images_compare_equal() {
        assert!(images_equal(&bitmap(3.0, &[1, 2, 3]), &bitmap(3.0, &[1, 2, 3])));
    }

    #[test]
    fn same_size_different_pixels_is_unequal() {
        assert!(!images_equal(&bitmap(3.0, &[1, 2, 3]), &bitmap(3.0, &[1, 2, 4])));
    }

    #[test]
    fn different_size_is_unequal() {
        assert!(!images_equal(&bitmap(3.0, &[1, 2, 3]), &bitmap(4.0, &[1, 2, 3])));
    }

    #[test]
    fn place_toggles() {
        let mut place = Place::new();
        assert!(!place.is_active());

        place.activate();
        assert!(place.is_active());

        place.deactivate();
        assert!(!place.is_active());
    }
}
