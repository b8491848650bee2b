//! Screen-space geometry.
//!
//! Coordinates are `f32` because percent-of-viewport offsets and centered
//! placement routinely produce fractional positions. Frontends round when
//! they rasterize.

use std::{
    fmt,
    ops::{Add, Sub},
};

/// A point in screen space. `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Origin of the screen.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Top-left corner that centers `size` on this point.
    pub fn centered(self, size: Size) -> Self {
        Self { x: self.x - size.width / 2.0, y: self.y - size.height / 2.0 }
    }

    /// Center of a box of `size` whose top-left corner is this point.
    pub fn center_of(self, size: Size) -> Self {
        Self { x: self.x + size.width / 2.0, y: self.y + size.height / 2.0 }
    }

    /// Point scaled component-wise by `factor`.
    pub fn scale(self, factor: f32) -> Self {
        Self { x: self.x * factor, y: self.y * factor }
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Width and height of an image or of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Size {
    /// Create a size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// `percent` of this size, component-wise (50.0 is half).
    pub fn percent(self, percent: Point) -> Point {
        Point { x: self.width * percent.x / 100.0, y: self.height * percent.y / 100.0 }
    }
}

/// How an [`Offset`] is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OffsetUnit {
    /// Raw screen units.
    #[default]
    Pixel,
    /// Percent of the viewport size on each axis.
    Percent,
}

/// A displacement measured in pixels or in percent of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    /// Displacement on each axis.
    pub delta: Point,
    /// Unit of `delta`.
    pub unit: OffsetUnit,
}

impl Offset {
    /// Offset in raw screen units.
    pub const fn pixels(dx: f32, dy: f32) -> Self {
        Self { delta: Point::new(dx, dy), unit: OffsetUnit::Pixel }
    }

    /// Offset in percent of the viewport.
    pub const fn percent(dx: f32, dy: f32) -> Self {
        Self { delta: Point::new(dx, dy), unit: OffsetUnit::Percent }
    }

    /// Resolve to screen units against `viewport`.
    pub fn resolve(self, viewport: Size) -> Point {
        match self.unit {
            OffsetUnit::Pixel => self.delta,
            OffsetUnit::Percent => viewport.percent(self.delta),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_round_trips_through_center_of() {
        let size = Size::new(40.0, 10.0);
        let corner = Point::new(300.0, 300.0).centered(size);

        assert_eq!(corner, Point::new(280.0, 295.0));
        assert_eq!(corner.center_of(size), Point::new(300.0, 300.0));
    }

    #[test]
    fn percent_offset_scales_with_viewport() {
        let viewport = Size::new(500.0, 200.0);

        assert_eq!(Offset::percent(10.0, 50.0).resolve(viewport), Point::new(50.0, 100.0));
        assert_eq!(Offset::pixels(10.0, 50.0).resolve(viewport), Point::new(10.0, 50.0));
    }
}
