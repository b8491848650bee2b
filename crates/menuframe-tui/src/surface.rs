//! Terminal-cell images and the ratatui render surface.
//!
//! A terminal "pixel" is a cell: one character plus its style. Text renders
//! one cell per character on a single row, so sizes are measured in cells.

use menuframe_core::{ContentFactory, Image, Point, RenderSurface, Size, Viewport};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};

/// Text attributes applied on top of the color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TermFont {
    /// Bold, italic, and so on.
    pub modifier: Modifier,
}

impl TermFont {
    /// Bold text.
    pub const BOLD: Self = Self { modifier: Modifier::BOLD };
}

/// Row-major grid of styled cells.
#[derive(Debug, Clone, PartialEq)]
pub struct CellImage {
    width: u16,
    height: u16,
    cells: Vec<(char, Style)>,
}

impl CellImage {
    /// Single-row image of `text` in `style`.
    pub fn text(text: &str, style: Style) -> Self {
        let cells: Vec<_> = text.chars().map(|ch| (ch, style)).collect();
        Self { width: u16::try_from(cells.len()).unwrap_or(u16::MAX), height: 1, cells }
    }

    /// Multi-row image, one line per row, padded with spaces.
    pub fn lines(lines: &[&str], style: Style) -> Self {
        let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
        let mut cells = Vec::with_capacity(width * lines.len());
        for line in lines {
            let pad = width - line.chars().count();
            cells.extend(line.chars().chain(std::iter::repeat_n(' ', pad)).map(|ch| (ch, style)));
        }
        Self {
            width: u16::try_from(width).unwrap_or(u16::MAX),
            height: u16::try_from(lines.len()).unwrap_or(u16::MAX),
            cells,
        }
    }
}

impl Image for CellImage {
    type Pixel = (char, Style);

    fn size(&self) -> Size {
        Size::new(f32::from(self.width), f32::from(self.height))
    }

    fn pixels(&self) -> &[(char, Style)] {
        &self.cells
    }
}

/// [`ContentFactory`] producing [`CellImage`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct Glyphs;

impl ContentFactory for Glyphs {
    type Font = TermFont;
    type Color = Color;
    type Image = CellImage;

    fn render_text(&self, font: &TermFont, text: &str, color: Color) -> CellImage {
        CellImage::text(text, Style::default().fg(color).add_modifier(font.modifier))
    }
}

/// The terminal area a menu lays itself out in.
#[derive(Debug, Clone, Copy)]
pub struct TermViewport(pub Rect);

impl Viewport for TermViewport {
    fn viewport_size(&self) -> Size {
        Size::new(f32::from(self.0.width), f32::from(self.0.height))
    }
}

/// Draws [`CellImage`]s into a ratatui [`Buffer`], clipped to an area.
pub struct BufferSurface<'a> {
    buf: &'a mut Buffer,
    area: Rect,
}

impl<'a> BufferSurface<'a> {
    /// Draw into `area` of `buf`. Positions are relative to `area`.
    pub fn new(buf: &'a mut Buffer, area: Rect) -> Self {
        Self { buf, area }
    }
}

impl RenderSurface<CellImage> for BufferSurface<'_> {
    fn draw(&mut self, image: &CellImage, position: Point) {
        let left = position.x.round() as i32;
        let top = position.y.round() as i32;
        let width = usize::from(image.width);

        for (i, &(ch, style)) in image.cells.iter().enumerate() {
            let x = left + (i % width.max(1)) as i32;
            let y = top + (i / width.max(1)) as i32;
            if x < 0 || y < 0 || x >= i32::from(self.area.width) || y >= i32::from(self.area.height) {
                continue;
            }
            let column = self.area.x + x as u16;
            let row = self.area.y + y as u16;
            if let Some(cell) = self.buf.cell_mut((column, row)) {
                cell.set_char(ch).set_style(style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol().to_owned()).collect()
    }

    #[test]
    fn text_is_one_row_of_cells() {
        let image = Glyphs.render_text(&TermFont::default(), "quit", Color::White);
        assert_eq!(image.size(), Size::new(4.0, 1.0));
        assert_eq!(image.pixels()[0].0, 'q');
    }

    #[test]
    fn lines_are_padded_to_widest() {
        let image = CellImage::lines(&["ab", "abcd"], Style::default());
        assert_eq!(image.size(), Size::new(4.0, 2.0));
        assert_eq!(image.pixels()[2].0, ' ');
    }

    #[test]
    fn draw_rounds_and_clips() {
        let area = Rect::new(0, 0, 6, 2);
        let mut buf = Buffer::empty(area);
        let mut surface = BufferSurface::new(&mut buf, area);

        surface.draw(&CellImage::text("hello", Style::default()), Point::new(2.4, 1.0));
        surface.draw(&CellImage::text("xy", Style::default()), Point::new(-1.0, 0.0));

        assert_eq!(row(&buf, 0), "y     ");
        assert_eq!(row(&buf, 1), "  hell");
    }
}
