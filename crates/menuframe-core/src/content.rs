//! Variant payloads carried by options and delegates.
//!
//! An option is one of three kinds, expressed as the [`Content`] tag rather
//! than a type hierarchy:
//!
//! - [`Content::Plain`]: a fixed image
//! - [`Content::Text`]: a line of text rendered through the
//!   [`ContentFactory`]
//! - [`Content::Input`]: an editable text entry (see [`crate::InputContent`])
//!
//! Text-only operations go through [`TextCapability`], which only the
//! text-bearing kinds implement.

use std::fmt;

use crate::{entry::InputContent, surface::ContentFactory};

/// Read and write access to the text of a text-bearing option.
pub trait TextCapability<F: ContentFactory> {
    /// Current text.
    fn text(&self) -> &str;

    /// Replace the text. The image is re-rendered on the next frame.
    fn set_text(&mut self, text: String);

    /// Current color.
    fn color(&self) -> F::Color;

    /// Replace the color.
    fn set_color(&mut self, color: F::Color);

    /// Current font.
    fn font(&self) -> &F::Font;

    /// Replace the font.
    fn set_font(&mut self, font: F::Font);
}

/// A line of text with its rendering attributes.
///
/// Mutations mark the content dirty; the owning delegate re-renders it
/// through the factory on the next frame.
pub struct TextContent<F: ContentFactory> {
    font: F::Font,
    text: String,
    /// Value restored by [`TextContent::reset`].
    initial: String,
    color: F::Color,
    dirty: bool,
}

impl<F: ContentFactory> TextContent<F> {
    /// Create text content. The reset value defaults to `text`.
    pub fn new(font: F::Font, text: impl Into<String>, color: F::Color) -> Self {
        let text = text.into();
        Self { font, initial: text.clone(), text, color, dirty: false }
    }

    /// Use `initial` as the value restored by [`TextContent::reset`].
    #[must_use]
    pub fn with_initial(mut self, initial: impl Into<String>) -> Self {
        self.initial = initial.into();
        self
    }

    /// Value restored by [`TextContent::reset`].
    pub fn initial(&self) -> &str {
        &self.initial
    }

    /// Append one character.
    pub fn append(&mut self, ch: char) {
        self.text.push(ch);
        self.dirty = true;
    }

    /// Restore the initial value.
    pub fn reset(&mut self) {
        self.text.clone_from(&self.initial);
        self.dirty = true;
    }

    /// Whether the rendered image is stale.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Render with the current attributes.
    pub fn render(&self, factory: &F) -> F::Image {
        factory.render_text(&self.font, &self.text, self.color)
    }

    /// Render if stale, clearing the dirty flag.
    pub(crate) fn rerender(&mut self, factory: &F) -> Option<F::Image> {
        if !self.dirty {
            return None;
        }
        self.dirty = false;
        Some(self.render(factory))
    }
}

impl<F: ContentFactory> TextCapability<F> for TextContent<F> {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
        self.dirty = true;
    }

    fn color(&self) -> F::Color {
        self.color
    }

    fn set_color(&mut self, color: F::Color) {
        self.color = color;
        self.dirty = true;
    }

    fn font(&self) -> &F::Font {
        &self.font
    }

    fn set_font(&mut self, font: F::Font) {
        self.font = font;
        self.dirty = true;
    }
}

impl<F: ContentFactory> Clone for TextContent<F> {
    fn clone(&self) -> Self {
        Self {
            font: self.font.clone(),
            text: self.text.clone(),
            initial: self.initial.clone(),
            color: self.color,
            dirty: self.dirty,
        }
    }
}

impl<F: ContentFactory> fmt::Debug for TextContent<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextContent")
            .field("font", &self.font)
            .field("text", &self.text)
            .field("initial", &self.initial)
            .field("color", &self.color)
            .field("dirty", &self.dirty)
            .finish()
    }
}

/// Kind-specific payload of an option or delegate.
pub enum Content<F: ContentFactory> {
    /// Fixed image, no text.
    Plain,
    /// Rendered text.
    Text(TextContent<F>),
    /// Editable text entry.
    Input(InputContent<F>),
}

impl<F: ContentFactory> Content<F> {
    /// Text capability of text-bearing kinds. `None` for [`Content::Plain`].
    pub fn text(&self) -> Option<&TextContent<F>> {
        match self {
            Self::Plain => None,
            Self::Text(text) => Some(text),
            Self::Input(entry) => Some(entry.text()),
        }
    }

    /// Mutable text of text-bearing kinds. `None` for [`Content::Plain`].
    pub fn text_mut(&mut self) -> Option<&mut TextContent<F>> {
        match self {
            Self::Plain => None,
            Self::Text(text) => Some(text),
            Self::Input(entry) => Some(entry.text_mut()),
        }
    }

    /// Whether this kind re-lays itself out when its image changes.
    pub fn is_textual(&self) -> bool {
        !matches!(self, Self::Plain)
    }
}

impl<F: ContentFactory> Clone for Content<F> {
    fn clone(&self) -> Self {
        match self {
            Self::Plain => Self::Plain,
            Self::Text(text) => Self::Text(text.clone()),
            Self::Input(entry) => Self::Input(entry.clone()),
        }
    }
}

impl<F: ContentFactory> fmt::Debug for Content<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => f.write_str("Plain"),
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Input(entry) => f.debug_tuple("Input").field(entry).finish(),
        }
    }
}
