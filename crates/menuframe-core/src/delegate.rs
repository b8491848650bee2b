//! Rendering delegates.
//!
//! A [`Delegate`] is the replaceable half of an option: it holds the current
//! position, the rendered image, the bound callbacks, and the kind-specific
//! [`Content`]. The owning [`crate::MenuOption`] rebuilds it whenever layout
//! changes; callbacks only ever see the delegate that is current when they
//! run.

use std::{fmt, rc::Rc};

use crate::{
    callback::Callbacks,
    content::{Content, TextCapability},
    context::MenuContext,
    entry::FocusTrigger,
    error::MenuError,
    event::MenuEventKind,
    geometry::{Point, Size},
    input::RawInputSource,
    keys::KeyState,
    option::OptionId,
    surface::{ContentFactory, Image, RenderSurface},
};

/// Position, image, callbacks, and content of an option.
pub struct Delegate<F: ContentFactory> {
    owner: OptionId,
    position: Point,
    /// Position restored by [`Delegate::reset`].
    origin: Point,
    image: F::Image,
    /// Image restored by [`Delegate::reset`].
    original_image: F::Image,
    callbacks: Callbacks<F>,
    content: Content<F>,
}

impl<F: ContentFactory> Delegate<F> {
    pub(crate) fn new(
        owner: OptionId,
        position: Point,
        image: F::Image,
        callbacks: Callbacks<F>,
        content: Content<F>,
    ) -> Self {
        Self {
            owner,
            position,
            origin: position,
            original_image: image.clone(),
            image,
            callbacks,
            content,
        }
    }

    /// Option this delegate renders.
    pub fn owner(&self) -> OptionId {
        self.owner
    }

    /// Top-left corner.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Move the top-left corner.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Move by `delta`.
    pub fn shift(&mut self, delta: Point) {
        self.position = self.position + delta;
    }

    /// Current image.
    pub fn image(&self) -> &F::Image {
        &self.image
    }

    /// Replace the image.
    pub fn set_image(&mut self, image: F::Image) {
        self.image = image;
    }

    /// Size of the current image.
    pub fn size(&self) -> Size {
        self.image.size()
    }

    /// Restore the image and/or position the delegate was built with.
    pub fn reset(&mut self, image: bool, position: bool) {
        if image {
            self.image = self.original_image.clone();
        }
        if position {
            self.position = self.origin;
        }
    }

    /// Kind-specific payload.
    pub fn content(&self) -> &Content<F> {
        &self.content
    }

    /// Text capability.
    ///
    /// # Errors
    ///
    /// [`MenuError::NotText`] if the option renders no text.
    pub fn text(&self) -> Result<&dyn TextCapability<F>, MenuError> {
        match self.content.text() {
            Some(text) => Ok(text),
            None => Err(MenuError::NotText { option: self.owner }),
        }
    }

    /// Mutable text capability.
    ///
    /// # Errors
    ///
    /// [`MenuError::NotText`] if the option renders no text.
    pub fn text_mut(&mut self) -> Result<&mut dyn TextCapability<F>, MenuError> {
        let owner = self.owner;
        match self.content.text_mut() {
            Some(text) => Ok(text),
            None => Err(MenuError::NotText { option: owner }),
        }
    }

    /// Append a character to the text buffer.
    pub fn append(&mut self, ch: char) -> Result<(), MenuError> {
        let owner = self.owner;
        self.content.text_mut().ok_or(MenuError::NotText { option: owner })?.append(ch);
        Ok(())
    }

    /// Restore the text buffer to its initial value.
    pub fn reset_text(&mut self) -> Result<(), MenuError> {
        let owner = self.owner;
        self.content.text_mut().ok_or(MenuError::NotText { option: owner })?.reset();
        Ok(())
    }

    /// Whether this is a text entry holding focus.
    pub fn is_focused(&self) -> bool {
        matches!(&self.content, Content::Input(entry) if entry.is_focused())
    }

    /// Mark a rebuilt entry focused without touching the lock, which the
    /// previous delegate still holds.
    pub(crate) fn restore_focus(&mut self) {
        if let Content::Input(entry) = &mut self.content {
            entry.restore_focus();
        }
    }

    pub(crate) fn activate(&mut self, ctx: &mut MenuContext) -> Result<(), MenuError> {
        if let Content::Input(entry) = &mut self.content {
            entry.trigger(FocusTrigger::Activate, self.owner, ctx);
        }
        let callback = Rc::clone(&self.callbacks.on_activate);
        callback(ctx, self)
    }

    pub(crate) fn select_gain(&mut self, ctx: &mut MenuContext) -> Result<(), MenuError> {
        if let Content::Input(entry) = &mut self.content {
            entry.trigger(FocusTrigger::SelectGain, self.owner, ctx);
        }
        let callback = Rc::clone(&self.callbacks.on_select_gain);
        callback(ctx, self)
    }

    pub(crate) fn select_lose(&mut self, ctx: &mut MenuContext) -> Result<(), MenuError> {
        if let Content::Input(entry) = &mut self.content {
            entry.unfocus(self.owner, ctx);
        }
        let callback = Rc::clone(&self.callbacks.on_select_lose);
        callback(ctx, self)
    }

    /// Per-frame text entry handling: typed characters, publish, cancel.
    pub(crate) fn handle_input<S: RawInputSource>(
        &mut self,
        ctx: &mut MenuContext,
        keys: &KeyState<S>,
    ) -> Result<(), MenuError> {
        let Content::Input(entry) = &mut self.content else {
            return Ok(());
        };
        let fired = entry.poll(keys)?;
        let on_publish = entry.publish_callback();

        if fired.publish {
            ctx.emit(self.owner, MenuEventKind::Published);
            on_publish(ctx, self)?;
        }
        if fired.cancel {
            if let Content::Input(entry) = &mut self.content {
                entry.unfocus(self.owner, ctx);
            }
        }
        Ok(())
    }

    /// Re-render text content whose attributes changed.
    pub(crate) fn refresh(&mut self, factory: &F) {
        if let Some(image) = self.content.text_mut().and_then(|text| text.rerender(factory)) {
            self.image = image;
        }
    }

    pub(crate) fn draw<R: RenderSurface<F::Image>>(&self, surface: &mut R) {
        surface.draw(&self.image, self.position);
    }
}

impl<F: ContentFactory> fmt::Debug for Delegate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Delegate")
            .field("owner", &self.owner)
            .field("position", &self.position)
            .field("origin", &self.origin)
            .field("image", &self.image)
            .field("content", &self.content)
            .finish_non_exhaustive()
    }
}
