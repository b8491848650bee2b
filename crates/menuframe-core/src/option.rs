//! Menu options.
//!
//! A [`MenuOption`] is the stable half of the Option/Delegate split. Its
//! [`OptionId`] is what the navigator and the host hold on to; the
//! [`Delegate`] behind it is rebuilt on every layout change.
//!
//! Options are described with an [`OptionSpec`] and handed to
//! [`crate::Menu::add_option`], which assigns the id.

use std::fmt;

use crate::{
    callback::{Callback, Callbacks},
    content::{Content, TextContent},
    context::MenuContext,
    delegate::Delegate,
    entry::{EntrySettings, InputContent},
    error::MenuError,
    geometry::{Point, Size},
    input::RawInputSource,
    keys::KeyState,
    surface::{ContentFactory, Image, RenderSurface, images_equal},
};

/// Identity of an option within its menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptionId(u32);

impl OptionId {
    /// Create an id from its raw value.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw value.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Description of an option before it joins a menu.
pub struct OptionSpec<F: ContentFactory> {
    image: F::Image,
    content: Content<F>,
    callbacks: Callbacks<F>,
    selectable: bool,
}

impl<F: ContentFactory> OptionSpec<F> {
    /// Option showing a fixed image.
    pub fn plain(image: F::Image) -> Self {
        Self { image, content: Content::Plain, callbacks: Callbacks::default(), selectable: true }
    }

    /// Option showing a line of text.
    pub fn text(factory: &F, text: TextContent<F>) -> Self {
        Self {
            image: text.render(factory),
            content: Content::Text(text),
            callbacks: Callbacks::default(),
            selectable: true,
        }
    }

    /// Editable text entry.
    pub fn input(factory: &F, text: TextContent<F>, settings: EntrySettings<F>) -> Self {
        Self {
            image: text.render(factory),
            content: Content::Input(InputContent::new(text, settings)),
            callbacks: Callbacks::default(),
            selectable: true,
        }
    }

    /// Non-selectable text, e.g. a title. Navigation steps over it.
    pub fn label(factory: &F, text: TextContent<F>) -> Self {
        Self { selectable: false, ..Self::text(factory, text) }
    }

    /// Callback run on activation.
    #[must_use]
    pub fn on_activate(mut self, callback: Callback<F>) -> Self {
        self.callbacks.on_activate = callback;
        self
    }

    /// Callback run when the selection moves onto the option.
    #[must_use]
    pub fn on_select_gain(mut self, callback: Callback<F>) -> Self {
        self.callbacks.on_select_gain = callback;
        self
    }

    /// Callback run when the selection moves off the option.
    #[must_use]
    pub fn on_select_lose(mut self, callback: Callback<F>) -> Self {
        self.callbacks.on_select_lose = callback;
        self
    }

    pub(crate) fn build(self, id: OptionId) -> MenuOption<F> {
        let delegate = Delegate::new(
            id,
            Point::ORIGIN,
            self.image.clone(),
            self.callbacks.clone(),
            self.content.clone(),
        );
        MenuOption {
            id,
            image: self.image,
            position: Point::ORIGIN,
            callbacks: self.callbacks,
            template: self.content,
            selectable: self.selectable,
            delegate,
        }
    }
}

/// A navigable menu entry.
///
/// Equality is identity: two options are equal when their ids are, whatever
/// their delegates currently look like.
pub struct MenuOption<F: ContentFactory> {
    id: OptionId,
    /// Image the current layout was computed for.
    image: F::Image,
    /// Top-left corner, synced from the delegate every frame.
    position: Point,
    callbacks: Callbacks<F>,
    /// Content every rebuilt delegate starts from.
    template: Content<F>,
    selectable: bool,
    delegate: Delegate<F>,
}

impl<F: ContentFactory> MenuOption<F> {
    /// Stable identity.
    pub fn id(&self) -> OptionId {
        self.id
    }

    /// Top-left corner as of the last frame.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Size of the laid-out image.
    pub fn size(&self) -> Size {
        self.image.size()
    }

    /// Center of the laid-out image.
    pub fn center(&self) -> Point {
        self.position.center_of(self.size())
    }

    /// Whether navigation can stop on this option.
    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    /// Current delegate.
    pub fn delegate(&self) -> &Delegate<F> {
        &self.delegate
    }

    /// Mutable current delegate.
    pub fn delegate_mut(&mut self) -> &mut Delegate<F> {
        &mut self.delegate
    }

    /// Center the option on `anchor` and rebuild its delegate there.
    ///
    /// A focused text entry stays focused in the rebuilt delegate, so the
    /// navigator lock it holds is still released by cancel or select-lose.
    pub fn set_position(&mut self, anchor: Point) {
        let focused = self.delegate.is_focused();
        self.position = anchor.centered(self.size());
        self.delegate = Delegate::new(
            self.id,
            self.position,
            self.image.clone(),
            self.callbacks.clone(),
            self.template.clone(),
        );
        if focused {
            self.delegate.restore_focus();
        }
    }

    /// Replace the callback set and rebuild the delegate in place.
    pub fn set_callbacks(&mut self, callbacks: Callbacks<F>) {
        self.callbacks = callbacks;
        let anchor = self.center();
        self.set_position(anchor);
    }

    pub(crate) fn activate(&mut self, ctx: &mut MenuContext) -> Result<(), MenuError> {
        self.delegate.activate(ctx)
    }

    pub(crate) fn select_gain(&mut self, ctx: &mut MenuContext) -> Result<(), MenuError> {
        self.delegate.select_gain(ctx)
    }

    pub(crate) fn select_lose(&mut self, ctx: &mut MenuContext) -> Result<(), MenuError> {
        self.delegate.select_lose(ctx)
    }

    pub(crate) fn handle_input<S: RawInputSource>(
        &mut self,
        ctx: &mut MenuContext,
        keys: &KeyState<S>,
    ) -> Result<(), MenuError> {
        self.delegate.handle_input(ctx, keys)
    }

    /// Bring the delegate's image up to date, follow any move a callback
    /// made, re-center text whose image changed, then draw.
    pub fn render<R: RenderSurface<F::Image>>(&mut self, surface: &mut R, factory: &F) {
        self.delegate.refresh(factory);
        self.position = self.delegate.position();

        if self.template.is_textual() && !images_equal(&self.image, self.delegate.image()) {
            self.relayout();
        }

        self.delegate.draw(surface);
    }

    /// Adopt the delegate's new image, keeping the current center.
    fn relayout(&mut self) {
        let center = self.center();
        self.image = self.delegate.image().clone();
        self.position = center.centered(self.size());
        self.delegate.set_position(self.position);
        tracing::debug!(option = %self.id, %center, "re-centered after content change");
    }
}

impl<F: ContentFactory> PartialEq for MenuOption<F> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<F: ContentFactory> Eq for MenuOption<F> {}

impl<F: ContentFactory> fmt::Debug for MenuOption<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuOption")
            .field("id", &self.id)
            .field("position", &self.position)
            .field("selectable", &self.selectable)
            .field("delegate", &self.delegate)
            .finish_non_exhaustive()
    }
}

impl<F: ContentFactory> fmt::Display for MenuOption<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "option {} at {}", self.id, self.position)
    }
}
