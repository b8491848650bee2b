//! Option callbacks and their combinators.
//!
//! A [`Callback`] receives the navigator context and the delegate it is
//! bound to, so it can lock the navigator, move the option, or swap its
//! image or text. Application-level reactions (switching screens, quitting)
//! belong in the host's handling of [`crate::MenuEvent`]s instead.
//!
//! Callbacks are reference counted because every rebuilt delegate binds the
//! same set.

use std::{fmt, rc::Rc};

use crate::{
    content::TextCapability,
    context::MenuContext,
    delegate::Delegate,
    error::{MenuError, OnMismatch},
    geometry::Offset,
    surface::ContentFactory,
};

/// A lifecycle callback.
pub type Callback<F> = Rc<dyn Fn(&mut MenuContext, &mut Delegate<F>) -> Result<(), MenuError>>;

/// Wrap a closure as a [`Callback`].
pub fn callback<F, C>(f: C) -> Callback<F>
where
    F: ContentFactory,
    C: Fn(&mut MenuContext, &mut Delegate<F>) -> Result<(), MenuError> + 'static,
{
    Rc::new(f)
}

/// Callback that does nothing.
pub fn noop<F: ContentFactory>() -> Callback<F> {
    callback(|_, _| Ok(()))
}

/// One callback running each of `callbacks` in order with the same
/// arguments. The first error stops the chain.
pub fn compose<F: ContentFactory>(callbacks: impl IntoIterator<Item = Callback<F>>) -> Callback<F> {
    let callbacks: Vec<_> = callbacks.into_iter().collect();
    callback(move |ctx, delegate| {
        for each in &callbacks {
            each(ctx, delegate)?;
        }
        Ok(())
    })
}

/// Replace the delegate's image.
pub fn set_image<F: ContentFactory>(image: F::Image) -> Callback<F> {
    callback(move |_, delegate| {
        delegate.set_image(image.clone());
        Ok(())
    })
}

/// Move the delegate by `offset`; percent offsets resolve against the
/// viewport.
pub fn shift<F: ContentFactory>(offset: Offset) -> Callback<F> {
    callback(move |ctx, delegate| {
        delegate.shift(offset.resolve(ctx.viewport()));
        Ok(())
    })
}

/// Replace the text of a text-bearing option.
pub fn set_text<F: ContentFactory>(text: impl Into<String>, on_mismatch: OnMismatch) -> Callback<F> {
    let text = text.into();
    edit_text(on_mismatch, move |content| content.set_text(text.clone()))
}

/// Replace the color of a text-bearing option.
pub fn set_color<F: ContentFactory>(color: F::Color, on_mismatch: OnMismatch) -> Callback<F> {
    edit_text(on_mismatch, move |content| content.set_color(color))
}

/// Replace the font of a text-bearing option.
pub fn set_font<F: ContentFactory>(font: F::Font, on_mismatch: OnMismatch) -> Callback<F> {
    edit_text(on_mismatch, move |content| content.set_font(font.clone()))
}

/// Restore the delegate's original image and/or position.
pub fn reset<F: ContentFactory>(image: bool, position: bool) -> Callback<F> {
    callback(move |_, delegate| {
        delegate.reset(image, position);
        Ok(())
    })
}

fn edit_text<F, E>(on_mismatch: OnMismatch, edit: E) -> Callback<F>
where
    F: ContentFactory,
    E: Fn(&mut dyn TextCapability<F>) + 'static,
{
    callback(move |_, delegate| match delegate.text_mut() {
        Ok(content) => {
            edit(content);
            Ok(())
        },
        Err(err) => on_mismatch.resolve(err),
    })
}

/// The three lifecycle callback slots of an option.
pub struct Callbacks<F: ContentFactory> {
    /// Runs when the option is activated.
    pub on_activate: Callback<F>,
    /// Runs when the selection moves onto the option.
    pub on_select_gain: Callback<F>,
    /// Runs when the selection moves off the option.
    pub on_select_lose: Callback<F>,
}

impl<F: ContentFactory> Default for Callbacks<F> {
    fn default() -> Self {
        Self { on_activate: noop(), on_select_gain: noop(), on_select_lose: noop() }
    }
}

impl<F: ContentFactory> Clone for Callbacks<F> {
    fn clone(&self) -> Self {
        Self {
            on_activate: Rc::clone(&self.on_activate),
            on_select_gain: Rc::clone(&self.on_select_gain),
            on_select_lose: Rc::clone(&self.on_select_lose),
        }
    }
}

impl<F: ContentFactory> fmt::Debug for Callbacks<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks").finish_non_exhaustive()
    }
}
