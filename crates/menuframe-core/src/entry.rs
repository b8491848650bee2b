//! Text entry options.
//!
//! An entry is either unfocused or focused:
//!
//! ```text
//!             trigger (activate or select-gain)
//! unfocused ------------------------------------> focused
//!     ^                                              |
//!     +---------- select-lose / cancel action -------+
//! ```
//!
//! Focusing locks the navigator and forces one extra key state refresh so
//! the key that triggered focus is not read again as typed text or as a
//! publish. While focused, every typed character is appended to the buffer
//! and the publish action invokes the commit callback without leaving focus.

use std::fmt;

use crate::{
    callback::{self, Callback},
    content::TextContent,
    context::MenuContext,
    event::MenuEventKind,
    input::RawInputSource,
    keys::KeyState,
    option::OptionId,
    surface::ContentFactory,
};

/// Which navigator event focuses an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTrigger {
    /// The activate action while the entry is selected.
    #[default]
    Activate,
    /// The selection moving onto the entry.
    SelectGain,
}

/// Configuration of a text entry.
pub struct EntrySettings<F: ContentFactory> {
    publish: String,
    cancel: String,
    trigger: FocusTrigger,
    on_publish: Callback<F>,
}

impl<F: ContentFactory> Default for EntrySettings<F> {
    fn default() -> Self {
        Self {
            publish: "return".to_owned(),
            cancel: "return".to_owned(),
            trigger: FocusTrigger::default(),
            on_publish: callback::noop(),
        }
    }
}

impl<F: ContentFactory> EntrySettings<F> {
    /// Action that commits the buffer.
    #[must_use]
    pub fn publish_on(mut self, action: impl Into<String>) -> Self {
        self.publish = action.into();
        self
    }

    /// Action that leaves focus.
    #[must_use]
    pub fn cancel_on(mut self, action: impl Into<String>) -> Self {
        self.cancel = action.into();
        self
    }

    /// Event that focuses the entry.
    #[must_use]
    pub fn focus_on(mut self, trigger: FocusTrigger) -> Self {
        self.trigger = trigger;
        self
    }

    /// Commit callback, invoked with the entry's delegate on publish.
    #[must_use]
    pub fn on_publish(mut self, callback: Callback<F>) -> Self {
        self.on_publish = callback;
        self
    }

    /// Publish action name.
    pub fn publish(&self) -> &str {
        &self.publish
    }

    /// Cancel action name.
    pub fn cancel(&self) -> &str {
        &self.cancel
    }

    /// Focus trigger.
    pub fn trigger(&self) -> FocusTrigger {
        self.trigger
    }
}

impl<F: ContentFactory> Clone for EntrySettings<F> {
    fn clone(&self) -> Self {
        Self {
            publish: self.publish.clone(),
            cancel: self.cancel.clone(),
            trigger: self.trigger,
            on_publish: self.on_publish.clone(),
        }
    }
}

impl<F: ContentFactory> fmt::Debug for EntrySettings<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntrySettings")
            .field("publish", &self.publish)
            .field("cancel", &self.cancel)
            .field("trigger", &self.trigger)
            .finish_non_exhaustive()
    }
}

/// Actions that fired for a focused entry this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct EntryInput {
    pub publish: bool,
    pub cancel: bool,
}

/// Payload of [`crate::Content::Input`]: text buffer plus focus state.
pub struct InputContent<F: ContentFactory> {
    text: TextContent<F>,
    focused: bool,
    settings: EntrySettings<F>,
}

impl<F: ContentFactory> InputContent<F> {
    /// Create an unfocused entry.
    pub fn new(text: TextContent<F>, settings: EntrySettings<F>) -> Self {
        Self { text, focused: false, settings }
    }

    /// The text buffer.
    pub fn text(&self) -> &TextContent<F> {
        &self.text
    }

    /// Mutable text buffer.
    pub fn text_mut(&mut self) -> &mut TextContent<F> {
        &mut self.text
    }

    /// Whether the entry holds focus (and the navigator lock).
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Entry configuration.
    pub fn settings(&self) -> &EntrySettings<F> {
        &self.settings
    }

    pub(crate) fn publish_callback(&self) -> Callback<F> {
        self.settings.on_publish.clone()
    }

    /// Focus if `event` is the configured trigger.
    pub(crate) fn trigger(&mut self, event: FocusTrigger, owner: OptionId, ctx: &mut MenuContext) {
        if event == self.settings.trigger && !self.focused {
            self.focused = true;
            ctx.lock();
            ctx.request_key_refresh();
            tracing::debug!(option = %owner, "text entry focused");
        }
    }

    pub(crate) fn restore_focus(&mut self) {
        self.focused = true;
    }

    /// Leave focus, releasing the navigator lock.
    pub(crate) fn unfocus(&mut self, owner: OptionId, ctx: &mut MenuContext) {
        if !self.focused {
            return;
        }
        self.focused = false;
        ctx.unlock();
        ctx.emit(owner, MenuEventKind::Cancelled);
        tracing::debug!(option = %owner, "text entry unfocused");
    }

    /// Consume this frame's typed character and report which entry actions
    /// fired. Does nothing while unfocused.
    pub(crate) fn poll<S: RawInputSource>(
        &mut self,
        keys: &KeyState<S>,
    ) -> Result<EntryInput, crate::MenuError> {
        if !self.focused {
            return Ok(EntryInput::default());
        }
        if let Some(ch) = keys.typed() {
            self.text.append(ch);
            tracing::trace!(ch = %ch, "text entry typed");
        }
        Ok(EntryInput {
            publish: keys.just_pressed(&self.settings.publish)?,
            cancel: keys.just_pressed(&self.settings.cancel)?,
        })
    }
}

impl<F: ContentFactory> Clone for InputContent<F> {
    fn clone(&self) -> Self {
        Self { text: self.text.clone(), focused: self.focused, settings: self.settings.clone() }
    }
}

impl<F: ContentFactory> fmt::Debug for InputContent<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputContent")
            .field("text", &self.text)
            .field("focused", &self.focused)
            .field("settings", &self.settings)
            .finish()
    }
}
