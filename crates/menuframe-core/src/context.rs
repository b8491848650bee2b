//! Navigator state reachable from option callbacks.

use crate::{
    event::{MenuEvent, MenuEventKind},
    geometry::Size,
    option::OptionId,
};

/// The part of a [`crate::Menu`] that callbacks and delegates may touch.
///
/// Passed as the first argument of every [`crate::Callback`]. Holds the
/// navigator lock, the viewport captured at construction, a pending key
/// refresh request, and the events of the current frame.
#[derive(Debug, Clone)]
pub struct MenuContext {
    viewport: Size,
    locked: bool,
    /// A delegate asked for one extra key state refresh.
    refresh_requested: bool,
    events: Vec<MenuEvent>,
}

impl MenuContext {
    pub(crate) fn new(viewport: Size) -> Self {
        Self { viewport, locked: false, refresh_requested: false, events: Vec::new() }
    }

    /// Suspend navigation and activation. Idempotent.
    pub fn lock(&mut self) {
        if !self.locked {
            tracing::debug!("navigator locked");
        }
        self.locked = true;
    }

    /// Resume navigation and activation. Idempotent.
    pub fn unlock(&mut self) {
        if self.locked {
            tracing::debug!("navigator unlocked");
        }
        self.locked = false;
    }

    /// Whether navigation is suspended.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Viewport size captured when the menu was built.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Ask the navigator to advance the key state once more before it
    /// continues with this frame.
    pub fn request_key_refresh(&mut self) {
        self.refresh_requested = true;
    }

    pub(crate) fn take_key_refresh(&mut self) -> bool {
        std::mem::take(&mut self.refresh_requested)
    }

    pub(crate) fn emit(&mut self, option: OptionId, kind: MenuEventKind) {
        self.events.push(MenuEvent::new(option, kind));
    }

    pub(crate) fn take_events(&mut self) -> Vec<MenuEvent> {
        std::mem::take(&mut self.events)
    }
}
