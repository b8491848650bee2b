//! Menu output events.
//!
//! [`crate::Menu::update`] returns the [`MenuEvent`]s produced during the
//! frame. Hosts match on them to drive application state (switch screens,
//! store a submitted name, quit) instead of capturing that state inside
//! per-option callbacks.

use crate::option::OptionId;

/// What happened to an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuEventKind {
    /// The activate action fired while the option was selected.
    Activated,
    /// The selection moved onto the option.
    SelectGained,
    /// The selection moved off the option.
    SelectLost,
    /// A focused text entry fired its publish action.
    Published,
    /// A focused text entry lost focus.
    Cancelled,
}

/// An event on one option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MenuEvent {
    /// Option the event concerns.
    pub option: OptionId,
    /// What happened.
    pub kind: MenuEventKind,
}

impl MenuEvent {
    /// Create an event.
    pub const fn new(option: OptionId, kind: MenuEventKind) -> Self {
        Self { option, kind }
    }
}
