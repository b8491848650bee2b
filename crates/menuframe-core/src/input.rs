//! Backend-agnostic raw keyboard input.
//!
//! Frontends translate their native events (crossterm, SDL, winit, ...) into
//! [`RawEvent`]s and hand them to a [`RawInputSource`]. The core never talks to
//! a terminal or window directly, which keeps [`crate::KeyState`] fully
//! deterministic under simulation.

use std::collections::VecDeque;

/// Physical key identity.
///
/// Character keys are identified by the character they produce without
/// modifiers; frontends normalize case so that a press and its release map to
/// the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Character key (letters, digits, punctuation, space).
    Char(char),
    /// Enter/Return key.
    Enter,
    /// Escape key.
    Esc,
    /// Backspace key.
    Backspace,
    /// Tab key.
    Tab,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Home key.
    Home,
    /// End key.
    End,
}

/// Direction of a raw key transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Key went down (or auto-repeated).
    Down,
    /// Key went up.
    Up,
}

/// One raw key transition as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEvent {
    /// Down or up.
    pub kind: KeyKind,
    /// Which key.
    pub key: Key,
    /// Character produced by a key-down, if any.
    pub ch: Option<char>,
}

impl RawEvent {
    /// Key-down of a key that produces no character.
    pub const fn down(key: Key) -> Self {
        Self { kind: KeyKind::Down, key, ch: None }
    }

    /// Key-down of a character key, producing `ch`.
    pub const fn typed(ch: char) -> Self {
        Self { kind: KeyKind::Down, key: Key::Char(ch), ch: Some(ch) }
    }

    /// Key-up.
    pub const fn up(key: Key) -> Self {
        Self { kind: KeyKind::Up, key, ch: None }
    }
}

/// Source of raw key events.
///
/// `poll_events` must never block. Each call returns everything that arrived
/// since the previous call, so one call fully drains the source.
pub trait RawInputSource {
    /// Take all pending events, oldest first.
    fn poll_events(&mut self) -> Vec<RawEvent>;
}

/// FIFO of raw events filled by a frontend and drained by
/// [`crate::KeyState::update`].
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    pending: VecDeque<RawEvent>,
}

impl EventQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn push(&mut self, event: RawEvent) {
        self.pending.push_back(event);
    }

    /// Append several events in order.
    pub fn extend(&mut self, events: impl IntoIterator<Item = RawEvent>) {
        self.pending.extend(events);
    }

    /// Number of events not yet drained.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Check if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl RawInputSource for EventQueue {
    fn poll_events(&mut self) -> Vec<RawEvent> {
        self.pending.drain(..).collect()
    }
}
