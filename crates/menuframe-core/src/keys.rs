//! Edge-triggered per-action key state.
//!
//! [`KeyState`] turns raw key transitions into one discrete [`KeyPhase`] per
//! named action, recomputed once per frame by [`KeyState::update`]:
//!
//! ```text
//! Idle --down--> JustPressed --frame--> Held --up--> JustReleased --frame--> Idle
//! ```
//!
//! `JustPressed` and `JustReleased` each last exactly one update. An edge
//! that arrives while the opposite edge is still being reported is deferred
//! to the next update, so a press and release inside one frame produce both
//! edges, and a new press right after a deferred release still shows the
//! release first. At most one pressed/released pair waits behind the
//! current phase; faster pairs are merged.
//!
//! Several keys may alias one action and one key may drive several actions.
//! When an action is aliased, [`ReleasePolicy`] decides whether the first or
//! the last key-up releases it.

use std::collections::{HashMap, HashSet, VecDeque};

use thiserror::Error;

use crate::input::{Key, KeyKind, RawEvent, RawInputSource};

/// Arrow keys bound to `up`, `down`, `left`, `right`.
pub const ARROWS: [(Key, &str); 4] =
    [(Key::Up, "up"), (Key::Down, "down"), (Key::Left, "left"), (Key::Right, "right")];

/// Enter and Space bound to `hit`.
pub const HIT: [(Key, &str); 2] = [(Key::Enter, "hit"), (Key::Char(' '), "hit")];

/// Enter bound to `return`.
pub const RETURN: [(Key, &str); 1] = [(Key::Enter, "return")];

/// Action lookup errors.
///
/// Referencing an action that was never bound is a wiring defect, not a
/// runtime condition; callers propagate it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The action name was never bound to any key.
    #[error("unknown action: {0}")]
    UnknownAction(String),
}

/// Discrete state of an action for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyPhase {
    /// Not pressed.
    #[default]
    Idle,
    /// Pressed this frame.
    JustPressed,
    /// Pressed on an earlier frame and still down.
    Held,
    /// Released this frame.
    JustReleased,
}

impl KeyPhase {
    /// Whether the action is currently down.
    pub fn is_down(self) -> bool {
        matches!(self, Self::JustPressed | Self::Held)
    }
}

/// Which key-up releases an action bound to several keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReleasePolicy {
    /// Released once every bound key that went down has gone up.
    #[default]
    AllKeysUp,
    /// Released by the first key-up of any bound key.
    AnyKeyUp,
}

/// Character class accepted in text-input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFilter {
    /// Any non-control character.
    Printable,
    /// Letters and digits.
    Alphanumeric,
    /// Letters and the space character.
    AlphaOrSpace,
    /// ASCII digits.
    Digit,
}

impl TextFilter {
    /// Whether `ch` belongs to this class.
    pub fn accepts(self, ch: char) -> bool {
        match self {
            Self::Printable => !ch.is_control(),
            Self::Alphanumeric => ch.is_alphanumeric(),
            Self::AlphaOrSpace => ch.is_alphabetic() || ch == ' ',
            Self::Digit => ch.is_ascii_digit(),
        }
    }
}

/// Edges a slot can hold back for later updates: a release behind the
/// press it follows, and a press behind the release it follows.
const MAX_DEFERRED: usize = 2;

/// Per-action bookkeeping.
#[derive(Debug, Clone, Default)]
struct Slot {
    phase: KeyPhase,
    /// Bound keys currently down.
    down: usize,
    /// Edges that arrived while another edge was being reported, oldest
    /// first. Alternates between `JustPressed` and `JustReleased`.
    deferred: VecDeque<KeyPhase>,
}

impl Slot {
    fn advance(&mut self) {
        self.phase = match self.deferred.pop_front() {
            Some(edge) => edge,
            None => match self.phase {
                KeyPhase::JustPressed => KeyPhase::Held,
                KeyPhase::JustReleased => KeyPhase::Idle,
                phase => phase,
            },
        };
    }

    /// Phase once every deferred edge has been reported.
    fn latest(&self) -> KeyPhase {
        self.deferred.back().copied().unwrap_or(self.phase)
    }

    /// Report `edge` on a later update. When the backlog is full the newest
    /// deferred edge is the opposite of `edge`, and the two cancel out.
    fn defer(&mut self, edge: KeyPhase) {
        if self.deferred.len() >= MAX_DEFERRED {
            self.deferred.pop_back();
        } else {
            self.deferred.push_back(edge);
        }
    }

    fn press(&mut self) {
        self.down = self.down.saturating_add(1);
        match self.latest() {
            KeyPhase::Idle => self.phase = KeyPhase::JustPressed,
            KeyPhase::JustReleased => self.defer(KeyPhase::JustPressed),
            KeyPhase::JustPressed | KeyPhase::Held => {},
        }
    }

    fn release(&mut self, policy: ReleasePolicy) {
        self.down = self.down.saturating_sub(1);
        let released = match policy {
            ReleasePolicy::AnyKeyUp => true,
            ReleasePolicy::AllKeysUp => self.down == 0,
        };
        if !released {
            return;
        }
        match self.latest() {
            KeyPhase::Held => self.phase = KeyPhase::JustReleased,
            KeyPhase::JustPressed => self.defer(KeyPhase::JustReleased),
            KeyPhase::Idle | KeyPhase::JustReleased => {},
        }
    }
}

/// Frame-discretized state of every bound action.
///
/// Owns its [`RawInputSource`] so that a refresh can be forced mid-frame
/// (a focusing text entry does this to swallow its own triggering key).
#[derive(Debug, Clone)]
pub struct KeyState<S> {
    source: S,
    /// Raw key → actions it drives.
    bindings: HashMap<Key, Vec<String>>,
    /// Action → state.
    slots: HashMap<String, Slot>,
    /// Raw keys currently down.
    down: HashSet<Key>,
    policy: ReleasePolicy,
    filter: Option<TextFilter>,
    /// Character typed this frame. `None` if nothing accepted.
    typed: Option<char>,
}

impl<S: RawInputSource> KeyState<S> {
    /// Create a key state reading from `source` with the given
    /// `(key, action)` bindings. Every action starts [`KeyPhase::Idle`].
    pub fn new<'a>(source: S, bindings: impl IntoIterator<Item = (Key, &'a str)>) -> Self {
        let mut keys = Self {
            source,
            bindings: HashMap::new(),
            slots: HashMap::new(),
            down: HashSet::new(),
            policy: ReleasePolicy::default(),
            filter: None,
            typed: None,
        };
        keys.extend(bindings);
        keys
    }

    /// Set how aliased actions are released.
    #[must_use]
    pub fn with_release_policy(mut self, policy: ReleasePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Enable text-input mode, recording typed characters of `filter`'s
    /// class.
    #[must_use]
    pub fn with_text_filter(mut self, filter: TextFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Add more `(key, action)` bindings. Duplicate pairs are ignored.
    pub fn extend<'a>(&mut self, bindings: impl IntoIterator<Item = (Key, &'a str)>) {
        for (key, action) in bindings {
            let actions = self.bindings.entry(key).or_default();
            if !actions.iter().any(|bound| bound == action) {
                actions.push(action.to_owned());
            }
            self.slots.entry(action.to_owned()).or_default();
        }
    }

    /// Advance one frame: age last frame's edges, then drain and apply every
    /// pending raw event.
    pub fn update(&mut self) {
        for slot in self.slots.values_mut() {
            slot.advance();
        }
        self.typed = None;

        let events = self.source.poll_events();
        if !events.is_empty() {
            tracing::trace!(events = events.len(), "draining raw key events");
        }
        for event in events {
            self.apply(event);
        }
    }

    fn apply(&mut self, event: RawEvent) {
        match event.kind {
            KeyKind::Down => {
                if let (Some(filter), Some(ch)) = (self.filter, event.ch) {
                    if filter.accepts(ch) {
                        self.typed = Some(ch);
                    }
                }
                // Auto-repeat of a key that is already down is not an edge.
                if !self.down.insert(event.key) {
                    return;
                }
                let Some(actions) = self.bindings.get(&event.key) else {
                    return;
                };
                for action in actions {
                    if let Some(slot) = self.slots.get_mut(action) {
                        slot.press();
                    }
                }
            },
            KeyKind::Up => {
                if !self.down.remove(&event.key) {
                    return;
                }
                let Some(actions) = self.bindings.get(&event.key) else {
                    return;
                };
                for action in actions {
                    if let Some(slot) = self.slots.get_mut(action) {
                        slot.release(self.policy);
                    }
                }
            },
        }
    }

    /// Current phase of `action`.
    pub fn lookup(&self, action: &str) -> Result<KeyPhase, LookupError> {
        self.slots
            .get(action)
            .map(|slot| slot.phase)
            .ok_or_else(|| LookupError::UnknownAction(action.to_owned()))
    }

    /// Whether `action` went down this frame.
    pub fn just_pressed(&self, action: &str) -> Result<bool, LookupError> {
        Ok(self.lookup(action)? == KeyPhase::JustPressed)
    }

    /// Character accepted by the text filter this frame.
    pub fn typed(&self) -> Option<char> {
        self.typed
    }

    /// Whether `action` is bound to at least one key.
    pub fn is_bound(&self, action: &str) -> bool {
        self.slots.contains_key(action)
    }

    /// Active release policy.
    pub fn release_policy(&self) -> ReleasePolicy {
        self.policy
    }

    /// Active text filter. `None` if text-input mode is off.
    pub fn text_filter(&self) -> Option<TextFilter> {
        self.filter
    }

    /// Shared access to the raw event source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the raw event source, for frontends that push
    /// events into it.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
