//! Terminal key input.
//!
//! Converts crossterm key events into menuframe [`RawEvent`]s. Most
//! terminals only report presses; unless the keyboard enhancement protocol
//! is active, every press is followed by a synthesized release in the same
//! frame, which the key state reports as a one-frame tap.

use std::{io, time::Duration};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use menuframe_core::{EventQueue, Key, KeyKind, RawEvent, RawInputSource};

/// Convert a crossterm `KeyCode` to a menuframe [`Key`].
///
/// Letters are lowercased so a shifted press and an unshifted release land
/// on the same key; the typed character keeps its case.
pub fn convert_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Some(Key::Char(c.to_ascii_lowercase())),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Esc),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Home => Some(Key::Home),
        KeyCode::End => Some(Key::End),
        _ => None,
    }
}

/// Raw events for one crossterm key event.
pub fn translate(event: &KeyEvent, synthesize_release: bool) -> Vec<RawEvent> {
    let Some(key) = convert_key(event.code) else {
        return Vec::new();
    };
    let ch = match event.code {
        KeyCode::Char(c) if !event.modifiers.contains(KeyModifiers::CONTROL) => Some(c),
        _ => None,
    };

    match event.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => {
            let mut events = vec![RawEvent { kind: KeyKind::Down, key, ch }];
            if synthesize_release {
                events.push(RawEvent::up(key));
            }
            events
        },
        KeyEventKind::Release => vec![RawEvent::up(key)],
    }
}

fn is_interrupt(event: &KeyEvent) -> bool {
    event.kind == KeyEventKind::Press
        && event.code == KeyCode::Char('c')
        && event.modifiers.contains(KeyModifiers::CONTROL)
}

/// [`RawInputSource`] fed from the terminal.
///
/// [`TerminalInput::pump`] reads whatever crossterm has buffered without
/// blocking; [`RawInputSource::poll_events`] then hands it to the key state.
#[derive(Debug, Default)]
pub struct TerminalInput {
    queue: EventQueue,
    reports_release: bool,
    interrupted: bool,
}

impl TerminalInput {
    /// Create an input source. `reports_release` is whether the terminal
    /// sends key-release events.
    pub fn new(reports_release: bool) -> Self {
        Self { queue: EventQueue::new(), reports_release, interrupted: false }
    }

    /// Drain every pending terminal event without blocking.
    pub fn pump(&mut self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            let event = event::read()?;
            self.push(&event);
        }
        Ok(())
    }

    /// Queue one terminal event.
    pub fn push(&mut self, event: &Event) {
        match event {
            Event::Key(key) if is_interrupt(key) => {
                tracing::info!("interrupt requested");
                self.interrupted = true;
            },
            Event::Key(key) => self.queue.extend(translate(key, !self.reports_release)),
            Event::Resize(cols, rows) => {
                tracing::debug!(cols, rows, "terminal resized; layout keeps its initial viewport");
            },
            _ => {},
        }
    }

    /// Whether Ctrl-C was pressed.
    pub fn interrupted(&self) -> bool {
        self.interrupted
    }
}

impl RawInputSource for TerminalInput {
    fn poll_events(&mut self) -> Vec<RawEvent> {
        self.queue.poll_events()
    }
}
