//! Generated input scripts and a reference menu.
//!
//! [`Operation`] derives [`Arbitrary`] so the same scripts drive property
//! tests and the fuzz target. Each operation is one frame of input.

use arbitrary::Arbitrary;
use menuframe_core::{
    Callback, EntrySettings, EventQueue, Key, KeyState, Menu, MenuConfig, Offset, OnMismatch,
    OptionSpec, RawEvent, Size, TextContent, TextFilter,
    callback::{self, compose},
    keys::{ARROWS, HIT, RETURN},
};

use crate::metrics::{Face, FixedMetrics, Rgb};

/// Keys the scripts press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Arbitrary)]
pub enum NavKey {
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// Enter.
    Enter,
    /// Space bar.
    Space,
    /// Escape.
    Esc,
}

impl NavKey {
    /// Raw key.
    pub fn key(self) -> Key {
        match self {
            Self::Up => Key::Up,
            Self::Down => Key::Down,
            Self::Left => Key::Left,
            Self::Right => Key::Right,
            Self::Enter => Key::Enter,
            Self::Space => Key::Char(' '),
            Self::Esc => Key::Esc,
        }
    }
}

/// One frame of scripted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Arbitrary)]
pub enum Operation {
    /// Press and release within the frame.
    Tap(NavKey),
    /// Press and keep down.
    Hold(NavKey),
    /// Release.
    Release(NavKey),
    /// Type one printable ASCII character, selected by the byte.
    Type(u8),
    /// No input.
    Idle,
}

impl Operation {
    /// Raw events this operation queues.
    pub fn raw_events(self) -> Vec<RawEvent> {
        match self {
            Self::Tap(key) => vec![RawEvent::down(key.key()), RawEvent::up(key.key())],
            Self::Hold(key) => vec![RawEvent::down(key.key())],
            Self::Release(key) => vec![RawEvent::up(key.key())],
            Self::Type(byte) => {
                let ch = printable(byte);
                vec![RawEvent::typed(ch), RawEvent::up(Key::Char(ch))]
            },
            Self::Idle => Vec::new(),
        }
    }
}

fn printable(byte: u8) -> char {
    char::from(b' ' + byte % 95)
}

/// Key state with arrows, `hit`, `return`, `escape`, and printable text
/// input.
pub fn standard_keys() -> KeyState<EventQueue> {
    KeyState::new(
        EventQueue::new(),
        ARROWS.into_iter().chain(HIT).chain(RETURN).chain([(Key::Esc, "escape")]),
    )
    .with_text_filter(TextFilter::Printable)
}

/// Vertical menu of a title label, `start`, a name entry, and `quit`.
///
/// Selected options turn yellow and the selected entry is nudged right. The
/// entry focuses on activation, publishes on `return` and leaves focus on
/// `escape`.
pub fn sample_menu(viewport: Size) -> Menu<FixedMetrics> {
    let face = Face::default();
    let mut menu = Menu::new(MenuConfig::vertical(40.0), &viewport);

    menu.add_option(
        OptionSpec::label(&FixedMetrics, TextContent::new(face, "menuframe", Rgb::WHITE)),
        false,
    );

    let (gain, lose) = highlight();
    menu.add_option(
        OptionSpec::text(&FixedMetrics, TextContent::new(face, "start", Rgb::WHITE))
            .on_select_gain(gain)
            .on_select_lose(lose),
        true,
    );

    let (gain, lose) = highlight();
    let settings = EntrySettings::<FixedMetrics>::default().cancel_on("escape");
    menu.add_option(
        OptionSpec::input(&FixedMetrics, TextContent::new(face, "> ", Rgb::WHITE), settings)
            .on_select_gain(compose([gain, callback::shift(Offset::pixels(8.0, 0.0))]))
            .on_select_lose(compose([lose, callback::shift(Offset::pixels(-8.0, 0.0))])),
        false,
    );

    let (gain, lose) = highlight();
    menu.add_option(
        OptionSpec::text(&FixedMetrics, TextContent::new(face, "quit", Rgb::WHITE))
            .on_select_gain(gain)
            .on_select_lose(lose),
        false,
    );

    menu
}

/// Select-gain and select-lose callbacks that toggle the highlight color.
fn highlight() -> (Callback<FixedMetrics>, Callback<FixedMetrics>) {
    (
        callback::set_color(Rgb::YELLOW, OnMismatch::Fail),
        callback::set_color(Rgb::WHITE, OnMismatch::Fail),
    )
}
