//! Frame-driven menu navigation for games and terminal frontends.
//!
//! Pure state machines driven once per frame by the host, with every
//! platform concern (drawing, text rasterization, raw key events) behind a
//! trait so the same code runs in production and in deterministic tests.
//!
//! # Components
//!
//! - [`KeyState`]: edge-triggered per-action key state
//! - [`Menu`]: ordered navigator with lock, layout, and [`MenuEvent`] output
//! - [`MenuOption`] / [`Delegate`]: stable option identity and its
//!   replaceable rendering half
//! - [`InputContent`]: editable text entry that takes the navigator lock
//! - [`callback`]: lifecycle callbacks and their combinators
//!
//! # Frame order
//!
//! ```text
//! KeyState::update -> Menu::update -> Menu::render
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod callback;
mod content;
mod context;
mod delegate;
mod entry;
mod error;
mod event;
mod geometry;
mod input;
pub mod keys;
mod menu;
mod option;
mod surface;

pub use callback::{Callback, Callbacks, compose};
pub use content::{Content, TextCapability, TextContent};
pub use context::MenuContext;
pub use delegate::Delegate;
pub use entry::{EntrySettings, FocusTrigger, InputContent};
pub use error::{MenuError, OnMismatch};
pub use event::{MenuEvent, MenuEventKind};
pub use geometry::{Offset, OffsetUnit, Point, Size};
pub use input::{EventQueue, Key, KeyKind, RawEvent, RawInputSource};
pub use keys::{KeyPhase, KeyState, LookupError, ReleasePolicy, TextFilter};
pub use menu::{Bindings, Menu, MenuConfig};
pub use option::{MenuOption, OptionId, OptionSpec};
pub use surface::{ContentFactory, Image, Place, RenderSurface, Viewport, images_equal};
