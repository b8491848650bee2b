//! Terminal frontend for menuframe
//!
//! Feeds crossterm key events into a [`menuframe_core::KeyState`], renders
//! menus into a ratatui buffer, and runs a small two-screen demo on top.
//!
//! This crate only handles terminal I/O; navigation lives in
//! `menuframe-core`.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod demo;
pub mod input;
pub mod runtime;
pub mod surface;
pub mod terminal;
pub mod ui;

pub use demo::{Demo, Screen};
pub use input::TerminalInput;
pub use surface::{BufferSurface, CellImage, Glyphs, TermFont, TermViewport};
pub use terminal::{TerminalError, Tui};
