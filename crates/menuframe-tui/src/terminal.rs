//! Terminal setup and teardown.
//!
//! Raw mode plus the alternate screen, restored on drop. When the terminal
//! supports the keyboard enhancement protocol, key release events are
//! requested so held keys report as held instead of as repeated taps.

use std::io::{self, Stdout, stdout};

use crossterm::{
    ExecutableCommand,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use menuframe_core::MenuError;
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use thiserror::Error;

/// Terminal runtime errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A menu callback or binding lookup failed.
    #[error("menu error: {0}")]
    Menu(#[from] MenuError),
}

/// Owns the terminal for the lifetime of the program.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    reports_release: bool,
}

impl Tui {
    /// Enter raw mode and the alternate screen.
    pub fn new() -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let reports_release = match supports_keyboard_enhancement() {
            Ok(true) => {
                stdout().execute(PushKeyboardEnhancementFlags(
                    KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
                ))?;
                true
            },
            Ok(false) => false,
            Err(error) => {
                tracing::warn!(%error, "could not query keyboard enhancement support");
                false
            },
        };
        tracing::info!(reports_release, "terminal ready");

        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        Ok(Self { terminal, reports_release })
    }

    /// Whether the terminal sends key release events.
    pub fn reports_release(&self) -> bool {
        self.reports_release
    }

    /// Current drawable area.
    pub fn area(&self) -> Result<Rect, TerminalError> {
        let size = self.terminal.size()?;
        Ok(Rect::new(0, 0, size.width, size.height))
    }

    /// Draw one frame.
    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<(), TerminalError> {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        if self.reports_release {
            let _ = stdout().execute(PopKeyboardEnhancementFlags);
        }
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}
