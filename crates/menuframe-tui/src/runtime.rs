//! Frame loop
//!
//! Fixed-rate loop: drain terminal input, advance the key state, run the
//! showing menu, draw. Stops when `quit` is activated or on Ctrl-C.

use std::{
    thread,
    time::{Duration, Instant},
};

use menuframe_core::{KeyState, MenuConfig, ReleasePolicy};

use crate::{
    demo::{self, Demo},
    input::TerminalInput,
    surface::TermViewport,
    terminal::{TerminalError, Tui},
    ui,
};

/// Runtime settings.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Menu layout.
    pub menu: MenuConfig,
    /// Release policy for actions bound to several keys.
    pub release_policy: ReleasePolicy,
    /// Target frames per second.
    pub fps: u32,
}

/// Owns the terminal, the key state, and the demo.
pub struct Runtime {
    tui: Tui,
    keys: KeyState<TerminalInput>,
    demo: Demo,
    frame_time: Duration,
}

impl Runtime {
    /// Take over the terminal and build the demo for its current size.
    pub fn new(config: RuntimeConfig) -> Result<Self, TerminalError> {
        let tui = Tui::new()?;
        let (menu_area, _) = ui::areas(tui.area()?);
        let demo = Demo::new(config.menu, &TermViewport(menu_area))?;
        let keys = demo::bindings(TerminalInput::new(tui.reports_release()), config.release_policy);
        let frame_time = Duration::from_secs(1) / config.fps.max(1);

        Ok(Self { tui, keys, demo, frame_time })
    }

    /// Run until quit.
    pub fn run(mut self) -> Result<(), TerminalError> {
        let mut frames: u64 = 0;
        loop {
            let started = Instant::now();

            self.keys.source_mut().pump()?;
            if self.keys.source().interrupted() {
                break;
            }
            self.keys.update();
            self.demo.update(&mut self.keys)?;
            if self.demo.should_quit() {
                break;
            }

            let demo = &mut self.demo;
            self.tui.draw(|frame| ui::render(frame, demo))?;
            frames += 1;

            if let Some(rest) = self.frame_time.checked_sub(started.elapsed()) {
                thread::sleep(rest);
            }
        }

        tracing::info!(frames, name = ?self.demo.name(), "runtime stopped");
        Ok(())
    }
}
