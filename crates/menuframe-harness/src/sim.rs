//! Scripted frame driver.
//!
//! [`Sim`] runs the same frame loop a frontend runs
//! (`KeyState::update -> Menu::update -> Menu::render`) against an
//! in-memory event queue and a [`RecordingSurface`], checking invariants
//! after every frame.

use menuframe_core::{EventQueue, Key, KeyState, Menu, MenuError, MenuEvent, RawEvent};
use thiserror::Error;

use crate::{
    invariants::{InvariantRegistry, MenuSnapshot, Violation},
    metrics::FixedMetrics,
    scenario::Operation,
    surface::RecordingSurface,
};

/// Failure of a simulated frame.
#[derive(Debug, Error)]
pub enum SimError {
    /// The menu itself failed.
    #[error(transparent)]
    Menu(#[from] MenuError),

    /// The frame left the menu in a state an invariant forbids.
    #[error("frame {frame}: {}", describe(.violations))]
    Invariant {
        /// Frame the violation was observed after.
        frame: u64,
        /// Every violated invariant.
        violations: Vec<Violation>,
    },
}

fn describe(violations: &[Violation]) -> String {
    violations.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

/// Deterministic frame loop over a fixed-metric menu.
pub struct Sim {
    menu: Menu<FixedMetrics>,
    keys: KeyState<EventQueue>,
    surface: RecordingSurface,
    factory: FixedMetrics,
    invariants: Option<InvariantRegistry>,
    events: Vec<MenuEvent>,
}

impl Sim {
    /// Drive `menu` with `keys`. The menu is arranged by [`Sim::start`].
    pub fn new(menu: Menu<FixedMetrics>, keys: KeyState<EventQueue>) -> Self {
        Self {
            menu,
            keys,
            surface: RecordingSurface::new(),
            factory: FixedMetrics,
            invariants: None,
            events: Vec::new(),
        }
    }

    /// Check `registry` after every frame.
    #[must_use]
    pub fn with_invariants(mut self, registry: InvariantRegistry) -> Self {
        self.invariants = Some(registry);
        self
    }

    /// Arrange the menu and render the first frame.
    pub fn start(&mut self) -> Result<Vec<MenuEvent>, SimError> {
        let events = self.menu.arrange()?;
        self.surface.begin_frame();
        self.menu.render(&mut self.surface, &self.factory);
        self.check()?;
        self.events.extend(events.iter().copied());
        Ok(events)
    }

    /// Run one frame over whatever raw events are queued.
    pub fn frame(&mut self) -> Result<Vec<MenuEvent>, SimError> {
        self.keys.update();
        let events = self.menu.update(&mut self.keys)?;
        self.surface.begin_frame();
        self.menu.render(&mut self.surface, &self.factory);
        self.check()?;

        tracing::trace!(frame = self.surface.frame(), events = events.len(), "simulated frame");
        self.events.extend(events.iter().copied());
        Ok(events)
    }

    /// Queue raw events for the next frame.
    pub fn queue(&mut self, events: impl IntoIterator<Item = RawEvent>) {
        self.keys.source_mut().extend(events);
    }

    /// Press and release `key` within one frame, then run one idle frame
    /// so the deferred release edge is reported before the next input.
    /// Returns the events of both frames.
    pub fn tap(&mut self, key: Key) -> Result<Vec<MenuEvent>, SimError> {
        self.queue([RawEvent::down(key), RawEvent::up(key)]);
        let mut events = self.frame()?;
        events.extend(self.frame()?);
        Ok(events)
    }

    /// Press `key` and keep it down.
    pub fn hold(&mut self, key: Key) -> Result<Vec<MenuEvent>, SimError> {
        self.queue([RawEvent::down(key)]);
        self.frame()
    }

    /// Release `key`.
    pub fn release(&mut self, key: Key) -> Result<Vec<MenuEvent>, SimError> {
        self.queue([RawEvent::up(key)]);
        self.frame()
    }

    /// Type `text`, one character per frame. Returns every event produced.
    pub fn type_text(&mut self, text: &str) -> Result<Vec<MenuEvent>, SimError> {
        let mut events = Vec::new();
        for ch in text.chars() {
            self.queue([RawEvent::typed(ch), RawEvent::up(Key::Char(ch))]);
            events.extend(self.frame()?);
        }
        Ok(events)
    }

    /// Apply one scripted operation as one frame.
    pub fn apply(&mut self, op: Operation) -> Result<Vec<MenuEvent>, SimError> {
        self.queue(op.raw_events());
        self.frame()
    }

    /// Apply every operation in order, stopping at the first failure.
    pub fn run(&mut self, ops: impl IntoIterator<Item = Operation>) -> Result<(), SimError> {
        for op in ops {
            self.apply(op)?;
        }
        Ok(())
    }

    fn check(&self) -> Result<(), SimError> {
        let Some(registry) = &self.invariants else {
            return Ok(());
        };
        registry
            .check_all(&self.snapshot())
            .map_err(|violations| SimError::Invariant { frame: self.surface.frame(), violations })
    }

    /// Observable menu state.
    pub fn snapshot(&self) -> MenuSnapshot {
        MenuSnapshot::from_menu(&self.menu)
    }

    /// The driven menu.
    pub fn menu(&self) -> &Menu<FixedMetrics> {
        &self.menu
    }

    /// Mutable driven menu.
    pub fn menu_mut(&mut self) -> &mut Menu<FixedMetrics> {
        &mut self.menu
    }

    /// The key state.
    pub fn keys(&self) -> &KeyState<EventQueue> {
        &self.keys
    }

    /// Recorded draws.
    pub fn surface(&self) -> &RecordingSurface {
        &self.surface
    }

    /// Every event since [`Sim::start`].
    pub fn events(&self) -> &[MenuEvent] {
        &self.events
    }
}
