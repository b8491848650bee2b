//! Deterministic frame simulation for menuframe testing.
//!
//! Drives real [`menuframe_core::Menu`]s through the production frame loop
//! with scripted input, fixed-metric text rendering, and a recording render
//! surface, so tests can assert on exact positions and draw logs.
//!
//! # Invariant Testing
//!
//! The `invariants` module provides behavioral testing through invariant
//! checks. Invariants verify WHAT must be true after every frame, not
//! specific scenarios. Use [`InvariantRegistry::standard()`] for the
//! navigator invariants and [`Sim::with_invariants`] to check them after
//! each simulated frame.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod invariants;
pub mod metrics;
pub mod scenario;
pub mod sim;
pub mod surface;

pub use invariants::{
    IndexInRange, Invariant, InvariantRegistry, InvariantResult, LockMatchesFocus, MenuSnapshot,
    OptionSnapshot, SelectionSelectable, SingleFocus, Violation,
};
pub use metrics::{Bitmap, Face, FixedMetrics, Rgb};
pub use scenario::{NavKey, Operation, sample_menu, standard_keys};
pub use sim::{Sim, SimError};
pub use surface::{DrawCall, RecordingSurface};
