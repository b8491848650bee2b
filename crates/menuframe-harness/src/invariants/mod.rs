//! Invariant checking for deterministic frame simulation.
//!
//! Invariants are properties that must hold after every frame, whatever
//! input produced it. The harness extracts the observable state of a menu
//! into a [`MenuSnapshot`], then runs registered [`Invariant`] checks
//! against it.
//!
//! # Usage
//!
//! ```ignore
//! let registry = InvariantRegistry::standard();
//! let snapshot = MenuSnapshot::from_menu(&menu);
//! registry.check_all(&snapshot)?;
//! ```

mod checks;
mod snapshot;

use std::fmt;

pub use checks::{IndexInRange, LockMatchesFocus, SelectionSelectable, SingleFocus};
pub use snapshot::{MenuSnapshot, OptionSnapshot};

/// Invariant check result.
pub type InvariantResult = Result<(), Violation>;

/// Invariant violation with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Name of the violated invariant.
    pub invariant: &'static str,
    /// Description of what went wrong.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.invariant, self.message)
    }
}

impl std::error::Error for Violation {}

/// A property checked against a menu snapshot.
pub trait Invariant {
    /// Invariant name for error reporting.
    fn name(&self) -> &'static str;

    /// Check the invariant against `state`.
    fn check(&self, state: &MenuSnapshot) -> InvariantResult;
}

/// Registry of invariants to check.
#[derive(Default)]
pub struct InvariantRegistry {
    invariants: Vec<Box<dyn Invariant>>,
}

impl InvariantRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the navigator invariants.
    ///
    /// Includes:
    /// - [`IndexInRange`]: the index addresses an option
    /// - [`SelectionSelectable`]: the selection never rests on a label
    /// - [`LockMatchesFocus`]: locked exactly while an entry is focused
    /// - [`SingleFocus`]: at most one entry is focused
    ///
    /// [`LockMatchesFocus`] assumes text entries are the only lock holders;
    /// drop it for menus whose callbacks lock the navigator themselves.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.add(IndexInRange);
        registry.add(SelectionSelectable);
        registry.add(LockMatchesFocus);
        registry.add(SingleFocus);
        registry
    }

    /// Add an invariant.
    pub fn add<I: Invariant + 'static>(&mut self, invariant: I) {
        self.invariants.push(Box::new(invariant));
    }

    /// Check all invariants, collecting every violation.
    pub fn check_all(&self, state: &MenuSnapshot) -> Result<(), Vec<Violation>> {
        let violations: Vec<_> =
            self.invariants.iter().filter_map(|inv| inv.check(state).err()).collect();

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }

    /// Check all invariants, panicking with every violation.
    #[allow(clippy::panic, reason = "test assertion helper")]
    pub fn assert_all(&self, state: &MenuSnapshot, context: &str) {
        if let Err(violations) = self.check_all(state) {
            let messages: Vec<_> = violations.iter().map(ToString::to_string).collect();
            panic!("invariant violation {context}:\n  {}", messages.join("\n  "));
        }
    }

    /// Number of registered invariants.
    pub fn len(&self) -> usize {
        self.invariants.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.invariants.is_empty()
    }
}

impl fmt::Debug for InvariantRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.invariants.iter().map(|inv| inv.name())).finish()
    }
}
