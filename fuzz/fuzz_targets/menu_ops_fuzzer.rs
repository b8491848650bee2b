//! Fuzz target for menu navigation under arbitrary input scripts
//!
//! # Strategy
//!
//! - Taps, holds, and releases of every navigation key, in any order
//! - Typed characters while an entry is focused and while it is not
//! - Idle frames between edges
//!
//! # Invariants
//!
//! - The standard invariant registry holds after every frame
//! - Every option is drawn every frame, locked or not
//! - No callback in the sample menu ever fails

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use menuframe_core::Size;
use menuframe_harness::{InvariantRegistry, Operation, Sim, sample_menu, standard_keys};

#[derive(Debug, Clone, Arbitrary)]
struct Script {
    ops: Vec<Operation>,
}

fuzz_target!(|script: Script| {
    let menu = sample_menu(Size::new(500.0, 500.0));
    let option_count = menu.len();
    let mut sim = Sim::new(menu, standard_keys()).with_invariants(InvariantRegistry::standard());

    if let Err(err) = sim.start() {
        panic!("start failed: {err}");
    }

    for op in script.ops {
        if let Err(err) = sim.apply(op) {
            panic!("{op:?} failed: {err}");
        }
        assert_eq!(sim.surface().last_frame().count(), option_count, "{op:?} skipped a draw");
    }
});
