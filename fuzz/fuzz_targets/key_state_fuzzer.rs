//! Fuzz target for the edge-triggered key state
//!
//! # Strategy
//!
//! - Several keys aliased onto one action, plus unbound keys
//! - Arbitrary down/up interleavings per frame, including auto-repeat
//!   downs and ups of keys that are not down
//! - Both release policies
//!
//! # Invariants
//!
//! - Every phase change is a legal transition, so each edge lasts exactly
//!   one update and edges alternate
//! - Under all-keys-up, an action whose bound key stayed down for a whole
//!   quiet frame is down
//! - Three quiet frames after everything is released leave every action idle
//! - Lookups of bound actions never fail

#![no_main]

use std::collections::HashSet;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use menuframe_core::{EventQueue, Key, KeyPhase, KeyState, RawEvent, ReleasePolicy};

const KEYS: [Key; 4] = [Key::Up, Key::Char('w'), Key::Down, Key::Tab];
const BINDINGS: [(Key, &str); 3] = [(Key::Up, "up"), (Key::Char('w'), "up"), (Key::Down, "down")];

#[derive(Debug, Clone, Arbitrary)]
struct Scenario {
    any_key_up: bool,
    frames: Vec<Vec<(u8, bool)>>,
}

fn phase(keys: &KeyState<EventQueue>, action: &str) -> KeyPhase {
    match keys.lookup(action) {
        Ok(phase) => phase,
        Err(err) => panic!("bound action failed lookup: {err}"),
    }
}

fn legal(from: KeyPhase, to: KeyPhase) -> bool {
    use KeyPhase::{Held, Idle, JustPressed, JustReleased};
    matches!(
        (from, to),
        (Idle, Idle | JustPressed)
            | (JustPressed | Held, Held | JustReleased)
            | (JustReleased, Idle | JustPressed)
    )
}

fuzz_target!(|scenario: Scenario| {
    let policy =
        if scenario.any_key_up { ReleasePolicy::AnyKeyUp } else { ReleasePolicy::AllKeysUp };
    let mut keys = KeyState::new(EventQueue::new(), BINDINGS).with_release_policy(policy);
    let mut held: HashSet<Key> = HashSet::new();
    let mut last = [KeyPhase::Idle; 2];

    let mut check = |keys: &KeyState<EventQueue>| {
        for (slot, action) in ["up", "down"].into_iter().enumerate() {
            let now = phase(keys, action);
            assert!(legal(last[slot], now), "{action}: {:?} -> {now:?}", last[slot]);
            last[slot] = now;
        }
    };

    for frame in scenario.frames {
        for (index, down) in frame {
            let key = KEYS[usize::from(index) % KEYS.len()];
            if down {
                held.insert(key);
                keys.source_mut().push(RawEvent::down(key));
            } else {
                held.remove(&key);
                keys.source_mut().push(RawEvent::up(key));
            }
        }
        keys.update();
        check(&keys);
    }

    // Let deferred edges drain with the keys still held.
    for _ in 0..3 {
        keys.update();
        check(&keys);
    }
    if policy == ReleasePolicy::AllKeysUp {
        for (key, action) in BINDINGS {
            if held.contains(&key) {
                assert!(phase(&keys, action).is_down(), "{action} up while {key:?} held");
            }
        }
    }

    for key in held.drain() {
        keys.source_mut().push(RawEvent::up(key));
    }
    for _ in 0..4 {
        keys.update();
        check(&keys);
    }

    for action in ["up", "down"] {
        assert_eq!(phase(&keys, action), KeyPhase::Idle, "{action} did not settle");
    }
});
