//! Property-based tests for the key state machine.

use menuframe_core::{EventQueue, Key, KeyPhase, KeyState, RawEvent, ReleasePolicy};
use proptest::prelude::*;

fn keys(policy: ReleasePolicy) -> KeyState<EventQueue> {
    KeyState::new(EventQueue::new(), [
        (Key::Enter, "fire"),
        (Key::Char('a'), "hit"),
        (Key::Char('b'), "hit"),
    ])
    .with_release_policy(policy)
}

/// Frames of raw input for a script of `(hold, gap)` presses.
///
/// `hold == 0` is a tap: press and release inside one frame. `gap` idle
/// frames follow each press, so presses may land on back-to-back frames. At
/// most two taps run back to back; longer runs merge pairs.
fn script(presses: &[(u8, u8)]) -> Vec<Vec<RawEvent>> {
    let mut frames = Vec::new();
    let mut tap_run = 0;
    for &(hold, gap) in presses {
        let mut gap = gap;
        if hold == 0 {
            frames.push(vec![RawEvent::down(Key::Enter), RawEvent::up(Key::Enter)]);
            tap_run += 1;
            if tap_run >= 2 {
                gap = gap.max(1);
            }
        } else {
            frames.push(vec![RawEvent::down(Key::Enter)]);
            frames.extend((1..hold).map(|_| Vec::new()));
            frames.push(vec![RawEvent::up(Key::Enter)]);
            tap_run = 0;
        }
        if gap > 0 {
            tap_run = 0;
        }
        frames.extend((0..gap).map(|_| Vec::new()));
    }
    frames
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

proptest! {
    /// A single-key action reports exactly one just-pressed and one
    /// just-released edge per press, each lasting exactly one update, even
    /// when presses land on consecutive frames.
    #[test]
    fn single_key_cycles_once_per_press(
        presses in prop::collection::vec((0u8..4, 0u8..4), 1..20),
        policy in prop_oneof![Just(ReleasePolicy::AllKeysUp), Just(ReleasePolicy::AnyKeyUp)],
    ) {
        let mut keys = keys(policy);

        let mut observed = vec![KeyPhase::Idle];
        for frame in script(&presses).into_iter().chain((0..3).map(|_| Vec::new())) {
            keys.source_mut().extend(frame);
            keys.update();
            observed.push(keys.lookup("fire").expect("bound"));
        }

        for pair in observed.windows(2) {
            prop_assert!(legal(pair[0], pair[1]), "{:?} -> {:?}", pair[0], pair[1]);
        }
        let count = |phase| observed.iter().filter(|&&p| p == phase).count();
        prop_assert_eq!(count(KeyPhase::JustPressed), presses.len());
        prop_assert_eq!(count(KeyPhase::JustReleased), presses.len());
        prop_assert_eq!(observed.last().copied(), Some(KeyPhase::Idle));
    }

    /// Keys bound to other actions never disturb an action's state.
    #[test]
    fn unrelated_keys_do_not_disturb(noise in prop::collection::vec(any::<bool>(), 0..30)) {
        let mut keys = keys(ReleasePolicy::AllKeysUp);
        keys.source_mut().push(RawEvent::down(Key::Enter));
        keys.update();

        for down in noise {
            let event = if down { RawEvent::down(Key::Char('a')) } else { RawEvent::up(Key::Char('a')) };
            keys.source_mut().push(event);
            keys.update();
            prop_assert_eq!(keys.lookup("fire").expect("bound"), KeyPhase::Held);
        }
    }
}

fn alias_phases(policy: ReleasePolicy) -> Vec<KeyPhase> {
    let mut keys = keys(policy);
    let frames = [
        RawEvent::down(Key::Char('a')),
        RawEvent::down(Key::Char('b')),
        RawEvent::up(Key::Char('a')),
        RawEvent::up(Key::Char('b')),
    ];

    let mut phases = Vec::new();
    for event in frames {
        keys.source_mut().push(event);
        keys.update();
        phases.push(keys.lookup("hit").expect("bound"));
    }
    keys.update();
    phases.push(keys.lookup("hit").expect("bound"));
    phases
}

#[test]
fn aliased_action_released_by_last_key_up() {
    assert_eq!(alias_phases(ReleasePolicy::AllKeysUp), vec![
        KeyPhase::JustPressed,
        KeyPhase::Held,
        KeyPhase::Held,
        KeyPhase::JustReleased,
        KeyPhase::Idle,
    ]);
}

#[test]
fn aliased_action_released_by_first_key_up() {
    assert_eq!(alias_phases(ReleasePolicy::AnyKeyUp), vec![
        KeyPhase::JustPressed,
        KeyPhase::Held,
        KeyPhase::JustReleased,
        KeyPhase::Idle,
        KeyPhase::Idle,
    ]);
}
