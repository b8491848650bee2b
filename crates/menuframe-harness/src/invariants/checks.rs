//! Standard navigator invariants.

use super::{Invariant, InvariantResult, MenuSnapshot, Violation};

/// The index addresses an option.
///
/// An empty menu has nothing to address and always passes.
pub struct IndexInRange;

impl Invariant for IndexInRange {
    fn name(&self) -> &'static str {
        "index_in_range"
    }

    fn check(&self, state: &MenuSnapshot) -> InvariantResult {
        if state.options.is_empty() || state.index < state.options.len() {
            return Ok(());
        }
        Err(Violation {
            invariant: self.name(),
            message: format!("index {} with {} options", state.index, state.options.len()),
        })
    }
}

/// The selection rests on a selectable option whenever one exists.
pub struct SelectionSelectable;

impl Invariant for SelectionSelectable {
    fn name(&self) -> &'static str {
        "selection_selectable"
    }

    fn check(&self, state: &MenuSnapshot) -> InvariantResult {
        if !state.options.iter().any(|option| option.selectable) {
            return Ok(());
        }
        match state.selected() {
            Some(option) if !option.selectable => Err(Violation {
                invariant: self.name(),
                message: format!("selection rests on label {}", option.id),
            }),
            _ => Ok(()),
        }
    }
}

/// The navigator is locked exactly while a text entry holds focus.
pub struct LockMatchesFocus;

impl Invariant for LockMatchesFocus {
    fn name(&self) -> &'static str {
        "lock_matches_focus"
    }

    fn check(&self, state: &MenuSnapshot) -> InvariantResult {
        let focused = state.focused().next().is_some();
        if focused == state.locked {
            return Ok(());
        }
        Err(Violation {
            invariant: self.name(),
            message: format!("locked = {}, focused entry = {focused}", state.locked),
        })
    }
}

/// At most one text entry holds focus.
pub struct SingleFocus;

impl Invariant for SingleFocus {
    fn name(&self) -> &'static str {
        "single_focus"
    }

    fn check(&self, state: &MenuSnapshot) -> InvariantResult {
        let focused: Vec<_> = state.focused().map(|option| option.id).collect();
        if focused.len() <= 1 {
            return Ok(());
        }
        Err(Violation {
            invariant: self.name(),
            message: format!("{} entries focused: {focused:?}", focused.len()),
        })
    }
}

#[cfg(test)]
mod tests {
    use menuframe_core::{OptionId, Point, Size};

    use super::*;
    use crate::invariants::OptionSnapshot;

    fn option(raw: u32, selectable: bool, focused: bool) -> OptionSnapshot {
        OptionSnapshot {
            id: OptionId::new(raw),
            selectable,
            focused,
            position: Point::ORIGIN,
            size: Size::new(10.0, 10.0),
        }
    }

    #[test]
    fn index_past_end_is_a_violation() {
        let state = MenuSnapshot { index: 2, locked: false, options: vec![option(0, true, false)] };
        assert!(IndexInRange.check(&state).is_err());
    }

    #[test]
    fn selection_on_label_is_a_violation() {
        let state = MenuSnapshot {
            index: 0,
            locked: false,
            options: vec![option(0, false, false), option(1, true, false)],
        };
        let violation = SelectionSelectable.check(&state).unwrap_err();
        assert_eq!(violation.invariant, "selection_selectable");
    }

    #[test]
    fn all_labels_pass_selection_check() {
        let state = MenuSnapshot { index: 0, locked: false, options: vec![option(0, false, false)] };
        assert!(SelectionSelectable.check(&state).is_ok());
    }

    #[test]
    fn lock_without_focus_is_a_violation() {
        let state = MenuSnapshot { index: 0, locked: true, options: vec![option(0, true, false)] };
        assert!(LockMatchesFocus.check(&state).is_err());

        let state = MenuSnapshot { index: 0, locked: true, options: vec![option(0, true, true)] };
        assert!(LockMatchesFocus.check(&state).is_ok());
    }

    #[test]
    fn two_focused_entries_is_a_violation() {
        let state = MenuSnapshot {
            index: 0,
            locked: true,
            options: vec![option(0, true, true), option(1, true, true)],
        };
        assert!(SingleFocus.check(&state).is_err());
    }
}
