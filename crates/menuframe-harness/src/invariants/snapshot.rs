//! Observable menu state for invariant checking.

use menuframe_core::{ContentFactory, Menu, OptionId, Point, Size};

/// Snapshot of a menu between frames.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuSnapshot {
    /// Selected index.
    pub index: usize,
    /// Whether the navigator lock is held.
    pub locked: bool,
    /// Options in layout order.
    pub options: Vec<OptionSnapshot>,
}

/// Snapshot of one option.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionSnapshot {
    /// Option id.
    pub id: OptionId,
    /// Whether navigation may stop on it.
    pub selectable: bool,
    /// Whether it is a focused text entry.
    pub focused: bool,
    /// Top-left corner.
    pub position: Point,
    /// Laid-out size.
    pub size: Size,
}

impl MenuSnapshot {
    /// Snapshot with no options.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Capture `menu`.
    pub fn from_menu<F: ContentFactory>(menu: &Menu<F>) -> Self {
        Self {
            index: menu.index(),
            locked: menu.is_locked(),
            options: menu
                .options()
                .iter()
                .map(|option| OptionSnapshot {
                    id: option.id(),
                    selectable: option.is_selectable(),
                    focused: option.delegate().is_focused(),
                    position: option.position(),
                    size: option.size(),
                })
                .collect(),
        }
    }

    /// Selected option. `None` if the menu is empty.
    pub fn selected(&self) -> Option<&OptionSnapshot> {
        self.options.get(self.index)
    }

    /// Focused text entries.
    pub fn focused(&self) -> impl Iterator<Item = &OptionSnapshot> {
        self.options.iter().filter(|option| option.focused)
    }
}
