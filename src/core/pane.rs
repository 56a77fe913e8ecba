//! # List Panes
//!
//! A pane is a titled, navigable list. Two kinds exist:
//!
//! - [`PaneKind::Menu`]: items carry a checkbox the user toggles with Space.
//! - [`PaneKind::Command`]: items are one-shot commands dispatched with Enter.
//!
//! A pane never decides whether it holds focus. `FocusController` sets the
//! flag; the pane only reads it.

/// Number of rows a PageUp/PageDown moves the cursor.
pub const PAGE_STEP: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneKind {
    Menu,
    Command,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    label: String,
    pub selected: bool,
}

impl ListItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            selected: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Keys a focused list pane handles on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneKey {
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    /// Anything the pane has no binding for. Absorbed.
    Other,
}

#[derive(Debug, Clone)]
pub struct ListPane {
    pub title: String,
    pub kind: PaneKind,
    items: Vec<ListItem>,
    cursor: usize,
    focused: bool,
}

impl ListPane {
    pub fn new<I, S>(title: impl Into<String>, kind: PaneKind, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            kind,
            items: labels.into_iter().map(ListItem::new).collect(),
            cursor: 0,
            focused: false,
        }
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_menu(&self) -> bool {
        self.kind == PaneKind::Menu
    }

    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn last_index(&self) -> usize {
        self.items.len().saturating_sub(1)
    }

    /// Move one row, clamped to the list bounds.
    pub fn move_cursor(&mut self, direction: Direction) {
        self.cursor = match direction {
            Direction::Up => self.cursor.saturating_sub(1),
            Direction::Down => (self.cursor + 1).min(self.last_index()),
        };
    }

    pub fn handle_key(&mut self, key: PaneKey) {
        match key {
            PaneKey::Up => self.move_cursor(Direction::Up),
            PaneKey::Down => self.move_cursor(Direction::Down),
            PaneKey::PageUp => self.cursor = self.cursor.saturating_sub(PAGE_STEP),
            PaneKey::PageDown => self.cursor = (self.cursor + PAGE_STEP).min(self.last_index()),
            PaneKey::Home => self.cursor = 0,
            PaneKey::End => self.cursor = self.last_index(),
            PaneKey::Other => {}
        }
    }

    /// Flip the checkbox under the cursor. Only focused, non-empty menu
    /// panes react; everything else ignores the key.
    pub fn toggle_selection(&mut self) -> bool {
        if self.kind != PaneKind::Menu || !self.focused {
            return false;
        }
        match self.items.get_mut(self.cursor) {
            Some(item) => {
                item.selected = !item.selected;
                true
            }
            None => false,
        }
    }

    /// Label under the cursor, or `""` for an empty pane.
    pub fn current_label(&self) -> &str {
        self.items
            .get(self.cursor)
            .map(ListItem::label)
            .unwrap_or("")
    }

    pub fn selected_labels(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter(|item| item.selected)
            .map(ListItem::label)
            .collect()
    }

    /// Display rows: cursor marker, checkbox (menus only), label.
    pub fn rows(&self) -> Vec<String> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let marker = if self.focused && i == self.cursor { '>' } else { ' ' };
                match self.kind {
                    PaneKind::Menu => {
                        let checkbox = if item.selected { "[x]" } else { "[ ]" };
                        format!("{marker} {checkbox} {}", item.label)
                    }
                    PaneKind::Command => format!("{marker} {}", item.label),
                }
            })
            .collect()
    }
}
