//! # ListPane Component
//!
//! Bordered view of one [`ListPane`]. Rows come from `ListPane::rows()`;
//! this component only adds the border, the title, truncation, and keeps
//! the cursor row in view when the list is taller than the pane.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::pane::ListPane;
use crate::tui::component::{Component, border_style};

pub struct ListPaneView<'a> {
    pub pane: &'a ListPane,
}

impl<'a> ListPaneView<'a> {
    pub fn new(pane: &'a ListPane) -> Self {
        Self { pane }
    }

    fn title(&self) -> String {
        let selected = self.pane.selected_labels().len();
        if self.pane.is_menu() && selected > 0 {
            format!(" {} ({} selected) ", self.pane.title, selected)
        } else {
            format!(" {} ", self.pane.title)
        }
    }
}

/// First row to show so the cursor stays visible.
fn first_visible_row(cursor: usize, visible: usize) -> usize {
    if visible == 0 {
        0
    } else {
        (cursor + 1).saturating_sub(visible)
    }
}

/// Truncate to `max_width` display columns, ending with "…" if cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

impl<'a> Component for ListPaneView<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self.pane.is_focused();
        let block = Block::bordered()
            .title(self.title())
            .border_style(border_style(focused));

        let inner_width = usize::from(area.width.saturating_sub(2));
        let visible = usize::from(area.height.saturating_sub(2));
        let skip = first_visible_row(self.pane.cursor(), visible);

        let lines: Vec<Line> = self
            .pane
            .rows()
            .into_iter()
            .enumerate()
            .skip(skip)
            .take(visible)
            .map(|(i, row)| {
                let text = truncate_to_width(&row, inner_width);
                if focused && i == self.pane.cursor() {
                    Line::styled(text, Style::default().add_modifier(Modifier::BOLD))
                } else {
                    Line::raw(text)
                }
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pane::{Direction, PaneKind};
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(pane: &ListPane, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                ListPaneView::new(pane).render(f, area);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect::<String>()
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("longer label", 6), "longe…");
        assert_eq!(truncate_to_width("abc", 0), "");
        // Wide characters count double.
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
    }

    #[test]
    fn test_first_visible_row_keeps_cursor_in_view() {
        assert_eq!(first_visible_row(0, 3), 0);
        assert_eq!(first_visible_row(2, 3), 0);
        assert_eq!(first_visible_row(5, 3), 3);
        assert_eq!(first_visible_row(5, 0), 0);
    }

    #[test]
    fn test_render_focused_menu() {
        let mut app = test_app();
        app.panes[0].toggle_selection();
        let text = render_text(&app.panes[0], 30, 6);
        assert!(text.contains("Pane 1 (1 selected)"));
        assert!(text.contains("> [x] Option A"));
        assert!(text.contains("  [ ] Option B"));
    }

    #[test]
    fn test_render_command_pane_has_no_checkbox() {
        let app = test_app();
        let text = render_text(&app.panes[2], 30, 7);
        assert!(text.contains("Commands"));
        assert!(text.contains("Cmd 1"));
        assert!(!text.contains("[ ]"));
        // Unfocused: no cursor marker.
        assert!(!text.contains(">"));
    }

    #[test]
    fn test_render_scrolls_to_cursor() {
        let labels: Vec<String> = (0..10).map(|i| format!("row {i}")).collect();
        let mut pane = ListPane::new("Tall", PaneKind::Command, labels);
        pane.set_focused(true);
        for _ in 0..8 {
            pane.move_cursor(Direction::Down);
        }
        let text = render_text(&pane, 20, 5);
        assert!(text.contains("> row 8"));
        assert!(!text.contains("row 0"));
    }
}
