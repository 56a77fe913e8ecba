use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::Frame;

/// A reusable UI component.
///
/// Components receive data via props (struct fields) and render to a
/// `Frame` within a given `Rect`. They are built fresh every frame from
/// borrowed state, so rendering never mutates the dashboard.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Border style for a pane, highlighted when it holds focus.
pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Indexed(205))
    } else {
        Style::default().fg(Color::DarkGray)
    }
}
