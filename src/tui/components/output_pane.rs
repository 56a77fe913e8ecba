//! # OutputPane Component
//!
//! Full-width view of the output buffer snapshot. Text is wrapped to the
//! inner width, then the window given by [`OutputScroll`] is shown. The
//! title carries the connection status.

use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::core::output::{OutputScroll, wrapped_lines};
use crate::core::state::LinkStatus;
use crate::tui::component::{Component, border_style};

pub struct OutputPane<'a> {
    pub text: &'a str,
    pub scroll: OutputScroll,
    pub focused: bool,
    pub link: LinkStatus,
}

impl<'a> Component for OutputPane<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = if self.scroll.follow {
            format!(" Output [{}] ", self.link)
        } else {
            format!(" Output [{}] (scrolled) ", self.link)
        };
        let block = Block::bordered()
            .title(title)
            .border_style(border_style(self.focused));

        let lines = wrapped_lines(self.text, area.width.saturating_sub(2));
        let visible = usize::from(area.height.saturating_sub(2));
        let top = self.scroll.effective_offset(lines.len(), visible);

        let shown: Vec<Line> = lines
            .into_iter()
            .skip(top)
            .take(visible)
            .map(Line::raw)
            .collect();

        frame.render_widget(Paragraph::new(shown).block(block), area);
    }
}
