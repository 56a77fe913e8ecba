use ratatui::Frame;
use ratatui::layout::Rect;

use crate::core::layout::Region;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{ListPaneView, OutputPane};

fn to_rect(region: Region, bounds: Rect) -> Rect {
    Rect::new(region.x, region.y, region.width, region.height).intersection(bounds)
}

/// Draw the whole dashboard from the current state.
///
/// The output buffer lock is held only while its text is copied; all
/// wrapping and layout happens on the copy.
pub fn draw_ui(frame: &mut Frame, app: &App) {
    let bounds = frame.area();
    let output_text = app.output.snapshot();

    for (pane, region) in app.panes.iter().zip(&app.layout.panes) {
        let area = to_rect(*region, bounds);
        if area.is_empty() {
            continue;
        }
        ListPaneView::new(pane).render(frame, area);
    }

    let area = to_rect(app.layout.output, bounds);
    if !area.is_empty() {
        OutputPane {
            text: &output_text,
            scroll: app.output_scroll,
            focused: app.focus.output_focused(),
            link: app.link,
        }
        .render(frame, area);
    }
}
