//! # Dashboard State
//!
//! Everything the event loop owns, in one struct.
//!
//! ```text
//! App
//! ├── panes: Vec<ListPane>        // top row, left to right
//! ├── focus: FocusController      // which pane (or the output) gets keys
//! ├── output: OutputBuffer        // shared with the reader task
//! ├── output_scroll: OutputScroll // output viewport position
//! ├── viewport: Viewport          // last known terminal size
//! ├── layout: DashboardLayout     // recomputed on every resize
//! ├── link: LinkStatus            // connection state shown in the output title
//! └── running: bool               // false once a quit transition fired
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::fmt;

use crate::core::config::ResolvedConfig;
use crate::core::focus::{FocusController, FocusTarget};
use crate::core::layout::{DashboardLayout, Viewport, compute_layout};
use crate::core::output::{OutputBuffer, OutputScroll, wrapped_lines};
use crate::core::pane::ListPane;

/// Command label that quits instead of being sent.
pub const EXIT_COMMAND: &str = "Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    Connecting,
    Connected,
    /// Commands go out but nothing comes back.
    WriteOnly,
    Disconnected,
}

impl fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkStatus::Connecting => write!(f, "connecting"),
            LinkStatus::Connected => write!(f, "connected"),
            LinkStatus::WriteOnly => write!(f, "write-only"),
            LinkStatus::Disconnected => write!(f, "disconnected"),
        }
    }
}

pub struct App {
    pub panes: Vec<ListPane>,
    pub focus: FocusController,
    pub output: OutputBuffer,
    pub output_scroll: OutputScroll,
    pub viewport: Viewport,
    pub layout: DashboardLayout,
    pub link: LinkStatus,
    pub running: bool,
}

impl App {
    pub fn new(mut panes: Vec<ListPane>, output: OutputBuffer) -> Self {
        let focus = FocusController::new(&mut panes);
        let viewport = Viewport::DEFAULT;
        let layout = compute_layout(panes.len(), viewport);
        Self {
            panes,
            focus,
            output,
            output_scroll: OutputScroll::default(),
            viewport,
            layout,
            link: LinkStatus::Connecting,
            running: true,
        }
    }

    pub fn from_config(config: &ResolvedConfig, output: OutputBuffer) -> Self {
        let panes = config.panes.iter().map(|entry| entry.build()).collect();
        Self::new(panes, output)
    }

    pub fn focused_pane(&self) -> Option<&ListPane> {
        match self.focus.current() {
            FocusTarget::Pane(i) => self.panes.get(i),
            FocusTarget::Output => None,
        }
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.layout = compute_layout(self.panes.len(), viewport);
    }

    /// Wrapped row count of the output text at the current output width.
    pub fn output_line_count(&self) -> usize {
        wrapped_lines(&self.output.snapshot(), self.layout.output.inner_width()).len()
    }
}
