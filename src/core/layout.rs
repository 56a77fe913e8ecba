//! # Layout
//!
//! Deterministic pane geometry from the viewport size alone.
//!
//! ```text
//! ┌────────┬────────┬────────┬────────┐
//! │ pane 0 │ pane 1 │ pane 2 │ pane 3 │  top half, equal widths
//! ├────────┴────────┴────────┴────────┤
//! │ output                            │  bottom half, full width
//! └───────────────────────────────────┘
//! ```
//!
//! When the width doesn't divide evenly, the leftmost panes get one extra
//! column each.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub const DEFAULT: Viewport = Viewport {
        width: 80,
        height: 24,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    /// Height inside a one-cell border.
    pub fn inner_height(&self) -> u16 {
        self.height.saturating_sub(2)
    }

    /// Width inside a one-cell border.
    pub fn inner_width(&self) -> u16 {
        self.width.saturating_sub(2)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardLayout {
    pub panes: Vec<Region>,
    pub output: Region,
}

pub fn compute_layout(pane_count: usize, viewport: Viewport) -> DashboardLayout {
    let top_height = if pane_count == 0 { 0 } else { viewport.height / 2 };
    let output = Region {
        x: 0,
        y: top_height,
        width: viewport.width,
        height: viewport.height - top_height,
    };

    let mut panes = Vec::with_capacity(pane_count);
    if pane_count > 0 {
        let count = u16::try_from(pane_count).unwrap_or(u16::MAX);
        let base = viewport.width / count;
        let extra = viewport.width % count;
        let mut x = 0;
        for i in 0..pane_count {
            let width = base + u16::from(i < usize::from(extra));
            panes.push(Region {
                x,
                y: 0,
                width,
                height: top_height,
            });
            x += width;
        }
    }

    DashboardLayout { panes, output }
}
