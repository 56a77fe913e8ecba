//! # Output Buffer
//!
//! Append-only text received from the event channel, plus the scroll state of
//! the viewport that displays it.
//!
//! ```text
//! reader task ──append()──┐
//!                         ▼
//!                 Arc<Mutex<Inner>>
//!                         │
//! render pass ──snapshot()┘   (copy out, release, then lay out)
//! ```
//!
//! The lock is only ever held for a single push or a single copy. Nothing
//! that renders or wraps text runs while it is held.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct Inner {
    text: String,
    chunks: usize,
}

/// Shared, append-only output text. Cloning yields another handle to the
/// same buffer.
#[derive(Debug, Clone, Default)]
pub struct OutputBuffer {
    inner: Arc<Mutex<Inner>>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(initial: &str) -> Self {
        let buffer = Self::new();
        if !initial.is_empty() {
            buffer.append(initial);
        }
        buffer
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panicking writer can't leave a torn string behind: push_str either
        // ran or it didn't. Keep serving the data.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append one chunk verbatim.
    pub fn append(&self, chunk: &str) {
        let mut inner = self.lock();
        inner.text.push_str(chunk);
        inner.chunks += 1;
    }

    /// Append a diagnostic line, making sure it starts on a fresh line.
    pub fn append_line(&self, line: &str) {
        let mut inner = self.lock();
        if !inner.text.is_empty() && !inner.text.ends_with('\n') {
            inner.text.push('\n');
        }
        inner.text.push_str(line);
        inner.text.push('\n');
        inner.chunks += 1;
    }

    /// Copy the full text out under the lock.
    pub fn snapshot(&self) -> String {
        self.lock().text.clone()
    }

    pub fn chunk_count(&self) -> usize {
        self.lock().chunks
    }
}

/// Wrap output text to `width` columns. Trailing newline doesn't produce an
/// extra empty row.
pub fn wrapped_lines(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    text.trim_end_matches('\n')
        .split('\n')
        .flat_map(|line| {
            if line.is_empty() {
                vec![String::new()]
            } else {
                textwrap::wrap(line, width)
                    .into_iter()
                    .map(|cow| cow.into_owned())
                    .collect()
            }
        })
        .collect()
}

/// Keys the output viewport reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollKey {
    Up,
    Down,
    PageUp,
    PageDown,
    Top,
    Bottom,
}

/// Scroll position of the output viewport.
///
/// `follow` pins the view to the tail so fresh output stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputScroll {
    pub offset: usize,
    pub follow: bool,
}

impl Default for OutputScroll {
    fn default() -> Self {
        Self {
            offset: 0,
            follow: true,
        }
    }
}

impl OutputScroll {
    /// Top row to display for `total` wrapped rows in a `visible`-row window.
    pub fn effective_offset(&self, total: usize, visible: usize) -> usize {
        let max = total.saturating_sub(visible);
        if self.follow { max } else { self.offset.min(max) }
    }

    pub fn apply(&mut self, key: ScrollKey, total: usize, visible: usize) {
        let max = total.saturating_sub(visible);
        let current = self.effective_offset(total, visible);
        let page = visible.max(1);
        let next = match key {
            ScrollKey::Up => current.saturating_sub(1),
            ScrollKey::Down => (current + 1).min(max),
            ScrollKey::PageUp => current.saturating_sub(page),
            ScrollKey::PageDown => (current + page).min(max),
            ScrollKey::Top => 0,
            ScrollKey::Bottom => max,
        };
        self.offset = next;
        self.follow = next >= max;
    }
}
