//! # TUI Components
//!
//! Stateless, props-based views. Each is created per frame from borrowed
//! dashboard state and rendered into the region the layout assigns it.
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── list_pane.rs    (one bordered menu or command list)
//! └── output_pane.rs  (wrapped, scrollable output text)
//! ```

pub mod list_pane;
pub mod output_pane;

pub use list_pane::ListPaneView;
pub use output_pane::OutputPane;
