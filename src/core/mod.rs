//! # Core Dashboard Logic
//!
//! This module contains Paneboard's state machine.
//! It knows nothing about terminals or sockets.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (panes, focus) │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI.         │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │    NET     │
//!           │  Adapter   │              │  session + │
//!           │ (ratatui)  │              │  reader    │
//!           └────────────┘              └────────────┘
//! ```
//!
//! The one piece of shared state is [`output::OutputBuffer`], which the
//! reader task appends to from another thread.
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all dashboard state in one place
//! - [`action`]: The `Action` enum and `update()`
//! - [`pane`]: List panes (menus and command lists)
//! - [`focus`]: Single-owner keyboard focus
//! - [`layout`]: Pane geometry from the viewport size
//! - [`output`]: Shared output text and its scroll state
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod config;
pub mod focus;
pub mod layout;
pub mod output;
pub mod pane;
pub mod state;
