//! # Network Session
//!
//! Plain-text TCP plumbing: one connection carries commands out
//! (`<label>\n`), a second carries newline-delimited output in.
//!
//! No reconnection, no acknowledgements, no read or write timeouts. Every
//! failure ends up as a line in the output buffer.

pub mod reader;
pub mod session;

pub use reader::{pump_lines, spawn_reader};
pub use session::{NetworkSession, SessionError, spawn_connect};
