//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use crate::core::config::default_panes;
use crate::core::output::OutputBuffer;
use crate::core::state::App;

/// Creates a test App with the default four panes.
pub fn test_app() -> App {
    let panes = default_panes().iter().map(|entry| entry.build()).collect();
    App::new(panes, OutputBuffer::with_content("Welcome to Paneboard!\n"))
}

/// A writer that records everything written to it.
#[derive(Clone, Default)]
pub struct CaptureSink {
    pub written: Arc<Mutex<Vec<u8>>>,
}

impl CaptureSink {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.written.lock().unwrap()).into_owned()
    }
}

impl Write for CaptureSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.written.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A writer whose every write fails, like a peer that hung up.
pub struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
