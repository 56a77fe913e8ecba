//! Background reader for the event channel.
//!
//! One task per session. It appends every received line to the shared
//! [`OutputBuffer`] and posts [`Action::OutputAppended`] so the event loop
//! knows to redraw. It stops on EOF, on a read error, or when the event loop
//! has gone away; it is never restarted.

use std::sync::mpsc;

use log::{debug, info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;

use crate::core::action::Action;
use crate::core::output::OutputBuffer;

/// Start pumping lines from a connected stream. Must be called from inside
/// a tokio runtime.
pub fn spawn_reader(
    stream: tokio::net::TcpStream,
    output: OutputBuffer,
    tx: mpsc::Sender<Action>,
) -> JoinHandle<usize> {
    tokio::spawn(pump_lines(BufReader::new(stream), output, tx))
}

/// Read newline-delimited chunks until the stream ends. Returns the number
/// of chunks appended.
pub async fn pump_lines<R>(mut reader: R, output: OutputBuffer, tx: mpsc::Sender<Action>) -> usize
where
    R: AsyncBufRead + Unpin,
{
    let mut line = Vec::new();
    let mut appended = 0usize;

    let reason = loop {
        line.clear();
        match reader.read_until(b'\n', &mut line).await {
            Ok(0) => break "connection closed by peer".to_string(),
            Ok(n) => {
                output.append(&String::from_utf8_lossy(&line));
                appended += 1;
                debug!("Event channel: {} bytes (total chunks {})", n, appended);
                if tx.send(Action::OutputAppended).is_err() {
                    info!("Event loop gone, reader stopping after {} chunks", appended);
                    return appended;
                }
            }
            Err(e) => break e.to_string(),
        }
    };

    info!("Event channel closed after {} chunks: {}", appended, reason);
    output.append_line(&format!("[event channel closed: {reason}]"));
    if tx.send(Action::ReaderClosed(reason)).is_err() {
        warn!("Failed to report reader shutdown: receiver dropped");
    }
    appended
}
