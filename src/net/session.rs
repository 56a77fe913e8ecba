use std::fmt;
use std::io::{self, Write};
use std::sync::mpsc;
use std::time::Duration;

use log::{info, warn};
use tokio::net::TcpStream;
use tokio::task::JoinHandle;

use crate::core::action::Action;
use crate::core::config::ResolvedConfig;
use crate::core::output::OutputBuffer;
use crate::core::state::LinkStatus;
use crate::net::reader::spawn_reader;

/// Errors from dispatching a command.
#[derive(Debug)]
pub enum SessionError {
    /// The connect attempt hasn't finished yet.
    Connecting,
    /// The command channel never connected.
    Unavailable,
    /// The write itself failed.
    Io(io::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Connecting => write!(f, "still connecting"),
            SessionError::Unavailable => write!(f, "command channel not connected"),
            SessionError::Io(e) => write!(f, "write failed: {e}"),
        }
    }
}

impl std::error::Error for SessionError {}

/// The two connections to the peer: commands out, events in.
///
/// The write side is used synchronously from the event loop. The read side
/// is held until [`NetworkSession::start_reader`] hands it to the reader task.
pub struct NetworkSession {
    writer: Option<Box<dyn Write + Send>>,
    events: Option<TcpStream>,
    output: OutputBuffer,
    status: LinkStatus,
}

impl NetworkSession {
    /// Placeholder while [`spawn_connect`] runs. `send` reports an error line.
    pub fn pending(output: OutputBuffer) -> Self {
        Self {
            writer: None,
            events: None,
            output,
            status: LinkStatus::Connecting,
        }
    }

    /// A session with a command writer but no event channel.
    pub fn with_writer(writer: Box<dyn Write + Send>, output: OutputBuffer) -> Self {
        Self {
            writer: Some(writer),
            events: None,
            output,
            status: LinkStatus::WriteOnly,
        }
    }

    /// A session with no connections. `send` reports an error line.
    pub fn degraded(output: OutputBuffer) -> Self {
        Self {
            writer: None,
            events: None,
            output,
            status: LinkStatus::Disconnected,
        }
    }

    /// Open the command channel, then the event channel.
    ///
    /// If the command channel fails the event channel isn't attempted. If
    /// only the event channel fails, the session runs write-only. Failures
    /// are logged and written to the output buffer, never returned.
    ///
    /// The event stream is not read until `start_reader` is called.
    pub async fn connect(config: &ResolvedConfig, output: OutputBuffer) -> Self {
        let writer = match dial(&config.write_addr, config.connect_timeout)
            .await
            .and_then(into_blocking_writer)
        {
            Ok(stream) => {
                info!("Command channel connected to {}", config.write_addr);
                stream
            }
            Err(e) => {
                warn!("Command channel {} unreachable: {}", config.write_addr, e);
                output.append_line(&format!(
                    "[error] cannot connect command channel {}: {e}",
                    config.write_addr
                ));
                return Self::degraded(output);
            }
        };

        let mut session = Self::with_writer(Box::new(writer), output);
        match dial(&config.read_addr, config.connect_timeout).await {
            Ok(stream) => {
                info!("Event channel connected to {}", config.read_addr);
                session.events = Some(stream);
                session.status = LinkStatus::Connected;
            }
            Err(e) => {
                warn!("Event channel {} unreachable: {}", config.read_addr, e);
                session.output.append_line(&format!(
                    "[error] cannot connect event channel {}: {e} (commands are sent, no output will arrive)",
                    config.read_addr
                ));
            }
        }
        session
    }

    /// Start the background reader on the event channel, if there is one.
    /// Must be called from inside a tokio runtime.
    pub fn start_reader(&mut self, tx: mpsc::Sender<Action>) -> Option<JoinHandle<usize>> {
        self.events
            .take()
            .map(|stream| spawn_reader(stream, self.output.clone(), tx))
    }

    pub fn status(&self) -> LinkStatus {
        self.status
    }

    /// Write `text` followed by a newline to the command channel.
    ///
    /// On failure an error line is appended to the output buffer before the
    /// error is returned, so callers only need to log it.
    pub fn send(&mut self, text: &str) -> Result<(), SessionError> {
        let result = match self.writer.as_mut() {
            Some(writer) => write_line(writer, text).map_err(SessionError::Io),
            None if self.status == LinkStatus::Connecting => Err(SessionError::Connecting),
            None => Err(SessionError::Unavailable),
        };
        match &result {
            Ok(()) => info!("Sent command: {}", text),
            Err(e) => {
                warn!("Failed to send command '{}': {}", text, e);
                self.output
                    .append_line(&format!("[error] sending command '{text}': {e}"));
            }
        }
        result
    }
}

/// Run [`NetworkSession::connect`] on a tokio task and deliver the result
/// over `done`, so the event loop never waits on a dial.
pub fn spawn_connect(
    config: ResolvedConfig,
    output: OutputBuffer,
    done: mpsc::Sender<NetworkSession>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let session = NetworkSession::connect(&config, output).await;
        if done.send(session).is_err() {
            warn!("Connect finished after the event loop exited");
        }
    })
}

fn write_line(writer: &mut Box<dyn Write + Send>, text: &str) -> io::Result<()> {
    let mut line = String::with_capacity(text.len() + 1);
    line.push_str(text);
    line.push('\n');
    writer.write_all(line.as_bytes())?;
    writer.flush()
}

/// Writes happen on the event loop thread, outside the runtime, so the
/// command stream goes back to a blocking std socket.
fn into_blocking_writer(stream: TcpStream) -> io::Result<std::net::TcpStream> {
    if let Err(e) = stream.set_nodelay(true) {
        warn!("Failed to set TCP_NODELAY on command channel: {}", e);
    }
    let stream = stream.into_std()?;
    stream.set_nonblocking(false)?;
    Ok(stream)
}

/// Connect to the first address `addr` resolves to that accepts, giving
/// each address `timeout`.
async fn dial(addr: &str, timeout: Duration) -> io::Result<TcpStream> {
    let timeout = timeout.max(Duration::from_millis(1));
    let mut last_err = None;
    for sock in tokio::net::lookup_host(addr).await? {
        match tokio::time::timeout(timeout, TcpStream::connect(sock)).await {
            Ok(Ok(stream)) => return Ok(stream),
            Ok(Err(e)) => last_err = Some(e),
            Err(_) => {
                last_err = Some(io::Error::new(
                    io::ErrorKind::TimedOut,
                    format!("connect to {sock} timed out"),
                ))
            }
        }
    }
    Err(last_err.unwrap_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("{addr} did not resolve to any address"),
        )
    }))
}
