//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the dashboard,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! One thread owns all pane, focus and render state. Each iteration:
//!
//! 1. Draw if anything changed.
//! 2. Wait up to 250ms for input, then drain every pending input event
//!    through `update()`, one at a time, to completion.
//! 3. Install the network session once the connect task delivers it.
//! 4. Drain actions posted by the reader task (new output, channel closed).
//!
//! Dialing happens on a tokio task, so keys work while the peer is slow to
//! answer. Until it finishes the output title reads `[connecting]` and
//! commands fail with an error line. Command writes happen inline when
//! `update()` returns `Effect::Dispatch`; write failures become output lines.

mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::output::OutputBuffer;
use crate::core::state::App;
use crate::net::{NetworkSession, spawn_connect};
use crate::tui::event::{poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(250);

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), Hide)?;
        info!("Terminal modes enabled (hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

/// Carry out an effect returned by `update()`. Returns true to quit.
pub fn apply_effect(effect: Effect, session: &mut NetworkSession) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::Dispatch(command) => {
            // Failure is already written to the output buffer.
            if let Err(e) = session.send(&command) {
                debug!("Dispatch of '{}' failed: {}", command, e);
            }
            false
        }
    }
}

/// Output buffer seeded with the welcome message, if there is one.
fn initial_output(config: &ResolvedConfig) -> OutputBuffer {
    let output = OutputBuffer::new();
    if !config.welcome_message.is_empty() {
        output.append_line(&config.welcome_message);
    }
    output
}

/// Swap in the session delivered by the connect task and start its reader.
fn install_session(
    app: &mut App,
    mut session: NetworkSession,
    tx: &mpsc::Sender<Action>,
) -> NetworkSession {
    session.start_reader(tx.clone());
    info!("Session status: {}", session.status());
    update(app, Action::LinkChanged(session.status()));
    session
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let output = initial_output(&config);
    let mut app = App::from_config(&config, output.clone());

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, &mut app, &config, output));

    info!("Shutting down");
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    config: &ResolvedConfig,
    output: OutputBuffer,
) -> std::io::Result<()> {
    let size = terminal.size()?;
    update(
        app,
        Action::Resize {
            width: size.width,
            height: size.height,
        },
    );

    // Channel for actions from the reader task
    let (tx, rx) = mpsc::channel();
    // Channel for the finished connect
    let (session_tx, session_rx) = mpsc::channel();

    let mut session = NetworkSession::pending(output.clone());
    update(app, Action::LinkChanged(session.status()));
    spawn_connect(config.clone(), output, session_tx);

    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(IDLE_POLL)?;
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain all pending input before the next draw
        let mut should_quit = false;
        let mut pending = first_event;
        while let Some(action) = pending {
            debug!("Input action: {:?}", action);
            let effect = update(app, action);
            if apply_effect(effect, &mut session) {
                should_quit = true;
                break;
            }
            pending = poll_event_immediate()?;
        }

        if should_quit || !app.running {
            return Ok(());
        }

        // Before the reader drain, so LinkChanged lands ahead of anything
        // the new reader posts.
        if let Ok(connected) = session_rx.try_recv() {
            session = install_session(app, connected, &tx);
            needs_redraw = true;
        }

        // Handle reader task actions (new output, channel closed)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            if !matches!(action, Action::OutputAppended) {
                debug!("Event loop received: {:?}", action);
            }
            let effect = update(app, action);
            if effect != Effect::None {
                warn!("Unexpected effect from background action: {:?}", effect);
            }
        }
    }
}
