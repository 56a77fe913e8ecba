//! # Actions
//!
//! Everything that can happen on the dashboard becomes an `Action`.
//! User presses Enter? That's `Action::Confirm`.
//! The reader task got a line? That's `Action::OutputAppended`.
//!
//! The `update()` function applies an action to the state and returns an
//! [`Effect`] describing any I/O the caller must perform. No sockets are
//! touched here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Key routing order: resize, quit, focus, toggle, navigation, confirm,
//! then everything else goes to whatever holds focus.

use log::{debug, info};

use crate::core::focus::FocusTarget;
use crate::core::layout::Viewport;
use crate::core::output::ScrollKey;
use crate::core::pane::{PaneKey, PaneKind};
use crate::core::state::{App, EXIT_COMMAND, LinkStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Resize { width: u16, height: u16 },
    Quit,
    FocusNext,
    FocusPrev,
    ToggleSelection,
    /// Navigation keys, routed to the focused pane or the output viewport.
    Navigate(PaneKey),
    Confirm,
    /// A key with no global binding.
    Unbound,
    /// The reader task appended to the output buffer.
    OutputAppended,
    LinkChanged(LinkStatus),
    /// The reader task stopped, with the reason.
    ReaderClosed(String),
}

/// I/O the event loop performs after `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Write this command to the command channel.
    Dispatch(String),
}

fn scroll_key(key: PaneKey) -> Option<ScrollKey> {
    match key {
        PaneKey::Up => Some(ScrollKey::Up),
        PaneKey::Down => Some(ScrollKey::Down),
        PaneKey::PageUp => Some(ScrollKey::PageUp),
        PaneKey::PageDown => Some(ScrollKey::PageDown),
        PaneKey::Home => Some(ScrollKey::Top),
        PaneKey::End => Some(ScrollKey::Bottom),
        PaneKey::Other => None,
    }
}

/// Hand a key to whatever holds focus.
fn forward_to_focused(app: &mut App, key: PaneKey) {
    match app.focus.current() {
        FocusTarget::Pane(i) => app.panes[i].handle_key(key),
        FocusTarget::Output => {
            if let Some(scroll) = scroll_key(key) {
                let total = app.output_line_count();
                let visible = usize::from(app.layout.output.inner_height());
                app.output_scroll.apply(scroll, total, visible);
            }
        }
    }
}

fn confirm(app: &mut App) -> Effect {
    let FocusTarget::Pane(i) = app.focus.current() else {
        return Effect::None;
    };
    let pane = &mut app.panes[i];
    match pane.kind {
        PaneKind::Menu => {
            pane.handle_key(PaneKey::Other);
            Effect::None
        }
        PaneKind::Command => {
            let label = pane.current_label();
            if label.is_empty() {
                debug!("Confirm on empty command pane '{}'", pane.title);
                Effect::None
            } else if label == EXIT_COMMAND {
                info!("Exit command selected");
                app.running = false;
                Effect::Quit
            } else {
                Effect::Dispatch(label.to_string())
            }
        }
    }
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Resize { width, height } => {
            app.resize(Viewport { width, height });
            Effect::None
        }
        Action::Quit => {
            app.running = false;
            Effect::Quit
        }
        Action::FocusNext => {
            app.focus.advance(&mut app.panes);
            Effect::None
        }
        Action::FocusPrev => {
            app.focus.retreat(&mut app.panes);
            Effect::None
        }
        Action::ToggleSelection => {
            if let FocusTarget::Pane(i) = app.focus.current() {
                app.panes[i].toggle_selection();
            }
            // Toggling doesn't consume the key; the focused component still sees it.
            forward_to_focused(app, PaneKey::Other);
            Effect::None
        }
        Action::Navigate(key) => {
            forward_to_focused(app, key);
            Effect::None
        }
        Action::Confirm => confirm(app),
        Action::Unbound => {
            forward_to_focused(app, PaneKey::Other);
            Effect::None
        }
        Action::OutputAppended => Effect::None,
        Action::LinkChanged(status) => {
            app.link = status;
            Effect::None
        }
        Action::ReaderClosed(reason) => {
            info!("Event channel closed: {}", reason);
            app.link = match app.link {
                LinkStatus::Connected | LinkStatus::WriteOnly => LinkStatus::WriteOnly,
                _ => LinkStatus::Disconnected,
            };
            Effect::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::output::OutputBuffer;
    use crate::core::pane::ListPane;
    use crate::test_support::test_app;

    fn focus_commands(app: &mut App) {
        // Commands is the third default pane.
        update(app, Action::FocusNext);
        update(app, Action::FocusNext);
        assert_eq!(app.focus.current(), FocusTarget::Pane(2));
    }

    fn command_app() -> App {
        let panes = vec![ListPane::new(
            "Commands",
            PaneKind::Command,
            ["Cmd 1", "Cmd 2", "Exit"],
        )];
        App::new(panes, OutputBuffer::new())
    }

    #[test]
    fn test_confirm_dispatches_selected_command() {
        let mut app = command_app();
        update(&mut app, Action::Navigate(PaneKey::Down));
        let effect = update(&mut app, Action::Confirm);
        assert_eq!(effect, Effect::Dispatch("Cmd 2".to_string()));
        assert!(app.running);
    }

    #[test]
    fn test_confirm_on_exit_quits_without_dispatch() {
        let mut app = command_app();
        update(&mut app, Action::Navigate(PaneKey::Down));
        update(&mut app, Action::Navigate(PaneKey::Down));
        let effect = update(&mut app, Action::Confirm);
        assert_eq!(effect, Effect::Quit);
        assert!(!app.running);
    }

    #[test]
    fn test_confirm_on_menu_pane_does_nothing() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Confirm);
        assert_eq!(effect, Effect::None);
        assert!(app.running);
    }

    #[test]
    fn test_confirm_on_output_pane_does_nothing() {
        let mut app = test_app();
        for _ in 0..4 {
            update(&mut app, Action::FocusNext);
        }
        assert_eq!(update(&mut app, Action::Confirm), Effect::None);
    }

    #[test]
    fn test_quit_works_from_any_focus() {
        for steps in 0..5 {
            let mut app = test_app();
            for _ in 0..steps {
                update(&mut app, Action::FocusNext);
            }
            assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
            assert!(!app.running);
        }
    }

    #[test]
    fn test_toggle_routes_to_focused_menu() {
        let mut app = test_app();
        update(&mut app, Action::Navigate(PaneKey::Down));
        update(&mut app, Action::ToggleSelection);
        assert!(app.panes[0].items()[1].selected);
        assert!(app.panes[1].items().iter().all(|item| !item.selected));
        // Cursor is untouched by the toggle.
        assert_eq!(app.panes[0].cursor(), 1);
    }

    #[test]
    fn test_toggle_on_command_pane_is_noop() {
        let mut app = test_app();
        focus_commands(&mut app);
        update(&mut app, Action::ToggleSelection);
        assert!(app.panes[2].items().iter().all(|item| !item.selected));
    }

    #[test]
    fn test_navigation_only_moves_focused_pane() {
        let mut app = test_app();
        update(&mut app, Action::FocusNext);
        update(&mut app, Action::Navigate(PaneKey::Down));
        update(&mut app, Action::Navigate(PaneKey::Down));
        assert_eq!(app.panes[0].cursor(), 0);
        assert_eq!(app.panes[1].cursor(), 2);
    }

    #[test]
    fn test_navigation_on_output_scrolls() {
        let mut app = test_app();
        for i in 0..40 {
            app.output.append(&format!("line {i}\n"));
        }
        for _ in 0..4 {
            update(&mut app, Action::FocusNext);
        }
        assert!(app.output_scroll.follow);
        update(&mut app, Action::Navigate(PaneKey::Up));
        assert!(!app.output_scroll.follow);
        update(&mut app, Action::Navigate(PaneKey::End));
        assert!(app.output_scroll.follow);
        // Lists weren't touched.
        assert!(app.panes.iter().all(|p| p.cursor() == 0));
    }

    #[test]
    fn test_unbound_key_is_absorbed() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Unbound);
        assert_eq!(effect, Effect::None);
        assert_eq!(app.focus.current(), FocusTarget::Pane(0));
        assert_eq!(app.panes[0].cursor(), 0);
    }

    #[test]
    fn test_resize_keeps_focus() {
        let mut app = test_app();
        update(&mut app, Action::FocusNext);
        update(
            &mut app,
            Action::Resize {
                width: 120,
                height: 40,
            },
        );
        assert_eq!(app.focus.current(), FocusTarget::Pane(1));
        assert_eq!(app.layout.panes[0].width, 30);
        assert_eq!(app.layout.output.height, 20);
    }

    #[test]
    fn test_reader_closed_downgrades_link() {
        let mut app = test_app();
        update(&mut app, Action::LinkChanged(LinkStatus::Connected));
        update(&mut app, Action::ReaderClosed("eof".to_string()));
        assert_eq!(app.link, LinkStatus::WriteOnly);

        let mut app = test_app();
        update(&mut app, Action::LinkChanged(LinkStatus::Disconnected));
        update(&mut app, Action::ReaderClosed("eof".to_string()));
        assert_eq!(app.link, LinkStatus::Disconnected);
    }
}
