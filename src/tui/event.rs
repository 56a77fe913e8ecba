use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::Action;
use crate::core::pane::PaneKey;

/// Translate a terminal event into a dashboard action.
///
/// Every key press yields some action so nothing is silently dropped;
/// unbound keys become [`Action::Unbound`].
pub fn translate(event: Event) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => Some(translate_key(key)),
        Event::Resize(width, height) => Some(Action::Resize { width, height }),
        _ => None,
    }
}

pub fn translate_key(key: KeyEvent) -> Action {
    log::debug!("Key event: {:?} with modifiers {:?}", key.code, key.modifiers);
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Action::Quit,
        (_, KeyCode::Char('q')) => Action::Quit,
        (_, KeyCode::Tab) => Action::FocusNext,
        (_, KeyCode::BackTab) => Action::FocusPrev,
        (_, KeyCode::Char(' ')) => Action::ToggleSelection,
        (_, KeyCode::Up | KeyCode::Char('k')) => Action::Navigate(PaneKey::Up),
        (_, KeyCode::Down | KeyCode::Char('j')) => Action::Navigate(PaneKey::Down),
        (_, KeyCode::PageUp) => Action::Navigate(PaneKey::PageUp),
        (_, KeyCode::PageDown) => Action::Navigate(PaneKey::PageDown),
        (_, KeyCode::Home) => Action::Navigate(PaneKey::Home),
        (_, KeyCode::End) => Action::Navigate(PaneKey::End),
        (_, KeyCode::Enter) => Action::Confirm,
        _ => Action::Unbound,
    }
}

/// Poll for an event with timeout. Terminal read errors propagate.
pub fn poll_event_timeout(timeout: std::time::Duration) -> std::io::Result<Option<Action>> {
    if event::poll(timeout)? {
        Ok(translate(event::read()?))
    } else {
        Ok(None)
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> std::io::Result<Option<Action>> {
    poll_event_timeout(std::time::Duration::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_bound_keys() {
        assert_eq!(translate(press(KeyCode::Tab)), Some(Action::FocusNext));
        assert_eq!(translate(press(KeyCode::BackTab)), Some(Action::FocusPrev));
        assert_eq!(translate(press(KeyCode::Char(' '))), Some(Action::ToggleSelection));
        assert_eq!(translate(press(KeyCode::Enter)), Some(Action::Confirm));
        assert_eq!(translate(press(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(
            translate(press(KeyCode::Up)),
            Some(Action::Navigate(PaneKey::Up))
        );
        assert_eq!(
            translate(press(KeyCode::Char('j'))),
            Some(Action::Navigate(PaneKey::Down))
        );
        assert_eq!(
            translate(press(KeyCode::End)),
            Some(Action::Navigate(PaneKey::End))
        );
    }

    #[test]
    fn test_ctrl_c_quits() {
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(translate(event), Some(Action::Quit));
    }

    #[test]
    fn test_unbound_key_is_not_dropped() {
        assert_eq!(translate(press(KeyCode::Char('x'))), Some(Action::Unbound));
        assert_eq!(translate(press(KeyCode::F(5))), Some(Action::Unbound));
    }

    #[test]
    fn test_release_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(translate(release), None);
    }

    #[test]
    fn test_resize() {
        assert_eq!(
            translate(Event::Resize(100, 30)),
            Some(Action::Resize {
                width: 100,
                height: 30
            })
        );
    }
}
