use crossterm::event::KeyEventState;

use super::*;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

#[test]
fn test_navigation_keys() {
    assert!(matches!(map_key(key(KeyCode::Up)), Some(Event::KeyboardUp)));
    assert!(matches!(map_key(key(KeyCode::Char('k'))), Some(Event::KeyboardUp)));
    assert!(matches!(map_key(key(KeyCode::Down)), Some(Event::KeyboardDown)));
    assert!(matches!(map_key(key(KeyCode::Char('j'))), Some(Event::KeyboardDown)));
    assert!(matches!(map_key(key(KeyCode::Home)), Some(Event::KeyboardHome)));
    assert!(matches!(map_key(key(KeyCode::End)), Some(Event::KeyboardEnd)));
}

#[test]
fn test_toggle_keys() {
    assert!(matches!(map_key(key(KeyCode::Enter)), Some(Event::KeyboardEnter)));
    assert!(matches!(map_key(key(KeyCode::Char(' '))), Some(Event::KeyboardEnter)));
    assert!(matches!(map_key(key(KeyCode::Esc)), Some(Event::KeyboardEsc)));
    assert!(matches!(map_key(key(KeyCode::F(1))), Some(Event::KeyboardF1)));
}

#[test]
fn test_scroll_keys() {
    assert!(matches!(map_key(key(KeyCode::PageUp)), Some(Event::UiScrollPageUp)));
    assert!(matches!(map_key(key(KeyCode::PageDown)), Some(Event::UiScrollPageDown)));
    assert!(matches!(map_key(ctrl('u')), Some(Event::UiScrollPageUp)));
    assert!(matches!(map_key(ctrl('d')), Some(Event::UiScrollPageDown)));
}

#[test]
fn test_quit_keys() {
    assert!(matches!(map_key(key(KeyCode::Char('q'))), Some(Event::Quit)));
    assert!(matches!(map_key(ctrl('c')), Some(Event::Quit)));
    assert!(matches!(map_key(ctrl('q')), Some(Event::Quit)));
}

#[test]
fn test_ignored_keys() {
    assert!(map_key(key(KeyCode::Char('x'))).is_none());
    assert!(map_key(ctrl('x')).is_none());
    assert!(map_key(key(KeyCode::Tab)).is_none());

    let release = KeyEvent {
        code: KeyCode::Enter,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    assert!(map_key(release).is_none());
}

#[test]
fn test_mapped_keys_are_keyboard_events() {
    for code in [KeyCode::Up, KeyCode::Enter, KeyCode::Esc, KeyCode::PageDown] {
        let event = map_key(key(code)).expect("mapped key");
        assert!(event.is_keyboard_event());
        assert!(!event.is_feed_event());
    }
}
