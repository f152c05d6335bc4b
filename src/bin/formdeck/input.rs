//! Semantic input events so the event loop does not depend on raw key codes.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum InputEvent {
    Char(char),
    Backspace,
    Enter,
    Escape,
    Up,
    Down,
    Left,
    Right,
    /// Tab / Shift-Tab between form controls.
    NextControl,
    PrevControl,
    /// PageDown / PageUp between settings sections.
    NextSection,
    PrevSection,
    ToggleSidebar,
    FocusSearch,
    SaveTrigger,
    /// Bracketed paste; terminals deliver a file drop as a pasted path.
    Paste(String),
    Resize,
    Quit,
    Ignored,
}

pub(crate) fn map_event(event: Event) -> InputEvent {
    match event {
        Event::Key(key) => map_key(key),
        Event::Paste(text) => InputEvent::Paste(text),
        Event::Resize(_, _) => InputEvent::Resize,
        _ => InputEvent::Ignored,
    }
}

fn map_key(key: KeyEvent) -> InputEvent {
    if key.kind != KeyEventKind::Press {
        return InputEvent::Ignored;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => InputEvent::Quit,
            KeyCode::Char('b') => InputEvent::ToggleSidebar,
            KeyCode::Char('f') => InputEvent::FocusSearch,
            KeyCode::Char('s') => InputEvent::SaveTrigger,
            _ => InputEvent::Ignored,
        };
    }
    match key.code {
        KeyCode::Char(ch) => InputEvent::Char(ch),
        KeyCode::Backspace => InputEvent::Backspace,
        KeyCode::Enter => InputEvent::Enter,
        KeyCode::Esc => InputEvent::Escape,
        KeyCode::Up => InputEvent::Up,
        KeyCode::Down => InputEvent::Down,
        KeyCode::Left => InputEvent::Left,
        KeyCode::Right => InputEvent::Right,
        KeyCode::Tab => InputEvent::NextControl,
        KeyCode::BackTab => InputEvent::PrevControl,
        KeyCode::PageDown => InputEvent::NextSection,
        KeyCode::PageUp => InputEvent::PrevSection,
        _ => InputEvent::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn control_chords_map_to_shell_actions() {
        assert_eq!(
            map_event(press(KeyCode::Char('b'), KeyModifiers::CONTROL)),
            InputEvent::ToggleSidebar
        );
        assert_eq!(
            map_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            InputEvent::Quit
        );
        assert_eq!(
            map_event(press(KeyCode::Char('f'), KeyModifiers::CONTROL)),
            InputEvent::FocusSearch
        );
    }

    #[test]
    fn plain_characters_stay_typeable() {
        assert_eq!(
            map_event(press(KeyCode::Char('b'), KeyModifiers::NONE)),
            InputEvent::Char('b')
        );
        assert_eq!(
            map_event(press(KeyCode::Char('/'), KeyModifiers::NONE)),
            InputEvent::Char('/')
        );
    }

    #[test]
    fn paste_carries_the_dropped_path() {
        let event = Event::Paste("/tmp/avatar.png".to_string());
        assert_eq!(
            map_event(event),
            InputEvent::Paste("/tmp/avatar.png".to_string())
        );
    }

    #[test]
    fn key_releases_are_ignored() {
        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(map_event(Event::Key(key)), InputEvent::Ignored);
    }
}
