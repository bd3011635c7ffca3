//! Keyboard input to messages.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::form::FieldKind;
use crate::message::{Edit, Msg};
use crate::state::AppState;

/// Translate a key press into a message, or `None` if it means nothing here.
///
/// While a notification is showing it swallows every key except the ones
/// that dismiss it or quit.
#[must_use]
pub fn key_to_msg(state: &AppState, key: KeyEvent) -> Option<Msg> {
    // Only handle key press events, not release
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(key.code, KeyCode::Char('c' | 'q')) {
        return Some(Msg::Quit);
    }

    if state.current_notification().is_some() {
        return matches!(key.code, KeyCode::Enter | KeyCode::Esc).then_some(Msg::DismissNotification);
    }

    let focus = state.focus;
    match key.code {
        KeyCode::Tab | KeyCode::Down => Some(Msg::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(Msg::FocusPrev),
        KeyCode::Enter => Some(Msg::Activate),
        KeyCode::PageDown => Some(Msg::Scroll(true)),
        KeyCode::PageUp => Some(Msg::Scroll(false)),
        KeyCode::Right if focus.kind() == FieldKind::Select => Some(Msg::Cycle(focus, true)),
        KeyCode::Left if focus.kind() == FieldKind::Select => Some(Msg::Cycle(focus, false)),
        KeyCode::Backspace if focus.kind() == FieldKind::Text => {
            Some(Msg::Edit(focus, Edit::Backspace))
        }
        KeyCode::Char('u') if ctrl && focus.kind() == FieldKind::Text => {
            Some(Msg::Edit(focus, Edit::Clear))
        }
        KeyCode::Char(c) if !ctrl && focus.kind() == FieldKind::Text => {
            Some(Msg::Edit(focus, Edit::Insert(c)))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Field;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_edits_focused_text_field() {
        let mut state = AppState::new("http://x");
        state.focus = Field::Mood;
        assert!(matches!(
            key_to_msg(&state, press(KeyCode::Char('z'))),
            Some(Msg::Edit(Field::Mood, Edit::Insert('z')))
        ));
    }

    #[test]
    fn test_typing_on_button_does_nothing() {
        let mut state = AppState::new("http://x");
        state.focus = Field::GenerateButton;
        assert!(key_to_msg(&state, press(KeyCode::Char('z'))).is_none());
    }

    #[test]
    fn test_arrows_cycle_selectors() {
        let mut state = AppState::new("http://x");
        state.focus = Field::Weather;
        assert!(matches!(
            key_to_msg(&state, press(KeyCode::Left)),
            Some(Msg::Cycle(Field::Weather, false))
        ));
    }

    #[test]
    fn test_page_keys_scroll_from_any_field() {
        let mut state = AppState::new("http://x");
        state.focus = Field::ItemName;
        assert!(matches!(
            key_to_msg(&state, press(KeyCode::PageDown)),
            Some(Msg::Scroll(true))
        ));
        state.focus = Field::AddItemButton;
        assert!(matches!(
            key_to_msg(&state, press(KeyCode::PageUp)),
            Some(Msg::Scroll(false))
        ));
    }

    #[test]
    fn test_notification_blocks_other_keys() {
        let mut state = AppState::new("http://x");
        state.notify("Item added");
        assert!(key_to_msg(&state, press(KeyCode::Tab)).is_none());
        assert!(matches!(
            key_to_msg(&state, press(KeyCode::Esc)),
            Some(Msg::DismissNotification)
        ));
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let mut state = AppState::new("http://x");
        state.notify("blocking");
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(key_to_msg(&state, key), Some(Msg::Quit)));
    }
}
