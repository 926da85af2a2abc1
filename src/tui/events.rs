//! Event handling for keyboard input

use crate::{RentCalcError, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

/// Event handler for TUI input
#[derive(Debug, Default)]
pub struct EventHandler;

impl EventHandler {
    /// Create a new event handler
    pub fn new() -> Self {
        Self
    }

    /// Poll for the next event with timeout
    pub fn next_event(&self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)
            .map_err(|e| RentCalcError::TuiError(format!("Event polling failed: {}", e)))?
        {
            let event = event::read()
                .map_err(|e| RentCalcError::TuiError(format!("Event reading failed: {}", e)))?;
            Ok(Some(event))
        } else {
            Ok(None)
        }
    }

    /// Handle a key event and return the action to take
    pub fn handle_key_event(&self, event: KeyEvent) -> KeyAction {
        match event {
            KeyEvent {
                code: KeyCode::Esc, ..
            } => KeyAction::Quit,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => KeyAction::Quit,
            KeyEvent {
                code: KeyCode::Tab, ..
            } => KeyAction::CycleFocus,
            KeyEvent {
                code: KeyCode::BackTab,
                ..
            } => KeyAction::CycleFocusBack,
            KeyEvent {
                code: KeyCode::Up, ..
            } => KeyAction::MovePrevious,
            KeyEvent {
                code: KeyCode::Down,
                ..
            } => KeyAction::MoveNext,
            KeyEvent {
                code: KeyCode::Left,
                ..
            } => KeyAction::MoveLeft,
            KeyEvent {
                code: KeyCode::Right,
                ..
            } => KeyAction::MoveRight,
            KeyEvent {
                code: KeyCode::Enter,
                ..
            } => KeyAction::Activate,
            KeyEvent {
                code: KeyCode::Char(c),
                modifiers: KeyModifiers::NONE | KeyModifiers::SHIFT,
                ..
            } => KeyAction::InputChar(c),
            KeyEvent {
                code: KeyCode::Backspace,
                modifiers: KeyModifiers::NONE,
                ..
            } => KeyAction::DeleteChar,
            _ => KeyAction::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    CycleFocus,
    CycleFocusBack,
    MovePrevious,
    MoveNext,
    MoveLeft,
    MoveRight,
    Activate,
    InputChar(char),
    DeleteChar,
    None,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_handler() -> EventHandler {
        EventHandler::new()
    }

    fn assert_key_action(key_code: KeyCode, modifiers: KeyModifiers, expected: KeyAction) {
        let handler = test_handler();
        let event = KeyEvent::new(key_code, modifiers);
        assert_eq!(
            handler.handle_key_event(event),
            expected,
            "Failed for {:?} + {:?}",
            key_code,
            modifiers
        );
    }

    #[test]
    fn test_key_mappings_data_driven() {
        let test_cases = [
            (KeyCode::Esc, KeyModifiers::NONE, KeyAction::Quit),
            (KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit),
            (KeyCode::Tab, KeyModifiers::NONE, KeyAction::CycleFocus),
            (KeyCode::BackTab, KeyModifiers::SHIFT, KeyAction::CycleFocusBack),
            (KeyCode::Up, KeyModifiers::NONE, KeyAction::MovePrevious),
            (KeyCode::Down, KeyModifiers::NONE, KeyAction::MoveNext),
            (KeyCode::Left, KeyModifiers::NONE, KeyAction::MoveLeft),
            (KeyCode::Right, KeyModifiers::NONE, KeyAction::MoveRight),
            (KeyCode::Enter, KeyModifiers::NONE, KeyAction::Activate),
            (
                KeyCode::Char('1'),
                KeyModifiers::NONE,
                KeyAction::InputChar('1'),
            ),
            (
                KeyCode::Char('+'),
                KeyModifiers::SHIFT,
                KeyAction::InputChar('+'),
            ),
            (
                KeyCode::Backspace,
                KeyModifiers::NONE,
                KeyAction::DeleteChar,
            ),
            (KeyCode::F(1), KeyModifiers::NONE, KeyAction::None),
            (KeyCode::Char('a'), KeyModifiers::ALT, KeyAction::None),
            (KeyCode::Char('x'), KeyModifiers::CONTROL, KeyAction::None),
        ];

        for (key_code, modifiers, expected) in test_cases {
            assert_key_action(key_code, modifiers, expected);
        }

        let chars = ['0', '9', '.', '-', 'e', ' '];
        for c in chars {
            assert_key_action(
                KeyCode::Char(c),
                KeyModifiers::NONE,
                KeyAction::InputChar(c),
            );
        }
    }

    #[test]
    fn test_key_action_partial_eq_trait() {
        assert_eq!(KeyAction::InputChar('5'), KeyAction::InputChar('5'));
        assert_ne!(KeyAction::InputChar('5'), KeyAction::InputChar('6'));
        assert_ne!(KeyAction::Quit, KeyAction::Activate);
        assert_ne!(KeyAction::MoveLeft, KeyAction::MoveRight);
        assert_ne!(KeyAction::InputChar('a'), KeyAction::None);
    }

    #[test]
    fn test_default_handler_maps_keys() {
        let handler = EventHandler::default();
        let event = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(event), KeyAction::Activate);
    }
}
