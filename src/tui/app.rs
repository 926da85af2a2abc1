//! TUI application state and event handling

use crate::calculator::{CalculationMode, Calculator};
use crate::faq::Accordion;
use crate::logging;
use crate::tui::events::KeyAction;

/// Region of the screen that receives key actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Income / rent mode buttons
    ModeSelector,
    /// Amount input box
    Input,
    /// Calculate button
    Calculate,
    /// FAQ list
    Faq,
}

impl Focus {
    /// Next region in the focus ring
    pub fn next(&self) -> Self {
        match self {
            Focus::ModeSelector => Focus::Input,
            Focus::Input => Focus::Calculate,
            Focus::Calculate => Focus::Faq,
            Focus::Faq => Focus::ModeSelector,
        }
    }

    /// Previous region in the focus ring
    pub fn previous(&self) -> Self {
        match self {
            Focus::ModeSelector => Focus::Faq,
            Focus::Input => Focus::ModeSelector,
            Focus::Calculate => Focus::Input,
            Focus::Faq => Focus::Calculate,
        }
    }
}

/// Main TUI application state
#[derive(Debug)]
pub struct App {
    /// Calculator panel
    pub calculator: Calculator,

    /// FAQ accordion
    pub accordion: Accordion,

    /// Current input focus
    pub focus: Focus,

    /// Highlighted FAQ row while the FAQ is focused
    pub faq_cursor: usize,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create new application instance
    pub fn new() -> Self {
        Self::with_calculator(Calculator::new())
    }

    /// Create an application around a pre-filled calculator
    pub fn with_calculator(calculator: Calculator) -> Self {
        Self {
            calculator,
            accordion: Accordion::new(),
            focus: Focus::Input,
            faq_cursor: 0,
            should_quit: false,
        }
    }

    /// Set quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Apply a key action to the focused region
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::None => {}
            KeyAction::Quit => self.quit(),
            KeyAction::CycleFocus => self.set_focus(self.focus.next()),
            KeyAction::CycleFocusBack => self.set_focus(self.focus.previous()),
            _ => match self.focus {
                Focus::ModeSelector => self.handle_mode_selector(action),
                Focus::Input => self.handle_input(action),
                Focus::Calculate => self.handle_calculate(action),
                Focus::Faq => self.handle_faq(action),
            },
        }
    }

    /// Move focus; entering the FAQ always starts at its first question
    fn set_focus(&mut self, focus: Focus) {
        if focus == Focus::Faq && self.focus != Focus::Faq {
            self.faq_cursor = 0;
        }
        self.focus = focus;
    }

    fn handle_mode_selector(&mut self, action: KeyAction) {
        match action {
            KeyAction::MoveLeft => self.calculator.set_mode(CalculationMode::Income),
            KeyAction::MoveRight => self.calculator.set_mode(CalculationMode::Rent),
            KeyAction::Activate | KeyAction::InputChar(' ') => {
                let mode = self.calculator.mode().toggled();
                self.calculator.set_mode(mode);
            }
            KeyAction::MovePrevious => self.set_focus(self.focus.previous()),
            KeyAction::MoveNext => self.set_focus(self.focus.next()),
            _ => {}
        }
    }

    fn handle_input(&mut self, action: KeyAction) {
        match action {
            KeyAction::InputChar(c) => self.calculator.push_char(c),
            KeyAction::DeleteChar => self.calculator.pop_char(),
            KeyAction::Activate => self.calculate(),
            KeyAction::MovePrevious => self.set_focus(self.focus.previous()),
            KeyAction::MoveNext => self.set_focus(self.focus.next()),
            _ => {}
        }
    }

    fn handle_calculate(&mut self, action: KeyAction) {
        match action {
            KeyAction::Activate | KeyAction::InputChar(' ') => self.calculate(),
            KeyAction::MovePrevious => self.set_focus(self.focus.previous()),
            KeyAction::MoveNext => self.set_focus(Focus::Faq),
            _ => {}
        }
    }

    fn handle_faq(&mut self, action: KeyAction) {
        match action {
            KeyAction::MovePrevious => {
                if self.faq_cursor == 0 {
                    self.set_focus(Focus::Calculate);
                } else {
                    self.faq_cursor -= 1;
                }
            }
            KeyAction::MoveNext => {
                if self.faq_cursor + 1 < self.accordion.len() {
                    self.faq_cursor += 1;
                }
            }
            KeyAction::Activate | KeyAction::InputChar(' ') => {
                self.accordion.toggle(self.faq_cursor)
            }
            _ => {}
        }
    }

    fn calculate(&mut self) {
        let outcome = self.calculator.calculate();
        logging::info_log(&format!("Calculate pressed: {:?}", outcome));
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
