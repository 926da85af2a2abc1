//! Terminal User Interface module
//!
//! Single-screen calculator form with the FAQ accordion below it

pub mod app;
pub mod events;
pub mod ui;

pub use app::App;

use crate::constants::EVENT_POLL_INTERVAL_MS;
use crate::{logging, RentCalcError, Result};
use crossterm::{
    event::{Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use events::EventHandler;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::time::Duration;

/// Run the interactive calculator until the user quits
pub fn run(app: App) -> Result<()> {
    enable_raw_mode()
        .map_err(|e| RentCalcError::terminal_error(&format!("Failed to enable raw mode: {}", e)))?;

    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(RentCalcError::terminal_error(&format!(
            "Failed to enter alternate screen: {}",
            e
        )));
    }

    let result = Terminal::new(CrosstermBackend::new(stdout))
        .map_err(|e| RentCalcError::TuiError(format!("Failed to create terminal: {}", e)))
        .and_then(|mut terminal| {
            let res = run_app(&mut terminal, app);
            let _ = terminal.show_cursor();
            res
        });

    // Always hand the terminal back, even when the loop failed
    let restore = disable_raw_mode().and_then(|_| execute!(io::stdout(), LeaveAlternateScreen));
    if let Err(e) = &restore {
        logging::error_log(&format!("Failed to restore terminal: {}", e));
    }

    result?;
    restore.map_err(RentCalcError::from)
}

/// Draw and dispatch events until the quit flag is set
fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let handler = EventHandler::new();
    let timeout = Duration::from_millis(EVENT_POLL_INTERVAL_MS);
    logging::info_log("Event loop started");

    while !app.should_quit {
        terminal
            .draw(|frame| ui::render(frame, &app))
            .map_err(|e| RentCalcError::TuiError(format!("Failed to draw frame: {}", e)))?;

        if let Some(Event::Key(key)) = handler.next_event(timeout)? {
            if key.kind == KeyEventKind::Press {
                let action = handler.handle_key_event(key);
                logging::debug_log(&format!("Key {:?} -> {:?}", key.code, action));
                app.handle_key_action(action);
            }
        }
    }

    logging::info_log("Event loop finished");
    Ok(())
}
