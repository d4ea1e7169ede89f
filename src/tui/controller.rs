use crate::tui::app::{AppState, InputAction};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key.code) {
                    break;
                }
            }
        }
    }
    Ok(())
}

/// Map a key to an action. Returns true when the user asked to quit.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    if matches!(code, KeyCode::Char('?')) {
        let _ = app.handle_input(InputAction::ToggleHelp);
        return false;
    }
    if app.help_open() {
        if matches!(code, KeyCode::Esc) {
            let _ = app.handle_input(InputAction::ToggleHelp);
        }
        return false;
    }

    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
        KeyCode::Char(' ') | KeyCode::Char('d') | KeyCode::Char('D') => {
            let _ = app.handle_input(InputAction::DealHand);
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            let _ = app.handle_input(InputAction::Shuffle);
        }
        KeyCode::Char('n') | KeyCode::Char('N') => {
            let _ = app.handle_input(InputAction::NewDeck);
        }
        KeyCode::Up => {
            let _ = app.handle_input(InputAction::ScrollUp);
        }
        KeyCode::Down => {
            let _ = app.handle_input(InputAction::ScrollDown);
        }
        _ => {}
    }
    false
}
