//! Terminal UI for Strictly Rewind
//!
//! Drives a [`strictly_rewind::GameSession`] from key presses and renders
//! the board, status line and move list with ratatui.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod ui;

pub use app::{App, AppAction, Focus};
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};
pub use ui::draw;

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use tracing::{error, info, instrument};

/// Runs the terminal UI until the user quits.
///
/// Once raw mode is on, the terminal is restored on every exit path,
/// including a failed screen setup.
#[instrument(skip(config))]
pub fn run(config: &TuiConfig) -> Result<()> {
    info!("Starting Strictly Rewind TUI");

    enable_raw_mode()?;
    let moves = restoring(&mut io::stdout(), || {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        let mut app = App::new(config);
        event_loop(&mut terminal, &mut app)?;
        Ok(app.session().len() - 1)
    })?;

    info!(moves, "TUI exited");
    Ok(())
}

/// Runs `body`, then leaves raw mode and the alternate screen whatever it
/// returned.
fn restoring<W: Write, T>(out: &mut W, body: impl FnOnce() -> Result<T>) -> Result<T> {
    let res = body();
    if let Err(err) = &res {
        error!(error = ?err, "TUI error");
    }

    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen, Show)?;
    res
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == AppAction::Quit
        {
            return Ok(());
        }
    }
}
