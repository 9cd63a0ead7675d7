//! Terminal UI for Strictly Tic-Tac-Toe.
//!
//! The UI is a thin collaborator of [`GameSession`]: it turns key presses
//! into actions and draws whatever the session reports.
//!
//! [`GameSession`]: strictly_tictactoe::GameSession

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use strictly_tictactoe::HistoryOrder;
use tracing::{error, info, instrument};

use app::App;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the terminal UI until the player quits.
#[instrument]
pub fn run_tui(history_order: HistoryOrder) -> Result<()> {
    info!("Starting Strictly Tic-Tac-Toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(history_order));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");

    res
}

/// Draw, wait for a key, repeat.
fn run_app(terminal: &mut Term, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
