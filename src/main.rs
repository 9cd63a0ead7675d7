//! Strictly Tic-Tac-Toe - Unified CLI
//!
//! Play in the terminal or replay a scripted game.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use strictly_tictactoe::{Action, GameConfig, GameSession, HistoryOrder};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;

    match cli.command {
        Command::Play { history_order } => {
            let config = match history_order {
                Some(order) => config.with_history_order(order),
                None => config,
            };
            run_play(&config)
        }
        Command::Replay {
            actions,
            history_order,
            json,
        } => {
            initialize_stderr_tracing(&config);
            let order = history_order.unwrap_or(*config.history_order());
            run_replay(order, &actions, json)
        }
    }
}

/// Run the terminal UI with logs sent to the configured file.
fn run_play(config: &GameConfig) -> Result<()> {
    // Logs go to a file so they don't interfere with the TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    tui::run_tui(*config.history_order())
}

/// Replay actions on a fresh session and print the result.
#[instrument(skip(actions), fields(count = actions.len()))]
fn run_replay(order: HistoryOrder, actions: &[Action], json: bool) -> Result<()> {
    info!("Replaying actions");

    let mut session = GameSession::with_history_order(order);
    for action in actions {
        session
            .dispatch(*action)
            .with_context(|| format!("Failed to apply action {}", action))?;
        debug!(%action, step = session.step_number(), "Action applied");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&session)?);
    } else {
        println!("{}", render_summary(&session));
    }

    Ok(())
}

/// Board, status and history as plain text; the active step is starred.
fn render_summary(session: &GameSession) -> String {
    let mut out = String::new();
    out.push_str(&session.board().display());
    out.push_str("\n\n");
    out.push_str(&session.status().to_string());
    out.push_str("\n\n");
    for entry in session.display_history() {
        let marker = if entry.step_number == session.step_number() {
            '*'
        } else {
            ' '
        };
        out.push_str(&format!("{} {}\n", marker, entry.label()));
    }
    out
}

fn env_filter(config: &GameConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

fn initialize_stderr_tracing(config: &GameConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .init();
}
