//! Command-line interface for strictly_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe::{Action, HistoryOrder};

/// Strictly Tic-Tac-Toe - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Two-player tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it doesn't exist)
    #[arg(short, long, global = true, default_value = "strictly_tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Initial history order (ascending or descending), overrides the config
        #[arg(long)]
        history_order: Option<HistoryOrder>,
    },

    /// Replay a script of actions and print the resulting session
    Replay {
        /// Actions: a board index (0-8) or label plays, @N jumps to step N, t toggles order
        actions: Vec<Action>,

        /// Initial history order (ascending or descending), overrides the config
        #[arg(long)]
        history_order: Option<HistoryOrder>,

        /// Print the session as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
