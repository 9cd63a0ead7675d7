//! Strictly Tic-Tac-Toe library - tic-tac-toe with time travel
//!
//! A small pure state machine: a board, whose turn it is, and a linear
//! history of moves that can be revisited and rewritten.
//!
//! # Architecture
//!
//! - **Rules**: pure queries over a board snapshot (winner, winning line)
//! - **Session**: history of snapshots, step pointer, turn and display order
//! - **Actions**: play / jump / toggle as first-class, replayable events
//! - **Contracts**: move preconditions and post-move invariants
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameSession, GameStatus, TicTacToePlayer as Player};
//!
//! let mut session = GameSession::new();
//! for index in [0, 4, 1, 7, 2] {
//!     session.apply_move(index);
//! }
//! assert_eq!(session.status(), GameStatus::Won(Player::X));
//!
//! // Travel back and branch off a different future.
//! session.jump_to(1).unwrap();
//! session.apply_move(8);
//! assert_eq!(session.history().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Action, ActionError, Board, GameSession, GameStatus, Hand, HistoryEntry, HistoryError,
    HistoryOrder, LINES, Line, MAX_STEPS, MoveError, Player as TicTacToePlayer, Position, Square,
    Step,
};

// Crate-level exports - Rules engine
pub use games::tictactoe::rules::{check_winner, is_draw, is_full, winning_line};

// Crate-level exports - Contracts and invariants
pub use games::tictactoe::contracts::{
    CellInRange, Contract, LegalMove, MoveContract, NoWinnerYet, SquareIsEmpty,
};
pub use games::tictactoe::invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoardInvariant, TicTacToeInvariants,
};
