//! First-class action types for tic-tac-toe.
//!
//! Everything a player can do to a session is an [`Action`]: a domain
//! event that can be parsed, logged, dispatched and replayed.

use super::history::HistoryError;
use super::{Player, Position};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Something a player does to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Place the next mark on a board index (0-8).
    Play(usize),
    /// Move the pointer to a recorded step.
    JumpTo(usize),
    /// Flip the order history is listed in.
    ToggleHistoryOrder,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Play(index) => write!(f, "{index}"),
            Action::JumpTo(step) => write!(f, "@{step}"),
            Action::ToggleHistoryOrder => write!(f, "t"),
        }
    }
}

impl FromStr for Action {
    type Err = ActionError;

    /// Parses `4` or `center` as a move, `@2` as a jump and `t` as a toggle.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.eq_ignore_ascii_case("t") || s.eq_ignore_ascii_case("toggle") {
            return Ok(Action::ToggleHistoryOrder);
        }

        if let Some(step) = s.strip_prefix('@') {
            return step
                .parse()
                .map(Action::JumpTo)
                .map_err(|_| ActionError::Parse(s.to_string()));
        }

        // Out-of-range indices still parse: playing them is a silent no-op.
        if let Ok(index) = s.parse::<usize>() {
            return Ok(Action::Play(index));
        }

        Position::from_label_or_number(s)
            .map(|pos| Action::Play(pos.to_index()))
            .ok_or_else(|| ActionError::Parse(s.to_string()))
    }
}

/// Reason a move was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a square.
    #[display("Index {_0} is out of bounds (must be 0-8)")]
    OutOfBounds(usize),

    /// The active step already has a winner.
    #[display("Game is already over, {_0} won")]
    GameOver(Player),

    /// The square at the position is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(Position),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {_0}")]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Error when parsing or dispatching an action.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum ActionError {
    /// Text that names no action.
    #[display("Unrecognized action: {_0:?}")]
    #[from(ignore)]
    Parse(String),

    /// A jump to a step that does not exist.
    #[display("{_0}")]
    History(HistoryError),
}

impl std::error::Error for ActionError {}
