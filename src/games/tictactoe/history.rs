//! Recorded steps and their display form.

use super::types::{Board, Hand, Player};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// One recorded point in history.
///
/// Step 0 is the empty board with no hand and no player; every later step
/// is the board right after the move that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Step {
    board: Board,
    hand: Option<Hand>,
    player: Option<Player>,
    step_number: usize,
}

impl Step {
    /// The initial placeholder step.
    pub fn initial() -> Self {
        Self::new(Board::new(), None, None, 0)
    }

    /// Board snapshot after this step.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Coordinate of the move that produced this step.
    pub fn hand(&self) -> Option<Hand> {
        self.hand
    }

    /// Player who made the move.
    pub fn player(&self) -> Option<Player> {
        self.player
    }

    /// Position of this step in history.
    pub fn step_number(&self) -> usize {
        self.step_number
    }
}

/// Order in which history is listed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum HistoryOrder {
    /// Oldest step first.
    #[default]
    Ascending,
    /// Newest step first.
    Descending,
}

impl HistoryOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// A history step as offered to the player for jumping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Step to pass to `jump_to`.
    pub step_number: usize,
    /// Coordinate of the move, absent for the game start.
    pub hand: Option<Hand>,
    /// Player who made the move, absent for the game start.
    pub player: Option<Player>,
}

impl HistoryEntry {
    /// Builds the entry for a recorded step.
    pub fn from_step(step: &Step) -> Self {
        Self {
            step_number: step.step_number(),
            hand: step.hand(),
            player: step.player(),
        }
    }

    /// Label for the "jump to step" control.
    pub fn label(&self) -> String {
        match (self.step_number, self.player, self.hand) {
            (0, _, _) => "Go to game start".to_string(),
            (n, Some(player), Some(hand)) => format!("Go to move #{n} {player}: {hand}"),
            (n, _, _) => format!("Go to move #{n}"),
        }
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// Error when navigating history.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// The requested step was never recorded.
    #[display("Step {step} is out of range (history has {len} steps)")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Current history length.
        len: usize,
    },
}

impl std::error::Error for HistoryError {}
