//! Game session: history of board snapshots plus a pointer into it.
//!
//! The session never stores whether the game is won or drawn. Both are
//! derived from the snapshot at the pointer each time they are asked for,
//! so jumping back in time reopens a finished game.
//!
//! History is a plain vector. Playing from a step other than the latest
//! first truncates everything after the pointer (branch-on-write); only
//! one branch is ever kept.

use super::action::{Action, ActionError, MoveError};
use super::contracts::{Contract, LegalMove, MoveContract};
use super::history::{HistoryEntry, HistoryError, HistoryOrder, Step};
use super::rules::{self, Line};
use super::types::{Board, GameStatus, Hand, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of moves that fill the board.
pub const MAX_STEPS: usize = 9;

/// A single game with time travel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    pub(super) history: Vec<Step>,
    pub(super) step_number: usize,
    pub(super) x_is_next: bool,
    pub(super) history_order: HistoryOrder,
}

impl GameSession {
    /// Creates a session holding only the empty starting board.
    #[instrument]
    pub fn new() -> Self {
        Self::with_history_order(HistoryOrder::default())
    }

    /// Creates a session that lists history in the given order.
    #[instrument]
    pub fn with_history_order(history_order: HistoryOrder) -> Self {
        Self {
            history: vec![Step::initial()],
            step_number: 0,
            x_is_next: true,
            history_order,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Mutations
    // ─────────────────────────────────────────────────────────────

    /// Plays the next mark on `index` (0-8).
    ///
    /// Does nothing when the index is off the board, the square is taken
    /// or the active step already has a winner.
    #[instrument(skip(self), fields(step = self.step_number))]
    pub fn apply_move(&mut self, index: usize) {
        if let Err(reason) = self.try_apply_move(index) {
            debug!(%reason, "Move ignored");
        }
    }

    /// Plays the next mark on `index`, reporting why a move was refused.
    ///
    /// On success, steps after the pointer are discarded, the new step is
    /// appended and becomes active, and the turn passes to the opponent.
    /// On failure the session is unchanged.
    ///
    /// # Errors
    ///
    /// Returns the first failed precondition, or an invariant violation
    /// detected after the move in debug builds.
    #[instrument(skip(self), fields(step = self.step_number, x_is_next = self.x_is_next))]
    pub fn try_apply_move(&mut self, index: usize) -> Result<&Step, MoveError> {
        let pos = LegalMove::check(index, self)?;

        let player = self.next_player();
        let mut board = self.board().clone();
        board.set(pos, Square::Occupied(player));

        let mut history = self.history[..=self.step_number].to_vec();
        let step_number = history.len();
        history.push(Step::new(board, Some(pos.hand()), Some(player), step_number));

        let next = Self {
            history,
            step_number,
            x_is_next: !self.x_is_next,
            history_order: self.history_order,
        };

        if cfg!(debug_assertions) {
            MoveContract::post(self, &next)?;
        }

        debug!(%player, position = %pos, step_number, "Move applied");
        *self = next;
        Ok(self.current_step())
    }

    /// Makes a recorded step active.
    ///
    /// History is left alone. The turn is set from the parity of `step`:
    /// X moves next after an even step, O after an odd one.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::StepOutOfRange`] for a step that was never
    /// recorded; the session is unchanged.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), HistoryError> {
        if step >= self.history.len() {
            return Err(HistoryError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }

        self.step_number = step;
        self.x_is_next = step % 2 == 0;
        debug!(step, x_is_next = self.x_is_next, "Jumped");
        Ok(())
    }

    /// Flips the order history is listed in.
    #[instrument(skip(self))]
    pub fn toggle_history_order(&mut self) {
        self.history_order = self.history_order.toggle();
        debug!(order = %self.history_order, "History order toggled");
    }

    /// Applies a single action.
    ///
    /// Plays go through [`GameSession::apply_move`] and are silently ignored
    /// when illegal.
    ///
    /// # Errors
    ///
    /// Only jumps can fail, see [`GameSession::jump_to`].
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) -> Result<(), ActionError> {
        match action {
            Action::Play(index) => self.apply_move(index),
            Action::JumpTo(step) => self.jump_to(step)?,
            Action::ToggleHistoryOrder => self.toggle_history_order(),
        }
        Ok(())
    }

    /// Starts a fresh session and dispatches `actions` in order.
    ///
    /// # Errors
    ///
    /// Stops at the first action that fails to dispatch.
    #[instrument(skip(actions), fields(count = actions.len()))]
    pub fn replay(actions: &[Action]) -> Result<Self, ActionError> {
        let mut session = Self::new();
        for action in actions {
            session.dispatch(*action)?;
        }
        Ok(session)
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// The active step.
    pub fn current_step(&self) -> &Step {
        &self.history[self.step_number]
    }

    /// Board at the active step.
    pub fn board(&self) -> &Board {
        self.current_step().board()
    }

    /// Coordinate of the move that produced the active step.
    pub fn current_hand(&self) -> Option<Hand> {
        self.current_step().hand()
    }

    /// Winner on the active board.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self.board())
    }

    /// Winning line on the active board.
    pub fn winning_line(&self) -> Option<Line> {
        rules::winning_line(self.board(), self.winner())
    }

    /// Derived status of the active step.
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.winner() {
            GameStatus::Won(winner)
        } else if self.step_number == MAX_STEPS {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: self.next_player(),
            }
        }
    }

    /// History in display order, ready for "jump to step" controls.
    pub fn display_history(&self) -> Vec<HistoryEntry> {
        let entries = self.history.iter().map(HistoryEntry::from_step);
        match self.history_order {
            HistoryOrder::Ascending => entries.collect(),
            HistoryOrder::Descending => entries.rev().collect(),
        }
    }

    /// All recorded steps, oldest first.
    pub fn history(&self) -> &[Step] {
        &self.history
    }

    /// Index of the active step.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// Whether X places the next mark.
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    /// Player who places the next mark.
    pub fn next_player(&self) -> Player {
        Player::from_x_is_next(self.x_is_next)
    }

    /// Current history listing order.
    pub fn history_order(&self) -> HistoryOrder {
        self.history_order
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
