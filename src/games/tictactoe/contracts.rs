//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::Position;
use super::action::MoveError;
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::rules;
use super::session::GameSession;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The index must name a square.
pub struct CellInRange;

impl CellInRange {
    /// Resolves the index to a position.
    #[instrument]
    pub fn check(index: usize) -> Result<Position, MoveError> {
        Position::from_index(index).ok_or(MoveError::OutOfBounds(index))
    }
}

/// Precondition: The active board must not have a winner.
pub struct NoWinnerYet;

impl NoWinnerYet {
    /// Fails with the winner when the active board is already won.
    #[instrument(skip(session))]
    pub fn check(session: &GameSession) -> Result<(), MoveError> {
        match rules::check_winner(session.board()) {
            Some(winner) => Err(MoveError::GameOver(winner)),
            None => Ok(()),
        }
    }
}

/// Precondition: The square at the position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails when the square is taken on the active board.
    #[instrument(skip(session))]
    pub fn check(pos: Position, session: &GameSession) -> Result<(), MoveError> {
        if !session.board().is_empty(pos) {
            Err(MoveError::SquareOccupied(pos))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: in range, no winner yet, square empty.
///
/// Checked in that order, so a move on a won board reports
/// [`MoveError::GameOver`] even when its square is also taken.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(session))]
    pub fn check(index: usize, session: &GameSession) -> Result<Position, MoveError> {
        let pos = CellInRange::check(index)?;
        NoWinnerYet::check(session)?;
        SquareIsEmpty::check(pos, session)?;
        Ok(pos)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for playing a board index.
///
/// Preconditions:
/// - Index names a square
/// - Active board has no winner
/// - Square is empty
///
/// Postconditions:
/// - History gained exactly one step beyond the old pointer
/// - All session invariants hold
pub struct MoveContract;

impl Contract<GameSession, usize> for MoveContract {
    fn pre(session: &GameSession, index: &usize) -> Result<(), MoveError> {
        LegalMove::check(*index, session).map(|_| ())
    }

    fn post(before: &GameSession, after: &GameSession) -> Result<(), MoveError> {
        let expected_len = before.step_number() + 2;
        if after.history().len() != expected_len {
            warn!(
                expected_len,
                actual_len = after.history().len(),
                "History not truncated before append"
            );
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: history length {} after move from step {}",
                after.history().len(),
                before.step_number()
            )));
        }

        TicTacToeInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
