//! Monotonic board invariant: each step adds exactly one mark.

use super::super::{GameSession, Position, Square};
use super::Invariant;

/// Invariant: Board snapshots grow by one mark per step.
///
/// Step N has exactly N occupied squares, and every mark of step N-1 is
/// still in place at step N. The new square matches the step's hand and
/// player.
pub struct MonotonicBoardInvariant;

impl Invariant<GameSession> for MonotonicBoardInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();

        let counts_match = history
            .iter()
            .all(|step| step.board().occupied_count() == step.step_number());

        let grows = history.windows(2).all(|pair| {
            let (prev, step) = (pair[0].board(), &pair[1]);
            let next = step.board();

            let kept = Position::ALL
                .iter()
                .all(|pos| prev.is_empty(*pos) || prev.get(*pos) == next.get(*pos));

            let placed = match (step.hand(), step.player()) {
                (Some(hand), Some(player)) => Position::ALL.iter().any(|pos| {
                    pos.hand() == hand
                        && prev.is_empty(*pos)
                        && next.get(*pos) == Square::Occupied(player)
                }),
                _ => false,
            };

            kept && placed
        });

        counts_match && grows
    }

    fn description() -> &'static str {
        "Each step adds exactly one mark where its move was played"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Step};

    #[test]
    fn test_empty_session_holds() {
        assert!(MonotonicBoardInvariant::holds(&GameSession::new()));
    }

    #[test]
    fn test_full_game_holds() {
        let mut session = GameSession::new();
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            session.apply_move(index);
        }
        assert_eq!(session.history().len(), 10);
        assert!(MonotonicBoardInvariant::holds(&session));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut session = GameSession::new();
        session.apply_move(0);
        session.apply_move(4);

        // Step 2 replaces X's corner with O instead of adding a mark.
        let mut board = session.history[1].board().clone();
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));
        session.history[2] = Step::new(board, Some(Position::Center.hand()), Some(Player::O), 2);
        assert!(!MonotonicBoardInvariant::holds(&session));
    }

    #[test]
    fn test_mark_away_from_hand_violates() {
        let mut session = GameSession::new();
        session.apply_move(0);

        // Hand says center, mark sits bottom-right.
        let mut board = session.history[0].board().clone();
        board.set(Position::BottomRight, Square::Occupied(Player::X));
        session.history[1] = Step::new(board, Some(Position::Center.hand()), Some(Player::X), 1);
        assert!(!MonotonicBoardInvariant::holds(&session));
    }
}
