//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winner.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Position};
    use super::*;

    fn board_from(marks: &str) -> Board {
        let mut board = Board::new();
        for (pos, c) in Position::ALL.iter().zip(marks.chars()) {
            match c {
                'X' => board.set(*pos, Square::Occupied(Player::X)),
                'O' => board.set(*pos, Square::Occupied(Player::O)),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = board_from("X...O....");
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / X O O / O X X
        let board = board_from("XOXXOOOXX");
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // X X X / O O X / X O O
        let board = board_from("XXXOOXXOO");
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
