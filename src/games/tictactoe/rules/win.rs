//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// Three positions forming a straight line.
pub type Line = [Position; 3];

/// The eight winning lines: rows top to bottom, columns left to right,
/// then the two diagonals. Scan order decides which line is reported
/// when a board completes more than one.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the mark of the first line (in [`LINES`] order) whose three
/// squares are occupied by the same player, `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return sq.player();
        }
    }

    None
}

/// Returns the first line fully occupied by `mark`.
///
/// Meant to be fed the result of [`check_winner`]; a `None` mark never
/// matches, even on an empty board.
#[instrument]
pub fn winning_line(board: &Board, mark: Option<Player>) -> Option<Line> {
    let mark = Square::Occupied(mark?);
    LINES
        .into_iter()
        .find(|line| line.iter().all(|pos| board.get(*pos) == mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert_eq!(winning_line(&board, None), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), Some(Player::X));
        assert_eq!(
            winning_line(&board, Some(Player::X)),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopRight, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));
        board.set(Position::BottomLeft, Square::Occupied(Player::O));
        assert_eq!(check_winner(&board), Some(Player::O));
        assert_eq!(winning_line(&board, Some(Player::O)), Some(LINES[7]));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::O));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_table_order_wins_ties() {
        // X fills the top row and the left column; the row comes first.
        let mut board = Board::new();
        for pos in [
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::BottomLeft,
        ] {
            board.set(pos, Square::Occupied(Player::X));
        }
        assert_eq!(winning_line(&board, check_winner(&board)), Some(LINES[0]));
    }

    #[test]
    fn test_winner_reports_first_line_even_across_players() {
        // Constructed board: O owns the middle row, X the bottom row.
        let mut board = Board::new();
        for pos in LINES[1] {
            board.set(pos, Square::Occupied(Player::O));
        }
        for pos in LINES[2] {
            board.set(pos, Square::Occupied(Player::X));
        }
        assert_eq!(check_winner(&board), Some(Player::O));
        assert_eq!(winning_line(&board, Some(Player::X)), Some(LINES[2]));
    }

    #[test]
    fn test_winning_line_for_non_winner_is_none() {
        let mut board = Board::new();
        for pos in LINES[4] {
            board.set(pos, Square::Occupied(Player::X));
        }
        assert_eq!(winning_line(&board, Some(Player::O)), None);
    }
}
