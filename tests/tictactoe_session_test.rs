//! Tests for the game session: moves, time travel and derived status.

use strictly_tictactoe::{
    Action, GameSession, GameStatus, Hand, HistoryError, HistoryOrder, MAX_STEPS, Position,
    TicTacToePlayer as Player,
};

fn played(moves: &[usize]) -> GameSession {
    let mut session = GameSession::new();
    for index in moves {
        session.apply_move(*index);
    }
    session
}

#[test]
fn test_x_wins_top_row() {
    let session = played(&[0, 4, 1, 7, 2]);

    assert_eq!(session.winner(), Some(Player::X));
    assert_eq!(
        session
            .winning_line()
            .map(|line| line.map(Position::to_index)),
        Some([0, 1, 2])
    );
    assert_eq!(session.status(), GameStatus::Won(Player::X));
    assert_eq!(session.status().to_string(), "Winner: X");
}

#[test]
fn test_full_board_is_a_draw() {
    // X O X / X O O / O X X
    let session = played(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(session.winner(), None);
    assert_eq!(session.winning_line(), None);
    assert_eq!(session.step_number(), MAX_STEPS);
    assert_eq!(session.status().to_string(), "Draw");
}

#[test]
fn test_turns_alternate() {
    let session = played(&[4, 0, 8, 2, 6]);
    for step in session.history().iter().skip(1) {
        let expected = if step.step_number() % 2 == 1 {
            Player::X
        } else {
            Player::O
        };
        assert_eq!(step.player(), Some(expected));
    }
}

#[test]
fn test_snapshot_has_step_number_marks() {
    let session = played(&[4, 0, 8, 2, 6, 1]);
    for step in session.history() {
        assert_eq!(step.board().occupied_count(), step.step_number());
    }
}

#[test]
fn test_illegal_moves_leave_state_unchanged() {
    let mut session = played(&[4]);
    let before = session.clone();

    session.apply_move(4);
    session.apply_move(9);
    assert_eq!(session, before);

    let mut won = played(&[0, 4, 1, 7, 2]);
    let before = won.clone();
    for index in 0..9 {
        won.apply_move(index);
    }
    assert_eq!(won, before);
}

#[test]
fn test_moves_after_draw_are_ignored() {
    let mut session = played(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    let before = session.clone();
    session.apply_move(0);
    assert_eq!(session, before);
}

#[test]
fn test_branching_discards_future() {
    let mut session = played(&[0, 4, 8]);
    session.jump_to(1).unwrap();
    session.apply_move(2);

    assert_eq!(session.history().len(), 3);
    let step = &session.history()[2];
    assert_eq!(step.step_number(), 2);
    assert_eq!(step.player(), Some(Player::O));
    assert_eq!(step.hand(), Hand::from_index(2));
    assert!(session.board().is_empty(Position::Center));
    assert!(session.board().is_empty(Position::BottomRight));
}

#[test]
fn test_branch_length_is_old_pointer_plus_two() {
    for pointer in 0..5 {
        let mut session = played(&[0, 4, 8, 2, 6]);
        session.jump_to(pointer).unwrap();
        let free = Position::valid_moves(session.board())[0];
        session.apply_move(free.to_index());
        assert_eq!(session.history().len(), pointer + 2);
    }
}

#[test]
fn test_jump_turn_follows_parity_only() {
    let mut session = played(&[0, 4, 8, 2]);
    for step in 0..session.history().len() {
        session.jump_to(step).unwrap();
        assert_eq!(session.x_is_next(), step % 2 == 0);
    }
    assert_eq!(session.history().len(), 5);
}

#[test]
fn test_jump_to_unknown_step() {
    let mut session = played(&[0]);
    assert_eq!(
        session.jump_to(3),
        Err(HistoryError::StepOutOfRange { step: 3, len: 2 })
    );
    assert_eq!(session.step_number(), 1);
}

#[test]
fn test_jumping_to_won_step_blocks_moves_again() {
    let mut session = played(&[0, 4, 1, 7, 2]);
    session.jump_to(3).unwrap();
    session.jump_to(5).unwrap();
    let before = session.clone();
    session.apply_move(8);
    assert_eq!(session, before);
}

#[test]
fn test_status_next_player_after_jump() {
    let mut session = played(&[0, 4, 1]);
    session.jump_to(2).unwrap();
    assert_eq!(session.status(), GameStatus::InProgress { next: Player::X });
    assert_eq!(session.status().to_string(), "Next player: X");
}

#[test]
fn test_display_history_descending() {
    let mut session = played(&[0, 4]);
    session.toggle_history_order();

    let labels: Vec<String> = session
        .display_history()
        .iter()
        .map(|entry| entry.label())
        .collect();
    assert_eq!(
        labels,
        vec![
            "Go to move #2 O: (2, 2)",
            "Go to move #1 X: (1, 1)",
            "Go to game start",
        ]
    );
    assert_eq!(session.history()[1].step_number(), 1);
}

#[test]
fn test_configured_order_survives_moves() {
    let mut session = GameSession::with_history_order(HistoryOrder::Descending);
    session.apply_move(4);
    assert_eq!(session.history_order(), HistoryOrder::Descending);
    assert_eq!(session.display_history()[0].step_number, 1);
}

#[test]
fn test_replay_script() {
    let actions: Vec<Action> = ["0", "4", "@1", "t", "bottom-right"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    let session = GameSession::replay(&actions).unwrap();

    assert_eq!(session.history().len(), 3);
    assert_eq!(session.current_hand(), Some(Hand { row: 3, col: 3 }));
    assert_eq!(session.history_order(), HistoryOrder::Descending);
}

#[test]
fn test_session_serializes_to_json() {
    let session = played(&[4]);
    let json = serde_json::to_value(&session).unwrap();
    assert_eq!(json["step_number"], 1);
    assert_eq!(json["x_is_next"], false);
    assert_eq!(json["history_order"], "ascending");
    assert_eq!(json["history"][1]["hand"]["row"], 2);
}
