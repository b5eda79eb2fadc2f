//! Scenario tests for the time-travelling game session.

use strictly_rewind::{
    GameSession, GameStatus, IllegalMove, Mark, MoveControl, PlayOutcome, Position, SessionError,
    SortOrder,
};

fn play_all(session: &mut GameSession, indices: &[usize]) {
    for &index in indices {
        let outcome = session.play_index(index).expect("index on board");
        assert!(outcome.is_placed(), "move {} should be placed", index);
    }
}

#[test]
fn test_diagonal_win_stops_play() {
    let mut session = GameSession::new();
    play_all(&mut session, &[0, 3, 4, 1, 8]);

    assert_eq!(session.status(), GameStatus::Winner(Mark::X));
    assert_eq!(session.status().to_string(), "Winner: X");

    let win = session.win_result().expect("game is won");
    assert_eq!(
        *win.line(),
        [Position::TopLeft, Position::Center, Position::BottomRight]
    );

    let before = session.clone();
    let outcome = session.play(Position::TopRight);
    assert_eq!(outcome, PlayOutcome::Ignored(IllegalMove::GameOver(Mark::X)));
    assert_eq!(session, before);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut session = GameSession::new();
    // X O X / X O O / O X X
    play_all(&mut session, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(session.cursor(), 9);
    assert!(session.current_snapshot().is_full());
    assert!(session.win_result().is_none());
    assert_eq!(session.status(), GameStatus::Draw);
    assert_eq!(session.status().to_string(), "Result is a draw");
    assert!(session.status().is_over());
}

#[test]
fn test_history_length_tracks_cursor_after_plays() {
    let mut session = GameSession::new();
    assert_eq!(session.len(), session.cursor() + 1);

    for index in [4, 0, 8, 2] {
        let before = session.turn_owner();
        session.play_index(index).expect("index on board");
        assert_eq!(session.len(), session.cursor() + 1);
        assert_eq!(session.turn_owner(), before.opponent());
    }
}

#[test]
fn test_jump_then_play_discards_future() {
    let mut session = GameSession::new();
    play_all(&mut session, &[0, 4, 8]);
    let abandoned = session.history()[2];

    session.jump_to(1).expect("move 1 exists");
    assert_eq!(session.len(), 4);
    assert_eq!(session.turn_owner(), Mark::O);

    session.play(Position::TopRight);

    assert_eq!(session.len(), 3);
    assert_eq!(session.cursor(), 2);
    assert_ne!(session.history()[2], abandoned);
    assert!(!session.history().contains(&abandoned));
    assert_eq!(
        session.jump_to(3),
        Err(SessionError::MoveOutOfRange { requested: 3, len: 3 })
    );
}

#[test]
fn test_jump_back_keeps_descriptors() {
    let mut session = GameSession::new();
    play_all(&mut session, &[4, 0, 5]);

    session.jump_to(1).expect("move 1 exists");

    let current = session.move_descriptor(1).expect("move 1 exists");
    assert_eq!(*current.target(), Some(Position::Center));
    assert_eq!(current.row_col(), Some((1, 1)));
    assert!(*current.is_current());
    assert_eq!(current.control(), MoveControl::Label);
    assert_eq!(current.label(), "You are at move #1 (1,1)");

    // Future entries are still recorded until a new move is played.
    let later = session.move_descriptor(3).expect("move 3 still recorded");
    assert_eq!(later.label(), "Go to move #3 (1,2)");

    session.play(Position::BottomLeft);
    assert!(session.move_descriptor(3).is_err());
    assert_eq!(
        *session.move_descriptor(2).expect("new move 2").target(),
        Some(Position::BottomLeft)
    );
}

#[test]
fn test_move_list_order() {
    let mut session = GameSession::new();
    play_all(&mut session, &[0, 4]);

    let ascending = session.move_list(SortOrder::Ascending);
    let labels: Vec<_> = ascending.iter().map(|d| d.label()).collect();
    assert_eq!(
        labels,
        vec![
            "Go to game start".to_string(),
            "Go to move #1 (0,0)".to_string(),
            "You are at move #2 (1,1)".to_string(),
        ]
    );

    let mut descending = session.move_list(SortOrder::Descending);
    descending.reverse();
    assert_eq!(descending, ascending);
}

#[test]
fn test_jump_to_start_restores_empty_board() {
    let mut session = GameSession::new();
    play_all(&mut session, &[0, 3, 4, 1, 8]);

    session.jump_to(0).expect("start exists");

    assert_eq!(session.current_snapshot().occupied(), 0);
    assert_eq!(session.status(), GameStatus::NextPlayer(Mark::X));
    assert_eq!(session.move_descriptor(0).expect("start").label(), "You are at move #0");

    // The won position is still reachable until a new move replaces it.
    session.jump_to(5).expect("move 5 exists");
    assert_eq!(session.status(), GameStatus::Winner(Mark::X));
}

#[test]
fn test_only_the_ninth_position_is_a_draw() {
    let mut session = GameSession::new();
    play_all(&mut session, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    for move_index in 0..9 {
        session.jump_to(move_index).expect("recorded move");
        assert!(!session.current_snapshot().is_full());
        assert_eq!(session.status(), GameStatus::NextPlayer(session.turn_owner()));
    }
}
