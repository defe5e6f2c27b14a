use gomoku::core::board::{Board, Player};
use gomoku::core::moves::PlayerConfig;
use gomoku::core::rules::WinChecker;
use gomoku::core::state::{GameState, Outcome};

fn state_15() -> GameState {
    GameState::new(15, PlayerConfig::default(), PlayerConfig::default())
}

#[test]
fn test_horizontal_win_detection() {
    // Crosses build (7,0)..(7,4) with naughts interleaved on row 0; the
    // fifth crosses stone ends the game.
    let mut state = state_15();
    let crosses = [(7, 0), (7, 1), (7, 2), (7, 3), (7, 4)];
    let naughts = [(0, 0), (0, 1), (0, 2), (0, 3)];

    for i in 0..4 {
        state.apply_move(crosses[i].0, crosses[i].1).unwrap();
        state.apply_move(naughts[i].0, naughts[i].1).unwrap();
        assert_eq!(state.outcome, Outcome::InProgress);
    }
    state.apply_move(crosses[4].0, crosses[4].1).unwrap();

    assert_eq!(state.outcome, Outcome::CrossesWin);
    assert!(WinChecker::is_winner(&state.board, Player::Crosses));
    assert!(!WinChecker::is_winner(&state.board, Player::Naughts));
}

#[test]
fn test_vertical_win_detection() {
    let mut board = Board::new(15);
    for row in 3..8 {
        board.place(row, 10, Player::Naughts);
    }
    assert!(WinChecker::is_winner(&board, Player::Naughts));
    assert!(WinChecker::wins_at(&board, Player::Naughts, 5, 10));
}

#[test]
fn test_diagonal_win_detection() {
    let mut board = Board::new(19);
    for i in 0..5 {
        board.place(4 + i, 4 + i, Player::Crosses);
    }
    assert!(WinChecker::is_winner(&board, Player::Crosses));

    let mut board = Board::new(19);
    for i in 0..5 {
        board.place(10 - i, 2 + i, Player::Crosses);
    }
    assert!(WinChecker::is_winner(&board, Player::Crosses));
}

#[test]
fn test_four_is_not_a_win() {
    let mut board = Board::new(15);
    for col in 2..6 {
        board.place(7, col, Player::Crosses);
    }
    assert!(!WinChecker::is_winner(&board, Player::Crosses));
    assert!(!WinChecker::wins_at(&board, Player::Crosses, 7, 3));
}

#[test]
fn test_overline_is_not_a_win() {
    // Six in a row on (9,3)..(9,8): in progress, not a win.
    let mut board = Board::new(19);
    for col in 3..9 {
        board.place(9, col, Player::Crosses);
    }
    assert!(!WinChecker::is_winner(&board, Player::Crosses));
    for col in 3..9 {
        assert!(!WinChecker::wins_at(&board, Player::Crosses, 9, col));
    }
}

#[test]
fn test_extending_five_to_six_breaks_the_win() {
    let mut board = Board::new(19);
    for col in 0..5 {
        board.place(0, col, Player::Crosses);
    }
    assert!(WinChecker::is_winner(&board, Player::Crosses));

    board.place(0, 5, Player::Crosses);
    assert!(!WinChecker::is_winner(&board, Player::Crosses));
}

#[test]
fn test_five_with_blocked_flank_still_wins() {
    let mut board = Board::new(15);
    board.place(6, 1, Player::Naughts);
    for col in 2..7 {
        board.place(6, col, Player::Crosses);
    }
    board.place(6, 7, Player::Naughts);

    assert!(WinChecker::is_winner(&board, Player::Crosses));
    assert!(WinChecker::wins_at(&board, Player::Crosses, 6, 4));
}

#[test]
fn test_overline_on_one_axis_does_not_mask_five_on_another() {
    let mut board = Board::new(19);
    // Overline on row 9.
    for col in 3..9 {
        board.place(9, col, Player::Crosses);
    }
    // Exact five on column 0.
    for row in 0..5 {
        board.place(row, 0, Player::Crosses);
    }
    assert!(WinChecker::is_winner(&board, Player::Crosses));
}

#[test]
fn test_wins_at_rejects_foreign_and_empty_cells() {
    let mut board = Board::new(15);
    for col in 0..5 {
        board.place(3, col, Player::Crosses);
    }
    assert!(!WinChecker::wins_at(&board, Player::Naughts, 3, 2));
    assert!(!WinChecker::wins_at(&board, Player::Crosses, 10, 10));
}
