use gomoku::core::board::{Board, Player};

#[test]
fn test_new_board_is_empty() {
    let board = Board::new(19);
    assert!(board.is_empty());
    assert_eq!(board.stone_count(), 0);
    assert_eq!(board.size, 19);
    for row in 0..19 {
        for col in 0..19 {
            assert_eq!(board.get(row, col), None);
        }
    }
}

#[test]
fn test_place_and_get() {
    let mut board = Board::new(15);
    board.place(7, 7, Player::Crosses);
    board.place(7, 8, Player::Naughts);

    assert_eq!(board.get(7, 7), Some(Player::Crosses));
    assert_eq!(board.get(7, 8), Some(Player::Naughts));
    assert_eq!(board.get(0, 0), None);
    assert_eq!(board.stone_count(), 2);
    assert_eq!(board.count_stones(Player::Crosses), 1);
    assert_eq!(board.count_stones(Player::Naughts), 1);
}

#[test]
fn test_clear_removes_stone() {
    let mut board = Board::new(15);
    board.place(3, 4, Player::Crosses);
    board.clear(3, 4);

    assert_eq!(board.get(3, 4), None);
    assert!(board.is_empty());
    assert!(board.is_empty_cell(3, 4));
}

#[test]
fn test_signed_reads_off_grid_are_empty() {
    let mut board = Board::new(15);
    board.place(0, 0, Player::Crosses);

    assert_eq!(board.get_signed(0, 0), Some(Player::Crosses));
    assert_eq!(board.get_signed(-1, 0), None);
    assert_eq!(board.get_signed(0, -1), None);
    assert_eq!(board.get_signed(15, 3), None);
    assert!(!board.in_bounds(-1, 5));
    assert!(!board.in_bounds(5, 15));
    assert!(board.in_bounds(14, 14));
}

#[test]
fn test_is_open_excludes_occupied_and_off_grid() {
    let mut board = Board::new(15);
    board.place(5, 5, Player::Naughts);

    assert!(!board.is_open(5, 5));
    assert!(board.is_open(5, 6));
    assert!(!board.is_open(-1, 6));
    assert!(!board.is_open(6, 15));
}

#[test]
fn test_center() {
    assert_eq!(Board::new(15).center(), (7, 7));
    assert_eq!(Board::new(19).center(), (9, 9));
}

#[test]
fn test_full_board() {
    let mut board = Board::new(5);
    for row in 0..5 {
        for col in 0..5 {
            let player = if (row + col) % 2 == 0 {
                Player::Crosses
            } else {
                Player::Naughts
            };
            board.place(row, col, player);
        }
    }
    assert!(board.is_full());
    assert_eq!(board.stone_count(), 25);
}

#[test]
fn test_opponent() {
    assert_eq!(Player::Crosses.opponent(), Player::Naughts);
    assert_eq!(Player::Naughts.opponent(), Player::Crosses);
}
