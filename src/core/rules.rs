use crate::core::board::{Board, Player};

/// The four scan axes: horizontal, vertical, both diagonals.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

pub const WIN_LENGTH: usize = 5;

pub struct WinChecker;

impl WinChecker {
    /// Exactly-five test restricted to runs through (row, col). A run of six
    /// or more on an axis is an overline and does not win on that axis.
    pub fn wins_at(board: &Board, player: Player, row: usize, col: usize) -> bool {
        if board.get(row, col) != Some(player) {
            return false;
        }
        for &(dr, dc) in &DIRECTIONS {
            let backward = Self::count_run(board, player, row, col, -dr, -dc);
            let forward = Self::count_run(board, player, row, col, dr, dc);
            if backward + forward + 1 == WIN_LENGTH {
                return true;
            }
        }
        false
    }

    /// Full-board exactly-five scan over all four axes.
    pub fn is_winner(board: &Board, player: Player) -> bool {
        for row in 0..board.size {
            for col in 0..board.size {
                if board.get(row, col) != Some(player) {
                    continue;
                }
                for &(dr, dc) in &DIRECTIONS {
                    // Only measure each run once, from its first stone.
                    if board.get_signed(row as isize - dr, col as isize - dc) == Some(player) {
                        continue;
                    }
                    let run = 1 + Self::count_run(board, player, row, col, dr, dc);
                    if run == WIN_LENGTH {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Contiguous same-color stones strictly beyond (row, col) along (dr, dc).
    pub fn count_run(
        board: &Board,
        player: Player,
        row: usize,
        col: usize,
        dr: isize,
        dc: isize,
    ) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while board.get_signed(r, c) == Some(player) {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }
}
