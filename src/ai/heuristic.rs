use crate::ai::threat::{
    BROKEN_THREE_SCORE, FOUR_SCORE, ThreatTable, WIN_SCORE,
};
use crate::core::board::{Board, Player};
use crate::core::rules::{DIRECTIONS, WinChecker};

pub struct Heuristic;

impl Heuristic {
    /// Signed full-board score: positive favors `for_player`. An exact five
    /// for either side dominates everything else; otherwise the score is the
    /// threat-table sum for `for_player` minus the opponent's.
    pub fn score_position(board: &Board, for_player: Player) -> i32 {
        if WinChecker::is_winner(board, for_player) {
            return WIN_SCORE;
        }
        if WinChecker::is_winner(board, for_player.opponent()) {
            return -WIN_SCORE;
        }
        Self::player_score(board, for_player) - Self::player_score(board, for_player.opponent())
    }

    /// Value of placing `player` at the empty cell (row, col): the four-axis
    /// sum of the runs the stone would join. A cell completing an exact five
    /// scores at least WIN_SCORE; a cell that would only extend a run to six
    /// or more contributes nothing on that axis.
    pub fn score_at(board: &Board, player: Player, row: usize, col: usize) -> i32 {
        debug_assert!(board.is_empty_cell(row, col));
        let table = ThreatTable::global();
        let mut total = 0i32;

        for &(dr, dc) in &DIRECTIONS {
            let backward = WinChecker::count_run(board, player, row, col, -dr, -dc);
            let forward = WinChecker::count_run(board, player, row, col, dr, dc);
            let run = backward + forward + 1;
            if run > 5 {
                continue;
            }
            if run == 5 {
                total += WIN_SCORE;
                continue;
            }

            let before_open = board.is_open(
                row as isize - dr * (backward as isize + 1),
                col as isize - dc * (backward as isize + 1),
            );
            let after_open = board.is_open(
                row as isize + dr * (forward as isize + 1),
                col as isize + dc * (forward as isize + 1),
            );
            let open_ends = before_open as usize + after_open as usize;
            total += table.run_score(run, open_ends);
        }
        total
    }

    /// Threat-table sum over every run of `player` on the board. Each run is
    /// scored once per axis via a per-direction analyzed mask.
    fn player_score(board: &Board, player: Player) -> i32 {
        let table = ThreatTable::global();
        let size = board.size;
        let mut analyzed = vec![0u8; size * size];
        let mut total = 0i32;

        for row in 0..size {
            for col in 0..size {
                if board.get(row, col) != Some(player) {
                    continue;
                }
                for (dir, &(dr, dc)) in DIRECTIONS.iter().enumerate() {
                    let bit = 1u8 << dir;
                    if analyzed[row * size + col] & bit != 0 {
                        continue;
                    }

                    // Rewind to the first stone of the run on this axis.
                    let mut sr = row as isize;
                    let mut sc = col as isize;
                    while board.get_signed(sr - dr, sc - dc) == Some(player) {
                        sr -= dr;
                        sc -= dc;
                    }

                    // Walk the run forward, marking every stone as analyzed
                    // for this direction.
                    let mut length = 0usize;
                    let mut r = sr;
                    let mut c = sc;
                    while board.get_signed(r, c) == Some(player) {
                        analyzed[(r as usize) * size + c as usize] |= bit;
                        length += 1;
                        r += dr;
                        c += dc;
                    }

                    // An overline can never become an exact five on its own
                    // axis: every five-window inside it keeps an own-stone
                    // flank. Inert, score nothing.
                    if length >= 6 {
                        continue;
                    }
                    if length == 5 {
                        total += WIN_SCORE;
                        continue;
                    }

                    let before_open = board.is_open(sr - dr, sc - dc);
                    let after_open = board.is_open(r, c);
                    let open_ends = before_open as usize + after_open as usize;
                    total += table.run_score(length, open_ends);
                    if after_open {
                        total += Self::gap_bonus(board, player, length, before_open, r, c, dr, dc);
                    }
                }
            }
        }
        total
    }

    /// Gapped formations: a run, one empty cell, then more own stones.
    /// Credited from the left run only, so each gap counts once.
    fn gap_bonus(
        board: &Board,
        player: Player,
        run: usize,
        before_open: bool,
        gap_r: isize,
        gap_c: isize,
        dr: isize,
        dc: isize,
    ) -> i32 {
        let mut tail = 0usize;
        let mut r = gap_r + dr;
        let mut c = gap_c + dc;
        while board.get_signed(r, c) == Some(player) {
            tail += 1;
            r += dr;
            c += dc;
        }
        if tail == 0 {
            return 0;
        }
        let far_open = board.is_open(r, c);
        match run + tail {
            // Filling the gap makes exactly five.
            4 => FOUR_SCORE,
            3 if before_open || far_open => BROKEN_THREE_SCORE,
            // Five or more through the gap would be an overline; two is noise.
            _ => 0,
        }
    }
}
