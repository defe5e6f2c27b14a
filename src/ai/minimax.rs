//! Depth-limited minimax with alpha-beta pruning.
//!
//! The search is single-threaded and keeps all of its mutable state on the
//! call stack: it clones the caller's board once and applies/reverts moves
//! on that working copy. Candidates are ordered by a cheap attack-plus-
//! defense priority; an immediate win is returned without expanding the
//! tree, and a cell where the opponent would complete five restricts the
//! root to blocking replies. An optional wall-clock deadline is polled at
//! every node entry and unwinds the recursion with a sentinel; the best
//! already-completed root candidate is then returned.

use crate::ai::heuristic::Heuristic;
use crate::ai::move_generation::MoveGenerator;
use crate::ai::threat::WIN_SCORE;
use crate::core::board::{Board, Player};
use crate::core::rules::WinChecker;
use crate::core::state::GameState;
use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};

/// Internal sentinel: the move deadline passed mid-search.
struct DeadlineExpired;

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// None only when no candidate exists (full board): no move, draw.
    pub best_move: Option<(usize, usize)>,
    pub score: i32,
    pub opponent_score: i32,
    pub nodes: u64,
    pub depth: u32,
    pub elapsed: Duration,
}

struct SearchContext {
    me: Player,
    radius: usize,
    deadline: Option<Instant>,
    nodes: u64,
}

#[derive(Copy, Clone)]
struct RankedMove {
    row: usize,
    col: usize,
    attack: i32,
    defend: i32,
    distance: usize,
}

pub struct Searcher {
    rng: ChaCha8Rng,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Searcher {
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }

    /// Seeded construction; with no deadline the whole search is then
    /// deterministic, including the randomized opening reply.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Pick a move for the side to move. Never mutates `state` and never
    /// returns an occupied or out-of-range cell.
    pub fn best_move(&mut self, state: &GameState) -> SearchOutcome {
        let start = Instant::now();
        let me = state.player_to_move;
        let depth = state.config_for(me).search_depth.max(1);
        let radius = state.search_radius.max(1);

        if state.outcome.is_over() {
            return Self::no_move(depth, start);
        }

        let mut board = state.board.clone();

        // Opening shortcuts: the full search yields nothing on these
        // positions.
        if board.is_empty() {
            let (row, col) = board.center();
            return Self::forced(&board, me, row, col, depth, start);
        }
        if board.count_stones(me) == 0 && board.count_stones(me.opponent()) == 1 {
            if let Some((row, col)) = self.reply_near_opening(&board) {
                return Self::forced(&board, me, row, col, depth, start);
            }
        }

        let candidates = MoveGenerator::candidates(&board, radius);
        if candidates.is_empty() {
            return Self::no_move(depth, start);
        }

        let last = state
            .last_move()
            .map(|m| (m.row, m.col))
            .unwrap_or_else(|| board.center());
        let ranked = Self::rank(&board, me, &candidates, last);

        // An immediate five needs no tree at all, and beats any block.
        if let Some(mv) = ranked.iter().copied().find(|m| m.attack >= WIN_SCORE) {
            board.place(mv.row, mv.col, me);
            let wins = WinChecker::wins_at(&board, me, mv.row, mv.col);
            board.clear(mv.row, mv.col);
            if wins {
                return SearchOutcome {
                    best_move: Some((mv.row, mv.col)),
                    score: WIN_SCORE + depth as i32,
                    opponent_score: mv.defend,
                    nodes: 1,
                    depth,
                    elapsed: start.elapsed(),
                };
            }
        }

        // A cell where the opponent completes five next turn forces the
        // reply set down to the blocks.
        let blocks: Vec<RankedMove> = ranked
            .iter()
            .copied()
            .filter(|m| m.defend >= WIN_SCORE)
            .collect();
        let root_moves = if blocks.is_empty() { ranked } else { blocks };

        let mut ctx = SearchContext {
            me,
            radius,
            deadline: state.move_deadline.map(|limit| start + limit),
            nodes: 0,
        };

        let mut alpha = i32::MIN;
        let beta = i32::MAX;
        let mut best: Option<usize> = None;
        let mut best_score = i32::MIN;
        let mut expired = false;

        for (index, mv) in root_moves.iter().enumerate() {
            board.place(mv.row, mv.col, me);
            let searched = Self::alpha_beta(
                &mut ctx,
                &mut board,
                depth - 1,
                alpha,
                beta,
                me.opponent(),
                (mv.row, mv.col),
            );
            board.clear(mv.row, mv.col);
            match searched {
                Ok(score) => {
                    if best.is_none() || score > best_score {
                        best = Some(index);
                        best_score = score;
                    }
                    alpha = alpha.max(best_score);
                }
                Err(DeadlineExpired) => {
                    expired = true;
                    break;
                }
            }
        }

        // On expiry with nothing completed, fall back to the top-ranked
        // candidate rather than reporting no move.
        let chosen = root_moves[best.unwrap_or(0)];
        let score = if best.is_some() { best_score } else { 0 };
        debug!(
            "search: depth {} radius {} -> ({}, {}) score {} nodes {} expired {} in {:?}",
            depth,
            radius,
            chosen.row,
            chosen.col,
            score,
            ctx.nodes,
            expired,
            start.elapsed()
        );

        SearchOutcome {
            best_move: Some((chosen.row, chosen.col)),
            score,
            opponent_score: chosen.defend,
            nodes: ctx.nodes,
            depth,
            elapsed: start.elapsed(),
        }
    }

    fn alpha_beta(
        ctx: &mut SearchContext,
        board: &mut Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        to_move: Player,
        last: (usize, usize),
    ) -> Result<i32, DeadlineExpired> {
        if let Some(deadline) = ctx.deadline {
            if Instant::now() >= deadline {
                return Err(DeadlineExpired);
            }
        }
        ctx.nodes += 1;

        // The previous ply just placed at `last`; a five there ends the
        // line. The remaining depth keeps shallow wins above deep ones.
        let placed_by = to_move.opponent();
        if WinChecker::wins_at(board, placed_by, last.0, last.1) {
            let magnitude = WIN_SCORE + depth as i32;
            return Ok(if placed_by == ctx.me {
                magnitude
            } else {
                -magnitude
            });
        }

        if depth == 0 {
            return Ok(Heuristic::score_position(board, ctx.me));
        }

        let mut moves = MoveGenerator::candidates(board, ctx.radius);
        if moves.is_empty() {
            return Ok(0);
        }
        Self::order_moves(board, to_move, &mut moves, last);

        if to_move == ctx.me {
            let mut value = i32::MIN;
            for (row, col) in moves {
                board.place(row, col, to_move);
                let searched = Self::alpha_beta(
                    ctx,
                    board,
                    depth - 1,
                    alpha,
                    beta,
                    to_move.opponent(),
                    (row, col),
                );
                board.clear(row, col);
                let score = searched?;
                value = value.max(score);
                if value >= beta {
                    break;
                }
                alpha = alpha.max(value);
            }
            Ok(value)
        } else {
            let mut value = i32::MAX;
            for (row, col) in moves {
                board.place(row, col, to_move);
                let searched = Self::alpha_beta(
                    ctx,
                    board,
                    depth - 1,
                    alpha,
                    beta,
                    to_move.opponent(),
                    (row, col),
                );
                board.clear(row, col);
                let score = searched?;
                value = value.min(score);
                if value <= alpha {
                    break;
                }
                beta = beta.min(value);
            }
            Ok(value)
        }
    }

    fn rank(
        board: &Board,
        to_move: Player,
        candidates: &[(usize, usize)],
        last: (usize, usize),
    ) -> Vec<RankedMove> {
        let mut ranked: Vec<RankedMove> = candidates
            .iter()
            .map(|&(row, col)| RankedMove {
                row,
                col,
                attack: Heuristic::score_at(board, to_move, row, col),
                defend: Heuristic::score_at(board, to_move.opponent(), row, col),
                distance: chebyshev((row, col), last),
            })
            .collect();
        ranked.sort_by(|a, b| {
            (b.attack + b.defend)
                .cmp(&(a.attack + a.defend))
                .then(a.distance.cmp(&b.distance))
                .then((a.row, a.col).cmp(&(b.row, b.col)))
        });
        ranked
    }

    fn order_moves(
        board: &Board,
        to_move: Player,
        moves: &mut Vec<(usize, usize)>,
        last: (usize, usize),
    ) {
        let ranked = Self::rank(board, to_move, moves.as_slice(), last);
        *moves = ranked.into_iter().map(|m| (m.row, m.col)).collect();
    }

    /// Against a lone opponent stone, any full search is noise: answer with
    /// a uniformly random cell at Chebyshev distance 1 or 2.
    fn reply_near_opening(&mut self, board: &Board) -> Option<(usize, usize)> {
        let mut stone = None;
        'outer: for row in 0..board.size {
            for col in 0..board.size {
                if board.get(row, col).is_some() {
                    stone = Some((row, col));
                    break 'outer;
                }
            }
        }
        let (sr, sc) = stone?;

        let mut cells = Vec::new();
        for dr in -2isize..=2 {
            for dc in -2isize..=2 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let r = sr as isize + dr;
                let c = sc as isize + dc;
                if board.is_open(r, c) {
                    cells.push((r as usize, c as usize));
                }
            }
        }
        if cells.is_empty() {
            return None;
        }
        let pick = self.rng.random_range(0..cells.len());
        Some(cells[pick])
    }

    fn forced(
        board: &Board,
        me: Player,
        row: usize,
        col: usize,
        depth: u32,
        start: Instant,
    ) -> SearchOutcome {
        SearchOutcome {
            best_move: Some((row, col)),
            score: Heuristic::score_at(board, me, row, col),
            opponent_score: Heuristic::score_at(board, me.opponent(), row, col),
            nodes: 0,
            depth,
            elapsed: start.elapsed(),
        }
    }

    fn no_move(depth: u32, start: Instant) -> SearchOutcome {
        SearchOutcome {
            best_move: None,
            score: 0,
            opponent_score: 0,
            nodes: 0,
            depth,
            elapsed: start.elapsed(),
        }
    }
}

fn chebyshev(a: (usize, usize), b: (usize, usize)) -> usize {
    a.0.abs_diff(b.0).max(a.1.abs_diff(b.1))
}
