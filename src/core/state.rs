use crate::core::board::{Board, Player};
use crate::core::moves::{MoveRecord, PlayerConfig};
use crate::core::rules::WinChecker;
use crate::error::EngineError;
use std::time::Duration;

pub const DEFAULT_SEARCH_RADIUS: usize = 2;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    CrossesWin,
    NaughtsWin,
    Draw,
    Aborted,
}

impl Outcome {
    pub fn win_for(player: Player) -> Outcome {
        match player {
            Player::Crosses => Outcome::CrossesWin,
            Player::Naughts => Outcome::NaughtsWin,
        }
    }

    pub fn is_over(&self) -> bool {
        *self != Outcome::InProgress
    }
}

/// The authoritative game: board, move history, per-player timers and
/// configuration. Mutated only through `apply_move` / `apply_timed_move` and
/// `undo_last_pair`; the search works on its own copy of the board and never
/// touches the caller's state.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub board: Board,
    pub player_to_move: Player,
    pub outcome: Outcome,
    pub crosses_config: PlayerConfig,
    pub naughts_config: PlayerConfig,
    pub search_radius: usize,
    pub move_deadline: Option<Duration>,
    history: Vec<MoveRecord>,
    crosses_ms: f64,
    naughts_ms: f64,
    stone_count: usize,
}

impl GameState {
    pub fn new(size: usize, crosses_config: PlayerConfig, naughts_config: PlayerConfig) -> Self {
        Self {
            board: Board::new(size),
            player_to_move: Player::Crosses,
            outcome: Outcome::InProgress,
            crosses_config,
            naughts_config,
            search_radius: DEFAULT_SEARCH_RADIUS,
            move_deadline: None,
            history: Vec::new(),
            crosses_ms: 0.0,
            naughts_ms: 0.0,
            stone_count: 0,
        }
    }

    pub fn config_for(&self, player: Player) -> &PlayerConfig {
        match player {
            Player::Crosses => &self.crosses_config,
            Player::Naughts => &self.naughts_config,
        }
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    pub fn stone_count(&self) -> usize {
        self.stone_count
    }

    pub fn cumulative_ms(&self, player: Player) -> f64 {
        match player {
            Player::Crosses => self.crosses_ms,
            Player::Naughts => self.naughts_ms,
        }
    }

    /// Place a stone for the side to move. Fails without touching the state
    /// when the cell is occupied, off the grid, or the game is already over.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<(), EngineError> {
        self.apply_timed_move(row, col, 0.0, 0, 0, 0)
    }

    pub fn apply_timed_move(
        &mut self,
        row: usize,
        col: usize,
        elapsed_ms: f64,
        nodes: u64,
        score: i32,
        opponent_score: i32,
    ) -> Result<(), EngineError> {
        if self.outcome.is_over() {
            return Err(EngineError::IllegalMove {
                row,
                col,
                reason: "game is over",
            });
        }
        if row >= self.board.size || col >= self.board.size {
            return Err(EngineError::IllegalMove {
                row,
                col,
                reason: "out of bounds",
            });
        }
        if !self.board.is_empty_cell(row, col) {
            return Err(EngineError::IllegalMove {
                row,
                col,
                reason: "cell is occupied",
            });
        }

        let player = self.player_to_move;
        self.board.place(row, col, player);
        self.history.push(MoveRecord {
            row,
            col,
            player,
            elapsed_ms,
            nodes,
            score,
            opponent_score,
        });
        self.stone_count += 1;
        match player {
            Player::Crosses => self.crosses_ms += elapsed_ms,
            Player::Naughts => self.naughts_ms += elapsed_ms,
        }

        if WinChecker::wins_at(&self.board, player, row, col) {
            self.outcome = Outcome::win_for(player);
        } else if self.stone_count == self.board.size * self.board.size {
            self.outcome = Outcome::Draw;
        } else {
            self.player_to_move = player.opponent();
        }
        Ok(())
    }

    /// Pop the last two moves (or one, when only one was played) in LIFO
    /// order: clears the cells, restores the timers from the recorded
    /// per-move ms, and reopens a finished game.
    pub fn undo_last_pair(&mut self) -> Result<(), EngineError> {
        if self.history.is_empty() {
            return Err(EngineError::NothingToUndo);
        }
        let count = if self.history.len() >= 2 { 2 } else { 1 };
        for _ in 0..count {
            if let Some(record) = self.history.pop() {
                self.board.clear(record.row, record.col);
                self.stone_count -= 1;
                match record.player {
                    Player::Crosses => self.crosses_ms -= record.elapsed_ms,
                    Player::Naughts => self.naughts_ms -= record.elapsed_ms,
                }
            }
        }
        self.outcome = Outcome::InProgress;
        self.player_to_move = if self.history.len() % 2 == 0 {
            Player::Crosses
        } else {
            Player::Naughts
        };
        Ok(())
    }
}
