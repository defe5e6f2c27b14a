//! The decision request/response document.
//!
//! The boundary accepts a complete game as JSON and returns the updated
//! complete game; a saved game is exactly this document. Moves serialize as
//! objects with a single coordinate member whose key carries both the color
//! and the configured kind, e.g. `{"X (AI)": [9, 9], "time_ms": 12.5}`.

use crate::core::board::{Board, Player};
use crate::core::moves::{DEFAULT_SEARCH_DEPTH, PlayerConfig, PlayerKind};
use crate::core::state::{DEFAULT_SEARCH_RADIUS, GameState, Outcome};
use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Hard caps applied to untrusted callers.
pub const MAX_WIRE_DEPTH: u32 = 6;
pub const MAX_WIRE_RADIUS: usize = 4;

pub const DEFAULT_BOARD_SIZE: usize = 19;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireWinner {
    #[serde(rename = "none")]
    None,
    X,
    O,
    #[serde(rename = "draw")]
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireKind {
    #[serde(rename = "human")]
    Human,
    #[serde(rename = "AI")]
    Ai,
}

impl From<WireKind> for PlayerKind {
    fn from(kind: WireKind) -> Self {
        match kind {
            WireKind::Human => PlayerKind::Human,
            WireKind::Ai => PlayerKind::Ai,
        }
    }
}

impl From<PlayerKind> for WireKind {
    fn from(kind: PlayerKind) -> Self {
        match kind {
            PlayerKind::Human => WireKind::Human,
            PlayerKind::Ai => WireKind::Ai,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideConfig {
    pub player: WireKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_ms: Option<f64>,
}

/// The single coordinate member of a move object. The externally tagged
/// representation gives exactly the wire shape: `{"X (AI)": [row, col]}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacedStone {
    #[serde(rename = "X (human)")]
    CrossesHuman([usize; 2]),
    #[serde(rename = "X (AI)")]
    CrossesAi([usize; 2]),
    #[serde(rename = "O (human)")]
    NaughtsHuman([usize; 2]),
    #[serde(rename = "O (AI)")]
    NaughtsAi([usize; 2]),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WireMove {
    #[serde(flatten)]
    pub placed: PlacedStone,
    pub time_ms: f64,
}

impl WireMove {
    pub fn new(player: Player, kind: PlayerKind, row: usize, col: usize, time_ms: f64) -> Self {
        let cell = [row, col];
        let placed = match (player, kind) {
            (Player::Crosses, PlayerKind::Human) => PlacedStone::CrossesHuman(cell),
            (Player::Crosses, PlayerKind::Ai) => PlacedStone::CrossesAi(cell),
            (Player::Naughts, PlayerKind::Human) => PlacedStone::NaughtsHuman(cell),
            (Player::Naughts, PlayerKind::Ai) => PlacedStone::NaughtsAi(cell),
        };
        Self { placed, time_ms }
    }

    pub fn player(&self) -> Player {
        match self.placed {
            PlacedStone::CrossesHuman(_) | PlacedStone::CrossesAi(_) => Player::Crosses,
            PlacedStone::NaughtsHuman(_) | PlacedStone::NaughtsAi(_) => Player::Naughts,
        }
    }

    pub fn kind(&self) -> PlayerKind {
        match self.placed {
            PlacedStone::CrossesHuman(_) | PlacedStone::NaughtsHuman(_) => PlayerKind::Human,
            PlacedStone::CrossesAi(_) | PlacedStone::NaughtsAi(_) => PlayerKind::Ai,
        }
    }

    pub fn cell(&self) -> (usize, usize) {
        let [row, col] = match self.placed {
            PlacedStone::CrossesHuman(cell)
            | PlacedStone::CrossesAi(cell)
            | PlacedStone::NaughtsHuman(cell)
            | PlacedStone::NaughtsAi(cell) => cell,
        };
        (row, col)
    }

    pub fn row(&self) -> usize {
        self.cell().0
    }

    pub fn col(&self) -> usize {
        self.cell().1
    }
}

fn default_board_size() -> usize {
    DEFAULT_BOARD_SIZE
}

fn default_radius() -> usize {
    DEFAULT_SEARCH_RADIUS
}

fn default_timeout() -> String {
    "none".to_string()
}

fn default_winner() -> WireWinner {
    WireWinner::None
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameDoc {
    #[serde(rename = "X")]
    pub crosses: SideConfig,
    #[serde(rename = "O")]
    pub naughts: SideConfig,
    #[serde(default = "default_board_size")]
    pub board: usize,
    #[serde(default = "default_radius")]
    pub radius: usize,
    #[serde(default = "default_timeout")]
    pub timeout: String,
    #[serde(default = "default_winner")]
    pub winner: WireWinner,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_state: Option<Vec<String>>,
    #[serde(default)]
    pub moves: Vec<WireMove>,
}

impl GameDoc {
    /// "none" or decimal seconds; zero means no deadline.
    pub fn timeout_duration(&self) -> Result<Option<Duration>, EngineError> {
        let text = self.timeout.trim();
        if text.is_empty() || text == "none" {
            return Ok(None);
        }
        let seconds: f64 = text.parse().map_err(|_| {
            EngineError::MalformedRequest(format!("timeout must be \"none\" or seconds: {text:?}"))
        })?;
        if seconds < 0.0 || !seconds.is_finite() {
            return Err(EngineError::MalformedRequest(format!(
                "timeout must be non-negative: {text}"
            )));
        }
        if seconds == 0.0 {
            return Ok(None);
        }
        Ok(Some(Duration::from_secs_f64(seconds)))
    }

    /// Rebuild the authoritative state by replaying the history. Caps depth
    /// and radius, enforces strict color alternation, and rejects overlaps
    /// and out-of-range cells without attempting partial recovery.
    pub fn to_state(&self) -> Result<GameState, EngineError> {
        if self.board != 15 && self.board != 19 {
            return Err(EngineError::MalformedRequest(format!(
                "board size must be 15 or 19, got {}",
                self.board
            )));
        }

        let crosses_config = side_config(&self.crosses);
        let naughts_config = side_config(&self.naughts);
        let mut state = GameState::new(self.board, crosses_config, naughts_config);
        state.search_radius = self.radius.clamp(1, MAX_WIRE_RADIUS);
        state.move_deadline = self.timeout_duration()?;

        for (index, mv) in self.moves.iter().enumerate() {
            let expected = if index % 2 == 0 {
                Player::Crosses
            } else {
                Player::Naughts
            };
            if mv.player() != expected {
                return Err(EngineError::Inconsistent(format!(
                    "move {index} is out of turn"
                )));
            }
            state
                .apply_timed_move(mv.row(), mv.col(), mv.time_ms, 0, 0, 0)
                .map_err(|err| EngineError::Inconsistent(err.to_string()))?;
        }

        if let Some(rendered) = &self.board_state {
            if *rendered != render_board_state(&state.board) {
                return Err(EngineError::Inconsistent(
                    "board_state does not agree with moves".to_string(),
                ));
            }
        }

        Ok(state)
    }
}

fn side_config(side: &SideConfig) -> PlayerConfig {
    PlayerConfig {
        kind: side.player.into(),
        search_depth: side
            .depth
            .unwrap_or(DEFAULT_SEARCH_DEPTH)
            .clamp(1, MAX_WIRE_DEPTH),
    }
}

/// One string per row: 'X', 'O', '.' per cell.
pub fn render_board_state(board: &Board) -> Vec<String> {
    (0..board.size)
        .map(|row| {
            (0..board.size)
                .map(|col| match board.get(row, col) {
                    Some(Player::Crosses) => 'X',
                    Some(Player::Naughts) => 'O',
                    None => '.',
                })
                .collect()
        })
        .collect()
}

pub fn wire_winner(outcome: Outcome) -> WireWinner {
    match outcome {
        Outcome::CrossesWin => WireWinner::X,
        Outcome::NaughtsWin => WireWinner::O,
        Outcome::Draw => WireWinner::Draw,
        Outcome::InProgress | Outcome::Aborted => WireWinner::None,
    }
}
