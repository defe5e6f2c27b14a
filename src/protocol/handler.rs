//! Request handling: complete game in, complete game out.
//!
//! The handler parses the document, replays the history into a fresh state,
//! runs the search for the side to move, appends the chosen move and returns
//! the updated document. Every failure becomes `{"error": "..."}` and leaves
//! the caller's document untouched.

use crate::ai::minimax::Searcher;
use crate::core::board::Player;
use crate::error::EngineError;
use crate::protocol::health::Availability;
use crate::protocol::wire::{GameDoc, WireMove, WireWinner, render_board_state, wire_winner};
use log::{debug, info, warn};

pub fn handle_request(input: &str) -> String {
    match decide(input) {
        Ok(response) => response,
        Err(err) => {
            warn!("request rejected: {err}");
            error_json(&err)
        }
    }
}

pub fn decide(input: &str) -> Result<String, EngineError> {
    let mut doc: GameDoc =
        serde_json::from_str(input).map_err(|err| EngineError::MalformedRequest(err.to_string()))?;

    // A finished game is echoed back untouched.
    if doc.winner != WireWinner::None {
        debug!("game already decided ({:?}), echoing", doc.winner);
        return serialize(&doc);
    }

    let mut state = doc.to_state()?;
    debug!(
        "replayed {} moves, {:?} to move",
        state.history().len(),
        state.player_to_move
    );

    // The caller said "none" but the replayed history already ended the
    // game; report the real outcome instead of searching.
    if state.outcome.is_over() {
        doc.winner = wire_winner(state.outcome);
        doc.board_state = Some(render_board_state(&state.board));
        return serialize(&doc);
    }

    let side = state.player_to_move;
    let kind = state.config_for(side).kind;

    let result = {
        let _gate = Availability::global().begin_search();
        Searcher::new().best_move(&state)
    };

    let Some((row, col)) = result.best_move else {
        // Only reachable on a full board.
        doc.winner = WireWinner::Draw;
        doc.board_state = Some(render_board_state(&state.board));
        return serialize(&doc);
    };

    let elapsed_ms = result.elapsed.as_secs_f64() * 1000.0;
    state.apply_timed_move(
        row,
        col,
        elapsed_ms,
        result.nodes,
        result.score,
        result.opponent_score,
    )?;
    info!(
        "{side:?} ({kind:?}) plays ({row}, {col}): score {} over {} nodes in {:.1} ms",
        result.score, result.nodes, elapsed_ms
    );

    doc.moves.push(WireMove::new(side, kind, row, col, elapsed_ms));
    doc.crosses.time_ms = Some(state.cumulative_ms(Player::Crosses));
    doc.naughts.time_ms = Some(state.cumulative_ms(Player::Naughts));
    doc.winner = wire_winner(state.outcome);
    doc.board_state = Some(render_board_state(&state.board));
    serialize(&doc)
}

fn serialize(doc: &GameDoc) -> Result<String, EngineError> {
    serde_json::to_string(doc).map_err(|err| EngineError::MalformedRequest(err.to_string()))
}

fn error_json(err: &EngineError) -> String {
    serde_json::json!({ "error": err.to_string() }).to_string()
}
