use thiserror::Error;

/// Every failure the core can produce. The boundary converts these to a
/// response; the core itself never aborts the process.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("illegal move at ({row}, {col}): {reason}")]
    IllegalMove {
        row: usize,
        col: usize,
        reason: &'static str,
    },

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("malformed request: {0}")]
    MalformedRequest(String),

    #[error("inconsistent game document: {0}")]
    Inconsistent(String),
}
