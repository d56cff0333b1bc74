//! Rules oracle error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    #[error("Malformed move: {0:?}")]
    MalformedMove(String),

    #[error("Illegal move: {0}")]
    IllegalMove(String),

    #[error("Game is already over, {0} cannot be played")]
    GameOver(String),

    #[error("Corrupt movetext: {0}")]
    CorruptMovetext(String),
}
