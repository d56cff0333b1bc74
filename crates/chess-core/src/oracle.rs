//! The narrow rules interface the controller drives.

use crate::error::RulesError;
use crate::game::{ChessGame, LegalMove};
use crate::outcome::GameStatus;
use crate::svg;

/// Everything the controller needs to know about the game's rules.
///
/// The controller never inspects a position directly; it only replays,
/// queries and extends it through this trait, so a scripted test double
/// can stand in for the real engine.
pub trait RulesOracle {
    type Position: Clone;

    fn new_game(&self) -> Self::Position;

    /// Rebuild a position by replaying a stored game log.
    fn replay(&self, movetext: &str) -> Result<Self::Position, RulesError>;

    /// Encode the game log for `position`.
    fn movetext(&self, position: &Self::Position) -> String;

    fn legal_moves(&self, position: &Self::Position) -> Vec<LegalMove>;

    /// Play `notation`. `position` is left as it was on error.
    fn apply(&self, position: &mut Self::Position, notation: &str) -> Result<(), RulesError>;

    fn status(&self, position: &Self::Position) -> GameStatus;

    /// Vector image of the board.
    fn render_board(&self, position: &Self::Position) -> String;
}

/// Standard chess, backed by shakmaty.
#[derive(Debug, Clone, Copy, Default)]
pub struct Shakmaty;

impl RulesOracle for Shakmaty {
    type Position = ChessGame;

    fn new_game(&self) -> ChessGame {
        ChessGame::new()
    }

    fn replay(&self, movetext: &str) -> Result<ChessGame, RulesError> {
        ChessGame::from_movetext(movetext)
    }

    fn movetext(&self, position: &ChessGame) -> String {
        position.to_movetext()
    }

    fn legal_moves(&self, position: &ChessGame) -> Vec<LegalMove> {
        position.legal_moves()
    }

    fn apply(&self, position: &mut ChessGame, notation: &str) -> Result<(), RulesError> {
        position.play_uci(notation)
    }

    fn status(&self, position: &ChessGame) -> GameStatus {
        position.status()
    }

    fn render_board(&self, position: &ChessGame) -> String {
        svg::render_board(position.board())
    }
}
