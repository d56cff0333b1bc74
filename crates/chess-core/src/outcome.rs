//! Game status and termination classification.

use std::fmt;

use shakmaty::Color;

/// A player, as shown to humans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn name(self) -> &'static str {
        match self {
            Side::White => "White",
            Side::Black => "Black",
        }
    }
}

impl From<Color> for Side {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Side::White,
            Color::Black => Side::Black,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Termination {
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    /// Same position (placement, side, castling, en passant) seen five times.
    FivefoldRepetition,
    /// 150 half-moves without a capture or pawn move.
    SeventyFiveMoveRule,
}

impl Termination {
    pub fn as_str(self) -> &'static str {
        match self {
            Termination::Checkmate => "checkmate",
            Termination::Stalemate => "stalemate",
            Termination::InsufficientMaterial => "insufficient material",
            Termination::FivefoldRepetition => "fivefold repetition",
            Termination::SeventyFiveMoveRule => "seventy-five move rule",
        }
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress { to_move: Side },
    /// `winner` is `None` for a draw.
    Over {
        winner: Option<Side>,
        method: Termination,
    },
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Over { .. })
    }

    /// PGN game termination marker for this status.
    pub fn result_token(&self) -> &'static str {
        match self {
            GameStatus::InProgress { .. } => "*",
            GameStatus::Over { winner: Some(Side::White), .. } => "1-0",
            GameStatus::Over { winner: Some(Side::Black), .. } => "0-1",
            GameStatus::Over { winner: None, .. } => "1/2-1/2",
        }
    }
}
