//! Cumulative statistics across games.

use chess_core::{GameStatus, Side, Termination};
use serde::{Deserialize, Serialize};

const NOT_AVAILABLE: &str = "N/A";

/// Win/draw counters. Their sum is the number of completed games.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WinCounts {
    pub white: u64,
    pub black: u64,
    pub draw: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviousGame {
    pub winner: String,
    pub method: String,
}

impl Default for PreviousGame {
    fn default() -> Self {
        Self {
            winner: NOT_AVAILABLE.to_string(),
            method: NOT_AVAILABLE.to_string(),
        }
    }
}

/// Stored as JSON: `{"moves": .., "wins": {..}, "previous": {..}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatisticsRecord {
    pub moves: u64,
    pub wins: WinCounts,
    pub previous: PreviousGame,
}

/// Result of a game that has just been taken off the board.
///
/// The dispatcher builds one only from a position it has already swapped out
/// for a fresh game, so each finished game is recorded once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedGame {
    pub winner: Option<Side>,
    pub method: Termination,
}

impl CompletedGame {
    pub(crate) fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::Over { winner, method } => Some(Self { winner, method }),
            GameStatus::InProgress { .. } => None,
        }
    }
}

impl StatisticsRecord {
    pub fn total_games(&self) -> u64 {
        self.wins.white + self.wins.black + self.wins.draw
    }

    pub fn record_move(&mut self) {
        self.moves += 1;
    }

    /// Count a finished game and make it the previous-game summary.
    pub fn record_game(&mut self, game: CompletedGame) {
        match game.winner {
            Some(Side::White) => self.wins.white += 1,
            Some(Side::Black) => self.wins.black += 1,
            None => self.wins.draw += 1,
        }

        self.previous = PreviousGame {
            winner: game
                .winner
                .map_or_else(|| NOT_AVAILABLE.to_string(), |side| side.to_string()),
            method: game.method.to_string(),
        };
    }
}
