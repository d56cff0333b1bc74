//! A chess game reconstructed from its movetext, backed by shakmaty.

use std::collections::HashMap;

use shakmaty::{
    fen::Fen, san::San, san::SanPlus, uci::UciMove, Board, CastlingMode, Chess, EnPassantMode,
    Move, Position,
};

use crate::error::RulesError;
use crate::movetext::{parse_movetext, write_movetext};
use crate::outcome::{GameStatus, Side, Termination};

/// Half-moves without capture or pawn push that end the game automatically.
const SEVENTY_FIVE_MOVE_PLIES: u32 = 150;
const FIVEFOLD: u32 = 5;

/// One legal move, in the shape the controller exposes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegalMove {
    /// Origin square, lowercase algebraic (`e2`).
    pub from: String,
    /// Destination square, lowercase algebraic (`e4`).
    pub to: String,
    /// Full UCI notation (`e2e4`, `e7e8q`, `e1g1`).
    pub notation: String,
}

#[derive(Debug, Clone)]
pub struct ChessGame {
    position: Chess,
    moves: Vec<String>,
    // position key -> occurrences, for fivefold repetition
    seen: HashMap<String, u32>,
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessGame {
    pub fn new() -> Self {
        let position = Chess::default();
        let mut seen = HashMap::new();
        seen.insert(position_key(&position), 1);
        Self {
            position,
            moves: Vec::new(),
            seen,
        }
    }

    /// Replay a stored movetext from the initial position.
    pub fn from_movetext(text: &str) -> Result<Self, RulesError> {
        let parsed = parse_movetext(text)?;
        let mut game = Self::new();

        for (ply, token) in parsed.moves.iter().enumerate() {
            if game.status().is_over() {
                return Err(RulesError::CorruptMovetext(format!(
                    "move {token} at ply {} follows a finished game",
                    ply + 1
                )));
            }
            let san: San = token
                .parse::<SanPlus>()
                .map(|s| s.san)
                .map_err(|e| RulesError::CorruptMovetext(format!("bad SAN {token:?}: {e}")))?;
            let mv = san.to_move(&game.position).map_err(|e| {
                RulesError::CorruptMovetext(format!("illegal {token} at ply {}: {e}", ply + 1))
            })?;
            game.play(mv);
        }

        tracing::debug!(plies = game.moves.len(), "Replayed game log");
        Ok(game)
    }

    pub fn to_movetext(&self) -> String {
        write_movetext(&self.moves, self.status().result_token())
    }

    /// Validate and play a UCI move. The game is untouched on error.
    pub fn play_uci(&mut self, notation: &str) -> Result<(), RulesError> {
        let uci: UciMove = notation
            .parse()
            .map_err(|_| RulesError::MalformedMove(notation.to_string()))?;

        if self.status().is_over() {
            return Err(RulesError::GameOver(notation.to_string()));
        }

        let mv = uci
            .to_move(&self.position)
            .map_err(|_| RulesError::IllegalMove(notation.to_string()))?;
        self.play(mv);
        Ok(())
    }

    fn play(&mut self, mv: Move) {
        let san = San::from_move(&self.position, mv.clone());
        self.position.play_unchecked(mv);
        self.moves.push(san.to_string());
        *self.seen.entry(position_key(&self.position)).or_insert(0) += 1;
    }

    /// Legal moves in the current position; none once the game is over.
    pub fn legal_moves(&self) -> Vec<LegalMove> {
        if self.status().is_over() {
            return Vec::new();
        }

        self.position
            .legal_moves()
            .iter()
            .filter_map(|m| {
                let uci = m.to_uci(CastlingMode::Standard);
                match uci {
                    UciMove::Normal { from, to, .. } => Some(LegalMove {
                        from: from.to_string(),
                        to: to.to_string(),
                        notation: uci.to_string(),
                    }),
                    _ => None,
                }
            })
            .collect()
    }

    pub fn status(&self) -> GameStatus {
        let pos = &self.position;
        let to_move = Side::from(pos.turn());

        let ended = |winner, method| GameStatus::Over { winner, method };

        if pos.is_checkmate() {
            return ended(Some(Side::from(!pos.turn())), Termination::Checkmate);
        }
        if pos.is_stalemate() {
            return ended(None, Termination::Stalemate);
        }
        if pos.is_insufficient_material() {
            return ended(None, Termination::InsufficientMaterial);
        }
        if self.seen.get(&position_key(pos)).copied().unwrap_or(0) >= FIVEFOLD {
            return ended(None, Termination::FivefoldRepetition);
        }
        if pos.halfmoves() >= SEVENTY_FIVE_MOVE_PLIES {
            return ended(None, Termination::SeventyFiveMoveRule);
        }

        GameStatus::InProgress { to_move }
    }

    pub fn board(&self) -> &Board {
        self.position.board()
    }

    /// Number of half-moves played.
    pub fn ply(&self) -> usize {
        self.moves.len()
    }

    /// SAN of every move played, in order.
    pub fn moves(&self) -> &[String] {
        &self.moves
    }
}

/// FEN without move counters: placement, side, castling, en passant.
fn position_key(pos: &Chess) -> String {
    let fen = Fen::from_position(pos, EnPassantMode::Legal).to_string();
    fen.split_whitespace().take(4).collect::<Vec<_>>().join(" ")
}
