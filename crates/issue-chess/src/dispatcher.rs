//! Action dispatch: the one state transition an invocation may make.

use chess_core::RulesOracle;
use tracing::{debug, info};

use crate::command::Command;
use crate::error::ControllerError;
use crate::stats::{CompletedGame, StatisticsRecord};

/// Everything reconstructed from disk at the start of an invocation.
#[derive(Debug, Clone)]
pub struct GameState<P> {
    pub position: P,
    pub stats: StatisticsRecord,
}

/// What changed, and therefore what the log needs on the way out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// A move was played; the log must be rewritten.
    Moved { notation: String },
    /// The old game was dropped; the log must be removed and recreated empty.
    /// `recorded` is the finished game that was counted, if there was one.
    Reset { recorded: Option<CompletedGame> },
    /// Empty move or unrecognised action. Nothing to persist but the renders.
    Unchanged,
}

pub struct Controller<O> {
    oracle: O,
}

impl<O: RulesOracle> Controller<O> {
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Rebuild the state bundle. A log the oracle cannot replay is fatal.
    pub fn load(
        &self,
        movetext: &str,
        stats: StatisticsRecord,
    ) -> Result<GameState<O::Position>, ControllerError> {
        let position = self.oracle.replay(movetext)?;
        Ok(GameState { position, stats })
    }

    /// Apply `command` to `state`. On error `state` is unchanged.
    pub fn dispatch(
        &self,
        state: &mut GameState<O::Position>,
        command: &Command,
    ) -> Result<Transition, ControllerError> {
        match command {
            Command::Move(notation) if notation.is_empty() => {
                info!("No move provided");
                Ok(Transition::Unchanged)
            }
            Command::Move(notation) => {
                self.oracle.apply(&mut state.position, notation)?;
                state.stats.record_move();
                info!(notation = %notation, total_moves = state.stats.moves, "Move applied");
                Ok(Transition::Moved {
                    notation: notation.clone(),
                })
            }
            Command::Reset => Ok(self.reset(state)),
            Command::Other(raw) => {
                debug!(command = %raw, "Unrecognised action, refreshing status only");
                Ok(Transition::Unchanged)
            }
        }
    }

    // The finished position is swapped out before it is counted, so the same
    // game can never reach record_game twice.
    fn reset(&self, state: &mut GameState<O::Position>) -> Transition {
        let finished = std::mem::replace(&mut state.position, self.oracle.new_game());
        let recorded = CompletedGame::from_status(self.oracle.status(&finished));

        match recorded {
            Some(game) => {
                state.stats.record_game(game);
                info!(
                    winner = %state.stats.previous.winner,
                    method = %state.stats.previous.method,
                    total_games = state.stats.total_games(),
                    "Game recorded"
                );
            }
            None => info!("Game abandoned before it finished, nothing recorded"),
        }

        Transition::Reset { recorded }
    }
}
