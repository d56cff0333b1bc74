//! Chess rules for the readme game: movetext replay, legal moves, outcomes
//! and board rendering, all behind the [`RulesOracle`] trait.

pub mod error;
pub mod game;
pub mod movetext;
pub mod oracle;
pub mod outcome;
pub mod svg;

pub use error::RulesError;
pub use game::{ChessGame, LegalMove};
pub use oracle::{RulesOracle, Shakmaty};
pub use outcome::{GameStatus, Side, Termination};
