//! The status document (README) rendered after every invocation.

use std::fmt::Write;

use chess_core::GameStatus;

use crate::affordance::{IssueLinker, MoveTable};
use crate::stats::StatisticsRecord;

pub fn status_line(status: &GameStatus) -> String {
    match status {
        GameStatus::InProgress { to_move } => format!("Game in progress, {to_move}'s move."),
        GameStatus::Over {
            winner: Some(winner),
            method,
        } => format!("Game over, {winner} won by {method}."),
        GameStatus::Over { winner: None, method } => format!("Game over by a draw ({method})."),
    }
}

/// Compose the whole document. Pure projection of its inputs.
pub fn render_status_document(
    status: &GameStatus,
    board_url: &str,
    moves: &MoveTable,
    linker: &IssueLinker,
    stats: &StatisticsRecord,
) -> String {
    let mut doc = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(doc, "**Current State**: {}\n", status_line(status));
    let _ = writeln!(doc, "![board]({board_url})\n");

    let _ = writeln!(doc, "## Valid Moves\n");
    doc.push_str(&linker.render(moves));

    let _ = writeln!(doc, "\n## Previous Game\n");
    let _ = writeln!(doc, "**Winner:** {}\n", stats.previous.winner);
    let _ = writeln!(doc, "**Method:** {}\n", stats.previous.method);

    let _ = writeln!(doc, "## Overall Stats\n");
    let _ = writeln!(doc, "**Total Games:** {}\n", stats.total_games());
    let _ = writeln!(doc, "**Total Moves:** {}\n", stats.moves);
    let _ = writeln!(doc, "**White Wins:** {}\n", stats.wins.white);
    let _ = writeln!(doc, "**Black Wins:** {}\n", stats.wins.black);
    let _ = writeln!(doc, "**Draws:** {}", stats.wins.draw);

    doc
}
