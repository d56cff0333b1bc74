//! Readme chess controller.
//!
//! One invocation = one command. State is rebuilt from the files on disk,
//! at most one action is applied, and every artifact is written back:
//! game log, statistics, board image and the status document.

pub mod affordance;
pub mod command;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod stats;
pub mod status;
pub mod store;

use chess_core::{RulesOracle, Shakmaty};
use tracing::info;

use crate::affordance::{build_move_table, IssueLinker};
use crate::command::Command;
use crate::config::Config;
use crate::dispatcher::{Controller, Transition};
use crate::error::ControllerError;
use crate::store::StateStore;

/// Run one invocation with standard chess rules.
pub fn run(config: &Config) -> Result<Transition, ControllerError> {
    run_with(Shakmaty, config)
}

/// Run one invocation against any rules oracle.
///
/// Fatal errors return before anything is written. Once writing starts each
/// artifact is replaced independently; there is no cross-file transaction.
pub fn run_with<O: RulesOracle>(oracle: O, config: &Config) -> Result<Transition, ControllerError> {
    let store = StateStore::new(config.paths());
    let command = Command::parse(&config.title);
    info!(command = %command, "Parsed command");

    let movetext = store.load_log()?;
    let stats = store.load_stats();

    let controller = Controller::new(oracle);
    let mut state = controller.load(&movetext, stats)?;
    let transition = controller.dispatch(&mut state, &command)?;

    match &transition {
        Transition::Moved { .. } => {
            store.save_log(&controller.oracle().movetext(&state.position))?;
        }
        Transition::Reset { .. } => {
            store.remove_log()?;
            store.save_log("")?;
        }
        Transition::Unchanged => {}
    }
    store.save_stats(&state.stats)?;

    let oracle = controller.oracle();
    store.save_board(&oracle.render_board(&state.position))?;

    let game_status = oracle.status(&state.position);
    let moves = build_move_table(&oracle.legal_moves(&state.position), game_status.is_over());
    let linker = IssueLinker::new(&config.repo, &config.issue_body);
    let document = status::render_status_document(
        &game_status,
        &config.board_url(),
        &moves,
        &linker,
        &state.stats,
    );
    store.save_readme(&document)?;

    info!(
        status = %status::status_line(&game_status),
        total_moves = state.stats.moves,
        total_games = state.stats.total_games(),
        "State written"
    );
    Ok(transition)
}
