//! End-to-end invocations against a temporary state directory.
//!
//! Each test drives `issue_chess::run` exactly the way the binary does, then
//! inspects the files it left behind.

mod common;

use std::fs;

use chess_core::{RulesError, Side, Termination};
use common::{StateDir, REPO};
use issue_chess::dispatcher::Transition;
use issue_chess::error::ControllerError;
use issue_chess::stats::{CompletedGame, StatisticsRecord};

const FOOLS_MATE: &str = "1. f3 e5 2. g4 Qh4 0-1\n";
const LOYD_STALEMATE: &str = "1. e3 a5 2. Qh5 Ra6 3. Qxa5 h5 4. h4 Rah6 5. Qxc7 f6 \
    6. Qxd7 Kf7 7. Qxb7 Qd3 8. Qxb8 Qh7 9. Qxc8 Kg6 10. Qe6 1/2-1/2\n";

fn run(state: &StateDir, title: &str) -> Result<Transition, ControllerError> {
    issue_chess::run(&state.config(title))
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn test_fresh_state_empty_command() {
    let state = StateDir::new();

    let transition = run(&state, "").unwrap();
    assert_eq!(transition, Transition::Unchanged);

    assert_eq!(state.read(state.pgn()), "");
    let readme = state.read(state.readme());
    assert!(readme.contains("**Current State**: Game in progress, White's move."));
    assert!(readme.contains("**Total Games:** 0"));
    assert!(readme.contains("**Total Moves:** 0"));
    assert!(readme.contains("**Winner:** N/A"));
    assert_eq!(state.read_stats(), StatisticsRecord::default());
    assert!(state.read(state.board()).starts_with("<svg"));
}

#[test]
fn test_black_reply_is_appended() {
    let state = StateDir::new();
    state.write_pgn("1. e4 *\n");
    let mut stats = StatisticsRecord::default();
    stats.moves = 1;
    state.write_stats(&stats);

    let transition = run(&state, "move|e7e5").unwrap();
    assert_eq!(transition, Transition::Moved { notation: "e7e5".into() });

    assert_eq!(state.read(state.pgn()), "1. e4 e5 *\n");
    assert_eq!(state.read_stats().moves, 2);
    assert!(state
        .read(state.readme())
        .contains("Game in progress, White's move."));
}

#[test]
fn test_reset_after_checkmate_records_result() {
    let state = StateDir::new();
    state.write_pgn(FOOLS_MATE);

    let transition = run(&state, "reset").unwrap();
    assert_eq!(
        transition,
        Transition::Reset {
            recorded: Some(CompletedGame {
                winner: Some(Side::Black),
                method: Termination::Checkmate,
            })
        }
    );

    let stats = state.read_stats();
    assert_eq!(stats.wins.black, 1);
    assert_eq!(stats.wins.white + stats.wins.draw, 0);
    assert_eq!(stats.previous.winner, "Black");
    assert_eq!(stats.previous.method, "checkmate");

    assert_eq!(state.read(state.pgn()), "");
    let readme = state.read(state.readme());
    assert!(readme.contains("Game in progress, White's move."));
    assert!(readme.contains("**Total Games:** 1"));
    assert!(readme.contains("**Method:** checkmate"));
}

#[test]
fn test_reset_after_stalemate_records_draw() {
    let state = StateDir::new();
    state.write_pgn(LOYD_STALEMATE);
    let mut stats = StatisticsRecord::default();
    stats.moves = 19;
    stats.wins.white = 2;
    state.write_stats(&stats);

    run(&state, "").unwrap();
    assert!(state
        .read(state.readme())
        .contains("Game over by a draw (stalemate)."));

    let transition = run(&state, "reset|").unwrap();
    assert_eq!(
        transition,
        Transition::Reset {
            recorded: Some(CompletedGame {
                winner: None,
                method: Termination::Stalemate,
            })
        }
    );

    let stats = state.read_stats();
    assert_eq!(stats.wins.draw, 1);
    assert_eq!(stats.wins.white, 2);
    assert_eq!(stats.wins.black, 0);
    assert_eq!(stats.moves, 19);
    assert_eq!(stats.previous.winner, "N/A");
    assert_eq!(stats.previous.method, "stalemate");
    assert_eq!(state.read(state.pgn()), "");
    assert!(state.read(state.readme()).contains("**Draws:** 1"));
}

#[test]
fn test_fivefold_repetition_through_invocations() {
    let state = StateDir::new();

    for _ in 0..4 {
        for mv in ["g1f3", "g8f6", "f3g1", "f6g8"] {
            run(&state, &format!("move|{mv}")).unwrap();
        }
    }

    assert!(state.read(state.pgn()).ends_with(" 1/2-1/2\n"));
    assert!(state
        .read(state.readme())
        .contains("Game over by a draw (fivefold repetition)."));
    assert!(run(&state, "move|e2e4").is_err());

    run(&state, "reset").unwrap();
    let stats = state.read_stats();
    assert_eq!(stats.moves, 16);
    assert_eq!(stats.wins.draw, 1);
    assert_eq!(stats.previous.method, "fivefold repetition");
}

#[test]
fn test_empty_move_payload_changes_nothing() {
    let state = StateDir::new();
    state.write_pgn("1. d4 *\n");
    let mut stats = StatisticsRecord::default();
    stats.moves = 1;
    state.write_stats(&stats);
    fs::write(state.readme(), "stale").unwrap();

    assert_eq!(run(&state, "move|").unwrap(), Transition::Unchanged);

    assert_eq!(state.read(state.pgn()), "1. d4 *\n");
    assert_eq!(state.read_stats().moves, 1);
    assert!(state
        .read(state.readme())
        .contains("Game in progress, Black's move."));
}

// ---------------------------------------------------------------------------
// Rejections leave every artifact untouched
// ---------------------------------------------------------------------------

#[test]
fn test_illegal_and_malformed_moves_are_fatal() {
    let state = StateDir::new();
    run(&state, "move|e2e4").unwrap();
    let before = state.snapshot();

    let err = run(&state, "move|e4e6").unwrap_err();
    assert!(matches!(err, ControllerError::Rules(RulesError::IllegalMove(_))));
    assert_eq!(state.snapshot(), before);

    let err = run(&state, "move|castle!").unwrap_err();
    assert!(matches!(err, ControllerError::Rules(RulesError::MalformedMove(_))));
    assert_eq!(state.snapshot(), before);
}

#[test]
fn test_move_after_game_over_is_rejected() {
    let state = StateDir::new();
    state.write_pgn(FOOLS_MATE);
    run(&state, "").unwrap();
    let before = state.snapshot();

    assert!(run(&state, "move|a2a3").is_err());
    assert_eq!(state.snapshot(), before);
}

#[test]
fn test_corrupt_log_is_fatal() {
    let state = StateDir::new();
    state.write_pgn("1. e4 e5 2. N");

    let err = run(&state, "").unwrap_err();
    assert!(matches!(err, ControllerError::Rules(RulesError::CorruptMovetext(_))));
    assert_eq!(state.read(state.pgn()), "1. e4 e5 2. N");
    assert!(!state.readme().exists());
    assert!(!state.board().exists());
}

// ---------------------------------------------------------------------------
// Reset, statistics and refresh behaviour
// ---------------------------------------------------------------------------

#[test]
fn test_reset_unfinished_game_keeps_counters() {
    let state = StateDir::new();
    state.write_pgn("1. e4 e5 2. Nf3 *\n");
    let mut stats = StatisticsRecord::default();
    stats.moves = 30;
    stats.wins.white = 4;
    state.write_stats(&stats);

    assert_eq!(
        run(&state, "reset|").unwrap(),
        Transition::Reset { recorded: None }
    );

    assert_eq!(state.read_stats(), stats);
    assert_eq!(state.read(state.pgn()), "");
}

#[test]
fn test_corrupt_statistics_fall_back_to_zero() {
    let state = StateDir::new();
    fs::create_dir_all(state.path("state")).unwrap();
    fs::write(state.stats(), "moves: [").unwrap();

    run(&state, "move|g1f3").unwrap();

    let stats = state.read_stats();
    assert_eq!(stats.moves, 1);
    assert_eq!(stats.total_games(), 0);
}

#[test]
fn test_unknown_action_refreshes_status() {
    let state = StateDir::new();
    state.write_pgn("1. e4 *\n");
    fs::write(state.readme(), "stale").unwrap();

    assert_eq!(run(&state, "resign|now").unwrap(), Transition::Unchanged);

    assert_eq!(state.read(state.pgn()), "1. e4 *\n");
    assert!(state.read(state.readme()).contains("Black's move"));
}

#[test]
fn test_game_over_document_offers_reset() {
    let state = StateDir::new();
    state.write_pgn(FOOLS_MATE);

    run(&state, "").unwrap();

    let readme = state.read(state.readme());
    assert!(readme.contains("Game over, Black won by checkmate."));
    assert!(readme.contains(&format!(
        "[Click here to reset the game](https://github.com/{REPO}/issues/new?title=reset%7C&body="
    )));
    assert!(!readme.contains("| Move From |"));
}

#[test]
fn test_move_table_links_are_next_commands() {
    let state = StateDir::new();

    run(&state, "").unwrap();

    let readme = state.read(state.readme());
    assert!(readme.contains("| Move From | Move To (Click One) |"));
    assert!(readme.contains(&format!(
        "[E4](https://github.com/{REPO}/issues/new?title=move%7Ce2e4&body="
    )));
    // header + separator + 8 pawn squares + 2 knight squares
    assert_eq!(readme.matches("\n| ").count(), 12);
}

#[test]
fn test_full_game_through_invocations() {
    let state = StateDir::new();

    for mv in ["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"] {
        run(&state, &format!("move|{mv}")).unwrap();
    }

    assert_eq!(
        state.read(state.pgn()),
        "1. e4 e5 2. Bc4 Nc6 3. Qh5 Nf6 4. Qxf7 1-0\n"
    );
    assert!(state
        .read(state.readme())
        .contains("Game over, White won by checkmate."));

    run(&state, "reset|").unwrap();
    run(&state, "reset|").unwrap();

    let stats = state.read_stats();
    assert_eq!(stats.moves, 7);
    assert_eq!(stats.wins.white, 1);
    assert_eq!(stats.total_games(), 1);
    assert_eq!(stats.previous.winner, "White");
}

#[test]
fn test_trailing_title_fields_are_ignored() {
    let state = StateDir::new();

    assert_eq!(
        run(&state, "move|e2e4|from the issue form").unwrap(),
        Transition::Moved { notation: "e2e4".into() }
    );
    assert_eq!(state.read(state.pgn()), "1. e4 *\n");
}
