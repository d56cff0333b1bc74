//! Invocation configuration from command-line flags and environment variables

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::store::StatePaths;

pub const DEFAULT_ISSUE_BODY: &str =
    "Just press 'Submit Issue' to make this move. Please do not edit the title.";

#[derive(Parser, Clone, Debug)]
#[command(name = "issue-chess")]
#[command(version, about = "Play one action of the readme chess game and re-render its state")]
pub struct Config {
    /// Path to write the board image to
    #[arg(long, env = "CHESS_BOARD_PATH", default_value = "./state/board.svg")]
    pub board: PathBuf,

    /// Path of the current game log (PGN movetext)
    #[arg(long, env = "CHESS_PGN_PATH", default_value = "./state/game.pgn")]
    pub pgn: PathBuf,

    /// Path to write the status document to
    #[arg(long, env = "CHESS_README_PATH", default_value = "./README.md")]
    pub readme: PathBuf,

    /// Path of the cumulative statistics record
    #[arg(long, env = "CHESS_STATS_PATH", default_value = "./state/stats.json")]
    pub stats: PathBuf,

    /// Command to run, e.g. `move|e2e4` or `reset|`
    #[arg(long, env = "CHESS_COMMAND", default_value = "", allow_hyphen_values = true)]
    pub title: String,

    /// GitHub repository (`owner/name`) that receives move issues
    #[arg(long, env = "GITHUB_REPOSITORY", default_value = "ffalor/ffalor")]
    pub repo: String,

    /// URL the status document uses for the board image
    #[arg(long, env = "CHESS_BOARD_URL")]
    pub board_url: Option<String>,

    /// Body pre-filled into every move issue
    #[arg(long, env = "CHESS_ISSUE_BODY", default_value = DEFAULT_ISSUE_BODY)]
    pub issue_body: String,
}

impl Config {
    pub fn paths(&self) -> StatePaths {
        StatePaths {
            log: self.pgn.clone(),
            stats: self.stats.clone(),
            board: self.board.clone(),
            readme: self.readme.clone(),
        }
    }

    /// Explicit `--board-url`, otherwise the raw file on the repository's main branch.
    /// The trailing `?` keeps GitHub's image proxy from serving a stale board.
    pub fn board_url(&self) -> String {
        match &self.board_url {
            Some(url) => url.clone(),
            None => format!(
                "https://raw.githubusercontent.com/{}/main/{}?",
                self.repo,
                repo_relative(&self.board)
            ),
        }
    }
}

fn repo_relative(path: &Path) -> String {
    let display = path.to_string_lossy().replace('\\', "/");
    display.trim_start_matches("./").to_string()
}
