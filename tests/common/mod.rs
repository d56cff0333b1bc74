use std::fs;
use std::path::PathBuf;

use clap::Parser;
use issue_chess::config::Config;
use issue_chess::stats::StatisticsRecord;
use tempfile::TempDir;

pub const REPO: &str = "octo/chess";

/// A throwaway state directory laid out like the real repository.
pub struct StateDir {
    pub dir: TempDir,
}

impl StateDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn pgn(&self) -> PathBuf {
        self.path("state/game.pgn")
    }

    pub fn stats(&self) -> PathBuf {
        self.path("state/stats.json")
    }

    pub fn board(&self) -> PathBuf {
        self.path("state/board.svg")
    }

    pub fn readme(&self) -> PathBuf {
        self.path("README.md")
    }

    /// Config for one invocation with `title` as the command.
    pub fn config(&self, title: &str) -> Config {
        Config::parse_from([
            "issue-chess".to_string(),
            format!("--pgn={}", self.pgn().display()),
            format!("--stats={}", self.stats().display()),
            format!("--board={}", self.board().display()),
            format!("--readme={}", self.readme().display()),
            format!("--repo={REPO}"),
            "--board-url=state/board.svg".to_string(),
            format!("--title={title}"),
        ])
    }

    pub fn write_pgn(&self, movetext: &str) {
        fs::create_dir_all(self.path("state")).unwrap();
        fs::write(self.pgn(), movetext).unwrap();
    }

    pub fn write_stats(&self, stats: &StatisticsRecord) {
        fs::create_dir_all(self.path("state")).unwrap();
        fs::write(self.stats(), serde_json::to_string(stats).unwrap()).unwrap();
    }

    pub fn read(&self, path: PathBuf) -> String {
        fs::read_to_string(path).unwrap()
    }

    pub fn read_stats(&self) -> StatisticsRecord {
        serde_json::from_str(&self.read(self.stats())).unwrap()
    }

    /// Bytes of the three persisted artifacts, for before/after comparisons.
    pub fn snapshot(&self) -> [Vec<u8>; 3] {
        [
            fs::read(self.pgn()).unwrap(),
            fs::read(self.stats()).unwrap(),
            fs::read(self.board()).unwrap(),
        ]
    }
}
