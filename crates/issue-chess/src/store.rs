//! Flat-file state store: game log, statistics, board image, status document.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::ControllerError;
use crate::stats::StatisticsRecord;

#[derive(Debug, Clone)]
pub struct StatePaths {
    pub log: PathBuf,
    pub stats: PathBuf,
    pub board: PathBuf,
    pub readme: PathBuf,
}

/// Each artifact is an independent file. Writes go to a sibling `.tmp` file
/// that is renamed over the target, so a reader never sees half a file.
/// There is no locking; one invocation at a time.
#[derive(Debug, Clone)]
pub struct StateStore {
    paths: StatePaths,
}

impl StateStore {
    pub fn new(paths: StatePaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &StatePaths {
        &self.paths
    }

    /// Raw movetext of the current game. A missing log is a fresh game and
    /// is created empty.
    pub fn load_log(&self) -> Result<String, ControllerError> {
        let path = &self.paths.log;
        match fs::read_to_string(path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No game log, starting a fresh game");
                self.save_log("")?;
                Ok(String::new())
            }
            Err(e) => Err(ControllerError::io("read game log", path, e)),
        }
    }

    /// Never fails: anything missing or unreadable falls back to zeroed defaults.
    pub fn load_stats(&self) -> StatisticsRecord {
        let path = &self.paths.stats;
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return StatisticsRecord::default(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Unreadable statistics, using defaults");
                return StatisticsRecord::default();
            }
        };

        serde_json::from_str(&data).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "Corrupt statistics, using defaults");
            StatisticsRecord::default()
        })
    }

    pub fn save_log(&self, movetext: &str) -> Result<(), ControllerError> {
        write_artifact(&self.paths.log, movetext.as_bytes())
    }

    pub fn save_stats(&self, stats: &StatisticsRecord) -> Result<(), ControllerError> {
        let mut json = serde_json::to_string_pretty(stats)?;
        json.push('\n');
        write_artifact(&self.paths.stats, json.as_bytes())
    }

    pub fn save_board(&self, svg: &str) -> Result<(), ControllerError> {
        write_artifact(&self.paths.board, svg.as_bytes())
    }

    pub fn save_readme(&self, document: &str) -> Result<(), ControllerError> {
        write_artifact(&self.paths.readme, document.as_bytes())
    }

    /// Delete the game log. A log that is already gone is an error too.
    pub fn remove_log(&self) -> Result<(), ControllerError> {
        let path = &self.paths.log;
        fs::remove_file(path).map_err(|e| ControllerError::io("remove game log", path, e))
    }
}

fn write_artifact(path: &Path, contents: &[u8]) -> Result<(), ControllerError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| ControllerError::io("create directory", parent, e))?;
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, contents).map_err(|e| ControllerError::io("write", &tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| ControllerError::io("replace", path, e))?;

    debug!(path = %path.display(), bytes = contents.len(), "Wrote artifact");
    Ok(())
}
