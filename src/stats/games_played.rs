//! Persisted games-played counter.
//!
//! A small JSON record on disk, bumped once per finished game. It sits
//! outside the rules engine: the session only calls it when a game first
//! reaches checkmate or stalemate.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::chess_errors::ChessResult;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamesPlayedRecord {
    pub games_played: u64,
    #[serde(default)]
    pub last_completed: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct GamesPlayedStore {
    path: PathBuf,
}

impl GamesPlayedStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file reads as an empty record.
    pub fn load(&self) -> ChessResult<GamesPlayedRecord> {
        if !self.path.exists() {
            return Ok(GamesPlayedRecord::default());
        }
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save(&self, record: &GamesPlayedRecord) -> ChessResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(record)?)?;
        Ok(())
    }

    pub fn record_completed_game(&self, completed_at: DateTime<Utc>) -> ChessResult<GamesPlayedRecord> {
        let mut record = self.load()?;
        record.games_played += 1;
        record.last_completed = Some(completed_at);
        self.save(&record)?;
        debug!(
            "games played now {} ({})",
            record.games_played,
            self.path.display()
        );
        Ok(record)
    }
}
