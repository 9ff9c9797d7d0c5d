use super::error::LeaderboardError;
use super::format::{Leaderboard, ScoreRecord};

use std::fs::{remove_file, rename, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// A single named slot holding the JSON-serialized leaderboard
pub trait LeaderboardStore {
    /// Raw slot contents, `None` when nothing has been persisted yet
    fn read_slot(&self) -> Result<Option<String>, LeaderboardError>;

    fn write_slot(&mut self, json: &str) -> Result<(), LeaderboardError>;

    /// Load the persisted leaderboard
    ///
    /// Never fails: an absent, unreadable or malformed slot is an empty
    /// leaderboard.
    fn load(&self) -> Leaderboard {
        let json = match self.read_slot() {
            Ok(Some(json)) => json,
            Ok(None) => {
                log::debug!("No persisted leaderboard, starting empty");
                return Leaderboard::new();
            }
            Err(e) => {
                log::warn!("Leaderboard slot unreadable, starting empty: {}", e);
                return Leaderboard::new();
            }
        };

        match Leaderboard::from_json(&json) {
            Ok(leaderboard) => {
                log::debug!("Loaded leaderboard with {} records", leaderboard.len());
                leaderboard
            }
            Err(e) => {
                log::warn!("Persisted leaderboard malformed, treating as empty: {}", e);
                Leaderboard::new()
            }
        }
    }

    fn save(&mut self, leaderboard: &Leaderboard) -> Result<(), LeaderboardError> {
        let json = leaderboard.to_json()?;
        self.write_slot(&json)
    }
}

/// Insert `record`, persist the full result, and return it
///
/// `leaderboard` is left untouched when persisting fails.
pub fn append<S: LeaderboardStore + ?Sized>(
    store: &mut S,
    leaderboard: &Leaderboard,
    record: ScoreRecord,
) -> Result<Leaderboard, LeaderboardError> {
    let mut updated = leaderboard.clone();
    updated.insert(record);
    store.save(&updated)?;

    log::info!("Leaderboard persisted with {} records", updated.len());
    Ok(updated)
}

/// Leaderboard slot backed by a JSON file
#[derive(Debug, Clone)]
pub struct FileLeaderboardStore {
    path: PathBuf,
}

impl FileLeaderboardStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LeaderboardStore for FileLeaderboardStore {
    fn read_slot(&self) -> Result<Option<String>, LeaderboardError> {
        match std::fs::read_to_string(&self.path) {
            Ok(json) => Ok(Some(json)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write_slot(&mut self, json: &str) -> Result<(), LeaderboardError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        // Atomic save: write to temp file, then rename
        let temp_path = self.path.with_extension("tmp");

        let written = File::create(&temp_path).and_then(|mut file| {
            file.write_all(json.as_bytes())?;
            file.flush()?;
            file.sync_all()
        });

        if let Err(e) = written.and_then(|()| rename(&temp_path, &self.path)) {
            let _ = remove_file(&temp_path);
            return Err(e.into());
        }

        log::debug!("Saved {} bytes to {:?}", json.len(), self.path);
        Ok(())
    }
}

/// In-memory slot, used where no filesystem is wanted
#[derive(Debug, Clone, Default)]
pub struct MemoryLeaderboardStore {
    slot: Option<String>,
    writes: usize,
}

impl MemoryLeaderboardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(json: impl Into<String>) -> Self {
        Self { slot: Some(json.into()), writes: 0 }
    }

    pub fn contents(&self) -> Option<&str> {
        self.slot.as_deref()
    }

    /// Number of times the slot has been written
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl LeaderboardStore for MemoryLeaderboardStore {
    fn read_slot(&self) -> Result<Option<String>, LeaderboardError> {
        Ok(self.slot.clone())
    }

    fn write_slot(&mut self, json: &str) -> Result<(), LeaderboardError> {
        self.slot = Some(json.to_string());
        self.writes += 1;
        Ok(())
    }
}
