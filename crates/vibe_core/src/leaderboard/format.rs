use super::error::LeaderboardError;
use crate::scoring::{MAX_SCORE, MIN_SCORE};
use crate::selection::SelectionState;
use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// One completed quiz run
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ScoreRecord {
    pub nickname: String,

    /// Final clamped score, 1..=100
    pub score: u8,

    /// Snapshot of the selections the score was computed from
    pub selections: SelectionState,

    /// Creation time (unix milliseconds)
    pub timestamp: i64,
}

impl ScoreRecord {
    pub fn new(nickname: impl Into<String>, score: u8, selections: SelectionState) -> Self {
        Self { nickname: nickname.into(), score, selections, timestamp: current_timestamp() }
    }

    pub fn format_timestamp(&self) -> String {
        match Utc.timestamp_millis_opt(self.timestamp).single() {
            Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
            None => "Unknown".to_string(),
        }
    }
}

/// Position of a score within the leaderboard (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rank {
    pub position: usize,
    pub total: usize,
}

/// All past runs, highest score first
///
/// Serialized as a bare JSON array so the persisted slot stays
/// `[{nickname, score, selections, timestamp}, ...]`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Leaderboard {
    records: Vec<ScoreRecord>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from records in any order; the sort invariant is restored
    pub fn from_records(records: Vec<ScoreRecord>) -> Self {
        let mut leaderboard = Self { records };
        leaderboard.sort();
        leaderboard
    }

    /// Insert a record and re-establish descending order
    ///
    /// `sort_by` is stable, so equal scores keep their insertion order.
    pub fn insert(&mut self, record: ScoreRecord) {
        self.records.push(record);
        self.sort();
    }

    fn sort(&mut self) {
        self.records.sort_by(|a, b| b.score.cmp(&a.score));
    }

    /// Rank of the first record holding `score`
    ///
    /// Several records can share a score; the first (oldest among equals)
    /// always wins, so a fresh tie reports the earlier position. `None` when
    /// no record has this score.
    pub fn rank(&self, score: u8) -> Option<Rank> {
        self.records
            .iter()
            .position(|r| r.score == score)
            .map(|idx| Rank { position: idx + 1, total: self.records.len() })
    }

    pub fn top(&self, n: usize) -> &[ScoreRecord] {
        &self.records[..n.min(self.records.len())]
    }

    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn to_json(&self) -> Result<String, LeaderboardError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a persisted slot; every score must lie in `[1, 100]`
    pub fn from_json(json: &str) -> Result<Self, LeaderboardError> {
        let leaderboard: Leaderboard = serde_json::from_str(json)?;
        if let Some(bad) =
            leaderboard.records.iter().find(|r| !(MIN_SCORE..=MAX_SCORE).contains(&r.score))
        {
            return Err(LeaderboardError::ScoreOutOfRange(bad.score));
        }
        Ok(Self::from_records(leaderboard.records))
    }
}

/// Rank of `score` within `leaderboard`
pub fn rank(score: u8, leaderboard: &Leaderboard) -> Option<Rank> {
    leaderboard.rank(score)
}

pub fn current_timestamp() -> i64 {
    Utc::now().timestamp_millis()
}
