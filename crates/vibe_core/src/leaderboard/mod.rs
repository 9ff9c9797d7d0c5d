// Leaderboard for Life Vibes Check
// JSON slot holding every past run, sorted by score

pub mod error;
pub mod format;
pub mod store;

pub use error::LeaderboardError;
pub use format::{current_timestamp, rank, Leaderboard, Rank, ScoreRecord};
pub use store::{append, FileLeaderboardStore, LeaderboardStore, MemoryLeaderboardStore};

/// Name of the persisted slot
pub const STORAGE_KEY: &str = "lifeQuizScores";
