//! # vibe_core - Life Vibes Check quiz engine
//!
//! Pick traits from a fixed catalog, get a bounded pseudo-random "vibe
//! score", and keep a persisted leaderboard of every run.
//!
//! ## Features
//! - Injected random source (seeded runs are reproducible)
//! - Pure reducer for quiz state, persistence kept behind `LeaderboardStore`
//! - JSON leaderboard slot with atomic writes and silent recovery from bad data

pub mod catalog;
pub mod config;
pub mod error;
pub mod leaderboard;
pub mod presentation;
pub mod scoring;
pub mod selection;
pub mod share;
pub mod state;

pub use catalog::{Category, TraitCatalog, TraitOption};
pub use config::QuizConfig;
pub use error::{CoreError, Result};
pub use leaderboard::{
    append, rank, FileLeaderboardStore, Leaderboard, LeaderboardError, LeaderboardStore,
    MemoryLeaderboardStore, Rank, ScoreRecord,
};
pub use presentation::{is_celebration, rank_text, reveal_frames, score_message, share_text};
pub use scoring::{compute_score, score_breakdown, seeded_rng, ScoreBreakdown};
pub use selection::SelectionState;
pub use share::{share_with_fallback, ShareChannel, ShareError, ShareOutcome};
pub use state::{QuizEvent, QuizOutcome, QuizPhase, QuizSession, QuizState};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
