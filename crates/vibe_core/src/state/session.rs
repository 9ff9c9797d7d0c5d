use super::{QuizEvent, QuizState};
use crate::catalog::TraitCatalog;
use crate::error::{CoreError, Result};
use crate::leaderboard::{append, Leaderboard, LeaderboardStore, Rank, ScoreRecord};
use crate::presentation::{rank_text, score_message, share_text};
use crate::scoring::{score_breakdown, ScoreBreakdown};
use rand::Rng;

/// Everything the result screen shows for one completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOutcome {
    pub record: ScoreRecord,
    pub breakdown: ScoreBreakdown,
    pub rank: Option<Rank>,
    pub message: &'static str,
}

impl QuizOutcome {
    pub fn score(&self) -> u8 {
        self.record.score
    }

    pub fn rank_text(&self) -> String {
        self.rank.map(rank_text).unwrap_or_default()
    }

    pub fn share_text(&self) -> String {
        share_text(self.record.score)
    }
}

/// One quiz screen: state, catalog, random source and leaderboard slot
///
/// The leaderboard is loaded once on construction and written back after
/// every submitted run.
pub struct QuizSession<S: LeaderboardStore, R: Rng> {
    catalog: TraitCatalog,
    store: S,
    rng: R,
    leaderboard: Leaderboard,
    state: QuizState,
}

impl<S: LeaderboardStore, R: Rng> QuizSession<S, R> {
    pub fn new(catalog: TraitCatalog, store: S, rng: R) -> Self {
        let leaderboard = store.load();
        log::info!("Quiz session started with {} past scores", leaderboard.len());

        Self { catalog, store, rng, leaderboard, state: QuizState::new() }
    }

    pub fn catalog(&self) -> &TraitCatalog {
        &self.catalog
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn can_submit(&self) -> bool {
        self.state.can_submit()
    }

    pub fn set_nickname(&mut self, nickname: impl Into<String>) -> Result<()> {
        self.dispatch(QuizEvent::SetNickname(nickname.into()))
    }

    /// Toggle a catalog option, returning its new flag
    pub fn toggle(&mut self, category_id: &str, option_text: &str) -> Result<bool> {
        if !self.catalog.contains(category_id, option_text) {
            return Err(CoreError::NotFound(format!(
                "Option not in catalog: {}/{}",
                category_id, option_text
            )));
        }

        self.dispatch(QuizEvent::Toggle {
            category_id: category_id.to_string(),
            option_text: option_text.to_string(),
        })?;

        Ok(self.state.selections.is_selected(category_id, option_text))
    }

    /// Score the current selections, persist the run and show the result
    ///
    /// The returned score is final; any count-up reveal happens afterwards
    /// and never feeds back into what was stored.
    pub fn submit(&mut self) -> Result<QuizOutcome> {
        if !self.state.can_submit() {
            return Err(CoreError::InvalidParameter(
                "a nickname and at least one selection are required".to_string(),
            ));
        }

        let breakdown = score_breakdown(&self.state.selections, &self.catalog, &mut self.rng)?;
        let record = ScoreRecord::new(
            self.state.nickname.trim(),
            breakdown.score,
            self.state.selections.clone(),
        );

        self.leaderboard = append(&mut self.store, &self.leaderboard, record.clone())?;
        self.dispatch(QuizEvent::ShowResult { score: breakdown.score })?;

        let rank = self.leaderboard.rank(breakdown.score);
        log::info!(
            "{} scored {} ({})",
            record.nickname,
            breakdown.score,
            rank.map(rank_text).unwrap_or_else(|| "unranked".to_string())
        );

        Ok(QuizOutcome { record, breakdown, rank, message: score_message(breakdown.score) })
    }

    /// Back to picking with cleared selections; the nickname is kept
    pub fn try_again(&mut self) -> Result<()> {
        self.dispatch(QuizEvent::TryAgain)
    }

    fn dispatch(&mut self, event: QuizEvent) -> Result<()> {
        self.state = self.state.clone().reduce(event)?;
        Ok(())
    }
}
