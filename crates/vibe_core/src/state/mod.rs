//! Quiz State
//!
//! `QuizState` holds everything a quiz screen needs and only changes through
//! [`QuizState::reduce`], a pure transition over [`QuizEvent`]s. Scoring and
//! persistence live outside the reducer in [`QuizSession`], which feeds the
//! final score back in as `QuizEvent::ShowResult`.

pub mod session;

pub use session::{QuizOutcome, QuizSession};

use crate::error::{CoreError, Result};
use crate::selection::SelectionState;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QuizPhase {
    /// Entering a nickname and picking traits
    #[default]
    Picking,
    /// Showing a final score
    Results { score: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    SetNickname(String),
    Toggle { category_id: String, option_text: String },
    ShowResult { score: u8 },
    TryAgain,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizState {
    pub nickname: String,
    pub selections: SelectionState,
    pub phase: QuizPhase,
}

impl QuizState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit gate: a nickname and at least one touched category
    pub fn can_submit(&self) -> bool {
        self.phase == QuizPhase::Picking
            && !self.nickname.trim().is_empty()
            && !self.selections.is_empty()
    }

    pub fn score(&self) -> Option<u8> {
        match self.phase {
            QuizPhase::Results { score } => Some(score),
            QuizPhase::Picking => None,
        }
    }

    pub fn reduce(mut self, event: QuizEvent) -> Result<Self> {
        match event {
            QuizEvent::SetNickname(nickname) => {
                self.require_picking("change nickname")?;
                self.nickname = nickname;
            }
            QuizEvent::Toggle { category_id, option_text } => {
                self.require_picking("toggle options")?;
                self.selections.toggle(&category_id, &option_text);
            }
            QuizEvent::ShowResult { score } => {
                if !self.can_submit() {
                    return Err(CoreError::InvalidParameter(
                        "a nickname and at least one selection are required".to_string(),
                    ));
                }
                self.phase = QuizPhase::Results { score };
            }
            QuizEvent::TryAgain => {
                self.selections.clear();
                self.phase = QuizPhase::Picking;
            }
        }
        Ok(self)
    }

    fn require_picking(&self, action: &str) -> Result<()> {
        if self.phase != QuizPhase::Picking {
            return Err(CoreError::InvalidParameter(format!(
                "cannot {} while results are shown",
                action
            )));
        }
        Ok(())
    }
}
