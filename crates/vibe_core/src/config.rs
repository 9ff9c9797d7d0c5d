use crate::error::{CoreError, Result};
use crate::leaderboard::STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::{env, fs};

pub const CONFIG_PATH_ENV: &str = "VIBE_CONFIG_PATH";

/// Runtime settings for a quiz session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// JSON file holding the leaderboard
    pub leaderboard_path: PathBuf,

    /// Custom catalog; the built-in one when unset
    pub catalog_path: Option<PathBuf>,

    /// Pause before the score is revealed (milliseconds)
    pub reveal_delay_ms: u64,

    /// Count-up increment per reveal frame
    pub reveal_step: u8,

    /// Rows shown in the "Top Vibes" list
    pub top_n: usize,

    /// Scores above this get the celebration effect
    pub celebration_threshold: u8,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            leaderboard_path: PathBuf::from("saves").join(format!("{}.json", STORAGE_KEY)),
            catalog_path: None,
            reveal_delay_ms: 2000,
            reveal_step: 2,
            top_n: 5,
            celebration_threshold: 70,
        }
    }
}

impl QuizConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: QuizConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.reveal_step == 0 {
            return Err(CoreError::ValidationError("reveal_step must be at least 1".to_string()));
        }
        if self.top_n == 0 {
            return Err(CoreError::ValidationError("top_n must be at least 1".to_string()));
        }
        if self.celebration_threshold > 100 {
            return Err(CoreError::ValidationError(format!(
                "celebration_threshold {} is above 100",
                self.celebration_threshold
            )));
        }
        if self.leaderboard_path.as_os_str().is_empty() {
            return Err(CoreError::ValidationError("leaderboard_path is empty".to_string()));
        }
        Ok(())
    }

    /// Load from the file named by `VIBE_CONFIG_PATH`, or defaults when unset
    pub fn from_env() -> Result<Self> {
        let Ok(path) = env::var(CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            CoreError::IoError(format!(
                "Failed to read config file from {CONFIG_PATH_ENV}='{path}': {e}"
            ))
        })?;

        let config = Self::from_json(&content).map_err(|e| {
            CoreError::ParseError(format!("Invalid config from {CONFIG_PATH_ENV}='{path}': {e}"))
        })?;

        log::info!("Loaded config from {}", path);
        Ok(config)
    }
}
