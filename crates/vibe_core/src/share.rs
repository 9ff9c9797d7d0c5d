//! Share action
//!
//! Hands the share text to a platform channel, falling back to a clipboard
//! channel. Failures never reach the user; they only show up in the outcome
//! and the log.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShareError {
    #[error("Share channel unavailable")]
    Unavailable,

    #[error("Share failed: {0}")]
    Failed(String),
}

pub trait ShareChannel {
    fn name(&self) -> &str;

    fn share(&mut self, text: &str) -> Result<(), ShareError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Copied,
    Unavailable,
}

/// Try `primary`, then `fallback`, degrading silently
pub fn share_with_fallback(
    primary: Option<&mut dyn ShareChannel>,
    fallback: &mut dyn ShareChannel,
    text: &str,
) -> ShareOutcome {
    if let Some(channel) = primary {
        match channel.share(text) {
            Ok(()) => return ShareOutcome::Shared,
            Err(e) => log::debug!("Share via {} failed: {}", channel.name(), e),
        }
    }

    match fallback.share(text) {
        Ok(()) => ShareOutcome::Copied,
        Err(e) => {
            log::debug!("Share fallback {} failed: {}", fallback.name(), e);
            ShareOutcome::Unavailable
        }
    }
}

/// Channel that keeps whatever was shared; stands in for a clipboard
#[derive(Debug, Default)]
pub struct BufferChannel {
    contents: Option<String>,
}

impl BufferChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ShareChannel for BufferChannel {
    fn name(&self) -> &str {
        "buffer"
    }

    fn share(&mut self, text: &str) -> Result<(), ShareError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl ShareChannel for Broken {
        fn name(&self) -> &str {
            "broken"
        }

        fn share(&mut self, _text: &str) -> Result<(), ShareError> {
            Err(ShareError::Unavailable)
        }
    }

    #[test]
    fn test_primary_used_when_available() {
        let mut primary = BufferChannel::new();
        let mut fallback = BufferChannel::new();

        let outcome = share_with_fallback(Some(&mut primary), &mut fallback, "hi");
        assert_eq!(outcome, ShareOutcome::Shared);
        assert_eq!(primary.contents(), Some("hi"));
        assert_eq!(fallback.contents(), None);
    }

    #[test]
    fn test_falls_back_to_clipboard() {
        let mut fallback = BufferChannel::new();
        assert_eq!(share_with_fallback(None, &mut fallback, "hi"), ShareOutcome::Copied);

        let mut broken = Broken;
        let mut fallback = BufferChannel::new();
        let outcome = share_with_fallback(Some(&mut broken), &mut fallback, "hey");
        assert_eq!(outcome, ShareOutcome::Copied);
        assert_eq!(fallback.contents(), Some("hey"));
    }

    #[test]
    fn test_degrades_silently() {
        let mut primary = Broken;
        let mut fallback = Broken;
        let outcome = share_with_fallback(Some(&mut primary), &mut fallback, "hi");
        assert_eq!(outcome, ShareOutcome::Unavailable);
    }
}
