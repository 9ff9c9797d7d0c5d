//! Result presentation
//!
//! Pure derivations from a final score: result message, rank line, share
//! text and the count-up frames shown while the score is revealed.

use crate::leaderboard::Rank;

/// Lower bound (inclusive) of each message band, highest first
const MESSAGE_BANDS: [(u8, &str); 7] = [
    (90, "You're Living Your Best Life!"),
    (80, "Life of the Party!"),
    (70, "Absolutely Crushing It!"),
    (60, "Living Pretty Sweet!"),
    (50, "Vibing in the Middle!"),
    (40, "Room for More Fun!"),
    (30, "Time to Level Up!"),
];

const FALLBACK_MESSAGE: &str = "Starting Your Journey!";

pub fn score_message(score: u8) -> &'static str {
    MESSAGE_BANDS
        .iter()
        .find(|(floor, _)| score >= *floor)
        .map(|(_, message)| *message)
        .unwrap_or(FALLBACK_MESSAGE)
}

pub fn rank_text(rank: Rank) -> String {
    format!("Ranked #{} of {}", rank.position, rank.total)
}

pub fn share_text(score: u8) -> String {
    format!(
        "Just scored {}/100 on Life Vibes Check! {} Try it yourself!",
        score,
        score_message(score)
    )
}

/// Scores strictly above the threshold get the celebration effect
pub fn is_celebration(score: u8, threshold: u8) -> bool {
    score > threshold
}

/// Values shown while counting up to `final_score`, `step` at a time
///
/// The last frame is always `final_score`; the count-up never changes
/// what gets persisted.
pub fn reveal_frames(final_score: u8, step: u8) -> Vec<u8> {
    let step = step.max(1);
    let mut frames = Vec::new();
    let mut current: u8 = 0;

    while current < final_score {
        current = current.saturating_add(step).min(final_score);
        frames.push(current);
    }

    frames
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_band_boundaries() {
        let cases = [
            (100, "You're Living Your Best Life!"),
            (90, "You're Living Your Best Life!"),
            (89, "Life of the Party!"),
            (80, "Life of the Party!"),
            (79, "Absolutely Crushing It!"),
            (70, "Absolutely Crushing It!"),
            (60, "Living Pretty Sweet!"),
            (59, "Vibing in the Middle!"),
            (50, "Vibing in the Middle!"),
            (40, "Room for More Fun!"),
            (39, "Time to Level Up!"),
            (30, "Time to Level Up!"),
            (29, "Starting Your Journey!"),
            (1, "Starting Your Journey!"),
        ];

        for (score, expected) in cases {
            assert_eq!(score_message(score), expected, "score {}", score);
        }
    }

    #[test]
    fn test_message_total_over_range() {
        let mut distinct = std::collections::HashSet::new();
        for score in 1..=100u8 {
            let message = score_message(score);
            assert_eq!(message, score_message(score));
            distinct.insert(message);
        }
        assert_eq!(distinct.len(), 8);
    }

    #[test]
    fn test_rank_text() {
        assert_eq!(rank_text(Rank { position: 3, total: 12 }), "Ranked #3 of 12");
    }

    #[test]
    fn test_share_text() {
        assert_eq!(
            share_text(72),
            "Just scored 72/100 on Life Vibes Check! Absolutely Crushing It! Try it yourself!"
        );
    }

    #[test]
    fn test_celebration_threshold() {
        assert!(!is_celebration(70, 70));
        assert!(is_celebration(71, 70));
    }

    #[test]
    fn test_reveal_frames() {
        assert_eq!(reveal_frames(7, 2), vec![2, 4, 6, 7]);
        assert_eq!(reveal_frames(6, 2), vec![2, 4, 6]);
        assert_eq!(reveal_frames(1, 2), vec![1]);
        assert_eq!(reveal_frames(3, 0), vec![1, 2, 3]);

        let frames = reveal_frames(100, 3);
        assert_eq!(frames.last(), Some(&100));
        assert!(frames.windows(2).all(|w| w[0] < w[1]));
    }
}
