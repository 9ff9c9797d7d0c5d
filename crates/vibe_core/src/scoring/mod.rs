//! Score Engine
//!
//! `score = clamp(50 + Σ impact(selected) + jitter, 1, 100)` with jitter drawn
//! uniformly from `[-10, 9]`.
//!
//! Scoring is intentionally non-deterministic: the same selections can land
//! anywhere inside the jitter band on repeated calls. The random source is
//! always supplied by the caller, so a seeded [`ChaCha8Rng`] reproduces a run
//! exactly.

use crate::catalog::TraitCatalog;
use crate::error::Result;
use crate::selection::SelectionState;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

pub const BASE_SCORE: i32 = 50;
pub const JITTER_MIN: i32 = -10;
/// Inclusive upper bound
pub const JITTER_MAX: i32 = 9;
pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 100;

/// Intermediate terms of one score computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub base: i32,
    pub bonus: i32,
    pub jitter: i32,
    pub raw: i32,
    pub score: u8,
}

pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Sum of impacts over every selected option
///
/// A selection the catalog does not know about is a wiring bug upstream; it
/// is logged and reported instead of being scored as zero. The sum
/// saturates, so extreme custom impacts still clamp to a valid score.
pub fn selection_bonus(selections: &SelectionState, catalog: &TraitCatalog) -> Result<i32> {
    let mut bonus: i32 = 0;
    for (category_id, option_text) in selections.selected() {
        let impact = catalog.impact(category_id, option_text).map_err(|e| {
            log::error!("Selection outside catalog while scoring: {}", e);
            e
        })?;
        bonus = i32::saturating_add(bonus, impact);
    }
    Ok(bonus)
}

pub fn draw_jitter<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.gen_range(JITTER_MIN..=JITTER_MAX)
}

pub fn clamp_score(raw: i32) -> u8 {
    raw.clamp(MIN_SCORE as i32, MAX_SCORE as i32) as u8
}

pub fn score_breakdown<R: Rng + ?Sized>(
    selections: &SelectionState,
    catalog: &TraitCatalog,
    rng: &mut R,
) -> Result<ScoreBreakdown> {
    let bonus = selection_bonus(selections, catalog)?;
    let jitter = draw_jitter(rng);
    let raw = BASE_SCORE.saturating_add(bonus).saturating_add(jitter);
    let score = clamp_score(raw);

    log::debug!(
        "Score computed: base={} bonus={} jitter={} raw={} final={}",
        BASE_SCORE,
        bonus,
        jitter,
        raw,
        score
    );

    Ok(ScoreBreakdown { base: BASE_SCORE, bonus, jitter, raw, score })
}

/// Final vibe score in `[1, 100]`
pub fn compute_score<R: Rng + ?Sized>(
    selections: &SelectionState,
    catalog: &TraitCatalog,
    rng: &mut R,
) -> Result<u8> {
    score_breakdown(selections, catalog, rng).map(|b| b.score)
}
