//! Scoring module - grades a shot against a scene's standard answer
//!
//! Two independent judgements are made from the signed EV difference
//! (`current - target`, positive = brighter than the target):
//!
//! - A five-way [`Classification`] that drives the feedback text.
//! - A coarse three-way [`OutcomeImage`] (±1.5 EV) that picks the photo to show.
//!
//! The two can disagree near the boundaries: a shot at +1.2 EV is classified
//! `SlightOver` but still shows the balanced background image. This matches the
//! game's established behavior and is kept as-is.

use crate::exposure::exposure_value;
use crate::feedback::{generate_feedback, Feedback};
use crate::scene::Scene;
use crate::types::{
    Classification, Locale, OutcomeImage, ParameterSet, EV_EPSILON, MAX_SCORE,
    OUTCOME_IMAGE_THRESHOLD_EV, PERFECT_BAND_EV, SCORE_PER_EV, SLIGHT_BAND_EV,
};

/// Everything the result screen needs about one shot.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundResult {
    /// 0..=100; 100 only for an exact EV match.
    pub score: u8,
    pub classification: Classification,
    pub outcome: OutcomeImage,
    /// Asset reference resolved from `outcome` and the scene.
    pub outcome_image_ref: String,
    pub feedback: Feedback,
    pub current_ev: f64,
    pub target_ev: f64,
    /// `current_ev - target_ev`
    pub ev_difference: f64,
}

/// Classify a signed EV difference.
///
/// Rules are evaluated in order, first match wins:
/// 1. `|diff| < 1.0` -> Perfect
/// 2. `diff > 1.5` -> Over
/// 3. `diff < -1.5` -> Under
/// 4. `1.0 <= diff <= 1.5` -> SlightOver
/// 5. otherwise (`-1.5 <= diff <= -1.0`) -> SlightUnder
pub fn classify(diff: f64) -> Classification {
    if diff.abs() < PERFECT_BAND_EV {
        Classification::Perfect
    } else if diff > SLIGHT_BAND_EV {
        Classification::Over
    } else if diff < -SLIGHT_BAND_EV {
        Classification::Under
    } else if diff > 0.0 {
        Classification::SlightOver
    } else {
        Classification::SlightUnder
    }
}

/// Score for an absolute EV difference: `max(0, round(100 - 15 * |diff|))`,
/// capped at 99 unless the difference is an exact match.
pub fn score_for_difference(abs_diff: f64) -> u8 {
    if abs_diff < EV_EPSILON {
        return MAX_SCORE;
    }
    let raw = (MAX_SCORE as f64 - abs_diff * SCORE_PER_EV).round();
    raw.clamp(0.0, (MAX_SCORE - 1) as f64) as u8
}

/// Coarse over/under/balanced choice used for the photo.
pub fn select_outcome(current_ev: f64, target_ev: f64) -> OutcomeImage {
    if current_ev > target_ev + OUTCOME_IMAGE_THRESHOLD_EV {
        OutcomeImage::OverExposed
    } else if current_ev < target_ev - OUTCOME_IMAGE_THRESHOLD_EV {
        OutcomeImage::UnderExposed
    } else {
        OutcomeImage::Balanced
    }
}

/// Asset reference for an outcome in a scene.
pub fn outcome_image_ref(scene: &Scene, outcome: OutcomeImage) -> &str {
    match outcome {
        OutcomeImage::OverExposed => &scene.over_exposed,
        OutcomeImage::UnderExposed => &scene.under_exposed,
        OutcomeImage::Balanced => &scene.background,
    }
}

/// Live preview while the player is still adjusting.
pub fn preview_outcome(params: &ParameterSet, scene: &Scene) -> OutcomeImage {
    select_outcome(exposure_value(params), exposure_value(&scene.standard))
}

/// Grade a shot taken with `current` in `scene`.
pub fn evaluate_round(current: &ParameterSet, scene: &Scene, locale: Locale) -> RoundResult {
    let current_ev = exposure_value(current);
    let target_ev = exposure_value(&scene.standard);
    let diff = current_ev - target_ev;

    let score = score_for_difference(diff.abs());
    let classification = classify(diff);
    let outcome = select_outcome(current_ev, target_ev);

    RoundResult {
        score,
        classification,
        outcome,
        outcome_image_ref: outcome_image_ref(scene, outcome).to_string(),
        feedback: generate_feedback(scene, classification, diff, locale),
        current_ev,
        target_ev,
        ev_difference: diff,
    }
}
