use super::fluency::analyze_runs;
use super::{ScoreDetails, Scorer};
use crate::alignment::{DiffEntry, DiffType};

const SCORE_MAX: f64 = 100.0;

pub fn score_details(scorer: &Scorer, entries: &[DiffEntry]) -> ScoreDetails {
    let mut details = ScoreDetails::default();

    for entry in entries {
        match entry.diff_type {
            DiffType::Correct => details.correct += 1,
            DiffType::Incorrect => details.incorrect += 1,
            DiffType::Missing => details.missing += 1,
            DiffType::Extra => details.extra += 1,
        }
    }

    // Extra words never enter the denominator
    details.total = details.correct + details.incorrect + details.missing;
    if details.total == 0 {
        return details;
    }

    let weights = &scorer.weights;
    let total = details.total as f64;

    details.accuracy = SCORE_MAX * details.correct as f64 / total;

    let runs = analyze_runs(entries);
    details.max_consecutive = runs.max_consecutive;
    details.continuity_bonus = (runs.max_consecutive as f64 / total) * weights.continuity_bonus;
    details.extra_penalty = runs.extra_count as f64 * weights.extra_word_penalty;

    // The bonus saturates at the ceiling before extra words are deducted
    let boosted = (details.accuracy + details.continuity_bonus).min(SCORE_MAX);
    details.fluency = (boosted - details.extra_penalty).clamp(0.0, SCORE_MAX);

    details.overall = (details.accuracy * weights.accuracy_weight
        + details.fluency * weights.fluency_weight)
        .clamp(0.0, SCORE_MAX);

    details
}
