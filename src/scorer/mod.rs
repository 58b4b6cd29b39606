pub mod engine;
pub mod fluency;
pub mod types;

pub use self::types::ScoreDetails;
use crate::alignment::DiffEntry;
use crate::config::ScoringWeights;
use crate::error::EsResult;

/// The one scoring formula used for live comparisons and stored results.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    weights: ScoringWeights,
}

impl Scorer {
    pub fn new(weights: ScoringWeights) -> EsResult<Self> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Returns `(accuracy, fluency, overall)`, each within 0..=100.
    pub fn score(&self, entries: &[DiffEntry]) -> (f64, f64, f64) {
        self.score_details(entries).scores()
    }

    pub fn score_details(&self, entries: &[DiffEntry]) -> ScoreDetails {
        engine::score_details(self, entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::align;
    use approx::assert_relative_eq;

    #[test]
    fn test_extra_word_penalized_after_bonus_cap() {
        let diff = align(&["hello", "world"], &["hello", "world", "extra"]);
        let details = Scorer::default().score_details(&diff);
        assert_eq!(details.total, 2);
        assert_relative_eq!(details.accuracy, 100.0);
        assert_relative_eq!(details.fluency, 95.0);
        assert_relative_eq!(details.overall, 98.5, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_diff_scores_zero() {
        assert_eq!(Scorer::default().score(&[]), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_only_extras_scores_zero() {
        let empty: [&str; 0] = [];
        let diff = align(&empty, &["um", "uh"]);
        let details = Scorer::default().score_details(&diff);
        assert_eq!(details.extra, 2);
        assert_eq!(details.scores(), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_penalty_floor_at_zero() {
        let diff = align(&["a", "b"], &["x", "y", "z", "w", "v", "u"]);
        let details = Scorer::default().score_details(&diff);
        assert_eq!(details.accuracy, 0.0);
        assert_eq!(details.fluency, 0.0);
        assert_eq!(details.overall, 0.0);
    }

    #[test]
    fn test_partial_read_bonus() {
        // 2 of 4 correct in one run: 50 + (2/4)*20 = 60
        let diff = align(&["a", "b", "c", "d"], &["a", "b"]);
        let details = Scorer::default().score_details(&diff);
        assert_relative_eq!(details.accuracy, 50.0);
        assert_relative_eq!(details.fluency, 60.0);
        assert_relative_eq!(details.overall, 53.0, epsilon = 1e-9);
    }

    #[test]
    fn test_custom_weights() {
        let weights = ScoringWeights {
            accuracy_weight: 0.5,
            fluency_weight: 0.5,
            continuity_bonus: 0.0,
            extra_word_penalty: 10.0,
        };
        let scorer = Scorer::new(weights).unwrap();
        let diff = align(&["hello", "world"], &["hello", "world", "extra"]);
        let (accuracy, fluency, overall) = scorer.score(&diff);
        assert_relative_eq!(accuracy, 100.0);
        assert_relative_eq!(fluency, 90.0);
        assert_relative_eq!(overall, 95.0);
    }

    #[test]
    fn test_construction_validates_weights() {
        let unbalanced = ScoringWeights {
            accuracy_weight: 0.9,
            ..Default::default()
        };
        assert!(Scorer::new(unbalanced).is_err());

        let scorer = Scorer::new(ScoringWeights::default()).unwrap();
        assert_eq!(scorer.weights(), &ScoringWeights::default());
        assert_eq!(Scorer::default().weights(), &ScoringWeights::default());
    }
}
