use crate::result::{Grade, PracticeResult};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

/// Aggregate view over many stored attempts, as shown on a history screen.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySummary {
    pub attempts: usize,
    pub mean_accuracy: f64,
    pub mean_fluency: f64,
    pub mean_overall: f64,
    pub best_overall: f64,
    /// Micro-averaged over every reference word of every attempt.
    pub word_error_rate: f64,
    pub total_words: usize,
    pub grade_distribution: BTreeMap<Grade, usize>,
}

impl HistorySummary {
    pub fn from_results(results: &[PracticeResult]) -> Self {
        let mut summary = HistorySummary {
            grade_distribution: Grade::iter().map(|g| (g, 0)).collect(),
            ..Default::default()
        };
        if results.is_empty() {
            return summary;
        }

        let n = results.len() as f64;
        summary.attempts = results.len();
        summary.mean_accuracy = results.iter().map(|r| r.accuracy_score()).sum::<f64>() / n;
        summary.mean_fluency = results.iter().map(|r| r.fluency_score()).sum::<f64>() / n;
        summary.mean_overall = results.iter().map(|r| r.overall_score()).sum::<f64>() / n;
        summary.best_overall = results
            .iter()
            .map(|r| r.overall_score())
            .fold(0.0, f64::max);

        let errors: usize = results
            .iter()
            .map(|r| r.incorrect_words() + r.missing_words())
            .sum();
        summary.total_words = results.iter().map(|r| r.total_words()).sum();
        if summary.total_words > 0 {
            summary.word_error_rate = errors as f64 / summary.total_words as f64;
        }

        for (grade, count) in results.iter().map(|r| r.grade()).counts() {
            summary.grade_distribution.insert(grade, count);
        }

        summary
    }

    pub fn for_material(results: &[PracticeResult], material_id: &str) -> Self {
        let filtered: Vec<PracticeResult> = results
            .iter()
            .filter(|r| r.material_id() == material_id)
            .cloned()
            .collect();
        Self::from_results(&filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::align;
    use crate::result::AttemptInput;
    use crate::scorer::Scorer;
    use approx::assert_relative_eq;

    fn attempt(material: &str, original: &[&str], recognized: &[&str]) -> PracticeResult {
        let input = AttemptInput::builder()
            .material_id(material)
            .original_text(original.join(" "))
            .recognized_text(recognized.join(" "))
            .build();
        PracticeResult::aggregate(input, align(original, recognized), &Scorer::default())
    }

    #[test]
    fn test_empty_history() {
        let summary = HistorySummary::from_results(&[]);
        assert_eq!(summary.attempts, 0);
        assert_eq!(summary.mean_overall, 0.0);
        assert_eq!(summary.grade_distribution.len(), 5);
        assert!(summary.grade_distribution.values().all(|&c| c == 0));
    }

    #[test]
    fn test_means_and_micro_wer() {
        let results = vec![
            attempt("m1", &["a", "b"], &["a", "b"]),
            attempt("m1", &["a", "b", "c", "d"], &["a", "b"]),
        ];
        let summary = HistorySummary::from_results(&results);
        assert_eq!(summary.attempts, 2);
        assert_relative_eq!(summary.mean_accuracy, 75.0);
        assert_relative_eq!(summary.best_overall, 100.0);
        // 2 missed out of 6 reference words
        assert_relative_eq!(summary.word_error_rate, 2.0 / 6.0);
        assert_eq!(summary.total_words, 6);
        assert_eq!(summary.grade_distribution[&Grade::S], 1);
        assert_eq!(summary.grade_distribution[&Grade::D], 1);
    }

    #[test]
    fn test_for_material_filters() {
        let results = vec![
            attempt("m1", &["a"], &["a"]),
            attempt("m2", &["a"], &["b"]),
        ];
        let summary = HistorySummary::for_material(&results, "m2");
        assert_eq!(summary.attempts, 1);
        assert_eq!(summary.mean_accuracy, 0.0);
    }
}
