use crate::alignment::{align, DiffEntry};
use crate::config::Config;
use crate::distance::distance;
use crate::error::EsResult;
use crate::result::{AttemptInput, PracticeResult};
use crate::scorer::Scorer;
use crate::tokenizer::Tokenizer;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub original_tokens: Vec<String>,
    pub recognized_tokens: Vec<String>,
    pub diff_entries: Vec<DiffEntry>,
    pub edit_distance: usize,
    pub accuracy_score: f64,
    pub fluency_score: f64,
    pub overall_score: f64,
}

/// Tokenizer, aligner and scorer wired together.
///
/// Holds no mutable state, so one engine can serve many threads.
#[derive(Debug, Clone, Default)]
pub struct ComparisonEngine {
    tokenizer: Tokenizer,
    scorer: Scorer,
}

impl ComparisonEngine {
    /// Rejects malformed configuration; content is never rejected later.
    pub fn new(config: Config) -> EsResult<Self> {
        config.validate()?;
        Ok(Self {
            tokenizer: Tokenizer::new(config.normalization)?,
            scorer: Scorer::new(config.weights)?,
        })
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    pub fn compare(&self, original: &str, recognized: &str) -> ComparisonResult {
        let original_tokens = self.tokenizer.tokenize(original);
        let recognized_tokens = self.tokenizer.tokenize(recognized);

        let edit_distance = distance(&original_tokens, &recognized_tokens);
        let diff_entries = align(&original_tokens, &recognized_tokens);
        let (accuracy_score, fluency_score, overall_score) = self.scorer.score(&diff_entries);

        debug!(
            original = original_tokens.len(),
            recognized = recognized_tokens.len(),
            edit_distance,
            overall = overall_score,
            "compared transcripts"
        );

        ComparisonResult {
            original_tokens,
            recognized_tokens,
            diff_entries,
            edit_distance,
            accuracy_score,
            fluency_score,
            overall_score,
        }
    }

    /// Compares and freezes the attempt into a `PracticeResult`.
    pub fn evaluate(&self, input: AttemptInput) -> PracticeResult {
        let comparison = self.compare(&input.original_text, &input.recognized_text);
        PracticeResult::aggregate(input, comparison.diff_entries, &self.scorer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::DiffType;

    #[test]
    fn test_compare_fills_every_field() {
        let engine = ComparisonEngine::default();
        let res = engine.compare("The cat sat.", "the bat sat");
        assert_eq!(res.original_tokens, vec!["the", "cat", "sat"]);
        assert_eq!(res.recognized_tokens, vec!["the", "bat", "sat"]);
        assert_eq!(res.edit_distance, 1);
        assert_eq!(res.diff_entries.len(), 4);
        assert!(res.overall_score > 0.0 && res.overall_score < 100.0);
    }

    #[test]
    fn test_case_sensitive_alignment_but_insensitive_distance() {
        let mut config = Config::default();
        config.normalization.case_sensitive = true;
        let engine = ComparisonEngine::new(config).unwrap();
        let res = engine.compare("Hello world", "hello world");
        assert_eq!(res.edit_distance, 0);
        assert_eq!(res.diff_entries[0].diff_type, DiffType::Missing);
        assert_eq!(res.diff_entries[1].diff_type, DiffType::Extra);
    }

    #[test]
    fn test_bad_config_rejected_at_construction() {
        let mut config = Config::default();
        config.weights.fluency_weight = 0.9;
        assert!(ComparisonEngine::new(config).is_err());
    }
}
