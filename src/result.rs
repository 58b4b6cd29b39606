use crate::alignment::{DiffEntry, DiffType};
use crate::error::{EchoScoreError, EsResult};
use crate::scorer::Scorer;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecordingMetadata {
    pub url: String,
    pub duration_seconds: f64,
    /// Container/codec hint such as `m4a` or `wav`.
    pub audio_type: String,
}

/// Everything the caller knows about an attempt before it is scored.
#[derive(Debug, Clone, TypedBuilder)]
pub struct AttemptInput {
    #[builder(setter(into))]
    pub material_id: String,
    #[builder(setter(into))]
    pub original_text: String,
    #[builder(setter(into))]
    pub recognized_text: String,
    #[builder(default)]
    pub recording: RecordingMetadata,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
    EnumIter, EnumString,
)]
pub enum Grade {
    S,
    A,
    B,
    C,
    D,
}

impl Grade {
    pub fn from_score(overall: f64) -> Self {
        if overall >= 90.0 {
            Grade::S
        } else if overall >= 80.0 {
            Grade::A
        } else if overall >= 70.0 {
            Grade::B
        } else if overall >= 60.0 {
            Grade::C
        } else {
            Grade::D
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordCounts {
    pub total_words: usize,
    pub correct_words: usize,
    pub incorrect_words: usize,
    pub missing_words: usize,
    pub extra_words: usize,
}

impl WordCounts {
    pub fn from_entries(entries: &[DiffEntry]) -> Self {
        let mut counts = WordCounts::default();
        for entry in entries {
            match entry.diff_type {
                DiffType::Correct => counts.correct_words += 1,
                DiffType::Incorrect => counts.incorrect_words += 1,
                DiffType::Missing => counts.missing_words += 1,
                DiffType::Extra => counts.extra_words += 1,
            }
        }
        counts.total_words = counts.correct_words + counts.incorrect_words + counts.missing_words;
        counts
    }

    /// Tokens that came out of the recognizer.
    pub fn recognized_words(&self) -> usize {
        self.correct_words + self.incorrect_words + self.extra_words
    }
}

/// Immutable record of one scored practice attempt.
///
/// Deserialized records are checked: their counters must match the stored
/// diff and every score must lie within 0..=100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredPracticeResult")]
pub struct PracticeResult {
    id: Uuid,
    created_at: DateTime<Utc>,
    material_id: String,
    original_text: String,
    recognized_text: String,
    recording: RecordingMetadata,
    diff_entries: Vec<DiffEntry>,
    #[serde(flatten)]
    counts: WordCounts,
    accuracy_score: f64,
    fluency_score: f64,
    overall_score: f64,
}

// Wire shape of a stored record, before its counters are checked
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredPracticeResult {
    id: Uuid,
    created_at: DateTime<Utc>,
    material_id: String,
    original_text: String,
    recognized_text: String,
    #[serde(default)]
    recording: RecordingMetadata,
    diff_entries: Vec<DiffEntry>,
    #[serde(flatten)]
    counts: WordCounts,
    accuracy_score: f64,
    fluency_score: f64,
    overall_score: f64,
}

impl TryFrom<StoredPracticeResult> for PracticeResult {
    type Error = EchoScoreError;

    fn try_from(stored: StoredPracticeResult) -> EsResult<Self> {
        let derived = WordCounts::from_entries(&stored.diff_entries);
        if derived != stored.counts {
            return Err(EchoScoreError::Validation(format!(
                "result {}: stored counters {:?} disagree with its diff {:?}",
                stored.id, stored.counts, derived
            )));
        }

        let scores = [
            ("accuracyScore", stored.accuracy_score),
            ("fluencyScore", stored.fluency_score),
            ("overallScore", stored.overall_score),
        ];
        for (name, value) in scores {
            if !(0.0..=100.0).contains(&value) {
                return Err(EchoScoreError::Validation(format!(
                    "result {}: {} {} is outside 0..=100",
                    stored.id, name, value
                )));
            }
        }

        Ok(Self {
            id: stored.id,
            created_at: stored.created_at,
            material_id: stored.material_id,
            original_text: stored.original_text,
            recognized_text: stored.recognized_text,
            recording: stored.recording,
            diff_entries: stored.diff_entries,
            counts: stored.counts,
            accuracy_score: stored.accuracy_score,
            fluency_score: stored.fluency_score,
            overall_score: stored.overall_score,
        })
    }
}

impl PracticeResult {
    /// Freezes an attempt: counters and scores are derived from the diff
    /// here and never recomputed.
    pub fn aggregate(input: AttemptInput, diff_entries: Vec<DiffEntry>, scorer: &Scorer) -> Self {
        let counts = WordCounts::from_entries(&diff_entries);
        let (accuracy_score, fluency_score, overall_score) = scorer.score(&diff_entries);

        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            material_id: input.material_id,
            original_text: input.original_text,
            recognized_text: input.recognized_text,
            recording: input.recording,
            diff_entries,
            counts,
            accuracy_score,
            fluency_score,
            overall_score,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn material_id(&self) -> &str {
        &self.material_id
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    pub fn recognized_text(&self) -> &str {
        &self.recognized_text
    }

    pub fn recording(&self) -> &RecordingMetadata {
        &self.recording
    }

    pub fn diff_entries(&self) -> &[DiffEntry] {
        &self.diff_entries
    }

    pub fn counts(&self) -> WordCounts {
        self.counts
    }

    pub fn total_words(&self) -> usize {
        self.counts.total_words
    }

    pub fn correct_words(&self) -> usize {
        self.counts.correct_words
    }

    pub fn incorrect_words(&self) -> usize {
        self.counts.incorrect_words
    }

    pub fn missing_words(&self) -> usize {
        self.counts.missing_words
    }

    pub fn extra_words(&self) -> usize {
        self.counts.extra_words
    }

    pub fn accuracy_score(&self) -> f64 {
        self.accuracy_score
    }

    pub fn fluency_score(&self) -> f64 {
        self.fluency_score
    }

    pub fn overall_score(&self) -> f64 {
        self.overall_score
    }

    /// Percentage of reference words read correctly.
    pub fn accuracy_rate(&self) -> f64 {
        if self.counts.total_words == 0 {
            return 0.0;
        }
        self.counts.correct_words as f64 / self.counts.total_words as f64 * 100.0
    }

    /// Fraction (not percentage) of reference words missed or misread.
    pub fn word_error_rate(&self) -> f64 {
        if self.counts.total_words == 0 {
            return 0.0;
        }
        (self.counts.incorrect_words + self.counts.missing_words) as f64
            / self.counts.total_words as f64
    }

    pub fn words_per_minute(&self) -> f64 {
        let duration = self.recording.duration_seconds;
        if duration.is_nan() || duration <= 0.0 {
            return 0.0;
        }
        self.counts.recognized_words() as f64 / (duration / 60.0)
    }

    pub fn grade(&self) -> Grade {
        Grade::from_score(self.overall_score)
    }
}
