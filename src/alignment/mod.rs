pub mod lcs;

use self::lcs::{backtrack, LcsTable};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Classification of one token in a word-level diff.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DiffType {
    /// Present in both transcripts at this point of the scan.
    Correct,
    /// Reserved for substitutions. The LCS alignment never produces it; it
    /// only arrives through deserialized records.
    Incorrect,
    /// In the reference but not spoken.
    Missing,
    /// Spoken but not in the reference.
    Extra,
}

impl DiffType {
    /// True for entries that consume a token of the reference transcript.
    pub fn is_original_side(self) -> bool {
        match self {
            DiffType::Correct | DiffType::Incorrect | DiffType::Missing => true,
            DiffType::Extra => false,
        }
    }

    /// True for entries that consume a token of the recognized transcript.
    pub fn is_recognized_side(self) -> bool {
        match self {
            DiffType::Correct | DiffType::Incorrect | DiffType::Extra => true,
            DiffType::Missing => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffEntry {
    pub word: String,
    #[serde(rename = "type")]
    pub diff_type: DiffType,
    /// Index in the diff output, not in either source sequence.
    pub position: usize,
}

/// LCS word diff of `original` against `recognized`.
///
/// Every token of both inputs appears exactly once, in an order consistent
/// with a single left-to-right scan of both sequences.
pub fn align<S: AsRef<str>>(original: &[S], recognized: &[S]) -> Vec<DiffEntry> {
    let table = LcsTable::build(original, recognized);
    backtrack(&table, original, recognized)
}

/// Reference tokens recovered from a diff (everything except Extra).
pub fn original_words(entries: &[DiffEntry]) -> Vec<&str> {
    entries
        .iter()
        .filter(|e| e.diff_type.is_original_side())
        .map(|e| e.word.as_str())
        .collect()
}

/// Recognized tokens recovered from a diff (everything except Missing).
pub fn recognized_words(entries: &[DiffEntry]) -> Vec<&str> {
    entries
        .iter()
        .filter(|e| e.diff_type.is_recognized_side())
        .map(|e| e.word.as_str())
        .collect()
}
