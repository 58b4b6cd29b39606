use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDetails {
    // Top-line Scores (0..=100)
    pub accuracy: f64,
    pub fluency: f64,
    pub overall: f64,

    // Denominator: reference-side entries (Correct + Incorrect + Missing)
    pub total: usize,

    // Raw Counters
    pub correct: usize,
    pub incorrect: usize,
    pub missing: usize,
    pub extra: usize,

    // Fluency Breakdown
    pub max_consecutive: usize,
    pub continuity_bonus: f64,
    pub extra_penalty: f64,
}

impl ScoreDetails {
    pub fn scores(&self) -> (f64, f64, f64) {
        (self.accuracy, self.fluency, self.overall)
    }
}
