#![allow(dead_code)]

use echoscore::alignment::{DiffEntry, DiffType};
use echoscore::config::Config;
use echoscore::ComparisonEngine;

pub fn default_engine() -> ComparisonEngine {
    ComparisonEngine::new(Config::default()).expect("default config is valid")
}

pub fn words(s: &str) -> Vec<String> {
    s.split_whitespace().map(str::to_string).collect()
}

/// `(word, type)` pairs, ignoring positions.
pub fn summarize(entries: &[DiffEntry]) -> Vec<(String, DiffType)> {
    entries
        .iter()
        .map(|e| (e.word.clone(), e.diff_type))
        .collect()
}

pub fn pairs(spec: &[(&str, DiffType)]) -> Vec<(String, DiffType)> {
    spec.iter().map(|(w, t)| (w.to_string(), *t)).collect()
}
