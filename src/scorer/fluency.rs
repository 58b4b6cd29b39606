use crate::alignment::{DiffEntry, DiffType};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunAnalysis {
    pub max_consecutive: usize, // Longest unbroken run of Correct entries
    pub extra_count: usize,
}

/// Single pass over the diff in output order. Any non-Correct entry,
/// including Extra, ends the current run.
pub fn analyze_runs(entries: &[DiffEntry]) -> RunAnalysis {
    let mut res = RunAnalysis::default();
    let mut current = 0;

    for entry in entries {
        match entry.diff_type {
            DiffType::Correct => {
                current += 1;
                res.max_consecutive = res.max_consecutive.max(current);
            }
            DiffType::Extra => {
                res.extra_count += 1;
                current = 0;
            }
            DiffType::Incorrect | DiffType::Missing => current = 0,
        }
    }

    res
}
