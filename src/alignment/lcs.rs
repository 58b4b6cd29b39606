use super::{DiffEntry, DiffType};

/// Flattened `(m+1) x (n+1)` LCS length table.
pub struct LcsTable {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
}

impl LcsTable {
    pub fn build<S: AsRef<str>>(original: &[S], recognized: &[S]) -> Self {
        let rows = original.len() + 1;
        let cols = recognized.len() + 1;
        let mut cells = vec![0u32; rows * cols];

        for i in 1..rows {
            for j in 1..cols {
                cells[i * cols + j] = if original[i - 1].as_ref() == recognized[j - 1].as_ref() {
                    cells[(i - 1) * cols + (j - 1)] + 1
                } else {
                    cells[(i - 1) * cols + j].max(cells[i * cols + (j - 1)])
                };
            }
        }

        Self { rows, cols, cells }
    }

    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.cols + j]
    }

    /// Length of the longest common subsequence of the full inputs.
    pub fn lcs_len(&self) -> usize {
        self.get(self.rows - 1, self.cols - 1) as usize
    }
}

/// Walks the table from the bottom-right corner back to the origin.
///
/// Ties go to the recognized side: an ambiguous mismatch is reported as
/// Extra before the original token is reported as Missing.
pub fn backtrack<S: AsRef<str>>(
    table: &LcsTable,
    original: &[S],
    recognized: &[S],
) -> Vec<DiffEntry> {
    let mut i = original.len();
    let mut j = recognized.len();
    let mut reversed: Vec<(String, DiffType)> = Vec::with_capacity(i + j);

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && original[i - 1].as_ref() == recognized[j - 1].as_ref() {
            reversed.push((original[i - 1].as_ref().to_string(), DiffType::Correct));
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
            reversed.push((recognized[j - 1].as_ref().to_string(), DiffType::Extra));
            j -= 1;
        } else {
            reversed.push((original[i - 1].as_ref().to_string(), DiffType::Missing));
            i -= 1;
        }
    }

    reversed
        .into_iter()
        .rev()
        .enumerate()
        .map(|(position, (word, diff_type))| DiffEntry {
            word,
            diff_type,
            position,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lengths() {
        let a = ["a", "b", "c", "d"];
        let b = ["b", "x", "d"];
        let table = LcsTable::build(&a, &b);
        assert_eq!(table.lcs_len(), 2);
        assert_eq!(table.get(0, 3), 0);
        assert_eq!(table.get(2, 1), 1);
    }

    #[test]
    fn test_empty_table() {
        let empty: [&str; 0] = [];
        let table = LcsTable::build(&empty, &empty);
        assert_eq!(table.lcs_len(), 0);
        assert!(backtrack(&table, &empty, &empty).is_empty());
    }
}
