//! Token-level Levenshtein distance.
//!
//! Tokens are compared case-insensitively here even when the tokenizer is
//! case-sensitive, so this metric can disagree with the alignment on casing.

pub fn distance<S: AsRef<str>>(a: &[S], b: &[S]) -> usize {
    let m = a.len();
    let n = b.len();
    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let a_lower: Vec<String> = a.iter().map(|t| t.as_ref().to_lowercase()).collect();
    let b_lower: Vec<String> = b.iter().map(|t| t.as_ref().to_lowercase()).collect();

    let mut table = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in table[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = if a_lower[i - 1] == b_lower[j - 1] { 0 } else { 1 };
            table[i][j] = (table[i - 1][j] + 1)
                .min(table[i][j - 1] + 1)
                .min(table[i - 1][j - 1] + cost);
        }
    }

    table[m][n]
}

/// Edit distance normalised by reference length.
pub fn word_error_rate<S: AsRef<str>>(reference: &[S], hypothesis: &[S]) -> f64 {
    if reference.is_empty() {
        return if hypothesis.is_empty() { 0.0 } else { 1.0 };
    }
    distance(reference, hypothesis) as f64 / reference.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(s: &str) -> Vec<&str> {
        s.split_whitespace().collect()
    }

    #[test]
    fn test_identical_is_zero() {
        assert_eq!(distance(&words("a b c"), &words("a b c")), 0);
    }

    #[test]
    fn test_empty_sides() {
        let empty: Vec<&str> = vec![];
        assert_eq!(distance(&empty, &words("a b")), 2);
        assert_eq!(distance(&words("a b c"), &empty), 3);
        assert_eq!(distance(&empty, &empty), 0);
    }

    #[test]
    fn test_substitution_insertion_deletion() {
        assert_eq!(distance(&words("the cat sat"), &words("the bat sat")), 1);
        assert_eq!(distance(&words("the cat"), &words("the fat cat")), 1);
        assert_eq!(distance(&words("kitten sitting on"), &words("sitting")), 2);
    }

    #[test]
    fn test_case_insensitive_regardless_of_tokens() {
        assert_eq!(distance(&words("Hello World"), &words("hello world")), 0);
    }

    #[test]
    fn test_word_error_rate() {
        assert_eq!(word_error_rate(&words("hello world"), &words("hello earth")), 0.5);
        let empty: Vec<&str> = vec![];
        assert_eq!(word_error_rate(&empty, &empty), 0.0);
        assert_eq!(word_error_rate(&empty, &words("noise")), 1.0);
    }
}
