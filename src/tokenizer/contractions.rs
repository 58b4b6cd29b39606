use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::sync::OnceLock;

const BUILTIN_CONTRACTIONS: &[(&str, &str)] = &[
    ("don't", "do not"),
    ("doesn't", "does not"),
    ("didn't", "did not"),
    ("can't", "cannot"),
    ("couldn't", "could not"),
    ("won't", "will not"),
    ("wouldn't", "would not"),
    ("shouldn't", "should not"),
    ("mustn't", "must not"),
    ("isn't", "is not"),
    ("aren't", "are not"),
    ("wasn't", "was not"),
    ("weren't", "were not"),
    ("haven't", "have not"),
    ("hasn't", "has not"),
    ("hadn't", "had not"),
    ("i'm", "i am"),
    ("you're", "you are"),
    ("we're", "we are"),
    ("they're", "they are"),
    ("he's", "he is"),
    ("she's", "she is"),
    ("it's", "it is"),
    ("that's", "that is"),
    ("there's", "there is"),
    ("what's", "what is"),
    ("let's", "let us"),
    ("i've", "i have"),
    ("you've", "you have"),
    ("we've", "we have"),
    ("they've", "they have"),
    ("i'll", "i will"),
    ("you'll", "you will"),
    ("he'll", "he will"),
    ("she'll", "she will"),
    ("we'll", "we will"),
    ("they'll", "they will"),
    ("i'd", "i would"),
    ("you'd", "you would"),
    ("he'd", "he would"),
    ("she'd", "she would"),
    ("we'd", "we would"),
    ("they'd", "they would"),
];

/// Contraction -> expansion dictionary.
///
/// Matching works on whole runs of word characters and apostrophes, so keys
/// may begin or end with an apostrophe (`'cause`, `ol'`).
#[derive(Debug, Clone)]
pub struct ContractionTable {
    entries: BTreeMap<String, String>,
}

impl ContractionTable {
    /// The built-in English dictionary, built once per process.
    pub fn builtin() -> &'static ContractionTable {
        static TABLE: OnceLock<ContractionTable> = OnceLock::new();
        TABLE.get_or_init(|| Self {
            entries: builtin_entries(),
        })
    }

    /// Built-in dictionary extended (or overridden) by user entries.
    ///
    /// Keys are expected to have passed `NormalizationOptions::validate`.
    pub fn with_extra(extra: &BTreeMap<String, String>) -> Self {
        let mut entries = builtin_entries();
        for (contraction, expansion) in extra {
            let key = normalize_apostrophes(contraction.trim()).to_lowercase();
            entries.insert(key, expansion.trim().to_string());
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, contraction: &str) -> Option<&str> {
        self.entries
            .get(&contraction.to_lowercase())
            .map(String::as_str)
    }

    /// Replaces every whole-word contraction in `text`, case-insensitively.
    ///
    /// A capitalised contraction keeps its capital on the first expanded
    /// word, so `Don't` becomes `Do not`.
    pub fn expand(&self, text: &str) -> String {
        let text = normalize_apostrophes(text);
        word_runs()
            .replace_all(&text, |caps: &Captures| {
                let run = &caps[0];
                match self.match_run(run) {
                    Some((lead, core, expansion, trail)) => {
                        let capital = core.chars().find(|c| c.is_alphabetic());
                        if capital.is_some_and(char::is_uppercase) {
                            format!("{}{}{}", lead, capitalize(expansion), trail)
                        } else {
                            format!("{}{}{}", lead, expansion, trail)
                        }
                    }
                    None => run.to_string(),
                }
            })
            .into_owned()
    }

    /// Looks up a run as-is, then with quoting apostrophes peeled off either
    /// edge. Returns `(lead, core, expansion, trail)`.
    fn match_run<'a>(&'a self, run: &'a str) -> Option<(&'a str, &'a str, &'a str, &'a str)> {
        let lead = run.len() - run.trim_start_matches('\'').len();
        let trail = run.len() - run.trim_end_matches('\'').len();

        for (start, cut) in [(0, 0), (lead, 0), (0, trail), (lead, trail)] {
            let end = run.len() - cut;
            if start >= end {
                continue;
            }
            let core = &run[start..end];
            if let Some(expansion) = self.get(core) {
                return Some((&run[..start], core, expansion, &run[end..]));
            }
        }
        None
    }
}

/// True when `key` can be matched as one run: word characters and
/// apostrophes only, with at least one word character.
pub fn is_matchable_key(key: &str) -> bool {
    let key = normalize_apostrophes(key);
    let whole_run = word_runs()
        .find(&key)
        .is_some_and(|m| m.start() == 0 && m.end() == key.len());
    whole_run && key.chars().any(|c| c != '\'')
}

// Runs of word characters and apostrophes; everything else separates words
fn word_runs() -> &'static Regex {
    static RUNS: OnceLock<Regex> = OnceLock::new();
    RUNS.get_or_init(|| Regex::new(r"[\w']+").expect("word-run pattern must compile"))
}

fn builtin_entries() -> BTreeMap<String, String> {
    BUILTIN_CONTRACTIONS
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn normalize_apostrophes(text: &str) -> String {
    text.replace(['\u{2019}', '\u{2018}'], "'")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expands_whole_words_only() {
        let table = ContractionTable::builtin();
        assert_eq!(table.expand("I don't know"), "I do not know");
        // "it's" embedded in another word must not match
        assert_eq!(table.expand("bits's"), "bits's");
    }

    #[test]
    fn test_expansion_is_case_insensitive_and_keeps_capital() {
        let table = ContractionTable::builtin();
        assert_eq!(table.expand("DON'T stop"), "Do not stop");
        assert_eq!(table.expand("Don't stop"), "Do not stop");
    }

    #[test]
    fn test_typographic_apostrophe() {
        let table = ContractionTable::builtin();
        assert_eq!(table.expand("we can\u{2019}t"), "we cannot");
    }

    #[test]
    fn test_adjacent_contractions_and_punctuation() {
        let table = ContractionTable::builtin();
        assert_eq!(table.expand("isn't, wasn't."), "is not, was not.");
    }

    #[test]
    fn test_extra_entries_extend_builtin() {
        let mut extra = BTreeMap::new();
        extra.insert("gonna".to_string(), "going to".to_string());
        let table = ContractionTable::with_extra(&extra);
        assert_eq!(table.len(), BUILTIN_CONTRACTIONS.len() + 1);
        assert_eq!(table.expand("I'm gonna go"), "I am going to go");
    }

    #[test]
    fn test_extra_entries_with_edge_apostrophes() {
        let mut extra = BTreeMap::new();
        extra.insert("'cause".to_string(), "because".to_string());
        extra.insert("ol'".to_string(), "old".to_string());
        let table = ContractionTable::with_extra(&extra);
        assert_eq!(table.expand("'cause it's late"), "because it is late");
        assert_eq!(table.expand("'Cause I said so"), "Because I said so");
        assert_eq!(table.expand("good ol' days"), "good old days");
        // Still whole-word only
        assert_eq!(table.expand("because"), "because");
    }

    #[test]
    fn test_matchable_keys() {
        assert!(is_matchable_key("gonna"));
        assert!(is_matchable_key("'cause"));
        assert!(is_matchable_key("y\u{2019}all"));
        assert!(!is_matchable_key("gonna go"));
        assert!(!is_matchable_key("o-k"));
        assert!(!is_matchable_key("''"));
        assert!(!is_matchable_key(""));
    }

    #[test]
    fn test_repeated_and_quoted_contractions() {
        let table = ContractionTable::builtin();
        assert_eq!(table.expand("don't don't"), "do not do not");
        assert_eq!(table.expand("she said 'don't'"), "she said 'do not'");
    }
}
