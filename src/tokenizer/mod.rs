pub mod contractions;

pub use self::contractions::ContractionTable;
use crate::config::NormalizationOptions;
use crate::error::EsResult;
use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Turns raw transcript text into comparable word tokens.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    options: NormalizationOptions,
    contractions: ContractionTable,
}

impl Tokenizer {
    pub fn new(options: NormalizationOptions) -> EsResult<Self> {
        options.validate()?;
        let contractions = ContractionTable::with_extra(&options.extra_contractions);
        Ok(Self {
            options,
            contractions,
        })
    }

    pub fn options(&self) -> &NormalizationOptions {
        &self.options
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        run_pipeline(text, &self.options, &self.contractions)
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            options: NormalizationOptions::default(),
            contractions: ContractionTable::builtin().clone(),
        }
    }
}

/// Tokenizes with the built-in contraction dictionary.
///
/// `extra_contractions` in `options` are ignored here; build a [`Tokenizer`]
/// to use them.
pub fn tokenize(text: &str, options: &NormalizationOptions) -> Vec<String> {
    run_pipeline(text, options, ContractionTable::builtin())
}

fn run_pipeline(
    text: &str,
    options: &NormalizationOptions,
    contractions: &ContractionTable,
) -> Vec<String> {
    let mut working = if options.trim_whitespace {
        collapse_whitespace(text)
    } else {
        text.to_string()
    };

    // Must happen before splitting: expansions add word boundaries
    if options.expand_contractions {
        working = contractions.expand(&working);
    }

    working
        .split_whitespace()
        .map(|raw| {
            let token = if options.ignore_punctuation {
                strip_edge_symbols(raw)
            } else {
                Cow::Borrowed(raw)
            };
            if options.case_sensitive {
                token.into_owned()
            } else {
                token.to_lowercase()
            }
        })
        .filter(|token| !token.is_empty())
        .collect()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// Unicode punctuation (P*) and symbols (S*) only; combining marks stay
fn strip_edge_symbols(token: &str) -> Cow<'_, str> {
    static EDGES: OnceLock<Regex> = OnceLock::new();
    EDGES
        .get_or_init(|| {
            Regex::new(r"^[\p{P}\p{S}]+|[\p{P}\p{S}]+$").expect("edge pattern must compile")
        })
        .replace_all(token, "")
}
