use crate::error::{EchoScoreError, EsResult};
use crate::tokenizer::contractions::is_matchable_key;
use clap::{parser::ValueSource, ArgAction, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const DEFAULT_ACCURACY_WEIGHT: f64 = 0.7;
pub const DEFAULT_FLUENCY_WEIGHT: f64 = 0.3;
pub const DEFAULT_CONTINUITY_BONUS: f64 = 20.0;
pub const DEFAULT_EXTRA_WORD_PENALTY: f64 = 5.0;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    #[command(flatten)]
    pub normalization: NormalizationOptions,
    #[command(flatten)]
    pub weights: ScoringWeights,
}

/// Rules applied by the tokenizer before two transcripts are compared.
#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct NormalizationOptions {
    #[arg(long, default_value_t = false, action = ArgAction::Set)]
    pub case_sensitive: bool,
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub ignore_punctuation: bool,
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub trim_whitespace: bool,
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub expand_contractions: bool,

    // Only settable from a config file
    #[arg(skip)]
    pub extra_contractions: BTreeMap<String, String>,
}

impl Default for NormalizationOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            ignore_punctuation: true,
            trim_whitespace: true,
            expand_contractions: true,
            extra_contractions: BTreeMap::new(),
        }
    }
}

/// Tunable constants of the scoring formula.
#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoringWeights {
    /// Share of the overall score taken from accuracy.
    #[arg(long, default_value_t = DEFAULT_ACCURACY_WEIGHT)]
    pub accuracy_weight: f64,
    /// Share of the overall score taken from fluency.
    #[arg(long, default_value_t = DEFAULT_FLUENCY_WEIGHT)]
    pub fluency_weight: f64,
    /// Points awarded when the whole reference is read in one unbroken run.
    #[arg(long, default_value_t = DEFAULT_CONTINUITY_BONUS)]
    pub continuity_bonus: f64,
    /// Points deducted from fluency per extra word.
    #[arg(long, default_value_t = DEFAULT_EXTRA_WORD_PENALTY)]
    pub extra_word_penalty: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            accuracy_weight: DEFAULT_ACCURACY_WEIGHT,
            fluency_weight: DEFAULT_FLUENCY_WEIGHT,
            continuity_bonus: DEFAULT_CONTINUITY_BONUS,
            extra_word_penalty: DEFAULT_EXTRA_WORD_PENALTY,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> EsResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Overrides file values with flags the user actually typed.
    pub fn merge_from_cli(&mut self, cli_config: &Config, matches: &ArgMatches) {
        self.normalization
            .merge_from_cli(&cli_config.normalization, matches);
        self.weights.merge_from_cli(&cli_config.weights, matches);
    }

    pub fn validate(&self) -> EsResult<()> {
        self.normalization.validate()?;
        self.weights.validate()
    }
}

impl NormalizationOptions {
    pub fn merge_from_cli(&mut self, cli_opts: &NormalizationOptions, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_opts.$field;
                }
            };
        }

        update_if_present!(case_sensitive, "case_sensitive");
        update_if_present!(ignore_punctuation, "ignore_punctuation");
        update_if_present!(trim_whitespace, "trim_whitespace");
        update_if_present!(expand_contractions, "expand_contractions");
    }

    pub fn validate(&self) -> EsResult<()> {
        for (contraction, expansion) in &self.extra_contractions {
            if contraction.trim().is_empty() {
                return Err(EchoScoreError::Config(
                    "contraction keys must not be empty".to_string(),
                ));
            }
            if contraction.chars().any(char::is_whitespace) {
                return Err(EchoScoreError::Config(format!(
                    "contraction '{}' must be a single word",
                    contraction
                )));
            }
            if !is_matchable_key(contraction) {
                return Err(EchoScoreError::Config(format!(
                    "contraction '{}' may contain only letters, digits and apostrophes",
                    contraction
                )));
            }
            if expansion.trim().is_empty() {
                return Err(EchoScoreError::Config(format!(
                    "contraction '{}' has an empty expansion",
                    contraction
                )));
            }
        }
        Ok(())
    }
}

impl ScoringWeights {
    pub fn merge_from_cli(&mut self, cli_weights: &ScoringWeights, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_weights.$field;
                }
            };
        }

        update_if_present!(accuracy_weight, "accuracy_weight");
        update_if_present!(fluency_weight, "fluency_weight");
        update_if_present!(continuity_bonus, "continuity_bonus");
        update_if_present!(extra_word_penalty, "extra_word_penalty");
    }

    pub fn validate(&self) -> EsResult<()> {
        let named = [
            ("accuracy_weight", self.accuracy_weight),
            ("fluency_weight", self.fluency_weight),
            ("continuity_bonus", self.continuity_bonus),
            ("extra_word_penalty", self.extra_word_penalty),
        ];
        for (name, value) in named {
            if !value.is_finite() || value < 0.0 {
                return Err(EchoScoreError::Config(format!(
                    "{} must be a finite non-negative number, got {}",
                    name, value
                )));
            }
        }

        let sum = self.accuracy_weight + self.fluency_weight;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(EchoScoreError::Config(format!(
                "accuracy_weight + fluency_weight must equal 1.0, got {:.4}",
                sum
            )));
        }
        Ok(())
    }
}
