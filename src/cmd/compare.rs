use crate::reports;
use clap::Args;
use echoscore::config::Config;
use echoscore::error::{EchoScoreError, EsResult};
use echoscore::result::{AttemptInput, Grade, PracticeResult, RecordingMetadata};
use echoscore::ComparisonEngine;
use serde::Serialize;
use std::fs;

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    #[command(flatten)]
    pub config: Config,

    /// Reference transcript.
    #[arg(short, long, conflicts_with = "original_file")]
    pub original: Option<String>,
    #[arg(long)]
    pub original_file: Option<String>,

    /// Speech-recognition output for the attempt.
    #[arg(short, long, conflicts_with = "recognized_file")]
    pub recognized: Option<String>,
    #[arg(long)]
    pub recognized_file: Option<String>,

    #[arg(long, default_value = "adhoc")]
    pub material_id: String,

    /// Recording length, used for words per minute.
    #[arg(long, default_value_t = 0.0)]
    pub duration: f64,

    #[arg(long, default_value = "")]
    pub recording_url: String,

    /// Print the result as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CompareReport<'a> {
    result: &'a PracticeResult,
    edit_distance: usize,
    grade: Grade,
    accuracy_rate: f64,
    word_error_rate: f64,
    words_per_minute: f64,
}

pub fn run(args: CompareArgs, engine: &ComparisonEngine) -> EsResult<()> {
    let original = read_text(&args.original, &args.original_file, "original")?;
    let recognized = read_text(&args.recognized, &args.recognized_file, "recognized")?;

    let comparison = engine.compare(&original, &recognized);
    let input = AttemptInput::builder()
        .material_id(args.material_id)
        .original_text(original)
        .recognized_text(recognized)
        .recording(RecordingMetadata {
            url: args.recording_url,
            duration_seconds: args.duration,
            audio_type: String::new(),
        })
        .build();
    let result = PracticeResult::aggregate(input, comparison.diff_entries, engine.scorer());

    if args.json {
        let report = CompareReport {
            result: &result,
            edit_distance: comparison.edit_distance,
            grade: result.grade(),
            accuracy_rate: result.accuracy_rate(),
            word_error_rate: result.word_error_rate(),
            words_per_minute: result.words_per_minute(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        reports::print_diff(result.diff_entries());
        reports::print_score_report(&result, comparison.edit_distance);
    }
    Ok(())
}

fn read_text(inline: &Option<String>, path: &Option<String>, name: &str) -> EsResult<String> {
    match (inline, path) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(p)) => Ok(fs::read_to_string(p)?),
        (None, None) => Err(EchoScoreError::Validation(format!(
            "provide --{name} or --{name}-file"
        ))),
    }
}
