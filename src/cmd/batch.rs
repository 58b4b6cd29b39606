use crate::reports;
use clap::Args;
use echoscore::config::Config;
use echoscore::error::{EchoScoreError, EsResult};
use echoscore::result::{AttemptInput, PracticeResult, RecordingMetadata};
use echoscore::stats::HistorySummary;
use echoscore::ComparisonEngine;
use rayon::prelude::*;
use serde::Deserialize;
use std::fs::File;
use std::io::BufWriter;
use std::time::Instant;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    #[command(flatten)]
    pub config: Config,

    /// CSV with columns material_id,original,recognized[,duration_seconds,recording_url].
    #[arg(short, long)]
    pub input: String,

    /// Write every scored attempt to this JSON file.
    #[arg(long)]
    pub output: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BatchRow {
    material_id: String,
    original: String,
    recognized: String,
    // Absent column and blank cell both mean unknown
    #[serde(default)]
    duration_seconds: Option<f64>,
    #[serde(default)]
    recording_url: String,
}

pub fn run(args: BatchArgs, engine: &ComparisonEngine) -> EsResult<()> {
    let rows = load_rows(&args.input)?;
    info!("Scoring {} attempts from {}", rows.len(), args.input);

    let start = Instant::now();
    // Attempts are independent; the engine is shared read-only
    let results: Vec<PracticeResult> = rows
        .into_par_iter()
        .map(|row| {
            let input = AttemptInput::builder()
                .material_id(row.material_id)
                .original_text(row.original)
                .recognized_text(row.recognized)
                .recording(RecordingMetadata {
                    url: row.recording_url,
                    duration_seconds: row.duration_seconds.unwrap_or(0.0),
                    audio_type: String::new(),
                })
                .build();
            engine.evaluate(input)
        })
        .collect();
    info!("Scored {} attempts in {:?}", results.len(), start.elapsed());

    reports::print_batch_report(&results);
    reports::print_history_summary(&HistorySummary::from_results(&results));

    if let Some(path) = &args.output {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, &results)?;
        info!("Results written to {}", path);
    }
    Ok(())
}

fn load_rows(path: &str) -> EsResult<Vec<BatchRow>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
    let mut rows = Vec::new();
    for (idx, record) in reader.deserialize::<BatchRow>().enumerate() {
        let row = record?;
        // +2: one for the header, one for 1-based lines
        let line = idx + 2;
        if row.material_id.is_empty() {
            return Err(EchoScoreError::Validation(format!(
                "line {}: material_id is empty",
                line
            )));
        }
        if let Some(d) = row.duration_seconds.filter(|d| !d.is_finite() || *d < 0.0) {
            return Err(EchoScoreError::Validation(format!(
                "line {}: duration_seconds must be a non-negative number, got {}",
                line, d
            )));
        }
        rows.push(row);
    }
    Ok(rows)
}
