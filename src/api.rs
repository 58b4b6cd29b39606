//! Service layer between the app's collaborators and the pure engine.
//!
//! Upstream failures are classified here, before the engine runs, so the
//! caller can tell a missing transcript from a broken recognizer.

use crate::comparison::ComparisonEngine;
use crate::error::{EchoScoreError, EsResult};
use crate::result::{AttemptInput, PracticeResult, RecordingMetadata};
use tracing::{info, warn};
use typed_builder::TypedBuilder;

/// Domain interface for speech-to-text.
///
/// Implementations run recognition on a stored recording and return plain
/// text. Retrying belongs in the implementation.
pub trait SpeechRecognizer: Send + Sync {
    fn transcribe(
        &self,
        recording: &RecordingMetadata,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;
}

#[derive(Debug, Clone, TypedBuilder)]
pub struct EvaluationRequest {
    #[builder(setter(into))]
    pub material_id: String,
    #[builder(default, setter(strip_option, into))]
    pub original_text: Option<String>,
    #[builder(default)]
    pub recording: RecordingMetadata,
}

/// Runs the recognizer on the request's recording, then scores the attempt.
pub fn evaluate_recording(
    engine: &ComparisonEngine,
    recognizer: &dyn SpeechRecognizer,
    request: EvaluationRequest,
) -> EsResult<PracticeResult> {
    let reference = require_reference(&request)?;
    check_recording(&request.recording)?;

    let recognized = recognizer.transcribe(&request.recording).map_err(|e| {
        warn!(material = %request.material_id, "recognition failed: {}", e);
        EchoScoreError::Recognition(e.to_string())
    })?;

    Ok(score(engine, request.material_id, reference, recognized, request.recording))
}

/// Scores an attempt whose transcript the caller already holds.
pub fn evaluate_text(
    engine: &ComparisonEngine,
    request: EvaluationRequest,
    recognized_text: &str,
) -> EsResult<PracticeResult> {
    let reference = require_reference(&request)?;
    Ok(score(
        engine,
        request.material_id,
        reference,
        recognized_text.to_string(),
        request.recording,
    ))
}

fn score(
    engine: &ComparisonEngine,
    material_id: String,
    original_text: String,
    recognized_text: String,
    recording: RecordingMetadata,
) -> PracticeResult {
    let input = AttemptInput::builder()
        .material_id(material_id)
        .original_text(original_text)
        .recognized_text(recognized_text)
        .recording(recording)
        .build();
    let result = engine.evaluate(input);
    info!(
        material = %result.material_id(),
        overall = result.overall_score(),
        grade = %result.grade(),
        "practice attempt scored"
    );
    result
}

fn require_reference(request: &EvaluationRequest) -> EsResult<String> {
    match &request.original_text {
        Some(text) if !text.trim().is_empty() => Ok(text.clone()),
        _ => Err(EchoScoreError::MissingReference(format!(
            "material '{}' has no reference transcript",
            request.material_id
        ))),
    }
}

fn check_recording(recording: &RecordingMetadata) -> EsResult<()> {
    if recording.url.trim().is_empty() {
        return Err(EchoScoreError::RecordingUnavailable(
            "recording has no location".to_string(),
        ));
    }
    if !recording.duration_seconds.is_finite() || recording.duration_seconds < 0.0 {
        return Err(EchoScoreError::RecordingUnavailable(format!(
            "recording '{}' reports an invalid duration {}",
            recording.url, recording.duration_seconds
        )));
    }
    Ok(())
}
