use thiserror::Error;

#[derive(Error, Debug)]
pub enum EchoScoreError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Missing Reference Transcript: {0}")]
    MissingReference(String),

    #[error("Speech Recognition Failed: {0}")]
    Recognition(String),

    #[error("Recording Unavailable: {0}")]
    RecordingUnavailable(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type EsResult<T> = Result<T, EchoScoreError>;
