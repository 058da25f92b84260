use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("GEMINI_API_KEY environment variable is not set")]
    MissingApiKey,

    #[error("Analysis request failed: {0}")]
    AnalysisFailed(String),

    #[error("The model returned an invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Report export failed: {0}")]
    ExportFailed(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[cfg(feature = "gemini")]
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
