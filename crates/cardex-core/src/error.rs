use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CardexError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("Unable to extract content from page #{page}: {reason}")]
    PageExtraction { page: usize, reason: String },

    #[error("Invalid path, file not found in that location: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Unable to generate output file {}: {reason}", path.display())]
    OutputWrite { path: PathBuf, reason: String },

    #[error("Unrecognized output type '{0}'. Please select one of the following: csv, txt, json.")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
