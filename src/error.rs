//! Error types for adt1-extract

use thiserror::Error;

/// Result type alias for adt1-extract
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for adt1-extract
#[derive(Error, Debug)]
pub enum Error {
    /// PDF file not found
    #[error("PDF not found: {path}")]
    PdfNotFound { path: String },

    /// Invalid PDF file
    #[error("Invalid PDF file: {reason}")]
    InvalidPdf { reason: String },

    /// PDFium error
    #[error("PDFium error: {reason}")]
    Pdfium { reason: String },

    /// Summarization credential missing from the environment
    #[error("{var} environment variable is not set")]
    MissingApiKey { var: String },

    /// Summarization service returned an unusable response
    #[error("Summarization failed: {reason}")]
    Summarization { reason: String },

    /// HTTP request error
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
