//! Error types for survey analysis
//!
//! Only input problems are errors. Missing cells and unusable adjective
//! candidates are absorbed by the extractors and never reach this type.

use thiserror::Error;

/// Result type alias using [`SurveyError`]
pub type Result<T> = std::result::Result<T, SurveyError>;

#[derive(Error, Debug)]
pub enum SurveyError {
    /// Reading the survey export or writing the results failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV, including rows of unequal length
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The export does not have the questionnaire's column layout
    #[error("schema mismatch: expected {expected} columns, found {found}")]
    SchemaMismatch { expected: usize, found: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The linguistic annotator could not be initialized
    #[error("annotator error: {0}")]
    Annotator(String),
}

impl SurveyError {
    pub fn annotator(msg: impl Into<String>) -> Self {
        SurveyError::Annotator(msg.into())
    }
}
