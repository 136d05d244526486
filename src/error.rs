//! Error type shared by the grade book library.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GradeError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Parse error on line {line_number} ({reason}): {line:?}")]
    Parse {
        line_number: usize,
        line: String,
        reason: String,
    },

    #[error("IO error for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV rendering error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GradeError {
    pub fn config(message: impl Into<String>) -> Self {
        GradeError::Config {
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GradeError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, GradeError>;
