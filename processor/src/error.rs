//! Error types for the ticker list pipeline.
//!
//! - [`CsvError`] - Reading and parsing the metadata CSV
//! - [`OutputError`] - Writing the lookup lists
//! - [`PipelineError`] - Top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// CSV Parsing Errors
// =============================================================================

/// Errors while loading the metadata CSV.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Input file does not exist.
    #[error("Input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to decode the file content.
    #[error("Failed to decode content: {0}")]
    Encoding(String),

    /// Invalid CSV format.
    #[error("Invalid CSV at line {line}: {message}")]
    Parse { line: u64, message: String },

    /// Row does not have the (symbol, name) shape.
    #[error("Line {line}: expected {expected} columns, found {found}")]
    ColumnCount {
        line: u64,
        expected: usize,
        found: usize,
    },
}

impl From<csv::Error> for CsvError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        match err.into_kind() {
            csv::ErrorKind::Io(e) => CsvError::Io(e),
            csv::ErrorKind::Utf8 { err, .. } => CsvError::Encoding(err.to_string()),
            kind => CsvError::Parse {
                line,
                message: format!("{:?}", kind),
            },
        }
    }
}

// =============================================================================
// Output Errors
// =============================================================================

/// Errors while writing a lookup list.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Cannot create or write the output file.
    #[error("Cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline error returned by [`crate::transform::pipeline::run`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Input could not be loaded.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// A lookup list could not be written.
    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for output operations.
pub type OutputResult<T> = Result<T, OutputError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        let csv_err = CsvError::NotFound {
            path: PathBuf::from("WIKI-datasets-codes.csv"),
        };
        let pipeline_err: PipelineError = csv_err.into();
        assert!(pipeline_err.to_string().contains("WIKI-datasets-codes.csv"));

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let out_err = OutputError::Io {
            path: PathBuf::from("out.json"),
            source: io,
        };
        let pipeline_err: PipelineError = out_err.into();
        let msg = pipeline_err.to_string();
        assert!(msg.contains("out.json"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_column_count_format() {
        let err = CsvError::ColumnCount {
            line: 7,
            expected: 2,
            found: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("Line 7"));
        assert!(msg.contains("expected 2"));
        assert!(msg.contains("found 3"));
    }
}
