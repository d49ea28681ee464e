//! Errors surfaced by a sort run.

use crate::document::DocumentError;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum SortError {
    #[error("input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },
    #[error("cannot read input file {}: {source}", path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
    #[error("{}:{line}:{column}: data entry has no `name` attribute", path.display())]
    MissingKeyAttribute { path: PathBuf, line: u32, column: u32 },
    #[error("{}:{line}:{column}: data entry has {count} attributes named `name`", path.display())]
    AmbiguousKeyAttribute {
        path: PathBuf,
        line: u32,
        column: u32,
        count: usize,
    },
    #[error("cannot write {}: {source}", path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SortError {
    /// Attach the input path to a document-level failure.
    pub fn document(path: &Path, err: DocumentError) -> Self {
        let path = path.to_path_buf();
        match err {
            DocumentError::MissingKey { line, column } => {
                SortError::MissingKeyAttribute { path, line, column }
            }
            DocumentError::AmbiguousKey {
                line,
                column,
                count,
            } => SortError::AmbiguousKeyAttribute {
                path,
                line,
                column,
                count,
            },
            other @ (DocumentError::Encoding(_) | DocumentError::Xml(_)) => SortError::Parse {
                path,
                message: other.to_string(),
            },
        }
    }

    /// Stable identifier used in JSON reports.
    pub fn kind(&self) -> &'static str {
        match self {
            SortError::InputNotFound { .. } => "input_not_found",
            SortError::InputUnreadable { .. } => "input_unreadable",
            SortError::Parse { .. } => "parse_error",
            SortError::MissingKeyAttribute { .. } => "missing_key_attribute",
            SortError::AmbiguousKeyAttribute { .. } => "ambiguous_key_attribute",
            SortError::OutputUnwritable { .. } => "output_unwritable",
        }
    }
}
