use std::path::PathBuf;
use thiserror::Error;

use crate::page_range::RangeError;

/// Failures that abort a merge. Nothing is written when one occurs.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("File not found: {}", .path.display())]
    MissingFile { path: PathBuf },

    #[error("Invalid page range '{selector}' for {}", .path.display())]
    InvalidRange {
        path: PathBuf,
        selector: String,
        #[source]
        source: RangeError,
    },

    #[error(transparent)]
    Pdf(#[from] anyhow::Error),
}
