use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::MergeError;
use crate::input_spec::InputSpec;
use crate::page_range;
use crate::pdf::{PdfDocument, PdfWriter};

#[derive(Debug, Clone, Serialize)]
pub struct MergeSummary {
    pub output: PathBuf,
    pub inputs: Vec<InputSummary>,
    pub total_pages: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputSummary {
    pub path: PathBuf,
    pub selector: Option<String>,
    /// 1-based page numbers taken from this input, in output order
    pub pages: Vec<u32>,
}

/// Merge the selected pages of every input, in order, into `output`.
///
/// All input paths are checked before any document is read, and the
/// output is only written once every input resolved cleanly.
pub fn run<P: AsRef<Path>>(inputs: &[InputSpec], output: P) -> Result<MergeSummary, MergeError> {
    let output = output.as_ref();

    if let Some(missing) = inputs.iter().find(|input| !input.path.exists()) {
        return Err(MergeError::MissingFile {
            path: missing.path.clone(),
        });
    }

    let mut writer = PdfWriter::new();
    let mut summaries = Vec::with_capacity(inputs.len());

    for input in inputs {
        info!(path = %input.path.display(), "reading");
        let doc = PdfDocument::open(&input.path)?;
        let total_pages = doc.page_count();

        let indices = match &input.selector {
            Some(selector) => page_range::parse(selector, total_pages).map_err(|source| {
                MergeError::InvalidRange {
                    path: input.path.clone(),
                    selector: selector.clone(),
                    source,
                }
            })?,
            None => (0..total_pages).collect(),
        };
        debug!(path = %input.path.display(), total_pages, ?indices, "resolved pages");

        if indices.is_empty() {
            warn!(input = %input, total_pages, "selection matches no pages");
        }

        writer.append_pages(doc, &indices)?;
        summaries.push(InputSummary {
            path: input.path.clone(),
            selector: input.selector.clone(),
            pages: indices.iter().map(|i| i + 1).collect(),
        });
    }

    let total_pages = writer.page_count();
    if total_pages == 0 {
        warn!(output = %output.display(), "no pages selected, writing an empty PDF");
    }

    writer.save(output)?;
    info!(output = %output.display(), total_pages, "wrote merged PDF");

    Ok(MergeSummary {
        output: output.to_path_buf(),
        inputs: summaries,
        total_pages,
    })
}
