//! Output formatting for snapshot documents.
//!
//! Provides functions to format a [`SnapshotDocument`] as the plain-text
//! snapshot or as JSON. File contents are carried over unchanged.

use crate::{SnapshotDocument, SnapshotError};
use std::fs;
use std::path::Path;

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Returns the conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }
}

/// Formats the document into a string.
pub fn format_document(
    document: &SnapshotDocument,
    format: OutputFormat,
) -> Result<String, SnapshotError> {
    match format {
        OutputFormat::Text => Ok(document.render_text()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(document)?),
    }
}

/// Writes the formatted document to a file as UTF-8, truncating it first.
pub fn write_document_to_file(
    document: &SnapshotDocument,
    format: OutputFormat,
    path: impl AsRef<Path>,
) -> Result<(), SnapshotError> {
    let content = format_document(document, format)?;
    fs::write(&path, content).map_err(|e| SnapshotError::io(path.as_ref(), e))?;
    Ok(())
}
