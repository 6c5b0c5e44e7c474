//! Typed errors for workbook and template loading.

use std::path::PathBuf;
use thiserror::Error;

/// Reasons a site's parameter table could not be extracted.
///
/// None of these abort a run: the orchestrator records the message in the
/// site log and moves on to the next site.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("Excel file not found at: {}", .0.display())]
    WorkbookNotFound(PathBuf),

    #[error("Failed to open workbook {}: {reason}", path.display())]
    WorkbookUnreadable { path: PathBuf, reason: String },

    #[error("Sheet '{0}' not found in the Excel file.")]
    SheetNotFound(String),

    #[error("Column '{0}' not found in header.")]
    KeyColumnNotFound(String),

    #[error("Site column '{0}' not found in header.")]
    SiteColumnNotFound(String),
}

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("JSON template file not found at: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read JSON template {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON template {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
