//! File boundary for the menu pipeline.
//!
//! Everything here is I/O; the transform itself never touches the disk.

use super::models::MenuDocument;
use crate::error::{MenuError, Result};
use std::path::Path;

/// Reads the CSV source. A missing file is fatal for the run.
pub async fn read_source(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| MenuError::Read {
            path: path.to_path_buf(),
            source,
        })
}

/// Renders the document as two-space indented JSON.
pub fn render_document(document: &MenuDocument) -> Result<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Writes the document to `path`, replacing any previous file.
pub async fn write_document(path: &Path, document: &MenuDocument) -> Result<()> {
    let json = render_document(document)?;
    tokio::fs::write(path, json)
        .await
        .map_err(|source| MenuError::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// Loads a previously generated document.
pub async fn load_document(path: &Path) -> Result<MenuDocument> {
    let text = read_source(path).await?;
    Ok(serde_json::from_str(&text)?)
}
