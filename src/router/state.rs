//! Shared state of the document server

use crate::menu::MenuDocument;
use std::{path::PathBuf, sync::Arc};

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Read-only data served over HTTP
pub struct AppState {
    /// The menu document produced at startup
    pub document: MenuDocument,

    /// Path to the directory containing the front-end files.
    pub assets_dir: PathBuf,
}

impl AppState {
    pub fn new(document: MenuDocument, assets_dir: PathBuf) -> Self {
        tracing::info!(assets_dir = %assets_dir.display(), "using assets directory");
        Self {
            document,
            assets_dir,
        }
    }
}
