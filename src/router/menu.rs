//! Menu document routes

use super::state::SharedState;
use crate::menu::MenuDocument;
use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

/// Creates routes serving the generated menu document
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/menuData.json", get(menu_document))
        .route("/health", get(health))
}

/// Endpoint: GET /menuData.json
/// Returns the document exactly as the transform produced it.
async fn menu_document(State(state): State<SharedState>) -> Json<MenuDocument> {
    Json(state.document.clone())
}

/// Endpoint: GET /health
async fn health(State(state): State<SharedState>) -> Json<Value> {
    let menu = &state.document.menu_data;
    Json(json!({
        "status": "ok",
        "categories": menu.categories.len(),
        "items": menu.item_count(),
    }))
}
