//! API routes for the query server

pub mod query;

use axum::{
    routing::{get, post},
    Router,
};
use crate::server::state::AppState;

/// Build all API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Natural-language query
        .route("/query", post(query::query_documents))
        // Slot extraction only, no repository access
        .route("/parse", post(query::parse_query))
        // Info
        .route("/info", get(info))
}

/// API info endpoint
async fn info() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "name": "paperless-query",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Natural-language document lookup for Paperless",
        "endpoints": {
            "POST /query": "Answer a free-text query with links to matching documents",
            "POST /parse": "Show the extracted slots and repository filter for a query",
            "GET /info": "This description",
            "GET /health": "Liveness check",
            "GET /ready": "Repository reachability check"
        }
    }))
}
