//! Query endpoints

use axum::{extract::State, Json};
use std::time::Instant;

use crate::server::state::AppState;
use crate::types::{ParseResponse, QueryRequest, QueryResponse};

/// POST /query - Answer a natural-language query
///
/// Always succeeds; retrieval failures are part of the message text.
pub async fn query_documents(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Json<QueryResponse> {
    let start = Instant::now();

    tracing::info!("Query: \"{}\"", request.text);

    let message = state.pipeline().answer(&request.text).await;

    tracing::info!("Query completed in {}ms", start.elapsed().as_millis());

    Json(QueryResponse::new(message))
}

/// POST /parse - Show extracted slots and the repository filter
pub async fn parse_query(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Json<ParseResponse> {
    let (query, filter) = state.pipeline().parse(&request.text);

    Json(ParseResponse {
        query,
        filter: filter.to_wire_map(),
    })
}
