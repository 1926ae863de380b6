//! End-to-end tests: HTTP router in front of a mocked Paperless API

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use paperless_query::config::QueryServiceConfig;
use paperless_query::server::{state::AppState, QueryServer};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(paperless: &MockServer) -> QueryServiceConfig {
    let mut config = QueryServiceConfig::default();
    config.repository.base_url = format!("{}/api", paperless.uri());
    config.repository.ui_base_url = "http://paperless.local/documents".to_string();
    config.repository.api_token = "s3cret".to_string();
    config.repository.timeout_secs = 2;
    config
}

fn router(paperless: &MockServer) -> Router {
    let state = AppState::new(config(paperless)).unwrap();
    QueryServer::with_state(state).router()
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get(router: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn test_query_collects_all_pages() {
    let paperless = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/documents/"))
        .and(header("Authorization", "Token s3cret"))
        .and(query_param("document_type__name__icontains", "rechnung"))
        .and(query_param("correspondent__name__icontains", "Acme GmbH"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 3,
            "next": format!("{}/api/documents/?page=2", paperless.uri()),
            "results": [
                {"id": 11, "title": "Rechnung Januar"},
                {"id": 12, "title": "Rechnung Februar"}
            ]
        })))
        .expect(1)
        .mount(&paperless)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/documents/"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 3,
            "next": null,
            "results": [{"id": 13, "title": null}]
        })))
        .expect(1)
        .mount(&paperless)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/documents/"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(0)
        .mount(&paperless)
        .await;

    let (status, body) = post_json(
        router(&paperless),
        "/query",
        json!({"text": "Zeige alle Rechnungen von Acme GmbH"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "3 document(s) found:\n\
         [Rechnung Januar](http://paperless.local/documents/11/)\n\
         [Rechnung Februar](http://paperless.local/documents/12/)\n\
         [Untitled document](http://paperless.local/documents/13/)"
    );
}

#[tokio::test]
async fn test_null_results_page_ends_listing_normally() {
    let paperless = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/documents/"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "next": format!("{}/api/documents/?page=2", paperless.uri()),
            "results": [{"id": 7, "title": "Mietvertrag"}]
        })))
        .expect(1)
        .mount(&paperless)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/documents/"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "next": null,
            "results": null
        })))
        .expect(1)
        .mount(&paperless)
        .await;

    let (status, body) = post_json(router(&paperless), "/query", json!({"text": "Verträge"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "1 document(s) found:\n[Mietvertrag](http://paperless.local/documents/7/)"
    );
}

#[tokio::test]
async fn test_query_reports_repository_failure_in_message() {
    let paperless = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/documents/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&paperless)
        .await;

    let (status, body) = post_json(router(&paperless), "/query", json!({"text": "Verträge"})).await;

    assert_eq!(status, StatusCode::OK);
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("Error fetching documents: HTTP 500"), "{message}");
}

#[tokio::test]
async fn test_query_without_matches() {
    let paperless = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/documents/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 0,
            "next": null,
            "results": []
        })))
        .expect(1)
        .mount(&paperless)
        .await;

    let (status, body) = post_json(router(&paperless), "/query", json!({"text": "Berichte"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "No documents found.");
}

#[tokio::test]
async fn test_parse_shows_slots_and_filter() {
    let paperless = MockServer::start().await;

    let (status, body) = post_json(
        router(&paperless),
        "/parse",
        json!({"text": "Berichte vom 15.03.2023"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["query"]["document_type"], "report");
    assert_eq!(body["query"]["start_date"], "2023-03-15");
    assert_eq!(body["query"]["end_date"], "2023-03-15");
    assert_eq!(body["filter"]["document_type__name__icontains"], "bericht");
    assert_eq!(body["filter"]["created__date__gte"], "2023-03-15");
    assert_eq!(body["filter"]["created__date__lte"], "2023-03-15");
    assert!(body["filter"].get("page").is_none());

    // Parsing never touches the repository
    assert!(paperless.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_query_requires_post() {
    let paperless = MockServer::start().await;
    let (status, _) = get(router(&paperless), "/query").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_health_and_info() {
    let paperless = MockServer::start().await;

    let (status, body) = get(router(&paperless), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");

    let (status, body) = get(router(&paperless), "/info").await;
    assert_eq!(status, StatusCode::OK);
    let info: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(info["name"], "paperless-query");
}

#[tokio::test]
async fn test_readiness_follows_repository() {
    let paperless = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&paperless)
        .await;

    let (status, _) = get(router(&paperless), "/ready").await;
    assert_eq!(status, StatusCode::OK);

    paperless.reset().await;
    let (status, _) = get(router(&paperless), "/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}
