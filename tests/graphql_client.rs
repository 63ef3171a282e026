//! GraphQL client against a fake endpoint served by axum on a random port.

use axum::{http::HeaderMap, http::StatusCode, routing::post, Json, Router};
use folio::graphql::{ClientError, GraphQLClient};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

type Recorded = Arc<Mutex<Vec<(String, Value)>>>;

/// Serve `response` with `status` for every POST /query, recording content type and body
async fn spawn_graphql(status: StatusCode, response: Value) -> (String, Recorded) {
    let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));
    let recorder = Arc::clone(&recorded);

    let router = Router::new().route(
        "/query",
        post(move |headers: HeaderMap, Json(body): Json<Value>| {
            let recorder = Arc::clone(&recorder);
            let response = response.clone();
            async move {
                let content_type = headers
                    .get("content-type")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                recorder.lock().unwrap().push((content_type, body));
                (status, Json(response))
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (format!("http://{}/query", addr), recorded)
}

#[tokio::test]
async fn test_notes_request_shape() {
    let (url, recorded) = spawn_graphql(StatusCode::OK, json!({ "data": { "notes": [] } })).await;

    GraphQLClient::new(url).get_notes().await.unwrap();

    let recorded = recorded.lock().unwrap();
    assert_eq!(recorded.len(), 1);
    let (content_type, body) = &recorded[0];
    assert_eq!(content_type, "application/json");
    let query = body["query"].as_str().unwrap();
    assert!(query.contains("notes"));
    assert!(query.contains("date"));
    assert_eq!(body.as_object().unwrap().len(), 1);
}

#[tokio::test]
async fn test_empty_notes_are_returned() {
    let (url, _) = spawn_graphql(StatusCode::OK, json!({ "data": { "notes": [] } })).await;
    let notes = GraphQLClient::new(url).get_notes().await.unwrap();
    assert_eq!(notes, json!([]));
}

#[tokio::test]
async fn test_notes_pass_through_verbatim() {
    let notes = json!([
        { "id": "1", "title": "tls chat", "description": "go", "url": "/notes/tls", "date": "2025-07" },
        { "id": "2", "odd": { "nested": [1, 2, 3] } }
    ]);
    let (url, _) = spawn_graphql(StatusCode::OK, json!({ "data": { "notes": notes.clone() } })).await;

    let fetched = GraphQLClient::new(url).get_notes().await.unwrap();
    assert_eq!(fetched, notes);
}

#[tokio::test]
async fn test_projects_query_and_payload() {
    let projects = json!([{ "id": "p1", "status": "Production", "tags": ["Go"] }]);
    let (url, recorded) =
        spawn_graphql(StatusCode::OK, json!({ "data": { "projects": projects.clone() } })).await;

    let fetched = GraphQLClient::new(url).get_projects().await.unwrap();
    assert_eq!(fetched, projects);

    let recorded = recorded.lock().unwrap();
    assert!(recorded[0].1["query"].as_str().unwrap().contains("giturl"));
}

#[tokio::test]
async fn test_missing_data_key() {
    let (url, _) = spawn_graphql(
        StatusCode::OK,
        json!({ "errors": [{ "message": "resolver exploded" }] }),
    )
    .await;

    let err = GraphQLClient::new(url).get_projects().await.unwrap_err();
    assert!(matches!(err, ClientError::MissingData { field: "projects" }));
    assert_eq!(err.to_string(), "projects data is missing");
}

#[tokio::test]
async fn test_missing_field_in_data() {
    let (url, _) = spawn_graphql(StatusCode::OK, json!({ "data": { "projects": [] } })).await;
    let err = GraphQLClient::new(url).get_notes().await.unwrap_err();
    assert!(err.is_missing_data());
}

#[tokio::test]
async fn test_non_success_status_is_network_error() {
    let (url, _) = spawn_graphql(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "data": { "notes": [] } }),
    )
    .await;

    let err = GraphQLClient::new(url).get_notes().await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = GraphQLClient::new(format!("http://{}/query", addr))
        .get_notes()
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
}

#[tokio::test]
async fn test_non_json_body_is_network_error() {
    let router = Router::new().route("/query", post(|| async { "<html>teapot</html>" }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let err = GraphQLClient::new(format!("http://{}/query", addr))
        .get_notes()
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
}
