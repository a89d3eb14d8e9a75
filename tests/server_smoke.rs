//! Smoke test over a real TCP listener

mod common;

use serde_json::json;
use tokio::net::TcpListener;

use common::{DestinationResponse, TestApp};

#[tokio::test]
async fn test_server_serves_destinations_over_http() {
    let app = TestApp::new();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = tokio::spawn(async move {
        axum::serve(listener, app.router).await.unwrap();
    });

    let client = reqwest::Client::new();
    let base = format!("http://{addr}");

    let empty: Vec<DestinationResponse> = client
        .get(format!("{base}/api/destinations/"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(empty.is_empty());

    let response = client
        .post(format!("{base}/api/destinations/"))
        .json(&json!({"name": "Paris", "country": "France"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    let created: DestinationResponse = response.json().await.unwrap();
    assert_eq!(created.name, "Paris");

    let root: serde_json::Value = client
        .get(format!("{base}/api/"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(root["destinations"], format!("{base}/api/destinations/"));

    let doc: serde_json::Value = client
        .get(format!("{base}/swagger.json"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(doc["info"]["version"], "v1");

    server.abort();
}
