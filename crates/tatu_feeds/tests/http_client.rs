use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::time::Duration;
use tatu_core::{GetOptions, HttpClient};
use tatu_feeds::ReqwestClient;

async fn spawn_server() -> SocketAddr {
    let app = Router::new()
        .route("/ok", get(|| async { "hello" }))
        .route("/missing", get(|| async { (StatusCode::NOT_FOUND, "nope") }))
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_millis(500)).await;
                "late"
            }),
        )
        .route(
            "/cache-control",
            get(|headers: HeaderMap| async move {
                headers
                    .get("cache-control")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("none")
                    .to_string()
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn test_get_returns_body() {
    let addr = spawn_server().await;
    let client = ReqwestClient::new().unwrap();

    let body = client
        .get(&format!("http://{}/ok", addr), &GetOptions::default())
        .await
        .unwrap();
    assert_eq!(body, "hello");
}

#[tokio::test]
async fn test_non_success_status() {
    let addr = spawn_server().await;
    let client = ReqwestClient::new().unwrap();
    let url = format!("http://{}/missing", addr);

    let err = client.get(&url, &GetOptions::default()).await.unwrap_err();
    assert_eq!(err.status, Some(404));
    assert_eq!(err.message, "HTTP 404: Not Found");
    assert_eq!(err.url.as_deref(), Some(url.as_str()));
}

#[tokio::test]
async fn test_request_timeout() {
    let addr = spawn_server().await;
    let client = ReqwestClient::new().unwrap();
    let options = GetOptions::default().with_timeout(Duration::from_millis(100));

    let err = client
        .get(&format!("http://{}/slow", addr), &options)
        .await
        .unwrap_err();
    assert!(err.is_timeout());
    assert_eq!(err.message, "Request timed out after 100ms");
    assert_eq!(err.status, None);
}

#[tokio::test]
async fn test_network_failure() {
    let client = ReqwestClient::new().unwrap();
    // Port 9 (discard) is closed on test hosts.
    let err = client
        .get("http://127.0.0.1:9/", &GetOptions::default().with_timeout(Duration::from_secs(5)))
        .await
        .unwrap_err();
    assert!(err.message.starts_with("Failed to fetch 'http://127.0.0.1:9/'"));
}

#[tokio::test]
async fn test_sends_cache_hints() {
    let addr = spawn_server().await;
    let client = ReqwestClient::new().unwrap();
    let options = GetOptions::default()
        .with_cache_ttl(Duration::from_secs(60))
        .cache_everything();

    let echoed = client
        .get(&format!("http://{}/cache-control", addr), &options)
        .await
        .unwrap();
    assert_eq!(echoed, "max-age=60, public");
}
