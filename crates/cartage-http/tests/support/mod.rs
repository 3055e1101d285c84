//! Local echo server for integration tests
//!
//! Runs an axum app on its own tokio runtime so the blocking client under
//! test can be driven directly from the test thread.

use axum::extract::{Multipart, RawQuery};
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::{Json, Router};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::runtime::Runtime;
use tokio::sync::oneshot;

/// Handle for a running echo server. Shuts down on drop.
pub struct TestServer {
    url: String,
    shutdown_tx: Option<oneshot::Sender<()>>,
    runtime: Option<Runtime>,
}

impl TestServer {
    /// Bind to an ephemeral local port and start serving.
    pub fn start() -> Self {
        let runtime = Runtime::new().expect("tokio runtime");
        let (addr_tx, addr_rx) = std::sync::mpsc::channel::<SocketAddr>();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        runtime.spawn(async move {
            let app = Router::new()
                .route("/get", get(echo_query))
                .route("/headers", get(echo_headers))
                .route("/post", post(echo_body))
                .route("/form", post(echo_form))
                .route("/delay", get(delayed));

            let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
            addr_tx.send(listener.local_addr().expect("local addr")).ok();
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .ok();
        });

        let addr = addr_rx.recv().expect("server address");
        Self {
            url: format!("http://{}", addr),
            shutdown_tx: Some(shutdown_tx),
            runtime: Some(runtime),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

/// GET /get — body is the raw query string.
async fn echo_query(RawQuery(query): RawQuery) -> String {
    query.unwrap_or_default()
}

/// GET /headers — JSON object of the request headers as received.
async fn echo_headers(headers: HeaderMap) -> Json<serde_json::Value> {
    let map: HashMap<String, String> = headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();
    Json(serde_json::json!({ "headers": map }))
}

/// POST /post — echoes the body and the observed content type.
async fn echo_body(headers: HeaderMap, body: String) -> Json<serde_json::Value> {
    let content_type = headers
        .get(axum::http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    Json(serde_json::json!({ "data": body, "content_type": content_type }))
}

/// POST /form — echoes multipart fields in arrival order.
async fn echo_form(mut multipart: Multipart) -> Json<serde_json::Value> {
    let mut fields = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let value = field.text().await.unwrap_or_default();
        fields.push(serde_json::json!({
            "name": name,
            "value": value,
            "content_type": content_type,
        }));
    }
    Json(serde_json::json!({ "fields": fields }))
}

/// GET /delay — responds after three seconds.
async fn delayed() -> &'static str {
    tokio::time::sleep(Duration::from_secs(3)).await;
    "done"
}
