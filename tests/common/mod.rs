//! Stub catalog server for integration tests
//!
//! Serves canned responses keyed by the raw request path and records every
//! path it receives, so tests can check both URL construction and request
//! counts without touching the network.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Router,
    extract::State,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use tokio::net::TcpListener;

struct StubRoute {
    status: StatusCode,
    body: Vec<u8>,
    delay: Option<Duration>,
}

struct StubState {
    routes: HashMap<String, StubRoute>,
    requests: Mutex<Vec<String>>,
}

/// Running stub server. Shuts down when dropped.
pub struct StubCatalog {
    /// Base URL to hand to the client, e.g. "http://127.0.0.1:12345/unsecure"
    pub base_url: String,
    state: Arc<StubState>,
    _shutdown_tx: tokio::sync::oneshot::Sender<()>,
}

pub struct StubCatalogBuilder {
    routes: HashMap<String, StubRoute>,
}

impl StubCatalogBuilder {
    /// Serve `body` with `status` for `path` (relative to the base URL)
    pub fn route(self, path: &str, status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        self.insert(path, status, body.into(), None)
    }

    /// Like [`Self::json`], but waits `delay` before answering
    pub fn slow_json(self, path: &str, delay: Duration, body: serde_json::Value) -> Self {
        self.insert(path, StatusCode::OK, body.to_string().into_bytes(), Some(delay))
    }

    fn insert(
        mut self,
        path: &str,
        status: StatusCode,
        body: Vec<u8>,
        delay: Option<Duration>,
    ) -> Self {
        self.routes.insert(
            format!("/unsecure{path}"),
            StubRoute {
                status,
                body,
                delay,
            },
        );
        self
    }

    pub fn json(self, path: &str, body: serde_json::Value) -> Self {
        self.route(path, StatusCode::OK, body.to_string())
    }

    /// Binds to a random port and spawns the server in a background task
    ///
    /// # Panics
    ///
    /// Panics if the port can't be bound.
    pub async fn spawn(self) -> StubCatalog {
        let state = Arc::new(StubState {
            routes: self.routes,
            requests: Mutex::new(Vec::new()),
        });

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
        let app = Router::new().fallback(serve).with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Stub server failed");
        });

        StubCatalog {
            base_url: format!("http://127.0.0.1:{port}/unsecure"),
            state,
            _shutdown_tx: shutdown_tx,
        }
    }
}

impl StubCatalog {
    pub fn builder() -> StubCatalogBuilder {
        StubCatalogBuilder {
            routes: HashMap::new(),
        }
    }

    /// Raw paths of every request received so far, in arrival order
    pub fn requests(&self) -> Vec<String> {
        self.state.requests.lock().unwrap().clone()
    }
}

async fn serve(State(state): State<Arc<StubState>>, uri: Uri) -> Response {
    let path = uri
        .path_and_query()
        .map_or_else(|| uri.path().to_string(), ToString::to_string);
    state.requests.lock().unwrap().push(path.clone());

    match state.routes.get(&path) {
        Some(route) => {
            if let Some(delay) = route.delay {
                tokio::time::sleep(delay).await;
            }
            (
                route.status,
                [(header::CONTENT_TYPE, "application/json")],
                route.body.clone(),
            )
                .into_response()
        }
        None => (StatusCode::NOT_FOUND, "no such route").into_response(),
    }
}

/// Address with nothing listening on it
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let port = listener
        .local_addr()
        .expect("Failed to get local address")
        .port();
    drop(listener);
    format!("http://127.0.0.1:{port}/unsecure")
}
