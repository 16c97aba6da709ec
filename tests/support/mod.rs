//! Shared harness for the integration tests: a local list host serving
//! fixed YAML fixtures, plus an isolated cache directory per test.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use spamlists_client::SpamListClient;
use tokio::net::TcpListener;

static PORT_COUNTER: AtomicU16 = AtomicU16::new(19400);

pub fn next_port() -> u16 {
    PORT_COUNTER.fetch_add(1, Ordering::SeqCst)
}

#[derive(Clone)]
struct HostState {
    files: Arc<HashMap<String, String>>,
    hits: Arc<Mutex<HashMap<String, usize>>>,
    delay: Option<Duration>,
}

async fn serve_list(
    State(state): State<HostState>,
    Path(path): Path<String>,
) -> Result<String, StatusCode> {
    *state.hits.lock().unwrap().entry(path.clone()).or_insert(0) += 1;
    if let Some(delay) = state.delay {
        tokio::time::sleep(delay).await;
    }
    state.files.get(&path).cloned().ok_or(StatusCode::NOT_FOUND)
}

/// One test's world: a list host and a cache directory, both torn down
/// on drop
pub struct TestHarness {
    pub base_url: String,
    pub cache_dir: PathBuf,
    hits: Arc<Mutex<HashMap<String, usize>>>,
    _shutdown: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestHarness {
    /// Start a host serving the given path -> body fixtures
    pub async fn start(files: &[(&str, &str)]) -> Self {
        Self::start_with_delay(files, None).await
    }

    /// Start a host that pauses before answering each request
    pub async fn start_with_delay(files: &[(&str, &str)], delay: Option<Duration>) -> Self {
        let file_map: HashMap<String, String> = files
            .iter()
            .map(|(path, body)| (path.to_string(), body.to_string()))
            .collect();
        let hits = Arc::new(Mutex::new(HashMap::new()));
        let state = HostState {
            files: Arc::new(file_map),
            hits: Arc::clone(&hits),
            delay,
        };

        let router = Router::new()
            .route("/live", get(|| async { "ok" }))
            .route("/*path", get(serve_list))
            .with_state(state);

        let port = next_port();
        let addr: SocketAddr = ([127, 0, 0, 1], port).into();
        let listener = TcpListener::bind(addr).await.expect("Bind should succeed");
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

        tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .ok();
        });

        let base_url = format!("http://127.0.0.1:{}", port);
        for _ in 0..10 {
            if reqwest::Client::new()
                .get(format!("{}/live", base_url))
                .send()
                .await
                .is_ok()
            {
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        let cache_dir = std::env::temp_dir().join(format!("spamlists-e2e-{}", port));
        let _ = std::fs::remove_dir_all(&cache_dir);

        Self {
            base_url,
            cache_dir,
            hits,
            _shutdown: Some(shutdown_tx),
        }
    }

    /// Client wired to this host and cache directory
    pub fn client(&self) -> SpamListClient {
        SpamListClient::builder()
            .base_url(self.base_url.as_str())
            .cache_dir(&self.cache_dir)
            .build()
    }

    /// Requests seen for one path
    pub fn hits(&self, path: &str) -> usize {
        *self.hits.lock().unwrap().get(path).unwrap_or(&0)
    }

    /// Requests seen across all paths
    pub fn total_hits(&self) -> usize {
        self.hits.lock().unwrap().values().sum()
    }
}

impl Drop for TestHarness {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.cache_dir);
    }
}

/// Token list fixture body
pub fn spam_yaml(entries: &[&str]) -> String {
    let mut body = String::from("SpamContracts:\n");
    for entry in entries {
        body.push_str("  - ");
        body.push_str(entry);
        body.push('\n');
    }
    body
}

/// Fixture body using the legacy collections field name
pub fn collections_yaml(entries: &[&str]) -> String {
    let mut body = String::from("SpamCollections:\n");
    for entry in entries {
        body.push_str("  - ");
        body.push_str(entry);
        body.push('\n');
    }
    body
}
