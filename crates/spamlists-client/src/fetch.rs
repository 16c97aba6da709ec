//! Sources for raw list file contents

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Default timeout for one list download
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Provider of raw list file text, addressed by path relative to the
/// list root
#[async_trait]
pub trait ListSource: Send + Sync {
    async fn fetch(&self, path: &str) -> Result<String>;
}

/// Downloads list files from an HTTP host.
///
/// One attempt per call, bounded by the timeout. No retries.
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    /// Source for the given host root with the default timeout
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ListSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<String> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(url = %url, "Fetching list file");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ClientError::Http {
                path: path.to_string(),
                source,
            })?;

        if !resp.status().is_success() {
            return Err(ClientError::Status {
                path: path.to_string(),
                status: resp.status().as_u16(),
            });
        }

        resp.text().await.map_err(|source| ClientError::Http {
            path: path.to_string(),
            source,
        })
    }
}

/// Reads list files from a local directory laid out like the list host
/// (the bundled-files deployment).
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ListSource for DirSource {
    async fn fetch(&self, path: &str) -> Result<String> {
        let file = self.root.join(path);
        tokio::fs::read_to_string(&file)
            .await
            .map_err(|source| ClientError::Io {
                path: path.to_string(),
                source,
            })
    }
}
