//! Spam list client: resolution, caching and membership checks

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use futures::future::try_join_all;
use spamlists_core::constants::{CACHE_DIR_NAME, DEFAULT_BASE_URL};
use spamlists_core::{
    is_contract_spam, AssetKind, Confidence, Network, ResourceKey, SpamListData,
};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::cache::{ListCache, DEFAULT_TTL};
use crate::error::{ClientError, Result};
use crate::fetch::{HttpSource, ListSource, DEFAULT_TIMEOUT};

/// Whether a lookup may consult and populate the cache tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheMode {
    /// Memory first, then disk, fetch on miss and populate both tiers
    Enabled,
    /// Always fetch, touch neither tier
    Bypass,
}

impl Default for CacheMode {
    fn default() -> Self {
        CacheMode::Enabled
    }
}

/// Client for the published spam lists.
///
/// Safe to share behind an `Arc`; concurrent lookups of the same
/// resource are collapsed into a single fetch.
pub struct SpamListClient {
    source: Arc<dyn ListSource>,
    cache: ListCache,
    inflight: Mutex<HashMap<ResourceKey, Arc<Mutex<()>>>>,
}

impl SpamListClient {
    /// Builder preconfigured with the upstream defaults
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Fetch a network's token spam list.
    ///
    /// The BSC yes-confidence list is published in two parts; both are
    /// loaded and concatenated, first part first.
    pub async fn erc20_list(
        &self,
        network: Network,
        confidence: Confidence,
        mode: CacheMode,
    ) -> Result<Vec<String>> {
        let keys = ResourceKey::erc20(network, confidence);
        let lists = try_join_all(keys.iter().map(|key| self.load(key, mode)))
            .await
            .map_err(|source| ClientError::TokenList {
                network,
                confidence,
                source: Box::new(source),
            })?;

        Ok(lists
            .iter()
            .flat_map(|data| data.entries.iter().cloned())
            .collect())
    }

    /// Fetch a network's NFT spam list
    pub async fn nft_list(&self, network: Network, mode: CacheMode) -> Result<Vec<String>> {
        let key = ResourceKey::nft(network);
        let data = self
            .load(&key, mode)
            .await
            .map_err(|source| ClientError::NftList {
                network,
                source: Box::new(source),
            })?;
        Ok(data.entries.clone())
    }

    /// Fetch the list for an asset kind. Confidence applies to token
    /// lists only.
    pub async fn list(
        &self,
        network: Network,
        kind: AssetKind,
        confidence: Confidence,
        mode: CacheMode,
    ) -> Result<Vec<String>> {
        match kind {
            AssetKind::Erc20 => self.erc20_list(network, confidence, mode).await,
            AssetKind::Nft => self.nft_list(network, mode).await,
        }
    }

    /// Check a token contract against a network's spam list
    pub async fn is_erc20_spam(
        &self,
        address: &str,
        network: Network,
        confidence: Confidence,
        mode: CacheMode,
    ) -> Result<bool> {
        let entries = self.erc20_list(network, confidence, mode).await?;
        Ok(is_contract_spam(address, &entries))
    }

    /// Check an NFT contract against a network's spam list
    pub async fn is_nft_spam(
        &self,
        address: &str,
        network: Network,
        mode: CacheMode,
    ) -> Result<bool> {
        let entries = self.nft_list(network, mode).await?;
        Ok(is_contract_spam(address, &entries))
    }

    /// Like [`Self::is_erc20_spam`] but reports resolution failures as
    /// "not spam". Failures are logged.
    pub async fn try_is_erc20_spam(
        &self,
        address: &str,
        network: Network,
        confidence: Confidence,
        mode: CacheMode,
    ) -> bool {
        match self.is_erc20_spam(address, network, confidence, mode).await {
            Ok(spam) => spam,
            Err(e) => {
                warn!(address = %address, network = %network, error = %e, "Token spam check failed, treating as not spam");
                false
            }
        }
    }

    /// Like [`Self::is_nft_spam`] but reports resolution failures as
    /// "not spam". Failures are logged.
    pub async fn try_is_nft_spam(&self, address: &str, network: Network, mode: CacheMode) -> bool {
        match self.is_nft_spam(address, network, mode).await {
            Ok(spam) => spam,
            Err(e) => {
                warn!(address = %address, network = %network, error = %e, "NFT spam check failed, treating as not spam");
                false
            }
        }
    }

    /// Clear both cache tiers
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    async fn load(&self, key: &ResourceKey, mode: CacheMode) -> Result<Arc<SpamListData>> {
        if mode == CacheMode::Bypass {
            return self.fetch_and_parse(key).await.map(Arc::new);
        }

        if let Some(data) = self.cache.get(key) {
            debug!(key = %key, "Cache hit");
            return Ok(data);
        }

        // One fetch per key; latecomers wait and then re-check the cache
        let gate = {
            let mut inflight = self.inflight.lock().await;
            Arc::clone(
                inflight
                    .entry(key.clone())
                    .or_insert_with(|| Arc::new(Mutex::new(()))),
            )
        };
        let _guard = gate.lock().await;

        if let Some(data) = self.cache.get(key) {
            return Ok(data);
        }

        let data = self.fetch_and_parse(key).await?;
        info!(key = %key, entries = data.entries.len(), "Fetched spam list");
        Ok(self.cache.put(key, data))
    }

    async fn fetch_and_parse(&self, key: &ResourceKey) -> Result<SpamListData> {
        let text = self.source.fetch(key.path()).await?;
        serde_yaml::from_str(&text).map_err(|source| ClientError::Parse {
            path: key.path().to_string(),
            source,
        })
    }
}

/// Builder for [`SpamListClient`]
pub struct ClientBuilder {
    base_url: String,
    timeout: Duration,
    cache_dir: Option<PathBuf>,
    ttl: Option<Duration>,
    source: Option<Arc<dyn ListSource>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            cache_dir: None,
            ttl: Some(DEFAULT_TTL),
            source: None,
        }
    }

    /// Host root for the published list files
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Timeout for each download attempt
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Directory for the on-disk cache tier
    pub fn cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = Some(dir.into());
        self
    }

    /// How long cached lists stay fresh. `None` disables expiry.
    pub fn ttl(mut self, ttl: Option<Duration>) -> Self {
        self.ttl = ttl;
        self
    }

    /// Replace the HTTP host with a custom list source
    pub fn source(mut self, source: Arc<dyn ListSource>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn build(self) -> SpamListClient {
        let source = self
            .source
            .unwrap_or_else(|| Arc::new(HttpSource::with_timeout(&self.base_url, self.timeout)));
        let cache_dir = self
            .cache_dir
            .unwrap_or_else(|| std::env::temp_dir().join(CACHE_DIR_NAME));

        SpamListClient {
            source,
            cache: ListCache::new(cache_dir, self.ttl),
            inflight: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
