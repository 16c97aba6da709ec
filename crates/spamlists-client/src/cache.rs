//! Two-tier cache for parsed list files
//!
//! A memory map for the process lifetime over JSON files that persist
//! across runs. Disk trouble of any kind degrades to a cache miss; a
//! lookup through the cache never fails.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use spamlists_core::{ResourceKey, SpamListData};
use tracing::{debug, warn};

/// Default time-to-live for cached lists
pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

struct CachedList {
    data: Arc<SpamListData>,
    stored_at: Instant,
}

/// Memory-over-disk cache keyed by resource.
///
/// Memory entries expire by store instant, disk entries by file
/// modification time. A `None` TTL disables expiry.
pub struct ListCache {
    dir: PathBuf,
    ttl: Option<Duration>,
    memory: RwLock<HashMap<ResourceKey, CachedList>>,
}

impl ListCache {
    pub fn new(dir: impl Into<PathBuf>, ttl: Option<Duration>) -> Self {
        Self {
            dir: dir.into(),
            ttl,
            memory: RwLock::new(HashMap::new()),
        }
    }

    /// Cache directory on disk
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Look up a list, memory tier first, then disk. Expired or
    /// unreadable entries count as misses.
    pub fn get(&self, key: &ResourceKey) -> Option<Arc<SpamListData>> {
        if let Some(data) = self.get_memory(key) {
            return Some(data);
        }
        self.get_disk(key)
    }

    /// Store a list in both tiers. The memory tier always succeeds; disk
    /// trouble is logged and the fresh data simply goes unpersisted.
    pub fn put(&self, key: &ResourceKey, data: SpamListData) -> Arc<SpamListData> {
        let data = Arc::new(data);
        self.memory.write().unwrap().insert(
            key.clone(),
            CachedList {
                data: Arc::clone(&data),
                stored_at: Instant::now(),
            },
        );

        if let Err(e) = self.write_disk(key, &data) {
            warn!(key = %key, error = %e, "Failed to persist list to disk cache");
        }
        data
    }

    /// Empty the memory tier and delete the cache files on disk.
    /// Files that cannot be removed are logged and skipped.
    pub fn clear(&self) {
        self.memory.write().unwrap().clear();

        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return,
            Err(e) => {
                warn!(dir = %self.dir.display(), error = %e, "Failed to list cache directory");
                return;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Err(e) = std::fs::remove_file(&path) {
                    warn!(path = %path.display(), error = %e, "Failed to remove cache file");
                }
            }
        }
    }

    fn is_expired(&self, age: Duration) -> bool {
        match self.ttl {
            Some(ttl) => age > ttl,
            None => false,
        }
    }

    fn get_memory(&self, key: &ResourceKey) -> Option<Arc<SpamListData>> {
        {
            let memory = self.memory.read().unwrap();
            match memory.get(key) {
                Some(cached) if !self.is_expired(cached.stored_at.elapsed()) => {
                    return Some(Arc::clone(&cached.data));
                }
                Some(_) => {}
                None => return None,
            }
        }
        self.memory.write().unwrap().remove(key);
        None
    }

    fn get_disk(&self, key: &ResourceKey) -> Option<Arc<SpamListData>> {
        let path = self.dir.join(key.cache_file_name());
        let age = file_age(&path)?;

        if self.is_expired(age) {
            debug!(path = %path.display(), "Cache file expired, removing");
            if let Err(e) = std::fs::remove_file(&path) {
                warn!(path = %path.display(), error = %e, "Failed to remove expired cache file");
            }
            return None;
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read cache file");
                return None;
            }
        };

        let data: SpamListData = match serde_json::from_str(&content) {
            Ok(data) => data,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Discarding corrupt cache file");
                let _ = std::fs::remove_file(&path);
                return None;
            }
        };

        debug!(key = %key, "Promoted list from disk cache");
        let data = Arc::new(data);
        // Backdate the memory entry so both tiers expire together
        let stored_at = Instant::now().checked_sub(age).unwrap_or_else(Instant::now);
        self.memory.write().unwrap().insert(
            key.clone(),
            CachedList {
                data: Arc::clone(&data),
                stored_at,
            },
        );
        Some(data)
    }

    fn write_disk(&self, key: &ResourceKey, data: &SpamListData) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(key.cache_file_name());
        let tmp = self.dir.join(format!("{}.tmp", key.cache_file_name()));

        let content = serde_json::to_string(data)?;
        std::fs::write(&tmp, content)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }
}

fn file_age(path: &Path) -> Option<Duration> {
    std::fs::metadata(path).ok()?.modified().ok()?.elapsed().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use spamlists_core::Network;

    fn key() -> ResourceKey {
        ResourceKey::nft(Network::EthMainnet)
    }

    fn data(entries: &[&str]) -> SpamListData {
        SpamListData::new(entries.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_memory_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ListCache::new(dir.path(), None);
        assert!(cache.get(&key()).is_none());

        cache.put(&key(), data(&["1/0xaaa/10"]));
        let got = cache.get(&key()).unwrap();
        assert_eq!(got.entries, vec!["1/0xaaa/10"]);
    }

    #[test]
    fn test_disk_tier_survives_new_cache() {
        let dir = tempfile::tempdir().unwrap();
        {
            let cache = ListCache::new(dir.path(), None);
            cache.put(&key(), data(&["1/0xaaa/10"]));
        }

        let cache = ListCache::new(dir.path(), None);
        let got = cache.get(&key()).unwrap();
        assert_eq!(got.entries, vec!["1/0xaaa/10"]);
    }

    #[test]
    fn test_cache_file_uses_canonical_field() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ListCache::new(dir.path(), None);
        cache.put(&key(), data(&["1/0xaaa/10"]));

        let file = dir.path().join(key().cache_file_name());
        let content = std::fs::read_to_string(file).unwrap();
        assert!(content.contains("SpamContracts"));
    }

    #[test]
    fn test_corrupt_disk_entry_is_a_miss() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join(key().cache_file_name());
        std::fs::write(&file, "not json").unwrap();

        let cache = ListCache::new(dir.path(), None);
        assert!(cache.get(&key()).is_none());
        assert!(!file.exists(), "corrupt file should be removed");
    }

    #[test]
    fn test_expired_entries_miss() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ListCache::new(dir.path(), Some(Duration::from_millis(10)));
        cache.put(&key(), data(&["1/0xaaa/10"]));

        std::thread::sleep(Duration::from_millis(50));
        assert!(cache.get(&key()).is_none());
    }

    #[test]
    fn test_unexpired_entries_hit() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ListCache::new(dir.path(), Some(DEFAULT_TTL));
        cache.put(&key(), data(&["1/0xaaa/10"]));
        assert!(cache.get(&key()).is_some());
    }

    #[test]
    fn test_clear_removes_files_and_memory() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ListCache::new(dir.path(), None);
        cache.put(&key(), data(&["1/0xaaa/10"]));
        cache.put(&ResourceKey::nft(Network::BaseMainnet), data(&["8453/0xbbb/20"]));

        cache.clear();

        assert!(cache.get(&key()).is_none());
        let json_files: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .flatten()
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "json"))
            .collect();
        assert!(json_files.is_empty());
    }

    #[test]
    fn test_clear_without_cache_dir_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ListCache::new(dir.path().join("never-created"), None);
        cache.clear();
    }
}
