// In-memory TTL cache for dashboard snapshots
use crate::domain::dashboard::Dashboard;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

struct CachedSnapshot {
    stored_at: Instant,
    dashboard: Arc<Dashboard>,
}

impl CachedSnapshot {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.stored_at.elapsed() < ttl
    }
}

/// Bounded cache keyed by dashboard id. Entries older than `ttl` are
/// treated as missing; when full, the oldest entry makes room.
pub struct SnapshotCache {
    ttl: Duration,
    max_entries: usize,
    entries: RwLock<HashMap<String, CachedSnapshot>>,
}

impl SnapshotCache {
    pub fn new(ttl: Duration, max_entries: usize) -> Self {
        Self {
            ttl,
            max_entries,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub async fn get(&self, id: &str) -> Option<Arc<Dashboard>> {
        let entries = self.entries.read().await;
        entries
            .get(id)
            .filter(|cached| cached.is_fresh(self.ttl))
            .map(|cached| cached.dashboard.clone())
    }

    pub async fn insert(&self, id: &str, dashboard: Arc<Dashboard>) {
        if self.max_entries == 0 {
            return;
        }

        let mut entries = self.entries.write().await;
        let ttl = self.ttl;
        entries.retain(|_, cached| cached.is_fresh(ttl));

        if !entries.contains_key(id) && entries.len() >= self.max_entries {
            let oldest = entries
                .iter()
                .min_by_key(|(_, cached)| cached.stored_at)
                .map(|(key, _)| key.clone());
            if let Some(key) = oldest {
                tracing::debug!("Evicting cached snapshot {}", key);
                entries.remove(&key);
            }
        }

        entries.insert(
            id.to_string(),
            CachedSnapshot {
                stored_at: Instant::now(),
                dashboard,
            },
        );
    }

    pub async fn remove(&self, id: &str) -> bool {
        self.entries.write().await.remove(id).is_some()
    }

    /// Drop every entry, returning how many were held
    pub async fn clear(&self) -> usize {
        let mut entries = self.entries.write().await;
        let count = entries.len();
        entries.clear();
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(title: &str) -> Arc<Dashboard> {
        Arc::new(Dashboard::new(title, Vec::new(), Vec::new()))
    }

    #[tokio::test]
    async fn test_get_returns_fresh_entry() {
        let cache = SnapshotCache::new(Duration::from_secs(300), 10);
        cache.insert("nvda", snapshot("NVDA")).await;

        let hit = cache.get("nvda").await.unwrap();
        assert_eq!(hit.title, "NVDA");
        assert!(cache.get("tsla").await.is_none());
    }

    #[tokio::test]
    async fn test_expired_entry_is_a_miss() {
        let cache = SnapshotCache::new(Duration::ZERO, 10);
        cache.insert("nvda", snapshot("NVDA")).await;
        assert!(cache.get("nvda").await.is_none());
    }

    #[tokio::test]
    async fn test_full_cache_evicts_oldest() {
        let cache = SnapshotCache::new(Duration::from_secs(300), 2);
        cache.insert("a", snapshot("A")).await;
        tokio::time::sleep(Duration::from_millis(2)).await;
        cache.insert("b", snapshot("B")).await;
        tokio::time::sleep(Duration::from_millis(2)).await;
        cache.insert("c", snapshot("C")).await;

        assert!(cache.get("a").await.is_none());
        assert!(cache.get("b").await.is_some());
        assert!(cache.get("c").await.is_some());
    }

    #[tokio::test]
    async fn test_replacing_existing_key_does_not_evict() {
        let cache = SnapshotCache::new(Duration::from_secs(300), 2);
        cache.insert("a", snapshot("A")).await;
        cache.insert("b", snapshot("B")).await;
        cache.insert("b", snapshot("B2")).await;

        assert!(cache.get("a").await.is_some());
        assert_eq!(cache.get("b").await.unwrap().title, "B2");
    }

    #[tokio::test]
    async fn test_zero_capacity_disables_caching() {
        let cache = SnapshotCache::new(Duration::from_secs(300), 0);
        cache.insert("a", snapshot("A")).await;
        assert!(cache.get("a").await.is_none());
    }

    #[tokio::test]
    async fn test_remove_and_clear() {
        let cache = SnapshotCache::new(Duration::from_secs(300), 10);
        cache.insert("a", snapshot("A")).await;
        cache.insert("b", snapshot("B")).await;

        assert!(cache.remove("a").await);
        assert!(!cache.remove("a").await);
        assert_eq!(cache.clear().await, 1);
        assert!(cache.get("b").await.is_none());
    }
}
