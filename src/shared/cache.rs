//! In-memory cache for display data read by the public pages.
//!
//! Every successful fetch is stored. Within the TTL the stored copy is served
//! without touching the database. Admin mutations call [`ContentCache::invalidate`],
//! which marks the copy stale but keeps it: if the next fetch fails, the stale
//! copy is still the best answer we have (last-known-good).

use std::future::Future;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use crate::core::error::Result;

struct CacheEntry<T> {
    value: T,
    fetched_at: Instant,
    stale: bool,
}

pub struct ContentCache<T> {
    entry: RwLock<Option<CacheEntry<T>>>,
    ttl: Duration,
}

impl<T> std::fmt::Debug for ContentCache<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentCache")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl<T: Clone> ContentCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entry: RwLock::new(None),
            ttl,
        }
    }

    /// Cached value if it is still within the TTL and not invalidated
    pub async fn fresh(&self) -> Option<T> {
        let entry = self.entry.read().await;
        entry
            .as_ref()
            .filter(|e| !e.stale && e.fetched_at.elapsed() < self.ttl)
            .map(|e| e.value.clone())
    }

    /// Last successfully fetched value, regardless of age
    pub async fn last_known(&self) -> Option<T> {
        let entry = self.entry.read().await;
        entry.as_ref().map(|e| e.value.clone())
    }

    pub async fn store(&self, value: T) {
        let mut entry = self.entry.write().await;
        *entry = Some(CacheEntry {
            value,
            fetched_at: Instant::now(),
            stale: false,
        });
    }

    /// Force the next read to go to the database
    pub async fn invalidate(&self) {
        let mut entry = self.entry.write().await;
        if let Some(e) = entry.as_mut() {
            e.stale = true;
        }
    }

    /// Serve fresh cache, else fetch; on fetch failure use the last known value,
    /// else the defaults. Never fails.
    pub async fn load_or_fallback<F, Fut, D>(&self, what: &str, fetch: F, defaults: D) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
        D: FnOnce() -> T,
    {
        if let Some(value) = self.fresh().await {
            return value;
        }

        match fetch().await {
            Ok(value) => {
                self.store(value.clone()).await;
                value
            }
            Err(e) => match self.last_known().await {
                Some(value) => {
                    tracing::warn!("Failed to fetch {}, serving cached copy: {}", what, e);
                    value
                }
                None => {
                    tracing::warn!("Failed to fetch {}, serving defaults: {}", what, e);
                    defaults()
                }
            },
        }
    }
}
