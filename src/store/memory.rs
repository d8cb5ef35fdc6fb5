use crate::cache::{CachedRates, RateCache};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// In-memory cache store. Used by tests and as a degraded stand-in when the
/// disk store cannot be opened.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Option<CachedRates>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RateCache for MemoryStore {
    async fn get(&self) -> Option<CachedRates> {
        let entry = self.inner.lock().await.clone();
        if entry.is_some() {
            debug!("Cache HIT");
        } else {
            debug!("Cache MISS");
        }
        entry
    }

    async fn put(&self, entry: CachedRates) {
        debug!("Cache PUT");
        *self.inner.lock().await = Some(entry);
    }
}
