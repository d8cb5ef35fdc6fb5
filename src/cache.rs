//! Rate cache abstraction.
//!
//! The fetched rate table is cached under a single well-known key and
//! overwritten on every refresh. Storage failures are absorbed by the
//! implementations: a broken store behaves like an empty one.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// How long a cached rate table is served without a network refresh.
pub const CACHE_DURATION: Duration = Duration::from_secs(60 * 60);

/// The single cached record: a rate table and its creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedRates {
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub rates: HashMap<String, f64>,
}

impl CachedRates {
    pub fn is_fresh(&self, now_ms: i64) -> bool {
        now_ms - self.timestamp < CACHE_DURATION.as_millis() as i64
    }
}

#[async_trait]
pub trait RateCache: Send + Sync {
    async fn get(&self) -> Option<CachedRates>;
    async fn put(&self, entry: CachedRates);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_freshness_window() {
        let entry = CachedRates {
            timestamp: 0,
            rates: HashMap::new(),
        };
        let thirty_min = 30 * 60 * 1000;
        let two_hours = 2 * 60 * 60 * 1000;

        assert!(entry.is_fresh(thirty_min));
        assert!(!entry.is_fresh(two_hours));
    }

    #[test]
    fn test_cached_rates_round_trip() {
        let entry = CachedRates {
            timestamp: 1_700_000_000_000,
            rates: HashMap::from([("USD".to_string(), 0.000065)]),
        };
        let json = serde_json::to_string(&entry).unwrap();
        let parsed: CachedRates = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entry);
    }
}
