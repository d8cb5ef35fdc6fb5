//! Live exchange rate source abstraction.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;

#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetches the latest rate table relative to `base` (one unit of `base`
    /// equals `rate` units of each listed currency).
    async fn fetch_rates(&self, base: &str) -> Result<HashMap<String, f64>>;
}
