//! Rate fetch with cached, degradable results.
//!
//! `fetch_exchange_rates` is infallible by contract: a balance display must
//! never block or crash on a rate lookup, so every failure path resolves to
//! the best table available (fresh cache, live fetch, stale cache, then the
//! static fallback).

use crate::cache::{CachedRates, RateCache};
use crate::currency::{BASE_CURRENCY, fallback_rates};
use crate::rate_provider::RateProvider;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct RateService {
    provider: Arc<dyn RateProvider>,
    cache: Arc<dyn RateCache>,
}

impl RateService {
    pub fn new(provider: Arc<dyn RateProvider>, cache: Arc<dyn RateCache>) -> Self {
        RateService { provider, cache }
    }

    /// Returns a usable IDR-based rate table; never fails.
    ///
    /// A cached table younger than an hour is served without a network call.
    /// On refresh, live rates are merged over the fallback table and IDR is
    /// pinned to 1 regardless of what the source reports for it. When the
    /// fetch fails, a stale cache entry beats the fallback table: the stale
    /// data still covers currencies the static estimates do not.
    pub async fn fetch_exchange_rates(&self) -> HashMap<String, f64> {
        let now = Utc::now().timestamp_millis();
        let cached = self.cache.get().await;

        if let Some(entry) = &cached {
            if entry.is_fresh(now) {
                debug!("Serving exchange rates from cache");
                return entry.rates.clone();
            }
        }

        match self.provider.fetch_rates(BASE_CURRENCY).await {
            Ok(live) => {
                let mut merged = fallback_rates();
                merged.extend(live);
                // All stored amounts are IDR; the base rate is 1 by definition.
                merged.insert(BASE_CURRENCY.to_string(), 1.0);

                self.cache
                    .put(CachedRates {
                        timestamp: now,
                        rates: merged.clone(),
                    })
                    .await;
                merged
            }
            Err(e) => {
                warn!("Exchange rate fetch failed, degrading: {}", e);
                match cached {
                    Some(entry) => entry.rates,
                    None => fallback_rates(),
                }
            }
        }
    }
}
