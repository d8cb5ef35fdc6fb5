use crate::cache::{CachedRates, RateCache};
use anyhow::Result;
use async_trait::async_trait;
use fjall::{Keyspace, PartitionCreateOptions, PartitionHandle};
use std::path::Path;
use tracing::debug;

const PARTITION_NAME: &str = "currency";
const CACHE_KEY: &str = "currency_rates";

/// Persistent cache store backed by a fjall keyspace. Holds the single rate
/// record under a well-known key; every refresh overwrites it in place.
pub struct FjallStore {
    _keyspace: Keyspace,
    partition: PartitionHandle,
}

impl FjallStore {
    pub fn open(path: &Path) -> Result<Self> {
        std::fs::create_dir_all(path)?;

        let keyspace = fjall::Config::new(path).open()?;
        let partition =
            keyspace.open_partition(PARTITION_NAME, PartitionCreateOptions::default())?;
        Ok(Self {
            _keyspace: keyspace,
            partition,
        })
    }

    fn read_entry(&self) -> Result<Option<CachedRates>> {
        match self.partition.get(CACHE_KEY)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl RateCache for FjallStore {
    async fn get(&self) -> Option<CachedRates> {
        match self.read_entry() {
            Ok(Some(entry)) => {
                debug!("Cache HIT");
                Some(entry)
            }
            Ok(None) => {
                debug!("Cache MISS");
                None
            }
            Err(e) => {
                // A corrupt or unreadable record behaves like an empty cache.
                debug!("FjallStore get error: {}", e);
                None
            }
        }
    }

    async fn put(&self, entry: CachedRates) {
        let res: Result<()> = (|| {
            self.partition
                .insert(CACHE_KEY, serde_json::to_vec(&entry)?)?;
            debug!("Cache PUT");
            Ok(())
        })();
        if let Err(e) = res {
            debug!("FjallStore put error: {}", e);
        }
    }
}
