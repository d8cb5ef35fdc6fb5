pub mod cache;
pub mod config;
pub mod currency;
pub mod display;
pub mod log;
pub mod providers;
pub mod rate_provider;
pub mod service;
pub mod store;
pub mod ui;

use crate::cache::RateCache;
use crate::config::{AppConfig, DEFAULT_RATE_SOURCE_URL};
use crate::providers::frankfurter::FrankfurterProvider;
use crate::service::RateService;
use crate::store::{FjallStore, MemoryStore};
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, warn};

pub enum AppCommand {
    /// Fetch rates and render the full table.
    Rates,
    /// List the supported currency set.
    Currencies,
    /// Convert an IDR amount into a display currency.
    Convert {
        amount: f64,
        currency: Option<String>,
    },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    // The currency list needs no rates, config or network; it must work
    // before any configuration exists
    if let AppCommand::Currencies = command {
        println!("{}", display::currencies_table());
        return Ok(());
    }

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let base_url = config
        .providers
        .frankfurter
        .as_ref()
        .map_or(DEFAULT_RATE_SOURCE_URL, |p| &p.base_url);
    let provider = Arc::new(FrankfurterProvider::new(base_url));

    let cache: Arc<dyn RateCache> = match config.data_path().and_then(|p| FjallStore::open(&p)) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            // Without a disk store rates are refetched each run; still usable.
            warn!("Could not open disk cache, using in-memory store: {}", e);
            Arc::new(MemoryStore::new())
        }
    };

    let service = RateService::new(provider, cache);
    let rates = service.fetch_exchange_rates().await;

    match command {
        AppCommand::Rates => println!("{}", display::rates_table(&rates)),
        AppCommand::Convert { amount, currency } => {
            let currency = currency.as_deref().unwrap_or(&config.currency);
            println!("{}", display::conversion_line(amount, currency, &rates));
        }
        AppCommand::Currencies => unreachable!("handled above"),
    }

    Ok(())
}
