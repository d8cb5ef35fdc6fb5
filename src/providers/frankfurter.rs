use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::rate_provider::RateProvider;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Frankfurter-style rate source: `GET /latest?from=<base>` returns a JSON
/// document with a `rates` object keyed by currency code.
pub struct FrankfurterProvider {
    base_url: String,
}

impl FrankfurterProvider {
    pub fn new(base_url: &str) -> Self {
        FrankfurterProvider {
            base_url: base_url.to_string(),
        }
    }
}

#[derive(Deserialize, Debug)]
struct LatestRatesResponse {
    #[allow(dead_code)]
    base: Option<String>,
    #[allow(dead_code)]
    date: Option<String>,
    rates: HashMap<String, f64>,
}

#[async_trait]
impl RateProvider for FrankfurterProvider {
    #[instrument(
        name = "FrankfurterRateFetch",
        skip(self),
        fields(base = %base)
    )]
    async fn fetch_rates(&self, base: &str) -> Result<HashMap<String, f64>> {
        let url = format!("{}/latest?from={}", self.base_url, base);
        debug!("Requesting exchange rates from {}", url);

        let client = reqwest::Client::builder()
            .user_agent("kurs/1.0")
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for base: {} URL: {}", e, base, url))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for base: {}",
                response.status(),
                base
            ));
        }

        let text = response.text().await?;
        let data: LatestRatesResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse rates response for {}: {}", base, e))?;

        debug!("Received {} rates for base {}", data.rates.len(), base);
        Ok(data.rates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn create_mock_server(base: &str, mock_response: &str) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/latest"))
            .and(query_param("from", base))
            .respond_with(ResponseTemplate::new(200).set_body_string(mock_response))
            .mount(&mock_server)
            .await;

        mock_server
    }

    #[tokio::test]
    async fn test_successful_rates_fetch() {
        let mock_response = r#"{
            "base": "IDR",
            "date": "2024-11-01",
            "rates": {
                "USD": 0.000065,
                "SGD": 0.000088
            }
        }"#;

        let mock_server = create_mock_server("IDR", mock_response).await;
        let provider = FrankfurterProvider::new(&mock_server.uri());

        let rates = provider.fetch_rates("IDR").await.unwrap();
        assert_eq!(rates.get("USD"), Some(&0.000065));
        assert_eq!(rates.get("SGD"), Some(&0.000088));
        assert_eq!(rates.len(), 2);
    }

    #[tokio::test]
    async fn test_api_error_response() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/latest"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let provider = FrankfurterProvider::new(&mock_server.uri());
        let result = provider.fetch_rates("IDR").await;
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "HTTP error: 500 Internal Server Error for base: IDR"
        );
    }

    #[tokio::test]
    async fn test_malformed_response() {
        let mock_response = r#"{"base": "IDR", "ratess": {}}"#; // "ratess" instead of "rates"
        let mock_server = create_mock_server("IDR", mock_response).await;
        let provider = FrankfurterProvider::new(&mock_server.uri());

        let result = provider.fetch_rates("IDR").await;
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to parse rates response for IDR")
        );
    }

    #[tokio::test]
    async fn test_empty_response_body() {
        let mock_server = create_mock_server("IDR", "").await;
        let provider = FrankfurterProvider::new(&mock_server.uri());

        let result = provider.fetch_rates("IDR").await;
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to parse rates response for IDR")
        );
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        // Nothing listens on this port
        let provider = FrankfurterProvider::new("http://127.0.0.1:9");
        let result = provider.fetch_rates("IDR").await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Request error"));
    }
}
