//! HTTP client for retrieving published sheet exports.

use std::time::Duration;

use reqwest::Client;

use crate::config::Settings;
use crate::error::FeedError;
use crate::models::Dataset;

/// HTTP client bound to the configured feed endpoints.
#[derive(Clone)]
pub struct FeedClient {
    client: Client,
    harga_url: String,
    stok_url: String,
}

impl FeedClient {
    /// Create a new feed client from the application settings.
    pub fn new(settings: &Settings) -> Self {
        let client = Client::builder()
            .user_agent(&settings.user_agent)
            .timeout(Duration::from_secs(settings.request_timeout))
            .gzip(true)
            .brotli(true)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            harga_url: settings.harga_url.clone(),
            stok_url: settings.stok_url.clone(),
        }
    }

    fn url_for(&self, dataset: Dataset) -> &str {
        match dataset {
            Dataset::Harga => &self.harga_url,
            Dataset::Stok => &self.stok_url,
        }
    }

    /// Fetch the raw CSV body for a dataset.
    ///
    /// A non-success status is an error; redirects are followed by the
    /// underlying client (sheet exports bounce through one).
    pub async fn fetch(&self, dataset: Dataset) -> Result<String, FeedError> {
        let response = self
            .client
            .get(self.url_for(dataset))
            .send()
            .await
            .map_err(|source| FeedError::Fetch { dataset, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status { dataset, status });
        }

        response
            .text()
            .await
            .map_err(|source| FeedError::Fetch { dataset, source })
    }
}
