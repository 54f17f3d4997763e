//! Client for the tracing backend's trace query API

use std::time::Duration;

/// Trace query configuration
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Base URL of the tracing backend's query service
    pub backend_url: String,
    /// Service whose traces to fetch
    pub service: String,
    /// Maximum number of traces to request
    pub limit: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:16686".to_string(),
            service: "box-8080".to_string(),
            limit: 400,
        }
    }
}

impl FetchConfig {
    /// Full query URL for this configuration
    pub fn traces_url(&self) -> String {
        format!(
            "{}/api/traces?service={}&limit={}",
            self.backend_url, self.service, self.limit
        )
    }
}

/// Client for downloading stored traces
#[derive(Debug, Clone)]
pub struct TraceFetcher {
    http_client: reqwest::Client,
}

impl TraceFetcher {
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(30))
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            http_client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Fetch the raw trace query response.
    ///
    /// The body comes back untouched so callers can persist it verbatim.
    /// A non-2xx status is an error and yields no bytes.
    pub async fn fetch_raw(&self, config: &FetchConfig) -> Result<Vec<u8>, FetchError> {
        let url = config.traces_url();
        tracing::info!("fetching traces from {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(FetchError::Backend { status, message });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(body.to_vec())
    }
}

impl Default for TraceFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend returned status {status}: {message}")]
    Backend { status: u16, message: String },
}
