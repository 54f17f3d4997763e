//! Randomized request loop against the service under test

use futures::stream::{self, StreamExt};
use std::time::{Duration, Instant};

use super::sampler::BimodalSampler;

/// Traffic generator configuration
#[derive(Debug, Clone)]
pub struct LoadConfig {
    /// Base URL of the service under test
    pub target_url: String,
    /// Number of requests to issue
    pub requests: usize,
    /// Seed for the args sampler
    pub seed: u64,
    /// Inclusive low-mode sample range
    pub low_range: (i64, i64),
    /// Inclusive high-mode sample range
    pub high_range: (i64, i64),
    /// Fixed values prepended to the sampled `args` value
    pub args_prefix: Vec<i64>,
    /// Value of the `objective` header sent with every request
    pub objective: u64,
    /// Worker-pool width; 1 issues requests one at a time
    pub concurrency: usize,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            target_url: "http://localhost:8080".to_string(),
            requests: 400,
            seed: 1,
            low_range: (10, 50),
            high_range: (150, 200),
            args_prefix: Vec::new(),
            objective: 10_000,
            concurrency: 1,
        }
    }
}

/// Outcome summary for one generator run
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub requests: usize,
    pub failures: usize,
    pub elapsed: Duration,
}

impl LoadReport {
    pub fn requests_per_sec(&self) -> f64 {
        if self.elapsed.as_secs_f64() == 0.0 {
            return 0.0;
        }
        self.requests as f64 / self.elapsed.as_secs_f64()
    }
}

/// Target URL plus the comma-joined `args` query parameter
fn request_url(target: &str, prefix: &[i64], sampled: i64) -> String {
    let mut args: Vec<String> = prefix.iter().map(|v| v.to_string()).collect();
    args.push(sampled.to_string());
    format!("{}?args={}", target, args.join(","))
}

/// Issue the configured number of randomized requests.
///
/// URLs are sampled up front, so the issued set is deterministic for a given
/// seed regardless of the concurrency bound. Responses are drained and
/// discarded; transport failures are counted into the report and logged, not
/// retried.
pub async fn run_load(config: &LoadConfig) -> LoadReport {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .expect("Failed to create HTTP client");

    let mut sampler = BimodalSampler::new(config.seed, config.low_range, config.high_range);
    let urls: Vec<String> = (0..config.requests)
        .map(|_| request_url(&config.target_url, &config.args_prefix, sampler.sample()))
        .collect();

    let objective = config.objective.to_string();
    let concurrency = config.concurrency.max(1);

    let start = Instant::now();
    let outcomes: Vec<bool> = stream::iter(urls)
        .map(|url| {
            let client = client.clone();
            let objective = objective.clone();
            async move {
                tracing::info!("requesting {}", url);
                let response = match client
                    .get(&url)
                    .header("objective", objective.as_str())
                    .send()
                    .await
                {
                    Ok(response) => response,
                    Err(e) => {
                        tracing::warn!("request to {} failed: {}", url, e);
                        return false;
                    }
                };

                let status = response.status();
                // Drain the body; nothing downstream consumes it.
                match response.bytes().await {
                    Ok(_) => {
                        tracing::debug!("{} -> {}", url, status);
                        true
                    }
                    Err(e) => {
                        tracing::warn!("failed to read response from {}: {}", url, e);
                        false
                    }
                }
            }
        })
        .buffer_unordered(concurrency)
        .collect()
        .await;

    LoadReport {
        requests: config.requests,
        failures: outcomes.iter().filter(|ok| !**ok).count(),
        elapsed: start.elapsed(),
    }
}
