//! Tracebench CLI
//!
//! Run with: cargo run -- <command>
//!
//! Commands:
//! - `generate [requests]`: issue randomized requests at the target service
//! - `fetch [limit]`: download recent traces into the traces file
//! - `analyze [file]`: print the aligned kept/rewritten signal table
//!
//! Environment variables:
//! - TRACEBENCH_TARGET_URL: service under test (default: http://localhost:8080)
//! - TRACEBENCH_REQUESTS: request count (default: 400)
//! - TRACEBENCH_SEED: args sampler seed (default: 1)
//! - TRACEBENCH_CONCURRENCY: request worker-pool width (default: 1)
//! - TRACEBENCH_OBJECTIVE: `objective` header value (default: 10000)
//! - TRACEBENCH_ARGS_LOW: inclusive low sample range as "lo,hi" (default: 10,50)
//! - TRACEBENCH_ARGS_HIGH: inclusive high sample range as "lo,hi" (default: 150,200)
//! - TRACEBENCH_ARGS_PREFIX: comma-separated args prepended to the sample (default: empty)
//! - TRACEBENCH_BACKEND_URL: tracing backend query service (default: http://localhost:16686)
//! - TRACEBENCH_SERVICE: traced service name (default: box-8080)
//! - TRACEBENCH_LIMIT: trace fetch limit (default: 400)
//! - TRACEBENCH_TRACES_FILE: traces file path (default: tracesSingle.json)
//! - RUST_LOG: log level (default: tracebench=info)

use std::path::PathBuf;

use tracebench::fetch::{FetchConfig, TraceFetcher};
use tracebench::loadgen::{run_load, LoadConfig};
use tracebench::signal::analyze_file;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_TRACES_FILE: &str = "tracesSingle.json";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tracebench=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("generate") => generate(args.get(2)).await,
        Some("fetch") => fetch(args.get(2)).await,
        Some("analyze") => analyze(args.get(2)),
        _ => {
            usage();
            Ok(())
        }
    }
}

async fn generate(count_arg: Option<&String>) -> Result<(), Box<dyn std::error::Error>> {
    let defaults = LoadConfig::default();

    let config = LoadConfig {
        target_url: std::env::var("TRACEBENCH_TARGET_URL").unwrap_or(defaults.target_url),
        requests: count_arg
            .and_then(|s| s.parse().ok())
            .or_else(|| env_parse("TRACEBENCH_REQUESTS"))
            .unwrap_or(defaults.requests),
        seed: env_parse("TRACEBENCH_SEED").unwrap_or(defaults.seed),
        low_range: env_range("TRACEBENCH_ARGS_LOW").unwrap_or(defaults.low_range),
        high_range: env_range("TRACEBENCH_ARGS_HIGH").unwrap_or(defaults.high_range),
        args_prefix: env_list("TRACEBENCH_ARGS_PREFIX").unwrap_or(defaults.args_prefix),
        objective: env_parse("TRACEBENCH_OBJECTIVE").unwrap_or(defaults.objective),
        concurrency: env_parse("TRACEBENCH_CONCURRENCY").unwrap_or(defaults.concurrency),
    };

    tracing::info!(
        "generating {} requests against {}",
        config.requests,
        config.target_url
    );

    let report = run_load(&config).await;

    println!("Load complete");
    println!("  Requests: {}", report.requests);
    println!("  Failures: {}", report.failures);
    println!("  Elapsed:  {:?}", report.elapsed);
    println!("  Rate:     {:.1} req/s", report.requests_per_sec());

    Ok(())
}

async fn fetch(limit_arg: Option<&String>) -> Result<(), Box<dyn std::error::Error>> {
    let defaults = FetchConfig::default();

    let config = FetchConfig {
        backend_url: std::env::var("TRACEBENCH_BACKEND_URL").unwrap_or(defaults.backend_url),
        service: std::env::var("TRACEBENCH_SERVICE").unwrap_or(defaults.service),
        limit: limit_arg
            .and_then(|s| s.parse().ok())
            .or_else(|| env_parse("TRACEBENCH_LIMIT"))
            .unwrap_or(defaults.limit),
    };
    let path = traces_file();

    let body = TraceFetcher::new().fetch_raw(&config).await?;
    std::fs::write(&path, &body)?;

    tracing::info!("saved {} bytes to {}", body.len(), path.display());
    Ok(())
}

fn analyze(file_arg: Option<&String>) -> Result<(), Box<dyn std::error::Error>> {
    let path = file_arg.map(PathBuf::from).unwrap_or_else(traces_file);

    match analyze_file(&path)? {
        Some(table) => print!("{}", table),
        None => eprintln!(
            "trace file '{}' does not exist; nothing to analyze",
            path.display()
        ),
    }

    Ok(())
}

fn traces_file() -> PathBuf {
    std::env::var("TRACEBENCH_TRACES_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_TRACES_FILE))
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}

/// Parse "lo,hi" into an inclusive range pair
fn env_range(name: &str) -> Option<(i64, i64)> {
    let raw = std::env::var(name).ok()?;
    let (lo, hi) = raw.split_once(',')?;
    Some((lo.trim().parse().ok()?, hi.trim().parse().ok()?))
}

/// Parse a comma-separated integer list
fn env_list(name: &str) -> Option<Vec<i64>> {
    let raw = std::env::var(name).ok()?;
    Some(
        raw.split(',')
            .filter(|s| !s.trim().is_empty())
            .filter_map(|s| s.trim().parse().ok())
            .collect(),
    )
}

fn usage() {
    println!("tracebench: trace-driven evaluation harness");
    println!();
    println!("Usage: tracebench <command>");
    println!();
    println!("Commands:");
    println!("  generate [requests]   issue randomized requests at the target service");
    println!("  fetch [limit]         download recent traces into the traces file");
    println!("  analyze [file]        print the aligned kept/rewritten signal table");
    println!();
    println!("Configuration is read from TRACEBENCH_* environment variables; see the");
    println!("crate documentation for the full list.");
}
