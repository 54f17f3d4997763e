pub mod client;

pub use client::{FetchConfig, FetchError, TraceFetcher};
