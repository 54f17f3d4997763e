//! Tracebench: trace-driven evaluation harness
//!
//! A small toolkit for evaluating a traced, input-rewriting HTTP service:
//! drive it with randomized requests and capture its traces from the tracing
//! backend's query API, then distill each handled request into two aligned
//! boolean signals (`isLastInputKept` / `isLastInputRewritten`).
//!
//! # Features
//!
//! - **Trace model**: serde view of the backend's trace query response
//! - **Signal extraction**: timestamp-aligned kept/rewritten sequences from
//!   `handle` spans, with default-fill for missing rewritten tags
//! - **Traffic generation**: seeded bimodal `args` sampling through a
//!   bounded-concurrency request pool
//! - **Trace capture**: verbatim persistence of the backend's JSON response
//!
//! # Example
//!
//! ```
//! use tracebench::signal::{extract_signals, render_tsv};
//! use tracebench::trace::TraceDocument;
//!
//! let json = r#"{"data": [{"traceID": "t1", "spans": [{
//!     "operationName": "handle",
//!     "startTime": 5,
//!     "tags": [{"key": "isLastInputKept", "value": true}]
//! }]}]}"#;
//!
//! let doc = TraceDocument::from_json(json.as_bytes()).unwrap();
//! let series = extract_signals(&doc.data);
//! assert_eq!(render_tsv(&series), "1\t0\n");
//! ```

pub mod fetch;
pub mod loadgen;
pub mod signal;
pub mod trace;

// Re-export commonly used types
pub use fetch::{FetchConfig, FetchError, TraceFetcher};
pub use loadgen::{run_load, LoadConfig, LoadReport};
pub use signal::{extract_signals, render_tsv, SignalEvent, SignalSeries};
pub use trace::{Span, Tag, Trace, TraceDocument};
