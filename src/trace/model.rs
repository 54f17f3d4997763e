//! Data model for the tracing backend's trace query response

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level document returned by the backend's `/api/traces` query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceDocument {
    pub data: Vec<Trace>,
}

/// One end-to-end request: an ordered collection of spans
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trace {
    #[serde(rename = "traceID", default)]
    pub trace_id: String,
    pub spans: Vec<Span>,
}

/// A single recorded unit of work within a trace
///
/// `operationName`, `startTime` and `tags` are required; their absence in the
/// input document is a deserialization error. Other keys the backend emits
/// (`duration`, `references`, `processID`, ...) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Span {
    #[serde(rename = "spanID", default)]
    pub span_id: String,
    pub operation_name: String,
    /// Start timestamp in the backend's units (microseconds for Jaeger);
    /// only its ordering matters here
    pub start_time: i64,
    pub tags: Vec<Tag>,
}

/// Key/value annotation attached to a span
///
/// The value is kept opaque and forwarded unchanged; it is typically a
/// boolean but nothing here depends on that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub key: String,
    pub value: serde_json::Value,
}

impl TraceDocument {
    /// Parse a document from raw JSON bytes
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Read and parse a document from a file
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let bytes = std::fs::read(path)?;
        Ok(Self::from_json(&bytes)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read trace file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse trace document: {0}")]
    Json(#[from] serde_json::Error),
}
