//! Span-tag extraction and timestamp alignment

use serde::Serialize;

use crate::trace::Trace;

/// Operation name a span must carry to qualify
pub const HANDLE_OPERATION: &str = "handle";
/// Tag recording whether the service kept the last input
pub const KEPT_TAG: &str = "isLastInputKept";
/// Tag recording whether the service rewrote the last input
pub const REWRITTEN_TAG: &str = "isLastInputRewritten";

/// One `(timestamp, value)` sample taken from a qualifying span
///
/// The value is the tag value exactly as it appeared in the document;
/// truthiness is only interpreted when rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalEvent {
    pub timestamp: i64,
    pub value: serde_json::Value,
}

/// The two parallel signal sequences, sorted by timestamp ascending
#[derive(Debug, Clone, Default, Serialize)]
pub struct SignalSeries {
    pub kept: Vec<SignalEvent>,
    pub rewritten: Vec<SignalEvent>,
}

/// Extract the kept/rewritten signal sequences from a trace collection.
///
/// Walks every span of every trace and considers only spans whose operation
/// is [`HANDLE_OPERATION`]. Each qualifying span contributes one event per
/// matching tag; a span with no [`REWRITTEN_TAG`] still contributes a default
/// `(startTime, false)` rewritten event, which keeps the two sequences
/// index-aligned whenever every qualifying span carries a kept tag.
///
/// Both sequences are sorted by timestamp ascending; the sort is stable, so
/// events with equal timestamps keep their input order.
pub fn extract_signals(traces: &[Trace]) -> SignalSeries {
    let mut kept = Vec::new();
    let mut rewritten = Vec::new();

    for trace in traces {
        for span in &trace.spans {
            if span.operation_name != HANDLE_OPERATION {
                continue;
            }

            let mut has_rewritten_tag = false;
            for tag in &span.tags {
                if tag.key == KEPT_TAG {
                    kept.push(SignalEvent {
                        timestamp: span.start_time,
                        value: tag.value.clone(),
                    });
                }
                if tag.key == REWRITTEN_TAG {
                    has_rewritten_tag = true;
                    rewritten.push(SignalEvent {
                        timestamp: span.start_time,
                        value: tag.value.clone(),
                    });
                }
            }

            if !has_rewritten_tag {
                rewritten.push(SignalEvent {
                    timestamp: span.start_time,
                    value: serde_json::Value::Bool(false),
                });
            }
        }
    }

    kept.sort_by_key(|event| event.timestamp);
    rewritten.sort_by_key(|event| event.timestamp);

    SignalSeries { kept, rewritten }
}
