pub mod extract;
pub mod render;

pub use extract::{
    extract_signals, SignalEvent, SignalSeries, HANDLE_OPERATION, KEPT_TAG, REWRITTEN_TAG,
};
pub use render::{is_truthy, render_tsv};

use std::path::Path;

use crate::trace::{LoadError, TraceDocument};

/// Convenience function to load a trace file and render the aligned table.
///
/// Returns `Ok(None)` when the file does not exist; that is the one tolerated
/// failure, and the caller decides how to report it. Every other fault (I/O,
/// malformed JSON, missing required keys) propagates.
pub fn analyze_file(path: &Path) -> Result<Option<String>, LoadError> {
    if !path.is_file() {
        return Ok(None);
    }

    let document = TraceDocument::load(path)?;
    let series = extract_signals(&document.data);
    Ok(Some(render_tsv(&series)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = analyze_file(&dir.path().join("absent.json")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_analyze_renders_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traces.json");
        std::fs::write(
            &path,
            r#"{"data": [{"traceID": "t1", "spans": [{
                "operationName": "handle",
                "startTime": 5,
                "tags": [{"key": "isLastInputKept", "value": true}]
            }]}]}"#,
        )
        .unwrap();

        let table = analyze_file(&path).unwrap().unwrap();
        assert_eq!(table, "1\t0\n");
    }

    #[test]
    fn test_analyze_propagates_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traces.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(analyze_file(&path).is_err());
    }
}
