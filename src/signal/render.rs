//! Plain-text rendering of aligned signal pairs

use serde_json::Value;

use super::extract::SignalSeries;

/// Truthiness of an opaque tag value.
///
/// `null`, `false`, numeric zero and empty strings, arrays and objects are
/// falsy; everything else is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// Render the aligned kept/rewritten table.
///
/// One line per kept event: `K\tR\n`, where `K` is `1` if the kept value is
/// truthy else `0`, and `R` likewise for the rewritten value at the same
/// index. No header, no trailing metadata. Rewritten entries beyond
/// `kept.len()` are ignored.
///
/// # Panics
///
/// Panics with an index-out-of-bounds if the rewritten sequence is shorter
/// than the kept sequence. A length mismatch means the default-fill invariant
/// was violated upstream and must stay observable instead of being truncated
/// away.
pub fn render_tsv(series: &SignalSeries) -> String {
    let mut out = String::with_capacity(series.kept.len() * 4);

    for i in 0..series.kept.len() {
        let kept = if is_truthy(&series.kept[i].value) { 1 } else { 0 };
        let rewritten = if is_truthy(&series.rewritten[i].value) { 1 } else { 0 };
        out.push_str(&format!("{}\t{}\n", kept, rewritten));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::extract::SignalEvent;
    use serde_json::json;

    fn event(timestamp: i64, value: serde_json::Value) -> SignalEvent {
        SignalEvent { timestamp, value }
    }

    #[test]
    fn test_renders_tab_separated_pairs() {
        let series = SignalSeries {
            kept: vec![event(5, json!(true)), event(9, json!(false))],
            rewritten: vec![event(5, json!(false)), event(9, json!(true))],
        };

        assert_eq!(render_tsv(&series), "1\t0\n0\t1\n");
    }

    #[test]
    fn test_line_count_and_shape() {
        let series = SignalSeries {
            kept: vec![
                event(1, json!(true)),
                event(2, json!(true)),
                event(3, json!(false)),
            ],
            rewritten: vec![
                event(1, json!(false)),
                event(2, json!(true)),
                event(3, json!(false)),
            ],
        };

        let rendered = render_tsv(&series);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        for line in lines {
            let fields: Vec<&str> = line.split('\t').collect();
            assert_eq!(fields.len(), 2);
            for field in fields {
                assert!(field == "0" || field == "1");
            }
        }
    }

    #[test]
    fn test_empty_series_renders_nothing() {
        assert_eq!(render_tsv(&SignalSeries::default()), "");
    }

    #[test]
    fn test_truthiness_rules() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!(-3.5)));
        assert!(is_truthy(&json!("yes")));
        assert!(is_truthy(&json!([0])));

        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!([])));
        assert!(!is_truthy(&json!({})));
    }

    #[test]
    fn test_opaque_values_render_by_truthiness() {
        let series = SignalSeries {
            kept: vec![event(1, json!("yes"))],
            rewritten: vec![event(1, json!(0))],
        };

        assert_eq!(render_tsv(&series), "1\t0\n");
    }

    #[test]
    fn test_ignores_surplus_rewritten_entries() {
        let series = SignalSeries {
            kept: vec![event(1, json!(true))],
            rewritten: vec![event(1, json!(true)), event(2, json!(true))],
        };

        assert_eq!(render_tsv(&series), "1\t1\n");
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_panics_when_rewritten_is_shorter() {
        let series = SignalSeries {
            kept: vec![event(1, json!(true)), event(2, json!(true))],
            rewritten: vec![event(1, json!(true))],
        };

        render_tsv(&series);
    }
}
