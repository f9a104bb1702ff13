use serde_json::Value;

use crate::record::LogRecord;

/// Indent for the message, scope, and state lines.
const PAD: &str = "      ";
/// Error chain lines sit one step further in.
const ERR_PAD: &str = "        ";

/// Deterministic single-record text rendering for diagnostics output.
///
/// The minimum shape is two lines:
///
/// ```text
/// info: MyApp.Service[0]
///       Request handled
/// ```
///
/// A captured error adds one further-indented `type: message` line per
/// causal frame, innermost last. Non-empty scopes add a `      => ` line
/// with the values outermost first; a state payload adds another `      => `
/// line with `key: value` pairs in map order.
pub fn render(record: &LogRecord) -> String {
    let mut out = String::new();

    out.push_str(record.level.tag());
    out.push_str(": ");
    out.push_str(&record.category);
    out.push('[');
    out.push_str(&record.event_id.id.to_string());
    out.push(']');
    out.push('\n');
    out.push_str(PAD);
    out.push_str(&record.message);

    if let Some(error) = &record.error {
        for frame in error.chain() {
            out.push('\n');
            out.push_str(ERR_PAD);
            out.push_str(&frame.type_name);
            out.push_str(": ");
            out.push_str(&frame.message);
        }
    }

    if !record.scopes.is_empty() {
        out.push('\n');
        out.push_str(PAD);
        out.push_str("=> ");
        let values: Vec<String> = record.scopes.iter().map(scope_value).collect();
        out.push_str(&values.join(" => "));
    }

    if let Some(state) = &record.state {
        out.push('\n');
        out.push_str(PAD);
        out.push_str("=> ");
        let pairs: Vec<String> = state
            .iter()
            .map(|(key, value)| format!("{}: {}", key, scope_value(value)))
            .collect();
        out.push_str(&pairs.join(", "));
    }

    out.push('\n');
    out
}

/// serde_json's `Display` already does what the renderer needs: strings come
/// out quoted, every other kind in its natural form.
fn scope_value(value: &Value) -> String {
    value.to_string()
}
