use serde_json::Value;

/// Render a message template by substituting `{name}` placeholders with
/// `args` in positional order.
///
/// Placeholder names are documentation only: the first placeholder always
/// receives the first argument. `{{` and `}}` escape literal braces. When
/// the arguments run out, the remaining placeholders stay verbatim so the
/// mismatch is visible in the captured message.
pub fn render_template(template: &str, args: &[Value]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut next_arg = 0;
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open].replace("}}", "}"));
        let after = &rest[open + 1..];

        if let Some(stripped) = after.strip_prefix('{') {
            out.push('{');
            rest = stripped;
            continue;
        }

        match after.find('}') {
            Some(close) => {
                if next_arg < args.len() {
                    out.push_str(&render_value(&args[next_arg]));
                    next_arg += 1;
                } else {
                    out.push('{');
                    out.push_str(&after[..close]);
                    out.push('}');
                }
                rest = &after[close + 1..];
            }
            None => {
                // Unterminated placeholder: emit as-is.
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(&rest.replace("}}", "}"));
    out
}

/// Message rendering of a single value: strings substitute bare, everything
/// else uses its natural JSON form.
pub(crate) fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
