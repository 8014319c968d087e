//! Single-pass rewriting of reference tokens.

use std::collections::HashMap;

use super::scanner::ReferenceSpan;

/// Rewrite `template`, replacing each span whose name has a value in
/// `resolved`.
///
/// Spans without a value are copied through as their original token text,
/// delimiters included. Inserted values are written verbatim and never
/// rescanned, so a value that itself looks like `${X}` stays that way.
///
/// `spans` must come from scanning this exact `template`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use envexpand::templating::{scan, substitute};
///
/// let template = "${HOST}:${PORT}";
/// let resolved = HashMap::from([("HOST".to_string(), "localhost".to_string())]);
///
/// assert_eq!(substitute(template, &scan(template), &resolved), "localhost:${PORT}");
/// ```
#[must_use]
pub fn substitute(
    template: &str,
    spans: &[ReferenceSpan],
    resolved: &HashMap<String, String>,
) -> String {
    if spans.is_empty() {
        return template.to_owned();
    }

    let mut output = String::with_capacity(template.len());
    let mut previous_end = 0;

    for span in spans {
        output.push_str(&template[previous_end..span.outer_begin]);

        match resolved.get(span.name(template)) {
            Some(value) => output.push_str(value),
            None => output.push_str(span.token(template)),
        }

        previous_end = span.outer_end;
    }

    output.push_str(&template[previous_end..]);
    output
}
