//! `KEY=value` line parsing.
//!
//! The format is deliberately minimal:
//!
//! - blank lines are skipped
//! - lines whose first character is `#` are comments
//! - every other line is split on its first `=`
//! - values are kept verbatim (no quote stripping, no trimming)
//!
//! A trailing `\r` is dropped so files with Windows line endings parse the
//! same as Unix ones.

use std::collections::HashMap;

use crate::core::EnvExpandError;

/// Parse `content` into `(key, value)` pairs in file order.
///
/// # Errors
///
/// - [`EnvExpandError::MalformedLine`] for a line without `=`
/// - [`EnvExpandError::EmptyKey`] for a line starting with `=`
///
/// # Examples
///
/// ```rust
/// use envexpand::env::parse_env;
///
/// let pairs = parse_env("# database\nHOST=db\n\nURL=postgres://${HOST}\n").unwrap();
/// assert_eq!(pairs[1], ("URL".to_string(), "postgres://${HOST}".to_string()));
/// ```
pub fn parse_env(content: &str) -> Result<Vec<(String, String)>, EnvExpandError> {
    let mut pairs = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(EnvExpandError::MalformedLine {
                line: index + 1,
                content: line.to_string(),
            });
        };

        if key.is_empty() {
            return Err(EnvExpandError::EmptyKey {
                line: index + 1,
            });
        }

        pairs.push((key.to_string(), value.to_string()));
    }

    Ok(pairs)
}

/// Insert `pairs` into `vars`; later pairs override earlier ones.
pub fn merge_pairs(vars: &mut HashMap<String, String>, pairs: Vec<(String, String)>) {
    vars.extend(pairs);
}

/// The current process environment, skipping entries that are not valid UTF-8.
#[must_use]
pub fn process_env() -> HashMap<String, String> {
    std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}
