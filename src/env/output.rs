//! Rendering of expanded variable sets.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use crate::core::EnvExpandError;

/// How expanded variables are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `KEY=value`, one per line
    #[default]
    Dotenv,
    /// A single JSON object (keys always sorted)
    Json,
    /// `export KEY='value'`, safe to `eval` in a POSIX shell
    Export,
}

impl OutputFormat {
    /// Names accepted by [`FromStr`].
    pub const NAMES: [&'static str; 3] = ["dotenv", "json", "export"];
}

impl FromStr for OutputFormat {
    type Err = EnvExpandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dotenv" | "env" => Ok(Self::Dotenv),
            "json" => Ok(Self::Json),
            "export" | "sh" => Ok(Self::Export),
            _ => Err(EnvExpandError::InvalidOutputFormat {
                format: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Dotenv => "dotenv",
            Self::Json => "json",
            Self::Export => "export",
        };
        f.write_str(name)
    }
}

/// Render `vars` in `format`.
///
/// With `sort_keys` unset, line-based formats follow the map's iteration
/// order. Line-based formats render an empty set as an empty string.
///
/// # Errors
///
/// Returns [`EnvExpandError::JsonError`] if JSON serialization fails.
pub fn render(
    vars: &HashMap<String, String>,
    format: OutputFormat,
    sort_keys: bool,
) -> Result<String, EnvExpandError> {
    if format == OutputFormat::Json {
        let sorted: BTreeMap<&String, &String> = vars.iter().collect();
        let mut json = serde_json::to_string_pretty(&sorted)?;
        json.push('\n');
        return Ok(json);
    }

    let mut entries: Vec<(&String, &String)> = vars.iter().collect();
    if sort_keys {
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
    }

    let mut output = String::new();
    for (key, value) in entries {
        match format {
            OutputFormat::Export => {
                output.push_str(&format!("export {key}={}\n", shell_quote(value)));
            }
            _ => output.push_str(&format!("{key}={value}\n")),
        }
    }
    Ok(output)
}

/// Single-quote `value` for a POSIX shell.
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
