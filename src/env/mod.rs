//! Ingestion and output of variable sets.
//!
//! These are the collaborators around the expansion engine: they turn files,
//! stdin and the process environment into a `HashMap<String, String>`, and
//! turn the expanded map back into text. The engine itself never does I/O.

pub mod output;
pub mod parser;

pub use output::{OutputFormat, render};
pub use parser::{merge_pairs, parse_env, process_env};

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;
use tokio::io::AsyncReadExt;
use tracing::debug;

use crate::core::EnvExpandError;

/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";

/// Read the raw text of one input source; `-` reads stdin.
pub async fn read_source(path: &Path) -> Result<String> {
    if path.as_os_str() == STDIN_PATH {
        let mut content = String::new();
        tokio::io::stdin()
            .read_to_string(&mut content)
            .await
            .context("Failed to read variables from stdin")?;
        return Ok(content);
    }

    if !path_exists(path).await? {
        return Err(EnvExpandError::FileNotFound {
            path: path.display().to_string(),
        }
        .into());
    }

    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))
}

/// Whether `path` exists.
///
/// Only a missing path is `false`. Any other failure to stat it (permissions,
/// a file used as a directory) is an [`EnvExpandError::IoError`] naming the
/// path.
pub(crate) async fn path_exists(path: &Path) -> Result<bool, EnvExpandError> {
    tokio::fs::try_exists(path).await.map_err(|e| {
        EnvExpandError::IoError(std::io::Error::new(e.kind(), format!("{}: {e}", path.display())))
    })
}

/// Load and merge `KEY=value` sources into one variable set.
///
/// `base` is the starting set (e.g. the process environment). Sources are
/// applied in order; a key defined again later overrides the earlier value.
/// With no sources, stdin is read.
pub async fn load_sources<P: AsRef<Path>>(
    base: HashMap<String, String>,
    sources: &[P],
) -> Result<HashMap<String, String>> {
    let mut vars = base;

    if sources.is_empty() {
        let content = read_source(Path::new(STDIN_PATH)).await?;
        merge_pairs(&mut vars, parse_env(&content).context("Failed to parse stdin")?);
        return Ok(vars);
    }

    for source in sources {
        let path = source.as_ref();
        let content = read_source(path).await?;
        let pairs =
            parse_env(&content).with_context(|| format!("Failed to parse {}", path.display()))?;
        debug!("Loaded {} variables from {}", pairs.len(), path.display());
        merge_pairs(&mut vars, pairs);
    }

    Ok(vars)
}
