//! Command-line interface for envexpand.
//!
//! # Commands
//!
//! - `expand` - Expand `${VAR}` references in one or more `KEY=value` sources
//! - `refs` - Show how variables reference each other, the evaluation order,
//!   and which references will stay unresolved
//!
//! # Global Options
//!
//! - `--verbose` - Enable debug logging
//! - `--quiet` - Only log errors
//! - `--config` - Use a specific configuration file
//!
//! # Examples
//!
//! ```bash
//! envexpand expand .env
//! envexpand expand --env --format export base.env local.env
//! cat .env | envexpand expand --format json
//! envexpand refs .env
//! ```

mod expand;
mod refs;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::GlobalConfig;

pub use expand::ExpandCommand;
pub use refs::RefsCommand;

/// Settings derived from global flags, applied before any command runs.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log filter used when `RUST_LOG` is not set.
    ///
    /// `None` means the built-in default (`warn`).
    pub log_level: Option<String>,

    /// Explicit configuration file from `--config`.
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the global tracing subscriber, writing to stderr.
    ///
    /// `RUST_LOG` takes precedence over the flag-derived level. Safe to call
    /// more than once; later calls are ignored.
    pub fn init_logging(&self) {
        let filter = match std::env::var("RUST_LOG") {
            Ok(value) if !value.is_empty() => EnvFilter::new(value),
            _ => EnvFilter::new(self.log_level.as_deref().unwrap_or("warn")),
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

#[derive(Parser)]
#[command(
    name = "envexpand",
    about = "Expand ${VAR} references inside environment variable sets",
    version,
    long_about = "envexpand reads KEY=value definitions, resolves ${VAR} references between them \
                  in dependency order, and prints the fully expanded set. Unknown, self and \
                  cyclic references are left as written."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to a configuration file (default: ~/.envexpand/config.toml)
    #[arg(short, long, global = true, env = "ENVEXPAND_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand variable references and print the result
    Expand(ExpandCommand),

    /// Show references between variables and the evaluation order
    Refs(RefsCommand),
}

impl Cli {
    /// Execute the parsed command line.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    /// Derive [`CliConfig`] from the global flags.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            None
        };

        CliConfig {
            log_level,
            config_path: self.config.clone(),
        }
    }

    /// Execute with an explicit [`CliConfig`].
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.init_logging();

        let global = GlobalConfig::load_with_optional(config.config_path.clone()).await?;

        match self.command {
            Commands::Expand(cmd) => cmd.execute(&global).await,
            Commands::Refs(cmd) => cmd.execute(&global).await,
        }
    }
}
