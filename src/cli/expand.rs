//! The `expand` command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

use crate::config::GlobalConfig;
use crate::env::{OutputFormat, load_sources, process_env, render};
use crate::resolver::{Expander, evaluation_order, unresolved_references};
use crate::templating::ReferenceCache;

/// Expand variable references and print the result.
#[derive(Args, Debug)]
pub struct ExpandCommand {
    /// `KEY=value` files, applied in order (`-` or none reads stdin)
    files: Vec<PathBuf>,

    /// Output format: dotenv, json, export
    #[arg(short, long)]
    format: Option<String>,

    /// Seed variables from the process environment (files override it)
    #[arg(short, long)]
    env: bool,

    /// Keep map order instead of sorting keys
    #[arg(long)]
    no_sort: bool,

    /// Warn about references left unresolved
    #[arg(short, long)]
    strict: bool,
}

impl ExpandCommand {
    pub async fn execute(self, config: &GlobalConfig) -> Result<()> {
        let base = if self.env || config.include_process_env {
            process_env()
        } else {
            HashMap::new()
        };
        let vars = load_sources(base, &self.files).await?;

        let output = self.run(&vars, config)?;
        print!("{output}");
        Ok(())
    }

    /// Expand `vars` and render them according to flags and `config`.
    pub fn run(&self, vars: &HashMap<String, String>, config: &GlobalConfig) -> Result<String> {
        let format = match &self.format {
            Some(name) => name.parse::<OutputFormat>()?,
            None => config.format,
        };
        let sort_keys = config.sort_keys && !self.no_sort;

        let cache = ReferenceCache::new();
        let expander = Expander::with_cache(&cache);
        let graph = expander.graph(vars);
        let order = evaluation_order(&graph);
        let expanded = expander.expand_in_order(vars, &order);

        let (hits, misses) = cache.stats();
        debug!("Scan cache: {hits} hits, {misses} misses ({:.1}% hit rate)", cache.hit_rate());

        if self.strict || config.strict {
            for unresolved in unresolved_references(&graph, &order) {
                eprintln!(
                    "{}: {} keeps ${{{}}} ({})",
                    "warning".yellow().bold(),
                    unresolved.key,
                    unresolved.name,
                    unresolved.reason
                );
            }
        }

        Ok(render(&expanded, format, sort_keys)?)
    }
}
