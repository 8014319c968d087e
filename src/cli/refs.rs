//! The `refs` command: inspect references without printing values.

use anyhow::{Result, anyhow};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::Write;
use std::path::PathBuf;

use crate::config::GlobalConfig;
use crate::env::{load_sources, process_env};
use crate::resolver::{
    EvaluationOrder, Expander, ReferenceGraph, UnresolvedReference, evaluation_order,
    unresolved_references,
};

/// Show references between variables and the evaluation order.
#[derive(Args, Debug)]
pub struct RefsCommand {
    /// `KEY=value` files, applied in order (`-` or none reads stdin)
    files: Vec<PathBuf>,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Seed variables from the process environment (files override it)
    #[arg(short, long)]
    env: bool,
}

#[derive(Debug, Serialize)]
struct KeyReport<'a> {
    key: &'a str,
    depends_on: Vec<&'a str>,
    unknown: Vec<&'a str>,
    self_reference: bool,
}

#[derive(Debug, Serialize)]
struct RefsReport<'a> {
    keys: Vec<KeyReport<'a>>,
    order: &'a [String],
    unresolved: Vec<UnresolvedReference>,
}

impl<'a> RefsReport<'a> {
    fn new(graph: &'a ReferenceGraph, order: &'a EvaluationOrder) -> Self {
        let keys = graph
            .keys()
            .map(|key| KeyReport {
                key,
                depends_on: graph.dependencies(key),
                unknown: graph.unknown_references(key),
                self_reference: graph.is_self_referencing(key),
            })
            .collect();

        Self {
            keys,
            order: &order.keys,
            unresolved: unresolved_references(graph, order),
        }
    }

    fn to_text(&self) -> String {
        let mut out = String::new();

        for entry in &self.keys {
            let _ = writeln!(out, "{}", entry.key.bold());
            if !entry.depends_on.is_empty() {
                let _ = writeln!(out, "  depends on: {}", entry.depends_on.join(", "));
            }
            if !entry.unknown.is_empty() {
                let _ = writeln!(out, "  unknown: {}", entry.unknown.join(", ").yellow());
            }
            if entry.self_reference {
                let _ = writeln!(out, "  {}", "self-reference".yellow());
            }
        }

        let _ = writeln!(out, "\norder: {}", self.order.join(", "));

        if !self.unresolved.is_empty() {
            let _ = writeln!(out, "unresolved:");
            for unresolved in &self.unresolved {
                let _ = writeln!(
                    out,
                    "  {} → ${{{}}} ({})",
                    unresolved.key, unresolved.name, unresolved.reason
                );
            }
        }

        out
    }
}

impl RefsCommand {
    pub async fn execute(self, config: &GlobalConfig) -> Result<()> {
        let base = if self.env || config.include_process_env {
            process_env()
        } else {
            HashMap::new()
        };
        let vars = load_sources(base, &self.files).await?;

        print!("{}", self.run(&vars)?);
        Ok(())
    }

    pub fn run(&self, vars: &HashMap<String, String>) -> Result<String> {
        let graph = Expander::uncached().graph(vars);
        let order = evaluation_order(&graph);
        let report = RefsReport::new(&graph, &order);

        match self.format.as_str() {
            "text" => Ok(report.to_text()),
            "json" => Ok(format!("{}\n", serde_json::to_string_pretty(&report)?)),
            other => Err(anyhow!("Invalid format '{other}'. Valid formats are: text, json")),
        }
    }
}
