//! Configuration management for envexpand.
//!
//! A single optional TOML file supplies defaults for the command line. See
//! [`GlobalConfig`] for the fields and lookup order.

mod global;

pub use global::{CONFIG_ENV_VAR, GlobalConfig};
