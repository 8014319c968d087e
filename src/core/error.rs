//! Error handling for envexpand
//!
//! The expansion engine itself never fails: malformed references and
//! unresolvable names are rendered literally. Errors only arise at the edges,
//! while reading input files, parsing `KEY=value` lines, loading
//! configuration, or writing output.
//!
//! # Architecture
//!
//! - [`EnvExpandError`] - Enumerated error types for those edges
//! - [`ErrorContext`] - Wrapper that adds user-friendly messages and suggestions
//! - [`user_friendly_error`] - Convert any [`anyhow::Error`] into an [`ErrorContext`]
//!
//! # Examples
//!
//! ```rust,no_run
//! use envexpand::core::{EnvExpandError, ErrorContext};
//!
//! let context = ErrorContext::new(EnvExpandError::MalformedLine {
//!     line: 3,
//!     content: "NOT A PAIR".to_string(),
//! })
//! .with_suggestion("Write each variable as KEY=value");
//!
//! context.display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for envexpand operations
#[derive(Error, Debug)]
pub enum EnvExpandError {
    /// An input line is neither blank, a comment, nor `KEY=value`
    #[error("Malformed line {line}: '{content}'")]
    MalformedLine {
        /// 1-based line number
        line: usize,
        /// The offending line
        content: String,
    },

    /// An input line has an `=` but nothing before it
    #[error("Empty variable name on line {line}")]
    EmptyKey {
        /// 1-based line number
        line: usize,
    },

    /// An input file does not exist
    #[error("Input file not found: {path}")]
    FileNotFound {
        /// Path as given on the command line
        path: String,
    },

    /// Configuration file problems
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the problem
        message: String,
    },

    /// Unknown output format name
    #[error("Invalid output format '{format}'")]
    InvalidOutputFormat {
        /// The rejected format name
        format: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl Clone for EnvExpandError {
    fn clone(&self) -> Self {
        match self {
            Self::MalformedLine {
                line,
                content,
            } => Self::MalformedLine {
                line: *line,
                content: content.clone(),
            },
            Self::EmptyKey {
                line,
            } => Self::EmptyKey {
                line: *line,
            },
            Self::FileNotFound {
                path,
            } => Self::FileNotFound {
                path: path.clone(),
            },
            Self::ConfigError {
                message,
            } => Self::ConfigError {
                message: message.clone(),
            },
            Self::InvalidOutputFormat {
                format,
            } => Self::InvalidOutputFormat {
                format: format.clone(),
            },
            Self::IoError(e) => Self::IoError(std::io::Error::new(e.kind(), e.to_string())),
            // Neither parser error is Clone; keep the message.
            Self::TomlError(e) => Self::ConfigError {
                message: e.to_string(),
            },
            Self::JsonError(e) => Self::ConfigError {
                message: format!("JSON error: {e}"),
            },
        }
    }
}

/// Error with an optional suggestion and details for display in the terminal
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: EnvExpandError,
    /// What the user can do about it
    pub suggestion: Option<String>,
    /// Extra explanation
    pub details: Option<String>,
}

impl ErrorContext {
    #[must_use]
    pub const fn new(error: EnvExpandError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr with colors
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] with a suggestion where one is known.
///
/// Walks the error chain looking for an [`EnvExpandError`] (which may be
/// wrapped in `anyhow` context) or an [`std::io::Error`]. Anything else is
/// reported with the full chain as its message.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    for cause in error.chain() {
        if let Some(known) = cause.downcast_ref::<EnvExpandError>() {
            return create_error_context(known);
        }
        if let Some(io_error) = cause.downcast_ref::<std::io::Error>() {
            return create_error_context(&EnvExpandError::IoError(std::io::Error::new(
                io_error.kind(),
                format!("{error:#}"),
            )));
        }
    }

    ErrorContext::new(EnvExpandError::ConfigError {
        message: format!("{error:#}"),
    })
}

fn create_error_context(error: &EnvExpandError) -> ErrorContext {
    let context = ErrorContext::new(error.clone());
    match error {
        EnvExpandError::MalformedLine {
            ..
        } => context
            .with_suggestion("Write each variable as KEY=value; start comment lines with '#'")
            .with_details("Blank lines and lines beginning with '#' are ignored"),
        EnvExpandError::EmptyKey {
            ..
        } => context.with_suggestion("Give the variable a name before the '='"),
        EnvExpandError::FileNotFound {
            ..
        } => context.with_suggestion("Check the path, or pass '-' to read from stdin"),
        EnvExpandError::ConfigError {
            ..
        }
        | EnvExpandError::TomlError(_) => context
            .with_suggestion("Check the configuration file syntax, or point --config at another file")
            .with_details("envexpand reads ~/.envexpand/config.toml unless ENVEXPAND_CONFIG or --config is set"),
        EnvExpandError::InvalidOutputFormat {
            ..
        } => context.with_suggestion("Valid formats are: dotenv, json, export"),
        EnvExpandError::IoError(e) => match e.kind() {
            std::io::ErrorKind::PermissionDenied => {
                context.with_suggestion("Check the file permissions")
            }
            std::io::ErrorKind::NotFound => context
                .with_suggestion("Check that the file or directory exists and the path is correct"),
            _ => context,
        },
        EnvExpandError::JsonError(_) => context,
    }
}
