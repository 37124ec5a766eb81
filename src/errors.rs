use std::{num::ParseIntError, path::PathBuf};

use thiserror::Error;

/// Anything that keeps a generation run from starting.
///
/// None of these are raised by the generator itself: they are detected while
/// reading the configuration, before a single byte of output exists.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no max arity was given")]
    Missing,
    #[error("max arity {input:?} is negative")]
    Negative { input: String },
    #[error("max arity {input:?} is not a non-negative integer")]
    InvalidMaxArity {
        input: String,
        #[source]
        source: ParseIntError,
    },
    #[error("invalid value {value:?} for option {name}: {reason}")]
    InvalidOption {
        name: &'static str,
        value: String,
        reason: &'static str,
    },
    #[error("failed to read config file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path:?}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// The raw text this error was produced from, when it came from a max
    /// arity literal.
    pub fn input(&self) -> Option<&str> {
        match self {
            Self::Negative { input } | Self::InvalidMaxArity { input, .. } => Some(input),
            _ => None,
        }
    }
}
