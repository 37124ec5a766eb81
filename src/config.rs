use std::{fmt, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{codegen::GeneratorOptions, errors::ConfigError};

/// The largest member count the generated construct handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaxArity(usize);

impl MaxArity {
    /// The value the generated header shipped with before it was configurable.
    pub const DEFAULT: MaxArity = MaxArity(64);

    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for MaxArity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for MaxArity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for MaxArity {
    type Err = ConfigError;

    /// Parses a single decimal integer, ignoring surrounding whitespace (the
    /// value usually arrives as one line on stdin).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::Missing);
        }

        trimmed.parse::<usize>().map(Self).map_err(|source| {
            let negative = trimmed
                .strip_prefix('-')
                .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()));

            if negative {
                ConfigError::Negative {
                    input: trimmed.to_owned(),
                }
            } else {
                ConfigError::InvalidMaxArity {
                    input: trimmed.to_owned(),
                    source,
                }
            }
        })
    }
}

/// A generator config file. Namely Reflectgen.toml
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorSection,
}

/// The `[generator]` table. Every key is optional; missing keys fall back to
/// the defaults of [`GeneratorOptions`].
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorSection {
    /// The largest supported member count.
    pub max_arity: Option<MaxArity>,
    /// Name of the module wrapping the generated items.
    pub module_name: Option<String>,
    /// Path of the reflection trait the generated code imports.
    pub reflect_path: Option<String>,
    /// Bound every member type must satisfy to reach the visitor.
    pub member_bound: Option<String>,
}

impl Config {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("loaded config file {}", path.display());

        toml::from_str(&contents).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Toml {
            path: Path::new("<inline>").to_path_buf(),
            source,
        })
    }

    pub fn into_options(self) -> Result<GeneratorOptions, ConfigError> {
        self.generator.into_options()
    }
}

impl GeneratorSection {
    /// Keys set in `overrides` win over the ones in `self`.
    pub fn merge(self, overrides: GeneratorSection) -> Self {
        Self {
            max_arity: overrides.max_arity.or(self.max_arity),
            module_name: overrides.module_name.or(self.module_name),
            reflect_path: overrides.reflect_path.or(self.reflect_path),
            member_bound: overrides.member_bound.or(self.member_bound),
        }
    }

    /// Resolves the section into validated generator options.
    ///
    /// A missing `max_arity` is an error here: the caller is expected to have
    /// filled it from another source (argument or stdin) beforehand.
    pub fn into_options(self) -> Result<GeneratorOptions, ConfigError> {
        let defaults = GeneratorOptions::default();
        let max_arity = self.max_arity.ok_or(ConfigError::Missing)?;

        let module_name = self.module_name.unwrap_or(defaults.module_name);
        if !is_identifier(&module_name) {
            return Err(ConfigError::InvalidOption {
                name: "module_name",
                value: module_name,
                reason: "expected a Rust identifier",
            });
        }

        let reflect_path = self.reflect_path.unwrap_or(defaults.reflect_path);
        if reflect_path.trim().is_empty() {
            return Err(ConfigError::InvalidOption {
                name: "reflect_path",
                value: reflect_path,
                reason: "expected a path to the reflection trait",
            });
        }

        let member_bound = self.member_bound.unwrap_or(defaults.member_bound);
        if member_bound.trim().is_empty() {
            return Err(ConfigError::InvalidOption {
                name: "member_bound",
                value: member_bound,
                reason: "expected a trait bound",
            });
        }

        Ok(GeneratorOptions {
            max_arity,
            module_name,
            reflect_path,
            member_bound,
        })
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {
            name != "_" && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}
