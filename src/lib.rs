pub mod codegen;
pub mod config;
pub mod diagnostics;
pub mod errors;
pub mod output;

pub use codegen::{GeneratedSource, Generator, GeneratorOptions, generate};
pub use config::MaxArity;
pub use errors::ConfigError;
