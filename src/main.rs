use std::{
    io::{IsTerminal, Write},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use anyhow::Context;
use ariadne::Source;
use clap::Parser;
use reflectgen::{
    ConfigError, Generator, MaxArity,
    config::{Config, GeneratorSection},
    diagnostics::config_error_to_report,
    output::write_if_changed,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct GeneratorArgs {
    /// Largest supported member count. Read from stdin when neither this nor
    /// the config file sets it.
    #[arg(allow_hyphen_values = true)]
    max_arity: Option<String>,

    /// Reflectgen.toml config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the generated source here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Module wrapping the generated items.
    #[arg(long)]
    module_name: Option<String>,

    /// Path of the reflection trait the generated code imports.
    #[arg(long)]
    reflect_path: Option<String>,

    /// Bound every member type must satisfy to reach the visitor.
    #[arg(long)]
    member_bound: Option<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = GeneratorArgs::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !e.is::<Reported>() {
                eprintln!("error: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: GeneratorArgs) -> anyhow::Result<()> {
    let start_time = Instant::now();

    let file_section = match &args.config {
        Some(path) => Config::from_path(path)?.generator,
        None => GeneratorSection::default(),
    };

    let cli_max_arity = args
        .max_arity
        .as_deref()
        .map(|raw| parse_max_arity(raw, "<argument>"))
        .transpose()?;

    let mut section = file_section.merge(GeneratorSection {
        max_arity: cli_max_arity,
        module_name: args.module_name,
        reflect_path: args.reflect_path,
        member_bound: args.member_bound,
    });

    if section.max_arity.is_none() {
        // One line, like an interactive prompt; anything after it is ignored.
        let raw = match std::io::stdin().lines().next() {
            Some(line) => line.context("failed to read max arity from stdin")?,
            None => String::new(),
        };
        section.max_arity = Some(parse_max_arity(&raw, "<stdin>")?);
    }

    let options = section.into_options()?;
    tracing::debug!("Generating with options: {:#?}", options);

    let source = Generator::new(options).generate();

    match &args.output {
        Some(path) => {
            write_if_changed(path, &source)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(source.to_string().as_bytes())
                .context("failed to write to stdout")?;
            stdout.flush()?;
        }
    }

    tracing::debug!("Done in {:?}", start_time.elapsed());

    Ok(())
}

/// A config error whose located report was already printed to stderr.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
struct Reported(ConfigError);

/// Parses a max arity literal, printing a located report on failure.
fn parse_max_arity(raw: &str, origin: &str) -> anyhow::Result<MaxArity> {
    raw.parse::<MaxArity>().map_err(|error| {
        let color = std::io::stderr().is_terminal();
        let Some(report) = config_error_to_report(&error, origin, raw, color) else {
            return anyhow::Error::new(error);
        };

        match report.eprint((origin.to_owned(), Source::from(raw.to_owned()))) {
            Ok(()) => anyhow::Error::new(Reported(error)),
            Err(e) => {
                tracing::warn!("failed to print diagnostic: {e}");
                anyhow::Error::new(error)
            }
        }
    })
}
