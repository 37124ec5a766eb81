use std::ops::Range;

use ariadne::{ColorGenerator, Label, Report, ReportKind};

use crate::errors::ConfigError;

/// A byte range inside one max arity input (a stdin line or an argument).
#[derive(Debug, Clone)]
pub struct InputSpan {
    pub span: Range<usize>,
    pub origin: String,
}

impl InputSpan {
    pub fn new(origin: String, span: Range<usize>) -> Self {
        Self { origin, span }
    }
}

impl ariadne::Span for InputSpan {
    type SourceId = String;

    fn source(&self) -> &Self::SourceId {
        &self.origin
    }

    fn start(&self) -> usize {
        self.span.start
    }

    fn end(&self) -> usize {
        self.span.end
    }
}

/// Creates a report pointing at the offending part of `raw`.
///
/// Only errors about the max arity literal have a location; everything else,
/// and empty input, returns `None` and is printed as a plain error chain.
pub fn config_error_to_report(
    error: &ConfigError,
    origin: &str,
    raw: &str,
    color: bool,
) -> Option<Report<'static, InputSpan>> {
    if raw.is_empty() {
        return None;
    }

    let mut colors = ColorGenerator::new();
    colors.next();

    let span = match error.input() {
        Some(input) => {
            let start = raw.find(input).unwrap_or(0);
            start..start + input.len()
        }
        None => 0..raw.len(),
    };
    let filespan = InputSpan::new(origin.to_owned(), span);

    let (code, message, label) = match error {
        ConfigError::Missing => (
            "C1",
            "Missing max arity.",
            "expected a non-negative integer here".to_owned(),
        ),
        ConfigError::Negative { input } => (
            "C2",
            "Negative max arity.",
            format!("{input} is below zero"),
        ),
        ConfigError::InvalidMaxArity { input, source } => (
            "C3",
            "Invalid max arity.",
            format!("{input:?} is not a non-negative integer ({source})"),
        ),
        _ => return None,
    };

    Some(
        Report::build(ReportKind::Error, filespan.clone())
            .with_config(ariadne::Config::default().with_color(color))
            .with_code(code)
            .with_message(message)
            .with_label(
                Label::new(filespan)
                    .with_message(label)
                    .with_color(colors.next()),
            )
            .with_note("the generator needs exactly one non-negative integer, e.g. 64")
            .finish(),
    )
}
