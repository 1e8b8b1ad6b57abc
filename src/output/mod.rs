//! Report rendering for validation warnings.

mod csv;
mod json;
mod text;

pub use self::csv::CsvFormatter;
pub use json::JsonFormatter;
pub use text::{ColorMode, TextFormatter};

use crate::error::Result;
use crate::validator::Warning;

/// Column headings of the tabular report, in order.
pub const REPORT_COLUMNS: [&str; 8] = [
    "assertion_id",
    "got",
    "n",
    "base_dir",
    "name",
    "re",
    "pattern",
    "path",
];

/// Trait for rendering the warnings of a finished validation.
pub trait ReportFormatter {
    /// Format `warnings` into a string.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    fn format(&self, warnings: &[Warning]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
    Text,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[must_use]
pub fn report_columns() -> Vec<&'static str> {
    REPORT_COLUMNS.to_vec()
}

/// Header row followed by one row per warning.
///
/// Absent context values become empty cells; the first cell is always the
/// assertion id.
#[must_use]
pub fn report_rows(warnings: &[Warning]) -> Vec<Vec<String>> {
    let mut rows = Vec::with_capacity(warnings.len() + 1);
    rows.push(REPORT_COLUMNS.iter().map(ToString::to_string).collect());
    rows.extend(warnings.iter().map(report_row));
    rows
}

fn report_row(warning: &Warning) -> Vec<String> {
    let ctx = warning.context();
    let cell = |value: Option<&String>| value.cloned().unwrap_or_default();
    vec![
        warning.assertion_id().to_string(),
        ctx.got.map(|got| got.to_string()).unwrap_or_default(),
        cell(ctx.n.as_ref()),
        cell(ctx.base_dir.as_ref()),
        cell(ctx.name.as_ref()),
        cell(ctx.re.as_ref()),
        cell(ctx.pattern.as_ref()),
        cell(ctx.path.as_ref()),
    ]
}

/// Build the formatter for `format`.
#[must_use]
pub fn formatter_for(format: OutputFormat, color: ColorMode) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Csv => Box::new(CsvFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Text => Box::new(TextFormatter::new(color)),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
