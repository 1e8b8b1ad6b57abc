use crate::error::Result;
use crate::validator::Warning;

use super::{ReportFormatter, report_rows};

/// Comma-separated report: a header line, then one line per warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvFormatter;

impl ReportFormatter for CsvFormatter {
    fn format(&self, warnings: &[Warning]) -> Result<String> {
        let mut writer = ::csv::WriterBuilder::new()
            .terminator(::csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());
        for row in report_rows(warnings) {
            writer.write_record(&row)?;
        }
        let bytes = writer.into_inner().map_err(|err| err.into_error())?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
#[path = "csv_tests.rs"]
mod tests;
