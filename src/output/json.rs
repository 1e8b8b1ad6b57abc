use serde::Serialize;

use crate::error::Result;
use crate::validator::Warning;

use super::ReportFormatter;

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    warnings: &'a [Warning],
}

#[derive(Serialize)]
struct Summary {
    total: usize,
    shortfalls: usize,
    extra_items: usize,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, warnings: &[Warning]) -> Result<String> {
        let extra_items = warnings.iter().filter(|w| w.is_extra_item()).count();
        let output = JsonOutput {
            summary: Summary {
                total: warnings.len(),
                shortfalls: warnings.len() - extra_items,
                extra_items,
            },
            warnings,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
