use std::fmt::Write;

use crate::error::Result;
use crate::validator::{Warning, WarningKind};

use super::ReportFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

/// Human-readable report, one warning per line plus a summary.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    const fn color_for(warning: &Warning) -> &'static str {
        match warning.kind() {
            WarningKind::Shortfall => ansi::YELLOW,
            WarningKind::ExtraItem => ansi::RED,
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_summary(&self, shortfalls: usize, extra_items: usize) -> String {
        if shortfalls + extra_items == 0 {
            return self.colorize("OK: no warnings", ansi::GREEN);
        }
        let shortfalls_str = self.colorize(&shortfalls.to_string(), ansi::YELLOW);
        let extras_str = self.colorize(&extra_items.to_string(), ansi::RED);
        format!(
            "Summary: {} warnings ({shortfalls_str} shortfalls, {extras_str} extra items)",
            shortfalls + extra_items
        )
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, warnings: &[Warning]) -> Result<String> {
        let mut output = String::new();
        for warning in warnings {
            let line = self.colorize(&warning.to_string(), Self::color_for(warning));
            let _ = writeln!(output, "{line}");
            if let Some(base_dir) = &warning.context().base_dir {
                let _ = writeln!(output, "   in: {base_dir}");
            }
        }
        if !warnings.is_empty() {
            output.push('\n');
        }

        let extra_items = warnings.iter().filter(|w| w.is_extra_item()).count();
        let summary = self.format_summary(warnings.len() - extra_items, extra_items);
        let _ = writeln!(output, "{summary}");
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
