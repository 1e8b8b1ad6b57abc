use std::fs;
use std::path::Path;

use tracing::info;

use crate::cli::{CheckArgs, Cli, ColorChoice};
use crate::config::{Script, ScriptLoader, ScriptRunner};
use crate::output::{ColorMode, formatter_for};
use crate::validator::{Validator, Warning};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_WARNINGS_FOUND, Result};

pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            crate::print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Load the script, validate the tree, and write the report.
///
/// # Errors
/// Returns an error if the script cannot be loaded or run, the root cannot
/// be scanned, or the report cannot be written.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    let loaded = ScriptLoader::new().load(args.script.as_deref())?;
    let root = loaded.resolve_root(args.root.as_deref())?;

    let warnings = validate_tree(&loaded.script, &root)?;

    let formatter = formatter_for(args.format, color_choice_to_mode(cli.color));
    let report = formatter.format(&warnings)?;
    write_output(args.output.as_deref(), &report, cli.quiet)?;

    Ok(exit_code(&warnings, args.warn_only))
}

/// Run every assertion of `script` against the tree at `root`, then
/// reconcile, returning all warnings in emission order.
///
/// # Errors
/// Returns usage and script errors from the assertions and scan errors for
/// an unreadable root.
pub fn validate_tree(script: &Script, root: &Path) -> Result<Vec<Warning>> {
    let mut validator = Validator::new(root);
    ScriptRunner::new(script).run(&mut validator)?;
    validator.validate()?;

    let warnings = validator.into_warnings();
    info!(
        root = %root.display(),
        warnings = warnings.len(),
        "validation finished"
    );
    Ok(warnings)
}

#[must_use]
pub fn exit_code(warnings: &[Warning], warn_only: bool) -> i32 {
    if warnings.is_empty() || warn_only {
        EXIT_SUCCESS
    } else {
        EXIT_WARNINGS_FOUND
    }
}

pub(crate) fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
