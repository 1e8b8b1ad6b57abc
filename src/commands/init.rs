use std::fs;

use crate::cli::InitArgs;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, TreeGuardError};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            crate::print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes a starter layout script.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(TreeGuardError::Script(format!(
            "Script already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_script_template())?;

    println!("Created layout script: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_script_template() -> String {
    r#"# tree-guard layout script
#
# Each [[assert]] claims matching items under the root. Anything no assertion
# claims is reported as an extra item.

# Tree to validate; relative paths resolve against this file's directory.
# The ROOT argument of `tree-guard check` takes precedence.
root = "."

# Every top-level directory must look like a project id (one or more).
[[assert]]
id = "project"
kind = "dirs"
re = '[a-z]{2}\d{3}'
as = "project"

  # Exactly one README inside each project directory.
  [[assert.children]]
  id = "readme"
  kind = "file"
  name = "README.md"

  # Any number of data files named after the project.
  [[assert.children]]
  id = "data"
  kind = "files"
  re = '${project}_\d+\.csv'
  n = "*"

# Quantities: "1" exactly one, "1+" one or more, "?" zero or one,
# "*" any number, "3-5" between three and five.
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
