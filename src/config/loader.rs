use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, TreeGuardError};
use crate::validator::EXTRA_ITEM_ID;

use super::filesystem::{FileSystem, RealFileSystem};
use super::model::{Assertion, Script};
use super::template::is_valid_binding;

/// Script looked up in the current directory when none is given.
pub const LOCAL_SCRIPT_NAME: &str = ".tree-guard.toml";

/// A parsed script together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedScript {
    pub script: Script,
    pub path: PathBuf,
}

impl LoadedScript {
    /// Tree root to validate.
    ///
    /// An explicit `override_root` wins; otherwise the script's `root` is used,
    /// resolved against the script's directory when relative.
    ///
    /// # Errors
    /// Returns a script error if neither provides a root.
    pub fn resolve_root(&self, override_root: Option<&Path>) -> Result<PathBuf> {
        if let Some(root) = override_root {
            return Ok(root.to_path_buf());
        }
        let root = self.script.root.as_deref().ok_or_else(|| {
            TreeGuardError::Script(format!(
                "no root given: pass ROOT or set `root` in {}",
                self.path.display()
            ))
        })?;
        let root = Path::new(root);
        if root.is_absolute() {
            return Ok(root.to_path_buf());
        }
        let base = self.path.parent().unwrap_or_else(|| Path::new(""));
        Ok(base.join(root))
    }
}

/// Loads validation scripts from the filesystem.
#[derive(Debug)]
pub struct ScriptLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for ScriptLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> ScriptLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    /// Load `path`, or `.tree-guard.toml` in the current directory.
    ///
    /// # Errors
    /// Returns an error if the script cannot be found, read, parsed, or
    /// fails validation.
    pub fn load(&self, path: Option<&Path>) -> Result<LoadedScript> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => self.local_script_path()?,
        };
        self.load_from_path(&path)
    }

    fn local_script_path(&self) -> Result<PathBuf> {
        let path = self.fs.current_dir()?.join(LOCAL_SCRIPT_NAME);
        if self.fs.exists(&path) {
            Ok(path)
        } else {
            Err(TreeGuardError::Script(format!(
                "no script given and {LOCAL_SCRIPT_NAME} not found in the current directory"
            )))
        }
    }

    /// Load the script at `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed, or fails validation.
    pub fn load_from_path(&self, path: &Path) -> Result<LoadedScript> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| TreeGuardError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        let script = parse_script(&content)?;
        debug!(
            path = %path.display(),
            assertions = script.assertion_count(),
            "script loaded"
        );
        Ok(LoadedScript {
            script,
            path: path.to_path_buf(),
        })
    }
}

/// Parse and validate script source.
///
/// # Errors
/// Returns a parse error for malformed TOML or unknown keys, and a script
/// error for an empty id or an unusable `as` name, and a usage error for
/// the reserved extra-item id.
pub fn parse_script(content: &str) -> Result<Script> {
    let script: Script = toml::from_str(content)?;
    for assertion in &script.assertions {
        validate_assertion(assertion)?;
    }
    Ok(script)
}

fn validate_assertion(assertion: &Assertion) -> Result<()> {
    if assertion.id.trim().is_empty() {
        return Err(TreeGuardError::Script(
            "every assertion needs a non-empty `id`".to_string(),
        ));
    }
    if assertion.id == EXTRA_ITEM_ID {
        return Err(TreeGuardError::ReservedIdentifier(assertion.id.clone()));
    }
    if let Some(bind) = &assertion.bind
        && !is_valid_binding(bind)
    {
        return Err(TreeGuardError::Script(format!(
            "assertion {:?}: `as = {bind:?}` is not a usable variable name",
            assertion.id
        )));
    }
    assertion.children.iter().try_for_each(validate_assertion)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
