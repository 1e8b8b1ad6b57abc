use std::fs;
use std::path::{Component, Path};

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::catalog::ItemKind;
use crate::error::{Result, TreeGuardError};
use crate::path_utils::normalize_path;

/// One filesystem entry discovered under the scan root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedEntry {
    /// Normalized root-relative path (`/`-separated).
    pub path: String,
    pub kind: ItemKind,
}

impl ScannedEntry {
    #[must_use]
    pub fn new(path: &str, kind: ItemKind) -> Self {
        Self {
            path: normalize_path(path),
            kind,
        }
    }

    #[must_use]
    pub fn file(path: &str) -> Self {
        Self::new(path, ItemKind::File)
    }

    #[must_use]
    pub fn dir(path: &str) -> Self {
        Self::new(path, ItemKind::Directory)
    }
}

/// Trait for enumerating every entry below a root directory.
pub trait TreeScanner {
    /// Scan `root` recursively and return its entries in traversal order.
    ///
    /// # Errors
    /// Returns an error if the root itself cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<ScannedEntry>>;
}

/// `walkdir`-backed scanner.
///
/// Entries are visited depth-first with siblings sorted by file name, so a
/// directory always precedes its contents. Hidden entries are included.
/// Symbolic links are resolved to whatever they point at; broken links and
/// special files (sockets, devices, FIFOs) are left out of the result.
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectoryScanner;

impl DirectoryScanner {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn resolve_kind(entry: &DirEntry) -> Option<ItemKind> {
        let file_type = entry.file_type();
        if file_type.is_file() {
            return Some(ItemKind::File);
        }
        if file_type.is_dir() {
            return Some(ItemKind::Directory);
        }
        if file_type.is_symlink() {
            let target = fs::metadata(entry.path()).ok()?;
            if target.is_file() {
                return Some(ItemKind::File);
            }
            if target.is_dir() {
                return Some(ItemKind::Directory);
            }
        }
        None
    }

    fn check_root(root: &Path) -> Result<()> {
        let metadata = fs::metadata(root).map_err(|source| TreeGuardError::FileRead {
            path: root.to_path_buf(),
            source,
        })?;
        if metadata.is_dir() {
            Ok(())
        } else {
            Err(TreeGuardError::NotADirectory(root.to_path_buf()))
        }
    }
}

impl TreeScanner for DirectoryScanner {
    fn scan(&self, root: &Path) -> Result<Vec<ScannedEntry>> {
        Self::check_root(root)?;

        let mut entries = Vec::new();
        let walker = WalkDir::new(root).min_depth(1).sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(source) if source.depth() == 0 => {
                    return Err(TreeGuardError::Scan {
                        path: root.to_path_buf(),
                        source,
                    });
                }
                Err(err) => {
                    warn!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };

            let Some(kind) = Self::resolve_kind(&entry) else {
                debug!(path = %entry.path().display(), "skipping entry that is neither a file nor a directory");
                continue;
            };

            let Ok(relative) = entry.path().strip_prefix(root) else {
                continue;
            };
            let Some(path) = catalog_path(relative) else {
                warn!(path = %relative.display(), "skipping entry whose name is not valid UTF-8");
                continue;
            };
            entries.push(ScannedEntry { path, kind });
        }

        debug!(root = %root.display(), entries = entries.len(), "scan complete");
        Ok(entries)
    }
}

/// Join the components of an on-disk relative path with `/`.
///
/// Components are taken as they are, so a `\` inside a file name stays part
/// of that name. Returns `None` when any component is not valid UTF-8.
fn catalog_path(relative: &Path) -> Option<String> {
    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(name) => parts.push(name.to_str()?),
            Component::CurDir => {}
            _ => return None,
        }
    }
    Some(parts.join("/"))
}

/// Scanner that hands back a fixed list of entries without touching the disk.
#[derive(Debug, Default, Clone)]
pub struct StaticScanner {
    entries: Vec<ScannedEntry>,
}

impl StaticScanner {
    #[must_use]
    pub const fn new(entries: Vec<ScannedEntry>) -> Self {
        Self { entries }
    }
}

impl TreeScanner for StaticScanner {
    fn scan(&self, _root: &Path) -> Result<Vec<ScannedEntry>> {
        Ok(self.entries.clone())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
