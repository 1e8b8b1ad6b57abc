use std::fmt;

use regex::Regex;
use serde::Serialize;

use crate::error::Result;
use crate::path_utils::{self, parent_dir};
use crate::validator::{Query, Validator};

/// Kind of a catalog entry, fixed at scan time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    File,
    Directory,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => f.write_str("file"),
            Self::Directory => f.write_str("dir"),
        }
    }
}

/// Storage record for one scanned filesystem entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub catalog_id: usize,
    /// Normalized root-relative path.
    pub path: String,
    pub kind: ItemKind,
    matched: bool,
}

impl CatalogEntry {
    #[must_use]
    pub const fn new(catalog_id: usize, path: String, kind: ItemKind) -> Self {
        Self {
            catalog_id,
            path,
            kind,
            matched: false,
        }
    }

    #[must_use]
    pub const fn is_matched(&self) -> bool {
        self.matched
    }

    /// Flip to matched. Returns `false` if the entry was already matched.
    pub(crate) fn mark_matched(&mut self) -> bool {
        let was_unmatched = !self.matched;
        self.matched = true;
        was_unmatched
    }

    /// Directory key this entry is indexed under (`""` for the root).
    #[must_use]
    pub fn parent_dir(&self) -> &str {
        parent_dir(&self.path)
    }
}

/// A catalog entry as handed back by an assertion.
///
/// Besides the entry's identity it carries the per-query scratch state of the
/// assertion that produced it: the `target` the name test ran against and the
/// capture groups of that test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    catalog_id: usize,
    path: String,
    kind: ItemKind,
    target: String,
    last_match: Option<Vec<Option<String>>>,
}

impl Item {
    #[must_use]
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        Self {
            catalog_id: entry.catalog_id,
            path: entry.path.clone(),
            kind: entry.kind,
            target: entry.path.clone(),
            last_match: None,
        }
    }

    #[must_use]
    pub const fn catalog_id(&self) -> usize {
        self.catalog_id
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub const fn kind(&self) -> ItemKind {
        self.kind
    }

    #[must_use]
    pub const fn is_file(&self) -> bool {
        matches!(self.kind, ItemKind::File)
    }

    #[must_use]
    pub const fn is_dir(&self) -> bool {
        matches!(self.kind, ItemKind::Directory)
    }

    /// Final path segment.
    #[must_use]
    pub fn basename(&self) -> &str {
        path_utils::basename(&self.path)
    }

    /// Final path segment with a literal `suffix` removed when present.
    #[must_use]
    pub fn basename_without(&self, suffix: &str) -> &str {
        let name = self.basename();
        name.strip_suffix(suffix).unwrap_or(name)
    }

    /// Path fragment relative to the base directory of the producing query.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn set_target(&mut self, target: &str) {
        target.clone_into(&mut self.target);
    }

    /// Run `pattern` against the current target and keep the capture groups.
    ///
    /// A failed test clears any previous match.
    pub fn record_match(&mut self, pattern: &Regex) -> bool {
        self.last_match = pattern.captures(&self.target).map(|caps| {
            caps.iter()
                .map(|group| group.map(|m| m.as_str().to_string()))
                .collect()
        });
        self.last_match.is_some()
    }

    /// Capture groups of the last successful name test; group 0 is the whole target.
    #[must_use]
    pub fn captures(&self) -> Option<&[Option<String>]> {
        self.last_match.as_deref()
    }

    /// A single capture group, if it participated in the match.
    #[must_use]
    pub fn capture(&self, index: usize) -> Option<&str> {
        self.last_match
            .as_ref()?
            .get(index)?
            .as_deref()
    }

    /// Base directory injected into assertions scoped to this item.
    ///
    /// Directories scope to themselves; files scope to their parent
    /// directory, or to the root (`None`) when they sit directly under it.
    #[must_use]
    pub fn scope(&self) -> Option<&str> {
        match self.kind {
            ItemKind::Directory => Some(&self.path),
            ItemKind::File => Some(parent_dir(&self.path)).filter(|p| !p.is_empty()),
        }
    }

    fn scoped(&self, query: &Query) -> Query {
        let mut scoped = query.clone();
        scoped.base_dir = self.scope().map(str::to_string);
        scoped
    }

    /// [`Validator::dirs`] scoped to this item.
    ///
    /// # Errors
    /// Propagates the validator's usage and scan errors.
    pub fn dirs(&self, validator: &mut Validator, id: &str, query: &Query) -> Result<Vec<Self>> {
        validator.dirs(id, &self.scoped(query))
    }

    /// [`Validator::dir`] scoped to this item.
    ///
    /// # Errors
    /// Propagates the validator's usage and scan errors.
    pub fn dir(&self, validator: &mut Validator, id: &str, query: &Query) -> Result<Option<Self>> {
        validator.dir(id, &self.scoped(query))
    }

    /// [`Validator::files`] scoped to this item.
    ///
    /// # Errors
    /// Propagates the validator's usage and scan errors.
    pub fn files(&self, validator: &mut Validator, id: &str, query: &Query) -> Result<Vec<Self>> {
        validator.files(id, &self.scoped(query))
    }

    /// [`Validator::file`] scoped to this item.
    ///
    /// # Errors
    /// Propagates the validator's usage and scan errors.
    pub fn file(&self, validator: &mut Validator, id: &str, query: &Query) -> Result<Option<Self>> {
        validator.file(id, &self.scoped(query))
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}
