//! The in-memory catalog of every entry under the validated root.
//!
//! The catalog scans once, on first use, and afterwards keeps two indexes of
//! the entries no assertion has claimed yet:
//!
//! - `unmatched`: every unmatched `catalog_id`, for un-scoped queries;
//! - `by_parent`: unmatched ids bucketed by their immediate parent directory,
//!   so a query scoped to one directory only touches that directory's children.
//!
//! Both indexes hold ids in sorted sets, which doubles as the deterministic
//! traversal order, and both are updated together by [`Catalog::consume`].

mod item;

pub use item::{CatalogEntry, Item, ItemKind};

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::debug;

use crate::error::Result;
use crate::path_utils::parent_dir;
use crate::scanner::{DirectoryScanner, ScannedEntry, StaticScanner, TreeScanner};

pub struct Catalog {
    root: PathBuf,
    scanner: Box<dyn TreeScanner>,
    entries: Option<Vec<CatalogEntry>>,
    unmatched: BTreeSet<usize>,
    by_parent: IndexMap<String, BTreeSet<usize>>,
}

impl Catalog {
    /// Catalog over `root`, scanned from disk on first use.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_scanner(root, DirectoryScanner::new())
    }

    #[must_use]
    pub fn with_scanner(root: impl Into<PathBuf>, scanner: impl TreeScanner + 'static) -> Self {
        Self {
            root: root.into(),
            scanner: Box::new(scanner),
            entries: None,
            unmatched: BTreeSet::new(),
            by_parent: IndexMap::new(),
        }
    }

    /// Catalog built from a fixed entry list instead of the filesystem.
    #[must_use]
    pub fn from_entries(root: impl Into<PathBuf>, entries: Vec<ScannedEntry>) -> Self {
        Self::with_scanner(root, StaticScanner::new(entries))
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.entries.is_some()
    }

    /// Scan the root and build the indexes. Later calls are no-ops.
    ///
    /// # Errors
    /// Returns the scanner's error if the root cannot be read.
    pub fn load(&mut self) -> Result<()> {
        if self.entries.is_some() {
            return Ok(());
        }

        let scanned = self.scanner.scan(&self.root)?;
        let mut entries = Vec::with_capacity(scanned.len());
        for ScannedEntry { path, kind } in scanned {
            if path.is_empty() {
                continue;
            }
            let entry = CatalogEntry::new(entries.len(), path, kind);
            self.add_to_index(&entry);
            entries.push(entry);
        }

        debug!(
            root = %self.root.display(),
            items = entries.len(),
            directories = self.by_parent.len(),
            "catalog loaded"
        );
        self.entries = Some(entries);
        Ok(())
    }

    fn add_to_index(&mut self, entry: &CatalogEntry) {
        self.unmatched.insert(entry.catalog_id);
        self.by_parent
            .entry(entry.parent_dir().to_string())
            .or_default()
            .insert(entry.catalog_id);
    }

    /// All entries, loading the catalog if needed.
    ///
    /// # Errors
    /// Returns the scanner's error if the root cannot be read.
    pub fn items(&mut self) -> Result<&[CatalogEntry]> {
        self.load()?;
        Ok(self.entries())
    }

    /// All entries loaded so far (empty before the first load).
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        self.entries.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn entry(&self, catalog_id: usize) -> Option<&CatalogEntry> {
        self.entries().get(catalog_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    pub fn dirs(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries()
            .iter()
            .filter(|e| e.kind == ItemKind::Directory)
    }

    pub fn files(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries().iter().filter(|e| e.kind == ItemKind::File)
    }

    /// Unmatched entries in ascending `catalog_id` order.
    ///
    /// With a `base_dir`, only entries whose immediate parent equals it are
    /// returned (`""` is the root); an unknown directory yields nothing.
    #[must_use]
    pub fn unmatched_items(&self, base_dir: Option<&str>) -> Vec<&CatalogEntry> {
        let ids = match base_dir {
            Some(dir) => match self.by_parent.get(dir) {
                Some(bucket) => bucket,
                None => return Vec::new(),
            },
            None => &self.unmatched,
        };
        let entries = self.entries();
        ids.iter().filter_map(|&id| entries.get(id)).collect()
    }

    #[must_use]
    pub fn unmatched_dirs(&self, base_dir: Option<&str>) -> Vec<&CatalogEntry> {
        self.unmatched_of_kind(ItemKind::Directory, base_dir)
    }

    #[must_use]
    pub fn unmatched_files(&self, base_dir: Option<&str>) -> Vec<&CatalogEntry> {
        self.unmatched_of_kind(ItemKind::File, base_dir)
    }

    #[must_use]
    pub fn unmatched_of_kind(&self, kind: ItemKind, base_dir: Option<&str>) -> Vec<&CatalogEntry> {
        let mut items = self.unmatched_items(base_dir);
        items.retain(|e| e.kind == kind);
        items
    }

    /// Mark one entry matched and drop it from both indexes.
    ///
    /// Returns `false` if the id is unknown or was already consumed.
    pub fn consume(&mut self, catalog_id: usize) -> bool {
        let Some(entry) = self
            .entries
            .as_mut()
            .and_then(|entries| entries.get_mut(catalog_id))
        else {
            return false;
        };
        if !entry.mark_matched() {
            return false;
        }

        self.unmatched.remove(&catalog_id);
        if let Some(bucket) = self.by_parent.get_mut(parent_dir(&entry.path)) {
            bucket.remove(&catalog_id);
        }
        true
    }

    /// Consume every item an assertion is about to hand back.
    pub fn mark_as_matched(&mut self, items: &[Item]) {
        for item in items {
            let consumed = self.consume(item.catalog_id());
            debug_assert!(consumed, "item {} matched twice", item.path());
        }
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("root", &self.root)
            .field("loaded", &self.is_loaded())
            .field("items", &self.len())
            .field("unmatched", &self.unmatched.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
