//! The assertion engine.
//!
//! Every assertion runs the same pipeline against the catalog's unmatched
//! entries: scope by base directory, test names, truncate to the quantity,
//! record a shortfall warning, then consume whatever is returned so no later
//! assertion can claim it again.

mod name_matcher;
mod query;
mod warning;

pub use name_matcher::{NameMatcher, name_to_regex, pattern_to_regex, re_to_regex};
pub use query::Query;
pub use warning::{EXTRA_ITEM_ID, Warning, WarningContext, WarningKind};

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::catalog::{Catalog, Item, ItemKind};
use crate::error::{Result, TreeGuardError};
use crate::path_utils::{SEPARATOR, normalize_base_dir, strip_base_dir};
use crate::quantity::Quantity;

#[derive(Debug)]
pub struct Validator {
    root_path: PathBuf,
    catalog: Catalog,
    warnings: Vec<Warning>,
    validated: bool,
}

impl Validator {
    /// Validator over the tree at `root_path`. Nothing is read until the first query.
    #[must_use]
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        Self::with_catalog(Catalog::new(root_path))
    }

    #[must_use]
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            root_path: catalog.root().to_path_buf(),
            catalog,
            warnings: Vec::new(),
            validated: false,
        }
    }

    #[must_use]
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    #[must_use]
    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }

    #[must_use]
    pub const fn is_validated(&self) -> bool {
        self.validated
    }

    /// Directories matching `query`, defaulting to a quantity of `1+`.
    ///
    /// # Errors
    /// Returns a usage error for an empty id, a malformed quantity or an
    /// invalid regex, and a scan error if the root cannot be read.
    pub fn dirs(&mut self, id: &str, query: &Query) -> Result<Vec<Item>> {
        self.process_items(ItemKind::Directory, id, query)
    }

    /// Files matching `query`, defaulting to a quantity of `1+`.
    ///
    /// # Errors
    /// See [`Validator::dirs`].
    pub fn files(&mut self, id: &str, query: &Query) -> Result<Vec<Item>> {
        self.process_items(ItemKind::File, id, query)
    }

    /// Exactly one directory; any `n` in `query` is replaced by `1`.
    ///
    /// # Errors
    /// See [`Validator::dirs`].
    pub fn dir(&mut self, id: &str, query: &Query) -> Result<Option<Item>> {
        let items = self.dirs(id, &singular(query))?;
        Ok(items.into_iter().next())
    }

    /// Exactly one file; any `n` in `query` is replaced by `1`.
    ///
    /// # Errors
    /// See [`Validator::dirs`].
    pub fn file(&mut self, id: &str, query: &Query) -> Result<Option<Item>> {
        let items = self.files(id, &singular(query))?;
        Ok(items.into_iter().next())
    }

    fn process_items(&mut self, kind: ItemKind, id: &str, query: &Query) -> Result<Vec<Item>> {
        if id.trim().is_empty() {
            return Err(TreeGuardError::MissingIdentifier);
        }
        if id == EXTRA_ITEM_ID {
            return Err(TreeGuardError::ReservedIdentifier(id.to_string()));
        }
        let quantity = Quantity::parse(query.n.as_deref().unwrap_or(Quantity::DEFAULT_PLURAL))?;
        let matcher = NameMatcher::from_query(query)?;
        let base_dir = query.base_dir.as_deref().map_or("", normalize_base_dir);

        self.catalog.load()?;

        // Recursive queries defer base-dir scoping to the prefix test below.
        let lookup = (!query.recurse).then_some(base_dir);
        let candidates: Vec<Item> = self
            .catalog
            .unmatched_of_kind(kind, lookup)
            .into_iter()
            .map(Item::from_entry)
            .collect();

        let mut items = name_filtered(candidates, base_dir, query.recurse, &matcher);
        quantity.limit(&mut items);

        let got = items.len();
        if quantity.is_shortfall(got) {
            self.add_warning(Warning::shortfall(
                id,
                shortfall_context(query, base_dir, &quantity, got),
            ));
        }

        self.catalog.mark_as_matched(&items);
        debug!(id, %kind, base_dir, n = quantity.spec(), got, "assertion");
        Ok(items)
    }

    fn add_warning(&mut self, warning: Warning) {
        trace!(%warning, "warning recorded");
        self.warnings.push(warning);
    }

    /// Record an extra-item warning for every entry no assertion claimed.
    ///
    /// Runs once; later calls do nothing.
    ///
    /// # Errors
    /// Returns a scan error if the catalog was never loaded and the root
    /// cannot be read.
    pub fn validate(&mut self) -> Result<()> {
        if self.validated {
            return Ok(());
        }
        self.catalog.load()?;

        let extras: Vec<Warning> = self
            .catalog
            .unmatched_items(None)
            .into_iter()
            .map(|entry| Warning::extra_item(&entry.path))
            .collect();
        debug!(extras = extras.len(), "reconciled unmatched items");
        for warning in extras {
            self.add_warning(warning);
        }
        self.validated = true;
        Ok(())
    }
}

fn singular(query: &Query) -> Query {
    query.clone().n(Quantity::SINGULAR)
}

/// Keep candidates inside `base_dir` whose target passes the name test.
///
/// The target is the path relative to `base_dir`; without `recurse` only
/// targets with no separator (immediate children) are eligible.
fn name_filtered(
    candidates: Vec<Item>,
    base_dir: &str,
    recurse: bool,
    matcher: &NameMatcher,
) -> Vec<Item> {
    candidates
        .into_iter()
        .filter_map(|mut item| {
            let target = strip_base_dir(item.path(), base_dir)?.to_string();
            if !recurse && target.contains(SEPARATOR) {
                return None;
            }
            item.set_target(&target);
            let matched = item.record_match(matcher.regex());
            trace!(path = item.path(), target = %target, matched, "name test");
            matched.then_some(item)
        })
        .collect()
}

fn shortfall_context(query: &Query, base_dir: &str, quantity: &Quantity, got: usize) -> WarningContext {
    WarningContext {
        got: Some(got),
        n: Some(quantity.spec().to_string()),
        base_dir: Some(base_dir.to_string()).filter(|dir| !dir.is_empty()),
        name: query.name.clone(),
        re: query.re.clone(),
        pattern: query.pattern.clone(),
        path: None,
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
