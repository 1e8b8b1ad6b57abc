//! Drives a [`Validator`] through a script's assertions.

use tracing::{debug, trace};

use crate::catalog::Item;
use crate::error::Result;
use crate::path_utils::resolve_relative;
use crate::validator::{Query, Validator};

use super::model::{Assertion, AssertionKind, Script};
use super::template::Bindings;

/// Counters for one script run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Assertions issued, counting each per-item run of a child.
    pub assertions: usize,
    /// Items claimed by those assertions.
    pub matched: usize,
}

pub struct ScriptRunner<'a> {
    script: &'a Script,
}

impl<'a> ScriptRunner<'a> {
    #[must_use]
    pub const fn new(script: &'a Script) -> Self {
        Self { script }
    }

    /// Issue every assertion of the script against `validator`.
    ///
    /// Children run once per item their parent matched, depth-first and in
    /// item order, scoped to that item.
    ///
    /// # Errors
    /// Stops at the first usage, script, or scan error.
    pub fn run(&self, validator: &mut Validator) -> Result<RunStats> {
        let mut stats = RunStats::default();
        let bindings = Bindings::new();
        for assertion in &self.script.assertions {
            run_assertion(validator, assertion, None, &bindings, &mut stats)?;
        }
        debug!(
            assertions = stats.assertions,
            matched = stats.matched,
            "script finished"
        );
        Ok(stats)
    }
}

fn run_assertion(
    validator: &mut Validator,
    assertion: &Assertion,
    parent: Option<&Item>,
    bindings: &Bindings,
    stats: &mut RunStats,
) -> Result<()> {
    let query = expand_query(assertion, parent, bindings)?;
    trace!(id = %assertion.id, ?query, depth = bindings.depth(), "issuing assertion");

    let items = issue(validator, assertion.kind, &assertion.id, &query, parent)?;
    stats.assertions += 1;
    stats.matched += items.len();

    if assertion.children.is_empty() {
        return Ok(());
    }
    for item in &items {
        let inner = bindings.with_item(item, assertion.suffix.as_deref(), assertion.bind.as_deref());
        for child in &assertion.children {
            run_assertion(validator, child, Some(item), &inner, stats)?;
        }
    }
    Ok(())
}

/// Query for `assertion` with every template expanded.
///
/// An explicit `base_dir` is resolved against the enclosing item's scope.
fn expand_query(assertion: &Assertion, parent: Option<&Item>, bindings: &Bindings) -> Result<Query> {
    let expand = |value: Option<&String>, escape: bool| -> Result<Option<String>> {
        value.map(|v| bindings.expand(v, escape)).transpose()
    };

    let mut query = assertion.raw_query();
    query.name = expand(assertion.name.as_ref(), false)?;
    query.pattern = expand(assertion.pattern.as_ref(), false)?;
    query.re = expand(assertion.re.as_ref(), true)?;
    query.base_dir = expand(assertion.base_dir.as_ref(), false)?
        .map(|dir| resolve_relative(parent.and_then(Item::scope), &dir));
    Ok(query)
}

/// Run one query, through the parent item when it supplies the scope.
fn issue(
    validator: &mut Validator,
    kind: AssertionKind,
    id: &str,
    query: &Query,
    parent: Option<&Item>,
) -> Result<Vec<Item>> {
    match parent.filter(|_| query.base_dir.is_none()) {
        Some(item) => match kind {
            AssertionKind::Dirs => item.dirs(validator, id, query),
            AssertionKind::Dir => Ok(item.dir(validator, id, query)?.into_iter().collect()),
            AssertionKind::Files => item.files(validator, id, query),
            AssertionKind::File => Ok(item.file(validator, id, query)?.into_iter().collect()),
        },
        None => match kind {
            AssertionKind::Dirs => validator.dirs(id, query),
            AssertionKind::Dir => Ok(validator.dir(id, query)?.into_iter().collect()),
            AssertionKind::Files => validator.files(id, query),
            AssertionKind::File => Ok(validator.file(id, query)?.into_iter().collect()),
        },
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
