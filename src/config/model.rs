use serde::{Deserialize, Serialize};

use crate::validator::Query;

/// A validation script: where the tree lives and what it must contain.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Script {
    /// Tree root. Relative paths resolve against the script's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,

    /// Top-level assertions, run in order.
    #[serde(default, rename = "assert", skip_serializing_if = "Vec::is_empty")]
    pub assertions: Vec<Assertion>,
}

/// Which query an assertion issues.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AssertionKind {
    Dirs,
    Dir,
    Files,
    File,
}

impl AssertionKind {
    /// `dir` and `file` claim exactly one item.
    #[must_use]
    pub const fn is_singular(self) -> bool {
        matches!(self, Self::Dir | Self::File)
    }
}

/// One assertion, with the assertions to run inside each item it matches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Assertion {
    pub id: String,
    pub kind: AssertionKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub re: Option<String>,

    /// Quantity specifier; ignored by singular kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<String>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub recurse: bool,

    /// Relative to the enclosing item's scope; a leading `/` anchors it at the root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<String>,

    /// Name under which descendants can refer to each matched item.
    #[serde(default, rename = "as", skip_serializing_if = "Option::is_none")]
    pub bind: Option<String>,

    /// Suffix removed from the basename to form `${stem}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Assertion>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(value: &bool) -> bool {
    !*value
}

impl Assertion {
    /// Query with the assertion's criteria as written (templates unexpanded).
    #[must_use]
    pub fn raw_query(&self) -> Query {
        Query {
            name: self.name.clone(),
            pattern: self.pattern.clone(),
            re: self.re.clone(),
            base_dir: self.base_dir.clone(),
            recurse: self.recurse,
            n: self.n.clone(),
        }
    }

    /// Number of assertions in this subtree, including this one.
    #[must_use]
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Self::count).sum::<usize>()
    }
}

impl Script {
    /// Total assertions, counting nested children.
    #[must_use]
    pub fn assertion_count(&self) -> usize {
        self.assertions.iter().map(Assertion::count).sum()
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
