use std::fmt;

use serde::Serialize;

/// Assertion id reserved for entries no assertion claimed.
pub const EXTRA_ITEM_ID: &str = "_EXTRA_";

/// What a warning reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// An assertion found fewer items than its quantity requires.
    Shortfall,
    /// A catalog entry was never claimed by any assertion.
    ExtraItem,
}

/// Parameters of the assertion (or the orphan path) behind a warning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WarningContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub got: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub re: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// One unmet expectation or one unclaimed entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    assertion_id: String,
    kind: WarningKind,
    context: WarningContext,
}

impl Warning {
    #[must_use]
    pub fn shortfall(assertion_id: &str, context: WarningContext) -> Self {
        Self {
            assertion_id: assertion_id.to_string(),
            kind: WarningKind::Shortfall,
            context,
        }
    }

    #[must_use]
    pub fn extra_item(path: &str) -> Self {
        Self {
            assertion_id: EXTRA_ITEM_ID.to_string(),
            kind: WarningKind::ExtraItem,
            context: WarningContext {
                path: Some(path.to_string()),
                ..WarningContext::default()
            },
        }
    }

    #[must_use]
    pub fn assertion_id(&self) -> &str {
        &self.assertion_id
    }

    #[must_use]
    pub const fn kind(&self) -> WarningKind {
        self.kind
    }

    #[must_use]
    pub const fn context(&self) -> &WarningContext {
        &self.context
    }

    #[must_use]
    pub const fn is_extra_item(&self) -> bool {
        matches!(self.kind, WarningKind::ExtraItem)
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            WarningKind::Shortfall => write!(
                f,
                "{}: expected \"{}\", got {}",
                self.assertion_id,
                self.context.n.as_deref().unwrap_or_default(),
                self.context.got.unwrap_or_default()
            ),
            WarningKind::ExtraItem => write!(
                f,
                "ExtraItem: {}",
                self.context.path.as_deref().unwrap_or_default()
            ),
        }
    }
}

#[cfg(test)]
#[path = "warning_tests.rs"]
mod tests;
