//! `${...}` substitution in assertion criteria.
//!
//! Variables refer to the item an assertion runs inside (`${path}`,
//! `${basename}`, `${stem}`, `${0}`..`${9}`) or to any enclosing item bound
//! with `as` (`${x}`, `${x.path}`, `${x.basename}`, `${x.stem}`, `${x.N}`).

use crate::catalog::Item;
use crate::error::{Result, TreeGuardError};

/// Variable names that cannot be used as `as` bindings.
pub const RESERVED_NAMES: [&str; 3] = ["path", "basename", "stem"];

#[derive(Debug, Clone)]
struct Frame {
    bind: Option<String>,
    path: String,
    basename: String,
    stem: String,
    captures: Vec<String>,
}

impl Frame {
    fn field(&self, field: &str) -> Option<String> {
        match field {
            "path" => Some(self.path.clone()),
            "basename" => Some(self.basename.clone()),
            "stem" => Some(self.stem.clone()),
            index if is_capture_index(index) => {
                let i: usize = index.parse().ok()?;
                Some(self.captures.get(i).cloned().unwrap_or_default())
            }
            _ => None,
        }
    }
}

fn is_capture_index(field: &str) -> bool {
    !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit())
}

/// Items enclosing the assertion being expanded, innermost last.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    frames: Vec<Frame>,
}

impl Bindings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bindings for assertions nested inside `item`.
    ///
    /// `suffix` is stripped from the basename to form the stem; `bind` names
    /// the item for deeper descendants.
    #[must_use]
    pub fn with_item(&self, item: &Item, suffix: Option<&str>, bind: Option<&str>) -> Self {
        let frame = Frame {
            bind: bind.map(str::to_string),
            path: item.path().to_string(),
            basename: item.basename().to_string(),
            stem: suffix.map_or_else(|| item.basename(), |s| item.basename_without(s)).to_string(),
            captures: item
                .captures()
                .unwrap_or_default()
                .iter()
                .map(|group| group.clone().unwrap_or_default())
                .collect(),
        };
        let mut frames = self.frames.clone();
        frames.push(frame);
        Self { frames }
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Value of a variable, or `None` if nothing defines it.
    #[must_use]
    pub fn lookup(&self, variable: &str) -> Option<String> {
        let (head, field) = variable
            .split_once('.')
            .map_or((variable, None), |(head, field)| (head, Some(field)));

        if field.is_none() && (RESERVED_NAMES.contains(&head) || is_capture_index(head)) {
            return self.frames.last()?.field(head);
        }

        let frame = self
            .frames
            .iter()
            .rev()
            .find(|frame| frame.bind.as_deref() == Some(head))?;
        frame.field(field.unwrap_or("basename"))
    }

    /// Replace every `${...}` in `template`.
    ///
    /// With `escape_values`, substituted values are regex-escaped so they
    /// match literally inside a regular expression.
    ///
    /// # Errors
    /// Returns a script error for an unknown or unterminated variable.
    pub fn expand(&self, template: &str, escape_values: bool) -> Result<String> {
        let mut output = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("${") {
            output.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let Some(end) = after.find('}') else {
                return Err(TreeGuardError::Script(format!(
                    "unterminated variable in {template:?}"
                )));
            };
            let variable = &after[..end];
            let value = self.lookup(variable).ok_or_else(|| {
                TreeGuardError::Script(format!("unknown variable ${{{variable}}} in {template:?}"))
            })?;
            if escape_values {
                output.push_str(&regex::escape(&value));
            } else {
                output.push_str(&value);
            }
            rest = &after[end + 1..];
        }

        output.push_str(rest);
        Ok(output)
    }
}

/// Check that `name` can be used with `as`.
#[must_use]
pub fn is_valid_binding(name: &str) -> bool {
    let mut chars = name.chars();
    let starts_ok = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    starts_ok
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !RESERVED_NAMES.contains(&name)
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
