use regex::Regex;

use super::Query;
use crate::error::{Result, TreeGuardError};

/// Compiled name test for one assertion.
#[derive(Debug, Clone)]
pub struct NameMatcher {
    regex: Regex,
}

impl NameMatcher {
    /// Build the effective matcher for `query`: `name` > `pattern` > `re` > anything.
    ///
    /// # Errors
    /// Returns `InvalidRegex` if the resulting expression does not compile.
    pub fn from_query(query: &Query) -> Result<Self> {
        let source = if let Some(name) = &query.name {
            name_to_regex(name)
        } else if let Some(pattern) = &query.pattern {
            pattern_to_regex(pattern)
        } else if let Some(re) = &query.re {
            re_to_regex(re)
        } else {
            String::new()
        };
        Self::compile(&source)
    }

    fn compile(source: &str) -> Result<Self> {
        let regex = Regex::new(source).map_err(|source_err| TreeGuardError::InvalidRegex {
            pattern: source.to_string(),
            source: source_err,
        })?;
        Ok(Self { regex })
    }

    #[must_use]
    pub const fn regex(&self) -> &Regex {
        &self.regex
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    #[must_use]
    pub fn is_match(&self, target: &str) -> bool {
        self.regex.is_match(target)
    }
}

/// A literal name, escaped and anchored.
#[must_use]
pub fn name_to_regex(name: &str) -> String {
    anchor(&regex::escape(name))
}

/// A glob-like pattern: `*` becomes `.*`, `?` becomes `.`, the rest is literal.
#[must_use]
pub fn pattern_to_regex(pattern: &str) -> String {
    let mut body = String::with_capacity(pattern.len() * 2);
    let mut buf = [0_u8; 4];
    for ch in pattern.chars() {
        match ch {
            '*' => body.push_str(".*"),
            '?' => body.push('.'),
            other => body.push_str(&regex::escape(other.encode_utf8(&mut buf))),
        }
    }
    anchor(&body)
}

/// A caller-supplied expression, anchored so it must match the whole target.
#[must_use]
pub fn re_to_regex(re: &str) -> String {
    anchor(&format!("(?:{re})"))
}

fn anchor(body: &str) -> String {
    format!(r"\A{body}\z")
}

#[cfg(test)]
#[path = "name_matcher_tests.rs"]
mod tests;
