use std::fmt;

use crate::error::{Result, TreeGuardError};

/// Parsed cardinality specifier for an assertion.
///
/// | Spec        | `min_n` | `max_n`   | `max_index` |
/// |-------------|---------|-----------|-------------|
/// | `*` / `0+`  | 0       | unbounded | -1          |
/// | `+` / `1+`  | 1       | unbounded | -1          |
/// | `?` / `0-1` | 0       | 1         | 0           |
/// | `N+`        | N       | unbounded | -1          |
/// | `N`         | N       | N         | N-1         |
/// | `M-N`       | M       | N         | N-1         |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quantity {
    spec: String,
    min_n: usize,
    max_n: Option<usize>,
}

impl Quantity {
    /// Specifier applied to plural assertions when none is given.
    pub const DEFAULT_PLURAL: &'static str = "1+";
    /// Specifier forced onto singular assertions.
    pub const SINGULAR: &'static str = "1";

    /// Parse a specifier string. The whole string must match one of the forms.
    ///
    /// # Errors
    /// Returns `InvalidQuantity` for unknown forms and for ranges whose minimum
    /// exceeds their maximum.
    pub fn parse(spec: &str) -> Result<Self> {
        let (min_n, max_n) = Self::parse_bounds(spec).ok_or_else(|| invalid(spec))?;
        if max_n.is_some_and(|max| min_n > max) {
            return Err(invalid(spec));
        }
        Ok(Self {
            spec: spec.to_string(),
            min_n,
            max_n,
        })
    }

    fn parse_bounds(spec: &str) -> Option<(usize, Option<usize>)> {
        match spec {
            "*" => Some((0, None)),
            "+" => Some((1, None)),
            "?" => Some((0, Some(1))),
            _ => {
                if let Some(min) = spec.strip_suffix('+') {
                    return Some((parse_count(min)?, None));
                }
                if let Some((min, max)) = spec.split_once('-') {
                    return Some((parse_count(min)?, Some(parse_count(max)?)));
                }
                let n = parse_count(spec)?;
                Some((n, Some(n)))
            }
        }
    }

    /// The original specifier string.
    #[must_use]
    pub fn spec(&self) -> &str {
        &self.spec
    }

    #[must_use]
    pub const fn min_n(&self) -> usize {
        self.min_n
    }

    /// Maximum count to retain; `None` means unbounded.
    #[must_use]
    pub const fn max_n(&self) -> Option<usize> {
        self.max_n
    }

    /// Zero-based index bound for truncation, `-1` meaning "do not truncate".
    ///
    /// A maximum of zero also yields `-1`, so `"0"` retains every match.
    #[must_use]
    pub fn max_index(&self) -> isize {
        self.retain_limit()
            .and_then(|limit| isize::try_from(limit - 1).ok())
            .unwrap_or(-1)
    }

    /// Number of leading candidates to keep, `None` for no truncation.
    #[must_use]
    pub fn retain_limit(&self) -> Option<usize> {
        self.max_n.filter(|&max| max > 0)
    }

    /// Truncate an ordered candidate list to the retained prefix.
    pub fn limit<T>(&self, items: &mut Vec<T>) {
        if let Some(limit) = self.retain_limit() {
            items.truncate(limit);
        }
    }

    /// Whether `count` items fall short of the minimum.
    #[must_use]
    pub const fn is_shortfall(&self, count: usize) -> bool {
        count < self.min_n
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spec)
    }
}

impl std::str::FromStr for Quantity {
    type Err = TreeGuardError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn parse_count(digits: &str) -> Option<usize> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn invalid(spec: &str) -> TreeGuardError {
    TreeGuardError::InvalidQuantity {
        spec: spec.to_string(),
    }
}

#[cfg(test)]
#[path = "quantity_tests.rs"]
mod tests;
