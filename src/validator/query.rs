/// Options for one assertion.
///
/// Name criteria take precedence in the order `name`, `pattern`, `re`; when
/// none is set every candidate passes the name test.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Literal name the target must equal.
    pub name: Option<String>,
    /// Glob-like pattern: `*` is any sequence, `?` any single character.
    pub pattern: Option<String>,
    /// Regular expression the whole target must match.
    pub re: Option<String>,
    /// Directory the assertion is scoped to (`None` is the root).
    pub base_dir: Option<String>,
    /// Consider descendants at any depth instead of immediate children only.
    pub recurse: bool,
    /// Quantity specifier; plural assertions default to `1+`.
    pub n: Option<String>,
}

impl Query {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    #[must_use]
    pub fn re(mut self, re: impl Into<String>) -> Self {
        self.re = Some(re.into());
        self
    }

    #[must_use]
    pub fn base_dir(mut self, base_dir: impl Into<String>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    #[must_use]
    pub const fn recurse(mut self, recurse: bool) -> Self {
        self.recurse = recurse;
        self
    }

    #[must_use]
    pub fn n(mut self, n: impl Into<String>) -> Self {
        self.n = Some(n.into());
        self
    }
}
