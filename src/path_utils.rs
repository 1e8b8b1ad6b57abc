//! Helpers for the root-relative, `/`-separated path strings used by the catalog.

/// Separator used in every catalog path, on every platform.
pub const SEPARATOR: char = '/';

/// Normalize a relative path into catalog form.
///
/// Both `/` and `\\` are accepted as separators. Empty and `.` components are
/// dropped, `..` removes the preceding component (and is discarded at the
/// root), and the result never carries a leading `./` or a trailing separator.
///
/// # Examples
///
/// - `"./foo/bar/fubb/../.././blah.txt"` becomes `"foo/blah.txt"`
/// - `"foo/"` becomes `"foo"`
/// - `"."` becomes `""` (the root)
#[must_use]
pub fn normalize_path(raw: &str) -> String {
    let mut components: Vec<&str> = Vec::new();
    for component in raw.split(['/', '\\']) {
        match component {
            "" | "." => {}
            ".." => {
                components.pop();
            }
            other => components.push(other),
        }
    }
    components.join("/")
}

/// Parent directory of a catalog path; `""` for entries directly under the root.
#[must_use]
pub fn parent_dir(path: &str) -> &str {
    path.rsplit_once(SEPARATOR).map_or("", |(parent, _)| parent)
}

/// Final component of a catalog path.
#[must_use]
pub fn basename(path: &str) -> &str {
    path.rsplit_once(SEPARATOR).map_or(path, |(_, name)| name)
}

/// Strip every trailing separator from a caller-supplied base directory.
#[must_use]
pub fn normalize_base_dir(base_dir: &str) -> &str {
    base_dir.trim_end_matches(SEPARATOR)
}

/// Path of `path` relative to `base_dir`, or `None` when it lies outside it.
///
/// An empty `base_dir` denotes the root, so every path is returned unchanged.
#[must_use]
pub fn strip_base_dir<'a>(path: &'a str, base_dir: &str) -> Option<&'a str> {
    if base_dir.is_empty() {
        return Some(path);
    }
    path.strip_prefix(base_dir)?.strip_prefix(SEPARATOR)
}

/// Resolve `relative` against `scope`.
///
/// A leading separator makes `relative` root-relative; otherwise it is joined
/// onto `scope` (the root when `None`) and normalized, so `..` can climb to a
/// sibling directory.
#[must_use]
pub fn resolve_relative(scope: Option<&str>, relative: &str) -> String {
    if relative.starts_with(['/', '\\']) {
        return normalize_path(relative);
    }
    match scope {
        Some(scope) if !scope.is_empty() => normalize_path(&format!("{scope}/{relative}")),
        _ => normalize_path(relative),
    }
}
