#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the tree-guard binary.
#[macro_export]
macro_rules! tree_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("tree-guard"))
    };
}

/// Creates a temporary directory tree for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Builds a tree from paths; a trailing `/` makes a directory, anything
    /// else an empty file.
    pub fn with_tree(paths: &[&str]) -> Self {
        let fixture = Self::new();
        fixture.create_tree(paths);
        fixture
    }

    pub fn create_tree(&self, paths: &[&str]) {
        for path in paths {
            if let Some(dir) = path.strip_suffix('/') {
                self.create_dir(dir);
            } else {
                self.create_file(path, "");
            }
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Project-id directory name: two letters, three digits, two letters, four digits.
pub const DRUID_RE: &str = r"[a-z]{2}\d{3}[a-z]{2}\d{4}";
