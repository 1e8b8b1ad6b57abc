use tempfile::TempDir;

use super::*;
use crate::config::parse_script;

#[test]
fn template_is_a_valid_script() {
    let script = parse_script(&generate_script_template()).unwrap();
    assert_eq!(script.root.as_deref(), Some("."));
    assert_eq!(script.assertions.len(), 1);
    assert_eq!(script.assertion_count(), 3);
}

#[test]
fn run_init_creates_script() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".tree-guard.toml");

    let args = InitArgs {
        output: path.clone(),
        force: false,
    };
    assert_eq!(run_init(&args), EXIT_SUCCESS);
    assert!(path.exists());
}

#[test]
fn run_init_refuses_to_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".tree-guard.toml");
    std::fs::write(&path, "existing content").unwrap();

    let args = InitArgs {
        output: path.clone(),
        force: false,
    };
    let err = run_init_impl(&args).unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert_eq!(run_init(&args), EXIT_CONFIG_ERROR);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "existing content");
}

#[test]
fn run_init_overwrites_with_force() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".tree-guard.toml");
    std::fs::write(&path, "old content").unwrap();

    let args = InitArgs {
        output: path.clone(),
        force: true,
    };
    run_init_impl(&args).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("[[assert]]"));
    assert!(!content.contains("old content"));
}
