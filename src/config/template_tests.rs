use regex::Regex;

use super::*;
use crate::catalog::{CatalogEntry, ItemKind};

fn matched_item(path: &str, kind: ItemKind, re: &str) -> Item {
    let mut item = Item::from_entry(&CatalogEntry::new(0, path.to_string(), kind));
    item.set_target(crate::path_utils::basename(path));
    assert!(item.record_match(&Regex::new(re).unwrap()));
    item
}

fn druid_bindings() -> Bindings {
    let druid = matched_item("aa000aa0001", ItemKind::Directory, r"\A(\w\w)\d{3}(\w\w)\d{4}\z");
    let image = matched_item(
        "aa000aa0001/aa000aa0001_00_0001.tif",
        ItemKind::File,
        r"\A\w+_(\d\d)_(\d{4})\.tif\z",
    );
    Bindings::new()
        .with_item(&druid, None, Some("druid"))
        .with_item(&image, Some(".tif"), None)
}

#[test]
fn innermost_item_variables() {
    let b = druid_bindings();
    assert_eq!(b.lookup("path").as_deref(), Some("aa000aa0001/aa000aa0001_00_0001.tif"));
    assert_eq!(b.lookup("basename").as_deref(), Some("aa000aa0001_00_0001.tif"));
    assert_eq!(b.lookup("stem").as_deref(), Some("aa000aa0001_00_0001"));
    assert_eq!(b.lookup("1").as_deref(), Some("00"));
    assert_eq!(b.lookup("2").as_deref(), Some("0001"));
    assert_eq!(b.lookup("9").as_deref(), Some(""));
}

#[test]
fn bound_ancestor_variables() {
    let b = druid_bindings();
    assert_eq!(b.lookup("druid").as_deref(), Some("aa000aa0001"));
    assert_eq!(b.lookup("druid.path").as_deref(), Some("aa000aa0001"));
    assert_eq!(b.lookup("druid.stem").as_deref(), Some("aa000aa0001"));
    assert_eq!(b.lookup("druid.1").as_deref(), Some("aa"));
    assert_eq!(b.lookup("druid.2").as_deref(), Some("aa"));
}

#[test]
fn unknown_variables_resolve_to_none() {
    let b = druid_bindings();
    assert!(b.lookup("nope").is_none());
    assert!(b.lookup("druid.size").is_none());
    assert!(Bindings::new().lookup("path").is_none());
}

#[test]
fn inner_binding_shadows_outer() {
    let outer = matched_item("a", ItemKind::Directory, r"\Aa\z");
    let inner = matched_item("a/b", ItemKind::Directory, r"\Ab\z");
    let b = Bindings::new()
        .with_item(&outer, None, Some("x"))
        .with_item(&inner, None, Some("x"));
    assert_eq!(b.lookup("x.path").as_deref(), Some("a/b"));
    assert_eq!(b.depth(), 2);
}

#[test]
fn expand_replaces_every_variable() {
    let b = druid_bindings();
    assert_eq!(
        b.expand("${druid}_${1}_${2}.jp2", false).unwrap(),
        "aa000aa0001_00_0001.jp2"
    );
    assert_eq!(b.expand("no variables", false).unwrap(), "no variables");
}

#[test]
fn expand_escapes_values_for_regex() {
    let b = druid_bindings();
    assert_eq!(
        b.expand(r"${basename}\.md5", true).unwrap(),
        r"aa000aa0001_00_0001\.tif\.md5"
    );
}

#[test]
fn expand_leaves_regex_quantifiers_alone() {
    let b = druid_bindings();
    assert_eq!(b.expand(r"${druid}_\d{2}$", true).unwrap(), r"aa000aa0001_\d{2}$");
}

#[test]
fn expand_unknown_variable_is_script_error() {
    let err = Bindings::new().expand("${stem}.txt", false).unwrap_err();
    assert!(matches!(err, TreeGuardError::Script(_)));
    assert!(err.to_string().contains("${stem}"));
}

#[test]
fn expand_unterminated_variable_is_script_error() {
    let err = druid_bindings().expand("${druid", false).unwrap_err();
    assert!(matches!(err, TreeGuardError::Script(_)));
}

#[test]
fn binding_names() {
    assert!(is_valid_binding("druid"));
    assert!(is_valid_binding("_x1"));
    assert!(!is_valid_binding(""));
    assert!(!is_valid_binding("1x"));
    assert!(!is_valid_binding("a.b"));
    assert!(!is_valid_binding("path"));
    assert!(!is_valid_binding("stem"));
}
