use super::*;

fn matcher(query: &Query) -> NameMatcher {
    NameMatcher::from_query(query).unwrap()
}

#[test]
fn name_is_literal_and_anchored() {
    let m = matcher(&Query::new().name("a.txt"));
    assert!(m.is_match("a.txt"));
    assert!(!m.is_match("abtxt"));
    assert!(!m.is_match("xa.txt"));
    assert!(!m.is_match("a.txt.bak"));
}

#[test]
fn pattern_star_and_question_mark() {
    let m = matcher(&Query::new().pattern("*.tif"));
    assert!(m.is_match("a.tif"));
    assert!(m.is_match(".tif"));
    assert!(!m.is_match("a.tiff"));

    let m = matcher(&Query::new().pattern("d?"));
    assert!(m.is_match("d1"));
    assert!(!m.is_match("d"));
    assert!(!m.is_match("d12"));
}

#[test]
fn pattern_escapes_regex_specials() {
    let m = matcher(&Query::new().pattern("a+(b)[c].*"));
    assert!(m.is_match("a+(b)[c].txt"));
    assert!(!m.is_match("aa(b)[c].txt"));
}

#[test]
fn pattern_star_crosses_separators() {
    let m = matcher(&Query::new().pattern("aa/*.txt"));
    assert!(m.is_match("aa/bar/01.txt"));
}

#[test]
fn re_must_match_whole_target() {
    let m = matcher(&Query::new().re("[a-z]{3}"));
    assert!(m.is_match("abc"));
    assert!(!m.is_match("abcd"));
    assert!(!m.is_match("1abc"));
}

#[test]
fn re_alternation_is_grouped_before_anchoring() {
    let m = matcher(&Query::new().re("foo|bar"));
    assert!(m.is_match("foo"));
    assert!(m.is_match("bar"));
    assert!(!m.is_match("foobar"));
    assert!(!m.is_match("xbar"));
}

#[test]
fn re_keeps_capture_groups() {
    let m = matcher(&Query::new().re(r"(\w+)_img_(\d+)\.jpg"));
    let caps = m.regex().captures("abc_img_07.jpg").unwrap();
    assert_eq!(&caps[1], "abc");
    assert_eq!(&caps[2], "07");
}

#[test]
fn empty_query_matches_everything() {
    let m = matcher(&Query::new());
    assert!(m.is_match("anything"));
    assert!(m.is_match(""));
    assert!(m.is_match("a/b/c"));
}

#[test]
fn precedence_name_over_pattern_over_re() {
    let all = Query::new().name("foo").pattern("f*").re(".*");
    let m = matcher(&all);
    assert!(m.is_match("foo"));
    assert!(!m.is_match("fab"));

    let mut without_name = all.clone();
    without_name.name = None;
    let m = matcher(&without_name);
    assert!(m.is_match("fab"));
    assert!(!m.is_match("xyz"));

    let mut only_re = without_name;
    only_re.pattern = None;
    let m = matcher(&only_re);
    assert!(m.is_match("xyz"));
}

#[test]
fn invalid_re_is_usage_error() {
    let err = NameMatcher::from_query(&Query::new().re("(unclosed")).unwrap_err();
    assert!(matches!(err, TreeGuardError::InvalidRegex { .. }));
    assert!(err.is_usage_error());
}

#[test]
fn regex_sources_are_anchored() {
    assert_eq!(name_to_regex("a.b"), r"\Aa\.b\z");
    assert_eq!(pattern_to_regex("*.?"), r"\A.*\..\z");
    assert_eq!(re_to_regex("x|y"), r"\A(?:x|y)\z");
}
