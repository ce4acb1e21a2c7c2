// Tests for the Lua pattern engine
use crate::*;

fn lua(pattern: &str) -> Regexp<LuaMatcher> {
    Regexp::new(pattern).unwrap()
}

#[test]
fn test_gsub_style_replacement() {
    assert_eq!(lua("o").replace_all_str("hello world", "0").unwrap(), "hell0 w0rld");
    assert_eq!(
        lua("(%w+)=(%w+)").replace_all_str("a=1, b=2", "$2=$1").unwrap(),
        "1=a, 2=b"
    );
}

#[test]
fn test_words() {
    assert_eq!(
        lua("%a+").find_all_str("one two  three", -1).unwrap(),
        vec!["one", "two", "three"]
    );
}

#[test]
fn test_not_empty_at_start_backtracks_into_longer_match() {
    // lazy `a-` prefers empty, the flag forces it to take one `a`
    let m = LuaMatcher::compile("a-", &CompileOptions::default()).unwrap();
    let flag = ExecOptions::default().not_empty_at_start(true);
    let rec = m.exec(b"aa", 0, flag).unwrap().unwrap();
    assert_eq!(rec.whole(), Span::new(0, 1));

    let plain = m.exec(b"aa", 0, ExecOptions::default()).unwrap().unwrap();
    assert_eq!(plain.whole(), Span::new(0, 0));
}

#[test]
fn test_not_empty_allows_empty_later() {
    let m = LuaMatcher::compile("x*", &CompileOptions::default()).unwrap();
    let flag = ExecOptions::default().not_empty_at_start(true);
    let rec = m.exec(b"ab", 0, flag).unwrap().unwrap();
    assert_eq!(rec.whole(), Span::new(1, 1));
}

#[test]
fn test_lazy_scan() {
    let spans = lua("a-").find_all_index(b"aa", -1).unwrap();
    // an empty match at the end is refused right after a match ending there
    assert_eq!(spans, vec![Span::new(0, 0), Span::new(0, 1), Span::new(1, 2)]);
}

#[test]
fn test_position_captures() {
    let r = lua("()ll()");
    assert_eq!(r.captures_len(), 2);
    assert_eq!(
        r.find_submatch_index(b"hello").unwrap(),
        Some(vec![2, 4, 2, 2, 4, 4])
    );
}

#[test]
fn test_balanced_match() {
    assert_eq!(
        lua("%b()").find_str("f(a(b)c) x").unwrap(),
        Some("(a(b)c)".to_string())
    );
    assert_eq!(lua("%b()").find_str("f(a(b c").unwrap(), None);
}

#[test]
fn test_frontier() {
    assert_eq!(
        lua("%f[%w]%w+").find_all_str("THE (quick) fox", -1).unwrap(),
        vec!["THE", "quick", "fox"]
    );
}

#[test]
fn test_back_reference() {
    let r = lua(r#"(["'])(.-)%1"#);
    let groups = r.find_submatch_str(r#"say "hi" now"#).unwrap().unwrap();
    assert_eq!(groups, vec![r#""hi""#, "\"", "hi"]);
}

#[test]
fn test_anchor_only_at_subject_start() {
    let r = lua("^a");
    assert_eq!(r.find_all_index(b"aaa", -1).unwrap(), vec![Span::new(0, 1)]);
    assert_eq!(r.replace_all_str("aaa", "b").unwrap(), "baa");
}

#[test]
fn test_end_anchor() {
    assert_eq!(lua("%d+$").find_str("a1b22").unwrap(), Some("22".to_string()));
    assert_eq!(lua("%d+$").find_str("a1b22c").unwrap(), None);
}

#[test]
fn test_sets_and_classes() {
    assert_eq!(
        lua("[%a_][%w_]*").find_all_str("x1 _y 9z", -1).unwrap(),
        vec!["x1", "_y", "z"]
    );
    assert_eq!(lua("%s+").replace_all_literal_str("a  b\t\tc", " ").unwrap(), "a b c");
}

#[test]
fn test_optional() {
    assert_eq!(
        lua("colou?r").find_all_str("color colour", -1).unwrap(),
        vec!["color", "colour"]
    );
}

#[test]
fn test_name_table_is_unnamed() {
    let r = lua("(a)(b)");
    let names: Vec<&str> = r.capture_names().iter().collect();
    assert_eq!(names, vec!["", "", ""]);
    assert_eq!(r.replace_all_str("ab", "${2}${1}").unwrap(), "ba");
}

#[test]
fn test_compile_errors() {
    let opts = CompileOptions::default();
    assert_eq!(
        LuaMatcher::compile("abc%", &opts).unwrap_err(),
        CompileError::Malformed("ends with '%'")
    );
    assert_eq!(
        LuaMatcher::compile("[abc", &opts).unwrap_err(),
        CompileError::Malformed("missing ']'")
    );
    assert_eq!(
        LuaMatcher::compile("a", &opts.clone().case_insensitive(true)).unwrap_err(),
        CompileError::Unsupported("case_insensitive")
    );
    let many = "()".repeat(limits::MAX_CAPTURES + 1);
    assert_eq!(
        LuaMatcher::compile(&many, &opts).unwrap_err(),
        CompileError::TooManyCaptures {
            limit: limits::MAX_CAPTURES
        }
    );
}

#[test]
fn test_exec_errors_propagate() {
    assert_eq!(
        lua("a)").find_all(b"a", -1).unwrap_err(),
        MatchError::InvalidPatternCapture
    );
    assert_eq!(
        lua("(a").replace_all(b"a", b"x").unwrap_err(),
        MatchError::UnfinishedCapture
    );
    assert_eq!(lua("%1").is_match(b"a").unwrap_err(), MatchError::InvalidCapture(1));
}

#[test]
fn test_depth_limit() {
    let opts = CompileOptions::default().depth_limit(2);
    let r = Regexp::<LuaMatcher>::with_options("(((a)))", &opts).unwrap();
    assert_eq!(r.is_match(b"a").unwrap_err(), MatchError::TooComplex);
}

#[test]
fn test_raw_byte_patterns() {
    let m = LuaMatcher::from_bytes(b"\xff+", &CompileOptions::default()).unwrap();
    let records = scan_all(b"a\xff\xffb", &m, Limit::Unbounded).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].whole(), Span::new(1, 3));
}
