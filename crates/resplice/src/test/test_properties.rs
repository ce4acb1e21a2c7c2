// Property tests for scanning and replacement
use proptest::prelude::*;

use super::support::*;
use crate::*;

fn subject_strategy() -> impl Strategy<Value = String> {
    prop_oneof!["[ab]{0,24}", "[abc ]{0,24}", "(ab|ba| ){0,10}"]
}

proptest! {
    #[test]
    fn test_template_without_dollar_is_verbatim(template in "[^$]{0,40}") {
        let rec = record(&[(0, 1)]);
        let names = NameTable::unnamed(0);
        prop_assert_eq!(expand_to_string(&template, "x", &rec, &names), template);
    }

    #[test]
    fn test_no_records_leaves_subject(subject in proptest::collection::vec(any::<u8>(), 0..64)) {
        let out = assemble(&subject, &Vec::<MatchRecord>::new(), literal_policy(b"?"));
        prop_assert_eq!(out, subject);
    }

    #[test]
    fn test_empty_matches_cover_every_offset(subject in proptest::collection::vec(any::<u8>(), 0..64)) {
        let records = scan_all(&subject, &EmptyEverywhere, Limit::Unbounded).unwrap();
        prop_assert_eq!(records.len(), subject.len() + 1);
        for pair in records.windows(2) {
            prop_assert!(pair[0].start() < pair[1].start());
        }
    }

    #[test]
    fn test_literal_replace_agrees_with_str_replace(subject in subject_strategy()) {
        let re = Regexp::<RegexMatcher>::new("ab").unwrap();
        prop_assert_eq!(
            re.replace_all_literal_str(&subject, "-").unwrap(),
            subject.replace("ab", "-")
        );
    }

    #[test]
    fn test_literal_replace_is_idempotent_without_new_matches(subject in subject_strategy()) {
        let re = Regexp::<RegexMatcher>::new("ab").unwrap();
        let out = re.replace_all_literal(subject.as_bytes(), b"-").unwrap();
        if re.find_all_records(&out, -1).unwrap().is_empty() {
            prop_assert_eq!(re.replace_all_literal(&out, b"-").unwrap(), out);
        }
    }

    #[test]
    fn test_scanned_records_are_ordered_and_in_bounds(subject in subject_strategy()) {
        let re = RegexMatcher::compile("a*|b", &CompileOptions::default()).unwrap();
        let records = scan_all(subject.as_bytes(), &re, Limit::Unbounded).unwrap();
        for rec in &records {
            prop_assert!(rec.start() <= rec.end());
            prop_assert!(rec.end() <= subject.len());
        }
        for pair in records.windows(2) {
            prop_assert!(pair[1].start() >= pair[0].end());
            prop_assert!(pair[1].start() > pair[0].start() || !pair[1].whole().is_empty());
        }
    }

    #[test]
    fn test_engines_agree_on_simple_patterns(subject in subject_strategy()) {
        let by_regex = Regexp::<RegexMatcher>::new("a*").unwrap();
        let by_lua = Regexp::<LuaMatcher>::new("a*").unwrap();
        prop_assert_eq!(
            by_regex.find_all_index(subject.as_bytes(), -1).unwrap(),
            by_lua.find_all_index(subject.as_bytes(), -1).unwrap()
        );
    }

    #[test]
    fn test_limit_truncates_scan(subject in subject_strategy(), n in 0isize..8) {
        let re = Regexp::<RegexMatcher>::new("b").unwrap();
        let all = re.find_all_index(subject.as_bytes(), -1).unwrap();
        let some = re.find_all_index(subject.as_bytes(), n).unwrap();
        prop_assert_eq!(some.len(), all.len().min(n as usize));
        prop_assert_eq!(&some[..], &all[..some.len()]);
    }
}
