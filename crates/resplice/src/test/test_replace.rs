// Tests for the replace assembler and its policies
use super::support::*;
use crate::*;

#[test]
fn test_no_records_returns_subject() {
    let subject = b"unchanged text";
    let out = assemble(subject, &Vec::<MatchRecord>::new(), literal_policy(b"X"));
    assert_eq!(out, subject);
}

#[test]
fn test_literal_policy_splices_gaps() {
    let subject = b"a-b-c";
    let records = vec![record(&[(1, 2)]), record(&[(3, 4)])];
    let out = assemble(subject, &records, literal_policy(b"+"));
    assert_eq!(out, b"a+b+c");
}

#[test]
fn test_empty_records_insert() {
    let subject = b"ab";
    let records = vec![record(&[(0, 0)]), record(&[(1, 1)]), record(&[(2, 2)])];
    let out = assemble(subject, &records, literal_policy(b"|"));
    assert_eq!(out, b"|a|b|");
}

#[test]
fn test_template_policy() {
    let subject = b"k1=v1;k2=v2";
    let names = NameTable::new(["", "key", "value"]);
    let records = vec![
        record(&[(0, 5), (0, 2), (3, 5)]),
        record(&[(6, 11), (6, 8), (9, 11)]),
    ];
    let template = Template::parse("${value}=${key}");
    let out = assemble(subject, &records, template_policy(&template, subject, &names));
    assert_eq!(out, b"v1=k1;v2=k2");
}

#[test]
fn test_transform_policy_sees_only_its_match() {
    let subject = b"one two";
    let records = vec![record(&[(0, 3)]), record(&[(4, 7)])];
    let mut seen = Vec::new();
    let out = assemble(
        subject,
        &records,
        transform_policy(subject, |m: &[u8]| {
            seen.push(m.to_vec());
            m.to_ascii_uppercase()
        }),
    );
    assert_eq!(out, b"ONE TWO");
    assert_eq!(seen, vec![b"one".to_vec(), b"two".to_vec()]);
}

#[test]
fn test_custom_policy_closure() {
    let subject = b"x1y22z";
    let records = vec![record(&[(1, 2)]), record(&[(3, 5)])];
    let out = assemble(subject, &records, |dst: &mut Vec<u8>, rec: &MatchRecord| {
        dst.extend_from_slice(rec.len().to_string().as_bytes());
        dst.extend_from_slice(rec.whole().len().to_string().as_bytes());
    });
    assert_eq!(out, b"x11y12z");
}
