// Tests for match records and their flat offset form
use crate::*;

#[test]
fn test_from_offsets_with_sentinels() {
    let rec = MatchRecord::from_offsets(&[0, 3, -1, -1, 1, 2]).unwrap();
    assert_eq!(rec.whole(), Span::new(0, 3));
    assert_eq!(rec.get(1), None);
    assert_eq!(rec.get(2), Some(Span::new(1, 2)));
    assert_eq!(rec.to_offsets(), vec![0, 3, -1, -1, 1, 2]);
}

#[test]
fn test_from_offsets_rejects_inverted_pair() {
    assert_eq!(MatchRecord::from_offsets(&[5, 3]), None);
    assert_eq!(MatchRecord::from_offsets(&[0, 4, 3, 1]), None);
}

#[test]
fn test_from_offsets_rejects_odd_length() {
    assert_eq!(MatchRecord::from_offsets(&[0, 1, 2]), None);
    assert_eq!(MatchRecord::from_offsets(&[0]), None);
}

#[test]
fn test_from_offsets_needs_whole_match() {
    assert_eq!(MatchRecord::from_offsets(&[]), None);
    assert_eq!(MatchRecord::from_offsets(&[-1, -1, 0, 1]), None);
}

#[test]
fn test_span_try_new() {
    assert_eq!(Span::try_new(2, 2), Ok(Span::new(2, 2)));
    assert_eq!(
        Span::try_new(5, 2),
        Err(RecordError::InvertedSpan { start: 5, end: 2 })
    );
}
