// Replace assembler
//
// Copies the gaps between matches verbatim and lets a per-match policy write
// the replacement for each match. Policies only ever see their own match.

use crate::limits::REPLACE_SLACK;
use crate::names::NameTable;
use crate::record::MatchRecord;
use crate::template::Template;

/// Splice replacements into `subject`.
///
/// `records` must be ordered and non-overlapping, as produced by one scan.
/// `per_match` appends the replacement for one record to the output buffer.
pub fn assemble<'r, I, F>(subject: &[u8], records: I, mut per_match: F) -> Vec<u8>
where
    I: IntoIterator<Item = &'r MatchRecord>,
    F: FnMut(&mut Vec<u8>, &MatchRecord),
{
    let mut dst = Vec::with_capacity(subject.len() + REPLACE_SLACK);
    let mut cursor = 0;
    for record in records {
        let span = record.whole();
        dst.extend_from_slice(&subject[cursor..span.start]);
        per_match(&mut dst, record);
        cursor = span.end;
    }
    dst.extend_from_slice(&subject[cursor..]);
    dst
}

/// Policy: expand a fixed template against each match.
pub fn template_policy<'a>(
    template: &'a Template,
    subject: &'a [u8],
    names: &'a NameTable,
) -> impl FnMut(&mut Vec<u8>, &MatchRecord) + 'a {
    move |dst, record| template.expand_into(dst, subject, record, names)
}

/// Policy: the same bytes for every match.
pub fn literal_policy(replacement: &[u8]) -> impl FnMut(&mut Vec<u8>, &MatchRecord) + '_ {
    move |dst, _| dst.extend_from_slice(replacement)
}

/// Policy: transform the matched text.
pub fn transform_policy<'a, F, B>(
    subject: &'a [u8],
    mut transform: F,
) -> impl FnMut(&mut Vec<u8>, &MatchRecord) + 'a
where
    F: FnMut(&[u8]) -> B + 'a,
    B: AsRef<[u8]> + 'a,
{
    move |dst, record| {
        let out = transform(&subject[record.whole().range()]);
        dst.extend_from_slice(out.as_ref());
    }
}
