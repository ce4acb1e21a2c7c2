// Replacement templates: `$name`, `${name}` and `$$`
//
// A name is a run of letters, digits and `_`. All-digit names without a
// leading zero (or exactly "0") address a group by position, anything else
// addresses it by declared name. A `$` that doesn't start a well-formed
// reference is kept as literal text and scanning resumes right after it.
// References that don't resolve expand to nothing.

use std::ops::Range;

use smol_str::SmolStr;

use crate::engine::char_width;
use crate::names::NameTable;
use crate::record::{MatchRecord, Span};

/// A group reference inside a template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Reference {
    Numeric(usize),
    Named(SmolStr),
}

impl Reference {
    /// Classify a reference name.
    pub fn from_name(name: &str) -> Self {
        let positional = !name.is_empty()
            && name.bytes().all(|b| b.is_ascii_digit())
            && (name == "0" || !name.starts_with('0'));
        if positional && let Ok(index) = name.parse::<usize>() {
            return Reference::Numeric(index);
        }
        Reference::Named(SmolStr::new(name))
    }

    /// Span this reference points at in `record`, if any.
    pub fn resolve(&self, record: &MatchRecord, names: &NameTable) -> Option<Span> {
        match self {
            Reference::Numeric(index) => record.get(*index),
            Reference::Named(name) => names.resolve(name, record),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    /// Range into the template source, copied verbatim.
    Literal(Range<usize>),
    Ref(Reference),
}

/// A parsed template, reusable across matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: Vec<u8>,
    parts: Vec<Part>,
}

/// Outcome of looking at the bytes after a `$`.
enum Scanned<'t> {
    /// `$$`
    Escape,
    /// A well-formed reference and the offset just past it.
    Ref(&'t str, usize),
    Malformed,
}

impl Template {
    pub fn parse(template: impl AsRef<[u8]>) -> Self {
        let source = template.as_ref().to_vec();
        let parts = parse_parts(&source);
        Self { source, parts }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.source
    }

    /// References in the order they appear.
    pub fn references(&self) -> impl Iterator<Item = &Reference> + '_ {
        self.parts.iter().filter_map(|part| match part {
            Part::Ref(r) => Some(r),
            Part::Literal(_) => None,
        })
    }

    /// True when expansion never depends on the match.
    pub fn is_literal(&self) -> bool {
        self.references().next().is_none()
    }

    /// Append the rendering of this template for one match to `dst`.
    pub fn expand_into(
        &self,
        dst: &mut Vec<u8>,
        subject: &[u8],
        record: &MatchRecord,
        names: &NameTable,
    ) {
        for part in &self.parts {
            match part {
                Part::Literal(range) => dst.extend_from_slice(&self.source[range.clone()]),
                Part::Ref(reference) => {
                    if let Some(span) = reference.resolve(record, names) {
                        dst.extend_from_slice(&subject[span.range()]);
                    }
                }
            }
        }
    }
}

/// Parse `template` and append its rendering for `record` to `dst`.
pub fn expand(
    dst: &mut Vec<u8>,
    template: &[u8],
    subject: &[u8],
    record: &MatchRecord,
    names: &NameTable,
) {
    Template::parse(template).expand_into(dst, subject, record, names);
}

fn parse_parts(t: &[u8]) -> Vec<Part> {
    let mut parts = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;

    while let Some(offset) = t[i..].iter().position(|&b| b == b'$') {
        let dollar = i + offset;
        match scan_reference(t, dollar) {
            Scanned::Escape => {
                push_literal(&mut parts, literal_start..dollar + 1);
                i = dollar + 2;
                literal_start = i;
            }
            Scanned::Ref(name, next) => {
                push_literal(&mut parts, literal_start..dollar);
                parts.push(Part::Ref(Reference::from_name(name)));
                i = next;
                literal_start = i;
            }
            // the `$` stays in the current literal run
            Scanned::Malformed => i = dollar + 1,
        }
    }
    push_literal(&mut parts, literal_start..t.len());
    parts
}

fn push_literal(parts: &mut Vec<Part>, range: Range<usize>) {
    if !range.is_empty() {
        parts.push(Part::Literal(range));
    }
}

fn scan_reference(t: &[u8], dollar: usize) -> Scanned<'_> {
    let after = dollar + 1;
    match t.get(after) {
        Some(b'$') => Scanned::Escape,
        Some(b'{') => {
            let name_start = after + 1;
            let len = ident_len(&t[name_start..]);
            if len == 0 || t.get(name_start + len) != Some(&b'}') {
                return Scanned::Malformed;
            }
            match std::str::from_utf8(&t[name_start..name_start + len]) {
                Ok(name) => Scanned::Ref(name, name_start + len + 1),
                Err(_) => Scanned::Malformed,
            }
        }
        Some(_) => {
            let len = ident_len(&t[after..]);
            if len == 0 {
                return Scanned::Malformed;
            }
            match std::str::from_utf8(&t[after..after + len]) {
                Ok(name) => Scanned::Ref(name, after + len),
                Err(_) => Scanned::Malformed,
            }
        }
        None => Scanned::Malformed,
    }
}

#[inline]
fn is_ident_char(c: char) -> bool {
    c == '_' || c.is_alphabetic() || c.is_numeric()
}

/// Length in bytes of the identifier at the start of `bytes`.
fn ident_len(bytes: &[u8]) -> usize {
    let mut i = 0;
    while i < bytes.len() {
        let width = char_width(bytes, i);
        let c = std::str::from_utf8(&bytes[i..i + width])
            .ok()
            .and_then(|s| s.chars().next());
        match c {
            Some(c) if is_ident_char(c) => i += width,
            _ => break,
        }
    }
    i
}
