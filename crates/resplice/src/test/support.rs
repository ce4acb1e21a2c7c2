// Hand-rolled matchers for driving the scanner and assembler directly
use std::cell::Cell;

use crate::*;

/// Matches the empty string at every offset.
pub struct EmptyEverywhere;

impl Matcher for EmptyEverywhere {
    fn exec(
        &self,
        subject: &[u8],
        start: usize,
        options: ExecOptions,
    ) -> Result<Option<MatchRecord>, MatchError> {
        let at = if options.not_empty_at_start {
            start + 1
        } else {
            start
        };
        if at > subject.len() {
            return Ok(None);
        }
        Ok(Some(MatchRecord::new(Span::new(at, at), [])))
    }

    fn capture_count(&self) -> usize {
        0
    }

    fn name_table(&self) -> NameTable {
        NameTable::unnamed(0)
    }
}

/// Succeeds `ok_calls` times with a one-byte match, then fails.
pub struct FailsAfter {
    pub ok_calls: usize,
    pub calls: Cell<usize>,
}

impl FailsAfter {
    pub fn new(ok_calls: usize) -> Self {
        Self {
            ok_calls,
            calls: Cell::new(0),
        }
    }
}

impl Matcher for FailsAfter {
    fn exec(
        &self,
        subject: &[u8],
        start: usize,
        _options: ExecOptions,
    ) -> Result<Option<MatchRecord>, MatchError> {
        let n = self.calls.get();
        self.calls.set(n + 1);
        if n >= self.ok_calls {
            return Err(MatchError::TooComplex);
        }
        let end = (start + 1).min(subject.len());
        Ok(Some(MatchRecord::new(Span::new(start, end), [])))
    }

    fn capture_count(&self) -> usize {
        0
    }

    fn name_table(&self) -> NameTable {
        NameTable::unnamed(0)
    }
}

/// Ignores the not-empty flag and always reports an empty match at 0.
pub struct Stuck;

impl Matcher for Stuck {
    fn exec(
        &self,
        _subject: &[u8],
        _start: usize,
        _options: ExecOptions,
    ) -> Result<Option<MatchRecord>, MatchError> {
        Ok(Some(MatchRecord::new(Span::new(0, 0), [])))
    }

    fn capture_count(&self) -> usize {
        0
    }

    fn name_table(&self) -> NameTable {
        NameTable::unnamed(0)
    }
}

/// Build a record from `(start, end)` pairs, `(-1, -1)` for missing groups.
pub fn record(pairs: &[(isize, isize)]) -> MatchRecord {
    let flat: Vec<isize> = pairs.iter().flat_map(|&(s, e)| [s, e]).collect();
    MatchRecord::from_offsets(&flat).unwrap()
}

pub fn expand_to_string(template: &str, subject: &str, rec: &MatchRecord, names: &NameTable) -> String {
    let mut out = Vec::new();
    expand(&mut out, template.as_bytes(), subject.as_bytes(), rec, names);
    String::from_utf8(out).unwrap()
}
