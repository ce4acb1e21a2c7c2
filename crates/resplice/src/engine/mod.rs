// Match engine seam
//
// The scanning and substitution code never looks inside a pattern. It only
// needs something that can run one match attempt from a start offset and
// report capture spans, plus the group count and names.
//
// Two engines ship with the crate:
// - `regex`: adapter over `regex::bytes::Regex`
// - `lua`:   byte-oriented backtracking matcher for Lua patterns

pub mod lua;
pub mod regex;

use crate::error::{CompileError, MatchError};
use crate::names::NameTable;
use crate::options::{CompileOptions, ExecOptions};
use crate::record::MatchRecord;

/// A compiled pattern that can be executed against a subject.
pub trait Matcher {
    /// Try to match `subject` at or after byte offset `start`.
    ///
    /// Returns `Ok(None)` when there is no match. The offset is a position in
    /// the whole subject, so anchors and look-behind see the text before it.
    fn exec(
        &self,
        subject: &[u8],
        start: usize,
        options: ExecOptions,
    ) -> Result<Option<MatchRecord>, MatchError>;

    /// Number of capture groups, not counting the whole match.
    fn capture_count(&self) -> usize;

    /// Names indexed `0..=capture_count()`.
    fn name_table(&self) -> NameTable;
}

/// Something that can compile pattern text into a [`Matcher`].
pub trait MatchEngine: Matcher + Sized {
    fn compile(pattern: &str, options: &CompileOptions) -> Result<Self, CompileError>;
}

impl<M: Matcher + ?Sized> Matcher for &M {
    fn exec(
        &self,
        subject: &[u8],
        start: usize,
        options: ExecOptions,
    ) -> Result<Option<MatchRecord>, MatchError> {
        (**self).exec(subject, start, options)
    }

    fn capture_count(&self) -> usize {
        (**self).capture_count()
    }

    fn name_table(&self) -> NameTable {
        (**self).name_table()
    }
}

/// Byte length of the UTF-8 sequence starting at `subject[at]`, or 1 for
/// anything that isn't a valid lead byte.
pub(crate) fn char_width(subject: &[u8], at: usize) -> usize {
    let Some(&lead) = subject.get(at) else {
        return 1;
    };
    let width = match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return 1,
    };
    let end = (at + width).min(subject.len());
    match std::str::from_utf8(&subject[at..end]) {
        Ok(s) if s.len() == width => width,
        _ => 1,
    }
}
