// Adapter over `regex::bytes::Regex`
//
// The regex crate has no "not empty at start" flag. When the preferred match
// is empty at the guarded offset the search is repeated one character later,
// which is the convention of leftmost-first engines for iterating matches.

use ::regex::bytes::{CaptureLocations, Regex, RegexBuilder};

use super::{MatchEngine, Matcher, char_width};
use crate::error::{CompileError, MatchError};
use crate::names::NameTable;
use crate::options::{CompileOptions, ExecOptions};
use crate::record::{MatchRecord, Span};

/// Matcher over `regex::bytes::Regex`.
///
/// With `ExecOptions::not_empty_at_start` an empty match at the start
/// offset is skipped by searching again from the next character, so a
/// non-empty alternative at that same offset is never returned. `|a` on
/// `"a"` yields `1..1` here, where a backtracking engine yields `0..1`.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    regex: Regex,
    names: NameTable,
}

impl RegexMatcher {
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    fn record_from(&self, locs: &CaptureLocations) -> Option<MatchRecord> {
        let slots = (0..locs.len())
            .map(|i| locs.get(i).map(|(s, e)| Span::new(s, e)))
            .collect();
        MatchRecord::from_slots(slots)
    }
}

impl MatchEngine for RegexMatcher {
    fn compile(pattern: &str, options: &CompileOptions) -> Result<Self, CompileError> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(options.case_insensitive)
            .multi_line(options.multi_line)
            .dot_matches_new_line(options.dot_all)
            .ignore_whitespace(options.extended)
            .swap_greed(options.ungreedy)
            .build()?;
        let names = NameTable::new(regex.capture_names().map(|n| n.unwrap_or("")));
        Ok(Self { regex, names })
    }
}

impl Matcher for RegexMatcher {
    fn exec(
        &self,
        subject: &[u8],
        start: usize,
        options: ExecOptions,
    ) -> Result<Option<MatchRecord>, MatchError> {
        if start > subject.len() {
            return Err(MatchError::BadOffset {
                offset: start,
                len: subject.len(),
            });
        }

        let mut locs = self.regex.capture_locations();
        let mut at = start;
        loop {
            let Some(m) = self.regex.captures_read_at(&mut locs, subject, at) else {
                return Ok(None);
            };
            if options.anchored && m.start() != start {
                return Ok(None);
            }
            let rejected = options.not_empty_at_start && m.start() == start && m.end() == start;
            if !rejected {
                return Ok(self.record_from(&locs));
            }
            if options.anchored || at >= subject.len() {
                return Ok(None);
            }
            at += char_width(subject, at);
        }
    }

    fn capture_count(&self) -> usize {
        self.regex.captures_len() - 1
    }

    fn name_table(&self) -> NameTable {
        self.names.clone()
    }
}
