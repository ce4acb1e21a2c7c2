// Scan driver: enumerate non-overlapping matches
//
// After every match the cursor moves to the match end and an empty match at
// that exact offset is forbidden for the next attempt. A pattern that matches
// the empty string everywhere therefore yields one match per position and
// the scan stops after the position past the last byte.

use crate::engine::Matcher;
use crate::error::MatchError;
use crate::options::{ExecOptions, Limit};
use crate::record::MatchRecord;

/// Cursor, remaining budget and empty-match guard of one scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanState {
    pub cursor: usize,
    pub budget: Limit,
    /// Offset at which the next match must not be empty.
    pub guard: Option<usize>,
}

impl ScanState {
    pub fn new(budget: Limit) -> Self {
        Self {
            cursor: 0,
            budget,
            guard: None,
        }
    }

    /// Options for the next exec call at the current cursor.
    #[inline]
    pub fn exec_options(&self) -> ExecOptions {
        ExecOptions::default().not_empty_at_start(self.guard == Some(self.cursor))
    }

    /// Record a match and move past it.
    #[inline]
    fn advance(&mut self, record: &MatchRecord) {
        self.cursor = record.end();
        self.guard = Some(record.end());
        self.budget.take_one();
    }
}

/// Lazy iterator over the matches of `matcher` in `subject`.
///
/// Yields `Err` once and then stops if the matcher fails.
pub struct Scanner<'s, M> {
    matcher: M,
    subject: &'s [u8],
    state: ScanState,
    done: bool,
}

impl<'s, M: Matcher> Scanner<'s, M> {
    pub fn new(matcher: M, subject: &'s [u8], limit: Limit) -> Self {
        Self {
            matcher,
            subject,
            state: ScanState::new(limit),
            done: false,
        }
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    fn check(&self, record: &MatchRecord) -> Result<(), MatchError> {
        let span = record.whole();
        let cursor = self.state.cursor;
        let forbidden_empty = span.is_empty() && self.state.guard == Some(span.start);
        if span.start < cursor || span.end > self.subject.len() || forbidden_empty {
            return Err(MatchError::Contract {
                cursor,
                start: span.start,
                end: span.end,
            });
        }
        Ok(())
    }
}

impl<M: Matcher> Iterator for Scanner<'_, M> {
    type Item = Result<MatchRecord, MatchError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.state.cursor > self.subject.len() || self.state.budget.is_exhausted() {
            return None;
        }

        let options = self.state.exec_options();
        let found = self
            .matcher
            .exec(self.subject, self.state.cursor, options)
            .and_then(|found| match found {
                Some(record) => self.check(&record).map(|()| Some(record)),
                None => Ok(None),
            });

        match found {
            Ok(Some(record)) => {
                tracing::trace!(
                    cursor = self.state.cursor,
                    start = record.start(),
                    end = record.end(),
                    "match"
                );
                self.state.advance(&record);
                Some(Ok(record))
            }
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                tracing::debug!(cursor = self.state.cursor, error = %err, "scan aborted");
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

/// Collect every match of `matcher` in `subject`, up to `limit`.
pub fn scan_all<M: Matcher>(
    subject: &[u8],
    matcher: &M,
    limit: Limit,
) -> Result<Vec<MatchRecord>, MatchError> {
    Scanner::new(matcher, subject, limit).collect()
}
