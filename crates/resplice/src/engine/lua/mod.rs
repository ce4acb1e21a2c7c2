// Lua pattern engine: byte-oriented, zero-AST design
//
// Modeled after C Lua's lstrlib.c. Every byte is a "character".
//
// 1. Pattern is validated once at compile time, then interpreted directly
// 2. Fixed-size capture array (32 slots), no heap allocation while matching
// 3. Position captures `()` are reported as zero-width spans
// 4. Recursion-limited to prevent stack overflow on pathological patterns

mod class;
mod matcher;

use super::{MatchEngine, Matcher};
use crate::error::{CompileError, MatchError};
use crate::limits::MAX_CAPTURES;
use crate::names::NameTable;
use crate::options::{CompileOptions, ExecOptions};
use crate::record::MatchRecord;

use class::element_end;

/// A compiled Lua pattern. Groups are never named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuaMatcher {
    pattern: Vec<u8>,
    capture_count: usize,
    depth_limit: usize,
}

impl LuaMatcher {
    pub fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    /// Compile raw pattern bytes; the dialect is byte-oriented.
    pub fn from_bytes(pattern: &[u8], options: &CompileOptions) -> Result<Self, CompileError> {
        if let Some(flag) = options.first_flag_set() {
            return Err(CompileError::Unsupported(flag));
        }
        validate_pattern(pattern)?;
        let capture_count = count_captures(pattern);
        if capture_count > MAX_CAPTURES {
            return Err(CompileError::TooManyCaptures {
                limit: MAX_CAPTURES,
            });
        }
        Ok(Self {
            pattern: pattern.to_vec(),
            capture_count,
            depth_limit: options.depth_limit,
        })
    }
}

impl MatchEngine for LuaMatcher {
    fn compile(pattern: &str, options: &CompileOptions) -> Result<Self, CompileError> {
        Self::from_bytes(pattern.as_bytes(), options)
    }
}

impl Matcher for LuaMatcher {
    fn exec(
        &self,
        subject: &[u8],
        start: usize,
        options: ExecOptions,
    ) -> Result<Option<MatchRecord>, MatchError> {
        matcher::exec(
            &self.pattern,
            self.capture_count,
            self.depth_limit,
            subject,
            start,
            options,
        )
    }

    fn capture_count(&self) -> usize {
        self.capture_count
    }

    fn name_table(&self) -> NameTable {
        NameTable::unnamed(self.capture_count)
    }
}

/// Check escapes and sets so the matcher can index without bounds checks
/// failing.
fn validate_pattern(pat: &[u8]) -> Result<(), CompileError> {
    let mut i = usize::from(pat.first() == Some(&b'^'));
    while i < pat.len() {
        match pat[i] {
            b'%' => match pat.get(i + 1) {
                None => return Err(CompileError::Malformed("ends with '%'")),
                Some(b'b') => {
                    if i + 3 >= pat.len() {
                        return Err(CompileError::Malformed("missing arguments to '%b'"));
                    }
                    i += 4;
                }
                Some(b'f') => {
                    i += 2;
                    if pat.get(i) != Some(&b'[') {
                        return Err(CompileError::Malformed("missing '[' after '%f'"));
                    }
                    i = validate_set(pat, i)?;
                }
                Some(_) => i += 2,
            },
            b'[' => i = validate_set(pat, i)?,
            _ => i += 1,
        }
    }
    Ok(())
}

/// Validate the `[set]` at `pat[i]`; returns the index past `]`.
fn validate_set(pat: &[u8], i: usize) -> Result<usize, CompileError> {
    let mut j = i + 1;
    if pat.get(j) == Some(&b'^') {
        j += 1;
    }
    if pat.get(j) == Some(&b']') {
        j += 1;
    }
    while j < pat.len() && pat[j] != b']' {
        if pat[j] == b'%' {
            j += 1;
            if j >= pat.len() {
                return Err(CompileError::Malformed("ends with '%'"));
            }
        }
        j += 1;
    }
    if j >= pat.len() {
        return Err(CompileError::Malformed("missing ']'"));
    }
    Ok(j + 1)
}

/// Count `(` outside escapes and sets. Runs on a validated pattern.
fn count_captures(pat: &[u8]) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i < pat.len() {
        match pat[i] {
            b'%' if pat.get(i + 1) == Some(&b'b') => i += 4,
            b'%' if pat.get(i + 1) == Some(&b'f') => i = element_end(pat, i + 2),
            b'%' => i += 2,
            b'[' => i = element_end(pat, i),
            b'(' => {
                count += 1;
                i += 1;
            }
            _ => i += 1,
        }
    }
    count
}
