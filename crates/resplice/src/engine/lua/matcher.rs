// Backtracking matcher for Lua patterns: direct interpretation, no AST
//
// - MatchState holds subject, pattern and capture slots
// - match_impl walks the pattern recursively with backtracking
// - sequential elements are handled in a loop instead of recursing
// - fixed capture slots, no heap allocation while matching

use super::class::{element_end, singlematch};
use crate::error::MatchError;
use crate::limits::MAX_CAPTURES;
use crate::options::ExecOptions;
use crate::record::{MatchRecord, Span};

#[derive(Debug, Clone, Copy)]
enum CaptureLen {
    Unfinished,
    Position,
    Len(usize),
}

#[derive(Debug, Clone, Copy)]
struct Capture {
    start: usize,
    len: CaptureLen,
}

struct MatchState<'a> {
    text: &'a [u8],
    pat: &'a [u8],
    captures: [Capture; MAX_CAPTURES],
    level: usize,
    depth: usize,
    depth_limit: usize,
    // where the current attempt started
    origin: usize,
    // an empty match starting at this offset is not accepted
    forbid_empty_at: Option<usize>,
    error: Option<MatchError>,
}

impl<'a> MatchState<'a> {
    fn new(text: &'a [u8], pat: &'a [u8], depth_limit: usize) -> Self {
        Self {
            text,
            pat,
            captures: [Capture {
                start: 0,
                len: CaptureLen::Unfinished,
            }; MAX_CAPTURES],
            level: 0,
            depth: 0,
            depth_limit,
            origin: 0,
            forbid_empty_at: None,
            error: None,
        }
    }

    #[inline]
    fn reset(&mut self, origin: usize) {
        self.level = 0;
        self.depth = 0;
        self.origin = origin;
    }

    /// End of pattern reached at `si`: accept unless this would be a
    /// forbidden empty match.
    #[inline]
    fn accept(&self, si: usize) -> Option<usize> {
        if si == self.origin && self.forbid_empty_at == Some(self.origin) {
            None
        } else {
            Some(si)
        }
    }

    fn fail(&mut self, err: MatchError) -> Option<usize> {
        if self.error.is_none() {
            self.error = Some(err);
        }
        None
    }
}

fn match_impl(ms: &mut MatchState, si: usize, pp: usize) -> Option<usize> {
    if ms.error.is_some() {
        return None;
    }
    ms.depth += 1;
    if ms.depth > ms.depth_limit {
        ms.depth -= 1;
        return ms.fail(MatchError::TooComplex);
    }
    let result = match_inner(ms, si, pp);
    ms.depth -= 1;
    result
}

fn match_inner(ms: &mut MatchState, mut si: usize, mut pp: usize) -> Option<usize> {
    loop {
        if pp >= ms.pat.len() {
            return ms.accept(si);
        }

        match ms.pat[pp] {
            b'(' => {
                return if ms.pat.get(pp + 1) == Some(&b')') {
                    open_capture(ms, si, pp + 2, CaptureLen::Position)
                } else {
                    open_capture(ms, si, pp + 1, CaptureLen::Unfinished)
                };
            }
            b')' => return close_capture(ms, si, pp + 1),
            b'$' if pp + 1 == ms.pat.len() => {
                return if si == ms.text.len() {
                    ms.accept(si)
                } else {
                    None
                };
            }
            b'%' => match ms.pat.get(pp + 1) {
                Some(b'b') => return match_balanced(ms, si, pp),
                Some(b'f') => return match_frontier(ms, si, pp),
                Some(d) if d.is_ascii_digit() => return match_backref(ms, si, pp),
                _ => {}
            },
            _ => {}
        }

        let ep = element_end(ms.pat, pp);
        match ms.pat.get(ep) {
            Some(b'*') => return match_greedy(ms, si, pp, ep + 1, 0),
            Some(b'+') => return match_greedy(ms, si, pp, ep + 1, 1),
            Some(b'-') => return match_lazy(ms, si, pp, ep + 1),
            Some(b'?') => return match_optional(ms, si, pp, ep + 1),
            _ => {}
        }

        if si < ms.text.len() && singlematch(ms.text[si], ms.pat, pp) {
            si += 1;
            pp = ep;
            continue;
        }
        return None;
    }
}

/// Greedy repetition; `min` is 0 for `*` and 1 for `+`.
fn match_greedy(ms: &mut MatchState, si: usize, pp: usize, rp: usize, min: usize) -> Option<usize> {
    let mut count = 0;
    while si + count < ms.text.len() && singlematch(ms.text[si + count], ms.pat, pp) {
        count += 1;
    }
    while count >= min {
        if let Some(end) = match_impl(ms, si + count, rp) {
            return Some(end);
        }
        if count == 0 || ms.error.is_some() {
            break;
        }
        count -= 1;
    }
    None
}

/// Lazy repetition `-`.
fn match_lazy(ms: &mut MatchState, mut si: usize, pp: usize, rp: usize) -> Option<usize> {
    loop {
        if let Some(end) = match_impl(ms, si, rp) {
            return Some(end);
        }
        if ms.error.is_some() {
            return None;
        }
        if si < ms.text.len() && singlematch(ms.text[si], ms.pat, pp) {
            si += 1;
        } else {
            return None;
        }
    }
}

/// Optional element `?`.
fn match_optional(ms: &mut MatchState, si: usize, pp: usize, rp: usize) -> Option<usize> {
    if si < ms.text.len()
        && singlematch(ms.text[si], ms.pat, pp)
        && let Some(end) = match_impl(ms, si + 1, rp)
    {
        return Some(end);
    }
    match_impl(ms, si, rp)
}

fn open_capture(ms: &mut MatchState, si: usize, pp: usize, len: CaptureLen) -> Option<usize> {
    let n = ms.level;
    if n >= MAX_CAPTURES {
        return ms.fail(MatchError::TooComplex);
    }
    ms.captures[n] = Capture { start: si, len };
    ms.level = n + 1;
    let result = match_impl(ms, si, pp);
    if result.is_none() {
        ms.level = n;
    }
    result
}

/// Close the innermost unfinished capture.
fn close_capture(ms: &mut MatchState, si: usize, pp: usize) -> Option<usize> {
    let Some(n) = (0..ms.level)
        .rev()
        .find(|&i| matches!(ms.captures[i].len, CaptureLen::Unfinished))
    else {
        return ms.fail(MatchError::InvalidPatternCapture);
    };
    ms.captures[n].len = CaptureLen::Len(si - ms.captures[n].start);
    let result = match_impl(ms, si, pp);
    if result.is_none() {
        ms.captures[n].len = CaptureLen::Unfinished;
    }
    result
}

/// `%bxy`: a balanced run from `x` to the matching `y`.
fn match_balanced(ms: &mut MatchState, si: usize, pp: usize) -> Option<usize> {
    let open = ms.pat[pp + 2];
    let close = ms.pat[pp + 3];
    if ms.text.get(si) != Some(&open) {
        return None;
    }

    let mut depth = 1usize;
    let mut i = si + 1;
    while i < ms.text.len() {
        let c = ms.text[i];
        if c == close {
            depth -= 1;
            if depth == 0 {
                return match_impl(ms, i + 1, pp + 4);
            }
        } else if c == open {
            depth += 1;
        }
        i += 1;
    }
    None
}

/// `%f[set]`: the transition from a byte outside the set to one inside it.
/// Both ends of the subject count as `\0`.
fn match_frontier(ms: &mut MatchState, si: usize, pp: usize) -> Option<usize> {
    let set = pp + 2;
    let after = element_end(ms.pat, set);
    let prev = if si > 0 { ms.text[si - 1] } else { 0 };
    let curr = ms.text.get(si).copied().unwrap_or(0);
    if !singlematch(prev, ms.pat, set) && singlematch(curr, ms.pat, set) {
        match_impl(ms, si, after)
    } else {
        None
    }
}

/// `%1`..`%9`: repeat the text of an earlier closed capture.
fn match_backref(ms: &mut MatchState, si: usize, pp: usize) -> Option<usize> {
    let n = (ms.pat[pp + 1] - b'0') as usize;
    if n == 0 || n > ms.level {
        return ms.fail(MatchError::InvalidCapture(n));
    }
    let cap = ms.captures[n - 1];
    let CaptureLen::Len(len) = cap.len else {
        return ms.fail(MatchError::InvalidCapture(n));
    };

    let end = si + len;
    if end > ms.text.len() || ms.text[si..end] != ms.text[cap.start..cap.start + len] {
        return None;
    }
    match_impl(ms, end, pp + 2)
}

/// Run one search from `start`. `pattern` must already be validated.
pub(super) fn exec(
    pattern: &[u8],
    capture_count: usize,
    depth_limit: usize,
    text: &[u8],
    start: usize,
    options: ExecOptions,
) -> Result<Option<MatchRecord>, MatchError> {
    if start > text.len() {
        return Err(MatchError::BadOffset {
            offset: start,
            len: text.len(),
        });
    }

    // `^` anchors at the start of the subject, not at the start offset
    let (pp_start, anchored) = match pattern.first() {
        Some(b'^') if start > 0 => return Ok(None),
        Some(b'^') => (1, true),
        _ => (0, options.anchored),
    };

    let mut ms = MatchState::new(text, pattern, depth_limit);
    if options.not_empty_at_start {
        ms.forbid_empty_at = Some(start);
    }

    let mut si = start;
    loop {
        ms.reset(si);
        if let Some(end) = match_impl(&mut ms, si, pp_start) {
            return build_record(&ms, si, end, capture_count).map(Some);
        }
        if let Some(err) = ms.error.take() {
            return Err(err);
        }
        if anchored || si >= text.len() {
            return Ok(None);
        }
        si += 1;
    }
}

fn build_record(
    ms: &MatchState,
    start: usize,
    end: usize,
    capture_count: usize,
) -> Result<MatchRecord, MatchError> {
    let mut groups = Vec::with_capacity(capture_count);
    for cap in &ms.captures[..ms.level] {
        let span = match cap.len {
            CaptureLen::Len(len) => Span::new(cap.start, cap.start + len),
            CaptureLen::Position => Span::new(cap.start, cap.start),
            CaptureLen::Unfinished => return Err(MatchError::UnfinishedCapture),
        };
        groups.push(Some(span));
    }
    groups.resize(capture_count.max(ms.level), None);
    Ok(MatchRecord::new(Span::new(start, end), groups))
}
