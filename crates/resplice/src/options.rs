use crate::limits::MAX_MATCH_DEPTH;

/// Options applied when a pattern is compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    pub case_insensitive: bool,
    /// `^`/`$` match at line boundaries.
    pub multi_line: bool,
    /// `.` also matches `\n`.
    pub dot_all: bool,
    /// Ignore whitespace and `#` comments in the pattern.
    pub extended: bool,
    /// Swap the meaning of greedy and lazy repetition.
    pub ungreedy: bool,
    /// Recursion bound for backtracking engines.
    pub depth_limit: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            multi_line: false,
            dot_all: false,
            extended: false,
            ungreedy: false,
            depth_limit: MAX_MATCH_DEPTH,
        }
    }
}

impl CompileOptions {
    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    pub fn multi_line(mut self, yes: bool) -> Self {
        self.multi_line = yes;
        self
    }

    pub fn dot_all(mut self, yes: bool) -> Self {
        self.dot_all = yes;
        self
    }

    pub fn extended(mut self, yes: bool) -> Self {
        self.extended = yes;
        self
    }

    pub fn ungreedy(mut self, yes: bool) -> Self {
        self.ungreedy = yes;
        self
    }

    pub fn depth_limit(mut self, limit: usize) -> Self {
        self.depth_limit = limit;
        self
    }

    /// Name of the first flag that differs from the default, if any.
    pub(crate) fn first_flag_set(&self) -> Option<&'static str> {
        if self.case_insensitive {
            Some("case_insensitive")
        } else if self.multi_line {
            Some("multi_line")
        } else if self.dot_all {
            Some("dot_all")
        } else if self.extended {
            Some("extended")
        } else if self.ungreedy {
            Some("ungreedy")
        } else {
            None
        }
    }
}

/// Per-call flags passed to [`Matcher::exec`](crate::Matcher::exec).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecOptions {
    /// An empty match starting exactly at the start offset is not a match.
    /// Empty matches further along are still allowed.
    ///
    /// Backtracking engines such as [`LuaMatcher`](crate::LuaMatcher) then
    /// look for a non-empty match at the same offset. [`RegexMatcher`]
    /// cannot, and resumes the search one character later instead.
    ///
    /// [`RegexMatcher`]: crate::RegexMatcher
    pub not_empty_at_start: bool,
    /// Only try a match at the start offset.
    pub anchored: bool,
}

impl ExecOptions {
    pub fn not_empty_at_start(mut self, yes: bool) -> Self {
        self.not_empty_at_start = yes;
        self
    }

    pub fn anchored(mut self, yes: bool) -> Self {
        self.anchored = yes;
        self
    }
}

/// How many matches a scan may produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Limit {
    Unbounded,
    AtMost(usize),
}

impl Limit {
    /// Conventional count argument: negative is unbounded, zero is none,
    /// positive is an upper bound.
    pub fn from_count(n: isize) -> Self {
        if n < 0 {
            Limit::Unbounded
        } else {
            Limit::AtMost(n as usize)
        }
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Limit::AtMost(0))
    }

    /// Consume one unit of budget.
    #[inline]
    pub fn take_one(&mut self) {
        if let Limit::AtMost(n) = self {
            *n = n.saturating_sub(1);
        }
    }
}

impl From<isize> for Limit {
    fn from(n: isize) -> Self {
        Limit::from_count(n)
    }
}

impl From<Option<usize>> for Limit {
    fn from(max: Option<usize>) -> Self {
        max.map_or(Limit::Unbounded, Limit::AtMost)
    }
}
