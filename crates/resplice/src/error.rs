use thiserror::Error;

/// Failure to turn a pattern into a matcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// Pattern text is not valid in the engine's dialect.
    #[error("malformed pattern ({0})")]
    Malformed(&'static str),
    /// More capture groups than the engine can track.
    #[error("too many captures (limit is {limit})")]
    TooManyCaptures { limit: usize },
    /// A compile option the engine has no meaning for.
    #[error("option '{0}' is not supported by this engine")]
    Unsupported(&'static str),
    /// Message reported by the `regex` crate.
    #[error("{0}")]
    Regex(String),
}

impl From<regex::Error> for CompileError {
    fn from(err: regex::Error) -> Self {
        CompileError::Regex(err.to_string())
    }
}

/// Failure reported by a matcher while executing.
///
/// "No match" is never an error: `exec` returns `Ok(None)` for that.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("start offset {offset} is past the end of a {len}-byte subject")]
    BadOffset { offset: usize, len: usize },
    #[error("pattern too complex")]
    TooComplex,
    #[error("invalid capture index %{0}")]
    InvalidCapture(usize),
    #[error("unfinished capture")]
    UnfinishedCapture,
    #[error("invalid pattern capture")]
    InvalidPatternCapture,
    /// The matcher returned a record that breaks the exec contract
    /// (before the cursor, past the subject, or empty where forbidden).
    #[error("matcher returned span {start}..{end} for a scan at offset {cursor}")]
    Contract {
        cursor: usize,
        start: usize,
        end: usize,
    },
}

/// A span or record built from outside data that breaks its invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("span start {start} is after end {end}")]
    InvertedSpan { start: usize, end: usize },
    #[error("record has no whole-match span")]
    MissingWholeMatch,
}

/// Either kind of failure, for one-shot helpers that compile and match.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Compile(#[from] CompileError),
    #[error(transparent)]
    Match(#[from] MatchError),
}
