// Compiled pattern facade
//
// Ties a matcher to its source text and name table and offers the usual
// find / replace / split surface in byte and string flavors. String methods
// run the byte methods on the UTF-8 encoding and decode the result.

use std::fmt;

use crate::engine::regex::RegexMatcher;
use crate::engine::{MatchEngine, Matcher};
use crate::error::{CompileError, Error, MatchError};
use crate::names::NameTable;
use crate::options::{CompileOptions, ExecOptions, Limit};
use crate::record::{MatchRecord, Span};
use crate::replace::{assemble, literal_policy, template_policy, transform_policy};
use crate::scan::{Scanner, scan_all};
use crate::template::Template;

/// A compiled pattern with its source text and capture names.
pub struct Regexp<M = RegexMatcher> {
    expr: String,
    matcher: M,
    names: NameTable,
}

/// Compile `pattern` with the default engine and test it against `text`.
pub fn is_match(pattern: &str, text: &str) -> Result<bool, Error> {
    let re = Regexp::<RegexMatcher>::new(pattern)?;
    Ok(re.is_match_str(text)?)
}

fn into_string(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

impl<M: MatchEngine> Regexp<M> {
    pub fn new(pattern: &str) -> Result<Self, CompileError> {
        Self::with_options(pattern, &CompileOptions::default())
    }

    pub fn with_options(pattern: &str, options: &CompileOptions) -> Result<Self, CompileError> {
        let matcher = M::compile(pattern, options).inspect_err(|err| {
            tracing::debug!(pattern, error = %err, "pattern rejected");
        })?;
        let re = Self::from_matcher(pattern, matcher);
        tracing::debug!(pattern, captures = re.captures_len(), "compiled pattern");
        Ok(re)
    }
}

impl<M: Matcher> Regexp<M> {
    /// Wrap an already compiled matcher.
    pub fn from_matcher(expr: impl Into<String>, matcher: M) -> Self {
        let names = matcher.name_table();
        Self {
            expr: expr.into(),
            matcher,
            names,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.expr
    }

    pub fn matcher(&self) -> &M {
        &self.matcher
    }

    /// Number of parenthesized sub-expressions.
    pub fn captures_len(&self) -> usize {
        self.matcher.capture_count()
    }

    pub fn capture_names(&self) -> &NameTable {
        &self.names
    }

    /// First group index declared with `name`.
    pub fn subexp_index(&self, name: &str) -> Option<usize> {
        self.names.first_index(name)
    }

    // ===== Single match =====

    /// Spans of the leftmost match.
    pub fn captures(&self, subject: &[u8]) -> Result<Option<MatchRecord>, MatchError> {
        self.matcher.exec(subject, 0, ExecOptions::default())
    }

    pub fn is_match(&self, subject: &[u8]) -> Result<bool, MatchError> {
        Ok(self.captures(subject)?.is_some())
    }

    pub fn is_match_str(&self, subject: &str) -> Result<bool, MatchError> {
        self.is_match(subject.as_bytes())
    }

    pub fn find<'s>(&self, subject: &'s [u8]) -> Result<Option<&'s [u8]>, MatchError> {
        Ok(self
            .captures(subject)?
            .map(|record| &subject[record.whole().range()]))
    }

    pub fn find_str(&self, subject: &str) -> Result<Option<String>, MatchError> {
        Ok(self.find(subject.as_bytes())?.map(lossy))
    }

    pub fn find_index(&self, subject: &[u8]) -> Result<Option<Span>, MatchError> {
        Ok(self.captures(subject)?.map(|record| record.whole()))
    }

    /// Text of the match and of every group; groups that did not take part
    /// are empty.
    pub fn find_submatch<'s>(&self, subject: &'s [u8]) -> Result<Option<Vec<&'s [u8]>>, MatchError> {
        Ok(self.captures(subject)?.map(|record| record.groups(subject)))
    }

    pub fn find_submatch_str(&self, subject: &str) -> Result<Option<Vec<String>>, MatchError> {
        Ok(self
            .find_submatch(subject.as_bytes())?
            .map(|groups| groups.into_iter().map(lossy).collect()))
    }

    /// Flat `[s0, e0, s1, e1, ...]` offsets, `-1` for missing groups.
    pub fn find_submatch_index(&self, subject: &[u8]) -> Result<Option<Vec<isize>>, MatchError> {
        Ok(self.captures(subject)?.map(|record| record.to_offsets()))
    }

    // ===== All matches =====

    /// Lazy iterator over successive non-overlapping matches.
    pub fn matches<'s>(&self, subject: &'s [u8], limit: Limit) -> Scanner<'s, &M> {
        Scanner::new(&self.matcher, subject, limit)
    }

    /// Every match record; `n < 0` is unbounded, `0` none, `n > 0` at most `n`.
    pub fn find_all_records(&self, subject: &[u8], n: isize) -> Result<Vec<MatchRecord>, MatchError> {
        scan_all(subject, &self.matcher, Limit::from_count(n))
    }

    pub fn find_all<'s>(&self, subject: &'s [u8], n: isize) -> Result<Vec<&'s [u8]>, MatchError> {
        Ok(self
            .find_all_records(subject, n)?
            .iter()
            .map(|record| &subject[record.whole().range()])
            .collect())
    }

    pub fn find_all_str(&self, subject: &str, n: isize) -> Result<Vec<String>, MatchError> {
        Ok(self
            .find_all(subject.as_bytes(), n)?
            .into_iter()
            .map(lossy)
            .collect())
    }

    pub fn find_all_index(&self, subject: &[u8], n: isize) -> Result<Vec<Span>, MatchError> {
        Ok(self
            .find_all_records(subject, n)?
            .iter()
            .map(MatchRecord::whole)
            .collect())
    }

    pub fn find_all_submatch<'s>(
        &self,
        subject: &'s [u8],
        n: isize,
    ) -> Result<Vec<Vec<&'s [u8]>>, MatchError> {
        Ok(self
            .find_all_records(subject, n)?
            .iter()
            .map(|record| record.groups(subject))
            .collect())
    }

    pub fn find_all_submatch_str(&self, subject: &str, n: isize) -> Result<Vec<Vec<String>>, MatchError> {
        Ok(self
            .find_all_submatch(subject.as_bytes(), n)?
            .into_iter()
            .map(|groups| groups.into_iter().map(lossy).collect())
            .collect())
    }

    pub fn find_all_submatch_index(&self, subject: &[u8], n: isize) -> Result<Vec<Vec<isize>>, MatchError> {
        Ok(self
            .find_all_records(subject, n)?
            .iter()
            .map(MatchRecord::to_offsets)
            .collect())
    }

    // ===== Templates =====

    /// Append `template` rendered against `record` to `dst`.
    pub fn expand(&self, dst: &mut Vec<u8>, template: &[u8], subject: &[u8], record: &MatchRecord) {
        Template::parse(template).expand_into(dst, subject, record, &self.names);
    }

    pub fn expand_str(&self, dst: &mut String, template: &str, subject: &str, record: &MatchRecord) {
        let mut buf = Vec::new();
        self.expand(&mut buf, template.as_bytes(), subject.as_bytes(), record);
        dst.push_str(&into_string(buf));
    }

    // ===== Replacement =====

    /// Replace every match with the expansion of `template`.
    pub fn replace_all(&self, subject: &[u8], template: &[u8]) -> Result<Vec<u8>, MatchError> {
        self.replacen(subject, Limit::Unbounded, template)
    }

    /// Replace up to `limit` matches with the expansion of `template`.
    pub fn replacen(&self, subject: &[u8], limit: Limit, template: &[u8]) -> Result<Vec<u8>, MatchError> {
        let records = scan_all(subject, &self.matcher, limit)?;
        let template = Template::parse(template);
        Ok(assemble(
            subject,
            &records,
            template_policy(&template, subject, &self.names),
        ))
    }

    pub fn replace_all_str(&self, subject: &str, template: &str) -> Result<String, MatchError> {
        self.replace_all(subject.as_bytes(), template.as_bytes())
            .map(into_string)
    }

    pub fn replacen_str(&self, subject: &str, limit: Limit, template: &str) -> Result<String, MatchError> {
        self.replacen(subject.as_bytes(), limit, template.as_bytes())
            .map(into_string)
    }

    /// Replace every match with `replacement`, taken verbatim.
    pub fn replace_all_literal(&self, subject: &[u8], replacement: &[u8]) -> Result<Vec<u8>, MatchError> {
        self.replacen_literal(subject, Limit::Unbounded, replacement)
    }

    pub fn replacen_literal(
        &self,
        subject: &[u8],
        limit: Limit,
        replacement: &[u8],
    ) -> Result<Vec<u8>, MatchError> {
        let records = scan_all(subject, &self.matcher, limit)?;
        Ok(assemble(subject, &records, literal_policy(replacement)))
    }

    pub fn replace_all_literal_str(&self, subject: &str, replacement: &str) -> Result<String, MatchError> {
        self.replace_all_literal(subject.as_bytes(), replacement.as_bytes())
            .map(into_string)
    }

    /// Replace every match with `f(matched bytes)`.
    pub fn replace_all_fn<F, B>(&self, subject: &[u8], f: F) -> Result<Vec<u8>, MatchError>
    where
        F: FnMut(&[u8]) -> B,
        B: AsRef<[u8]>,
    {
        self.replacen_fn(subject, Limit::Unbounded, f)
    }

    pub fn replacen_fn<F, B>(&self, subject: &[u8], limit: Limit, f: F) -> Result<Vec<u8>, MatchError>
    where
        F: FnMut(&[u8]) -> B,
        B: AsRef<[u8]>,
    {
        let records = scan_all(subject, &self.matcher, limit)?;
        Ok(assemble(subject, &records, transform_policy(subject, f)))
    }

    /// Replace every match with `f(matched text)`.
    pub fn replace_all_fn_str<F>(&self, subject: &str, mut f: F) -> Result<String, MatchError>
    where
        F: FnMut(&str) -> String,
    {
        self.replace_all_fn(subject.as_bytes(), |matched| f(&String::from_utf8_lossy(matched)))
            .map(into_string)
    }

    // ===== Split =====

    /// Split `subject` around matches.
    ///
    /// `n < 0` returns every piece, `n == 0` none, `n > 0` at most `n` pieces
    /// with the last holding the unsplit remainder.
    pub fn split(&self, subject: &str, n: isize) -> Result<Vec<String>, MatchError> {
        if n == 0 {
            return Ok(Vec::new());
        }
        if !self.expr.is_empty() && subject.is_empty() {
            return Ok(vec![String::new()]);
        }

        let bytes = subject.as_bytes();
        let records = self.find_all_records(bytes, n)?;
        let mut pieces = Vec::with_capacity(records.len() + 1);
        let mut begin = 0;
        let mut end = 0;
        for record in &records {
            if n > 0 && pieces.len() == (n - 1) as usize {
                break;
            }
            let span = record.whole();
            end = span.start;
            if span.end != 0 {
                pieces.push(lossy(&bytes[begin..end]));
            }
            begin = span.end;
        }
        if end != bytes.len() {
            pieces.push(lossy(&bytes[begin..]));
        }
        Ok(pieces)
    }
}

impl<M> fmt::Display for Regexp<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expr)
    }
}

impl<M: fmt::Debug> fmt::Debug for Regexp<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Regexp")
            .field("expr", &self.expr)
            .field("matcher", &self.matcher)
            .finish()
    }
}

impl<M: Clone> Clone for Regexp<M> {
    fn clone(&self) -> Self {
        Self {
            expr: self.expr.clone(),
            matcher: self.matcher.clone(),
            names: self.names.clone(),
        }
    }
}
