// Match records: the spans produced by one successful match
//
// Slot 0 is the whole match, slots 1..=N are capture groups in declaration
// order. A group that did not take part in the match is `None`, which is the
// `(-1, -1)` sentinel of the flat offset-vector form.

use std::ops::Range;

use crate::error::RecordError;

/// Half-open byte range `start..end` into a subject buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSpan"))]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} after end {end}");
        Self { start, end }
    }

    /// Checked constructor for offsets from outside the crate.
    pub fn try_new(start: usize, end: usize) -> Result<Self, RecordError> {
        if start > end {
            return Err(RecordError::InvertedSpan { start, end });
        }
        Ok(Self { start, end })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(r: Range<usize>) -> Self {
        Span::new(r.start, r.end)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSpan {
    start: usize,
    end: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSpan> for Span {
    type Error = RecordError;

    fn try_from(raw: RawSpan) -> Result<Self, Self::Error> {
        Span::try_new(raw.start, raw.end)
    }
}

/// All capture spans of one match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRecord"))]
pub struct MatchRecord {
    slots: Vec<Option<Span>>,
}

impl MatchRecord {
    /// Build a record from the whole-match span and the group spans.
    pub fn new(whole: Span, groups: impl IntoIterator<Item = Option<Span>>) -> Self {
        let mut slots = vec![Some(whole)];
        slots.extend(groups);
        Self { slots }
    }

    /// Build a record from raw slots. Returns `None` when slot 0 is missing
    /// or did not participate.
    pub fn from_slots(slots: Vec<Option<Span>>) -> Option<Self> {
        match slots.first() {
            Some(Some(_)) => Some(Self { slots }),
            _ => None,
        }
    }

    /// Parse a flat offset vector `[s0, e0, s1, e1, ...]` where a negative
    /// pair marks a group that did not participate.
    ///
    /// Returns `None` for an odd-length vector or a pair with start after end.
    pub fn from_offsets(offsets: &[isize]) -> Option<Self> {
        if offsets.len() % 2 != 0 {
            return None;
        }
        let slots = offsets
            .chunks_exact(2)
            .map(|pair| {
                if pair[0] < 0 || pair[1] < 0 {
                    Some(None)
                } else {
                    Span::try_new(pair[0] as usize, pair[1] as usize).ok().map(Some)
                }
            })
            .collect::<Option<Vec<_>>>()?;
        Self::from_slots(slots)
    }

    /// Flatten into `[s0, e0, s1, e1, ...]` with `-1` for missing groups.
    pub fn to_offsets(&self) -> Vec<isize> {
        let mut out = Vec::with_capacity(self.slots.len() * 2);
        for slot in &self.slots {
            match slot {
                Some(span) => {
                    out.push(span.start as isize);
                    out.push(span.end as isize);
                }
                None => {
                    out.push(-1);
                    out.push(-1);
                }
            }
        }
        out
    }

    /// The whole-match span.
    #[inline]
    pub fn whole(&self) -> Span {
        // every constructor guarantees slot 0 participates
        self.slots
            .first()
            .copied()
            .flatten()
            .unwrap_or(Span { start: 0, end: 0 })
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.whole().start
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.whole().end
    }

    /// Span of group `index`; `None` when out of range or not participating.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Span> {
        self.slots.get(index).copied().flatten()
    }

    /// Number of slots, including slot 0.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<Span>> + '_ {
        self.slots.iter().copied()
    }

    /// Bytes of group `index` within `subject`.
    pub fn group<'s>(&self, subject: &'s [u8], index: usize) -> Option<&'s [u8]> {
        self.get(index).map(|span| &subject[span.range()])
    }

    /// Bytes of every slot, with non-participating groups as empty slices.
    pub fn groups<'s>(&self, subject: &'s [u8]) -> Vec<&'s [u8]> {
        self.slots
            .iter()
            .map(|slot| match slot {
                Some(span) => &subject[span.range()],
                None => &subject[..0],
            })
            .collect()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRecord {
    slots: Vec<Option<Span>>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRecord> for MatchRecord {
    type Error = RecordError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        MatchRecord::from_slots(raw.slots).ok_or(RecordError::MissingWholeMatch)
    }
}
