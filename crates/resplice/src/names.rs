// Capture-group name table
//
// Index 0 is the whole match and is always unnamed. Unnamed groups hold the
// empty string. Names may repeat; lookups walk the candidates in ascending
// index order and take the first one that participated in the match.

use ahash::AHashMap;
use smol_str::SmolStr;

use crate::record::{MatchRecord, Span};

#[derive(Debug, Clone, Default)]
pub struct NameTable {
    names: Vec<SmolStr>,
    // name -> group indices, ascending
    by_name: AHashMap<SmolStr, Vec<usize>>,
}

impl NameTable {
    /// Build from per-index names. `names[0]` is forced to be empty.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = NameTable::default();
        for (index, name) in names.into_iter().enumerate() {
            let name = if index == 0 {
                SmolStr::default()
            } else {
                SmolStr::new(name.as_ref())
            };
            if !name.is_empty() {
                table.by_name.entry(name.clone()).or_default().push(index);
            }
            table.names.push(name);
        }
        if table.names.is_empty() {
            table.names.push(SmolStr::default());
        }
        table
    }

    /// A table for `capture_count` groups, none of them named.
    pub fn unnamed(capture_count: usize) -> Self {
        Self::new(std::iter::repeat_n("", capture_count + 1))
    }

    /// Number of entries, including index 0.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name at `index`, empty for unnamed groups.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(SmolStr::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(SmolStr::as_str)
    }

    /// All indices declared with `name`, ascending.
    pub fn indices(&self, name: &str) -> &[usize] {
        self.by_name.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First index declared with `name`, regardless of any match.
    pub fn first_index(&self, name: &str) -> Option<usize> {
        self.indices(name).first().copied()
    }

    /// Span for `name` in `record`: the first index in ascending order whose
    /// name matches and whose group participated.
    pub fn resolve(&self, name: &str, record: &MatchRecord) -> Option<Span> {
        self.indices(name)
            .iter()
            .find_map(|&index| record.get(index))
    }
}

// by_name is derived from names
impl PartialEq for NameTable {
    fn eq(&self, other: &Self) -> bool {
        self.names == other.names
    }
}

impl Eq for NameTable {}
