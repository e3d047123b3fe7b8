//! In-memory model shared by the pipeline stages.
//!
//! An [`Entry`] is one generated constant; a [`Document`] is the ordered list
//! of entries read from a single input file.

use std::fmt;

/// Prefix applied to raw codes to form a hexadecimal literal
pub const HEX_PREFIX: &str = "0x";

/// Where an entry came from in the input listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    /// 1-based line number in the input
    pub line_number: usize,
    /// Name token as written, before normalization
    pub raw_name: String,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "input line {} (`{}`)", self.line_number, self.raw_name)
    }
}

/// A single normalized (identifier, hex literal) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Identifier form of the raw name (never empty, never starts with a digit)
    pub name: String,
    /// Raw code with the `0x` prefix
    pub value: String,
    /// Input position, when the entry was read from a listing
    pub origin: Option<Origin>,
}

impl Entry {
    /// Build an entry from an already-normalized name and a raw hex code
    #[must_use]
    pub fn new(name: String, raw_code: &str) -> Self {
        Self {
            name,
            value: format!("{HEX_PREFIX}{raw_code}"),
            origin: None,
        }
    }

    /// Attach the input position the entry was read from
    #[must_use]
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = Some(origin);
        self
    }
}

/// Ordered collection of entries
///
/// Order matches the source lines and determines the order of the generated
/// constants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    entries: Vec<Entry>,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Entry> for Document {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
