use std::collections::HashMap;

use serde::{Serialize, Serializer};

use crate::metadata::Metadata;

/// Ordered collection of records, at most one per basename.
///
/// Adding a record whose basename is already present merges its fields into
/// the existing entry instead of appending a duplicate.
#[derive(Debug, Clone, Default)]
pub struct Index {
    records: Vec<Metadata>,
    positions: HashMap<String, usize>,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `record`, or merge it into the entry with the same basename.
    /// New values win; keys only the old entry has are kept, and the entry
    /// keeps its position.
    pub fn add(&mut self, record: Metadata) {
        match self.positions.get(record.basename()) {
            Some(&i) => self.records[i].merge_from(record),
            None => {
                self.positions
                    .insert(record.basename().to_string(), self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn get(&self, basename: &str) -> Option<&Metadata> {
        self.positions.get(basename).map(|&i| &self.records[i])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Metadata> {
        self.records.iter()
    }
}

/// Record at position `i`, in insertion order.
///
/// Panics if `i` is out of bounds, like slice indexing; use [`Index::get`]
/// or [`Index::iter`] when that is not known.
impl std::ops::Index<usize> for Index {
    type Output = Metadata;

    fn index(&self, i: usize) -> &Metadata {
        &self.records[i]
    }
}

impl<'a> IntoIterator for &'a Index {
    type Item = &'a Metadata;
    type IntoIter = std::slice::Iter<'a, Metadata>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl Extend<Metadata> for Index {
    fn extend<T: IntoIterator<Item = Metadata>>(&mut self, iter: T) {
        for record in iter {
            self.add(record);
        }
    }
}

impl FromIterator<Metadata> for Index {
    fn from_iter<T: IntoIterator<Item = Metadata>>(iter: T) -> Self {
        let mut index = Index::new();
        index.extend(iter);
        index
    }
}

impl Serialize for Index {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.records.serialize(serializer)
    }
}
