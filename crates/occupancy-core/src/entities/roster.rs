//! Roster - the fixed set of tracked identities for one run

use super::IdentityRecord;

/// Owned collection of identity records
///
/// Cardinality is fixed at construction. Entries can only be mutated in place
/// by the presence tracker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<IdentityRecord>,
}

impl Roster {
    pub fn new(entries: Vec<IdentityRecord>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IdentityRecord> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&IdentityRecord> {
        self.entries.get(index)
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut IdentityRecord> {
        self.entries.iter_mut()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a IdentityRecord;
    type IntoIter = std::slice::Iter<'a, IdentityRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl From<Vec<IdentityRecord>> for Roster {
    fn from(entries: Vec<IdentityRecord>) -> Self {
        Self::new(entries)
    }
}
