//! Ordered, immutable-replacement list of claim remappings.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::Arc;

use super::remapping::ClaimRemapping;

/// Ordered sequence of remappings.
///
/// Entries have no identity beyond their position. Every mutation returns a
/// new list: entries that were not touched are shared with the previous list
/// (same `Arc`), an edited entry is always a fresh allocation. Observers can
/// therefore detect which entries changed with [`ClaimRemappingList::same_entry`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimRemappingList {
    entries: Vec<Arc<ClaimRemapping>>,
}

impl ClaimRemappingList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ClaimRemapping> {
        self.entries.get(index).map(|entry| &**entry)
    }

    /// Shared handle to the entry at `index`.
    #[must_use]
    pub fn entry(&self, index: usize) -> Option<&Arc<ClaimRemapping>> {
        self.entries.get(index)
    }

    /// Iterate in display order.
    pub fn iter(&self) -> impl Iterator<Item = &ClaimRemapping> {
        self.entries.iter().map(|entry| &**entry)
    }

    /// Whether both lists hold the very same entry object at `index`.
    #[must_use]
    pub fn same_entry(&self, other: &ClaimRemappingList, index: usize) -> bool {
        match (self.entries.get(index), other.entries.get(index)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// New list with `remapping` appended.
    #[must_use]
    pub fn with_appended(&self, remapping: ClaimRemapping) -> Self {
        let mut entries = self.entries.clone();
        entries.push(Arc::new(remapping));
        Self { entries }
    }

    /// New list without the entry at `index`.
    ///
    /// Removal is by position, so entries with equal values are removed
    /// independently. Returns `None` when `index` is out of bounds.
    #[must_use]
    pub fn without(&self, index: usize) -> Option<Self> {
        if index >= self.entries.len() {
            return None;
        }
        let entries = self
            .entries
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, entry)| Arc::clone(entry))
            .collect();
        Some(Self { entries })
    }

    /// New list where the entry at `index` is replaced by `f(old)`.
    ///
    /// Returns `None` when `index` is out of bounds.
    #[must_use]
    pub fn with_replaced<F>(&self, index: usize, f: F) -> Option<Self>
    where
        F: FnOnce(&ClaimRemapping) -> ClaimRemapping,
    {
        let current = self.entries.get(index)?;
        let replacement = Arc::new(f(&**current));
        let mut entries = self.entries.clone();
        entries[index] = replacement;
        Some(Self { entries })
    }

    /// Owned copies of all entries, in order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<ClaimRemapping> {
        self.iter().cloned().collect()
    }
}

impl From<Vec<ClaimRemapping>> for ClaimRemappingList {
    fn from(remappings: Vec<ClaimRemapping>) -> Self {
        remappings.into_iter().collect()
    }
}

impl FromIterator<ClaimRemapping> for ClaimRemappingList {
    fn from_iter<I: IntoIterator<Item = ClaimRemapping>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Arc::new).collect(),
        }
    }
}

impl Serialize for ClaimRemappingList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for ClaimRemappingList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<ClaimRemapping>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::remapping::ClaimSource;

    fn named(name: &str) -> ClaimRemapping {
        ClaimRemapping::new(name, ClaimSource::CustomClaim(name.to_string()))
    }

    #[test]
    fn test_with_appended_shares_existing_entries() {
        let list = ClaimRemappingList::from(vec![named("a")]);
        let next = list.with_appended(ClaimRemapping::blank());
        assert_eq!(list.len(), 1);
        assert_eq!(next.len(), 2);
        assert!(next.same_entry(&list, 0));
    }

    #[test]
    fn test_without_out_of_bounds() {
        let list = ClaimRemappingList::from(vec![named("a")]);
        assert!(list.without(1).is_none());
        assert!(ClaimRemappingList::new().without(0).is_none());
    }

    #[test]
    fn test_without_removes_by_position_among_duplicates() {
        let list = ClaimRemappingList::from(vec![named("dup"), named("dup"), named("x")]);
        let next = list.without(1).unwrap();
        assert_eq!(next.len(), 2);
        assert!(Arc::ptr_eq(next.entry(0).unwrap(), list.entry(0).unwrap()));
        assert!(Arc::ptr_eq(next.entry(1).unwrap(), list.entry(2).unwrap()));
    }

    #[test]
    fn test_with_replaced_is_fresh_entry() {
        let list = ClaimRemappingList::from(vec![named("a"), named("b")]);
        let next = list.with_replaced(1, |entry| entry.clone()).unwrap();
        assert_eq!(next, list);
        assert!(next.same_entry(&list, 0));
        assert!(!next.same_entry(&list, 1));
    }

    #[test]
    fn test_serde_as_plain_array() {
        let list = ClaimRemappingList::from(vec![named("a")]);
        let json = serde_json::to_value(&list).unwrap();
        assert!(json.is_array());
        let back: ClaimRemappingList = serde_json::from_value(json).unwrap();
        assert_eq!(back, list);
    }
}
