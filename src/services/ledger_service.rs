use std::collections::{BTreeMap, HashMap, HashSet};

use crate::models::{Entry, Group, GroupId, GroupSummary, Summary};

/// Date-ordered, de-duplicated collection of entries
///
/// Entries with a hash that was already seen are dropped; entries without a
/// hash are always kept. Entries on the same date keep their insertion order.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    entries: Vec<Entry>,
    hashes: HashSet<String>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = Entry>) -> Self {
        let mut ledger = Self::new();
        for entry in entries {
            ledger.insert(entry);
        }
        ledger
    }

    /// Add an entry, returns false if its hash is already present
    pub fn insert(&mut self, entry: Entry) -> bool {
        if let Some(hash) = &entry.hash {
            if !self.hashes.insert(hash.clone()) {
                return false;
            }
        }

        let pos = self.entries.partition_point(|e| e.date <= entry.date);
        self.entries.insert(pos, entry);
        true
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries bucketed by group, groups in order of first appearance.
    /// Entries without a group share the `None` bucket.
    pub fn by_group(&self) -> Vec<(Option<GroupId>, Vec<&Entry>)> {
        let mut index: HashMap<Option<&GroupId>, usize> = HashMap::new();
        let mut buckets: Vec<(Option<GroupId>, Vec<&Entry>)> = Vec::new();

        for entry in &self.entries {
            let slot = *index.entry(entry.group_id.as_ref()).or_insert_with(|| {
                buckets.push((entry.group_id.clone(), Vec::new()));
                buckets.len() - 1
            });
            buckets[slot].1.push(entry);
        }

        buckets
    }

    /// Entries bucketed by `(year, month)`, oldest month first
    pub fn by_month(&self) -> BTreeMap<(i32, u32), Vec<&Entry>> {
        let mut months: BTreeMap<(i32, u32), Vec<&Entry>> = BTreeMap::new();
        for entry in &self.entries {
            months.entry(entry.month()).or_default().push(entry);
        }
        months
    }

    pub fn summary(&self) -> Summary {
        Summary::of(&self.entries)
    }

    /// One summary per group in `groups` order, empty groups included
    pub fn group_summaries(&self, groups: &[Group]) -> Vec<GroupSummary> {
        groups
            .iter()
            .map(|group| GroupSummary {
                group: group.clone(),
                summary: Summary::of(
                    self.entries
                        .iter()
                        .filter(|e| e.group_id.as_ref() == Some(&group.id)),
                ),
            })
            .collect()
    }
}
