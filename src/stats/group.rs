use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{Error, Result};
use crate::render::SummaryRenderer;
use crate::stats::quantile::sort_values;
use crate::stats::Summary;

/// Partitions `records` into buckets by key.
///
/// Buckets come out in the order their key was first seen, and every bucket
/// keeps its records in input order.
pub fn group_by<I, K, F>(records: I, mut key_of: F) -> Vec<(K, Vec<I::Item>)>
where
    I: IntoIterator,
    K: Eq + Hash + Clone,
    F: FnMut(&I::Item) -> K,
{
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut buckets: Vec<(K, Vec<I::Item>)> = Vec::new();
    for record in records {
        let key = key_of(&record);
        match slots.get(&key) {
            Some(&slot) => buckets[slot].1.push(record),
            None => {
                slots.insert(key.clone(), buckets.len());
                buckets.push((key, vec![record]));
            }
        }
    }
    buckets
}

/// Distinct keys of `records`, in first-seen order.
pub fn distinct_keys<I, K, F>(records: I, key_of: F) -> Vec<K>
where
    I: IntoIterator,
    K: Eq + Hash + Clone,
    F: FnMut(&I::Item) -> K,
{
    group_by(records, key_of)
        .into_iter()
        .map(|(key, _)| key)
        .collect()
}

/// Computes a `Summary` per distinct key of `records`.
///
/// `key_of` picks the group of every record and `value_of` its numerical
/// value.  A record whose value is missing (`None`) or not finite aborts the
/// whole computation with `Error::InvalidValue`, carrying the position of the
/// offending record in `records`.  An empty input yields an empty result.
pub fn summarize<I, K, FK, FV>(
    records: I,
    mut key_of: FK,
    mut value_of: FV,
) -> Result<GroupedSummaries<K>>
where
    I: IntoIterator,
    K: Eq + Hash + Clone,
    FK: FnMut(&I::Item) -> K,
    FV: FnMut(&I::Item) -> Option<f64>,
{
    let mut values = Vec::new();
    for (index, record) in records.into_iter().enumerate() {
        match value_of(&record) {
            Some(v) if v.is_finite() => values.push((record, v)),
            other => return Err(Error::invalid_value(index, other)),
        }
    }
    let buckets = group_by(values, |pair: &(I::Item, f64)| key_of(&pair.0));
    let mut entries = Vec::with_capacity(buckets.len());
    for (key, bucket) in buckets {
        let mut sorted: Vec<f64> = bucket.into_iter().map(|(_, v)| v).collect();
        sort_values(&mut sorted);
        if let Some(summary) = Summary::from_sorted(&sorted) {
            entries.push((key, summary, sorted.len()));
        }
    }
    debug!("Summarized {} groups", entries.len());
    Ok(GroupedSummaries::from_entries(entries))
}

#[derive(Debug, Clone, PartialEq)]
struct Entry<K> {
    key: K,
    summary: Summary,
    samples: usize,
}

/// Per-group summaries, iterated in the order groups first appeared in the
/// input.  Built once by `summarize`; there is no way to modify it later.
#[derive(Debug, Clone)]
pub struct GroupedSummaries<K> {
    entries: Vec<Entry<K>>,
    index: HashMap<K, usize>,
}

impl<K: Eq + Hash + Clone> GroupedSummaries<K> {
    fn from_entries(entries: Vec<(K, Summary, usize)>) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        let entries: Vec<Entry<K>> = entries
            .into_iter()
            .enumerate()
            .map(|(i, (key, summary, samples))| {
                index.insert(key.clone(), i);
                Entry {
                    key,
                    summary,
                    samples,
                }
            })
            .collect();
        Self { entries, index }
    }

    pub fn get(&self, key: &K) -> Option<&Summary> {
        self.index.get(key).map(|&i| &self.entries[i].summary)
    }

    /// Number of values that went into the summary of `key`.
    pub fn samples(&self, key: &K) -> Option<usize> {
        self.index.get(key).map(|&i| self.entries[i].samples)
    }

    /// Total number of values summarized, across all groups.
    pub fn total_samples(&self) -> usize {
        self.entries.iter().map(|e| e.samples).sum()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|e| &e.key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &Summary)> {
        self.entries.iter().map(|e| (&e.key, &e.summary))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Smallest minimum and largest maximum across every group.
    pub fn range(&self) -> Option<(f64, f64)> {
        self.entries.iter().fold(None, |acc, e| match acc {
            None => Some((e.summary.min, e.summary.max)),
            Some((lo, hi)) => Some((lo.min(e.summary.min), hi.max(e.summary.max))),
        })
    }

    /// Fails with `Error::EmptyInput` if there are no groups.
    pub fn require_non_empty(self) -> Result<Self> {
        if self.is_empty() {
            Err(Error::EmptyInput)
        } else {
            Ok(self)
        }
    }

    /// Hands these summaries over to `renderer`.
    pub fn render_with<R: SummaryRenderer<K>>(&self, renderer: &mut R) -> Result<()> {
        renderer.render(self)
    }
}

impl<K: PartialEq> PartialEq for GroupedSummaries<K> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<'a, K> IntoIterator for &'a GroupedSummaries<K> {
    type Item = (&'a K, &'a Summary);
    type IntoIter = Box<dyn Iterator<Item = Self::Item> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.entries.iter().map(|e| (&e.key, &e.summary)))
    }
}
