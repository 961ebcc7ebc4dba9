//! Grouping of records into disjoint buckets by a closed discriminant
//! (project status, document type, event type, activity type).

use crate::types::{ActivityType, DocumentType, EventType, ProjectStatus};

/// A closed set of discriminant values with a canonical display order.
pub trait Category: Copy + Eq + 'static {
    /// Every value, in the order buckets are reported.
    fn all() -> &'static [Self];
}

impl Category for ProjectStatus {
    fn all() -> &'static [Self] {
        &ProjectStatus::ALL
    }
}

impl Category for DocumentType {
    fn all() -> &'static [Self] {
        &DocumentType::ALL
    }
}

impl Category for EventType {
    fn all() -> &'static [Self] {
        &EventType::ALL
    }
}

impl Category for ActivityType {
    fn all() -> &'static [Self] {
        &ActivityType::ALL
    }
}

/// Buckets keyed by category. Every category has a bucket, possibly empty.
#[derive(Debug, Clone)]
pub struct Partition<'a, K, T> {
    buckets: Vec<(K, Vec<&'a T>)>,
}

impl<'a, K: Category, T> Partition<'a, K, T> {
    pub fn get(&self, key: K) -> &[&'a T] {
        self.buckets
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, items)| items.as_slice())
            .unwrap_or(&[])
    }

    pub fn count(&self, key: K) -> usize {
        self.get(key).len()
    }

    /// Number of records across all buckets.
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|(_, items)| items.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, &[&'a T])> + '_ {
        self.buckets.iter().map(|(k, items)| (*k, items.as_slice()))
    }

    /// Take one bucket out by value.
    pub fn into_bucket(self, key: K) -> Vec<&'a T> {
        self.buckets
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, items)| items)
            .unwrap_or_default()
    }
}

/// Split `items` by `key`, preserving input order inside each bucket.
pub fn partition_by<'a, T, K, I, F>(items: I, key: F) -> Partition<'a, K, T>
where
    K: Category,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> K,
    T: 'a,
{
    let mut buckets: Vec<(K, Vec<&'a T>)> = K::all().iter().map(|k| (*k, Vec::new())).collect();

    for item in items {
        let k = key(item);
        match buckets.iter_mut().find(|(bucket, _)| *bucket == k) {
            Some((_, members)) => members.push(item),
            None => buckets.push((k, vec![item])),
        }
    }

    Partition { buckets }
}
