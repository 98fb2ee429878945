//! String-keyed hash map with separate chaining.
//!
//! `Table` backs both lexical scopes and structure values. Keys are owned
//! strings; lookups take `&str`. Each bucket is a short chain of entries,
//! and the bucket array doubles once the load factor passes 3/4, rehashing
//! every entry into the new array.
//!
//! Iteration order is unspecified. There is no single-key removal; callers
//! that need to drop everything use [`Table::clear`].

use std::fmt;
use std::hash::Hasher;
use std::mem;

use rustc_hash::FxHasher;

/// Bucket count used by [`Table::new`].
const DEFAULT_CAPACITY: usize = 8;

struct Entry<V> {
    key: Box<str>,
    value: V,
}

/// Chained hash map from string keys to `V`.
pub struct Table<V> {
    buckets: Vec<Vec<Entry<V>>>,
    len: usize,
}

fn hash_key(key: &str) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(key.as_bytes());
    hasher.finish()
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "bucket index is reduced modulo the bucket count"
)]
fn bucket_index(key: &str, capacity: usize) -> usize {
    (hash_key(key) % capacity as u64) as usize
}

impl<V> Table<V> {
    /// Create an empty table with the default bucket count.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty table with `capacity` buckets (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Vec::new);
        Table { buckets, len: 0 }
    }

    /// Insert or overwrite `key`.
    ///
    /// Returns the displaced value when the key was already bound, so the
    /// caller decides when it is released.
    pub fn put(&mut self, key: &str, value: V) -> Option<V> {
        let index = bucket_index(key, self.buckets.len());
        let chain = &mut self.buckets[index];

        if let Some(entry) = chain.iter_mut().find(|entry| &*entry.key == key) {
            return Some(mem::replace(&mut entry.value, value));
        }

        chain.push(Entry {
            key: key.into(),
            value,
        });
        self.len += 1;

        // len / capacity > 3/4, in integer arithmetic
        if self.len * 4 > self.buckets.len() * 3 {
            self.resize();
        }
        None
    }

    fn resize(&mut self) {
        let new_capacity = self.buckets.len() * 2;
        let mut buckets = Vec::with_capacity(new_capacity);
        buckets.resize_with(new_capacity, Vec::new);

        for entry in mem::take(&mut self.buckets).into_iter().flatten() {
            let index = bucket_index(&entry.key, new_capacity);
            buckets[index].push(entry);
        }
        self.buckets = buckets;
    }

    /// Look up the value bound to `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        let index = bucket_index(key, self.buckets.len());
        self.buckets[index]
            .iter()
            .find(|entry| &*entry.key == key)
            .map(|entry| &entry.value)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of bound keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Iterate over all entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.buckets
            .iter()
            .flatten()
            .map(|entry| (&*entry.key, &entry.value))
    }

    /// Remove every entry and yield the values, keeping the bucket count.
    pub fn drain(&mut self) -> impl Iterator<Item = V> {
        let emptied = Table::with_capacity(self.capacity());
        let Table { buckets, .. } = mem::replace(self, emptied);
        buckets.into_iter().flatten().map(|entry| entry.value)
    }

    /// Remove every entry, keeping the bucket count.
    pub fn clear(&mut self) {
        for chain in &mut self.buckets {
            chain.clear();
        }
        self.len = 0;
    }
}

impl<V> Default for Table<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> Clone for Table<V> {
    fn clone(&self) -> Self {
        Table {
            buckets: self
                .buckets
                .iter()
                .map(|chain| {
                    chain
                        .iter()
                        .map(|entry| Entry {
                            key: entry.key.clone(),
                            value: entry.value.clone(),
                        })
                        .collect()
                })
                .collect(),
            len: self.len,
        }
    }
}

/// Tables are equal when they bind the same keys to equal values,
/// regardless of bucket layout.
impl<V: PartialEq> PartialEq for Table<V> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|v| v == value))
    }
}

impl<V: fmt::Debug> fmt::Debug for Table<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests;
