//! Amortized-doubling vector.
//!
//! `GrowVec` tracks its own logical capacity so that growth is observable
//! and deterministic: capacity starts where the caller asks and doubles
//! whenever a push would exceed it. Backing storage is a `Vec` reserved
//! exactly to that capacity; growth moves the existing elements into the
//! new allocation.
//!
//! There is no shrink or removal operation.

use std::fmt;
use std::mem;

/// Capacity used by [`GrowVec::new`].
const DEFAULT_CAPACITY: usize = 4;

/// Append-only sequence with doubling growth.
pub struct GrowVec<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> GrowVec<T> {
    /// Create an empty vector with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty vector able to hold `capacity` items before growing.
    pub fn with_capacity(capacity: usize) -> Self {
        GrowVec {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an item, doubling the capacity first if the vector is full.
    pub fn push(&mut self, item: T) {
        if self.items.len() == self.capacity {
            self.grow();
        }
        self.items.push(item);
    }

    fn grow(&mut self) {
        let new_capacity = self.capacity.saturating_mul(2).max(1);
        let mut storage = Vec::with_capacity(new_capacity);
        storage.append(&mut self.items);
        self.items = storage;
        self.capacity = new_capacity;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Logical capacity: the length the vector can reach before its next growth.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Size in bytes of one element.
    #[inline]
    pub fn element_size(&self) -> usize {
        mem::size_of::<T>()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for GrowVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for GrowVec<T> {
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.capacity);
        items.extend(self.items.iter().cloned());
        GrowVec {
            items,
            capacity: self.capacity,
        }
    }
}

impl<T: PartialEq> PartialEq for GrowVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl<T> FromIterator<T> for GrowVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = GrowVec::new();
        for item in iter {
            vec.push(item);
        }
        vec
    }
}

impl<T> IntoIterator for GrowVec<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a GrowVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests;
