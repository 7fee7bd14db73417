use std::fmt;

use log::trace;

use crate::entry::HeapEntry;

/// A keyed priority queue on an implicit binary max heap.
/// - Peek max: O(1)
/// - Remove max: O(log(n))
/// - Add: O(log(n))
/// Entries live in a flat vector; the children of index i are at 2i + 1 and 2i + 2.
/// Entries with equal keys are fine, and the order they come out in only depends on
/// the order of calls, but it is not insertion order.
#[derive(Clone, Debug)]
pub struct MaxHeap<K: Ord, V> {
    store: Vec<HeapEntry<K, V>>
}

#[cfg(test)]
#[derive(Debug, PartialEq)]
enum HeapError {
    OutOfOrder{parent: usize, child: usize}
}

impl<K: Ord, V> MaxHeap<K, V> {
    /// Create an empty MaxHeap
    pub fn new() -> Self {
        Self{store: Vec::new()}
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self{store: Vec::with_capacity(capacity)}
    }

    /// Get the number of entries in the heap
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Get the entry with the maximal key without removing it.
    /// This is the only way to see the key of the entry `MaxHeap::remove` would return.
    pub fn peek(&self) -> Option<&HeapEntry<K, V>> {
        self.store.first()
    }

    pub fn clear(&mut self) {
        self.store.clear()
    }

    /// Insert a value with the given priority
    pub fn add(&mut self, key: K, value: V) {
        self.store.push(HeapEntry::new(key, value));
        self.heap_up(self.store.len() - 1);
        #[cfg(all(test, not(feature = "stress_tests")))]{
            assert_eq!(self.check(), Ok(()))
        }
    }

    /// Remove the entry with the maximal key and return its value.
    /// Returns None without touching the heap if it is empty.
    pub fn remove(&mut self) -> Option<V> {
        self.remove_entry().map(HeapEntry::into_value)
    }

    /// Like `MaxHeap::remove`, but keeps the key
    pub fn remove_entry(&mut self) -> Option<HeapEntry<K, V>> {
        let last = self.store.len().checked_sub(1)?;
        let res = if last == 0 {
            self.store.pop()
        } else {
            self.swap(0, last);
            let res = self.store.pop();
            self.heap_down(0);
            res
        };
        #[cfg(all(test, not(feature = "stress_tests")))]{
            assert_eq!(self.check(), Ok(()))
        }
        res
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.store.swap(i, j)
    }

    fn heap_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = (i - 1) >> 1;
            if self.store[p].key() >= self.store[i].key()
                { break }
            trace!("heap_up: {} <-> {}", i, p);
            self.swap(i, p);
            i = p;
        }
    }

    fn heap_down(&mut self, mut i: usize) {
        let len = self.store.len();
        loop {
            let left = 2*i + 1;
            let right = left + 1;
            if left >= len
                { break }
            // the right child only wins if it is strictly larger, so ties go left
            let child = if right < len && self.store[right].key() > self.store[left].key()
                { right } else { left };
            if self.store[child].key() <= self.store[i].key()
                { break }
            trace!("heap_down: {} <-> {}", i, child);
            self.swap(i, child);
            i = child;
        }
    }

    #[cfg(test)]
    fn check(&self) -> Result<(), HeapError> {
        for child in 1..self.store.len() {
            let parent = (child - 1) >> 1;
            if self.store[parent].key() < self.store[child].key() {
                return Err(HeapError::OutOfOrder{parent, child})
            }
        }
        Ok(())
    }
}

impl<K: Ord, V> Default for MaxHeap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Lists the values in storage order, eg `[13, 8, 2, 6, 7]`.
/// This is the layout of the underlying array, not sorted order, so it's only useful for debugging.
impl<K: Ord, V: fmt::Display> fmt::Display for MaxHeap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, ent) in self.store.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", ent.value())?;
        }
        write!(f, "]")
    }
}

impl<K: Ord, V> Extend<(K, V)> for MaxHeap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.add(key, value)
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for MaxHeap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut res = Self::new();
        res.extend(iter);
        res
    }
}

impl<'a, K: Ord, V> IntoIterator for &'a MaxHeap<K, V> {
    type Item = &'a HeapEntry<K, V>;
    type IntoIter = std::slice::Iter<'a, HeapEntry<K, V>>;
    fn into_iter(self) -> Self::IntoIter {
        self.store.iter()
    }
}

impl<K: Ord, V> From<MaxHeap<K, V>> for Vec<HeapEntry<K, V>> {
    fn from(heap: MaxHeap<K, V>) -> Self {
        heap.store
    }
}
