//! Backing slots for a list.
//!
//! `Slots` tracks a logical capacity next to the `Vec` so the doubling
//! policy is observable and independent of the allocator's own growth.

use crate::types::Metrics;

#[derive(Clone, Debug)]
pub(crate) struct Slots {
    items: Vec<String>,
    capacity: usize,
}

impl Slots {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn metrics(&self) -> Metrics {
        Metrics {
            capacity: self.capacity,
            len: self.items.len(),
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&String> {
        self.items.get(index)
    }

    /// Replace the value at `index`, returning the old one.
    ///
    /// Callers check bounds first.
    pub fn replace(&mut self, index: usize, value: String) -> String {
        std::mem::replace(&mut self.items[index], value)
    }

    /// Insert at `index` (`0..=len`), doubling capacity if full.
    pub fn insert(&mut self, index: usize, value: String) {
        self.grow_if_full();
        self.items.insert(index, value);
    }

    /// Remove at `index` (`0..len`), shifting the tail left.
    pub fn remove(&mut self, index: usize) -> String {
        self.items.remove(index)
    }

    /// Take every value out, leaving capacity untouched.
    pub fn take_all(&mut self) -> Vec<String> {
        std::mem::take(&mut self.items)
    }

    /// Drop the contents and start over with `capacity` slots.
    pub fn reset(&mut self, capacity: usize) {
        self.items = Vec::with_capacity(capacity);
        self.capacity = capacity;
    }

    /// Adopt another list's capacity and contents.
    pub fn copy_from(&mut self, other: &Slots) {
        self.items = other.items.clone();
        self.items.reserve_exact(other.capacity.saturating_sub(other.items.len()));
        self.capacity = other.capacity;
    }

    fn grow_if_full(&mut self) {
        if self.items.len() == self.capacity {
            self.capacity = (self.capacity * 2).max(1);
            self.items.reserve_exact(self.capacity - self.items.len());
        }
    }
}
