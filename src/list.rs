//! The undoable list of strings.

use crate::error::{ListError, Result};
use crate::storage::Slots;
use crate::types::{ListConfig, UndoKind};
use crate::undo::{apply_inverse, UndoLog};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::{debug, trace};

/// A growable, indexable list of strings with a linear undo history.
///
/// Every mutating call records how to reverse itself before it mutates.
/// [`StringList::undo`] reverses the most recent call, including bulk calls
/// such as [`StringList::remove_all`] that record one entry per element.
///
/// Cloning copies the contents only; the clone starts with no history.
#[derive(Debug)]
pub struct StringList {
    slots: Slots,
    log: UndoLog,
    config: ListConfig,
}

impl StringList {
    /// Create an empty list with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ListConfig::default())
    }

    /// Create an empty list with a custom configuration.
    pub fn with_config(config: ListConfig) -> Self {
        Self {
            slots: Slots::with_capacity(config.initial_capacity),
            log: UndoLog::new(),
            config,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.len() == 0
    }

    /// Number of slots allocated; doubles when an insert finds it full.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Get the string at `index`.
    pub fn get(&self, index: usize) -> Result<&str> {
        self.slots
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| self.out_of_range("get", index))
    }

    /// Index of the first occurrence of `value`.
    pub fn index_of(&self, value: &str) -> Option<usize> {
        self.slots.as_slice().iter().position(|item| item == value)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.index_of(value).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.slots.as_slice().iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        self.slots.as_slice()
    }

    /// The recorded undo history.
    pub fn history(&self) -> &UndoLog {
        &self.log
    }

    pub fn can_undo(&self) -> bool {
        !self.log.is_empty()
    }

    /// Overwrite the string at `index`. Undoable.
    pub fn set(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
        self.check_bounds("set", index)?;

        let prior = self.slots.metrics();
        let old = self.slots.replace(index, value.into());
        let mut rec = self.log.begin();
        trace!(op = ?rec.op(), index, "recording set");
        rec.record(UndoKind::Set, index, old, prior);
        Ok(())
    }

    /// Insert `value` before `index`; `index == len` appends. Undoable.
    pub fn insert_before(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
        if index > self.len() {
            return Err(self.out_of_range("insert_before", index));
        }

        self.insert_unchecked(index, value.into());
        Ok(())
    }

    /// Append `value`. Undoable.
    pub fn insert_back(&mut self, value: impl Into<String>) {
        let index = self.len();
        self.insert_unchecked(index, value.into());
    }

    /// Prepend `value`. Undoable.
    pub fn insert_front(&mut self, value: impl Into<String>) {
        self.insert_unchecked(0, value.into());
    }

    /// Remove and return the string at `index`. Undoable.
    pub fn remove_at(&mut self, index: usize) -> Result<String> {
        self.check_bounds("remove_at", index)?;

        let prior = self.slots.metrics();
        let removed = self.slots.remove(index);
        let mut rec = self.log.begin();
        trace!(op = ?rec.op(), index, "recording remove");
        rec.record(UndoKind::Remove, index, removed.clone(), prior);
        Ok(removed)
    }

    /// Remove every string; capacity is unchanged. Undoable as one step.
    ///
    /// Clearing an empty list records nothing.
    pub fn remove_all(&mut self) {
        if self.is_empty() {
            return;
        }

        let prior = self.slots.metrics();
        let mut rec = self.log.begin();
        trace!(op = ?rec.op(), count = prior.len, "recording clear_all");
        for (index, value) in self.slots.take_all().into_iter().enumerate().rev() {
            rec.record(UndoKind::ClearAll, index, value, prior);
        }
    }

    /// Remove the first occurrence of `value`, returning whether one was
    /// found. Undoable when it removes something.
    pub fn remove_first(&mut self, value: &str) -> bool {
        match self.index_of(value) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }

    /// Replace this list's contents and capacity with `other`'s.
    /// Undoable as one step.
    ///
    /// `other` is not modified and its history is not inherited.
    pub fn assign_from(&mut self, other: &StringList) {
        let prior = self.slots.metrics();
        let mut rec = self.log.begin();
        trace!(op = ?rec.op(), replaced = prior.len, "recording assign");
        if prior.len == 0 {
            rec.record(UndoKind::Assign, 0, String::new(), prior);
        }
        for (index, value) in self.slots.take_all().into_iter().enumerate().rev() {
            rec.record(UndoKind::Assign, index, value, prior);
        }
        self.slots.copy_from(&other.slots);
    }

    /// Reverse the most recent mutating call.
    ///
    /// Returns `false`, mutating nothing, when there is no history left.
    pub fn undo(&mut self) -> bool {
        let Some(operation) = self.log.pop_operation() else {
            debug!("nothing to undo");
            return false;
        };

        debug!(
            op = ?operation.id,
            kind = %operation.kind,
            entries = operation.entries.len(),
            "undoing operation"
        );
        apply_inverse(&mut self.slots, operation, self.config.initial_capacity);
        true
    }

    fn insert_unchecked(&mut self, index: usize, value: String) {
        let prior = self.slots.metrics();
        let mut rec = self.log.begin();
        trace!(op = ?rec.op(), index, "recording insert");
        rec.record(UndoKind::Insert, index, value.clone(), prior);
        self.slots.insert(index, value);
    }

    fn check_bounds(&self, op: &'static str, index: usize) -> Result<()> {
        if index < self.len() {
            Ok(())
        } else {
            Err(self.out_of_range(op, index))
        }
    }

    fn out_of_range(&self, op: &'static str, index: usize) -> ListError {
        ListError::IndexOutOfRange {
            op,
            index,
            len: self.len(),
        }
    }
}

impl Default for StringList {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for StringList {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            log: UndoLog::new(),
            config: self.config.clone(),
        }
    }
}

/// Equal when both hold the same strings in the same order; history and
/// capacity are ignored.
impl PartialEq for StringList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for StringList {}

/// Renders as `{"a", "b", "c"}`.
impl fmt::Display for StringList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "\"{}\"", item)?;
        }
        f.write_str("}")
    }
}

impl<S: Into<String>> FromIterator<S> for StringList {
    /// Builds a list with no history.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = StringList::new();
        for value in iter {
            let index = list.slots.len();
            list.slots.insert(index, value.into());
        }
        list
    }
}

impl Serialize for StringList {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for StringList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let items = Vec::<String>::deserialize(deserializer)?;
        Ok(items.into_iter().collect())
    }
}
