//! Core types shared by the list and its undo log.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one logical mutating call.
///
/// Every entry recorded by a single call shares its `OpId`, which is how
/// bulk operations are undone as a unit.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct OpId(pub u64);

impl fmt::Debug for OpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Op({})", self.0)
    }
}

impl OpId {
    pub fn next(self) -> Self {
        OpId(self.0 + 1)
    }
}

/// Which mutation an entry reverses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UndoKind {
    /// Overwrite of a single slot.
    Set,

    /// Insertion of a single value.
    Insert,

    /// Removal of a single value.
    Remove,

    /// One element of a `remove_all`.
    ClearAll,

    /// One element of a whole-list `assign_from`.
    Assign,
}

impl fmt::Display for UndoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UndoKind::Set => "set",
            UndoKind::Insert => "insert",
            UndoKind::Remove => "remove",
            UndoKind::ClearAll => "clear_all",
            UndoKind::Assign => "assign",
        };
        f.write_str(name)
    }
}

/// Capacity and length of a list at a point in time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Metrics {
    pub capacity: usize,
    pub len: usize,
}

/// A record sufficient to reverse one elementary mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoEntry {
    /// The call that recorded this entry.
    pub op: OpId,

    pub kind: UndoKind,

    /// Slot the entry pertains to.
    pub index: usize,

    /// Value that occupied `index` before the call, or the inserted value
    /// for `Insert`.
    pub value: String,

    /// Capacity when the call began.
    pub prior_capacity: usize,

    /// Length when the call began.
    pub prior_size: usize,
}

impl UndoEntry {
    pub fn new(op: OpId, kind: UndoKind, index: usize, value: String, prior: Metrics) -> Self {
        Self {
            op,
            kind,
            index,
            value,
            prior_capacity: prior.capacity,
            prior_size: prior.len,
        }
    }
}

/// List configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListConfig {
    /// Slots allocated by a fresh list, and restored when an assignment
    /// is undone.
    pub initial_capacity: usize,
}

impl ListConfig {
    /// Default initial capacity.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 10;
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
        }
    }
}
