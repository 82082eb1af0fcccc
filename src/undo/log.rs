//! Append-at-tail, pop-from-tail undo log.

use crate::types::{Metrics, OpId, UndoEntry, UndoKind};

/// Ordered record of reversible edits for one list.
#[derive(Debug, Default)]
pub struct UndoLog {
    entries: Vec<UndoEntry>,

    /// Id handed to the next recording call.
    next_op: OpId,
}

/// Every entry one call recorded, in pop order (most recent first).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UndoOperation {
    pub id: OpId,
    pub kind: UndoKind,
    pub entries: Vec<UndoEntry>,
}

impl UndoLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries (not operations) in the log.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent entry.
    pub fn last(&self) -> Option<&UndoEntry> {
        self.entries.last()
    }

    /// Entries oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, UndoEntry> {
        self.entries.iter()
    }

    /// Number of logical operations `undo` could reverse.
    pub fn operation_count(&self) -> usize {
        let mut count = 0;
        let mut current = None;
        for entry in &self.entries {
            if current != Some(entry.op) {
                count += 1;
                current = Some(entry.op);
            }
        }
        count
    }

    /// Start recording a new logical operation.
    pub(crate) fn begin(&mut self) -> Recorder<'_> {
        let op = self.next_op;
        self.next_op = op.next();
        Recorder { log: self, op }
    }

    /// Pop the tail operation.
    ///
    /// Only entries carrying the tail entry's `OpId` are taken, so two
    /// back-to-back bulk calls of the same kind stay separate.
    pub fn pop_operation(&mut self) -> Option<UndoOperation> {
        let last = self.entries.last()?;
        let (id, kind) = (last.op, last.kind);

        let start = self
            .entries
            .iter()
            .rposition(|entry| entry.op != id)
            .map_or(0, |i| i + 1);
        let entries: Vec<UndoEntry> = self.entries.drain(start..).rev().collect();

        Some(UndoOperation { id, kind, entries })
    }
}

/// Appends entries for a single logical operation.
pub(crate) struct Recorder<'a> {
    log: &'a mut UndoLog,
    op: OpId,
}

impl Recorder<'_> {
    pub fn record(&mut self, kind: UndoKind, index: usize, value: String, prior: Metrics) {
        self.log
            .entries
            .push(UndoEntry::new(self.op, kind, index, value, prior));
    }

    pub fn op(&self) -> OpId {
        self.op
    }
}
