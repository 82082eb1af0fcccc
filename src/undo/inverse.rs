//! Inverse application for undo operations.

use crate::storage::Slots;
use crate::types::UndoKind;
use crate::undo::UndoOperation;

/// Reverse one logical operation against the slots.
///
/// `initial_capacity` is what an undone assignment resets the slots to.
pub(crate) fn apply_inverse(slots: &mut Slots, operation: UndoOperation, initial_capacity: usize) {
    match operation.kind {
        UndoKind::Set => {
            for entry in operation.entries {
                slots.replace(entry.index, entry.value);
            }
        }

        UndoKind::Insert => {
            for entry in operation.entries {
                slots.remove(entry.index);
            }
        }

        // Entries were recorded last index first and come back lowest index
        // first, so each reinsertion lands in its original position.
        UndoKind::ClearAll | UndoKind::Remove => {
            for entry in operation.entries {
                slots.insert(entry.index, entry.value);
            }
        }

        UndoKind::Assign => {
            slots.reset(initial_capacity);
            for entry in operation.entries {
                // An assignment onto an empty list leaves a marker with
                // nothing to restore.
                if entry.index < entry.prior_size {
                    slots.insert(entry.index, entry.value);
                }
            }
        }
    }
}
