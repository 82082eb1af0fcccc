//! Undo history.
//!
//! Entries are recorded in call order and consumed from the tail, one
//! logical operation (every entry sharing an `OpId`) per undo.

mod inverse;
mod log;

pub(crate) use inverse::apply_inverse;
pub use log::{UndoLog, UndoOperation};
