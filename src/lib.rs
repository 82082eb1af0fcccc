//! # String List
//!
//! A growable, indexable list of strings with a linear undo history.
//!
//! ## Core Concepts
//!
//! - **List**: `StringList`, with bounds-checked get/set/insert/remove
//! - **Undo log**: every mutating call records its inverse before mutating
//! - **Operations**: entries recorded by one call share an `OpId` and are
//!   undone together, so `remove_all` and `assign_from` take one `undo`
//! - **Copies**: clones carry contents only, never history
//!
//! ## Example
//!
//! ```
//! use stringlist::StringList;
//!
//! let mut lst = StringList::new();
//! lst.insert_back("a");
//! lst.insert_back("b");
//! lst.insert_front("c");
//! assert_eq!(lst.to_string(), r#"{"c", "a", "b"}"#);
//!
//! lst.remove_all();
//! assert!(lst.is_empty());
//!
//! assert!(lst.undo());
//! assert_eq!(lst.to_string(), r#"{"c", "a", "b"}"#);
//! ```

pub mod error;
pub mod list;
mod storage;
pub mod types;
pub mod undo;

// Re-exports
pub use error::{ListError, Result};
pub use list::StringList;
pub use types::*;
pub use undo::{UndoLog, UndoOperation};
