//! A growable, array-backed indexed list with a fail-fast iterator.
//!
//! Positional and value-based insertion and removal, front/rear shortcuts,
//! and a [`Snapshot`] iterator that reports changes made behind its back
//! instead of silently skipping or repeating elements.
//!
//! ## Example
//!
//! ```rust
//! use arraylist::{ArrayList, ListError};
//!
//! let mut list = ArrayList::new();
//!
//! list.add_to_rear(1);
//! list.add_to_rear(2);
//! list.add_to_rear(3);
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.get(0), Ok(&1));
//! assert_eq!(list.get(2), Ok(&3));
//!
//! assert_eq!(list.remove(1), Ok(2));
//! assert_eq!(list.len(), 2);
//! assert_eq!(list.get(1), Ok(&3));
//!
//! list.add_to_front(0);
//! assert_eq!(format!("{}", list), "[0, 1, 3]");
//! assert_eq!(list.index_of(&7), None);
//!
//! let mut it = list.iterator();
//! assert_eq!(it.next(&list), Ok(&0));
//!
//! list.set(0, 10).unwrap();
//! assert!(matches!(it.next(&list), Err(ListError::ConcurrentChange { .. })));
//! ```

#![allow(forbidden_lint_groups)]
#![forbid(clippy::all)]

mod contract;
mod error;
mod list;
mod snapshot;

pub use contract::IndexedUnsortedList;
pub use error::{ListError, Result};
pub use list::{ArrayList, Iter, DEFAULT_CAPACITY};
pub use snapshot::Snapshot;
