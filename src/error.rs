use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = ListError> = std::result::Result<T, E>;

/// Everything that can go wrong while using an [`ArrayList`](crate::ArrayList)
/// or one of its [`Snapshot`](crate::Snapshot) iterators.
/// Each kind is distinct so callers can tell a bad index from a missing value
/// from an empty list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ListError {
	/// The position is outside the valid range for the operation.
	#[error("index {index} out of range for list of length {len}")]
	IndexOutOfRange {
		/// Requested position
		index: usize,
		/// Logical size of the list at the time of the call
		len:   usize,
	},

	/// The operation needs at least one element.
	#[error("list is empty")]
	EmptyCollection,

	/// A value-based lookup found no equal element.
	#[error("element not found in list")]
	ElementNotFound,

	/// The iterator has no elements left.
	#[error("iterator exhausted")]
	NoSuchElement,

	/// Iterator removal without a preceding, unconsumed `next`.
	#[error("remove called without a preceding next")]
	InvalidState,

	/// The list changed underneath an iterator.
	#[error("list modified during iteration: expected change {expected}, found {found}")]
	ConcurrentChange {
		/// Change counter the iterator last saw
		expected: u64,
		/// Change counter the list holds now
		found:    u64,
	},

	/// The requested capability is not provided.
	#[error("unsupported operation: {0}")]
	UnsupportedOperation(&'static str),
}
