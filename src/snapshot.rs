use tracing::trace;

use crate::error::{ListError, Result};
use crate::list::ArrayList;

/// A forward-only, fail-fast traversal of an [`ArrayList`], created by
/// [`ArrayList::iterator`].
///
/// The snapshot does not borrow the list. Each call takes the list it was
/// created from, which lets the list be mutated between calls. Any change made
/// through a path other than [`Snapshot::remove`] is detected on the next call
/// and reported as [`ListError::ConcurrentChange`]. Driving a snapshot with a
/// different list is reported the same way.
///
/// ```
/// # use arraylist::{ArrayList, ListError};
/// let mut list = ArrayList::from(vec![1, 2, 3, 4]);
/// let mut it = list.iterator();
///
/// while it.has_next(&list)? {
///     if it.next(&list)? % 2 == 0 {
///         it.remove(&mut list)?;
///     }
/// }
/// assert_eq!(list.to_string(), "[1, 3]");
///
/// list.add(5);
/// assert!(matches!(it.has_next(&list), Err(ListError::ConcurrentChange { .. })));
/// # Ok::<(), ListError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Snapshot {
	cursor:     usize,
	expected:   u64,
	can_remove: bool,
	origin:     u64,
}

impl Snapshot {
	#[inline]
	pub(crate) const fn new(origin: u64, expected: u64) -> Self {
		Self {
			cursor:     0,
			expected,
			can_remove: false,
			origin,
		}
	}

	fn check<T>(&self, list: &ArrayList<T>) -> Result<()> {
		if self.origin != list.id() || self.expected != list.changes() {
			return Err(ListError::ConcurrentChange {
				expected: self.expected,
				found:    list.changes(),
			});
		}
		Ok(())
	}

	/// Check if another element is left. `O(1)`.
	#[inline]
	pub fn has_next<T>(&self, list: &ArrayList<T>) -> Result<bool> {
		self.check(list)?;
		Ok(self.cursor < list.len())
	}

	/// Yield the next element and allow one [`remove`](Self::remove). `O(1)`.
	/// ```
	/// # use arraylist::{ArrayList, ListError};
	/// let list = ArrayList::from(vec![1]);
	/// let mut it = list.iterator();
	/// assert_eq!(it.next(&list), Ok(&1));
	/// assert_eq!(it.next(&list), Err(ListError::NoSuchElement));
	/// ```
	pub fn next<'l, T>(&mut self, list: &'l ArrayList<T>) -> Result<&'l T> {
		if !self.has_next(list)? {
			return Err(ListError::NoSuchElement);
		}

		let elem = list.get(self.cursor)?;
		self.cursor += 1;
		self.can_remove = true;
		Ok(elem)
	}

	/// Remove the element returned by the last [`next`](Self::next). `O(n)`.
	/// The snapshot stays valid afterwards; the next call to `next` yields the
	/// element that followed the removed one.
	/// ```
	/// # use arraylist::{ArrayList, ListError};
	/// let mut list = ArrayList::from(vec![1, 2]);
	/// let mut it = list.iterator();
	///
	/// assert_eq!(it.remove(&mut list), Err(ListError::InvalidState));
	///
	/// it.next(&list).unwrap();
	/// assert_eq!(it.remove(&mut list), Ok(1));
	/// assert_eq!(it.remove(&mut list), Err(ListError::InvalidState));
	/// assert_eq!(it.next(&list), Ok(&2));
	/// ```
	pub fn remove<T>(&mut self, list: &mut ArrayList<T>) -> Result<T> {
		self.check(list)?;
		if !self.can_remove {
			return Err(ListError::InvalidState);
		}

		let elem = list.remove(self.cursor - 1)?;
		self.cursor -= 1;
		self.expected = list.changes();
		self.can_remove = false;

		trace!(list = self.origin, index = self.cursor, "removed through snapshot");
		Ok(elem)
	}

	/// Index of the element the next call to [`next`](Self::next) would yield.
	#[inline]
	pub const fn position(&self) -> usize {
		self.cursor
	}
}
