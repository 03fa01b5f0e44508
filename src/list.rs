use std::convert::Infallible;
use std::fmt::{self, Debug, Display};
use std::mem;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::trace;

use crate::error::{ListError, Result};
use crate::snapshot::Snapshot;

/// Capacity used by [`ArrayList::new`].
pub const DEFAULT_CAPACITY: usize = 10;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

#[inline]
fn next_id() -> u64 {
	NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// A growable list backed by a contiguous buffer.
/// Elements live in slots `[0, len)`; slots past `len` are empty.
/// Every insertion, removal and `set` bumps an internal change counter,
/// which is what [`Snapshot`] iterators check to fail fast.
pub struct ArrayList<T> {
	slots:   Box<[Option<T>]>,
	len:     usize,
	changes: u64,
	id:      u64,
}

impl<T> ArrayList<T> {
	/// Create a new empty list with [`DEFAULT_CAPACITY`] slots. `O(1)`.
	/// ```
	/// # use arraylist::ArrayList;
	/// let list: ArrayList<u8> = ArrayList::new();
	/// assert_eq!(list.len(), 0);
	/// assert_eq!(list.capacity(), 10);
	/// ```
	#[inline]
	pub fn new() -> Self {
		Self::with_capacity(DEFAULT_CAPACITY)
	}

	/// Create a new empty list with `capacity` slots. `O(n)`.
	/// ```
	/// # use arraylist::ArrayList;
	/// let list: ArrayList<u8> = ArrayList::with_capacity(3);
	/// assert_eq!(list.capacity(), 3);
	/// assert!(list.is_empty());
	/// ```
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			slots:   (0..capacity).map(|_| None).collect(),
			len:     0,
			changes: 0,
			id:      next_id(),
		}
	}

	// doubles once there is no free slot past the next write position
	fn grow_if_full(&mut self) {
		if self.len + 1 < self.slots.len() { return; }

		let capacity = (self.slots.len() * 2).max(1);
		trace!(list = self.id, from = self.slots.len(), to = capacity, "growing buffer");

		let mut grown = Vec::with_capacity(capacity);
		grown.extend(self.slots.iter_mut().map(Option::take));
		grown.resize_with(capacity, || None);
		self.slots = grown.into_boxed_slice();
	}

	#[inline]
	fn touch(&mut self) {
		self.changes = self.changes.wrapping_add(1);
	}

	// caller guarantees `index <= len`
	fn insert_unchecked(&mut self, index: usize, elem: T) {
		self.grow_if_full();

		self.slots[self.len] = Some(elem);
		self.slots[index..=self.len].rotate_right(1);
		self.len += 1;
		self.touch();
	}

	fn take_at(&mut self, index: usize) -> Result<T> {
		let elem = self.slots[..self.len].get_mut(index)
			.and_then(Option::take)
			.ok_or(ListError::IndexOutOfRange { index, len: self.len })?;

		self.slots[index..self.len].rotate_left(1);
		self.len -= 1;
		self.touch();
		Ok(elem)
	}

	/// Insert an element at the front, shifting everything right. `O(n)`.
	/// ```
	/// # use arraylist::ArrayList;
	/// let mut list = ArrayList::from(vec![2, 3]);
	/// list.add_to_front(1);
	/// assert_eq!(list.to_string(), "[1, 2, 3]");
	/// ```
	#[inline]
	pub fn add_to_front(&mut self, elem: T) {
		self.insert_unchecked(0, elem);
	}

	/// Append an element. `O(1)` amortized.
	/// ```
	/// # use arraylist::ArrayList;
	/// let mut list = ArrayList::new();
	/// list.add_to_rear(1);
	/// list.add_to_rear(2);
	/// assert_eq!(list.to_string(), "[1, 2]");
	/// ```
	#[inline]
	pub fn add_to_rear(&mut self, elem: T) {
		self.insert_unchecked(self.len, elem);
	}

	/// Same as [`add_to_rear`](Self::add_to_rear).
	#[inline]
	pub fn add(&mut self, elem: T) {
		self.add_to_rear(elem);
	}

	/// Insert an element so that it ends up at `index`. `O(n)`.
	/// The element previously at `index` and everything after it shift right by one.
	/// Valid positions are `0..=len`.
	/// ```
	/// # use arraylist::{ArrayList, ListError};
	/// let mut list = ArrayList::from(vec!['a', 'c']);
	/// list.insert(1, 'b').unwrap();
	/// list.insert(3, 'd').unwrap();
	/// assert_eq!(list.to_string(), "[a, b, c, d]");
	///
	/// assert_eq!(list.insert(5, 'x'), Err(ListError::IndexOutOfRange { index: 5, len: 4 }));
	/// ```
	pub fn insert(&mut self, index: usize, elem: T) -> Result<()> {
		if index > self.len {
			return Err(ListError::IndexOutOfRange { index, len: self.len });
		}

		self.insert_unchecked(index, elem);
		Ok(())
	}

	/// Remove and return the first element. `O(n)`.
	/// ```
	/// # use arraylist::{ArrayList, ListError};
	/// let mut list = ArrayList::from(vec![1, 2]);
	/// assert_eq!(list.remove_first(), Ok(1));
	/// assert_eq!(list.remove_first(), Ok(2));
	/// assert_eq!(list.remove_first(), Err(ListError::EmptyCollection));
	/// ```
	pub fn remove_first(&mut self) -> Result<T> {
		if self.is_empty() { return Err(ListError::EmptyCollection); }
		self.take_at(0)
	}

	/// Remove and return the last element. `O(1)`.
	/// ```
	/// # use arraylist::{ArrayList, ListError};
	/// let mut list = ArrayList::from(vec![1, 2]);
	/// assert_eq!(list.remove_last(), Ok(2));
	/// assert_eq!(list.to_string(), "[1]");
	/// ```
	pub fn remove_last(&mut self) -> Result<T> {
		if self.is_empty() { return Err(ListError::EmptyCollection); }
		self.take_at(self.len - 1)
	}

	/// Remove and return the element at `index`, shifting later elements left. `O(n)`.
	/// ```
	/// # use arraylist::{ArrayList, ListError};
	/// let mut list = ArrayList::from(vec![1, 2, 3]);
	/// assert_eq!(list.remove(1), Ok(2));
	/// assert_eq!(list.get(1), Ok(&3));
	/// assert_eq!(list.remove(2), Err(ListError::IndexOutOfRange { index: 2, len: 2 }));
	/// ```
	#[inline]
	pub fn remove(&mut self, index: usize) -> Result<T> {
		self.take_at(index)
	}

	/// Overwrite the element at `index`, returning the old one. `O(1)`.
	/// Counts as a change: open [`Snapshot`]s are invalidated.
	/// ```
	/// # use arraylist::ArrayList;
	/// let mut list = ArrayList::from(vec![1, 2, 3]);
	/// assert_eq!(list.set(0, 7), Ok(1));
	/// assert_eq!(list.to_string(), "[7, 2, 3]");
	/// ```
	pub fn set(&mut self, index: usize, elem: T) -> Result<T> {
		let len = self.len;

		match self.slots[..len].get_mut(index) {
			Some(Some(current)) => {
				let old = mem::replace(current, elem);
				self.touch();
				Ok(old)
			},
			_ => Err(ListError::IndexOutOfRange { index, len }),
		}
	}

	/// Get a ref to the element at `index`. `O(1)`.
	/// ```
	/// # use arraylist::{ArrayList, ListError};
	/// let list = ArrayList::from(vec![1, 2, 3]);
	/// assert_eq!(list.get(2), Ok(&3));
	/// assert_eq!(list.get(3), Err(ListError::IndexOutOfRange { index: 3, len: 3 }));
	/// ```
	#[inline]
	pub fn get(&self, index: usize) -> Result<&T> {
		self.slots[..self.len].get(index)
			.and_then(Option::as_ref)
			.ok_or(ListError::IndexOutOfRange { index, len: self.len })
	}

	/// Get a ref to the first element. `O(1)`.
	/// ```
	/// # use arraylist::{ArrayList, ListError};
	/// let list = ArrayList::from(vec![1, 2, 3]);
	/// assert_eq!(list.first(), Ok(&1));
	///
	/// let empty: ArrayList<u8> = ArrayList::new();
	/// assert_eq!(empty.first(), Err(ListError::EmptyCollection));
	/// ```
	#[inline]
	pub fn first(&self) -> Result<&T> {
		self.iter().next().ok_or(ListError::EmptyCollection)
	}

	/// Get a ref to the last element. `O(1)`.
	/// ```
	/// # use arraylist::ArrayList;
	/// let list = ArrayList::from(vec![1, 2, 3]);
	/// assert_eq!(list.last(), Ok(&3));
	/// ```
	#[inline]
	pub fn last(&self) -> Result<&T> {
		self.iter().next_back().ok_or(ListError::EmptyCollection)
	}

	/// Get the number of elements in the list. `O(1)`.
	#[inline]
	pub const fn len(&self) -> usize {
		self.len
	}

	/// Check if the list is empty. `O(1)`.
	#[inline]
	pub const fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Number of slots in the buffer. Never shrinks. `O(1)`.
	/// ```
	/// # use arraylist::ArrayList;
	/// let mut list = ArrayList::with_capacity(2);
	/// list.add(1);
	/// list.add(2);
	/// assert_eq!(list.capacity(), 4);
	/// ```
	#[inline]
	pub fn capacity(&self) -> usize {
		self.slots.len()
	}

	/// Borrowing iterator over the elements, front to back.
	/// The list cannot be changed while it is alive, so it never fails.
	/// ```
	/// # use arraylist::ArrayList;
	/// let list = ArrayList::from(vec![1, 2, 3]);
	/// assert_eq!(list.iter().sum::<i32>(), 6);
	/// ```
	#[inline]
	pub fn iter(&self) -> Iter<'_, T> {
		Iter { inner: self.slots[..self.len].iter() }
	}

	/// Start a fail-fast traversal of this list. `O(1)`.
	/// See [`Snapshot`] for the protocol.
	/// ```
	/// # use arraylist::ArrayList;
	/// let list = ArrayList::from(vec![1, 2]);
	/// let mut it = list.iterator();
	///
	/// assert_eq!(it.next(&list), Ok(&1));
	/// assert_eq!(it.next(&list), Ok(&2));
	/// assert_eq!(it.has_next(&list), Ok(false));
	/// ```
	#[inline]
	pub fn iterator(&self) -> Snapshot {
		Snapshot::new(self.id, self.changes)
	}

	/// Bidirectional iteration is not provided.
	/// ```
	/// # use arraylist::{ArrayList, ListError};
	/// let list: ArrayList<u8> = ArrayList::new();
	/// assert!(matches!(list.list_iterator(), Err(ListError::UnsupportedOperation(_))));
	/// ```
	#[inline]
	pub fn list_iterator(&self) -> Result<Infallible> {
		Err(ListError::UnsupportedOperation("list iterator"))
	}

	/// Bidirectional iteration from a starting index is not provided either.
	#[inline]
	pub fn list_iterator_at(&self, _start: usize) -> Result<Infallible> {
		Err(ListError::UnsupportedOperation("list iterator"))
	}

	#[inline]
	pub(crate) const fn changes(&self) -> u64 {
		self.changes
	}

	#[inline]
	pub(crate) const fn id(&self) -> u64 {
		self.id
	}
}

impl<T: PartialEq> ArrayList<T> {
	/// Position of the first element equal to `elem`, `None` if there is none. `O(n)`.
	/// ```
	/// # use arraylist::ArrayList;
	/// let list = ArrayList::from(vec![1, 2, 2]);
	/// assert_eq!(list.index_of(&2), Some(1));
	/// assert_eq!(list.index_of(&9), None);
	/// ```
	#[inline]
	pub fn index_of(&self, elem: &T) -> Option<usize> {
		self.iter().position(|e| e == elem)
	}

	/// Check if any element equals `elem`. `O(n)`.
	#[inline]
	pub fn contains(&self, elem: &T) -> bool {
		self.index_of(elem).is_some()
	}

	/// Insert an element right after the first occurrence of `target`. `O(n)`.
	/// ```
	/// # use arraylist::{ArrayList, ListError};
	/// let mut list = ArrayList::from(vec![1, 3]);
	/// list.add_after(2, &1).unwrap();
	/// assert_eq!(list.to_string(), "[1, 2, 3]");
	///
	/// assert_eq!(list.add_after(4, &9), Err(ListError::ElementNotFound));
	/// ```
	pub fn add_after(&mut self, elem: T, target: &T) -> Result<()> {
		let target = self.index_of(target).ok_or(ListError::ElementNotFound)?;
		self.insert_unchecked(target + 1, elem);
		Ok(())
	}

	/// Remove and return the first element equal to `elem`. `O(n)`.
	/// ```
	/// # use arraylist::{ArrayList, ListError};
	/// let mut list = ArrayList::from(vec![1, 2, 1]);
	/// assert_eq!(list.remove_element(&1), Ok(1));
	/// assert_eq!(list.to_string(), "[2, 1]");
	/// assert_eq!(list.remove_element(&5), Err(ListError::ElementNotFound));
	/// ```
	pub fn remove_element(&mut self, elem: &T) -> Result<T> {
		let index = self.index_of(elem).ok_or(ListError::ElementNotFound)?;
		self.take_at(index)
	}
}

impl<T> Default for ArrayList<T> {
	#[inline]
	fn default() -> Self {
		Self::new()
	}
}

impl<T: Clone> Clone for ArrayList<T> {
	/// Clone the list. `O(n)`.
	/// The clone has the same capacity but its own identity and change counter,
	/// so snapshots of the original do not work on it.
	/// ```
	/// # use arraylist::{ArrayList, ListError};
	/// let list = ArrayList::from(vec![1, 2, 3]);
	/// let cloned = list.clone();
	/// assert_eq!(cloned, list);
	///
	/// let mut it = list.iterator();
	/// assert!(matches!(it.next(&cloned), Err(ListError::ConcurrentChange { .. })));
	/// ```
	fn clone(&self) -> Self {
		Self {
			slots:   self.slots.clone(),
			len:     self.len,
			changes: 0,
			id:      next_id(),
		}
	}
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
	#[inline]
	fn eq(&self, other: &Self) -> bool {
		self.len == other.len && self.iter().eq(other.iter())
	}
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T> std::ops::Index<usize> for ArrayList<T> {
	type Output = T;

	/// Essentially equivalent to `get`. `O(1)`.
	/// # Panics
	/// Panics if the index is out of bounds.
	#[inline]
	fn index(&self, index: usize) -> &Self::Output {
		self.get(index).unwrap_or_else(|err| panic!("{err}"))
	}
}

impl<T: Debug> Debug for ArrayList<T> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_list().entries(self.iter()).finish()
	}
}

impl<T: Display> Display for ArrayList<T> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "[")?;

		for (i, elem) in self.iter().enumerate() {
			if i > 0 { write!(f, ", ")?; }
			write!(f, "{}", elem)?;
		}

		write!(f, "]")
	}
}


/*
* ===========================
* ===== Conversion bits =====
* ===========================
*/

impl<T> From<Vec<T>> for ArrayList<T> {
	/// Create a new list from a Vec. `O(n)`.
	/// ```
	/// # use arraylist::ArrayList;
	/// let list = ArrayList::from(vec![1, 2, 3]);
	/// assert_eq!(format!("{:?}", list), "[1, 2, 3]");
	/// ```
	#[inline]
	fn from(vec: Vec<T>) -> Self {
		vec.into_iter().collect()
	}
}

impl<T: Clone> From<&[T]> for ArrayList<T> {
	/// Create a new list from a slice. `O(n)`.
	/// ```
	/// # use arraylist::ArrayList;
	/// let array: &[u8] = &[1, 2, 3];
	/// let list = ArrayList::from(array);
	/// assert_eq!(format!("{:?}", list), "[1, 2, 3]");
	/// ```
	#[inline]
	fn from(slice: &[T]) -> Self {
		slice.iter().cloned().collect()
	}
}

impl<T> FromIterator<T> for ArrayList<T> {
	/// Create a new list from an iterator. `O(n)`.
	/// ```
	/// # use arraylist::ArrayList;
	/// let list = (1..=12).collect::<ArrayList<_>>();
	/// assert_eq!(list.len(), 12);
	/// assert_eq!(list.last(), Ok(&12));
	/// ```
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut list = Self::new();
		list.extend(iter);
		list
	}
}

impl<T> Extend<T> for ArrayList<T> {
	#[inline]
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		iter.into_iter().for_each(|elem| self.add_to_rear(elem));
	}
}


/*
* ==========================
* ===== Iteratory bits =====
* ==========================
*/

/// Borrowing iterator over an [`ArrayList`], created by [`ArrayList::iter`].
pub struct Iter<'a, T> {
	inner: std::slice::Iter<'a, Option<T>>,
}

impl<T> Clone for Iter<'_, T> {
	#[inline]
	fn clone(&self) -> Self {
		Self { inner: self.inner.clone() }
	}
}

impl<'a, T> Iterator for Iter<'a, T> {
	type Item = &'a T;

	#[inline]
	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next()?.as_ref()
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>)
		{ self.inner.size_hint() }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
	#[inline]
	fn next_back(&mut self) -> Option<Self::Item> {
		self.inner.next_back()?.as_ref()
	}
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
	type Item = &'a T;
	type IntoIter = Iter<'a, T>;

	/// ```
	/// # use arraylist::ArrayList;
	/// let list = ArrayList::from(vec![1, 2, 3]);
	/// let mut seen = Vec::new();
	/// for elem in &list {
	///     seen.push(*elem);
	/// }
	/// assert_eq!(seen, vec![1, 2, 3]);
	/// ```
	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<T: Debug> Debug for Iter<'_, T> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_list().entries(self.clone()).finish()
	}
}
