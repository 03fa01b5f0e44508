use crate::error::Result;
use crate::list::ArrayList;
use crate::snapshot::Snapshot;

/// An ordered collection addressed by position, with no ordering imposed on its
/// values. Value-based operations compare with `PartialEq`.
///
/// ```
/// # use arraylist::{ArrayList, IndexedUnsortedList};
/// fn fill<L: IndexedUnsortedList<u32>>(list: &mut L) {
///     list.add_to_rear(2);
///     list.add_to_front(1);
///     list.add_after(3, &2).unwrap();
/// }
///
/// let mut list = ArrayList::new();
/// fill(&mut list);
/// assert_eq!(list.to_string(), "[1, 2, 3]");
/// ```
pub trait IndexedUnsortedList<T: PartialEq> {
	/// Forward traversal handle returned by [`iterator`](Self::iterator).
	type Traversal;

	/// Insert at the front.
	fn add_to_front(&mut self, elem: T);

	/// Insert at the rear.
	fn add_to_rear(&mut self, elem: T);

	/// Insert at the rear.
	fn add(&mut self, elem: T) {
		self.add_to_rear(elem);
	}

	/// Insert right after the first element equal to `target`.
	fn add_after(&mut self, elem: T, target: &T) -> Result<()>;

	/// Insert so that `elem` lands at `index`, which must be in `0..=size`.
	fn insert(&mut self, index: usize, elem: T) -> Result<()>;

	fn remove_first(&mut self) -> Result<T>;

	fn remove_last(&mut self) -> Result<T>;

	/// Remove the first element equal to `elem`.
	fn remove_element(&mut self, elem: &T) -> Result<T>;

	/// Remove the element at `index`, which must be in `0..size`.
	fn remove(&mut self, index: usize) -> Result<T>;

	/// Replace the element at `index`, returning the old one.
	fn set(&mut self, index: usize, elem: T) -> Result<T>;

	fn get(&self, index: usize) -> Result<&T>;

	/// Position of the first element equal to `elem`.
	fn index_of(&self, elem: &T) -> Option<usize>;

	fn first(&self) -> Result<&T>;

	fn last(&self) -> Result<&T>;

	fn contains(&self, elem: &T) -> bool {
		self.index_of(elem).is_some()
	}

	fn is_empty(&self) -> bool {
		self.size() == 0
	}

	fn size(&self) -> usize;

	fn iterator(&self) -> Self::Traversal;
}

impl<T: PartialEq> IndexedUnsortedList<T> for ArrayList<T> {
	type Traversal = Snapshot;

	#[inline]
	fn add_to_front(&mut self, elem: T) { ArrayList::add_to_front(self, elem) }

	#[inline]
	fn add_to_rear(&mut self, elem: T) { ArrayList::add_to_rear(self, elem) }

	#[inline]
	fn add_after(&mut self, elem: T, target: &T) -> Result<()>
		{ ArrayList::add_after(self, elem, target) }

	#[inline]
	fn insert(&mut self, index: usize, elem: T) -> Result<()>
		{ ArrayList::insert(self, index, elem) }

	#[inline]
	fn remove_first(&mut self) -> Result<T> { ArrayList::remove_first(self) }

	#[inline]
	fn remove_last(&mut self) -> Result<T> { ArrayList::remove_last(self) }

	#[inline]
	fn remove_element(&mut self, elem: &T) -> Result<T>
		{ ArrayList::remove_element(self, elem) }

	#[inline]
	fn remove(&mut self, index: usize) -> Result<T> { ArrayList::remove(self, index) }

	#[inline]
	fn set(&mut self, index: usize, elem: T) -> Result<T>
		{ ArrayList::set(self, index, elem) }

	#[inline]
	fn get(&self, index: usize) -> Result<&T> { ArrayList::get(self, index) }

	#[inline]
	fn index_of(&self, elem: &T) -> Option<usize> { ArrayList::index_of(self, elem) }

	#[inline]
	fn first(&self) -> Result<&T> { ArrayList::first(self) }

	#[inline]
	fn last(&self) -> Result<&T> { ArrayList::last(self) }

	#[inline]
	fn size(&self) -> usize { self.len() }

	#[inline]
	fn iterator(&self) -> Snapshot { ArrayList::iterator(self) }
}
