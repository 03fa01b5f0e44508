//! Container operations: positional and value-based edits, errors, growth.

use arraylist::{ArrayList, IndexedUnsortedList, ListError, DEFAULT_CAPACITY};
use test_case::test_case;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_test_writer()
		.try_init();
}

fn abc() -> ArrayList<char> {
	ArrayList::from(vec!['a', 'b', 'c'])
}

#[test]
fn rear_adds_keep_order() {
	let mut list = ArrayList::new();
	list.add_to_rear(1);
	list.add_to_rear(2);
	list.add_to_rear(3);

	assert_eq!(list.len(), 3);
	assert_eq!(list.get(0), Ok(&1));
	assert_eq!(list.get(2), Ok(&3));

	assert_eq!(list.remove(1), Ok(2));
	assert_eq!(list.len(), 2);
	assert_eq!(list.get(1), Ok(&3));
}

#[test_case(0, "[x, a, b, c]" ; "front")]
#[test_case(1, "[a, x, b, c]" ; "middle")]
#[test_case(3, "[a, b, c, x]" ; "rear")]
fn insert_lands_at_index(index: usize, expected: &str) {
	let mut list = abc();
	list.insert(index, 'x').unwrap();

	assert_eq!(list.get(index), Ok(&'x'));
	assert_eq!(list.to_string(), expected);
}

#[test]
fn insert_into_empty_list() {
	let mut list = ArrayList::new();
	list.insert(0, 'x').unwrap();
	assert_eq!(list.to_string(), "[x]");
}

#[test_case(4 ; "one past the end")]
#[test_case(100 ; "far past the end")]
fn insert_out_of_range_leaves_list_alone(index: usize) {
	let mut list = abc();
	let mut it = list.iterator();

	assert_eq!(list.insert(index, 'x'), Err(ListError::IndexOutOfRange { index, len: 3 }));
	assert_eq!(list.to_string(), "[a, b, c]");
	assert_eq!(it.next(&list), Ok(&'a'));
}

#[test_case(0, 'a', "[b, c]")]
#[test_case(1, 'b', "[a, c]")]
#[test_case(2, 'c', "[a, b]")]
fn remove_at_index(index: usize, removed: char, rest: &str) {
	let mut list = abc();
	assert_eq!(list.remove(index), Ok(removed));
	assert_eq!(list.len(), 2);
	assert_eq!(list.to_string(), rest);
}

#[test]
fn remove_out_of_range() {
	let mut list = abc();
	assert_eq!(list.remove(3), Err(ListError::IndexOutOfRange { index: 3, len: 3 }));

	let mut empty: ArrayList<char> = ArrayList::new();
	assert_eq!(empty.remove(0), Err(ListError::IndexOutOfRange { index: 0, len: 0 }));
}

#[test]
fn front_and_rear_removal() {
	let mut list = abc();
	assert_eq!(list.remove_first(), Ok('a'));
	assert_eq!(list.remove_last(), Ok('c'));
	assert_eq!(list.remove_last(), Ok('b'));

	assert_eq!(list.remove_first(), Err(ListError::EmptyCollection));
	assert_eq!(list.remove_last(), Err(ListError::EmptyCollection));
	assert_eq!(list.first(), Err(ListError::EmptyCollection));
	assert_eq!(list.last(), Err(ListError::EmptyCollection));
}

#[test]
fn add_to_front_then_remove_first_round_trips() {
	let mut list = abc();
	list.add_to_front('z');
	assert_eq!(list.first(), Ok(&'z'));
	assert_eq!(list.remove_first(), Ok('z'));
	assert_eq!(list, abc());
}

#[test_case('a', "[a, x, b, c]")]
#[test_case('c', "[a, b, c, x]")]
fn add_after_target(target: char, expected: &str) {
	let mut list = abc();
	list.add_after('x', &target).unwrap();
	assert_eq!(list.to_string(), expected);
}

#[test]
fn add_after_uses_first_occurrence() {
	let mut list = ArrayList::from(vec![1, 2, 1]);
	list.add_after(9, &1).unwrap();
	assert_eq!(list.to_string(), "[1, 9, 2, 1]");
}

#[test]
fn value_lookups_on_missing_element() {
	let mut list = abc();

	assert_eq!(list.index_of(&'q'), None);
	assert!(!list.contains(&'q'));
	assert_eq!(list.add_after('x', &'q'), Err(ListError::ElementNotFound));
	assert_eq!(list.remove_element(&'q'), Err(ListError::ElementNotFound));
	assert_eq!(list.to_string(), "[a, b, c]");

	let empty: ArrayList<char> = ArrayList::new();
	assert_eq!(empty.index_of(&'a'), None);
}

#[test]
fn remove_element_takes_first_match() {
	let mut list = ArrayList::from(vec!["x", "y", "x"]);
	assert_eq!(list.remove_element(&"x"), Ok("x"));
	assert_eq!(list.index_of(&"x"), Some(1));
	assert!(list.contains(&"y"));
}

#[test_case(0 ; "first")]
#[test_case(2 ; "last")]
fn set_replaces_in_place(index: usize) {
	let mut list = abc();
	let old = list.get(index).copied().unwrap();

	assert_eq!(list.set(index, 'x'), Ok(old));
	assert_eq!(list.get(index), Ok(&'x'));
	assert_eq!(list.len(), 3);
}

#[test]
fn set_out_of_range() {
	let mut list = abc();
	assert_eq!(list.set(3, 'x'), Err(ListError::IndexOutOfRange { index: 3, len: 3 }));

	let mut empty: ArrayList<char> = ArrayList::new();
	assert_eq!(empty.set(0, 'x'), Err(ListError::IndexOutOfRange { index: 0, len: 0 }));
}

#[test]
fn growth_preserves_contents() {
	init_tracing();
	let mut list = ArrayList::new();
	assert_eq!(list.capacity(), DEFAULT_CAPACITY);

	for i in 0..(DEFAULT_CAPACITY * 3) {
		list.add(i);
	}

	assert!(list.capacity() >= DEFAULT_CAPACITY * 2);
	assert_eq!(list.len(), DEFAULT_CAPACITY * 3);
	assert!(list.iter().copied().eq(0..DEFAULT_CAPACITY * 3));

	list.add_to_front(99);
	assert_eq!(list.first(), Ok(&99));
	assert_eq!(list.last(), Ok(&(DEFAULT_CAPACITY * 3 - 1)));
}

#[test_case(0, 1 ; "zero capacity")]
#[test_case(1, 2 ; "single slot")]
#[test_case(2, 2 ; "room to spare")]
fn small_capacities_grow(initial: usize, after_first_add: usize) {
	let mut list = ArrayList::with_capacity(initial);
	list.add_to_front("a");
	assert_eq!(list.capacity(), after_first_add);
	list.add("b");
	list.add("c");
	assert_eq!(list.to_string(), "[a, b, c]");
}

#[test]
fn capacity_never_shrinks() {
	let mut list: ArrayList<u8> = (0..20).collect();
	let capacity = list.capacity();

	while list.remove_last().is_ok() {}

	assert!(list.is_empty());
	assert_eq!(list.capacity(), capacity);
}

#[test]
fn display_and_debug() {
	let list = ArrayList::from(vec!["a", "b"]);
	assert_eq!(list.to_string(), "[a, b]");
	assert_eq!(format!("{:?}", list), r#"["a", "b"]"#);

	let empty: ArrayList<u8> = ArrayList::default();
	assert_eq!(empty.to_string(), "[]");
}

#[test]
fn index_operator() {
	let list = abc();
	assert_eq!(list[1], 'b');
}

#[test]
#[should_panic(expected = "index 3 out of range")]
fn index_operator_panics_out_of_range() {
	let list = abc();
	let _elem = list[3];
}

#[test]
fn bidirectional_iteration_is_unsupported() {
	let list = abc();
	assert!(matches!(list.list_iterator(), Err(ListError::UnsupportedOperation(_))));
	assert!(matches!(list.list_iterator_at(1), Err(ListError::UnsupportedOperation(_))));
}

#[test]
fn clone_and_equality() {
	let list = abc();
	let mut cloned = list.clone();
	assert_eq!(cloned, list);

	cloned.add('d');
	assert_ne!(cloned, list);
	assert_eq!(cloned.capacity(), list.capacity());
}

#[test]
fn extend_and_collect() {
	let mut list: ArrayList<_> = [1, 2].iter().copied().collect();
	list.extend(vec![3, 4]);

	let slice: &[i32] = &[1, 2, 3, 4];
	assert_eq!(list, ArrayList::from(slice));
	assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), vec![4, 3, 2, 1]);
	assert_eq!(list.iter().len(), 4);
}

fn drive_contract<L: IndexedUnsortedList<i32>>(list: &mut L) -> Result<(), ListError> {
	list.add(2);
	list.add_to_front(1);
	list.insert(2, 4)?;
	list.add_after(3, &2)?;
	assert_eq!(list.size(), 4);
	assert!(list.contains(&3));
	assert_eq!(list.index_of(&4), Some(3));

	assert_eq!(list.remove_element(&3)?, 3);
	assert_eq!(list.set(0, 0)?, 1);
	assert_eq!(list.first()?, &0);
	assert_eq!(list.last()?, &4);
	assert_eq!(list.remove(1)?, 2);
	assert_eq!(list.remove_first()?, 0);
	assert_eq!(list.remove_last()?, 4);
	assert!(list.is_empty());
	Ok(())
}

#[test]
fn contract_through_trait() {
	let mut list = ArrayList::new();
	drive_contract(&mut list).unwrap();

	let mut it = IndexedUnsortedList::iterator(&list);
	assert_eq!(it.has_next(&list), Ok(false));
	assert_eq!(it.next(&list), Err(ListError::NoSuchElement));
}
