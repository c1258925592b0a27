use std::cmp::Ordering;

/// Orders the items of a [`BTree`](crate::BTree).
///
/// `compare(a, b)` returns how `a` orders relative to `b`. Lookups always pass the query as `a`
/// and a stored item as `b`.
///
/// # Node-local total order
///
/// The comparator only has to be a strict total order among the items actually stored in the
/// tree. A comparator given to [`BTree::lower_bound_by`](crate::BTree::lower_bound_by) or
/// [`BTree::find_by`](crate::BTree::find_by) may deliberately break this for the query side: a
/// "wildcard" query value may compare [`Ordering::Equal`] to a whole contiguous run of stored
/// items, in which case the lower bound is the first item of that run. Such comparators are meant
/// for lookups only; a tree whose own comparator is used to insert wildcard values is not
/// guaranteed to stay ordered.
///
/// Any `Fn(&T, &T) -> Ordering` closure is a comparator. Whatever the C-style "user data" of a
/// comparator would be is simply captured by the closure.
pub trait Comparator<T: ?Sized> {
	/// Compares `a` with `b`.
	fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F where F: Fn(&T, &T) -> Ordering {
	#[inline]
	fn compare(&self, a: &T, b: &T) -> Ordering {
		self(a, b)
	}
}

/// Comparator following the [`Ord`] implementation of the items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
	#[inline]
	fn compare(&self, a: &T, b: &T) -> Ordering {
		a.cmp(b)
	}
}
