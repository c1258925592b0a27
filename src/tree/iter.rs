use super::BTree;
use crate::{
	node::Node,
	path::Path,
	store::{Index, StoreView},
};
use std::iter::FusedIterator;

/// In-order iterator over the items of a [`BTree`].
pub struct Iter<'a, T, C, I, S> {
	tree: &'a BTree<T, C, I, S>,
	/// Next item from the front.
	front: Path<I>,
	/// Next item from the back.
	back: Path<I>,
	/// Items left between `front` and `back`, both included.
	remaining: usize,
}

impl<'a, T, C, I: Index, S: StoreView<Node<T, I>, Index = I>> Iter<'a, T, C, I, S> {
	#[inline]
	pub(crate) fn new(tree: &'a BTree<T, C, I, S>) -> Self {
		Self {
			tree,
			front: tree.begin(),
			back: tree.rbegin(),
			remaining: tree.len(),
		}
	}
}

impl<'a, T, C, I: Index, S: StoreView<Node<T, I>, Index = I>> Iterator for Iter<'a, T, C, I, S> {
	type Item = &'a T;

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.remaining, Some(self.remaining))
	}

	#[inline]
	fn next(&mut self) -> Option<&'a T> {
		if self.remaining == 0 {
			return None;
		}

		let item = self.tree.get(&self.front)?;
		self.remaining -= 1;
		// Stepping past the last item lands on the end path.
		let stepped = self.tree.increment(&mut self.front);
		debug_assert!(stepped.is_ok(), "broken front path: {:?}", stepped);
		Some(item)
	}
}

impl<'a, T, C, I: Index, S: StoreView<Node<T, I>, Index = I>> DoubleEndedIterator for Iter<'a, T, C, I, S> {
	#[inline]
	fn next_back(&mut self) -> Option<&'a T> {
		if self.remaining == 0 {
			return None;
		}

		let item = self.tree.get(&self.back)?;
		self.remaining -= 1;
		let stepped = self.tree.decrement(&mut self.back);
		debug_assert!(stepped.is_ok(), "broken back path: {:?}", stepped);
		Some(item)
	}
}

impl<'a, T, C, I: Index, S: StoreView<Node<T, I>, Index = I>> ExactSizeIterator for Iter<'a, T, C, I, S> {}

impl<'a, T, C, I: Index, S: StoreView<Node<T, I>, Index = I>> FusedIterator for Iter<'a, T, C, I, S> {}
