use crate::{
	error::Result,
	node::Node,
	path::Path,
	store::{Index, StoreView},
	BTree,
};

/// Moves over the items of a tree forwards or backwards.
///
/// Bundles a [`Path`] with the tree it points into, so the tree cannot change while the cursor
/// is alive.
pub struct Cursor<'a, T, C, I, S> {
	/// Tree
	tree: &'a BTree<T, C, I, S>,
	/// Current position
	path: Path<I>,
}

impl<'a, T, C, I: Index, S: StoreView<Node<T, I>, Index = I>> Cursor<'a, T, C, I, S> {
	#[inline]
	pub fn new(tree: &'a BTree<T, C, I, S>, path: Path<I>) -> Self {
		Self { tree, path }
	}

	/// Move to the next item, or to the end.
	#[inline]
	pub fn advance(&mut self) -> Result<()> {
		self.tree.increment(&mut self.path)
	}

	/// Move to the previous item, or to the rend position.
	#[inline]
	pub fn advance_back(&mut self) -> Result<()> {
		self.tree.decrement(&mut self.path)
	}

	/// The current item, unless the cursor is at either end.
	#[inline]
	pub fn item(&self) -> Option<&'a T> {
		self.tree.get(&self.path)
	}

	#[inline]
	pub fn is_end(&self) -> bool {
		self.path.is_end()
	}

	#[inline]
	pub fn is_rend(&self) -> bool {
		self.path.is_rend()
	}

	#[inline]
	pub fn path(&self) -> &Path<I> {
		&self.path
	}

	#[inline]
	pub fn into_path(self) -> Path<I> {
		self.path
	}
}

impl<T, C, I: Index, S: StoreView<Node<T, I>, Index = I>> BTree<T, C, I, S> {
	/// Cursor on the first item.
	#[inline]
	pub fn cursor(&self) -> Cursor<'_, T, C, I, S> {
		Cursor::new(self, self.begin())
	}

	/// Cursor at `path`.
	#[inline]
	pub fn cursor_at(&self, path: Path<I>) -> Cursor<'_, T, C, I, S> {
		Cursor::new(self, path)
	}
}
