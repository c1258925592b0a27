use std::{fmt, marker::PhantomData};
use crate::{
	compare::Comparator,
	error::{Error, Result},
	node::Node,
	path::{Address, Levels, Path},
	store::{Index, Store, StoreView},
};

mod insert;
mod iter;
mod navigate;
mod remove;
#[cfg(any(doc, feature = "dot"))]
mod dot;

pub use iter::Iter;

/// Ordered set of items stored in a B-tree, with nodes allocated in a store `S`.
///
/// Items are ordered by the comparator `C`, and nodes are addressed by handles `I` into the
/// store. Allocation happens through [`Store::try_insert`] and may fail: every mutating operation
/// is failure-atomic, leaving the tree untouched when it returns an error.
pub struct BTree<T, C, I, S> {
	/// Node store.
	store: S,
	/// Root node id, if the tree is not empty.
	root: Option<I>,
	/// Number of items.
	len: usize,
	/// Item order.
	cmp: C,
	item: PhantomData<T>,
}

/// B-tree whose nodes live in a [`slab::Slab`](::slab::Slab), which never fails to allocate.
#[cfg(any(doc, feature = "slab"))]
pub type SlabBTree<T, C = crate::compare::Natural> = BTree<T, C, usize, ::slab::Slab<Node<T, usize>>>;

#[cfg(any(doc, feature = "slab"))]
impl<T, C> BTree<T, C, usize, ::slab::Slab<Node<T, usize>>> {
	/// Creates an empty tree backed by a new slab.
	#[inline]
	pub fn new(cmp: C) -> Self {
		Self::new_in(::slab::Slab::new(), cmp)
	}
}

impl<T, C, I, S> BTree<T, C, I, S> {
	/// Creates an empty tree allocating its nodes in `store`.
	///
	/// `store` should be empty: the tree assumes it owns every node in it.
	#[inline]
	pub fn new_in(store: S, cmp: C) -> Self {
		Self {
			store,
			root: None,
			len: 0,
			cmp,
			item: PhantomData,
		}
	}

	/// Number of items in the tree.
	#[inline]
	pub fn len(&self) -> usize {
		self.len
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// The comparator ordering the tree.
	#[inline]
	pub fn comparator(&self) -> &C {
		&self.cmp
	}

	/// The node store.
	#[inline]
	pub fn store(&self) -> &S {
		&self.store
	}

	/// Mutable access to the node store, e.g. to adjust an allocation budget.
	///
	/// Removing or replacing nodes of the tree through it corrupts the tree.
	#[inline]
	pub fn store_mut(&mut self) -> &mut S {
		&mut self.store
	}

	/// Id of the root node, if any.
	#[inline]
	pub fn root_id(&self) -> Option<I>
	where
		I: Copy,
	{
		self.root
	}
}

impl<T, C: Default, I, S: Default> Default for BTree<T, C, I, S> {
	#[inline]
	fn default() -> Self {
		Self::new_in(S::default(), C::default())
	}
}

impl<T, C, I: Index, S: StoreView<Node<T, I>, Index = I>> BTree<T, C, I, S> {
	/// Node with the given id, which must be in the tree.
	#[inline]
	pub(crate) fn node(&self, id: I) -> &Node<T, I> {
		self.store.get(id).expect("dangling node id")
	}

	/// Node with the given id, or [`Error::BadArg`] if the store has no such node.
	#[inline]
	pub(crate) fn try_node(&self, id: I) -> Result<&Node<T, I>> {
		self.store.get(id).ok_or(Error::BadArg)
	}

	/// Number of levels of the tree, zero when empty.
	#[inline]
	pub fn height(&self) -> usize {
		let mut height = 0;
		let mut id = self.root;
		while let Some(current) = id {
			height += 1;
			id = self.node(current).child_id_opt(0);
		}
		height
	}

	/// Descends towards `key`, returning the levels to an item equal to it per `cmp`.
	fn find_levels<D: Comparator<T> + ?Sized>(&self, cmp: &D, key: &T) -> Option<Levels<I>> {
		let mut levels = Levels::new();
		let mut id = self.root?;
		loop {
			let node = self.node(id);
			match node.offset_of(cmp, key) {
				Ok(offset) => {
					levels.push(Address::new(id, offset));
					return Some(levels);
				}
				Err(offset) => {
					levels.push(Address::new(id, offset));
					id = node.child_id_opt(offset)?;
				}
			}
		}
	}

	/// Finds an item equal to `key` according to `cmp` instead of the tree's comparator.
	///
	/// `cmp` must order the stored items like the tree's comparator does.
	#[inline]
	pub fn find_by<D: Comparator<T> + ?Sized>(&self, cmp: &D, key: &T) -> Result<Path<I>> {
		self.find_levels(cmp, key)
			.map(Path::at)
			.ok_or(Error::NotFound)
	}

	/// Path to the first item that `key` is not greater than according to `cmp`, or the end path if
	/// there is none.
	///
	/// With a wildcard comparator matching a whole run of items, this is the first item of the run.
	pub fn lower_bound_by<D: Comparator<T> + ?Sized>(&self, cmp: &D, key: &T) -> Path<I> {
		let mut id = match self.root {
			Some(id) => id,
			None => return Path::empty(),
		};

		let mut levels = Levels::new();
		let mut found = None;
		loop {
			let node = self.node(id);
			let offset = node.lower_offset(cmp, key);
			levels.push(Address::new(id, offset));
			if offset < node.item_count() {
				// Best candidate so far, the subtree may still hold a smaller one.
				found = Some(levels.len())
			}

			match node.child_id_opt(offset) {
				Some(child_id) => id = child_id,
				None => break,
			}
		}

		match found {
			Some(depth) => {
				levels.truncate(depth);
				Path::at(levels)
			}
			None => Path::end(),
		}
	}

	/// Item at `path`, if it designates one.
	#[inline]
	pub fn get(&self, path: &Path<I>) -> Option<&T> {
		let address = path.address()?;
		self.store.get(address.id)?.item(address.offset)
	}

	/// Smallest item.
	#[inline]
	pub fn first(&self) -> Option<&T> {
		self.get(&self.begin())
	}

	/// Greatest item.
	#[inline]
	pub fn last(&self) -> Option<&T> {
		self.get(&self.rbegin())
	}

	/// Iterates over the items in order.
	#[inline]
	pub fn iter(&self) -> Iter<'_, T, C, I, S> {
		Iter::new(self)
	}
}

impl<T, C: Comparator<T>, I: Index, S: StoreView<Node<T, I>, Index = I>> BTree<T, C, I, S> {
	/// Finds the item equal to `key`.
	///
	/// Fails with [`Error::NotFound`] if there is none.
	#[inline]
	pub fn find(&self, key: &T) -> Result<Path<I>> {
		self.find_by(&self.cmp, key)
	}

	/// Path to the first item not less than `key`, or the end path if there is none.
	#[inline]
	pub fn lower_bound(&self, key: &T) -> Path<I> {
		self.lower_bound_by(&self.cmp, key)
	}

	#[inline]
	pub fn contains(&self, key: &T) -> bool {
		self.find_levels(&self.cmp, key).is_some()
	}

	/// Checks every structural invariant of the tree, *panic*ing if one is broken.
	///
	/// All leaves must be at the same depth, nodes other than the root must be at least half full,
	/// items must be strictly increasing in every node and correctly separated by their parents,
	/// and the item count must match [`len`](Self::len).
	pub fn validate(&self) {
		let count = match self.root {
			Some(id) => self.validate_node(id, true, None, None).1,
			None => 0,
		};

		if count != self.len {
			panic!("tree holds {} items but its length is {}", count, self.len)
		}
	}

	/// Validates the subtree rooted at `id`, returning its height and item count.
	fn validate_node(&self, id: I, is_root: bool, min: Option<&T>, max: Option<&T>) -> (usize, usize) {
		let node = self.node(id);
		node.validate(&self.cmp, is_root, min, max);

		let mut depth = None;
		let mut count = node.item_count();
		for (i, &child_id) in node.children().iter().enumerate() {
			let child_min = if i == 0 { min } else { node.item(i - 1) };
			let child_max = node.item(i).or(max);
			let (child_depth, child_count) = self.validate_node(child_id, false, child_min, child_max);
			match depth {
				None => depth = Some(child_depth),
				Some(depth) if depth != child_depth => panic!("leaves are not all at the same depth"),
				Some(_) => (),
			}
			count += child_count;
		}

		(depth.unwrap_or(0) + 1, count)
	}
}

impl<T, C, I: Index, S: Store<Node<T, I>, Index = I>> BTree<T, C, I, S> {
	#[inline]
	pub(crate) fn node_mut(&mut self, id: I) -> &mut Node<T, I> {
		self.store.get_mut(id).expect("dangling node id")
	}

	/// Releases a node, returning it.
	#[inline]
	pub(crate) fn release_node(&mut self, id: I) -> Node<T, I> {
		self.store.remove(id).expect("dangling node id")
	}

	/// Removes every item, dropping them.
	#[inline]
	pub fn clear(&mut self) {
		if self.store.clear_fast() {
			self.root = None;
			self.len = 0
		} else {
			self.clear_with(drop)
		}
	}

	/// Removes every item, handing each one to `destroy` exactly once.
	///
	/// Items are visited in node order, not item order.
	pub fn clear_with<F: FnMut(T)>(&mut self, mut destroy: F) {
		let mut stack: Vec<I> = self.root.take().into_iter().collect();
		while let Some(id) = stack.pop() {
			let (items, children) = self.release_node(id).into_parts();
			stack.extend(children);
			items.into_iter().for_each(&mut destroy)
		}

		self.len = 0
	}

	/// Destroys the tree, handing each item to `destroy` exactly once.
	#[inline]
	pub fn destroy_with<F: FnMut(T)>(mut self, destroy: F) {
		self.clear_with(destroy)
	}
}

impl<T: fmt::Debug, C, I: Index, S: StoreView<Node<T, I>, Index = I>> fmt::Debug
	for BTree<T, C, I, S>
{
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_set().entries(self.iter()).finish()
	}
}

impl<'a, T, C, I: Index, S: StoreView<Node<T, I>, Index = I>> IntoIterator for &'a BTree<T, C, I, S> {
	type Item = &'a T;
	type IntoIter = Iter<'a, T, C, I, S>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
