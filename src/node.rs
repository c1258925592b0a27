use std::cmp::Ordering;
use arrayvec::ArrayVec;
use crate::compare::Comparator;
use crate::store::Index;

/// Knuth order of the B-Trees: the maximum number of children of a node.
///
/// Must be at least 4.
pub const M: usize = 8;

/// Maximum number of items in a node.
pub const MAX_ITEMS: usize = M - 1;

/// Minimum number of items in a node other than the root, `ceil(M/2) - 1`.
pub const MIN_ITEMS: usize = (M + 1) / 2 - 1;

/// Item storage. One slot more than [MAX_ITEMS] so a node can overflow before it is split.
type Items<T> = ArrayVec<T, M>;

/// Child storage, one more than the items.
type Children<I> = ArrayVec<I, { M + 1 }>;

/// Balance of a node, relative to the occupancy bounds.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Balance {
	/// The node holds between [MIN_ITEMS] and [MAX_ITEMS] items.
	Balanced,
	/// The node holds more than [MAX_ITEMS] items and must be split.
	Overflow,
	/// The node holds less than [MIN_ITEMS] items. The boolean tells if it is empty.
	Underflow(bool),
}

/// Returned when taking an item out of a node would make it underflow.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct WouldUnderflow;

/// A B-tree node.
///
/// Leaves only hold items. Internal nodes also own one more child than they have items: child `i`
/// holds the items ordered before item `i` and child `i + 1` the items ordered after it.
pub enum Node<T, I> {
	Leaf {
		items: Items<T>,
	},
	Internal {
		items: Items<T>,
		children: Children<I>,
	},
}

impl<T, I: Index> Node<T, I> {
	/// An empty leaf. Also used as a placeholder for reserved store slots.
	#[inline]
	pub fn empty() -> Self {
		Node::Leaf {
			items: ArrayVec::new(),
		}
	}

	/// A leaf holding a single item.
	#[inline]
	pub fn leaf(item: T) -> Self {
		let mut items = ArrayVec::new();
		items.push(item);
		Node::Leaf { items }
	}

	/// An internal node holding a single item between two children.
	#[inline]
	pub fn binary(left_id: I, median: T, right_id: I) -> Self {
		let mut items = ArrayVec::new();
		items.push(median);
		let mut children = ArrayVec::new();
		children.push(left_id);
		children.push(right_id);
		Node::Internal { items, children }
	}

	#[inline]
	pub fn is_leaf(&self) -> bool {
		matches!(self, Node::Leaf { .. })
	}

	#[inline]
	pub fn items(&self) -> &[T] {
		match self {
			Node::Leaf { items } | Node::Internal { items, .. } => items,
		}
	}

	#[inline]
	fn items_mut(&mut self) -> &mut Items<T> {
		match self {
			Node::Leaf { items } | Node::Internal { items, .. } => items,
		}
	}

	/// Child ids. Empty for a leaf.
	#[inline]
	pub fn children(&self) -> &[I] {
		match self {
			Node::Leaf { .. } => &[],
			Node::Internal { children, .. } => children,
		}
	}

	#[inline]
	pub fn item_count(&self) -> usize {
		self.items().len()
	}

	#[inline]
	pub fn child_count(&self) -> usize {
		self.children().len()
	}

	#[inline]
	pub fn item(&self, offset: usize) -> Option<&T> {
		self.items().get(offset)
	}

	#[inline]
	pub fn child_id_opt(&self, index: usize) -> Option<I> {
		self.children().get(index).copied()
	}

	/// Panics if the node is a leaf or `index` is out of bounds.
	#[inline]
	pub fn child_id(&self, index: usize) -> I {
		self.children()[index]
	}

	#[inline]
	pub fn balance(&self) -> Balance {
		let count = self.item_count();
		if count > MAX_ITEMS {
			Balance::Overflow
		} else if count < MIN_ITEMS {
			Balance::Underflow(count == 0)
		} else {
			Balance::Balanced
		}
	}

	/// Offset of the first item that `key` is not greater than, per `cmp`.
	///
	/// The items must be partitioned by `cmp(key, item) > 0`, which holds whenever the items are
	/// sorted, wildcard queries included.
	#[inline]
	pub fn lower_offset<C: Comparator<T> + ?Sized>(&self, cmp: &C, key: &T) -> usize {
		self.items()
			.partition_point(|item| cmp.compare(key, item) == Ordering::Greater)
	}

	/// Offset of an item equal to `key`, or `Err` with the offset at which `key` would go (which is
	/// also the index of the child to descend into).
	#[inline]
	pub fn offset_of<C: Comparator<T> + ?Sized>(&self, cmp: &C, key: &T) -> Result<usize, usize> {
		let offset = self.lower_offset(cmp, key);
		match self.item(offset) {
			Some(item) if cmp.compare(key, item) == Ordering::Equal => Ok(offset),
			_ => Err(offset),
		}
	}

	/// Inserts `item` at `offset`, and `right_id` directly after it if this is an internal node.
	///
	/// Doesn't rebalance: the node may overflow by one item.
	#[inline]
	pub fn insert(&mut self, offset: usize, item: T, right_id: Option<I>) {
		debug_assert!(self.item_count() <= MAX_ITEMS, "node would overflow twice");
		match self {
			Node::Leaf { items } => {
				debug_assert!(right_id.is_none());
				items.insert(offset, item)
			}
			Node::Internal { items, children } => {
				items.insert(offset, item);
				if let Some(right_id) = right_id {
					children.insert(offset + 1, right_id)
				}
			}
		}
		debug_assert!(self.is_leaf() || self.child_count() == self.item_count() + 1);
	}

	/// Splits an overflowing node around its median.
	///
	/// This becomes the left node. Returns the median item and the right node.
	#[inline]
	pub fn split(&mut self) -> (T, Node<T, I>) {
		debug_assert_eq!(self.balance(), Balance::Overflow);
		let median = self.item_count() / 2;
		match self {
			Node::Leaf { items } => {
				let right_items: Items<T> = items.drain(median + 1..).collect();
				let median_item = items.pop().expect("overflowing node has a median");
				(median_item, Node::Leaf { items: right_items })
			}
			Node::Internal { items, children } => {
				let right_items: Items<T> = items.drain(median + 1..).collect();
				let right_children: Children<I> = children.drain(median + 1..).collect();
				let median_item = items.pop().expect("overflowing node has a median");
				(
					median_item,
					Node::Internal {
						items: right_items,
						children: right_children,
					},
				)
			}
		}
	}

	/// Replaces the item at `offset`, returning the old one.
	#[inline]
	pub fn replace(&mut self, offset: usize, item: T) -> T {
		std::mem::replace(&mut self.items_mut()[offset], item)
	}

	/// Removes the item at `offset` of a leaf. Doesn't rebalance.
	#[inline]
	pub fn leaf_remove(&mut self, offset: usize) -> T {
		debug_assert!(self.is_leaf());
		self.items_mut().remove(offset)
	}

	/// Removes the last item of a leaf. Doesn't rebalance.
	#[inline]
	pub fn pop_last_item(&mut self) -> Option<T> {
		debug_assert!(self.is_leaf());
		self.items_mut().pop()
	}

	/// Takes the first item and first child, unless that makes the node underflow.
	#[inline]
	pub fn pop_left(&mut self) -> Result<(T, Option<I>), WouldUnderflow> {
		if self.item_count() <= MIN_ITEMS {
			return Err(WouldUnderflow);
		}

		match self {
			Node::Leaf { items } => Ok((items.remove(0), None)),
			Node::Internal { items, children } => Ok((items.remove(0), Some(children.remove(0)))),
		}
	}

	/// Takes the last item and last child, unless that makes the node underflow.
	#[inline]
	pub fn pop_right(&mut self) -> Result<(T, Option<I>), WouldUnderflow> {
		if self.item_count() <= MIN_ITEMS {
			return Err(WouldUnderflow);
		}

		match self {
			Node::Leaf { items } => Ok((items.pop().ok_or(WouldUnderflow)?, None)),
			Node::Internal { items, children } => {
				let item = items.pop().ok_or(WouldUnderflow)?;
				Ok((item, children.pop()))
			}
		}
	}

	/// Prepends an item, and a child if this is an internal node.
	#[inline]
	pub fn push_left(&mut self, item: T, child_id: Option<I>) {
		match self {
			Node::Leaf { items } => items.insert(0, item),
			Node::Internal { items, children } => {
				items.insert(0, item);
				if let Some(child_id) = child_id {
					children.insert(0, child_id)
				}
			}
		}
	}

	/// Appends an item, and a child if this is an internal node.
	#[inline]
	pub fn push_right(&mut self, item: T, child_id: Option<I>) {
		match self {
			Node::Leaf { items } => items.push(item),
			Node::Internal { items, children } => {
				items.push(item);
				if let Some(child_id) = child_id {
					children.push(child_id)
				}
			}
		}
	}

	/// Removes the separator at `offset` and the child right after it, which is about to be merged
	/// into the child before it.
	#[inline]
	pub fn remove_separator(&mut self, offset: usize) -> (T, I) {
		match self {
			Node::Leaf { .. } => unreachable!("leaves have no separators"),
			Node::Internal { items, children } => (items.remove(offset), children.remove(offset + 1)),
		}
	}

	/// Absorbs `separator` then all of `right`'s items and children.
	#[inline]
	pub fn append(&mut self, separator: T, right: Node<T, I>) {
		debug_assert_eq!(self.is_leaf(), right.is_leaf());
		debug_assert!(self.item_count() + right.item_count() < M, "nodes are too big to merge");
		let (right_items, right_children) = right.into_parts();
		match self {
			Node::Leaf { items } => {
				items.push(separator);
				items.extend(right_items);
			}
			Node::Internal { items, children } => {
				items.push(separator);
				items.extend(right_items);
				children.extend(right_children);
			}
		}
	}

	/// Destructures the node into its items and children (empty for a leaf).
	#[inline]
	pub fn into_parts(self) -> (Items<T>, Children<I>) {
		match self {
			Node::Leaf { items } => (items, ArrayVec::new()),
			Node::Internal { items, children } => (items, children),
		}
	}

	/// Checks the node-local invariants, *panic*ing if one is broken:
	/// occupancy, child count, and strictly increasing items within `(min, max)`.
	pub fn validate<C: Comparator<T> + ?Sized>(
		&self,
		cmp: &C,
		is_root: bool,
		min: Option<&T>,
		max: Option<&T>,
	) {
		let count = self.item_count();
		if count > MAX_ITEMS {
			panic!("node overflow ({} items)", count)
		}
		if count < if is_root { 1 } else { MIN_ITEMS } {
			panic!("node underflow ({} items)", count)
		}
		if !self.is_leaf() && self.child_count() != count + 1 {
			panic!("{} children for {} items", self.child_count(), count)
		}

		let items = self.items();
		for pair in items.windows(2) {
			if cmp.compare(&pair[0], &pair[1]) != Ordering::Less {
				panic!("items are not sorted")
			}
		}
		if let (Some(min), Some(first)) = (min, items.first()) {
			if cmp.compare(min, first) != Ordering::Less {
				panic!("item is not greater than its left separator")
			}
		}
		if let (Some(max), Some(last)) = (max, items.last()) {
			if cmp.compare(last, max) != Ordering::Less {
				panic!("item is not less than its right separator")
			}
		}
	}

	/// Write the label of the node in the DOT language.
	///
	/// Requires the `dot` feature.
	#[cfg(any(doc, feature = "dot"))]
	#[inline]
	pub fn dot_write_label<W: std::io::Write>(&self, f: &mut W) -> std::io::Result<()>
	where
		T: std::fmt::Display,
	{
		for (i, item) in self.items().iter().enumerate() {
			if i > 0 {
				write!(f, "|")?;
			}
			write!(f, "{}", item)?;
		}
		Ok(())
	}
}

impl<T, I: Index> Default for Node<T, I> {
	#[inline]
	fn default() -> Self {
		Node::empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::compare::Natural;

	fn leaf(items: impl IntoIterator<Item = u32>) -> Node<u32, usize> {
		Node::Leaf {
			items: items.into_iter().collect(),
		}
	}

	#[test]
	fn offsets() {
		let node = leaf([10, 20, 30]);
		assert_eq!(node.offset_of(&Natural, &20), Ok(1));
		assert_eq!(node.offset_of(&Natural, &5), Err(0));
		assert_eq!(node.offset_of(&Natural, &25), Err(2));
		assert_eq!(node.offset_of(&Natural, &35), Err(3));
		assert_eq!(node.lower_offset(&Natural, &30), 2);
	}

	#[test]
	fn split_leaf() {
		let mut node = leaf(0..M as u32);
		assert_eq!(node.balance(), Balance::Overflow);
		let (median, right) = node.split();
		assert_eq!(median, (M / 2) as u32);
		assert_eq!(node.items(), &(0..(M / 2) as u32).collect::<Vec<_>>()[..]);
		assert_eq!(right.items(), &((M / 2 + 1) as u32..M as u32).collect::<Vec<_>>()[..]);
		assert!(node.item_count() >= MIN_ITEMS);
		assert!(right.item_count() >= MIN_ITEMS);
	}

	#[test]
	fn split_internal() {
		let mut node: Node<u32, usize> = Node::Internal {
			items: (0..M as u32).collect(),
			children: (100..101 + M).collect(),
		};
		let (median, right) = node.split();
		assert_eq!(median, (M / 2) as u32);
		assert_eq!(node.child_count(), node.item_count() + 1);
		assert_eq!(right.child_count(), right.item_count() + 1);
		assert_eq!(right.child_id(0), 100 + M / 2 + 1);
	}

	#[test]
	fn pop_respects_minimum() {
		let mut node = leaf(0..MIN_ITEMS as u32);
		assert_eq!(node.pop_left(), Err(WouldUnderflow));
		assert_eq!(node.pop_right(), Err(WouldUnderflow));
		node.push_right(100, None);
		assert_eq!(node.pop_left(), Ok((0, None)));
	}

	#[test]
	fn merge_with_separator() {
		let mut left = leaf([1, 2]);
		left.append(3, leaf([4, 5]));
		assert_eq!(left.items(), &[1, 2, 3, 4, 5]);
		left.validate(&Natural, true, None, None);
	}

	#[test]
	#[should_panic(expected = "items are not sorted")]
	fn validate_catches_disorder() {
		leaf([1, 3, 2, 4]).validate(&Natural, true, None, None);
	}
}
