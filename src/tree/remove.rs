use super::BTree;
use crate::{
	compare::Comparator,
	error::{Error, Result},
	node::{Balance, Node},
	path::{Address, Levels, Path},
	store::{Index, Store},
};

impl<T, C: Comparator<T>, I: Index, S: Store<Node<T, I>, Index = I>> BTree<T, C, I, S> {
	/// Removes the item equal to `key`.
	///
	/// Returns the removed item and the path to its successor in the rebalanced tree (the end path
	/// if it was the last item), which is the lower bound of `key` after the removal.
	///
	/// # Errors
	///
	/// [`Error::NotFound`] if there is no such item. Removal never allocates.
	pub fn remove(&mut self, key: &T) -> Result<(T, Path<I>)> {
		let mut levels = self.find_levels(&self.cmp, key).ok_or(Error::NotFound)?;
		let address = *levels.last().expect("non-empty path");

		let removed = if self.node(address.id).is_leaf() {
			self.node_mut(address.id).leaf_remove(address.offset)
		} else {
			// Substitute the in-order predecessor, taken from the rightmost leaf of the left child.
			let leaf_id = self.push_rightmost_leaf(&mut levels, self.node(address.id).child_id(address.offset));
			let predecessor = self.node_mut(leaf_id).pop_last_item().expect("leaves are not empty");
			self.node_mut(address.id).replace(address.offset, predecessor)
		};

		self.len -= 1;
		self.rebalance(levels);

		let next = self.lower_bound_by(&self.cmp, &removed);
		Ok((removed, next))
	}

	/// Pushes the rightmost descent from `id` down to a leaf, returning the leaf id.
	#[inline]
	fn push_rightmost_leaf(&self, levels: &mut Levels<I>, mut id: I) -> I {
		loop {
			let node = self.node(id);
			let count = node.item_count();
			if node.is_leaf() {
				levels.push(Address::new(id, count - 1));
				return id;
			}

			levels.push(Address::new(id, count));
			id = node.child_id(count);
		}
	}

	/// Restores the occupancy of the nodes along `levels`, from the bottom up.
	///
	/// Ancestor levels must hold the index of the child the path goes through.
	fn rebalance(&mut self, mut levels: Levels<I>) {
		while let Some(address) = levels.pop() {
			let is_empty = match self.node(address.id).balance() {
				Balance::Balanced => return,
				Balance::Overflow => unreachable!("removal cannot overflow a node"),
				Balance::Underflow(is_empty) => is_empty,
			};

			let parent = match levels.last() {
				Some(parent) => *parent,
				None => {
					if is_empty {
						self.collapse_root(address.id)
					}

					return;
				}
			};

			if self.try_rotate_left(parent.id, parent.offset) || self.try_rotate_right(parent.id, parent.offset) {
				return;
			}

			self.merge(parent.id, parent.offset)
		}
	}

	/// Refills child `index` of `parent_id` with the first item of its right sibling, through
	/// their separator.
	#[inline]
	fn try_rotate_left(&mut self, parent_id: I, index: usize) -> bool {
		let parent = self.node(parent_id);
		let (id, right_id) = match parent.child_id_opt(index + 1) {
			Some(right_id) => (parent.child_id(index), right_id),
			None => return false,
		};

		match self.node_mut(right_id).pop_left() {
			Ok((item, child_id)) => {
				let separator = self.node_mut(parent_id).replace(index, item);
				self.node_mut(id).push_right(separator, child_id);
				log::trace!("rotated left from {:?} into {:?}", right_id, id);
				true
			}
			Err(_) => false,
		}
	}

	/// Refills child `index` of `parent_id` with the last item of its left sibling, through
	/// their separator.
	#[inline]
	fn try_rotate_right(&mut self, parent_id: I, index: usize) -> bool {
		if index == 0 {
			return false;
		}

		let parent = self.node(parent_id);
		let (left_id, id) = (parent.child_id(index - 1), parent.child_id(index));
		match self.node_mut(left_id).pop_right() {
			Ok((item, child_id)) => {
				let separator = self.node_mut(parent_id).replace(index - 1, item);
				self.node_mut(id).push_left(separator, child_id);
				log::trace!("rotated right from {:?} into {:?}", left_id, id);
				true
			}
			Err(_) => false,
		}
	}

	/// Merges child `index` of `parent_id` with a sibling, pulling their separator down.
	/// The right node of the pair is released.
	#[inline]
	fn merge(&mut self, parent_id: I, index: usize) {
		let left_index = if index > 0 { index - 1 } else { index };
		let parent = self.node_mut(parent_id);
		let (separator, right_id) = parent.remove_separator(left_index);
		let left_id = parent.child_id(left_index);

		let right = self.release_node(right_id);
		self.node_mut(left_id).append(separator, right);
		log::trace!("merged {:?} into {:?}", right_id, left_id);
	}

	/// Replaces an empty root by its only child, or empties the tree if it is a leaf.
	#[inline]
	fn collapse_root(&mut self, root_id: I) {
		let root = self.release_node(root_id);
		self.root = root.child_id_opt(0);
		log::trace!("collapsed root {:?} into {:?}", root_id, self.root);
	}
}
