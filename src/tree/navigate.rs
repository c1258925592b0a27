use super::BTree;
use crate::{
	error::{Error, Result},
	node::Node,
	path::{Address, Levels, Path, Position},
	store::{Index, StoreView},
};

impl<T, C, I: Index, S: StoreView<Node<T, I>, Index = I>> BTree<T, C, I, S> {
	/// Path to the first item, or the end path if the tree is empty.
	#[inline]
	pub fn begin(&self) -> Path<I> {
		match self.root {
			Some(id) => {
				let mut levels = Levels::new();
				self.push_leftmost(&mut levels, id);
				Path::at(levels)
			}
			None => Path::empty(),
		}
	}

	/// Path past the last item.
	#[inline]
	pub fn end(&self) -> Path<I> {
		match self.root {
			Some(_) => Path::end(),
			None => Path::empty(),
		}
	}

	/// Path to the last item, or the rend path if the tree is empty.
	#[inline]
	pub fn rbegin(&self) -> Path<I> {
		match self.root {
			Some(id) => {
				let mut levels = Levels::new();
				self.push_rightmost(&mut levels, id);
				Path::at(levels)
			}
			None => Path::empty(),
		}
	}

	/// Path before the first item.
	#[inline]
	pub fn rend(&self) -> Path<I> {
		match self.root {
			Some(_) => Path::rend(),
			None => Path::empty(),
		}
	}

	/// Moves `path` to the next item, or to the end path from the last item.
	///
	/// From the rend path, moves to the first item.
	///
	/// # Errors
	///
	/// [`Error::ReachedEnd`] if `path` is already at the end, and [`Error::BadArg`] if it does not
	/// designate a position of this tree. The path is left untouched in both cases.
	pub fn increment(&self, path: &mut Path<I>) -> Result<()> {
		match path.position {
			Position::Empty | Position::End => return Err(Error::ReachedEnd),
			Position::Rend => {
				*path = self.begin();
				return Ok(());
			}
			Position::At(_) => (),
		}

		if let Position::At(levels) = &mut path.position {
			self.check_levels(levels)?;
			if !self.step_forward(levels) {
				*path = Path::end()
			}
		}

		Ok(())
	}

	/// Moves `path` to the previous item, or to the rend path from the first item.
	///
	/// From the end path, moves to the last item.
	///
	/// # Errors
	///
	/// [`Error::ReachedEnd`] if `path` is already at the rend path, and [`Error::BadArg`] if it
	/// does not designate a position of this tree. The path is left untouched in both cases.
	pub fn decrement(&self, path: &mut Path<I>) -> Result<()> {
		match path.position {
			Position::Empty | Position::Rend => return Err(Error::ReachedEnd),
			Position::End => {
				*path = self.rbegin();
				return Ok(());
			}
			Position::At(_) => (),
		}

		if let Position::At(levels) = &mut path.position {
			self.check_levels(levels)?;
			if !self.step_backward(levels) {
				*path = Path::rend()
			}
		}

		Ok(())
	}

	/// Pushes the path from `id` down to the leftmost item of its subtree.
	#[inline]
	fn push_leftmost(&self, levels: &mut Levels<I>, mut id: I) {
		loop {
			levels.push(Address::new(id, 0));
			match self.node(id).child_id_opt(0) {
				Some(child_id) => id = child_id,
				None => break,
			}
		}
	}

	/// Pushes the path from `id` down to the rightmost item of its subtree.
	#[inline]
	fn push_rightmost(&self, levels: &mut Levels<I>, mut id: I) {
		loop {
			let node = self.node(id);
			if node.is_leaf() {
				levels.push(Address::new(id, node.item_count() - 1));
				break;
			}

			let last = node.child_count() - 1;
			levels.push(Address::new(id, last));
			id = node.child_id(last);
		}
	}

	/// Checks that `levels` is a root-to-item path of this tree.
	fn check_levels(&self, levels: &Levels<I>) -> Result<()> {
		let (top, ancestors) = levels.split_last().ok_or(Error::BadArg)?;
		let mut expected = self.root;
		for address in ancestors {
			if expected != Some(address.id) {
				return Err(Error::BadArg);
			}

			let node = self.try_node(address.id)?;
			expected = Some(node.child_id_opt(address.offset).ok_or(Error::BadArg)?);
		}

		if expected != Some(top.id) || top.offset >= self.try_node(top.id)?.item_count() {
			return Err(Error::BadArg);
		}

		Ok(())
	}

	/// Moves a checked path to the in-order successor. Returns `false` if there is none, in which
	/// case `levels` is left empty.
	fn step_forward(&self, levels: &mut Levels<I>) -> bool {
		let top = levels.last_mut().expect("checked path");
		let node = self.node(top.id);

		if !node.is_leaf() {
			// Successor is the leftmost item right of the current one.
			top.offset += 1;
			let child_id = node.child_id(top.offset);
			self.push_leftmost(levels, child_id);
			return true;
		}

		if top.offset + 1 < node.item_count() {
			top.offset += 1;
			return true;
		}

		levels.pop();
		while let Some(address) = levels.last() {
			if address.offset < self.node(address.id).item_count() {
				return true;
			}

			levels.pop();
		}

		false
	}

	/// Moves a checked path to the in-order predecessor. Returns `false` if there is none, in which
	/// case `levels` is left empty.
	fn step_backward(&self, levels: &mut Levels<I>) -> bool {
		let top = levels.last_mut().expect("checked path");
		let node = self.node(top.id);

		if !node.is_leaf() {
			// Predecessor is the rightmost item left of the current one.
			let child_id = node.child_id(top.offset);
			self.push_rightmost(levels, child_id);
			return true;
		}

		if top.offset > 0 {
			top.offset -= 1;
			return true;
		}

		levels.pop();
		while let Some(address) = levels.last_mut() {
			if address.offset > 0 {
				address.offset -= 1;
				return true;
			}

			levels.pop();
		}

		false
	}
}
