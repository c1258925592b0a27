use smallvec::SmallVec;
use super::BTree;
use crate::{
	compare::Comparator,
	error::{Error, Result},
	node::{Balance, Node, MAX_ITEMS},
	path::{Address, Levels},
	store::{Index, Store},
};

impl<T, C: Comparator<T>, I: Index, S: Store<Node<T, I>, Index = I>> BTree<T, C, I, S> {
	/// Inserts an item.
	///
	/// # Errors
	///
	/// [`Error::Exists`] if an equal item is already in the tree, and [`Error::NoMem`] if the store
	/// cannot provide the nodes the insertion needs. In both cases the tree is left unchanged and
	/// `item` is dropped.
	pub fn insert(&mut self, item: T) -> Result<()> {
		let root_id = match self.root {
			Some(id) => id,
			None => {
				let id = self.allocate_node(Node::leaf(item))?;
				self.root = Some(id);
				self.len = 1;
				return Ok(());
			}
		};

		let mut levels = Levels::new();
		let mut id = root_id;
		loop {
			let node = self.node(id);
			let offset = match node.offset_of(&self.cmp, &item) {
				Ok(_) => return Err(Error::Exists),
				Err(offset) => offset,
			};

			levels.push(Address::new(id, offset));
			match node.child_id_opt(offset) {
				Some(child_id) => id = child_id,
				None => break,
			}
		}

		// Every full node on the way up splits, plus a new root if they all do.
		let splits = levels
			.iter()
			.rev()
			.take_while(|address| self.node(address.id).item_count() == MAX_ITEMS)
			.count();
		let needed = if splits == levels.len() { splits + 1 } else { splits };
		let mut spare_ids = self.reserve_nodes(needed)?.into_iter();

		let mut item = item;
		let mut right_id = None;
		while let Some(address) = levels.pop() {
			let node = self.node_mut(address.id);
			node.insert(address.offset, item, right_id);
			if node.balance() != Balance::Overflow {
				self.len += 1;
				return Ok(());
			}

			let (median, right) = node.split();
			let new_id = spare_ids.next().expect("reserved node");
			*self.node_mut(new_id) = right;
			log::trace!("split node {:?} into {:?}", address.id, new_id);

			item = median;
			right_id = Some(new_id);
		}

		let new_root_id = spare_ids.next().expect("reserved node");
		*self.node_mut(new_root_id) = Node::binary(root_id, item, right_id.expect("root was split"));
		self.root = Some(new_root_id);
		self.len += 1;
		log::trace!("new root {:?}, height {}", new_root_id, self.height());
		Ok(())
	}

	/// Allocates a node.
	#[inline]
	fn allocate_node(&mut self, node: Node<T, I>) -> Result<I> {
		self.store.try_insert(node).map_err(|_| {
			log::debug!("node allocation failed");
			Error::NoMem
		})
	}

	/// Allocates `count` placeholder nodes, all or nothing.
	fn reserve_nodes(&mut self, count: usize) -> Result<SmallVec<[I; 16]>> {
		let mut ids = SmallVec::new();
		for _ in 0..count {
			match self.allocate_node(Node::empty()) {
				Ok(id) => ids.push(id),
				Err(e) => {
					log::debug!("releasing {} of {} reserved nodes", ids.len(), count);
					for id in ids {
						self.release_node(id);
					}

					return Err(e);
				}
			}
		}

		Ok(ids)
	}
}
