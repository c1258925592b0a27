use super::BTree;
use crate::{
	node::Node,
	store::{Index, StoreView},
};
use std::{fmt::Display, io::Write};

impl<T: Display, C, I: Index, S: StoreView<Node<T, I>, Index = I>> BTree<T, C, I, S> {
	/// Write the tree in the DOT graph description language.
	///
	/// Requires the `dot` feature.
	#[inline]
	pub fn dot_write(&self, f: &mut impl Write) -> std::io::Result<()> {
		write!(f, "digraph tree {{\n\tnode [shape=record];\n")?;
		if let Some(id) = self.root {
			self.dot_write_node(f, id)?
		}
		write!(f, "}}")
	}

	fn dot_write_node(&self, f: &mut impl Write, id: I) -> std::io::Result<()> {
		let name = format!("n{:?}", id);
		let node = self.node(id);

		write!(f, "\t{} [label=\"", name)?;
		node.dot_write_label(f)?;
		writeln!(f, "\"];")?;

		for &child_id in node.children() {
			self.dot_write_node(f, child_id)?;
			writeln!(f, "\t{} -> n{:?}", name, child_id)?;
		}

		Ok(())
	}
}
