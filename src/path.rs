use smallvec::SmallVec;
use std::fmt;

/// Item address in a tree: the node id and the offset in that node.
///
/// In the ancestor levels of a [`Path`], the offset is the index of the child the path descends
/// into. In the last level it is the offset of the designated item.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Address<I> {
	pub id: I,
	pub offset: usize,
}

impl<I> Address<I> {
	#[inline]
	pub fn new(id: I, offset: usize) -> Self {
		Self { id, offset }
	}
}

impl<I: fmt::Display> fmt::Display for Address<I> {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}@{}", self.id, self.offset)
	}
}

/// Root-to-node stack of addresses. Inline for any realistic tree height.
pub(crate) type Levels<I> = SmallVec<[Address<I>; 16]>;

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub(crate) enum Position<I> {
	/// Path into an empty tree: both past-the-end and before-the-beginning.
	Empty,
	/// Before the first item.
	Rend,
	/// At an item.
	At(Levels<I>),
	/// Past the last item.
	End,
}

/// A position in a [`BTree`](crate::BTree).
///
/// A path either designates an item, or is one of the two sentinels: [`is_end`](Path::is_end) past
/// the last item and [`is_rend`](Path::is_rend) before the first one. In an empty tree the end and
/// rend paths coincide.
///
/// Paths are plain values holding node ids: they stay meaningful only until the tree is modified
/// by anything other than the operation that returned them. Two paths are equal when they denote
/// the same position.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Path<I> {
	pub(crate) position: Position<I>,
}

impl<I: Copy> Path<I> {
	#[inline]
	pub(crate) fn empty() -> Self {
		Self {
			position: Position::Empty,
		}
	}

	#[inline]
	pub(crate) fn end() -> Self {
		Self {
			position: Position::End,
		}
	}

	#[inline]
	pub(crate) fn rend() -> Self {
		Self {
			position: Position::Rend,
		}
	}

	#[inline]
	pub(crate) fn at(levels: Levels<I>) -> Self {
		debug_assert!(!levels.is_empty());
		Self {
			position: Position::At(levels),
		}
	}

	/// Past-the-end.
	#[inline]
	pub fn is_end(&self) -> bool {
		matches!(self.position, Position::End | Position::Empty)
	}

	/// Before-the-beginning.
	#[inline]
	pub fn is_rend(&self) -> bool {
		matches!(self.position, Position::Rend | Position::Empty)
	}

	/// Address of the designated item, if any.
	#[inline]
	pub fn address(&self) -> Option<Address<I>> {
		match &self.position {
			Position::At(levels) => levels.last().copied(),
			_ => None,
		}
	}

	/// Number of levels from the root, zero for sentinels.
	#[inline]
	pub fn depth(&self) -> usize {
		match &self.position {
			Position::At(levels) => levels.len(),
			_ => 0,
		}
	}

	/// Same position as `other`.
	#[inline]
	pub fn equals(&self, other: &Self) -> bool
	where
		I: PartialEq,
	{
		self == other
	}
}
