mod bounded;
mod failing;
mod index;

pub use bounded::Bounded;
pub use failing::Failing;
pub use index::*;

/// Trait for a generic immutable view of a node store. It must support immutable indexing
pub trait StoreView<T> {
	/// The type of index or key used to remember and retrieve elements from this store
	type Index: Index;

	/// Get the element inserted at the given index, if any
	fn get(&self, index: Self::Index) -> Option<&T>;
}

/// Trait for a generic node store: the allocator of a [`BTree`](crate::BTree).
///
/// Inserting is allocating and may fail. Removing is releasing and never fails.
pub trait Store<T>: StoreView<T> {
	/// Insert an element into the store, returning the index at which it was inserted.
	/// Subsequent calls to [StoreView::get] and [Self::get_mut] with the returned index must
	/// return a reference to the inserted element.
	///
	/// If the store cannot hold another element, the element is handed back untouched.
	fn try_insert(&mut self, value: T) -> Result<Self::Index, T>;
	/// Remove an element from the store, returning the element that was removed.
	/// Subsequent calls to [StoreView::get] and [Self::get_mut] with the given index must return
	/// `None` until a new element is inserted, then they can refer to any new element.
	fn remove(&mut self, index: Self::Index) -> Option<T>;
	/// Get a mutable reference to an element in the store, if any.
	/// [StoreView::get] and [Self::get_mut] must both return `Some` or both return `None`.
	fn get_mut(&mut self, index: Self::Index) -> Option<&mut T>;
	/// If this store is completely owned (not a derivative of a shared store), clear all elements
	/// and return `true`. Otherwise return `false`.
	fn clear_fast(&mut self) -> bool;
}

#[cfg(any(doc, feature = "slab"))]
impl<T> StoreView<T> for ::slab::Slab<T> {
	type Index = usize;

	#[inline]
	fn get(&self, index: Self::Index) -> Option<&T> {
		::slab::Slab::get(self, index)
	}
}

#[cfg(any(doc, feature = "slab"))]
impl<T> Store<T> for ::slab::Slab<T> {
	/// Never fails.
	#[inline]
	fn try_insert(&mut self, value: T) -> Result<Self::Index, T> {
		Ok(::slab::Slab::insert(self, value))
	}

	#[inline]
	fn remove(&mut self, index: Self::Index) -> Option<T> {
		::slab::Slab::try_remove(self, index)
	}

	#[inline]
	fn get_mut(&mut self, index: Self::Index) -> Option<&mut T> {
		::slab::Slab::get_mut(self, index)
	}

	#[inline]
	fn clear_fast(&mut self) -> bool {
		// Is owned
		self.clear();
		true
	}
}
