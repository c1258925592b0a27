use super::{Store, StoreView};

/// Store holding at most a fixed number of elements.
///
/// Once `capacity` elements are live, further insertions are refused until something is removed.
/// This models a fixed-size node arena.
#[derive(Debug, Clone)]
pub struct Bounded<S> {
	inner: S,
	capacity: usize,
	len: usize,
}

impl<S> Bounded<S> {
	/// Wraps an empty store.
	#[inline]
	pub fn new(inner: S, capacity: usize) -> Self {
		Self {
			inner,
			capacity,
			len: 0,
		}
	}

	/// Number of live elements.
	#[inline]
	pub fn len(&self) -> usize {
		self.len
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	#[inline]
	pub fn capacity(&self) -> usize {
		self.capacity
	}

	/// Changes the capacity. Live elements above the new capacity stay, but nothing new is accepted
	/// until enough are removed.
	#[inline]
	pub fn set_capacity(&mut self, capacity: usize) {
		self.capacity = capacity
	}

	#[inline]
	pub fn into_inner(self) -> S {
		self.inner
	}
}

impl<T, S: StoreView<T>> StoreView<T> for Bounded<S> {
	type Index = S::Index;

	#[inline]
	fn get(&self, index: Self::Index) -> Option<&T> {
		self.inner.get(index)
	}
}

impl<T, S: Store<T>> Store<T> for Bounded<S> {
	#[inline]
	fn try_insert(&mut self, value: T) -> Result<Self::Index, T> {
		if self.len >= self.capacity {
			log::debug!("bounded store full ({} elements)", self.len);
			return Err(value);
		}

		let index = self.inner.try_insert(value)?;
		self.len += 1;
		Ok(index)
	}

	#[inline]
	fn remove(&mut self, index: Self::Index) -> Option<T> {
		let value = self.inner.remove(index)?;
		self.len -= 1;
		Some(value)
	}

	#[inline]
	fn get_mut(&mut self, index: Self::Index) -> Option<&mut T> {
		self.inner.get_mut(index)
	}

	#[inline]
	fn clear_fast(&mut self) -> bool {
		if self.inner.clear_fast() {
			self.len = 0;
			true
		} else {
			false
		}
	}
}
