use super::{Store, StoreView};

/// Fault-injecting store wrapper.
///
/// Counts successful insertions and refuses every insertion once its remaining budget is used
/// up. Setting the budget to `k` makes the `k`-th insertion (counting from zero) and all later
/// ones fail, which lets tests exercise every allocation failure point of an operation
/// deterministically.
#[derive(Debug, Clone)]
pub struct Failing<S> {
	inner: S,
	n_allocations: usize,
	n_remaining: usize,
}

impl<S> Failing<S> {
	/// Wraps a store without any budget limit.
	#[inline]
	pub fn new(inner: S) -> Self {
		Self::with_remaining(inner, usize::MAX)
	}

	/// Wraps a store that accepts `n_remaining` more insertions.
	#[inline]
	pub fn with_remaining(inner: S, n_remaining: usize) -> Self {
		Self {
			inner,
			n_allocations: 0,
			n_remaining,
		}
	}

	/// Number of successful insertions so far.
	#[inline]
	pub fn n_allocations(&self) -> usize {
		self.n_allocations
	}

	#[inline]
	pub fn n_remaining(&self) -> usize {
		self.n_remaining
	}

	#[inline]
	pub fn set_remaining(&mut self, n_remaining: usize) {
		self.n_remaining = n_remaining
	}

	#[inline]
	pub fn into_inner(self) -> S {
		self.inner
	}
}

impl<S: Default> Default for Failing<S> {
	#[inline]
	fn default() -> Self {
		Self::new(S::default())
	}
}

impl<T, S: StoreView<T>> StoreView<T> for Failing<S> {
	type Index = S::Index;

	#[inline]
	fn get(&self, index: Self::Index) -> Option<&T> {
		self.inner.get(index)
	}
}

impl<T, S: Store<T>> Store<T> for Failing<S> {
	#[inline]
	fn try_insert(&mut self, value: T) -> Result<Self::Index, T> {
		if self.n_remaining == 0 {
			log::debug!("injected allocation failure after {} allocations", self.n_allocations);
			return Err(value);
		}

		let index = self.inner.try_insert(value)?;
		self.n_remaining -= 1;
		self.n_allocations += 1;
		Ok(index)
	}

	#[inline]
	fn remove(&mut self, index: Self::Index) -> Option<T> {
		self.inner.remove(index)
	}

	#[inline]
	fn get_mut(&mut self, index: Self::Index) -> Option<&mut T> {
		self.inner.get_mut(index)
	}

	#[inline]
	fn clear_fast(&mut self) -> bool {
		self.inner.clear_fast()
	}
}
