use std::fmt;

/// Result of a fallible tree operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons an operation on a [`BTree`](crate::BTree) can fail.
///
/// None of these are fatal. A tree that returned an error is left exactly as it was before the
/// call.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
	/// Unspecified failure.
	#[error("Unknown error")]
	Unknown,

	/// The node store refused to allocate a node.
	#[error("Out of memory")]
	NoMem,

	/// The key is not in the tree.
	#[error("Not found")]
	NotFound,

	/// An equal key is already in the tree.
	#[error("Exists")]
	Exists,

	/// An argument does not belong to this tree, e.g. a stale [`Path`](crate::Path).
	#[error("Bad argument")]
	BadArg,

	/// The operation is not permitted.
	#[error("Bad permissions")]
	BadPerms,

	/// An iterator was advanced past the last or before the first element.
	#[error("Reached end")]
	ReachedEnd,
}

/// Every status code an operation can report, success included.
///
/// Rust code mostly deals in [`Result`], this type exists for callers that want the whole set of
/// codes as plain values, e.g. to forward them over an FFI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Status {
	Success,
	Error,
	NoMem,
	NotFound,
	Exists,
	BadArg,
	BadPerms,
	ReachedEnd,
}

impl Status {
	/// All status codes, in code order.
	pub const ALL: [Status; 8] = [
		Status::Success,
		Status::Error,
		Status::NoMem,
		Status::NotFound,
		Status::Exists,
		Status::BadArg,
		Status::BadPerms,
		Status::ReachedEnd,
	];

	/// Human-readable description of the status.
	#[inline]
	pub fn strerror(self) -> &'static str {
		match self {
			Status::Success => "Success",
			Status::Error => "Unknown error",
			Status::NoMem => "Out of memory",
			Status::NotFound => "Not found",
			Status::Exists => "Exists",
			Status::BadArg => "Bad argument",
			Status::BadPerms => "Bad permissions",
			Status::ReachedEnd => "Reached end",
		}
	}

	/// Numeric code of the status.
	#[inline]
	pub fn code(self) -> u8 {
		self as u8
	}

	/// Status with the given numeric code, if any.
	#[inline]
	pub fn from_code(code: u8) -> Option<Status> {
		Self::ALL.get(code as usize).copied()
	}

	#[inline]
	pub fn is_success(self) -> bool {
		self == Status::Success
	}

	/// Convert back into a [`Result`].
	#[inline]
	pub fn into_result(self) -> Result<()> {
		match self {
			Status::Success => Ok(()),
			Status::Error => Err(Error::Unknown),
			Status::NoMem => Err(Error::NoMem),
			Status::NotFound => Err(Error::NotFound),
			Status::Exists => Err(Error::Exists),
			Status::BadArg => Err(Error::BadArg),
			Status::BadPerms => Err(Error::BadPerms),
			Status::ReachedEnd => Err(Error::ReachedEnd),
		}
	}
}

impl From<Error> for Status {
	#[inline]
	fn from(err: Error) -> Status {
		match err {
			Error::Unknown => Status::Error,
			Error::NoMem => Status::NoMem,
			Error::NotFound => Status::NotFound,
			Error::Exists => Status::Exists,
			Error::BadArg => Status::BadArg,
			Error::BadPerms => Status::BadPerms,
			Error::ReachedEnd => Status::ReachedEnd,
		}
	}
}

impl<T> From<Result<T>> for Status {
	#[inline]
	fn from(result: Result<T>) -> Status {
		match result {
			Ok(_) => Status::Success,
			Err(err) => err.into(),
		}
	}
}

impl fmt::Display for Status {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.strerror())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn strerror() {
		assert_eq!(Status::Success.strerror(), "Success");
		for status in &Status::ALL[1..] {
			assert_ne!(status.strerror(), "Success");
		}
		assert_eq!(Status::from_code(200), None);
	}

	#[test]
	fn error_messages_match_status() {
		for status in &Status::ALL[1..] {
			let err = status.into_result().unwrap_err();
			assert_eq!(err.to_string(), status.strerror());
			assert_eq!(Status::from(err), *status);
		}
	}

	#[test]
	fn codes_round_trip() {
		for status in Status::ALL {
			assert_eq!(Status::from_code(status.code()), Some(status));
		}
		assert_eq!(Status::from(Ok::<_, Error>(3)), Status::Success);
	}
}
