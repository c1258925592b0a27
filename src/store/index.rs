use std::fmt::Debug;
use std::hash::Hash;

/// A way to identify a node in a store
pub trait Index: Copy + Eq + Hash + Debug {}

impl Index for usize {}

impl Index for u32 {}
