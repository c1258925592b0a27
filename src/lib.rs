#![doc = include_str!("../README.md")]

pub use compare::{Comparator, Natural};
pub use cursor::Cursor;
pub use error::{Error, Result, Status};
pub use node::{Node, M};
pub use path::{Address, Path};
pub use store::{Bounded, Failing, Index, Store, StoreView};
pub use tree::{BTree, Iter};
#[cfg(any(doc, feature = "slab"))]
pub use tree::SlabBTree;

pub mod compare;
mod cursor;
pub mod error;
pub mod node;
mod path;
pub mod store;
mod tree;
