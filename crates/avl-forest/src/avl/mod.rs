//! Height-balanced binary search tree over a node arena.

pub mod cursor;
pub mod iter;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod tree;
pub mod types;
pub mod util;

pub use cursor::Cursor;
pub use iter::{IntoIter, Iter};
pub use tree::AvlTree;
pub use types::{AvlNode, AvlNodeLike};
