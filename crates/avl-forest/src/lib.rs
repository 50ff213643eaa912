//! Arena-based AVL tree.
//!
//! [`AvlTree`] is an ordered set of unique values that keeps
//! `|height(left) - height(right)| <= 1` at every node after each insert and
//! remove. Instead of owning pointers, nodes live in a dense `Vec` owned by
//! the tree and link to each other through `Option<u32>` indices (`p` / `l` /
//! `r`), which keeps rotations to a handful of index writes and makes
//! cloning a plain deep copy of the arena.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Node`] link trait and the comparator convention |
//! | [`util`] | `first`, `last`, `next`, `prev`, `depth`, `size` over any [`Node`] arena |
//! | [`avl`] | [`AvlTree`], [`Cursor`], iterators, rotations and the invariant checker |
//! | [`print`] | tree-dump rendering used by the debug printers |
//! | [`error`] | [`InvariantError`] |
//!
//! # Example
//!
//! ```
//! use avl_forest::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! for v in [25, 11, 46, 7, 17, 30, 88, 9, 26, 37] {
//!     tree.insert(v);
//! }
//!
//! let values: Vec<i32> = tree.iter().copied().collect();
//! assert_eq!(values, [7, 9, 11, 17, 25, 26, 30, 37, 46, 88]);
//!
//! let at = tree.find(&26);
//! assert_eq!(at.predecessor().value(), &25);
//! assert_eq!(at.successor().value(), &30);
//! assert!(tree.find(&12).is_end());
//! ```

pub mod avl;
pub mod error;
pub mod print;
pub mod types;
pub mod util;

pub use avl::{AvlTree, Cursor, IntoIter, Iter};
pub use error::InvariantError;
pub use types::{default_comparator, Comparator, Node};
