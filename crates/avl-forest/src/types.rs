//! Node link trait and comparator conventions.
//!
//! Nodes live in a [`Vec`]-backed arena owned by the tree. Every "pointer"
//! (`p`, `l`, `r`) is an `Option<u32>` index into that arena, so structural
//! helpers take the arena as a slice and work purely with indices.

/// Parent / left / right links of an arena node.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Comparator used by the tree.
///
/// Returns a negative number when `a < b`, zero when equal, positive
/// otherwise.
pub type Comparator<T> = dyn Fn(&T, &T) -> i32;

/// Natural ordering comparator, the default for [`crate::AvlTree::new`].
pub fn default_comparator<T: PartialOrd>(a: &T, b: &T) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}
