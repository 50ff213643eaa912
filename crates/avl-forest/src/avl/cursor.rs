use std::fmt;

use crate::util::{depth, next, prev};

use super::tree::AvlTree;
use super::util::height;

/// Read-only position inside an [`AvlTree`].
///
/// A cursor either points at a node or is the end cursor, which holds no
/// node. Stepping is structural: the successor is the leftmost node of the
/// right subtree, or the first ancestor reached from a left child (and the
/// mirror image for the predecessor), so no search from the root is needed.
///
/// Cursors are `Copy`; any number of them may walk the same tree
/// independently.
pub struct Cursor<'a, T, C>
where
    C: Fn(&T, &T) -> i32,
{
    tree: &'a AvlTree<T, C>,
    node: Option<u32>,
}

impl<'a, T, C> Cursor<'a, T, C>
where
    C: Fn(&T, &T) -> i32,
{
    pub(crate) fn new(tree: &'a AvlTree<T, C>, node: Option<u32>) -> Self {
        Self { tree, node }
    }

    pub(crate) fn tree(&self) -> &'a AvlTree<T, C> {
        self.tree
    }

    fn expect_node(&self, op: &str) -> u32 {
        match self.node {
            Some(i) => i,
            None => panic!("cannot {op} the end cursor"),
        }
    }

    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// Arena index of the node, valid until the tree is next mutated.
    pub fn index(&self) -> Option<u32> {
        self.node
    }

    /// The value under the cursor, or `None` for the end cursor.
    pub fn get(&self) -> Option<&'a T> {
        let tree = self.tree;
        self.node.map(|i| &tree.arena()[i as usize].v)
    }

    /// The value under the cursor.
    ///
    /// # Panics
    ///
    /// If this is the end cursor.
    pub fn value(&self) -> &'a T {
        let i = self.expect_node("dereference");
        &self.tree.arena()[i as usize].v
    }

    /// Cursor at the in-order successor, or the end cursor after the last
    /// value.
    ///
    /// # Panics
    ///
    /// If this is the end cursor.
    pub fn successor(&self) -> Self {
        let i = self.expect_node("advance");
        Self::new(self.tree, next(self.tree.arena(), i))
    }

    /// Cursor at the in-order predecessor, or the end cursor before the
    /// first value.
    ///
    /// # Panics
    ///
    /// If this is the end cursor.
    pub fn predecessor(&self) -> Self {
        let i = self.expect_node("rewind");
        Self::new(self.tree, prev(self.tree.arena(), i))
    }

    /// Steps forward in place.
    ///
    /// # Panics
    ///
    /// If this is the end cursor.
    pub fn move_next(&mut self) {
        *self = self.successor();
    }

    /// Steps backward in place.
    ///
    /// # Panics
    ///
    /// If this is the end cursor.
    pub fn move_prev(&mut self) {
        *self = self.predecessor();
    }

    /// Height of the subtree rooted at the node; `-1` for the end cursor.
    pub fn height(&self) -> i32 {
        height(self.tree.arena(), self.node)
    }

    /// Number of edges from the root down to the node.
    ///
    /// # Panics
    ///
    /// If this is the end cursor.
    pub fn depth(&self) -> usize {
        let i = self.expect_node("measure the depth of");
        depth(self.tree.arena(), i)
    }
}

impl<T, C> Clone for Cursor<'_, T, C>
where
    C: Fn(&T, &T) -> i32,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, C> Copy for Cursor<'_, T, C> where C: Fn(&T, &T) -> i32 {}

/// Two cursors are equal when they point at the same node of the same tree.
impl<T, C> PartialEq for Cursor<'_, T, C>
where
    C: Fn(&T, &T) -> i32,
{
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.node == other.node
    }
}

impl<T, C> Eq for Cursor<'_, T, C> where C: Fn(&T, &T) -> i32 {}

impl<T, C> fmt::Debug for Cursor<'_, T, C>
where
    T: fmt::Debug,
    C: Fn(&T, &T) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(v) => f.debug_tuple("Cursor").field(v).finish(),
            None => f.write_str("Cursor(end)"),
        }
    }
}
