use std::fmt;

use crate::error::InvariantError;
use crate::types::default_comparator;
use crate::util::{depth, first, get_l, get_r, last, next};

use super::cursor::Cursor;
use super::iter::{IntoIter, Iter};
use super::types::AvlNode;
use super::util::{self, Slot};

/// Ordered set of unique values kept in an AVL tree.
///
/// Nodes live in a dense arena owned by the tree and refer to each other by
/// `u32` index, so rotations only relink indices and dropping the tree drops
/// a flat `Vec`. Removing a value moves the last arena node into the freed
/// slot, which means raw indices from [`Cursor::index`] do not survive a
/// mutation. Cursors and iterators borrow the tree, so the compiler already
/// rejects mutation while one is alive.
///
/// The comparator follows the usual negative / zero / positive convention.
pub struct AvlTree<T, C = fn(&T, &T) -> i32>
where
    C: Fn(&T, &T) -> i32,
{
    root: Option<u32>,
    comparator: C,
    arena: Vec<AvlNode<T>>,
}

impl<T> AvlTree<T, fn(&T, &T) -> i32>
where
    T: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<T>)
    }
}

impl<T> Default for AvlTree<T, fn(&T, &T) -> i32>
where
    T: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> AvlTree<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            comparator,
            arena: Vec::new(),
        }
    }

    #[inline]
    fn compare(&self, a: &T, b: &T) -> i32 {
        (self.comparator)(a, b)
    }

    #[inline]
    pub(crate) fn arena(&self) -> &[AvlNode<T>] {
        &self.arena
    }

    #[inline]
    fn cursor(&self, node: Option<u32>) -> Cursor<'_, T, C> {
        Cursor::new(self, node)
    }

    /// Arena indices in ascending value order.
    fn in_order(&self) -> Vec<u32> {
        let mut order = Vec::with_capacity(self.arena.len());
        let mut curr = first(&self.arena, self.root);
        while let Some(i) = curr {
            order.push(i);
            curr = next(&self.arena, i);
        }
        order
    }

    fn find_node(&self, value: &T) -> Option<u32> {
        match util::locate(&self.arena, self.root, value, &self.comparator) {
            Slot::Found(i) => Some(i),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Height of the whole tree: `-1` when empty, `0` for a single node.
    pub fn height(&self) -> i32 {
        util::height(&self.arena, self.root)
    }

    /// Height of the subtree rooted at the node holding `value`.
    pub fn height_of(&self, value: &T) -> Option<i32> {
        self.find_node(value).map(|i| util::height(&self.arena, Some(i)))
    }

    /// Number of edges between the root and the node holding `value`.
    pub fn depth_of(&self, value: &T) -> Option<usize> {
        self.find_node(value).map(|i| depth(&self.arena, i))
    }

    pub fn root(&self) -> Cursor<'_, T, C> {
        self.cursor(self.root)
    }

    /// Cursor at the node holding `value`, or [`end`](Self::end).
    pub fn find(&self, value: &T) -> Cursor<'_, T, C> {
        self.cursor(self.find_node(value))
    }

    pub fn contains(&self, value: &T) -> bool {
        self.find_node(value).is_some()
    }

    /// The stored value equal to `value`.
    pub fn get(&self, value: &T) -> Option<&T> {
        self.find_node(value).map(|i| &self.arena[i as usize].v)
    }

    /// Cursor at the smallest value; [`end`](Self::end) when empty.
    pub fn minimum(&self) -> Cursor<'_, T, C> {
        self.cursor(first(&self.arena, self.root))
    }

    /// Cursor at the largest value; [`end`](Self::end) when empty.
    pub fn maximum(&self) -> Cursor<'_, T, C> {
        self.cursor(last(&self.arena, self.root))
    }

    pub fn first(&self) -> Option<&T> {
        self.minimum().get()
    }

    pub fn last(&self) -> Option<&T> {
        self.maximum().get()
    }

    /// Largest stored value strictly less than `value`.
    ///
    /// `value` itself does not need to be stored.
    pub fn predecessor(&self, value: &T) -> Cursor<'_, T, C> {
        let mut curr = self.root;
        let mut best = None;
        while let Some(i) = curr {
            if self.compare(&self.arena[i as usize].v, value) < 0 {
                best = Some(i);
                curr = get_r(&self.arena, i);
            } else {
                curr = get_l(&self.arena, i);
            }
        }
        self.cursor(best)
    }

    /// Smallest stored value strictly greater than `value`.
    ///
    /// `value` itself does not need to be stored.
    pub fn successor(&self, value: &T) -> Cursor<'_, T, C> {
        let mut curr = self.root;
        let mut best = None;
        while let Some(i) = curr {
            if self.compare(&self.arena[i as usize].v, value) > 0 {
                best = Some(i);
                curr = get_l(&self.arena, i);
            } else {
                curr = get_r(&self.arena, i);
            }
        }
        self.cursor(best)
    }

    /// Structural in-order predecessor of the node under `at`.
    ///
    /// # Panics
    ///
    /// If `at` is the end cursor or was obtained from another tree.
    pub fn predecessor_at(&self, at: Cursor<'_, T, C>) -> Cursor<'_, T, C> {
        self.assert_owns(&at);
        self.cursor(at.predecessor().index())
    }

    /// Structural in-order successor of the node under `at`.
    ///
    /// # Panics
    ///
    /// If `at` is the end cursor or was obtained from another tree.
    pub fn successor_at(&self, at: Cursor<'_, T, C>) -> Cursor<'_, T, C> {
        self.assert_owns(&at);
        self.cursor(at.successor().index())
    }

    fn assert_owns(&self, at: &Cursor<'_, T, C>) {
        assert!(
            std::ptr::eq(at.tree(), self),
            "cursor belongs to another tree"
        );
    }

    /// Cursor at the first value in order, equal to [`end`](Self::end) when
    /// the tree is empty.
    pub fn begin(&self) -> Cursor<'_, T, C> {
        self.minimum()
    }

    /// The past-the-end cursor; it holds no node.
    pub fn end(&self) -> Cursor<'_, T, C> {
        self.cursor(None)
    }

    /// Ascending iterator over the stored values.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(
            &self.arena,
            first(&self.arena, self.root),
            last(&self.arena, self.root),
        )
    }

    /// Adds `value` unless an equal value is already stored.
    ///
    /// Returns `true` if the value was inserted. A duplicate leaves the tree
    /// untouched.
    pub fn insert(&mut self, value: T) -> bool {
        let slot = match util::locate(&self.arena, self.root, &value, &self.comparator) {
            Slot::Found(_) => return false,
            slot => slot,
        };

        self.arena.push(AvlNode::new(value));
        let n = (self.arena.len() - 1) as u32;
        match slot {
            Slot::Left(p) => util::insert_left(&mut self.arena, &mut self.root, n, p),
            Slot::Right(p) => util::insert_right(&mut self.arena, &mut self.root, n, p),
            _ => self.root = Some(n),
        }
        true
    }

    /// Deletes the value equal to `value`. Returns `false` if absent.
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Deletes and returns the stored value equal to `value`.
    pub fn take(&mut self, value: &T) -> Option<T> {
        let n = self.find_node(value)?;
        Some(self.remove_node(n))
    }

    pub fn pop_first(&mut self) -> Option<T> {
        let n = first(&self.arena, self.root)?;
        Some(self.remove_node(n))
    }

    pub fn pop_last(&mut self) -> Option<T> {
        let n = last(&self.arena, self.root)?;
        Some(self.remove_node(n))
    }

    fn remove_node(&mut self, n: u32) -> T {
        let detached = util::remove(&mut self.arena, &mut self.root, n);
        util::swap_remove(&mut self.arena, &mut self.root, detached).v
    }

    /// Keeps only the values for which `f` returns `true`.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        let order = self.in_order();
        let mut slots: Vec<Option<T>> = std::mem::take(&mut self.arena)
            .into_iter()
            .map(|n| Some(n.v))
            .collect();
        self.root = None;
        for i in order {
            if let Some(v) = slots[i as usize].take() {
                if f(&v) {
                    self.insert(v);
                }
            }
        }
    }

    /// Drops every value.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    /// Exchanges the contents of two trees in constant time.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Verifies every structural invariant of the tree.
    pub fn assert_valid(&self) -> Result<(), InvariantError> {
        util::assert_avl_tree(&self.arena, self.root, self.len(), &self.comparator)
    }

    /// Renders the tree shape, one node per line with its height.
    pub fn print(&self) -> String
    where
        T: fmt::Debug,
    {
        match self.root {
            Some(_) => format!("AvlTree\n{}", util::print(&self.arena, self.root, "")),
            None => "AvlTree ∅".to_string(),
        }
    }
}

impl<T, C> Clone for AvlTree<T, C>
where
    T: Clone,
    C: Fn(&T, &T) -> i32 + Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root,
            comparator: self.comparator.clone(),
            arena: self.arena.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.root = source.root;
        self.comparator = source.comparator.clone();
        self.arena.clone_from(&source.arena);
    }
}

impl<T, C> PartialEq for AvlTree<T, C>
where
    T: PartialEq,
    C: Fn(&T, &T) -> i32,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, C> Eq for AvlTree<T, C>
where
    T: Eq,
    C: Fn(&T, &T) -> i32,
{
}

impl<T, C> fmt::Debug for AvlTree<T, C>
where
    T: fmt::Debug,
    C: Fn(&T, &T) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C> Extend<T> for AvlTree<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for AvlTree<T, fn(&T, &T) -> i32>
where
    T: PartialOrd,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T, C> IntoIterator for &'a AvlTree<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, C> IntoIterator for AvlTree<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let order = self.in_order();
        let mut slots: Vec<Option<T>> = self.arena.into_iter().map(|n| Some(n.v)).collect();
        let values = order
            .into_iter()
            .filter_map(|i| slots[i as usize].take())
            .collect();
        IntoIter::new(values)
    }
}
