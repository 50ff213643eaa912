//! Height-based AVL primitives over an arena of [`AvlNodeLike`] nodes.
//!
//! Every function takes the tree root as `&mut Option<u32>` and keeps it up
//! to date when a rotation or splice replaces the topmost node.

use std::fmt::Debug;

use crate::error::InvariantError;
use crate::print::{print_tree, PrintChild};
use crate::util::{first, get_l, get_p, get_r, next, replace_child, set_l, set_p, set_r};

use super::types::AvlNodeLike;

/// Height of an optional subtree; an absent subtree is `-1`.
#[inline]
pub fn height<N: AvlNodeLike>(arena: &[N], node: Option<u32>) -> i32 {
    node.map_or(-1, |i| arena[i as usize].h())
}

/// `height(left) - height(right)`.
#[inline]
pub fn balance<N: AvlNodeLike>(arena: &[N], node: u32) -> i32 {
    height(arena, get_l(arena, node)) - height(arena, get_r(arena, node))
}

#[inline]
fn update_height<N: AvlNodeLike>(arena: &mut [N], node: u32) {
    let h = 1 + height(arena, get_l(arena, node)).max(height(arena, get_r(arena, node)));
    arena[node as usize].set_h(h);
}

/// Left rotation around `x`; its right child takes its place.
///
/// Returns the new subtree root.
pub fn rotate_left<N: AvlNodeLike>(arena: &mut [N], root: &mut Option<u32>, x: u32) -> u32 {
    let y = get_r(arena, x).expect("left rotation needs a right child");
    let p = get_p(arena, x);
    let yl = get_l(arena, y);

    set_r(arena, x, yl);
    if let Some(yl) = yl {
        set_p(arena, yl, Some(x));
    }
    replace_child(arena, root, p, x, Some(y));
    set_p(arena, y, p);
    set_l(arena, y, Some(x));
    set_p(arena, x, Some(y));

    update_height(arena, x);
    update_height(arena, y);
    y
}

/// Right rotation around `x`; its left child takes its place.
///
/// Returns the new subtree root.
pub fn rotate_right<N: AvlNodeLike>(arena: &mut [N], root: &mut Option<u32>, x: u32) -> u32 {
    let y = get_l(arena, x).expect("right rotation needs a left child");
    let p = get_p(arena, x);
    let yr = get_r(arena, y);

    set_l(arena, x, yr);
    if let Some(yr) = yr {
        set_p(arena, yr, Some(x));
    }
    replace_child(arena, root, p, x, Some(y));
    set_p(arena, y, p);
    set_r(arena, y, Some(x));
    set_p(arena, x, Some(y));

    update_height(arena, x);
    update_height(arena, y);
    y
}

/// Restores balance at `n`, whose balance factor is `±2`.
///
/// The case is picked from the heavy child's own balance: a child leaning
/// the same way (or level, which only happens after a removal) needs a single
/// rotation, a child leaning the other way needs a double one.
fn fix<N: AvlNodeLike>(arena: &mut [N], root: &mut Option<u32>, n: u32) -> u32 {
    if balance(arena, n) > 1 {
        let l = get_l(arena, n).expect("left-heavy node has a left child");
        if balance(arena, l) < 0 {
            rotate_left(arena, root, l);
        }
        rotate_right(arena, root, n)
    } else {
        let r = get_r(arena, n).expect("right-heavy node has a right child");
        if balance(arena, r) > 0 {
            rotate_right(arena, root, r);
        }
        rotate_left(arena, root, n)
    }
}

/// Walks from `start` towards the root after a leaf was attached below it.
///
/// A single (double) rotation brings the subtree back to its pre-insert
/// height, so the walk ends there, or as soon as a height stops changing.
fn rebalance_after_insert<N: AvlNodeLike>(
    arena: &mut [N],
    root: &mut Option<u32>,
    start: Option<u32>,
) {
    let mut curr = start;
    while let Some(n) = curr {
        let before = arena[n as usize].h();
        update_height(arena, n);
        if balance(arena, n).abs() > 1 {
            fix(arena, root, n);
            return;
        }
        if arena[n as usize].h() == before {
            return;
        }
        curr = get_p(arena, n);
    }
}

/// Walks from `start` towards the root after a node was spliced out below
/// it, rotating at every unbalanced ancestor.
///
/// Unlike insertion a rotation may shrink the subtree, so the walk only
/// stops once a subtree keeps its previous height.
fn rebalance_after_remove<N: AvlNodeLike>(
    arena: &mut [N],
    root: &mut Option<u32>,
    start: Option<u32>,
) {
    let mut curr = start;
    while let Some(n) = curr {
        let before = arena[n as usize].h();
        update_height(arena, n);
        let top = if balance(arena, n).abs() > 1 {
            fix(arena, root, n)
        } else {
            n
        };
        if arena[top as usize].h() == before {
            return;
        }
        curr = get_p(arena, top);
    }
}

/// Attaches detached node `n` as the left child of leaf slot `parent` and
/// rebalances.
pub fn insert_left<N: AvlNodeLike>(arena: &mut [N], root: &mut Option<u32>, n: u32, parent: u32) {
    set_l(arena, parent, Some(n));
    set_p(arena, n, Some(parent));
    rebalance_after_insert(arena, root, Some(parent));
}

/// Attaches detached node `n` as the right child of leaf slot `parent` and
/// rebalances.
pub fn insert_right<N: AvlNodeLike>(arena: &mut [N], root: &mut Option<u32>, n: u32, parent: u32) {
    set_r(arena, parent, Some(n));
    set_p(arena, n, Some(parent));
    rebalance_after_insert(arena, root, Some(parent));
}

/// Outcome of descending from the root looking for a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// The value is stored at this node.
    Found(u32),
    /// The tree is empty.
    Root,
    /// The value belongs as the left child of this node.
    Left(u32),
    /// The value belongs as the right child of this node.
    Right(u32),
}

/// Descends from `root` and reports where `value` is or would be attached.
pub fn locate<N, C>(arena: &[N], root: Option<u32>, value: &N::Value, comparator: &C) -> Slot
where
    N: AvlNodeLike,
    C: Fn(&N::Value, &N::Value) -> i32,
{
    let Some(mut curr) = root else {
        return Slot::Root;
    };
    loop {
        let cmp = comparator(value, arena[curr as usize].value());
        if cmp == 0 {
            return Slot::Found(curr);
        }
        let next = if cmp < 0 {
            get_l(arena, curr)
        } else {
            get_r(arena, curr)
        };
        match next {
            Some(next) => curr = next,
            None if cmp < 0 => return Slot::Left(curr),
            None => return Slot::Right(curr),
        }
    }
}

/// Inserts the detached node `n` under `root` unless an equal value is
/// already stored.
///
/// Returns the index of the node holding the value and whether `n` was
/// linked in. Callers that do not want to allocate for duplicates use
/// [`locate`] followed by [`insert_left`] / [`insert_right`] instead.
pub fn insert<N, C>(arena: &mut [N], root: &mut Option<u32>, n: u32, comparator: &C) -> (u32, bool)
where
    N: AvlNodeLike,
    C: Fn(&N::Value, &N::Value) -> i32,
{
    match locate(arena, *root, arena[n as usize].value(), comparator) {
        Slot::Found(existing) => (existing, false),
        Slot::Root => {
            *root = Some(n);
            (n, true)
        }
        Slot::Left(parent) => {
            insert_left(arena, root, n, parent);
            (n, true)
        }
        Slot::Right(parent) => {
            insert_right(arena, root, n, parent);
            (n, true)
        }
    }
}

fn swap_values<N: AvlNodeLike>(arena: &mut [N], a: u32, b: u32) {
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    let (head, tail) = arena.split_at_mut(hi as usize);
    std::mem::swap(head[lo as usize].value_mut(), tail[0].value_mut());
}

/// Unlinks the value stored at `n` from the tree and rebalances.
///
/// A node with two children trades values with its in-order successor, and
/// the successor's slot is the one spliced out. Returns the index of the
/// detached slot, which now holds the removed value and has no links.
pub fn remove<N: AvlNodeLike>(arena: &mut [N], root: &mut Option<u32>, n: u32) -> u32 {
    let victim = match (get_l(arena, n), get_r(arena, n)) {
        (Some(_), Some(r)) => {
            let s = first(arena, Some(r)).expect("right subtree has a leftmost node");
            swap_values(arena, n, s);
            s
        }
        _ => n,
    };

    let p = get_p(arena, victim);
    let child = get_l(arena, victim).or(get_r(arena, victim));
    if let Some(c) = child {
        set_p(arena, c, p);
    }
    replace_child(arena, root, p, victim, child);
    set_p(arena, victim, None);
    set_l(arena, victim, None);
    set_r(arena, victim, None);

    rebalance_after_remove(arena, root, p);
    victim
}

/// Moves the last arena node into detached slot `n` and pops it.
///
/// Links pointing at the moved node are rewritten, so the arena stays dense.
/// Returns the node previously held in slot `n`.
pub fn swap_remove<N: AvlNodeLike>(arena: &mut Vec<N>, root: &mut Option<u32>, n: u32) -> N {
    let last = (arena.len() - 1) as u32;
    if n != last {
        let p = get_p(arena, last);
        let l = get_l(arena, last);
        let r = get_r(arena, last);
        replace_child(arena, root, p, last, Some(n));
        if let Some(l) = l {
            set_p(arena, l, Some(n));
        }
        if let Some(r) = r {
            set_p(arena, r, Some(n));
        }
    }
    arena.swap_remove(n as usize)
}

/// Checks links, cached heights, balance, ordering and arena density.
pub fn assert_avl_tree<N, C>(
    arena: &[N],
    root: Option<u32>,
    size: usize,
    comparator: &C,
) -> Result<(), InvariantError>
where
    N: AvlNodeLike,
    C: Fn(&N::Value, &N::Value) -> i32,
{
    if arena.len() != size {
        return Err(InvariantError::ArenaLeak {
            slots: arena.len(),
            size,
        });
    }

    if let Some(root) = root {
        if get_p(arena, root).is_some() {
            return Err(InvariantError::RootHasParent(root));
        }
    }

    let mut reachable = 0;
    let mut stack: Vec<u32> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        reachable += 1;
        if reachable > size {
            break;
        }

        for child in [get_l(arena, node), get_r(arena, node)].into_iter().flatten() {
            if get_p(arena, child) != Some(node) {
                return Err(InvariantError::BrokenParentLink {
                    parent: node,
                    child,
                });
            }
            stack.push(child);
        }

        let lh = height(arena, get_l(arena, node));
        let rh = height(arena, get_r(arena, node));
        let expected = 1 + lh.max(rh);
        let actual = arena[node as usize].h();
        if actual != expected {
            return Err(InvariantError::HeightMismatch {
                node,
                expected,
                actual,
            });
        }
        let bf = lh - rh;
        if !(-1..=1).contains(&bf) {
            return Err(InvariantError::Unbalanced { node, bf });
        }
    }

    if reachable != size {
        return Err(InvariantError::SizeMismatch { size, reachable });
    }

    let mut curr = first(arena, root);
    let mut prev_node: Option<u32> = None;
    while let Some(i) = curr {
        if let Some(prev) = prev_node {
            if comparator(arena[prev as usize].value(), arena[i as usize].value()) >= 0 {
                return Err(InvariantError::OrderViolated { prev, next: i });
            }
        }
        prev_node = Some(i);
        curr = next(arena, i);
    }

    Ok(())
}

/// Debug printer for AVL trees.
pub fn print<N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    N: AvlNodeLike,
    N::Value: Debug,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let label = format!("{:?} [h={}]", n.value(), n.h());
            if n.l().is_none() && n.r().is_none() {
                return label;
            }
            let left: &PrintChild = &|tab: &str| format!("← {}", print(arena, n.l(), tab));
            let right: &PrintChild = &|tab: &str| format!("→ {}", print(arena, n.r(), tab));
            format!("{label}{}", print_tree(Some(tab), &[Some(left), Some(right)]))
        }
    }
}
