//! Structural helpers shared by every arena tree.
//!
//! All functions are generic over [`Node`] and only follow `p` / `l` / `r`
//! links; none of them look at the stored values.

use crate::types::Node;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Points whichever child link of `parent` currently holds `old` at `new`.
///
/// With no parent, `old` was the root and `new` becomes the root.
pub(crate) fn replace_child<N: Node>(
    arena: &mut [N],
    root: &mut Option<u32>,
    parent: Option<u32>,
    old: u32,
    new: Option<u32>,
) {
    match parent {
        Some(p) if get_l(arena, p) == Some(old) => set_l(arena, p, new),
        Some(p) => set_r(arena, p, new),
        None => *root = new,
    }
}

/// Leftmost node in the tree.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node in the tree.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, curr) {
        return first(arena, Some(r));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, curr) {
        return last(arena, Some(l));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Number of edges between `node` and the root.
pub fn depth<N: Node>(arena: &[N], node: u32) -> usize {
    let mut d = 0;
    let mut curr = get_p(arena, node);
    while let Some(p) = curr {
        d += 1;
        curr = get_p(arena, p);
    }
    d
}

/// Number of nodes reachable from `root`.
///
/// Walks with an explicit stack so degenerate shapes cannot overflow.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let mut count = 0;
    let mut stack: Vec<u32> = root.into_iter().collect();
    while let Some(i) = stack.pop() {
        count += 1;
        stack.extend(get_l(arena, i));
        stack.extend(get_r(arena, i));
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Link {
        p: Option<u32>,
        l: Option<u32>,
        r: Option<u32>,
    }

    impl Node for Link {
        fn p(&self) -> Option<u32> {
            self.p
        }
        fn l(&self) -> Option<u32> {
            self.l
        }
        fn r(&self) -> Option<u32> {
            self.r
        }
        fn set_p(&mut self, v: Option<u32>) {
            self.p = v;
        }
        fn set_l(&mut self, v: Option<u32>) {
            self.l = v;
        }
        fn set_r(&mut self, v: Option<u32>) {
            self.r = v;
        }
    }

    //        0
    //      /   \
    //     1     2
    //      \
    //       3
    fn sample() -> Vec<Link> {
        let mut arena: Vec<Link> = (0..4).map(|_| Link::default()).collect();
        arena[0].l = Some(1);
        arena[0].r = Some(2);
        arena[1].p = Some(0);
        arena[1].r = Some(3);
        arena[2].p = Some(0);
        arena[3].p = Some(1);
        arena
    }

    #[test]
    fn walks_in_order_both_ways() {
        let arena = sample();
        let mut forward = Vec::new();
        let mut curr = first(&arena, Some(0));
        while let Some(i) = curr {
            forward.push(i);
            curr = next(&arena, i);
        }
        assert_eq!(forward, vec![1, 3, 0, 2]);

        let mut backward = Vec::new();
        let mut curr = last(&arena, Some(0));
        while let Some(i) = curr {
            backward.push(i);
            curr = prev(&arena, i);
        }
        assert_eq!(backward, vec![2, 0, 3, 1]);
    }

    #[test]
    fn depth_and_size() {
        let arena = sample();
        assert_eq!(depth(&arena, 0), 0);
        assert_eq!(depth(&arena, 2), 1);
        assert_eq!(depth(&arena, 3), 2);
        assert_eq!(size(&arena, Some(0)), 4);
        assert_eq!(size(&arena, Some(1)), 2);
        assert_eq!(size(&arena, None), 0);
        assert_eq!(first(&arena, None), None);
    }

    #[test]
    fn replace_child_relinks_parent_or_root() {
        let mut arena = sample();
        let mut root = Some(0);
        replace_child(&mut arena, &mut root, Some(1), 3, None);
        assert_eq!(arena[1].r, None);
        replace_child(&mut arena, &mut root, Some(0), 1, Some(3));
        assert_eq!(arena[0].l, Some(3));
        replace_child(&mut arena, &mut root, None, 0, Some(2));
        assert_eq!(root, Some(2));
    }
}
