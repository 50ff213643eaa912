use crate::types::Node;

/// One entry of an [`AvlTree`](super::AvlTree) arena.
#[derive(Clone, Debug)]
pub struct AvlNode<T> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub v: T,
    /// Height of the subtree rooted here; a leaf is `0`.
    pub h: i32,
}

impl<T> AvlNode<T> {
    pub fn new(v: T) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            v,
            h: 0,
        }
    }
}

impl<T> Node for AvlNode<T> {
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

/// Height-tracking node behavior.
pub trait AvlNodeLike: Node {
    type Value;

    fn value(&self) -> &Self::Value;
    fn value_mut(&mut self) -> &mut Self::Value;
    fn h(&self) -> i32;
    fn set_h(&mut self, h: i32);
}

impl<T> AvlNodeLike for AvlNode<T> {
    type Value = T;

    fn value(&self) -> &T {
        &self.v
    }

    fn value_mut(&mut self) -> &mut T {
        &mut self.v
    }

    fn h(&self) -> i32 {
        self.h
    }

    fn set_h(&mut self, h: i32) {
        self.h = h;
    }
}
