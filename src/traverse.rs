//! Depth-first traversals.
//!
//! The walk needs no stack: every node is entered three times (from its
//! parent, back from its left subtree, back from its right subtree) and the
//! parent links lead the way back up. Pre-, in- and post-order differ only
//! in which of the three visits yields the key.

use std::fmt;
use std::iter::FusedIterator;

use crate::arena::{Arena, NodeId};
use crate::raw::RawTree;

/// Depth-first visiting order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Order {
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, node, right subtree. Yields keys in ascending order.
    InOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
}

#[allow(clippy::enum_variant_names)]
#[derive(Clone, Copy, Debug)]
enum Direction {
    FromParent,
    FromLeft,
    FromRight,
}

/// Walk over node handles. Used for traversals and consistency checks.
pub(crate) struct Walk<'a, K> {
    arena: &'a Arena<K>,
    cursor: Option<(NodeId, Direction)>,
    order: Order,
    remaining: usize,
}

impl<'a, K> Walk<'a, K> {
    pub(crate) fn new(tree: &'a RawTree<K>, order: Order) -> Self {
        Self {
            arena: &tree.arena,
            cursor: tree.root.map(|root| (root, Direction::FromParent)),
            order,
            remaining: tree.len(),
        }
    }

    #[cfg(any(test, feature = "consistency_check"))]
    pub(crate) fn pre_order(tree: &'a RawTree<K>) -> Self {
        Self::new(tree, Order::PreOrder)
    }

    #[cfg(any(test, feature = "consistency_check"))]
    pub(crate) fn in_order(tree: &'a RawTree<K>) -> Self {
        Self::new(tree, Order::InOrder)
    }
}

// Auto derived Clone seems to have an invalid type bound of K: Clone
impl<K> Clone for Walk<'_, K> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            cursor: self.cursor,
            order: self.order,
            remaining: self.remaining,
        }
    }
}

impl<K> Iterator for Walk<'_, K> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        loop {
            let (id, dir) = self.cursor?;
            let arena = self.arena;
            let node = &arena[id];
            let visit = match dir {
                Direction::FromParent => {
                    self.cursor = Some(match node.left {
                        Some(left) => (left, Direction::FromParent),
                        None => (id, Direction::FromLeft),
                    });
                    Order::PreOrder
                }
                Direction::FromLeft => {
                    self.cursor = Some(match node.right {
                        Some(right) => (right, Direction::FromParent),
                        None => (id, Direction::FromRight),
                    });
                    Order::InOrder
                }
                Direction::FromRight => {
                    self.cursor = node.parent.map(|parent| {
                        if arena[parent].left == Some(id) {
                            (parent, Direction::FromLeft)
                        } else {
                            (parent, Direction::FromRight)
                        }
                    });
                    Order::PostOrder
                }
            };
            if visit == self.order {
                self.remaining -= 1;
                return Some(id);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// A lazy iterator over the keys of a tree in a depth-first [`Order`].
///
/// Created by `pre_order`, `in_order`, `post_order` and `traverse` on the
/// set types. Each call starts a fresh walk.
pub struct Traversal<'a, K> {
    walk: Walk<'a, K>,
}

impl<'a, K> Traversal<'a, K> {
    pub(crate) fn new(tree: &'a RawTree<K>, order: Order) -> Self {
        Self {
            walk: Walk::new(tree, order),
        }
    }

    /// Returns the visiting order of this traversal.
    pub fn order(&self) -> Order {
        self.walk.order
    }
}

// Auto derived Clone seems to have an invalid type bound of K: Clone
impl<K> Clone for Traversal<'_, K> {
    fn clone(&self) -> Self {
        Self {
            walk: self.walk.clone(),
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for Traversal<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.walk.order)?;
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K> Iterator for Traversal<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let arena = self.walk.arena;
        self.walk.next().map(|id| &arena[id].key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.walk.size_hint()
    }
}

impl<K> ExactSizeIterator for Traversal<'_, K> {}

impl<K> FusedIterator for Traversal<'_, K> {}
