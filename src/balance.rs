//! Height bookkeeping, rotations and AVL rebalancing for [`RawTree`].

use log::trace;

use crate::arena::NodeId;
use crate::node::EMPTY_HEIGHT;
use crate::raw::RawTree;

/// How far to walk up after a mutation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Retrace {
    /// Stop after the first rotation. A single or double rotation after an
    /// insert restores the height the subtree had before the insert.
    Insert,
    /// Visit every ancestor. A rotation after a removal may shrink the
    /// subtree and unbalance nodes further up.
    Remove,
}

impl<K> RawTree<K> {
    fn link_height(&self, link: Option<NodeId>) -> i32 {
        link.map_or(EMPTY_HEIGHT, |id| self.arena[id].height)
    }

    pub(crate) fn update_height(&mut self, id: NodeId) {
        let node = &self.arena[id];
        let height = 1 + self.link_height(node.left).max(self.link_height(node.right));
        self.arena[id].height = height;
    }

    /// Height of the right subtree minus height of the left subtree.
    pub(crate) fn skew(&self, id: NodeId) -> i32 {
        let node = &self.arena[id];
        self.link_height(node.right) - self.link_height(node.left)
    }

    //   top               pivot
    //  /   \             /     \
    // a    pivot   ->   top     c
    //     /     \      /   \
    //    b       c    a     b
    fn rotate_left(&mut self, top: NodeId) {
        debug_assert!(self.arena[top].right.is_some(), "left rotation at {top:?}");
        let Some(pivot) = self.arena[top].right else {
            return;
        };

        let inner = self.arena[pivot].left;
        self.arena[top].right = inner;
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(top);
        }

        let parent = self.arena[top].parent;
        self.arena[pivot].parent = parent;
        self.replace_child(parent, top, Some(pivot));

        self.arena[pivot].left = Some(top);
        self.arena[top].parent = Some(pivot);

        self.update_height(top);
        self.update_height(pivot);
        trace!("rotated left: {pivot:?} above {top:?}");
    }

    //       top           pivot
    //      /   \         /     \
    //   pivot   c   ->  a       top
    //  /     \                 /   \
    // a       b               b     c
    fn rotate_right(&mut self, top: NodeId) {
        debug_assert!(self.arena[top].left.is_some(), "right rotation at {top:?}");
        let Some(pivot) = self.arena[top].left else {
            return;
        };

        let inner = self.arena[pivot].right;
        self.arena[top].left = inner;
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(top);
        }

        let parent = self.arena[top].parent;
        self.arena[pivot].parent = parent;
        self.replace_child(parent, top, Some(pivot));

        self.arena[pivot].right = Some(top);
        self.arena[top].parent = Some(pivot);

        self.update_height(top);
        self.update_height(pivot);
        trace!("rotated right: {pivot:?} above {top:?}");
    }

    /// Refreshes the height of `id` and restores the AVL condition there if
    /// the skew reached 2. A single update never moves the skew past 2.
    /// Returns whether a rotation took place.
    pub(crate) fn rebalance_node(&mut self, id: NodeId) -> bool {
        self.update_height(id);
        let skew = self.skew(id);
        debug_assert!(skew.abs() <= 2, "skew {skew} at {id:?}");

        if skew >= 2 {
            // Right-left case
            if let Some(right) = self.arena[id].right {
                if self.skew(right) < 0 {
                    self.rotate_right(right);
                }
            }
            self.rotate_left(id);
            true
        } else if skew <= -2 {
            // Left-right case
            if let Some(left) = self.arena[id].left {
                if self.skew(left) > 0 {
                    self.rotate_left(left);
                }
            }
            self.rotate_right(id);
            true
        } else {
            false
        }
    }

    /// Rebalances nodes starting from given position up to the root node.
    pub(crate) fn retrace(&mut self, start_from: Option<NodeId>, mode: Retrace) {
        let mut current = start_from;
        while let Some(id) = current {
            // A rotation moves `id` below its pivot, so read the parent first.
            let parent = self.arena[id].parent;
            if self.rebalance_node(id) && mode == Retrace::Insert {
                break;
            }
            current = parent;
        }
    }

    /// Updates heights from given position up to the root without rotating.
    pub(crate) fn refresh_heights(&mut self, start_from: Option<NodeId>) {
        let mut current = start_from;
        while let Some(id) = current {
            self.update_height(id);
            current = self.arena[id].parent;
        }
    }
}
