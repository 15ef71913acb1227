use crate::arena::NodeId;

/// Height of an empty subtree. A leaf has height 0.
pub(crate) const EMPTY_HEIGHT: i32 = -1;

/// A tree node. Child links own their subtree through the arena,
/// `parent` is only a back-reference used to walk upwards.
#[derive(Clone, Debug)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) height: i32,
}

impl<K> Node<K> {
    pub(crate) fn new(parent: Option<NodeId>, key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
            parent,
            height: 0,
        }
    }

    /// Returns the only child of a node with at most one child.
    pub(crate) fn single_child(&self) -> Option<NodeId> {
        debug_assert!(self.left.is_none() || self.right.is_none());
        self.left.or(self.right)
    }
}
