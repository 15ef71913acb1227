//! Plain binary search tree mutation over the node arena.
//!
//! Nothing in here looks at balance. Mutations report the node from which
//! heights have to be retraced, and the owning set type decides whether to
//! rebalance along that path (see `balance.rs`) or only refresh heights.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

use log::trace;

use crate::arena::{Arena, NodeId};
use crate::error::{Result, TreeError};
use crate::node::{Node, EMPTY_HEIGHT};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Side {
    Left,
    Right,
}

#[derive(Clone, Debug)]
pub(crate) struct RawTree<K> {
    pub(crate) arena: Arena<K>,
    pub(crate) root: Option<NodeId>,
}

impl<K> RawTree<K> {
    pub(crate) fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.arena.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn height(&self) -> i32 {
        self.root.map_or(EMPTY_HEIGHT, |id| self.arena[id].height)
    }

    pub(crate) fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    pub(crate) fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena[id].parent
    }

    pub(crate) fn key(&self, id: NodeId) -> &K {
        &self.arena[id].key
    }

    pub(crate) fn min_node(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.arena[id].left {
            id = left;
        }
        id
    }

    pub(crate) fn max_node(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.arena[id].right {
            id = right;
        }
        id
    }

    /// Points the link of `parent` that held `old` at `new` instead.
    /// Without a parent, `old` was the root. The caller fixes `new.parent`.
    pub(crate) fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let node = &mut self.arena[parent];
                if node.left == Some(old) {
                    node.left = new;
                } else {
                    debug_assert_eq!(node.right, Some(old));
                    node.right = new;
                }
            }
        }
    }

    /// Unlinks a node with at most one child by lifting that child into its
    /// place. Returns the parent of the unlinked node, the first node whose
    /// height may have changed.
    fn splice_out(&mut self, id: NodeId) -> Option<NodeId> {
        let parent = self.arena[id].parent;
        let child = self.arena[id].single_child();
        if let Some(child) = child {
            self.arena[child].parent = parent;
        }
        self.replace_child(parent, id, child);
        parent
    }
}

impl<K: PartialOrd> RawTree<K> {
    pub(crate) fn find<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: PartialOrd + ?Sized,
    {
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.arena[id];
            current = match key.partial_cmp(node.key.borrow())? {
                Ordering::Equal => return Some(id),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// Locates the empty link a new key belongs in.
    /// Returns `Ok(None)` if an equal key is already in the tree.
    fn find_insert_pos(&self, key: &K) -> Result<Option<(Option<NodeId>, Side)>> {
        // A key that does not compare equal to itself can never be found again.
        if key.partial_cmp(key) != Some(Ordering::Equal) {
            return Err(TreeError::InvalidKey);
        }

        let mut parent = None;
        let mut side = Side::Left;
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.arena[id];
            let ordering = key.partial_cmp(&node.key).ok_or(TreeError::InvalidKey)?;
            parent = Some(id);
            current = match ordering {
                Ordering::Equal => return Ok(None),
                Ordering::Less => {
                    side = Side::Left;
                    node.left
                }
                Ordering::Greater => {
                    side = Side::Right;
                    node.right
                }
            };
        }
        Ok(Some((parent, side)))
    }

    /// Links a new leaf holding `key`.
    /// Returns the new node, or `None` if the key was already present.
    pub(crate) fn insert(&mut self, key: K) -> Result<Option<NodeId>> {
        let Some((parent, side)) = self.find_insert_pos(&key)? else {
            return Ok(None);
        };

        let id = self.arena.alloc(Node::new(parent, key));
        match (parent, side) {
            (None, _) => self.root = Some(id),
            (Some(parent), Side::Left) => self.arena[parent].left = Some(id),
            (Some(parent), Side::Right) => self.arena[parent].right = Some(id),
        }
        Ok(Some(id))
    }

    /// Removes the key and returns it, together with the node from which
    /// heights must be retraced. Returns `None` if the key is absent.
    ///
    /// A node with two children keeps its place in the tree and takes over
    /// the key of its in-order successor; the successor's node is the one
    /// unlinked and freed.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<(K, Option<NodeId>)>
    where
        K: Borrow<Q>,
        Q: PartialOrd + ?Sized,
    {
        let id = self.find(key)?;

        let (left, right) = (self.arena[id].left, self.arena[id].right);
        if let (Some(_), Some(right)) = (left, right) {
            let successor = self.min_node(right);
            debug_assert!(self.arena[successor].left.is_none());
            let retrace_from = self.splice_out(successor);
            let successor = self.arena.free(successor);
            let removed = mem::replace(&mut self.arena[id].key, successor.key);
            trace!("replaced key of {id:?} by its successor");
            Some((removed, retrace_from))
        } else {
            let retrace_from = self.splice_out(id);
            let node = self.arena.free(id);
            Some((node.key, retrace_from))
        }
    }

    /// Asserts the structural invariants of the tree: parent links, strict
    /// key order, stored heights and node count. With `balanced` set, the
    /// AVL condition is checked at every node as well.
    #[cfg(any(test, feature = "consistency_check"))]
    pub(crate) fn check_consistency(&self, balanced: bool) {
        use crate::traverse::Walk;

        // Check root link
        if let Some(root) = self.root {
            assert!(self.arena[root].parent.is_none());
        }

        let mut num_nodes = 0;
        for id in Walk::pre_order(self) {
            let node = &self.arena[id];
            let mut left_height = EMPTY_HEIGHT;
            let mut right_height = EMPTY_HEIGHT;

            // Check link for left child node
            if let Some(left) = node.left {
                assert_eq!(self.arena[left].parent, Some(id));
                assert!(self.arena[left].key.partial_cmp(&node.key) == Some(Ordering::Less));
                left_height = self.arena[left].height;
            }

            // Check link for right child node
            if let Some(right) = node.right {
                assert_eq!(self.arena[right].parent, Some(id));
                assert!(self.arena[right].key.partial_cmp(&node.key) == Some(Ordering::Greater));
                right_height = self.arena[right].height;
            }

            // Check height
            assert_eq!(node.height, 1 + left_height.max(right_height));

            // Check AVL condition (nearly balance)
            if balanced {
                assert!((right_height - left_height).abs() <= 1);
            }

            num_nodes += 1;
        }

        // Order between siblings' subtrees follows from the in-order walk
        let mut in_order = Walk::in_order(self).map(|id| &self.arena[id].key);
        if let Some(mut prev) = in_order.next() {
            for key in in_order {
                assert!(prev.partial_cmp(key) == Some(Ordering::Less));
                prev = key;
            }
        }

        // Check number of nodes
        assert_eq!(num_nodes, self.arena.len());
    }
}
