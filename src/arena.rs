//! Slot storage for tree nodes.
//!
//! Nodes refer to each other by [`NodeId`] instead of pointers, so a rotation
//! can rewrite child and parent links without fighting over borrows.
//! Vacated slots are chained into a free list and handed out again.

use std::ops::{Index, IndexMut};

use crate::node::Node;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(crate) struct NodeId(usize);

#[derive(Clone, Debug)]
enum Slot<K> {
    Occupied(Node<K>),
    Vacant { next_free: Option<NodeId> },
}

#[derive(Clone, Debug)]
pub(crate) struct Arena<K> {
    slots: Vec<Slot<K>>,
    free_head: Option<NodeId>,
    num_nodes: usize,
}

impl<K> Arena<K> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            num_nodes: 0,
        }
    }

    /// Number of occupied slots.
    pub(crate) fn len(&self) -> usize {
        self.num_nodes
    }

    /// Total number of slots, occupied or not.
    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn alloc(&mut self, node: Node<K>) -> NodeId {
        self.num_nodes += 1;
        match self.free_head {
            Some(id) => {
                let slot = std::mem::replace(&mut self.slots[id.0], Slot::Occupied(node));
                match slot {
                    Slot::Vacant { next_free } => self.free_head = next_free,
                    Slot::Occupied(_) => panic!("free list points at occupied slot {id:?}"),
                }
                id
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Vacates the slot and hands back the node it held.
    pub(crate) fn free(&mut self, id: NodeId) -> Node<K> {
        let vacant = Slot::Vacant {
            next_free: self.free_head,
        };
        match std::mem::replace(&mut self.slots[id.0], vacant) {
            Slot::Occupied(node) => {
                self.free_head = Some(id);
                self.num_nodes -= 1;
                node
            }
            Slot::Vacant { .. } => panic!("double free of node {id:?}"),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.num_nodes = 0;
    }
}

impl<K> Index<NodeId> for Arena<K> {
    type Output = Node<K>;

    fn index(&self, id: NodeId) -> &Node<K> {
        match &self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("dangling node handle {id:?}"),
        }
    }
}

impl<K> IndexMut<NodeId> for Arena<K> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<K> {
        match &mut self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("dangling node handle {id:?}"),
        }
    }
}
