//! An ordered set on a plain binary search tree.
//!
//! Shares node storage, mutation and traversal with [`AvlTreeSet`] but never
//! rotates, so its height depends on the insertion order. Sorted input
//! degenerates into a chain. Useful as a baseline in tests and benchmarks.
//!
//! [`AvlTreeSet`]: crate::AvlTreeSet

use std::borrow::Borrow;
use std::fmt;

use crate::error::Result;
use crate::raw::RawTree;
use crate::traverse::{Order, Traversal};

#[derive(Clone)]
pub struct UnbalancedTreeSet<K> {
    tree: RawTree<K>,
}

impl<K> UnbalancedTreeSet<K> {
    pub fn new() -> Self {
        Self {
            tree: RawTree::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns the height of the tree: 0 for a single key, -1 when empty.
    pub fn height(&self) -> i32 {
        self.tree.height()
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }

    pub fn traverse(&self, order: Order) -> Traversal<'_, K> {
        Traversal::new(&self.tree, order)
    }

    pub fn pre_order(&self) -> Traversal<'_, K> {
        self.traverse(Order::PreOrder)
    }

    pub fn in_order(&self) -> Traversal<'_, K> {
        self.traverse(Order::InOrder)
    }

    pub fn post_order(&self) -> Traversal<'_, K> {
        self.traverse(Order::PostOrder)
    }
}

impl<K: PartialOrd> UnbalancedTreeSet<K> {
    /// Adds a key to the set. See [`AvlTreeSet::add`](crate::AvlTreeSet::add).
    pub fn add(&mut self, key: K) -> Result<bool> {
        match self.tree.insert(key)? {
            Some(id) => {
                let parent = self.tree.parent(id);
                self.tree.refresh_heights(parent);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: PartialOrd + ?Sized,
    {
        self.tree.find(key).is_some()
    }

    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: PartialOrd + ?Sized,
    {
        self.take(key).is_some()
    }

    pub fn take<Q>(&mut self, key: &Q) -> Option<K>
    where
        K: Borrow<Q>,
        Q: PartialOrd + ?Sized,
    {
        let (removed, retrace_from) = self.tree.remove(key)?;
        self.tree.refresh_heights(retrace_from);
        Some(removed)
    }

    /// Asserts links, order, heights and count. Balance is not checked.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        self.tree.check_consistency(false)
    }
}

impl<K> Default for UnbalancedTreeSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug> fmt::Debug for UnbalancedTreeSet<K> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_set().entries(self.in_order()).finish()
    }
}
