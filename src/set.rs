//! An ordered set implemented with an AVL tree.

use std::borrow::Borrow;
use std::fmt;

use crate::balance::Retrace;
use crate::error::Result;
use crate::raw::RawTree;
use crate::traverse::{Order, Traversal};

/// An ordered set implemented with an AVL tree.
///
/// Keys only need a partial order. A key that cannot be ordered, such as a
/// floating point NaN, is rejected by [`add`](AvlTreeSet::add).
///
/// ```
/// use avl_set::AvlTreeSet;
/// let mut set = AvlTreeSet::new();
/// assert_eq!(set.add(2), Ok(true));
/// assert_eq!(set.add(1), Ok(true));
/// assert_eq!(set.add(2), Ok(false));
/// assert!(set.contains(&1));
/// assert!(set.remove(&1));
/// assert!(!set.contains(&1));
/// assert_eq!(set.in_order().collect::<Vec<_>>(), [&2]);
/// ```
#[derive(Clone)]
pub struct AvlTreeSet<K> {
    tree: RawTree<K>,
}

impl<K> AvlTreeSet<K> {
    /// Creates an empty set.
    /// No memory is allocated until the first key is added.
    pub fn new() -> Self {
        Self {
            tree: RawTree::new(),
        }
    }

    /// Returns true if the set contains no keys.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the number of keys in the set.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns the height of the tree: 0 for a single key, -1 when empty.
    pub fn height(&self) -> i32 {
        self.tree.height()
    }

    /// Clears the set, deallocating all memory.
    pub fn clear(&mut self) {
        log::debug!("clearing set of {} keys", self.len());
        self.tree.clear();
    }

    /// Returns the smallest key in the set.
    pub fn first(&self) -> Option<&K> {
        let root = self.tree.root?;
        Some(self.tree.key(self.tree.min_node(root)))
    }

    /// Returns the largest key in the set.
    pub fn last(&self) -> Option<&K> {
        let root = self.tree.root?;
        Some(self.tree.key(self.tree.max_node(root)))
    }

    /// Gets an iterator over the keys in the given depth-first order.
    pub fn traverse(&self, order: Order) -> Traversal<'_, K> {
        Traversal::new(&self.tree, order)
    }

    /// Gets an iterator visiting each key before its subtrees.
    pub fn pre_order(&self) -> Traversal<'_, K> {
        self.traverse(Order::PreOrder)
    }

    /// Gets an iterator over the keys in ascending order.
    pub fn in_order(&self) -> Traversal<'_, K> {
        self.traverse(Order::InOrder)
    }

    /// Gets an iterator visiting each key after its subtrees.
    pub fn post_order(&self) -> Traversal<'_, K> {
        self.traverse(Order::PostOrder)
    }

    /// Gets an iterator over the keys in ascending order.
    pub fn iter(&self) -> Traversal<'_, K> {
        self.in_order()
    }
}

impl<K: PartialOrd> AvlTreeSet<K> {
    /// Adds a key to the set.
    ///
    /// Returns `Ok(true)` if the key was added and `Ok(false)` if an equal key
    /// was already present, leaving the set untouched.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidKey`](crate::TreeError::InvalidKey) if the key
    /// cannot be ordered against itself or a key already in the set.
    pub fn add(&mut self, key: K) -> Result<bool> {
        match self.tree.insert(key)? {
            Some(id) => {
                let parent = self.tree.parent(id);
                self.tree.retrace(parent, Retrace::Insert);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Returns true if the set contains the key.
    ///
    /// The key may be any borrowed form of the set's key type, but the ordering
    /// on the borrowed form *must* match the ordering on the key type.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: PartialOrd + ?Sized,
    {
        self.tree.find(key).is_some()
    }

    /// Returns a reference to the key in the set that is equal to the given key.
    pub fn get<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: PartialOrd + ?Sized,
    {
        self.tree.find(key).map(|id| self.tree.key(id))
    }

    /// Removes a key from the set.
    /// Returns whether the key was previously in the set.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: PartialOrd + ?Sized,
    {
        self.take(key).is_some()
    }

    /// Removes a key from the set.
    /// Returns the key if it was previously in the set.
    pub fn take<Q>(&mut self, key: &Q) -> Option<K>
    where
        K: Borrow<Q>,
        Q: PartialOrd + ?Sized,
    {
        let (removed, retrace_from) = self.tree.remove(key)?;
        self.tree.retrace(retrace_from, Retrace::Remove);
        Some(removed)
    }

    /// Asserts that the internal tree structure is consistent.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        self.tree.check_consistency(true)
    }
}

impl<K: Ord> AvlTreeSet<K> {
    /// Adds a totally ordered key to the set.
    /// Returns whether the key was newly added.
    pub fn insert(&mut self, key: K) -> bool {
        // A total order accepts every key.
        self.add(key).unwrap_or(false)
    }
}

impl<K> Default for AvlTreeSet<K> {
    /// Creates an empty set.
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> FromIterator<K> for AvlTreeSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<K: Ord> Extend<K> for AvlTreeSet<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K: Ord + Copy + 'a> Extend<&'a K> for AvlTreeSet<K> {
    fn extend<I: IntoIterator<Item = &'a K>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<K: fmt::Debug> fmt::Debug for AvlTreeSet<K> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, K> IntoIterator for &'a AvlTreeSet<K> {
    type Item = &'a K;
    type IntoIter = Traversal<'a, K>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
