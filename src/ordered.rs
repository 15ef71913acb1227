use crate::error::Result;
use crate::traverse::Traversal;
use crate::{AvlTreeSet, UnbalancedTreeSet};

/// Common interface of the set types in this crate.
///
/// Lets callers, such as a tree sort, work against either tree variant.
///
/// ```
/// use avl_set::{AvlTreeSet, OrderedSet};
///
/// fn sorted_unique<S: OrderedSet<i32> + Default>(values: &[i32]) -> Vec<i32> {
///     let mut set = S::default();
///     for &value in values {
///         set.add(value).unwrap();
///     }
///     set.in_order().copied().collect()
/// }
///
/// assert_eq!(sorted_unique::<AvlTreeSet<_>>(&[3, 1, 3, 2]), [1, 2, 3]);
/// ```
pub trait OrderedSet<K> {
    /// Adds a key. Returns `Ok(false)` if an equal key is already present.
    fn add(&mut self, key: K) -> Result<bool>;

    /// Removes a key. Returns whether the key was present.
    fn remove(&mut self, key: &K) -> bool;

    fn contains(&self, key: &K) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn pre_order(&self) -> Traversal<'_, K>;

    fn in_order(&self) -> Traversal<'_, K>;

    fn post_order(&self) -> Traversal<'_, K>;
}

impl<K: PartialOrd> OrderedSet<K> for AvlTreeSet<K> {
    fn add(&mut self, key: K) -> Result<bool> {
        AvlTreeSet::add(self, key)
    }

    fn remove(&mut self, key: &K) -> bool {
        AvlTreeSet::remove(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        AvlTreeSet::contains(self, key)
    }

    fn len(&self) -> usize {
        AvlTreeSet::len(self)
    }

    fn pre_order(&self) -> Traversal<'_, K> {
        AvlTreeSet::pre_order(self)
    }

    fn in_order(&self) -> Traversal<'_, K> {
        AvlTreeSet::in_order(self)
    }

    fn post_order(&self) -> Traversal<'_, K> {
        AvlTreeSet::post_order(self)
    }
}

impl<K: PartialOrd> OrderedSet<K> for UnbalancedTreeSet<K> {
    fn add(&mut self, key: K) -> Result<bool> {
        UnbalancedTreeSet::add(self, key)
    }

    fn remove(&mut self, key: &K) -> bool {
        UnbalancedTreeSet::remove(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        UnbalancedTreeSet::contains(self, key)
    }

    fn len(&self) -> usize {
        UnbalancedTreeSet::len(self)
    }

    fn pre_order(&self) -> Traversal<'_, K> {
        UnbalancedTreeSet::pre_order(self)
    }

    fn in_order(&self) -> Traversal<'_, K> {
        UnbalancedTreeSet::in_order(self)
    }

    fn post_order(&self) -> Traversal<'_, K> {
        UnbalancedTreeSet::post_order(self)
    }
}
