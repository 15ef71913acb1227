//! An ordered set implemented with an AVL tree.
//!
//! Nodes are kept in an arena and linked by index, parent links included.
//! Every insert and remove retraces the path back to the root, updating
//! heights and rotating wherever the heights of two sibling subtrees differ
//! by two, so lookups, inserts and removals stay logarithmic.
//!
//! ```
//! use avl_set::AvlTreeSet;
//!
//! let mut set = AvlTreeSet::new();
//! for key in [5, 3, 8, 1, 4, 7, 9] {
//!     set.add(key).unwrap();
//! }
//! assert!(set.remove(&5));
//! assert_eq!(set.in_order().copied().collect::<Vec<_>>(), [1, 3, 4, 7, 8, 9]);
//! ```

mod arena;
mod balance;
mod error;
mod node;
mod ordered;
mod raw;
mod set;
mod traverse;
mod unbalanced;

pub use error::{Result, TreeError};
pub use ordered::OrderedSet;
pub use set::AvlTreeSet;
pub use traverse::{Order, Traversal};
pub use unbalanced::UnbalancedTreeSet;
