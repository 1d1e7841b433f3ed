//! A generic, self-balancing binary search tree (an AVL tree). Values are
//! ordered by a strategy supplied when the tree is created, either a pair of
//! "is lesser" and "is greater" predicates, a three-way comparator, or the
//! natural order of `T: Ord`. Every insertion and removal rebalances the path
//! it touched before returning, so lookups stay logarithmic. The contents can
//! be copied out in order, pre-order, post-order or reverse order.
//!
//! Nodes are exclusively owned by their parent's child slot, and there are no
//! parent pointers: restructuring functions leave the new root of a sub-tree
//! in the slot they were handed.

mod avl_node;
pub mod balanced_tree;
pub mod error;
pub mod order;
pub mod rotation;
pub mod traversal;

pub use avl_node::Iter;
pub use balanced_tree::BalancedOrderedTree;
pub use error::Error;
pub use order::{Comparator, NaturalOrder, Predicates, TotalOrder};
pub use rotation::RotationRule;
pub use traversal::Traversal;
