//! A height-balanced binary search tree (AVL tree) storing unique ordered keys.
//!
//! Every mutation walks down to the edit point and, while the recursion unwinds,
//! recomputes the cached heights and rotates any node whose subtrees differ in
//! height by two. The tree therefore never gets taller than ~1.44 * log2(n).
//!
//! ```
//! use avl_tree::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! assert!(tree.insert(10));
//! assert!(tree.insert(5));
//! assert!(!tree.insert(10));
//! assert_eq!(tree.min(), Some(&5));
//! assert_eq!(tree.in_order_traversal(), vec![&5, &10]);
//! ```

#[cfg(test)]
mod tests;

mod avl;

#[cfg(feature = "key-generator")]
pub mod key_generator;

pub use avl::{AvlTree, Error, Iter};
