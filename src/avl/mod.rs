mod node;
mod tree;
mod tree_iter;

pub use tree::AvlTree;
pub use tree_iter::Iter;

// An AVL tree with `usize::MAX` nodes is at most ~93 levels tall
const MAX_HEIGHT: usize = 128;

/// Failures reported by the tree. None of them leave the tree partially modified
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("The key is already present in the tree.")]
    DuplicateKey,
    #[error("The key is not present in the tree.")]
    KeyNotFound,
    #[error("A key is out of order with respect to one of its ancestors.")]
    Unordered,
    #[error("A cached height does not match the heights of its children.")]
    StaleHeight,
    #[error("The subtrees of a node differ in height by more than one.")]
    Unbalanced,
    #[error("The element count does not match the number of reachable nodes.")]
    SizeMismatch,
}
