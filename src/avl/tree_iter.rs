use super::node::Node;
use super::{AvlTree, MAX_HEIGHT};
use arrayvec::ArrayVec;
use std::iter::{ExactSizeIterator, FusedIterator};

/// Lazy ascending iterator over the keys of an `AvlTree`
pub struct Iter<'a, K> {
    /// Nodes still to be yielded, deepest last. Their left subtrees were already pushed
    stack: ArrayVec<[&'a Node<K>; MAX_HEIGHT]>,
    len: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(super) fn new(tree: &'a AvlTree<K>) -> Self {
        let mut iter = Iter {
            stack: ArrayVec::new(),
            len: tree.len(),
        };
        iter.push_left_spine(tree.root.as_deref());
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.len -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, K> ExactSizeIterator for Iter<'a, K> {}
impl<'a, K> FusedIterator for Iter<'a, K> {}
