use super::node::{self, Link};
use super::{Error, Iter};
use std::borrow::Borrow;
use std::fmt;

/// An ordered set of unique keys backed by a height-balanced binary search tree
pub struct AvlTree<K> {
    pub(super) root: Link<K>,
    len: usize,
}

impl<K> AvlTree<K> {
    /// Create a new empty tree
    pub fn new() -> Self {
        AvlTree { root: None, len: 0 }
    }

    /// Return the number of keys in the tree
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the root node (a single key has height 0), or `None` when empty
    pub fn height(&self) -> Option<usize> {
        self.root.as_ref().map(|root| root.height() as usize)
    }

    /// Smallest key in the tree
    pub fn min(&self) -> Option<&K> {
        node::min(&self.root)
    }

    /// Largest key in the tree
    pub fn max(&self) -> Option<&K> {
        node::max(&self.root)
    }

    /// Drop every key, leaving an empty tree
    pub fn remove_all(&mut self) {
        log::debug!("removing all {} keys", self.len);
        self.root = None;
        self.len = 0;
    }

    /// Return all keys in ascending order
    pub fn in_order_traversal(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len);
        node::collect_in_order(&self.root, &mut keys);
        keys
    }

    /// Return a sorted iterator over references to keys in the tree
    pub fn iter(&self) -> Iter<K> {
        Iter::new(self)
    }
}

impl<K: Ord> AvlTree<K> {
    /// Insert a new key, rebalancing the path back to the root.
    /// Fails with `Error::DuplicateKey` if an equal key is already stored, in which
    /// case the tree is left exactly as it was
    pub fn try_insert(&mut self, key: K) -> Result<(), Error> {
        node::insert(&mut self.root, key)?;
        self.len += 1;
        Ok(())
    }

    /// Insert a new key. Return whether it was actually inserted
    pub fn insert(&mut self, key: K) -> bool {
        match self.try_insert(key) {
            Ok(()) => true,
            Err(err) => {
                log::debug!("insert rejected: {}", err);
                false
            }
        }
    }

    /// Remove the key equal to `key` and hand it back.
    /// Fails with `Error::KeyNotFound` (tree unchanged) if no such key exists
    pub fn take<Q>(&mut self, key: &Q) -> Result<K, Error>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let removed = node::remove(&mut self.root, key)?;
        self.len -= 1;
        Ok(removed)
    }

    /// Remove the key equal to `key`. Return whether it was present
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.take(key) {
            Ok(_) => true,
            Err(err) => {
                log::debug!("remove rejected: {}", err);
                false
            }
        }
    }

    /// Return the stored key equal to `key`, if any
    pub fn find<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        node::find(&self.root, key)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Whether `other` appears, with exactly the same shape, as the subtree of this tree
    /// rooted at `other`'s root key.
    ///
    /// Only the subtree reached by searching for that root key is compared, so a tree
    /// holding the same keys in a differently balanced arrangement is not a subtree.
    /// An empty tree is a subtree of every tree
    pub fn is_subtree(&self, other: &AvlTree<K>) -> bool {
        match &other.root {
            None => true,
            Some(other_root) => node::same_shape(
                node::descend(&self.root, &other_root.key),
                &other.root,
            ),
        }
    }

    /// Verify ordering, cached heights, balance and the element count of the whole tree
    pub fn check_invariants(&self) -> Result<(), Error> {
        let (_, len) = node::validate(&self.root, None, None)?;
        if len != self.len {
            return Err(Error::SizeMismatch);
        }
        Ok(())
    }
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        AvlTree::new()
    }
}

/// Structural equality: same number of keys, same shape and same key at every position.
/// Two trees holding the same keys may compare unequal if they were built differently
impl<K: PartialEq> PartialEq for AvlTree<K> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && node::same_shape(&self.root, &other.root)
    }
}

impl<K: Eq> Eq for AvlTree<K> {}

impl<K: Clone> Clone for AvlTree<K> {
    fn clone(&self) -> Self {
        AvlTree {
            root: node::clone_link(&self.root),
            len: self.len,
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for AvlTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: Ord> std::iter::FromIterator<K> for AvlTree<K> {
    /// Create a tree from an iterator. Repeated keys are kept only once
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = AvlTree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for AvlTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a AvlTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
