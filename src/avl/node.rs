use super::Error;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

/// An owned, possibly absent subtree
pub(super) type Link<K> = Option<Box<Node<K>>>;

pub(super) struct Node<K> {
    pub(super) key: K,
    pub(super) left: Link<K>,
    pub(super) right: Link<K>,
    /// Height of the subtree rooted here. A leaf has height 0
    height: i32,
}

/// Height of a possibly absent subtree: -1 when absent
fn height<K>(link: &Link<K>) -> i32 {
    link.as_ref().map_or(-1, |node| node.height)
}

/// Balance factor of a possibly absent subtree: 0 when absent
fn balance<K>(link: &Link<K>) -> i32 {
    link.as_ref().map_or(0, |node| node.balance_factor())
}

impl<K> Node<K> {
    fn leaf(key: K) -> Box<Self> {
        Box::new(Node {
            key,
            left: None,
            right: None,
            height: 0,
        })
    }

    pub(super) fn height(&self) -> i32 {
        self.height
    }

    /// Left height minus right height
    fn balance_factor(&self) -> i32 {
        height(&self.left) - height(&self.right)
    }

    fn fix_height(&mut self) {
        self.height = height(&self.left).max(height(&self.right)) + 1;
    }

    /// Promote the left child into this node's place.
    /// The child's right subtree becomes this node's left subtree
    fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let mut pivot = match self.left.take() {
            Some(pivot) => pivot,
            None => return self,
        };
        log::trace!("rotating right around node of height {}", self.height);
        self.left = pivot.right.take();
        self.fix_height();
        pivot.right = Some(self);
        pivot.fix_height();
        pivot
    }

    /// Mirror of `rotate_right`
    fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let mut pivot = match self.right.take() {
            Some(pivot) => pivot,
            None => return self,
        };
        log::trace!("rotating left around node of height {}", self.height);
        self.right = pivot.left.take();
        self.fix_height();
        pivot.left = Some(self);
        pivot.fix_height();
        pivot
    }

    /// Restore the balance of this subtree, assuming both children are already balanced.
    /// Nothing is changed unless the balance factor is exactly +2 or -2
    fn rebalance(mut self: Box<Self>) -> Box<Self> {
        match self.balance_factor() {
            2 => {
                if balance(&self.left) < 0 {
                    self.left = self.left.take().map(Node::rotate_left);
                }
                self.rotate_right()
            }
            -2 => {
                if balance(&self.right) > 0 {
                    self.right = self.right.take().map(Node::rotate_right);
                }
                self.rotate_left()
            }
            _ => self,
        }
    }

    /// Run on every node of a mutated path, bottom-up
    fn retrace(self: Box<Self>) -> Box<Self> {
        let mut node = if self.balance_factor().abs() != 1 {
            self.rebalance()
        } else {
            self
        };
        node.fix_height();
        node
    }

    /// Remove this node from its subtree, returning the replacement subtree and the removed key.
    /// A node with two children keeps its place and receives the key of its in-order successor.
    /// The caller retraces the replacement
    fn detach(mut self: Box<Self>) -> (Link<K>, K) {
        match (self.left.take(), self.right.take()) {
            (None, None) => (None, self.key),
            (Some(child), None) | (None, Some(child)) => (Some(child), self.key),
            (Some(left), Some(right)) => {
                let (right, successor) = right.take_min();
                self.left = Some(left);
                self.right = right;
                let removed = mem::replace(&mut self.key, successor);
                (Some(self), removed)
            }
        }
    }

    /// Remove the minimum node of this subtree, returning the remaining subtree and its key
    fn take_min(mut self: Box<Self>) -> (Link<K>, K) {
        match self.left.take() {
            None => (self.right.take(), self.key),
            Some(left) => {
                let (left, min) = left.take_min();
                self.left = left;
                (Some(self.retrace()), min)
            }
        }
    }
}

fn retrace<K>(link: &mut Link<K>) {
    *link = link.take().map(Node::retrace);
}

/// Recursive implementation of `AvlTree::try_insert`.
/// On failure nothing along the path is touched
pub(super) fn insert<K: Ord>(link: &mut Link<K>, key: K) -> Result<(), Error> {
    match link {
        None => {
            *link = Some(Node::leaf(key));
            return Ok(());
        }
        Some(node) => match key.cmp(&node.key) {
            Ordering::Equal => return Err(Error::DuplicateKey),
            Ordering::Greater => insert(&mut node.right, key)?,
            Ordering::Less => insert(&mut node.left, key)?,
        },
    }
    retrace(link);
    Ok(())
}

/// Recursive implementation of `AvlTree::take`
pub(super) fn remove<K, Q>(link: &mut Link<K>, key: &Q) -> Result<K, Error>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let node = link.as_mut().ok_or(Error::KeyNotFound)?;
    let removed = match key.cmp(node.key.borrow()) {
        Ordering::Greater => remove(&mut node.right, key)?,
        Ordering::Less => remove(&mut node.left, key)?,
        Ordering::Equal => {
            let (replacement, removed) = link
                .take()
                .map(Node::detach)
                .ok_or(Error::KeyNotFound)?;
            *link = replacement;
            removed
        }
    };
    retrace(link);
    Ok(removed)
}

pub(super) fn find<'a, K, Q>(link: &'a Link<K>, key: &Q) -> Option<&'a K>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let node = link.as_ref()?;
    match key.cmp(node.key.borrow()) {
        Ordering::Equal => Some(&node.key),
        Ordering::Greater => find(&node.right, key),
        Ordering::Less => find(&node.left, key),
    }
}

pub(super) fn min<K>(link: &Link<K>) -> Option<&K> {
    let node = link.as_ref()?;
    min(&node.left).or(Some(&node.key))
}

pub(super) fn max<K>(link: &Link<K>) -> Option<&K> {
    let node = link.as_ref()?;
    max(&node.right).or(Some(&node.key))
}

pub(super) fn collect_in_order<'a, K>(link: &'a Link<K>, keys: &mut Vec<&'a K>) {
    if let Some(node) = link {
        collect_in_order(&node.left, keys);
        keys.push(&node.key);
        collect_in_order(&node.right, keys);
    }
}

pub(super) fn clone_link<K: Clone>(link: &Link<K>) -> Link<K> {
    link.as_ref().map(|node| {
        Box::new(Node {
            key: node.key.clone(),
            left: clone_link(&node.left),
            right: clone_link(&node.right),
            height: node.height,
        })
    })
}

/// Whether both subtrees have the same shape and the same key at every position
pub(super) fn same_shape<K: PartialEq>(a: &Link<K>, b: &Link<K>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.key == b.key && same_shape(&a.left, &b.left) && same_shape(&a.right, &b.right)
        }
        _ => false,
    }
}

/// Follow the search path for `key`, returning the subtree rooted at it
/// (or the empty link where the search ended)
pub(super) fn descend<'a, K: Ord>(mut link: &'a Link<K>, key: &K) -> &'a Link<K> {
    while let Some(node) = link {
        link = match key.cmp(&node.key) {
            Ordering::Equal => break,
            Ordering::Greater => &node.right,
            Ordering::Less => &node.left,
        };
    }
    link
}

/// Check ordering, cached heights and balance of a whole subtree.
/// Return its height and number of nodes
pub(super) fn validate<'a, K: Ord>(
    link: &'a Link<K>,
    lower: Option<&'a K>,
    upper: Option<&'a K>,
) -> Result<(i32, usize), Error> {
    let node = match link {
        None => return Ok((-1, 0)),
        Some(node) => node,
    };

    if lower.map_or(false, |lower| node.key <= *lower)
        || upper.map_or(false, |upper| node.key >= *upper)
    {
        return Err(Error::Unordered);
    }

    let (left_height, left_len) = validate(&node.left, lower, Some(&node.key))?;
    let (right_height, right_len) = validate(&node.right, Some(&node.key), upper)?;
    if node.height != left_height.max(right_height) + 1 {
        return Err(Error::StaleHeight);
    }
    if (left_height - right_height).abs() > 1 {
        return Err(Error::Unbalanced);
    }

    Ok((node.height, left_len + right_len + 1))
}
