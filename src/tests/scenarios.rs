use crate::{AvlTree, Error};

fn tree_of(keys: &[i32]) -> AvlTree<i32> {
    let _ = pretty_env_logger::try_init();
    let mut tree = AvlTree::new();
    for &key in keys {
        assert!(tree.insert(key));
    }
    tree.check_invariants().unwrap();
    tree
}

#[test]
fn in_order_traversal() {
    let tree = tree_of(&[1, 15, 10, 9, 4, 8, 14, 6, 3, 12, 2, 13, 5, 7, 11]);
    let expected: Vec<i32> = (1..=15).collect();
    assert_eq!(tree.in_order_traversal(), expected.iter().collect::<Vec<_>>());
    assert_eq!(tree.len(), 15);
}

#[test]
fn max_after_removing_largest() {
    let mut tree = tree_of(&(0..1000).collect::<Vec<_>>());
    assert!(tree.remove(&999));
    assert!(tree.remove(&998));
    assert_eq!(tree.max(), Some(&997));
    tree.check_invariants().unwrap();
}

#[test]
fn empty_tree_boundaries() {
    let mut tree = tree_of(&[]);
    assert_eq!(tree.min(), None);
    assert_eq!(tree.max(), None);
    assert_eq!(tree.find(&7), None);
    assert!(!tree.contains(&7));
    assert!(!tree.remove(&7));
    assert!(tree.in_order_traversal().is_empty());
    tree.remove_all();
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.check_invariants(), Ok(()));
}

#[test]
fn duplicate_rejected_once_inserted() {
    let mut tree = tree_of(&[5, 3, 8]);
    assert!(tree.insert(4));
    assert_eq!(tree.try_insert(4), Err(Error::DuplicateKey));
    assert_eq!(tree.len(), 4);
}

#[test]
fn insert_then_remove_keeps_len_but_not_shape() {
    // 2(1,3(-,4))
    let original = tree_of(&[2, 1, 3, 4]);
    let mut tree = original.clone();

    // Inserting 5 rotates around 3: 2(1,4(3,5)). Removing it does not undo the rotation
    assert!(tree.insert(5));
    assert!(tree.remove(&5));
    assert_eq!(tree.len(), original.len());
    assert_eq!(tree.in_order_traversal(), original.in_order_traversal());
    assert_ne!(tree, original);
    tree.check_invariants().unwrap();
}

#[test]
fn structural_equality() {
    let keys = [100, 50, 150, 25, 75, 125, 175];
    let mut a = tree_of(&keys);
    let mut b = tree_of(&keys);
    assert_eq!(a, b);

    assert!(a.remove(&75));
    assert_ne!(a, b);
    assert!(b.remove(&75));
    assert_eq!(a, b);

    a.remove_all();
    assert_ne!(a, b);
    b.remove_all();
    assert_eq!(a, b);
}

#[test]
fn equality_grows_in_lockstep() {
    let mut a = tree_of(&[]);
    let mut b = tree_of(&[]);
    assert_eq!(a, b);
    for i in 0..=100 {
        a.insert(i);
        b.insert(i);
        assert_eq!(a, b);
    }
    a.remove(&49);
    assert_ne!(a, b);
    b.remove(&49);
    assert_eq!(a, b);
}

#[test]
fn same_keys_different_shape_are_not_equal() {
    // 2(1,3(-,4)) versus 3(2(1,-),4)
    let a = tree_of(&[2, 1, 3, 4]);
    let b = tree_of(&[3, 2, 4, 1]);
    assert_eq!(a.in_order_traversal(), b.in_order_traversal());
    assert_ne!(a, b);
}

#[test]
fn is_subtree() {
    let tree = tree_of(&[100, 50, 150, 25, 75, 125, 175]);
    assert!(tree.is_subtree(&tree_of(&[])));
    assert!(tree_of(&[]).is_subtree(&tree_of(&[])));
    assert!(tree.is_subtree(&tree));

    // Root matches but the other tree stops short of the real subtree
    assert!(!tree.is_subtree(&tree_of(&[100])));
    assert!(!tree.is_subtree(&tree_of(&[100, 50])));
    assert!(!tree.is_subtree(&tree_of(&[100, 50, 150])));
    assert!(!tree.is_subtree(&tree_of(&[150])));
    assert!(!tree.is_subtree(&tree_of(&[150, 125])));

    assert!(tree.is_subtree(&tree_of(&[150, 125, 175])));
    assert!(tree.is_subtree(&tree_of(&[175, 150, 125])));
    assert!(tree.is_subtree(&tree_of(&[25])));

    // Keys absent from the tree
    assert!(!tree.is_subtree(&tree_of(&[60])));
    assert!(!tree_of(&[]).is_subtree(&tree_of(&[25])));
}

#[test]
fn is_subtree_requires_matching_shape() {
    // 150(125,175(-,200))
    let tree = tree_of(&[150, 125, 175, 200]);

    // Same keys and the same shape
    assert!(tree.is_subtree(&tree_of(&[150, 175, 125, 200])));

    // Same keys and the same root, but 150(125,200(175,-))
    let other = tree_of(&[150, 125, 200, 175]);
    assert_eq!(other.in_order_traversal(), tree.in_order_traversal());
    assert!(!tree.is_subtree(&other));

    // Same keys rooted at 175: 175(150(125,-),200). Only the node found by searching
    // for 175 is compared, and it holds a single child
    assert!(!tree.is_subtree(&tree_of(&[175, 150, 200, 125])));
}
