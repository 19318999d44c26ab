use avl_tree::{contains, delete, insert, Link, Node};
use quickcheck_macros::quickcheck;
use rand::seq::SliceRandom;

fn build(keys: &[u16]) -> Link<u16> {
    let mut root = None;
    for &key in keys {
        root = Some(insert(root, key));
    }
    root
}

/// Checks the AVL and ordering invariants through the public accessors and
/// returns the subtree's height.
fn assert_balanced(node: &Node<u16>) -> i32 {
    let lh = node.left().map_or(0, assert_balanced);
    let rh = node.right().map_or(0, assert_balanced);

    assert_eq!(node.height(), 1 + lh.max(rh));
    assert!((lh - rh).abs() <= 1);

    if let Some(left) = node.left() {
        assert!(left.key() < node.key());
    }
    if let Some(right) = node.right() {
        assert!(right.key() > node.key());
    }

    node.height()
}

#[quickcheck]
fn inserts_and_deletes_stay_balanced(keys: Vec<u16>, deletions: Vec<u16>) -> bool {
    let mut root = build(&keys);
    if let Some(node) = root.as_deref() {
        assert_balanced(node);
    }

    for key in &deletions {
        root = delete(root, key);
        if let Some(node) = root.as_deref() {
            assert_balanced(node);
        }
    }

    true
}

#[quickcheck]
fn repeated_insert_leaves_the_tree_unchanged(keys: Vec<u16>, key: u16) -> bool {
    let once = insert(build(&keys), key);
    let twice = insert(Some(once.clone()), key);

    twice == once && contains(&Some(twice), &key)
}

#[quickcheck]
fn delete_removes_the_key(keys: Vec<u16>, key: u16) -> bool {
    let root = delete(build(&keys), &key);
    !contains(&root, &key)
}

#[quickcheck]
fn deletes_in_any_order_empty_the_tree(keys: Vec<u16>) -> bool {
    let mut root = build(&keys);

    let mut order = keys;
    order.shuffle(&mut rand::thread_rng());

    for key in &order {
        root = delete(root, key);
    }

    root.is_none()
}

#[quickcheck]
fn generated_trees_are_balanced(tree: Node<u16>) -> bool {
    assert_balanced(&tree);
    true
}
