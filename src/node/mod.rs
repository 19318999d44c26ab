//! The recursive core: nodes, rotations, and the insert/delete/lookup
//! routines that thread rebalancing through their return values.


use compare::Compare;
use std::cmp::Ordering::*;

/// A handle to a subtree: its root node, or `None` for the empty tree.
///
/// Every mutating operation consumes the handle and returns the new one,
/// which the caller must store back in place of the old; rotations can
/// change which node is the subtree's root.
pub type Link<T> = Option<Box<Node<T>>>;

/// A single key and the subtree rooted at it.
///
/// A node exclusively owns its children, and its cached height always
/// equals `1 + max(height(left), height(right))` once an operation has
/// returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    key: T,
    left: Link<T>,
    right: Link<T>,
    height: i32,
}

impl<T> Node<T> {
    /// Creates a tree holding a single key.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_tree::Node;
    ///
    /// let root = Node::new(33);
    /// assert_eq!(root.key(), &33);
    /// assert_eq!(root.height(), 1);
    /// ```
    pub fn new(key: T) -> Box<Node<T>> {
        Box::new(Node { key, left: None, right: None, height: 1 })
    }

    /// Returns a reference to the node's key.
    pub fn key(&self) -> &T { &self.key }

    /// Returns a reference to the node's left child, if any.
    pub fn left(&self) -> Option<&Node<T>> { self.left.as_deref() }

    /// Returns a reference to the node's right child, if any.
    pub fn right(&self) -> Option<&Node<T>> { self.right.as_deref() }

    /// Returns the cached height of the subtree rooted at this node.
    pub fn height(&self) -> i32 { self.height }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    fn balance_factor(&self) -> i32 {
        height(&self.left) - height(&self.right)
    }
}

#[cfg(any(test, feature = "quickcheck"))]
impl<T: Clone> Node<T> {
    pub(crate) fn keys_in_order(&self, out: &mut Vec<T>) {
        if let Some(left) = self.left() {
            left.keys_in_order(out);
        }
        out.push(self.key.clone());
        if let Some(right) = self.right() {
            right.keys_in_order(out);
        }
    }
}

/// Returns the height of the subtree, or 0 for the empty tree.
///
/// This reads the cached field; nothing is recomputed.
///
/// # Examples
///
/// ```
/// use avl_tree::{height, insert, Node};
///
/// let mut root = None;
/// assert_eq!(height(&root), 0);
///
/// root = Some(insert(root, 1));
/// root = Some(insert(root, 2));
/// assert_eq!(height(&root), 2);
/// ```
pub fn height<T>(link: &Link<T>) -> i32 {
    link.as_ref().map_or(0, |node| node.height)
}

/// Returns the subtree's balance factor (left height minus right height),
/// or 0 for the empty tree.
///
/// # Examples
///
/// ```
/// use avl_tree::{balance_factor, insert, Node};
///
/// let mut root = Some(Node::new(1));
/// assert_eq!(balance_factor(&root), 0);
///
/// root = Some(insert(root, 2));
/// assert_eq!(balance_factor(&root), -1);
/// ```
pub fn balance_factor<T>(link: &Link<T>) -> i32 {
    link.as_ref().map_or(0, |node| node.balance_factor())
}

/// Inserts a key into the tree and returns its new root.
///
/// Inserting a key that is already present is a no-op that returns the
/// root unchanged.
///
/// # Examples
///
/// ```
/// use avl_tree::{contains, height, insert, Node};
///
/// let mut root = Some(Node::new(2));
/// root = Some(insert(root, 1));
/// root = Some(insert(root, 3));
///
/// assert_eq!(height(&root), 2);
/// assert!(contains(&root, &3));
/// ```
pub fn insert<T: Ord>(root: Link<T>, key: T) -> Box<Node<T>> {
    insert_with(root, &compare::natural(), key)
}

/// Inserts a key into a tree ordered by the given comparator and returns
/// the tree's new root.
///
/// All operations on a tree must use the same comparator for its lifetime.
///
/// # Examples
///
/// ```
/// use compare::{natural, Compare};
/// use avl_tree::{insert_with, Node};
///
/// let cmp = natural().rev();
///
/// let mut root = Some(Node::new(2));
/// root = Some(insert_with(root, &cmp, 1));
/// root = Some(insert_with(root, &cmp, 3));
///
/// // under the reversed order, larger keys go to the left
/// assert_eq!(root.unwrap().left().unwrap().key(), &3);
/// ```
pub fn insert_with<T, C>(root: Link<T>, cmp: &C, key: T) -> Box<Node<T>>
    where C: Compare<T> {

    let mut node = match root {
        None => return Node::new(key),
        Some(node) => node,
    };

    match cmp.compare(&key, &node.key) {
        // the tree did not change shape, so there is nothing to rebalance
        Equal => return node,
        Less => node.left = Some(insert_with(node.left.take(), cmp, key)),
        Greater => node.right = Some(insert_with(node.right.take(), cmp, key)),
    }

    node.update_height();
    balance(node)
}

/// Deletes a key from the tree and returns its new root, which is `None`
/// if the tree is now empty.
///
/// Deleting a key that is not present is a no-op.
///
/// # Examples
///
/// ```
/// use avl_tree::{delete, height, insert, Node};
///
/// let mut root = Some(Node::new(2));
/// root = Some(insert(root, 1));
/// root = Some(insert(root, 3));
///
/// root = delete(root, &2);
/// assert_eq!(height(&root), 2);
///
/// root = delete(root, &1);
/// root = delete(root, &3);
/// assert!(root.is_none());
/// ```
pub fn delete<T: Ord>(root: Link<T>, key: &T) -> Link<T> {
    delete_with(root, &compare::natural(), key)
}

/// Deletes a key from a tree ordered by the given comparator and returns
/// the tree's new root.
pub fn delete_with<T, C>(root: Link<T>, cmp: &C, key: &T) -> Link<T>
    where C: Compare<T> {

    let mut node = match root {
        None => return None,
        Some(node) => node,
    };

    match cmp.compare(key, &node.key) {
        Less => node.left = delete_with(node.left.take(), cmp, key),
        Greater => node.right = delete_with(node.right.take(), cmp, key),
        Equal => match (node.left.take(), node.right.take()) {
            (None, None) => return None,
            // splice the single child into the target's slot
            (Some(child), None) | (None, Some(child)) => node = child,
            (Some(left), Some(right)) => {
                // replace the key with its successor, the minimum of the
                // right subtree, and let `take_min` rebalance that spine
                let (right, successor) = take_min(right);
                node.key = successor;
                node.left = Some(left);
                node.right = right;
            }
        },
    }

    node.update_height();
    Some(balance(node))
}

// Detaches the node holding the minimum key and returns what remains of
// the subtree, rebalanced one node at a time on the way back up, along
// with the detached key.
fn take_min<T>(mut node: Box<Node<T>>) -> (Link<T>, T) {
    match node.left.take() {
        None => {
            let Node { key, right, .. } = *node;
            (right, key)
        }
        Some(left) => {
            let (left, min) = take_min(left);
            node.left = left;
            node.update_height();
            (Some(balance(node)), min)
        }
    }
}

// Restores the balance invariant at a node whose subtrees are already
// balanced and whose cached height is current. The taller child exists
// whenever the balance factor leaves {-1, 0, 1}, and the sign of that
// child's own balance factor picks the single or double rotation.
fn balance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let bf = node.balance_factor();

    if bf > 1 {
        if balance_factor(&node.left) < 0 {
            node.left = node.left.take().map(rotate_left);
        }
        rotate_right(node)
    } else if bf < -1 {
        if balance_factor(&node.right) > 0 {
            node.right = node.right.take().map(rotate_right);
        }
        rotate_left(node)
    } else {
        node
    }
}

// The demoted node's height must be finalized before the pivot's, which
// depends on it. A node with no left child rotates to itself.
fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut pivot = match node.left.take() {
        Some(pivot) => pivot,
        None => return node,
    };

    node.left = pivot.right.take();
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();
    pivot
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut pivot = match node.right.take() {
        Some(pivot) => pivot,
        None => return node,
    };

    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();
    pivot
}

/// Returns the node holding the given key, or `None` if the tree does not
/// contain the key.
///
/// # Examples
///
/// ```
/// use avl_tree::{get, insert, Node};
///
/// let mut root = Some(Node::new(2));
/// root = Some(insert(root, 1));
///
/// assert_eq!(get(&root, &1).map(|node| node.key()), Some(&1));
/// assert!(get(&root, &3).is_none());
/// ```
pub fn get<'a, T: Ord>(link: &'a Link<T>, key: &T) -> Option<&'a Node<T>> {
    get_with(link, &compare::natural(), key)
}

/// Returns the node holding the given key in a tree ordered by the given
/// comparator.
pub fn get_with<'a, T, C>(link: &'a Link<T>, cmp: &C, key: &T) -> Option<&'a Node<T>>
    where C: Compare<T> {

    let mut link = link;

    while let Some(node) = link {
        match cmp.compare(key, &node.key) {
            Equal => return Some(node),
            Less => link = &node.left,
            Greater => link = &node.right,
        }
    }

    None
}

/// Checks if the tree contains the given key.
///
/// # Examples
///
/// ```
/// use avl_tree::{contains, Node};
///
/// let root = Some(Node::new(1));
/// assert!(contains(&root, &1));
/// assert!(!contains(&root, &2));
/// ```
pub fn contains<T: Ord>(link: &Link<T>, key: &T) -> bool {
    get(link, key).is_some()
}

/// Checks if a tree ordered by the given comparator contains the given key.
pub fn contains_with<T, C>(link: &Link<T>, cmp: &C, key: &T) -> bool
    where C: Compare<T> {

    get_with(link, cmp, key).is_some()
}
