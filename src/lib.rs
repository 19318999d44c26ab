//! A self-balancing binary search tree (AVL tree).
//!
//! There is no map or set object wrapping the structure: the root link is
//! the tree handle, and every mutating operation consumes the current root
//! and returns the new one, which the caller re-links. Rebalancing runs on
//! the way back out of the recursion, so the node returned may differ from
//! the one passed in.
//!
//! Keys are compared through the [`compare`] crate; the plain entry points
//! ([`insert`], [`delete`], [`get`], [`contains`]) use the natural order of
//! an `Ord` key type, and each has a `*_with` variant taking an explicit
//! comparator.
//!
//! Duplicate keys are not stored: inserting a key that is already present
//! is a no-op, as is deleting a key that is absent.
//!
//! The behavior of a tree is undefined if a key's ordering relative to any
//! other key changes while the key is in the tree. This is normally only
//! possible through `Cell`, `RefCell`, or unsafe code.
//!
//! # Examples
//!
//! ```
//! use avl_tree::{contains, delete, height, insert, Node};
//!
//! let mut root = Some(Node::new(33));
//! for key in [13, 53, 9, 21, 61, 8, 11] {
//!     root = Some(insert(root, key));
//! }
//!
//! assert_eq!(height(&root), 4);
//! assert!(contains(&root, &13));
//!
//! root = delete(root, &13);
//! assert!(!contains(&root, &13));
//! assert_eq!(height(&root), 4);
//! ```

mod node;
mod print;

#[cfg(feature = "quickcheck")]
mod quickcheck;

pub use crate::node::{
    balance_factor, contains, contains_with, delete, delete_with, get, get_with, height, insert,
    insert_with, Link, Node,
};
pub use crate::print::{print, write_tree};
