//! Builds a small tree, prints it, deletes a key, and prints the result.

use avl_tree::{delete, insert, print, Node};

fn main() -> std::io::Result<()> {
    let mut root = Some(Node::new(33));
    for key in [13, 53, 9, 21, 61, 8, 11] {
        root = Some(insert(root, key));
    }

    print(&root)?;

    root = delete(root, &13);
    println!("After deleting 13:");
    print(&root)
}
