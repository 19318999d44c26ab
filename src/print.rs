//! A human-readable, indented dump of a tree's shape.

use crate::node::{Link, Node};
use std::fmt::Display;
use std::io::{self, Write};

/// Writes an indented rendering of the tree, one key per line, with left
/// children prefixed `L----` and right children `R----`.
///
/// `indent` is the prefix for the subtree's root line and `is_last` marks
/// it as its parent's right (or only) branch; the whole tree is rendered by
/// passing `""` and `true`. The glyphs are a debugging convenience, not a
/// format other tooling should parse.
///
/// # Examples
///
/// ```
/// use avl_tree::{insert, write_tree, Node};
///
/// let mut root = Some(Node::new(2));
/// root = Some(insert(root, 1));
/// root = Some(insert(root, 3));
///
/// let mut out = Vec::new();
/// write_tree(&mut out, &root, "", true).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "R----2\n   L----1\n   R----3\n");
/// ```
pub fn write_tree<T, W>(w: &mut W, link: &Link<T>, indent: &str, is_last: bool) -> io::Result<()>
    where T: Display, W: Write {

    write_node(w, link.as_deref(), indent, is_last)
}

fn write_node<T, W>(w: &mut W, node: Option<&Node<T>>, indent: &str, is_last: bool) -> io::Result<()>
    where T: Display, W: Write {

    let node = match node {
        Some(node) => node,
        None => return Ok(()),
    };

    writeln!(w, "{}{}{}", indent, if is_last { "R----" } else { "L----" }, node.key())?;

    let indent = format!("{}{}", indent, if is_last { "   " } else { "|  " });
    write_node(w, node.left(), &indent, false)?;
    write_node(w, node.right(), &indent, true)
}

/// Writes the tree to standard output.
pub fn print<T: Display>(link: &Link<T>) -> io::Result<()> {
    write_tree(&mut io::stdout().lock(), link, "", true)
}

#[cfg(test)]
mod test {
    use super::write_tree;
    use crate::node::{insert, Node};

    #[test]
    fn renders_left_and_right_branches() {
        let mut root = Some(Node::new(33));
        for key in [13, 53, 9, 21, 61, 8, 11] {
            root = Some(insert(root, key));
        }

        let mut out = Vec::new();
        write_tree(&mut out, &root, "", true).unwrap();

        let expected = concat!(
            "R----33\n",
            "   L----13\n",
            "   |  L----9\n",
            "   |  |  L----8\n",
            "   |  |  R----11\n",
            "   |  R----21\n",
            "   R----53\n",
            "      R----61\n",
        );
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn renders_nothing_for_an_empty_tree() {
        let mut out = Vec::new();
        write_tree(&mut out, &None::<Box<Node<i32>>>, "", true).unwrap();
        assert!(out.is_empty());
    }
}
