//! Display helpers: termtree hierarchy rendering and line formatting for
//! traversal output. The library traversals return plain value sequences;
//! everything about how they look on a terminal lives here and in the CLI.

use generational_arena::Index;
use itertools::Itertools;
use termtree::Tree;

use crate::arena::TreeArena;

pub trait TreeRender {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeRender for TreeArena {
    fn to_tree_string(&self) -> Tree<String> {
        fn build(tree: &TreeArena, idx: Index) -> Tree<String> {
            match tree.get_node(idx) {
                Some(node) => {
                    let mut rendered = Tree::new(format!("{}@{}", node.value, node.depth));
                    if let Some(l) = node.left {
                        rendered.push(build(tree, l));
                    }
                    if let Some(r) = node.right {
                        rendered.push(build(tree, r));
                    }
                    rendered
                }
                None => Tree::new("?".to_string()),
            }
        }

        match self.root() {
            Some(root) => build(self, root),
            None => Tree::new("empty tree".to_string()),
        }
    }
}

/// Comma-separated single-line sequence, e.g. `5, 3, 8`.
pub fn format_sequence(values: &[u32]) -> String {
    values.iter().join(", ")
}

/// One line per group, values space-separated.
pub fn format_lines(lines: &[Vec<u32>]) -> String {
    lines.iter().map(|line| line.iter().join(" ")).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::TreeArena;

    #[test]
    fn renders_manual_tree() {
        let mut tree = TreeArena::with_capacity(3);
        let root = tree.insert_root(5).unwrap();
        tree.insert_left(root, 3).unwrap();
        tree.insert_right(root, 8).unwrap();

        let rendered = tree.to_tree_string().to_string();
        assert!(rendered.contains("5@0"));
        assert!(rendered.contains("3@1"));
        assert!(rendered.contains("8@1"));
    }

    #[test]
    fn formats_grouped_lines() {
        let lines = vec![vec![5], vec![3, 8]];
        assert_eq!(format_lines(&lines), "5\n3 8");
        assert_eq!(format_sequence(&[5, 3, 8]), "5, 3, 8");
    }
}
