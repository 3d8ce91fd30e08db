//! Treeviz formatter for query trees
//!
//! One line per node. The root is printed bare; every other node is prefixed by a connector
//! (`├─` or `└─` for the last sibling) and by the continuation guides of its ancestors
//! (`│ ` while an ancestor still has siblings below, two spaces otherwise).
//!
//! Example:
//!
//!     GetUser
//!     └─ username
//!       ├─ username
//!       └─ projects
//!         └─ id

use super::registry::{FormatError, Formatter};
use crate::kensa::tree::TreeNode;

pub fn to_treeviz_str(tree: &TreeNode) -> String {
    let mut result = String::new();
    result.push_str(&tree.name);
    result.push('\n');
    append_children(&mut result, &tree.children, "");
    result
}

fn append_node(result: &mut String, node: &TreeNode, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    result.push_str(&format!("{}{} {}\n", prefix, connector, node.name));

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    append_children(result, &node.children, &new_prefix);
}

fn append_children(result: &mut String, children: &[TreeNode], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        append_node(result, child, prefix, is_last);
    }
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, tree: &TreeNode) -> Result<String, FormatError> {
        Ok(to_treeviz_str(tree))
    }

    fn description(&self) -> &str {
        "One line per field, nesting drawn as a tree"
    }
}
