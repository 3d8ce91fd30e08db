//! Query tree nodes
//!
//! A [TreeNode] is one field (or the operation itself) with its nested selection. The
//! serialized shape is exactly `{ "name": ..., "children": [...] }`, which is what tree
//! visualizations pattern-match on, so field names must not change.

use serde::{Deserialize, Serialize};

/// Root name used when the operation has no name of its own.
pub const DEFAULT_ROOT_NAME: &str = "default name";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub name: String,
    #[serde(default)]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// A node with no nested selection.
    pub fn leaf(name: impl Into<String>) -> Self {
        TreeNode {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        TreeNode {
            name: name.into(),
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of selection levels below this node. A leaf has depth 0.
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Total number of nodes, this one included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::node_count).sum::<usize>()
    }

    /// All names in pre-order.
    pub fn names(&self) -> Vec<&str> {
        let mut names = Vec::with_capacity(self.node_count());
        self.collect_names(&mut names);
        names
    }

    fn collect_names<'a>(&'a self, names: &mut Vec<&'a str>) {
        names.push(&self.name);
        for child in &self.children {
            child.collect_names(names);
        }
    }

    /// Find a direct child by name.
    pub fn child(&self, name: &str) -> Option<&TreeNode> {
        self.children.iter().find(|child| child.name == name)
    }
}
