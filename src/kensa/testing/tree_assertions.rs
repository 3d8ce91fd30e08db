//! Fluent assertions over [TreeNode]s

use crate::kensa::tree::TreeNode;

pub fn assert_tree(tree: &TreeNode) -> TreeAssertion<'_> {
    TreeAssertion {
        node: tree,
        context: "root".to_string(),
    }
}

fn summarize(children: &[TreeNode]) -> String {
    children
        .iter()
        .map(|child| {
            if child.is_leaf() {
                child.name.clone()
            } else {
                format!("{} {{{}}}", child.name, child.children.len())
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub struct TreeAssertion<'a> {
    pub(crate) node: &'a TreeNode,
    pub(crate) context: String,
}

impl<'a> TreeAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.node.name, expected,
            "{}: Expected name '{}', found '{}'",
            self.context, expected, self.node.name
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.node.children.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} children, found {} children: [{}]",
            self.context,
            expected,
            actual,
            summarize(&self.node.children)
        );
        self
    }

    /// Assert the names of the direct children, in order.
    pub fn child_names(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.node.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            actual, expected,
            "{}: Unexpected children: [{}]",
            self.context,
            summarize(&self.node.children)
        );
        self
    }

    pub fn is_leaf(self) -> Self {
        assert!(
            self.node.is_leaf(),
            "{}: Expected '{}' to be a leaf, found children: [{}]",
            self.context,
            self.node.name,
            summarize(&self.node.children)
        );
        self
    }

    pub fn depth(self, expected: usize) -> Self {
        assert_eq!(
            self.node.depth(),
            expected,
            "{}: Expected depth {}",
            self.context,
            expected
        );
        self
    }

    /// Assert on a specific child by index
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(TreeAssertion<'a>),
    {
        assert!(
            index < self.node.children.len(),
            "{}: Child index {} out of bounds ({} children)",
            self.context,
            index,
            self.node.children.len()
        );
        assertion(TreeAssertion {
            node: &self.node.children[index],
            context: format!("{}[{}]", self.context, index),
        });
        self
    }
}
