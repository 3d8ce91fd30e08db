//! Testing utilities for query tree assertions
//!
//! Tree tests should check the whole shape of the result, not generalities like node counts.
//! [assert_tree] offers a fluent API for that:
//!
//! ```rust-example
//! use kensa::kensa::testing::assert_tree;
//!
//! let tree = kensa::parse("query GetUser { username { id projects { id } } }")?;
//! assert_tree(&tree)
//!     .name("GetUser")
//!     .child_count(1)
//!     .child(0, |username| {
//!         username
//!             .name("username")
//!             .child_names(&["id", "projects"])
//!             .child(1, |projects| {
//!                 projects.child_names(&["id"]).child(0, |id| {
//!                     id.is_leaf();
//!                 });
//!             });
//!     });
//! ```
//!
//! Failure messages carry the path of the node (e.g. `root[0][1]`) and a summary of its
//! children.

pub mod tree_assertions;

pub use tree_assertions::{assert_tree, TreeAssertion};
