//! # kensa
//!
//! Query tree parsing for the Kensa GraphQL monitoring dashboard.
//!
//! Kensa logs every operation sent to a monitored GraphQL API. To show the shape of a logged
//! operation, the raw query string is turned into a `{ name, children }` tree that tree
//! visualizations consume directly. See [kensa](crate::kensa) for the pipeline.

pub mod kensa;

pub use kensa::parsing::{
    parse, parse_operation, Operation, ParseError, ParseOptions, QueryTreeParser,
};
pub use kensa::tree::TreeNode;
