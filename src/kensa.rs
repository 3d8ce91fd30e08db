//! Main module for kensa library functionality
//!
//! The pipeline has three stages:
//!
//!     1. Lexing: the source is split into identifier and brace tokens. Argument lists are
//!        dropped, and the leading operation keyword is removed by an explicit step. See
//!        [lexing](crate::kensa::lexing).
//!     2. Root extraction: the first token names the root (or a placeholder is used for
//!        anonymous selections).
//!     3. Tree building: the flat token stream is folded into nested [TreeNode]s by a
//!        recursive descent over explicit indices. See [parsing](crate::kensa::parsing).
//!
//! Output is rendered through the [formats](crate::kensa::formats) registry.

pub mod config;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod testing;
pub mod token;
pub mod tree;

pub use tree::TreeNode;
