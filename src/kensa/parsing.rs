//! Parser
//!
//! Folds the token stream of an operation into a [TreeNode].
//!
//!     query GetUser {                      GetUser
//!       username(username: $u) {           └─ username
//!         username                 ->        ├─ username
//!         projects { id }                    └─ projects
//!       }                                      └─ id
//!     }
//!
//! Pipeline:
//!     1. [tokenize](crate::kensa::lexing::tokenize), then optionally
//!        [skip_leading_keyword](crate::kensa::lexing::skip_leading_keyword).
//!     2. Root name extraction: the first token names the root. An anonymous selection
//!        (first token `{`) gets [DEFAULT_ROOT_NAME].
//!     3. [build_tree] over the root's selection, if it has one.
//!
//! When the skipped run was a `{` (shorthand `{ users { id } }`), the first field becomes the
//! root and the `}` matching the skipped brace must close the input.
//!
//! Malformed input is never turned into a partial tree. Unbalanced braces, empty selections,
//! a selection with no field in front of it, and leftovers after the root selection are all
//! [ParseError]s. Empty input (or a bare keyword) is not an error: it yields a childless
//! placeholder root.

pub mod builder;
pub mod error;

pub use builder::{build_tree, TreeBuilder, DEFAULT_MAX_DEPTH, MAX_DEPTH_CEILING};
pub use error::ParseError;

use crate::kensa::lexing::{skip_leading_keyword, tokenize};
use crate::kensa::token::{SpannedToken, Token};
use crate::kensa::tree::{TreeNode, DEFAULT_ROOT_NAME};

pub const DEFAULT_MAX_INPUT_LEN: usize = 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Drop the first run as the operation keyword (`query`, `mutation`, ...).
    pub skip_leading_keyword: bool,
    /// Maximum selection nesting. The root selection is level 1.
    pub max_depth: usize,
    /// Maximum source length in bytes.
    pub max_input_len: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            skip_leading_keyword: true,
            max_depth: DEFAULT_MAX_DEPTH,
            max_input_len: DEFAULT_MAX_INPUT_LEN,
        }
    }
}

/// A parsed operation: the field tree plus the keyword that was skipped in front of it.
///
/// `keyword` is `None` when the skip was bypassed or the skipped run was a `{`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub keyword: Option<String>,
    pub tree: TreeNode,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryTreeParser {
    options: ParseOptions,
}

impl QueryTreeParser {
    pub fn new(options: ParseOptions) -> Self {
        QueryTreeParser { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn parse(&self, query: &str) -> Result<TreeNode, ParseError> {
        self.parse_operation(query).map(|operation| operation.tree)
    }

    pub fn parse_operation(&self, query: &str) -> Result<Operation, ParseError> {
        if query.len() > self.options.max_input_len {
            return Err(ParseError::InputTooLarge {
                len: query.len(),
                limit: self.options.max_input_len,
            });
        }

        let mut tokens = tokenize(query);
        let skipped = if self.options.skip_leading_keyword {
            skip_leading_keyword(&mut tokens)
        } else {
            None
        };
        let (keyword, enclosing) = match skipped {
            Some((Token::Identifier(keyword), _)) => (Some(keyword), None),
            Some((_, span)) => (None, Some(span.start)),
            None => (None, None),
        };

        let tree = self.build_root(&tokens, enclosing)?;
        log::debug!(
            "parsed operation '{}': {} nodes, depth {}",
            tree.name,
            tree.node_count(),
            tree.depth()
        );
        Ok(Operation { keyword, tree })
    }

    /// `enclosing` is the position of a skipped leading `{`, whose `}` must follow the root.
    fn build_root(
        &self,
        tokens: &[SpannedToken],
        enclosing: Option<usize>,
    ) -> Result<TreeNode, ParseError> {
        let (name, selection) = match (enclosing, tokens.first()) {
            (Some(open), None) => {
                return Err(ParseError::UnmatchedBrace {
                    brace: '{',
                    position: open,
                })
            }
            (Some(open), Some((Token::CloseBrace, _))) => {
                return Err(ParseError::EmptySelection { position: open })
            }
            _ => match extract_root_name(tokens)? {
                Some(root) => root,
                None => {
                    log::debug!("empty query, using placeholder root");
                    return Ok(TreeNode::leaf(DEFAULT_ROOT_NAME));
                }
            },
        };

        let mut root = TreeNode::leaf(name);
        let rest = match tokens.get(selection) {
            Some((Token::OpenBrace, span)) => {
                let builder = TreeBuilder::new(self.options.max_depth);
                let (children, close) =
                    builder.build_level(tokens, selection + 1, span.start, 1)?;
                root.children = children;
                close + 1
            }
            _ => selection,
        };
        let rest = match (enclosing, tokens.get(rest)) {
            (None, _) => rest,
            (Some(_), Some((Token::CloseBrace, _))) => rest + 1,
            (Some(open), None) => {
                return Err(ParseError::UnmatchedBrace {
                    brace: '{',
                    position: open,
                })
            }
            (Some(_), Some((_, span))) => {
                return Err(ParseError::TrailingInput {
                    position: span.start,
                })
            }
        };

        match tokens.get(rest) {
            None => Ok(root),
            Some((Token::CloseBrace, span)) => Err(ParseError::UnmatchedBrace {
                brace: '}',
                position: span.start,
            }),
            Some((_, span)) => Err(ParseError::TrailingInput {
                position: span.start,
            }),
        }
    }
}

/// Root name and the index of the token after it.
///
/// An anonymous selection gets [DEFAULT_ROOT_NAME] and keeps its `{` at index 0, exactly as
/// if the placeholder had been inserted in front of it.
fn extract_root_name(tokens: &[SpannedToken]) -> Result<Option<(String, usize)>, ParseError> {
    match tokens.first() {
        None => Ok(None),
        Some((Token::OpenBrace, _)) => Ok(Some((DEFAULT_ROOT_NAME.to_string(), 0))),
        Some((Token::Identifier(name), _)) => Ok(Some((name.clone(), 1))),
        Some((Token::CloseBrace, span)) => Err(ParseError::UnmatchedBrace {
            brace: '}',
            position: span.start,
        }),
    }
}

/// Parse with default options.
pub fn parse(query: &str) -> Result<TreeNode, ParseError> {
    QueryTreeParser::default().parse(query)
}

/// Parse with default options, keeping the skipped keyword.
pub fn parse_operation(query: &str) -> Result<Operation, ParseError> {
    QueryTreeParser::default().parse_operation(query)
}
