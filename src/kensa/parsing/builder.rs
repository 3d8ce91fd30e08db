//! Recursive tree construction over a flat token stream.
//!
//!     Each call handles one selection level. Identifiers become sibling leaves; a `{` hands
//!     the rest of the stream to a nested call whose result becomes the children of the most
//!     recent sibling; a `}` ends the level. Index positions are passed and returned
//!     explicitly, so a level reports where it stopped and the caller resumes right after.

use super::error::ParseError;
use crate::kensa::token::{SpannedToken, Token};
use crate::kensa::tree::TreeNode;

pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Hard ceiling on the nesting limit. Each level is one stack frame of [TreeBuilder].
pub const MAX_DEPTH_CEILING: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeBuilder {
    max_depth: usize,
}

impl TreeBuilder {
    /// Limits above [MAX_DEPTH_CEILING] are lowered to it.
    pub fn new(max_depth: usize) -> Self {
        if max_depth > MAX_DEPTH_CEILING {
            log::warn!(
                "max_depth {} lowered to the ceiling of {}",
                max_depth,
                MAX_DEPTH_CEILING
            );
        }
        TreeBuilder {
            max_depth: max_depth.min(MAX_DEPTH_CEILING),
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Build the selection that starts at `start`, where `tokens[start - 1]` is its `{`.
    ///
    /// Returns the siblings of that level and the index of the `}` closing it. A level must
    /// hold at least one field.
    pub fn build(
        &self,
        tokens: &[SpannedToken],
        start: usize,
    ) -> Result<(Vec<TreeNode>, usize), ParseError> {
        let open = start
            .checked_sub(1)
            .and_then(|i| tokens.get(i))
            .map(|(_, span)| span.start)
            .unwrap_or(0);
        self.build_level(tokens, start, open, 1)
    }

    pub(crate) fn build_level(
        &self,
        tokens: &[SpannedToken],
        start: usize,
        open: usize,
        depth: usize,
    ) -> Result<(Vec<TreeNode>, usize), ParseError> {
        if depth > self.max_depth {
            return Err(ParseError::DepthLimitExceeded {
                limit: self.max_depth,
                position: open,
            });
        }

        let mut siblings: Vec<TreeNode> = Vec::new();
        // A `{` is only valid right after a field name
        let mut after_field = false;
        let mut index = start;

        while index < tokens.len() {
            let (token, span) = &tokens[index];
            match token {
                Token::Identifier(name) => {
                    siblings.push(TreeNode::leaf(name.as_str()));
                    after_field = true;
                }
                Token::OpenBrace => {
                    let parent = match siblings.last_mut() {
                        Some(parent) if after_field => parent,
                        _ => {
                            return Err(ParseError::MisplacedSelection {
                                position: span.start,
                            })
                        }
                    };
                    let (children, close) =
                        self.build_level(tokens, index + 1, span.start, depth + 1)?;
                    parent.children = children;
                    after_field = false;
                    index = close;
                }
                Token::CloseBrace if siblings.is_empty() => {
                    return Err(ParseError::EmptySelection { position: open })
                }
                Token::CloseBrace => return Ok((siblings, index)),
            }
            index += 1;
        }

        Err(ParseError::UnmatchedBrace {
            brace: '{',
            position: open,
        })
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        TreeBuilder::new(DEFAULT_MAX_DEPTH)
    }
}

/// Build one selection level with the default depth limit. See [TreeBuilder::build].
pub fn build_tree(
    tokens: &[SpannedToken],
    start: usize,
) -> Result<(Vec<TreeNode>, usize), ParseError> {
    TreeBuilder::default().build(tokens, start)
}
