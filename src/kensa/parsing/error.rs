//! Parse errors
//!
//! Positions are byte offsets into the original source string.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// An opening brace that is never closed, or a closing brace with no opener.
    #[error("unmatched '{brace}' at byte {position}")]
    UnmatchedBrace { brace: char, position: usize },

    /// A selection set that does not directly follow a field name.
    #[error("selection set at byte {position} does not follow a field name")]
    MisplacedSelection { position: usize },

    /// A selection set with no fields, e.g. `a { }`.
    #[error("empty selection set at byte {position}")]
    EmptySelection { position: usize },

    /// Tokens left over once the root selection is complete.
    #[error("unexpected input after the root selection at byte {position}")]
    TrailingInput { position: usize },

    #[error("selection nesting exceeds the limit of {limit} at byte {position}")]
    DepthLimitExceeded { limit: usize, position: usize },

    #[error("query is {len} bytes, larger than the limit of {limit}")]
    InputTooLarge { len: usize, limit: usize },
}

impl ParseError {
    /// Byte offset the error points at, when it has one.
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::UnmatchedBrace { position, .. }
            | ParseError::MisplacedSelection { position }
            | ParseError::EmptySelection { position }
            | ParseError::TrailingInput { position }
            | ParseError::DepthLimitExceeded { position, .. } => Some(*position),
            ParseError::InputTooLarge { .. } => None,
        }
    }
}
