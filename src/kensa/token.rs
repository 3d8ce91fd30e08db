//! Classified tokens produced by the lexing stage.
//!
//!     The parser only cares about field nesting, so a query collapses into three kinds of
//!     tokens: identifiers, opening braces and closing braces. Everything else in the source
//!     (argument lists, whitespace) is consumed during lexing and never reaches the parser.
//!
//!     Tokens travel with the byte range they cover in the source, the same way the raw
//!     logos lexemes do. Ranges are what error positions are reported against.

use std::fmt;
use std::ops::Range;

/// A token paired with its byte range in the source.
pub type SpannedToken = (Token, Range<usize>);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// A field or operation name.
    Identifier(String),
    /// A run consisting of exactly `{`.
    OpenBrace,
    /// A `}` character.
    CloseBrace,
}

impl Token {
    pub fn is_identifier(&self) -> bool {
        matches!(self, Token::Identifier(_))
    }

    /// The identifier text, if this is an identifier.
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Token::Identifier(name) => Some(name),
            _ => None,
        }
    }

    /// Short name used by the `tokens` CLI output and in debug logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Token::Identifier(_) => "Identifier",
            Token::OpenBrace => "OpenBrace",
            Token::CloseBrace => "CloseBrace",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Identifier(name) => write!(f, "{}", name),
            Token::OpenBrace => write!(f, "{{"),
            Token::CloseBrace => write!(f, "}}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_round_trips_source_text() {
        assert_eq!(Token::Identifier("projects".to_string()).to_string(), "projects");
        assert_eq!(Token::OpenBrace.to_string(), "{");
        assert_eq!(Token::CloseBrace.to_string(), "}");
    }

    #[test]
    fn test_identifier_accessor() {
        let token = Token::Identifier("id".to_string());
        assert!(token.is_identifier());
        assert_eq!(token.identifier(), Some("id"));
        assert_eq!(Token::OpenBrace.identifier(), None);
        assert!(!Token::CloseBrace.is_identifier());
    }
}
