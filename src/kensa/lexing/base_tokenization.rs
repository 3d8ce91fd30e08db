//! Base tokenization implementation for the kensa lexer
//!
//! This module provides the raw tokenization using the logos lexer library.
//! This is the entry point where source strings become lexeme streams.
//!
//! Lexemes are finer grained than [Token](crate::kensa::token::Token)s: a single identifier
//! such as `username(id: 1)` arrives as `Text`, `Arguments`. Gluing pieces into runs is the
//! job of the [runs](super::runs) pass.

use logos::Logos;
use std::ops::Range;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lexeme {
    #[regex(r"[ \t\r\n\x0C]+")]
    Whitespace,

    /// `(` up to and including the first `)`, or to end of input when unterminated.
    #[regex(r"\([^)]*\)?")]
    Arguments,

    #[token("}")]
    CloseBrace,

    /// Anything else, `{` and stray `)` included.
    #[regex(r"[^ \t\r\n\x0C(}]+")]
    Text,
}

/// Tokenize source code with location information
///
/// Every byte of the source is covered by exactly one lexeme, so the spans are contiguous.
pub fn tokenize(source: &str) -> Vec<(Lexeme, Range<usize>)> {
    let mut lexer = Lexeme::lexer(source);
    let mut lexemes = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(lexeme) => lexemes.push((lexeme, lexer.span())),
            Err(()) => log::trace!("skipping unlexable input at {:?}", lexer.span()),
        }
    }

    lexemes
}
