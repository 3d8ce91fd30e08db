//! Run assembly
//!
//!     Turns the raw lexeme stream into classified tokens. A run is everything between two
//!     delimiters (whitespace, `}`, end of input), minus any argument lists inside it:
//!
//!         username(username: $u)      -> Identifier("username")
//!         a(x)b                       -> Identifier("ab")
//!         {                           -> OpenBrace
//!         a{                          -> Identifier("a{")
//!
//!     The span of a run covers its first to its last character, argument lists included.
//!     A run made only of argument lists produces no token.

use super::base_tokenization::Lexeme;
use crate::kensa::token::{SpannedToken, Token};
use std::ops::Range;

#[derive(Default)]
struct PendingRun {
    text: String,
    span: Option<Range<usize>>,
}

impl PendingRun {
    fn push_text(&mut self, text: &str, span: Range<usize>) {
        self.text.push_str(text);
        self.extend(span);
    }

    fn extend(&mut self, span: Range<usize>) {
        self.span = Some(match self.span.take() {
            Some(current) => current.start..span.end,
            None => span,
        });
    }

    fn flush(&mut self, tokens: &mut Vec<SpannedToken>) {
        let text = std::mem::take(&mut self.text);
        let span = self.span.take();
        if text.is_empty() {
            return;
        }
        if let Some(span) = span {
            tokens.push((classify(text), span));
        }
    }
}

fn classify(text: String) -> Token {
    if text == "{" {
        Token::OpenBrace
    } else {
        Token::Identifier(text)
    }
}

/// Assemble lexemes into spanned tokens.
pub fn assemble(source: &str, lexemes: &[(Lexeme, Range<usize>)]) -> Vec<SpannedToken> {
    let mut tokens = Vec::new();
    let mut run = PendingRun::default();

    for (lexeme, span) in lexemes {
        match lexeme {
            Lexeme::Text => run.push_text(&source[span.clone()], span.clone()),
            // Arguments are dropped but do not end the run
            Lexeme::Arguments => {
                if !run.text.is_empty() {
                    run.extend(span.clone());
                }
            }
            Lexeme::Whitespace => run.flush(&mut tokens),
            Lexeme::CloseBrace => {
                run.flush(&mut tokens);
                tokens.push((Token::CloseBrace, span.clone()));
            }
        }
    }
    run.flush(&mut tokens);

    tokens
}
