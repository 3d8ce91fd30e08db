//! Lexer
//!
//! This module turns an operation string into the flat token stream the tree builder consumes.
//!
//! Structure:
//!     1. Base tokenization with logos ./lexing/base_tokenization.rs. Whitespace, argument
//!        lists, closing braces and text become raw lexemes.
//!     2. Run assembly ./lexing/runs.rs. Text pieces separated only by argument lists are
//!        glued into runs; runs are classified as identifiers or opening braces.
//!     3. Leading keyword removal ([skip_leading_keyword]). Operations start with `query`,
//!        `mutation` or `subscription`, which is not part of the field tree. The first run is
//!        dropped whatever it is, so a shorthand `{ users { id } }` loses its opening brace.
//!
//! Step 3 is kept separate from [tokenize] so it can be bypassed for inputs that omit the
//! keyword.

pub mod base_tokenization;
pub mod runs;

use crate::kensa::token::{SpannedToken, Token};

/// Tokenize an operation string into classified tokens with byte spans.
///
/// The leading keyword is NOT removed here; see [skip_leading_keyword].
pub fn tokenize(source: &str) -> Vec<SpannedToken> {
    let lexemes = base_tokenization::tokenize(source);
    let tokens = runs::assemble(source, &lexemes);
    log::trace!(
        "tokenized {} bytes into {} lexemes, {} tokens",
        source.len(),
        lexemes.len(),
        tokens.len()
    );
    tokens
}

/// Drop the first run (an identifier or `{`) from the front of a token stream and return it.
///
/// A leading `}` is never a run; it stays for the parser to report.
pub fn skip_leading_keyword(tokens: &mut Vec<SpannedToken>) -> Option<SpannedToken> {
    match tokens.first() {
        Some((Token::Identifier(_) | Token::OpenBrace, _)) => {
            let skipped = tokens.remove(0);
            log::debug!("skipping leading keyword '{}'", skipped.0);
            Some(skipped)
        }
        _ => None,
    }
}
