//! Zero-width tokens decided from a single lookahead character.

use crate::chars;
use crate::cursor::Cursor;
use crate::token::{TokenKind, ValidSymbols};

/// Try a concatenation boundary, then an empty value. Never consumes
/// input.
#[must_use]
pub fn resolve<C: Cursor + ?Sized>(cursor: &C, valid: ValidSymbols) -> Option<TokenKind> {
    let lookahead = cursor.lookahead();

    if valid.requests(TokenKind::Concat) && is_concat_boundary(lookahead) {
        return Some(TokenKind::Concat);
    }

    if valid.requests(TokenKind::EmptyValue) && lookahead.is_some_and(chars::is_whitespace) {
        return Some(TokenKind::EmptyValue);
    }

    None
}

/// A word part continues at `lookahead` with no separator.
fn is_concat_boundary(lookahead: Option<char>) -> bool {
    !chars::is_end(lookahead) && lookahead.is_some_and(|ch| !chars::ends_word(ch))
}
