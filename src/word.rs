//! File-descriptor numbers and assignment targets.
//!
//! `2>` and `x=` both start with a bare word; only the character after
//! the word tells them apart. The word is consumed before that
//! character is inspected, so a declined scan leaves the cursor past
//! the word. Callers that want to retry from the word's start must
//! snapshot their cursor first.

use crate::chars;
use crate::cursor::Cursor;
use crate::error::{ScanError, ScanErrorKind};
use crate::token::{TokenKind, ValidSymbols};

/// Scan a word of digits, letters, and underscores and classify it by
/// the character that follows.
pub fn scan_word<C: Cursor + ?Sized>(
    cursor: &mut C,
    valid: ValidSymbols,
) -> Result<TokenKind, ScanError> {
    skip_separators(cursor, valid)?;

    let mut word = String::new();
    let mut numeric = true;
    while let Some(ch) = cursor.lookahead() {
        if !chars::is_digit(ch) && !chars::is_identifier(ch) {
            break;
        }
        numeric &= chars::is_digit(ch);
        word.push(ch);
        cursor.advance();
    }

    if word.is_empty() {
        return Err(ScanError::new(
            ScanErrorKind::NotAWord(cursor.lookahead()),
            cursor.position(),
        ));
    }

    let next = cursor.lookahead();
    if numeric && valid.requests(TokenKind::FileDescriptor) && matches!(next, Some('>' | '<')) {
        return Ok(TokenKind::FileDescriptor);
    }
    if valid.requests(TokenKind::VariableName) && matches!(next, Some('=' | '[')) {
        return Ok(TokenKind::VariableName);
    }

    Err(ScanError::new(
        ScanErrorKind::UnclassifiedWord { word },
        cursor.position(),
    ))
}

/// Skip blanks, line continuations, and (when the grammar is not
/// waiting for one) newlines.
fn skip_separators<C: Cursor + ?Sized>(cursor: &mut C, valid: ValidSymbols) -> Result<(), ScanError> {
    let newline_requested = valid.requests(TokenKind::Newline);
    loop {
        match cursor.lookahead() {
            Some(' ' | '\t') => cursor.skip(),
            Some('\n') if !newline_requested => cursor.skip(),
            Some('\\') => {
                cursor.skip();
                if cursor.lookahead() != Some('\n') {
                    return Err(ScanError::new(
                        ScanErrorKind::MalformedContinuation,
                        cursor.position(),
                    ));
                }
                cursor.skip();
            }
            _ => return Ok(()),
        }
    }
}
