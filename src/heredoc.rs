//! Heredoc bodies.
//!
//! A body is split at every `$` so the grammar can tokenize the
//! expansion itself. Content before the first `$` is the beginning
//! token, content between expansions is a middle token, and the rest
//! through the terminator line is the end token. A body with no `$`
//! at all is a single simple-heredoc token.

use crate::chars;
use crate::cursor::Cursor;
use crate::delimiter::DelimiterTracker;
use crate::error::{ScanError, ScanErrorKind};
use crate::token::TokenKind;

/// Scan the delimiter word after `<<` and as much of the body as can be
/// taken before the first `$`.
///
/// Produces [`TokenKind::SimpleHeredoc`] when the body closes (or input
/// ends) with no expansion, otherwise [`TokenKind::HeredocBeginning`]
/// with the heredoc left open.
pub fn scan_beginning<C: Cursor + ?Sized>(
    cursor: &mut C,
    delimiter: &mut DelimiterTracker,
) -> Result<TokenKind, ScanError> {
    delimiter.clear();
    while let Some(ch) = cursor.lookahead().filter(|&ch| chars::is_identifier(ch)) {
        delimiter.push(ch);
        cursor.advance();
    }

    if !delimiter.is_open() {
        return Err(ScanError::new(
            ScanErrorKind::EmptyHeredocDelimiter,
            cursor.position(),
        ));
    }

    if cursor.lookahead() != Some('\n') {
        let kind = ScanErrorKind::MissingHeredocNewline {
            delimiter: delimiter.get().to_string(),
        };
        delimiter.clear();
        return Err(ScanError::new(kind, cursor.position()));
    }
    cursor.advance();
    tracing::debug!(delimiter = delimiter.get(), "heredoc opened");

    if at_terminator(cursor, delimiter.get()) {
        close(delimiter);
        return Ok(TokenKind::SimpleHeredoc);
    }

    scan_content(
        cursor,
        delimiter,
        TokenKind::HeredocBeginning,
        TokenKind::SimpleHeredoc,
        true,
    )
}

/// Scan body content up to the next `$`, the terminator line, or end of
/// input.
///
/// Stopping at `$` yields `middle`; reaching the terminator or end of
/// input yields `end` and closes the heredoc. Stopping at `$` before
/// any progress (including `progressed` from the caller) is a failure.
pub fn scan_content<C: Cursor + ?Sized>(
    cursor: &mut C,
    delimiter: &mut DelimiterTracker,
    middle: TokenKind,
    end: TokenKind,
    mut progressed: bool,
) -> Result<TokenKind, ScanError> {
    loop {
        let lookahead = cursor.lookahead();
        if chars::is_end(lookahead) {
            close(delimiter);
            return Ok(end);
        }

        match lookahead {
            Some('$') => {
                if progressed {
                    return Ok(middle);
                }
                return Err(ScanError::new(ScanErrorKind::NoProgress, cursor.position()));
            }
            Some('\n') => {
                progressed = true;
                cursor.advance();
                if at_terminator(cursor, delimiter.get()) {
                    close(delimiter);
                    return Ok(end);
                }
            }
            _ => {
                progressed = true;
                cursor.advance();
            }
        }
    }
}

/// Consume the leading identifier of a line and report whether the line
/// is exactly `delimiter`. The word stays consumed either way.
fn at_terminator<C: Cursor + ?Sized>(cursor: &mut C, delimiter: &str) -> bool {
    let mut leading_word = String::new();
    while let Some(ch) = cursor.lookahead().filter(|&ch| chars::is_identifier(ch)) {
        leading_word.push(ch);
        cursor.advance();
    }
    leading_word == delimiter && matches!(cursor.lookahead(), None | Some('\n' | '\0'))
}

fn close(delimiter: &mut DelimiterTracker) {
    tracing::debug!(delimiter = delimiter.get(), "heredoc closed");
    delimiter.clear();
}
