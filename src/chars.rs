//! Closed character classes used by the scanner.
//!
//! All classes are ASCII-only and independent of locale.

/// Letters and underscore: heredoc delimiters and the non-numeric part
/// of words.
pub const fn is_identifier(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

pub const fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Space, tab, newline, vertical tab, form feed, carriage return.
pub const fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Characters that separate word parts, so no concatenation boundary
/// can sit before them.
pub const fn ends_word(ch: char) -> bool {
    is_whitespace(ch) || matches!(ch, '>' | '<' | ')' | '(' | '[' | ']' | '}' | ';' | '&' | '`')
}

/// End of input, or a NUL the host uses to signal it.
pub const fn is_end(ch: Option<char>) -> bool {
    matches!(ch, None | Some('\0'))
}
