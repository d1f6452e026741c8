use crate::token::{Span, Token, TokenKind};

/// Input cursor the scanner reads through.
///
/// The cursor never rewinds. Characters passed with [`Cursor::advance`]
/// become part of the token being scanned; characters passed with
/// [`Cursor::skip`] before the first advance are treated as leading
/// whitespace and excluded from it.
pub trait Cursor {
    /// The next character, or `None` at end of input.
    fn lookahead(&self) -> Option<char>;

    /// Consume the lookahead character into the current token.
    fn advance(&mut self);

    /// Consume the lookahead character as leading whitespace.
    fn skip(&mut self);

    /// Location of the lookahead character.
    fn position(&self) -> Span;
}

/// String-backed [`Cursor`] with line/column tracking.
///
/// Cloning is cheap and gives callers a snapshot to fall back to when
/// a scan declines after consuming input.
#[derive(Debug, Clone)]
pub struct StrCursor<'a> {
    input: &'a str,
    pos: usize,
    start: usize,
    start_span: Span,
    line: usize,
    col: usize,
}

impl<'a> StrCursor<'a> {
    /// Create a cursor at the start of `input`, skipping a UTF-8 byte
    /// order mark if present.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        let start = if input.starts_with('\u{FEFF}') {
            '\u{FEFF}'.len_utf8()
        } else {
            0
        };
        let span = Span { line: 1, column: 1 };
        Self {
            input,
            pos: start,
            start,
            start_span: span,
            line: 1,
            col: 1,
        }
    }

    /// Byte offset of the lookahead character.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.pos
    }

    /// Whether every character has been consumed.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Input not yet consumed.
    #[must_use]
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Text covered by the current token.
    #[must_use]
    pub fn token_text(&self) -> &'a str {
        &self.input[self.start..self.pos]
    }

    /// Package the current token as `kind`.
    #[must_use]
    pub fn token(&self, kind: TokenKind) -> Token {
        Token {
            kind,
            text: self.token_text().to_string(),
            span: self.start_span,
        }
    }

    /// Start a new token at the lookahead position.
    pub const fn begin_token(&mut self) {
        self.start = self.pos;
        self.start_span = Span {
            line: self.line,
            column: self.col,
        };
    }

    /// Consume `text` verbatim, as a host does for tokens it matches
    /// itself. Returns `false` (consuming nothing) if the input does
    /// not continue with `text`.
    pub fn consume(&mut self, text: &str) -> bool {
        if !self.rest().starts_with(text) {
            return false;
        }
        for _ in text.chars() {
            self.bump();
        }
        self.begin_token();
        true
    }

    fn bump(&mut self) {
        let Some(ch) = self.lookahead() else {
            return;
        };
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        self.pos += ch.len_utf8();
    }
}

impl Cursor for StrCursor<'_> {
    fn lookahead(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn advance(&mut self) {
        self.bump();
    }

    fn skip(&mut self) {
        let leading = self.start == self.pos;
        self.bump();
        if leading {
            self.begin_token();
        }
    }

    fn position(&self) -> Span {
        Span {
            line: self.line,
            column: self.col,
        }
    }
}
