#![allow(dead_code)]

use shell_token_scanner::{Scanner, StrCursor, Token, TokenKind, ValidSymbols};

/// Kinds a host requests where a heredoc body starts.
pub const HEREDOC_START: ValidSymbols =
    ValidSymbols::HEREDOC_BEGINNING.union(ValidSymbols::SIMPLE_HEREDOC);

/// Kinds a host requests inside an open heredoc body.
pub const HEREDOC_CONTENT: ValidSymbols =
    ValidSymbols::HEREDOC_MIDDLE.union(ValidSymbols::HEREDOC_END);

/// Kinds a host requests at the start of a simple command.
pub const COMMAND_START: ValidSymbols =
    ValidSymbols::FILE_DESCRIPTOR.union(ValidSymbols::VARIABLE_NAME);

/// Run one scan over `input` with a fresh scanner.
pub fn scan_once(input: &str, valid: ValidSymbols) -> Option<Token> {
    let mut scanner = Scanner::new();
    let mut cursor = StrCursor::new(input);
    scanner.scan_token(&mut cursor, valid).ok()
}

/// Drive a whole heredoc body the way a host would: request the start,
/// then alternate between content requests and consuming the `$`
/// expansion that stopped the scanner.
///
/// Expansions are treated as `$` followed by identifier characters.
/// Returns every token the scanner produced, and the unconsumed rest.
pub fn drive_heredoc<'a>(scanner: &mut Scanner, input: &'a str) -> (Vec<Token>, &'a str) {
    let mut cursor = StrCursor::new(input);
    let mut tokens = Vec::new();

    let first = scanner
        .scan_token(&mut cursor, HEREDOC_START)
        .unwrap_or_else(|e| panic!("heredoc start failed: {e}\n--- input ---\n{input}"));
    let mut done = first.kind == TokenKind::SimpleHeredoc;
    tokens.push(first);

    while !done {
        consume_expansion(&mut cursor);
        match scanner.scan_token(&mut cursor, HEREDOC_CONTENT) {
            Ok(token) => {
                done = token.kind == TokenKind::HeredocEnd;
                tokens.push(token);
            }
            // Two expansions back to back: nothing between them.
            Err(_) => assert!(
                cursor.rest().starts_with('$'),
                "content scan failed away from `$`: {:?}",
                cursor.rest()
            ),
        }
    }

    (tokens, cursor.rest())
}

fn consume_expansion(cursor: &mut StrCursor<'_>) {
    let rest = cursor.rest();
    assert!(rest.starts_with('$'), "expected `$`, got {rest:?}");
    let len = 1 + rest[1..]
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(rest.len() - 1);
    let expansion = &rest[..len];
    assert!(cursor.consume(expansion));
}

pub fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

pub fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.text.as_str()).collect()
}
