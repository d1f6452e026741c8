//! Context-sensitive external scanner for a shell grammar.
//!
//! A context-free grammar cannot tell where a heredoc body ends, or
//! whether `2` in `2>file` is a file descriptor while `x` in `x=1` is
//! an assignment target. The host parser asks a [`Scanner`] for these
//! tokens at the grammar positions that need them, passing the set of
//! kinds it would accept.
//!
//! # Quick start
//!
//! ```
//! use shell_token_scanner::{Scanner, StrCursor, TokenKind, ValidSymbols};
//!
//! let mut scanner = Scanner::new();
//! let mut cursor = StrCursor::new("2>/dev/null");
//! let kind = scanner.scan(&mut cursor, ValidSymbols::FILE_DESCRIPTOR);
//! assert_eq!(kind, Some(TokenKind::FileDescriptor));
//! assert_eq!(cursor.rest(), ">/dev/null");
//! ```
//!
//! ## Heredocs and backtracking
//!
//! ```
//! use shell_token_scanner::{Scanner, StrCursor, TokenKind, ValidSymbols};
//!
//! let mut scanner = Scanner::new();
//! // The host has consumed `cat <<` and asks for the body.
//! let mut cursor = StrCursor::new("EOF\nHello $USER\nEOF\n");
//! let valid = ValidSymbols::HEREDOC_BEGINNING | ValidSymbols::SIMPLE_HEREDOC;
//! assert_eq!(scanner.scan(&mut cursor, valid), Some(TokenKind::HeredocBeginning));
//! assert_eq!(scanner.delimiter(), "EOF");
//!
//! let snapshot = scanner.serialize();
//! let mut fresh = Scanner::new();
//! fresh.deserialize(&snapshot);
//! assert_eq!(fresh, scanner);
//! ```

#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

mod chars;
pub mod config;
pub mod cursor;
pub mod delimiter;
pub mod error;
pub mod heredoc;
pub mod resolver;
pub mod scanner;
pub mod token;
pub mod word;

pub use config::{HOST_SERIALIZATION_BUFFER_SIZE, ScannerConfig};
pub use cursor::{Cursor, StrCursor};
pub use delimiter::DelimiterTracker;
pub use error::{ScanError, ScanErrorKind};
pub use scanner::Scanner;
pub use token::{Span, Token, TokenKind, ValidSymbols};
