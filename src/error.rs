use std::fmt;

use crate::token::Span;

/// Classifies why a scan declined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanErrorKind {
    /// None of the requested kinds applies at this position.
    NotRequested,
    /// Backslash not followed by a newline while skipping to a word.
    MalformedContinuation,
    /// Heredoc content reached `$` without consuming anything.
    NoProgress,
    /// `<<` followed by something other than a letter or underscore.
    EmptyHeredocDelimiter,
    /// Heredoc delimiter word not followed by a newline.
    MissingHeredocNewline { delimiter: String },
    /// Character that cannot start a word.
    NotAWord(Option<char>),
    /// Word scanned but not followed by a redirection or assignment.
    UnclassifiedWord { word: String },
}

impl fmt::Display for ScanErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotRequested => {
                write!(f, "no requested token applies")
            }
            Self::MalformedContinuation => {
                write!(f, "backslash not followed by newline")
            }
            Self::NoProgress => {
                write!(f, "heredoc content stopped before consuming input")
            }
            Self::EmptyHeredocDelimiter => {
                write!(f, "empty heredoc delimiter")
            }
            Self::MissingHeredocNewline { delimiter } => {
                write!(
                    f,
                    "expected newline after heredoc \
                     delimiter: {delimiter}"
                )
            }
            Self::NotAWord(Some(ch)) => {
                write!(f, "character cannot start a word: {ch:?}")
            }
            Self::NotAWord(None) => {
                write!(f, "expected word, found end of input")
            }
            Self::UnclassifiedWord { word } => {
                write!(
                    f,
                    "word is neither a file descriptor \
                     nor a variable name: {word}"
                )
            }
        }
    }
}

/// Why [`Scanner::try_scan`](crate::Scanner::try_scan) produced no
/// token, and where the cursor stood when it gave up.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", span.line, span.column)]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub span: Span,
}

impl ScanError {
    pub(crate) const fn new(kind: ScanErrorKind, span: Span) -> Self {
        Self { kind, span }
    }
}
