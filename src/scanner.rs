use crate::config::ScannerConfig;
use crate::cursor::{Cursor, StrCursor};
use crate::delimiter::DelimiterTracker;
use crate::error::{ScanError, ScanErrorKind};
use crate::token::{Token, TokenKind, ValidSymbols};
use crate::{heredoc, resolver, word};

/// External scanner for the tokens a shell grammar cannot decide on its
/// own.
///
/// The only state carried between calls is the delimiter of the open
/// heredoc. Hosts that backtrack save it with [`Scanner::serialize`]
/// and put it back with [`Scanner::deserialize`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scanner {
    delimiter: DelimiterTracker,
}

impl Scanner {
    /// A scanner with no heredoc open and unbounded serialization.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_config(config: ScannerConfig) -> Self {
        Self {
            delimiter: DelimiterTracker::new(config.serialization_capacity),
        }
    }

    /// Delimiter of the open heredoc; empty when none is open.
    #[must_use]
    pub fn delimiter(&self) -> &str {
        self.delimiter.get()
    }

    /// Produce one of the `valid` kinds at the cursor, or `None`.
    ///
    /// On success the cursor has advanced past the token. On failure
    /// the cursor may have advanced too: a word that turns out to be
    /// neither a file descriptor nor a variable name stays consumed.
    pub fn scan<C: Cursor + ?Sized>(&mut self, cursor: &mut C, valid: ValidSymbols) -> Option<TokenKind> {
        self.try_scan(cursor, valid)
            .inspect_err(|err| tracing::trace!(%err, "scan declined"))
            .ok()
    }

    /// Like [`Scanner::scan`], reporting why a scan declined.
    ///
    /// # Errors
    ///
    /// Returns `ScanError` when no requested kind can be produced at
    /// the cursor.
    pub fn try_scan<C: Cursor + ?Sized>(
        &mut self,
        cursor: &mut C,
        valid: ValidSymbols,
    ) -> Result<TokenKind, ScanError> {
        if let Some(kind) = resolver::resolve(&*cursor, valid) {
            tracing::trace!(?kind, "resolved zero-width token");
            return Ok(kind);
        }

        let content = ValidSymbols::HEREDOC_MIDDLE | ValidSymbols::HEREDOC_END;
        if valid.contains(content) && self.delimiter.is_open() {
            let kind = heredoc::scan_content(
                cursor,
                &mut self.delimiter,
                TokenKind::HeredocMiddle,
                TokenKind::HeredocEnd,
                false,
            )?;
            tracing::trace!(?kind, "scanned heredoc content");
            return Ok(kind);
        }

        let beginning = ValidSymbols::HEREDOC_BEGINNING | ValidSymbols::SIMPLE_HEREDOC;
        if valid.contains(beginning) {
            let kind = heredoc::scan_beginning(cursor, &mut self.delimiter)?;
            tracing::trace!(?kind, "scanned heredoc beginning");
            return Ok(kind);
        }

        if valid.intersects(ValidSymbols::VARIABLE_NAME | ValidSymbols::FILE_DESCRIPTOR) {
            let kind = word::scan_word(cursor, valid)?;
            tracing::trace!(?kind, "classified word");
            return Ok(kind);
        }

        Err(ScanError::new(ScanErrorKind::NotRequested, cursor.position()))
    }

    /// Scan from a [`StrCursor`] and return the token with its text.
    ///
    /// # Errors
    ///
    /// Returns `ScanError` when no requested kind can be produced at
    /// the cursor.
    pub fn scan_token(&mut self, cursor: &mut StrCursor<'_>, valid: ValidSymbols) -> Result<Token, ScanError> {
        cursor.begin_token();
        let kind = self.try_scan(cursor, valid)?;
        Ok(cursor.token(kind))
    }

    /// Clear per-parse state. The delimiter is covered by
    /// serialization, so there is nothing to do.
    #[allow(clippy::unused_self)]
    pub const fn reset(&mut self) {}

    /// Snapshot the scanner state.
    #[must_use]
    pub fn serialize(&self) -> Vec<u8> {
        self.delimiter.save()
    }

    /// Restore a snapshot taken with [`Scanner::serialize`]. An empty
    /// buffer restores the initial state.
    pub fn deserialize(&mut self, bytes: &[u8]) {
        self.delimiter.restore(bytes);
    }
}
