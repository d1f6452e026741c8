//! Heredoc delimiter state and its byte encoding.
//!
//! The encoding is the delimiter's UTF-8 bytes with no framing; the
//! host stores the length alongside the buffer.

/// The terminator word of the open heredoc, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DelimiterTracker {
    delimiter: String,
    capacity: Option<usize>,
}

impl DelimiterTracker {
    /// Empty tracker. `capacity` bounds [`DelimiterTracker::save`].
    #[must_use]
    pub const fn new(capacity: Option<usize>) -> Self {
        Self {
            delimiter: String::new(),
            capacity,
        }
    }

    /// The current delimiter; empty when no heredoc is open.
    #[must_use]
    pub fn get(&self) -> &str {
        &self.delimiter
    }

    /// Whether a heredoc body is being scanned.
    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.delimiter.is_empty()
    }

    pub(crate) fn push(&mut self, ch: char) {
        self.delimiter.push(ch);
    }

    pub(crate) fn clear(&mut self) {
        self.delimiter.clear();
    }

    /// Encode the delimiter.
    ///
    /// With a capacity bound, at most `capacity - 1` bytes are written;
    /// longer delimiters are cut back to the last character boundary
    /// that fits.
    #[must_use]
    pub fn save(&self) -> Vec<u8> {
        let bytes = self.delimiter.as_bytes();
        let Some(capacity) = self.capacity else {
            return bytes.to_vec();
        };
        if bytes.is_empty() || bytes.len() < capacity {
            return bytes.to_vec();
        }

        let mut end = capacity.saturating_sub(1);
        while !self.delimiter.is_char_boundary(end) {
            end -= 1;
        }
        tracing::warn!(
            delimiter_len = bytes.len(),
            capacity,
            kept = end,
            "heredoc delimiter truncated on serialize"
        );
        bytes[..end].to_vec()
    }

    /// Replace the delimiter with the decoded `bytes`. Invalid UTF-8 is
    /// replaced rather than rejected.
    pub fn restore(&mut self, bytes: &[u8]) {
        self.delimiter.clear();
        self.delimiter.push_str(&String::from_utf8_lossy(bytes));
    }
}
