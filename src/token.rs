use bitflags::bitflags;

/// Source location for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

/// Token kinds the scanner can be asked for.
///
/// Discriminants match the host grammar's external-token order, so a
/// kind can be used directly as an index into a valid-symbols array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// Whole heredoc with no expansion in its body.
    SimpleHeredoc = 0,
    /// Heredoc start, up to the first `$` in the body.
    HeredocBeginning = 1,
    /// Heredoc body between two expansions.
    HeredocMiddle = 2,
    /// Heredoc body after the last expansion, through the terminator.
    HeredocEnd = 3,
    /// Numeral directly before `>` or `<`.
    FileDescriptor = 4,
    /// Zero-width marker for an expansion that evaluates to nothing.
    EmptyValue = 5,
    /// Zero-width marker joining two adjacent word parts.
    Concat = 6,
    /// Assignment target directly before `=` or `[`.
    VariableName = 7,
    /// Line terminator. Consulted, never produced.
    Newline = 8,
}

impl TokenKind {
    /// All kinds in discriminant order.
    pub const ALL: [Self; 9] = [
        Self::SimpleHeredoc,
        Self::HeredocBeginning,
        Self::HeredocMiddle,
        Self::HeredocEnd,
        Self::FileDescriptor,
        Self::EmptyValue,
        Self::Concat,
        Self::VariableName,
        Self::Newline,
    ];

    /// The single-member set for this kind.
    #[must_use]
    pub const fn symbol(self) -> ValidSymbols {
        ValidSymbols::from_bits_truncate(1 << self as u16)
    }
}

bitflags! {
    /// Token kinds acceptable at the current grammar position.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ValidSymbols: u16 {
        const SIMPLE_HEREDOC    = 1 << 0;
        const HEREDOC_BEGINNING = 1 << 1;
        const HEREDOC_MIDDLE    = 1 << 2;
        const HEREDOC_END       = 1 << 3;
        const FILE_DESCRIPTOR   = 1 << 4;
        const EMPTY_VALUE       = 1 << 5;
        const CONCAT            = 1 << 6;
        const VARIABLE_NAME     = 1 << 7;
        const NEWLINE           = 1 << 8;
    }
}

impl ValidSymbols {
    /// Build a set from the host's boolean array, indexed by
    /// [`TokenKind`] discriminant. Extra trailing entries are ignored.
    #[must_use]
    pub fn from_slice(valid: &[bool]) -> Self {
        TokenKind::ALL
            .iter()
            .zip(valid)
            .filter(|(_, requested)| **requested)
            .fold(Self::empty(), |set, (kind, _)| set | kind.symbol())
    }

    /// Whether `kind` is requested.
    #[must_use]
    pub const fn requests(self, kind: TokenKind) -> bool {
        self.contains(kind.symbol())
    }
}

impl From<TokenKind> for ValidSymbols {
    fn from(kind: TokenKind) -> Self {
        kind.symbol()
    }
}

/// A scanned token with its kind, covered text, and source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}
