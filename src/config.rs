/// Size of the fixed serialization buffer tree-sitter style hosts hand
/// to an external scanner.
pub const HOST_SERIALIZATION_BUFFER_SIZE: usize = 1024;

/// Scanner construction options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScannerConfig {
    /// Upper bound on the serialized state, in bytes. `None` means the
    /// delimiter is always written in full.
    pub serialization_capacity: Option<usize>,
}

impl ScannerConfig {
    /// Unbounded serialization.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            serialization_capacity: None,
        }
    }

    /// Bound serialized state to `capacity` bytes, truncating longer
    /// delimiters on save.
    #[must_use]
    pub const fn with_serialization_capacity(mut self, capacity: usize) -> Self {
        self.serialization_capacity = Some(capacity);
        self
    }

    /// Bound serialized state to [`HOST_SERIALIZATION_BUFFER_SIZE`].
    #[must_use]
    pub const fn host_compatible(self) -> Self {
        self.with_serialization_capacity(HOST_SERIALIZATION_BUFFER_SIZE)
    }
}
