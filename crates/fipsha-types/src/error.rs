use std::io;

/// Broad classification of a [`DigestError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad caller input or an unreadable stream. Recoverable.
    Input,
    /// A buffer the computation depends on could not be allocated.
    Resource,
    /// A programming fault inside the engine. Never reachable from valid input.
    Internal,
}

/// Digest engine errors.
#[derive(Debug, thiserror::Error)]
pub enum DigestError {
    // Input errors
    #[error("bit length {bits} exceeds buffer of {available} bytes")]
    BitLengthOverflow { bits: u64, available: usize },
    #[error("invalid hex digest length: expected {expected}, got {got}")]
    InvalidHexLength { expected: usize, got: usize },
    #[error("invalid hex digest character {ch:?} at offset {offset}")]
    InvalidHexChar { ch: char, offset: usize },
    #[error("unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),
    #[error("failed to open {path}: {source}")]
    FileOpen {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("message stream failed earlier; no digest is available")]
    SourceFailed,

    // Resource errors
    #[error("memory allocation failed")]
    MemAllocFail,

    // Internal errors
    #[error("internal invariant violation: {0}")]
    InternalInvariantViolation(&'static str),
    #[error("known-answer self-test failed: {0}")]
    KatFailure(String),
    #[error("self-test module is not operational")]
    InvalidState,
}

impl DigestError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DigestError::BitLengthOverflow { .. }
            | DigestError::InvalidHexLength { .. }
            | DigestError::InvalidHexChar { .. }
            | DigestError::UnsupportedAlgorithm(_)
            | DigestError::FileOpen { .. }
            | DigestError::Io(_)
            | DigestError::SourceFailed => ErrorKind::Input,
            DigestError::MemAllocFail => ErrorKind::Resource,
            DigestError::InternalInvariantViolation(_)
            | DigestError::KatFailure(_)
            | DigestError::InvalidState => ErrorKind::Internal,
        }
    }

    /// Returns true for engine faults that valid input must never trigger.
    pub fn is_internal(&self) -> bool {
        self.kind() == ErrorKind::Internal
    }
}
