//! Error types for identifier indexing.

/// Errors raised at the identifier boundary.
///
/// Absence is never an error: lookups report `false` and prefix walks
/// simply make no visitor calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OidError {
    /// An identifier without a concrete algorithm was given to an operation
    /// that stores it.
    #[error("identifier has no hash algorithm")]
    UnspecifiedAlgorithm,

    /// The input contained something other than hexadecimal digits.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// A hex prefix was longer than the digest it abbreviates.
    #[error("hex prefix too long: {actual} digits, at most {max} allowed")]
    PrefixTooLong {
        /// Maximum number of hex digits for the requested algorithm.
        max: usize,
        /// Number of digits supplied.
        actual: usize,
    },

    /// Raw digest bytes did not match the algorithm's digest width.
    #[error("invalid digest length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Digest width of the algorithm.
        expected: usize,
        /// Length supplied.
        actual: usize,
    },

    /// Raw digest bytes of unspecified algorithm were wider than the
    /// widest supported digest.
    #[error("digest too long: {actual} bytes, at most {max} allowed")]
    DigestTooLong {
        /// Widest supported digest.
        max: usize,
        /// Length supplied.
        actual: usize,
    },

    /// An algorithm name did not match any supported algorithm.
    #[error("unknown hash algorithm: {0}")]
    UnknownAlgorithm(String),
}

/// Convenience alias for identifier results.
pub type OidResult<T> = Result<T, OidError>;
