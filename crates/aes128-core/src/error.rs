//! Error taxonomy for the encryption core.

use thiserror::Error;

/// Errors reported by the AES-128 core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The key material was not exactly 16 bytes.
    #[error("AES-128 key must be 16 bytes, got {actual}")]
    InvalidKeyLength {
        /// Number of key bytes supplied.
        actual: usize,
    },

    /// The plaintext exceeds the configured maximum buffer size.
    #[error("plaintext of {len} bytes exceeds the configured maximum of {max} bytes")]
    InputTooLarge {
        /// Plaintext length in bytes.
        len: usize,
        /// Configured limit in bytes.
        max: usize,
    },

    /// A check that fixed AES-128 parameters should make impossible failed.
    #[error("internal invariant violated: {0}")]
    InternalInvariantViolation(&'static str),
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_lengths() {
        let err = Error::InvalidKeyLength { actual: 7 };
        assert_eq!(err.to_string(), "AES-128 key must be 16 bytes, got 7");

        let err = Error::InputTooLarge { len: 33, max: 32 };
        assert!(err.to_string().contains("33"));
        assert!(err.to_string().contains("32"));
    }
}
