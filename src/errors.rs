//! Error types.

use core::fmt;

/// Alias for [`core::result::Result`] with the `textbook-rsa` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A key file line was malformed, duplicated, or carried a non-positive value.
    #[error("parse error on line {line}: {reason}")]
    ParseError {
        /// 1-based line number in the key file.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// The key lacks a component required for the requested role.
    #[error("invalid {0} key")]
    InvalidKey(KeyRole),

    /// Reading or writing a key file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The randomness source could not be read.
    #[error("entropy source unavailable: {0}")]
    Entropy(#[from] rand_core::Error),

    /// The public exponent has no inverse modulo the totient of the generated primes.
    #[error("public exponent is not invertible for the generated primes")]
    KeyGeneration,

    /// The requested number of bits cannot be generated.
    #[error("invalid bit length {0}")]
    InvalidBitLength(usize),

    /// Re-encrypting a decrypted value did not reproduce the ciphertext.
    #[error("verification error")]
    Verification,
}

impl Error {
    pub(crate) fn parse(line: usize, reason: impl Into<String>) -> Self {
        Error::ParseError {
            line,
            reason: reason.into(),
        }
    }
}

/// The role a key is loaded or validated for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyRole {
    /// Needs `e` and `n`.
    Public,
    /// Needs `d`, `e` and `n`.
    Private,
}

impl fmt::Display for KeyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyRole::Public => f.write_str("public"),
            KeyRole::Private => f.write_str("private"),
        }
    }
}
