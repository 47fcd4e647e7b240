//! Error type shared by the simulation core.

use crate::difficulty::MAX_DIFFICULTY_BITS;

/// Errors raised by digest parsing and search setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PowError {
    /// Digest string is not valid hexadecimal
    InvalidDigest(String),
    /// Digest decoded to the wrong number of bytes
    InvalidDigestLength(usize),
    /// Difficulty can never be satisfied by a 256-bit digest
    DifficultyOutOfRange(u32),
}

impl core::fmt::Display for PowError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PowError::InvalidDigest(e) => write!(f, "Invalid digest hex: {}", e),
            PowError::InvalidDigestLength(len) => {
                write!(f, "Invalid digest length: expected 32 bytes, got {}", len)
            }
            PowError::DifficultyOutOfRange(bits) => write!(
                f,
                "Difficulty {} bits out of range (maximum {})",
                bits, MAX_DIFFICULTY_BITS
            ),
        }
    }
}

impl std::error::Error for PowError {}

impl From<hex::FromHexError> for PowError {
    fn from(err: hex::FromHexError) -> Self {
        PowError::InvalidDigest(err.to_string())
    }
}
