//! Leading-zero-bit difficulty checks.
//!
//! Difficulty is a count of required leading zero bits in a 256-bit digest.
//! Every extra bit doubles the expected classical search length.

use crate::error::PowError;
use crate::hash::Digest;

/// Digest width; any difficulty above this can never be met.
pub const MAX_DIFFICULTY_BITS: u32 = 256;

/// Above this the searches take long enough to be impractical on a CPU.
pub const PRACTICAL_DIFFICULTY_BITS: u32 = 12;

/// Check whether a digest has at least `difficulty_bits` leading zero bits.
///
/// A difficulty of 0 is always met.
#[inline]
pub fn meets_difficulty(digest: &Digest, difficulty_bits: u32) -> bool {
    digest.leading_zero_bits() >= difficulty_bits
}

/// String form of [`meets_difficulty`] for hex digests.
///
/// The digest must be exactly 64 hex characters.
pub fn meets_difficulty_hex(hex_digest: &str, difficulty_bits: u32) -> Result<bool, PowError> {
    let digest = Digest::from_hex(hex_digest)?;
    Ok(meets_difficulty(&digest, difficulty_bits))
}

/// Reject difficulties that would make a search loop forever.
pub fn check_difficulty(difficulty_bits: u32) -> Result<(), PowError> {
    if difficulty_bits > MAX_DIFFICULTY_BITS {
        return Err(PowError::DifficultyOutOfRange(difficulty_bits));
    }
    Ok(())
}

/// Expected classical attempts, `2^bits`, under a random-oracle assumption.
pub fn expected_attempts(difficulty_bits: u32) -> f64 {
    2f64.powi(difficulty_bits as i32)
}

/// Format an attempt count for display (e.g., "1.05M").
pub fn format_attempts(attempts: f64) -> String {
    if attempts >= 1e15 {
        format!("{:.2}P", attempts / 1e15)
    } else if attempts >= 1e12 {
        format!("{:.2}T", attempts / 1e12)
    } else if attempts >= 1e9 {
        format!("{:.2}G", attempts / 1e9)
    } else if attempts >= 1e6 {
        format!("{:.2}M", attempts / 1e6)
    } else if attempts >= 1e3 {
        format!("{:.2}K", attempts / 1e3)
    } else {
        format!("{:.0}", attempts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Literal reading of the predicate: pad to 256 binary digits, check the prefix.
    fn binary_prefix_is_zero(hex_digest: &str, bits: usize) -> bool {
        let binary: String = hex_digest
            .chars()
            .map(|c| format!("{:04b}", c.to_digit(16).unwrap()))
            .collect();
        assert_eq!(binary.len(), 256);
        binary.starts_with(&"0".repeat(bits))
    }

    #[test]
    fn test_zero_difficulty_always_met() {
        let digest = Digest::new([0xFF; 32]);
        assert!(meets_difficulty(&digest, 0));
    }

    #[test]
    fn test_meets_difficulty_boundaries() {
        let mut bytes = [0xFF; 32];
        bytes[0] = 0x00;
        bytes[1] = 0x1F; // 3 more zero bits
        let digest = Digest::new(bytes);

        assert!(meets_difficulty(&digest, 10));
        assert!(meets_difficulty(&digest, 11));
        assert!(!meets_difficulty(&digest, 12));
    }

    #[test]
    fn test_all_zero_digest() {
        let zero = Digest::new([0u8; 32]);
        assert!(meets_difficulty(&zero, 256));
        assert!(!meets_difficulty(&zero, 257));
    }

    #[test]
    fn test_matches_binary_string_form() {
        let samples = [
            "0000000000000000000000000000000000000000000000000000000000000001",
            "0fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            "8000000000000000000000000000000000000000000000000000000000000000",
            "00f0000000000000000000000000000000000000000000000000000000000000",
        ];
        for hex_digest in samples {
            for bits in 0..=16u32 {
                assert_eq!(
                    meets_difficulty_hex(hex_digest, bits).unwrap(),
                    binary_prefix_is_zero(hex_digest, bits as usize),
                    "{} at {} bits",
                    hex_digest,
                    bits
                );
            }
        }
    }

    #[test]
    fn test_meets_difficulty_hex_rejects_bad_input() {
        assert!(matches!(
            meets_difficulty_hex("not hex", 1),
            Err(PowError::InvalidDigest(_))
        ));
        assert_eq!(
            meets_difficulty_hex("00", 1),
            Err(PowError::InvalidDigestLength(1))
        );
    }

    #[test]
    fn test_check_difficulty() {
        assert!(check_difficulty(0).is_ok());
        assert!(check_difficulty(256).is_ok());
        assert_eq!(
            check_difficulty(257),
            Err(PowError::DifficultyOutOfRange(257))
        );
    }

    #[test]
    fn test_expected_attempts() {
        assert_eq!(expected_attempts(0), 1.0);
        assert_eq!(expected_attempts(10), 1024.0);
        assert_eq!(format_attempts(expected_attempts(10)), "1.02K");
        assert_eq!(format_attempts(expected_attempts(20)), "1.05M");
        assert_eq!(format_attempts(2.0), "2");
    }
}
