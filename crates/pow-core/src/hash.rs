//! The hash pool: SHA-256, SHA3-256 and a SWIFFT-shaped mock.

use serde::{Serialize, Serializer};
use sha2::{Digest as _, Sha256};
use sha3::Sha3_256;
use std::fmt;

use crate::error::PowError;

/// A 256-bit hash output, stored big-endian as it reads in hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; 32]);

impl Digest {
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// 64 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse a 64-character hex digest.
    pub fn from_hex(hex_str: &str) -> Result<Self, PowError> {
        let bytes = hex::decode(hex_str)?;
        if bytes.len() != 32 {
            return Err(PowError::InvalidDigestLength(bytes.len()));
        }

        let mut array = [0u8; 32];
        array.copy_from_slice(&bytes);
        Ok(Self(array))
    }

    /// Count leading zero bits, most significant byte first.
    ///
    /// Equal to the number of leading `'0'` characters in the digest's
    /// 256-character zero-padded binary form.
    pub fn leading_zero_bits(&self) -> u32 {
        let mut zeros = 0u32;
        for byte in self.0.iter() {
            if *byte == 0 {
                zeros += 8;
            } else {
                zeros += byte.leading_zeros();
                break;
            }
        }
        zeros
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; 32]> for Digest {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// One of the three hash strategies in the pool.
///
/// Each variant carries its quantum exponent: the model assumes a quantum
/// search needs `N^exponent` queries where a classical one needs `N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashFunction {
    /// SHA-256, the reference hash. Grover gives the full square-root speedup.
    Sha256,
    /// SHA3-256, modeled as strongly quantum resistant.
    Sha3,
    /// Lattice-style mixing wrapped in SHA3-256. No quantum advantage modeled.
    SwifftMock,
}

/// The fixed pool sampled by the "2-of-3" scheme, in pool order.
pub const HASH_POOL: [HashFunction; 3] = [
    HashFunction::Sha256,
    HashFunction::Sha3,
    HashFunction::SwifftMock,
];

/// Modulus of the SWIFFT mock's per-byte mixing step.
const SWIFFT_MODULUS: u64 = 251;

impl HashFunction {
    /// Identifier used in reports ("Hashes Used: [sha3, swifft_mock]").
    pub const fn name(self) -> &'static str {
        match self {
            HashFunction::Sha256 => "sha256",
            HashFunction::Sha3 => "sha3",
            HashFunction::SwifftMock => "swifft_mock",
        }
    }

    /// Human-facing label.
    pub const fn label(self) -> &'static str {
        match self {
            HashFunction::Sha256 => "SHA-256",
            HashFunction::Sha3 => "SHA3-256",
            HashFunction::SwifftMock => "SWIFFT (mock)",
        }
    }

    /// Exponent in (0, 1]; lower means a stronger quantum speedup.
    pub const fn quantum_exponent(self) -> f64 {
        match self {
            HashFunction::Sha256 => 0.5,
            HashFunction::Sha3 => 0.9,
            HashFunction::SwifftMock => 1.0,
        }
    }

    /// Parse a name, label or common alias, ignoring case.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sha256" | "sha-256" => Some(HashFunction::Sha256),
            "sha3" | "sha3-256" | "sha3_256" => Some(HashFunction::Sha3),
            "swifft_mock" | "swifft" | "swifft-mock" | "swifft (mock)" => {
                Some(HashFunction::SwifftMock)
            }
            _ => None,
        }
    }

    /// Hash the UTF-8 bytes of `input`.
    pub fn digest(self, input: &str) -> Digest {
        match self {
            HashFunction::Sha256 => sha256(input.as_bytes()),
            HashFunction::Sha3 => sha3_256(input.as_bytes()),
            HashFunction::SwifftMock => swifft_mock(input.as_bytes()),
        }
    }

    /// Hash `input` and hex-encode the result.
    pub fn hash_hex(self, input: &str) -> String {
        self.digest(input).to_hex()
    }
}

impl fmt::Display for HashFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for HashFunction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Single SHA-256 hash.
#[inline]
pub fn sha256(data: &[u8]) -> Digest {
    Digest(Sha256::digest(data).into())
}

/// Single SHA3-256 hash.
#[inline]
pub fn sha3_256(data: &[u8]) -> Digest {
    Digest(Sha3_256::digest(data).into())
}

/// Position-weighted byte sum used by the SWIFFT mock.
///
/// Each byte `c` at index `i` contributes `(c * (i + 1)) mod 251`.
pub fn swifft_mix(data: &[u8]) -> u64 {
    data.iter()
        .enumerate()
        .map(|(i, &c)| (c as u64 * (i as u64 + 1)) % SWIFFT_MODULUS)
        .sum()
}

/// SHA3-256 over the decimal string of [`swifft_mix`].
///
/// Not a lattice hash. It only has the shape of one: a cheap mixing step
/// wrapped in a standard hash for a fixed 256-bit output.
pub fn swifft_mock(data: &[u8]) -> Digest {
    sha3_256(swifft_mix(data).to_string().as_bytes())
}
