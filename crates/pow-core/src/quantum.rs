//! Grover-style quantum query estimates.
//!
//! A classical search of `N` attempts is modeled as `N^e` quantum queries,
//! where `e` is the hash function's quantum exponent. `e = 0.5` is Grover's
//! square-root speedup; `e = 1.0` is no speedup at all.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::hash::HashFunction;

/// Exponent for plain Grover search.
pub const GROVER_EXPONENT: f64 = 0.5;

/// `floor(classical_nonce^exponent)`, never above `classical_nonce`.
pub fn estimate_with_exponent(classical_nonce: u64, exponent: f64) -> u64 {
    if classical_nonce == 0 {
        return 0;
    }
    let queries = (classical_nonce as f64).powf(exponent).floor() as u64;
    queries.min(classical_nonce)
}

/// Square-root estimate for a single SHA-256 search.
pub fn estimate(classical_nonce: u64) -> u64 {
    estimate_with_exponent(classical_nonce, GROVER_EXPONENT)
}

/// Mean quantum exponent of a selection. An empty selection gets no speedup.
pub fn average_exponent(selected: &[HashFunction]) -> f64 {
    if selected.is_empty() {
        return 1.0;
    }
    let sum: f64 = selected.iter().map(|f| f.quantum_exponent()).sum();
    sum / selected.len() as f64
}

/// Estimate for the "2-of-3" scheme using the pair's mean exponent.
pub fn estimate_dual(classical_nonce: u64, selected: &[HashFunction]) -> u64 {
    estimate_with_exponent(classical_nonce, average_exponent(selected))
}

/// Classical-to-quantum ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Speedup {
    /// `classical / quantum`
    Ratio(f64),
    /// The quantum estimate was zero
    Undefined,
}

impl Speedup {
    pub fn new(classical_nonce: u64, quantum_estimate: u64) -> Self {
        if quantum_estimate == 0 {
            Speedup::Undefined
        } else {
            Speedup::Ratio(classical_nonce as f64 / quantum_estimate as f64)
        }
    }

    pub fn ratio(&self) -> Option<f64> {
        match self {
            Speedup::Ratio(r) => Some(*r),
            Speedup::Undefined => None,
        }
    }
}

impl fmt::Display for Speedup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speedup::Ratio(r) => write!(f, "{:.2}x", r),
            Speedup::Undefined => f.write_str("undefined"),
        }
    }
}

impl Serialize for Speedup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Speedup::Ratio(r) => serializer.serialize_f64(*r),
            Speedup::Undefined => serializer.serialize_none(),
        }
    }
}
