//! Core proof-of-work simulation logic for the quantum speedup comparison.
//!
//! This crate provides pure Rust implementations of:
//! - The three-function hash pool (SHA-256, SHA3-256 and a SWIFFT-style mock)
//! - Leading-zero-bit difficulty checks over 256-bit digests
//! - Single-function and "2-of-3" classical nonce searches
//! - Grover-style quantum query estimates with per-function exponents
//! - A simulation driver that runs both schemes and renders a report
//!
//! Nothing here performs I/O. Wall-clock time is supplied through [`Clock`] and
//! randomness through any [`rand::Rng`].

pub mod clock;
pub mod difficulty;
pub mod error;
pub mod hash;
pub mod quantum;
pub mod search;
pub mod simulation;

pub use clock::{Clock, SystemClock};
pub use difficulty::{check_difficulty, meets_difficulty, meets_difficulty_hex};
pub use error::PowError;
pub use hash::{Digest, HashFunction, HASH_POOL};
pub use quantum::{estimate, estimate_dual, Speedup};
pub use search::{sample_pair, search_dual, search_single, SearchResult, SelectionMode};
pub use simulation::{SchemeReport, Simulation, SimulationConfig, SimulationReport};
