//! Classical nonce searches: single-function and "2-of-3".

use rand::Rng;
use serde::Serialize;
use std::fmt::Write as _;

use crate::clock::Clock;
use crate::difficulty::{check_difficulty, meets_difficulty};
use crate::error::PowError;
use crate::hash::{Digest, HashFunction, HASH_POOL};

/// Outcome of a completed search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    /// The winning nonce.
    pub nonce: u64,
    /// Wall-clock seconds from search start to the winning attempt.
    pub elapsed_seconds: f64,
    /// Hash functions used on the winning attempt (one or two).
    pub selected: Vec<HashFunction>,
    /// Winning digests, in the same order as `selected`.
    pub digests: Vec<Digest>,
    /// Loop iterations performed, including the winning one.
    pub attempts: u64,
}

/// How the "2-of-3" search picks its pair of hash functions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionMode {
    /// Draw a fresh pair on every nonce attempt.
    ///
    /// The reported pair is only the winning attempt's draw.
    #[default]
    PerAttempt,
    /// Draw one pair before the search and keep it for every attempt.
    PerSearch,
}

impl SelectionMode {
    pub fn name(&self) -> &'static str {
        match self {
            SelectionMode::PerAttempt => "per-attempt",
            SelectionMode::PerSearch => "per-search",
        }
    }
}

/// Draw two distinct pool members as an ordered pair.
///
/// All six ordered pairs are equally likely.
pub fn sample_pair<R: Rng + ?Sized>(rng: &mut R) -> [HashFunction; 2] {
    let first = rng.gen_range(0..HASH_POOL.len());
    let offset = rng.gen_range(1..HASH_POOL.len());
    let second = (first + offset) % HASH_POOL.len();
    [HASH_POOL[first], HASH_POOL[second]]
}

/// Write `data` followed by the decimal nonce into a reused buffer.
#[inline]
fn candidate<'a>(buf: &'a mut String, data: &str, nonce: u64) -> &'a str {
    buf.clear();
    buf.push_str(data);
    // Writing into a String cannot fail
    let _ = write!(buf, "{}", nonce);
    buf.as_str()
}

/// Find the first nonce whose `hash_fn(data + nonce)` meets the difficulty.
///
/// Scans upward from 0 with no upper bound. The expected scan length is
/// `2^difficulty_bits`, so callers should keep the difficulty small.
pub fn search_single<C: Clock + ?Sized>(
    data: &str,
    difficulty_bits: u32,
    hash_fn: HashFunction,
    clock: &C,
) -> Result<SearchResult, PowError> {
    check_difficulty(difficulty_bits)?;

    let start = clock.now_seconds();
    let mut buf = String::with_capacity(data.len() + 20);
    let mut nonce = 0u64;

    loop {
        let digest = hash_fn.digest(candidate(&mut buf, data, nonce));

        if meets_difficulty(&digest, difficulty_bits) {
            let elapsed_seconds = clock.now_seconds() - start;
            log::debug!(
                "{} search at {} bits: nonce {} -> {} ({:.3}s)",
                hash_fn,
                difficulty_bits,
                nonce,
                digest,
                elapsed_seconds
            );
            return Ok(SearchResult {
                nonce,
                elapsed_seconds,
                selected: vec![hash_fn],
                digests: vec![digest],
                attempts: nonce + 1,
            });
        }

        nonce += 1;
    }
}

/// "2-of-3" search: two distinct pool functions must both meet the difficulty.
///
/// On each attempt the first function hashes `data + nonce` and the second
/// hashes `data + (nonce + 1)`. Under [`SelectionMode::PerAttempt`] the pair
/// is redrawn before every attempt.
pub fn search_dual<R, C>(
    data: &str,
    difficulty_bits: u32,
    mode: SelectionMode,
    rng: &mut R,
    clock: &C,
) -> Result<SearchResult, PowError>
where
    R: Rng + ?Sized,
    C: Clock + ?Sized,
{
    check_difficulty(difficulty_bits)?;

    let start = clock.now_seconds();
    let mut first_buf = String::with_capacity(data.len() + 20);
    let mut second_buf = String::with_capacity(data.len() + 20);
    let mut pair = sample_pair(rng);
    let mut nonce = 0u64;

    loop {
        if mode == SelectionMode::PerAttempt && nonce > 0 {
            pair = sample_pair(rng);
        }

        let first = pair[0].digest(candidate(&mut first_buf, data, nonce));
        let second = pair[1].digest(candidate(&mut second_buf, data, nonce + 1));

        if meets_difficulty(&first, difficulty_bits) && meets_difficulty(&second, difficulty_bits)
        {
            let elapsed_seconds = clock.now_seconds() - start;
            log::debug!(
                "2-of-3 search at {} bits ({}): nonce {} with [{}, {}]",
                difficulty_bits,
                mode.name(),
                nonce,
                pair[0],
                pair[1]
            );
            return Ok(SearchResult {
                nonce,
                elapsed_seconds,
                selected: pair.to_vec(),
                digests: vec![first, second],
                attempts: nonce + 1,
            });
        }

        nonce += 1;
    }
}
