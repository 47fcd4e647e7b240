//! Simulation driver: one run of both schemes at a given difficulty.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::fmt;

use crate::clock::Clock;
use crate::difficulty::check_difficulty;
use crate::error::PowError;
use crate::hash::HashFunction;
use crate::quantum::{estimate, estimate_dual, Speedup};
use crate::search::{search_dual, search_single, SearchResult, SelectionMode};

/// Block data hashed when none is configured.
pub const DEFAULT_DATA: &str = "blockdata";

/// Difficulty used when none is configured.
pub const DEFAULT_DIFFICULTY_BITS: u32 = 1;

/// Parameters for a single simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationConfig {
    /// Required leading zero bits. Keep this in 1..=10 for quick runs.
    pub difficulty_bits: u32,
    /// Data that nonces are appended to.
    pub data: String,
    /// Seed for the "2-of-3" pair sampling. Drawn from entropy when unset.
    pub seed: Option<u64>,
    /// Pair selection behavior for the "2-of-3" search.
    pub selection: SelectionMode,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            difficulty_bits: DEFAULT_DIFFICULTY_BITS,
            data: DEFAULT_DATA.to_string(),
            seed: None,
            selection: SelectionMode::default(),
        }
    }
}

impl SimulationConfig {
    pub fn with_difficulty(difficulty_bits: u32) -> Self {
        Self {
            difficulty_bits,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), PowError> {
        check_difficulty(self.difficulty_bits)
    }
}

/// Results for one hashing scheme.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemeReport {
    pub search: SearchResult,
    pub quantum_estimate: u64,
    pub speedup: Speedup,
}

impl SchemeReport {
    fn new(search: SearchResult, quantum_estimate: u64) -> Self {
        let speedup = Speedup::new(search.nonce, quantum_estimate);
        Self {
            search,
            quantum_estimate,
            speedup,
        }
    }
}

/// Everything a run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub difficulty_bits: u32,
    pub data: String,
    /// Seed actually used, so the run can be replayed.
    pub seed: u64,
    pub selection: SelectionMode,
    /// SHA-256 only.
    pub single: SchemeReport,
    /// Multi-hash "2-of-3".
    pub dual: SchemeReport,
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation at Difficulty {}", self.difficulty_bits)?;

        writeln!(f)?;
        writeln!(f, "SHA-256 Only")?;
        writeln!(
            f,
            "Classical: nonce = {}, time = {:.2}s",
            self.single.search.nonce, self.single.search.elapsed_seconds
        )?;
        writeln!(
            f,
            "Quantum Estimate: {}, speedup = {}",
            self.single.quantum_estimate, self.single.speedup
        )?;

        writeln!(f)?;
        writeln!(f, "Multi-Hash (2-of-3)")?;
        writeln!(
            f,
            "Classical: nonce = {}, time = {:.2}s",
            self.dual.search.nonce, self.dual.search.elapsed_seconds
        )?;
        let names: Vec<&str> = self.dual.search.selected.iter().map(|h| h.name()).collect();
        writeln!(f, "Hashes Used: [{}]", names.join(", "))?;
        write!(
            f,
            "Quantum Estimate: {}, speedup = {}",
            self.dual.quantum_estimate, self.dual.speedup
        )
    }
}

/// A validated simulation, ready to run.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Result<Self, PowError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run SHA-256 only, then "2-of-3", and derive both quantum estimates.
    ///
    /// Runtime grows as `2^difficulty_bits` for the first search and roughly
    /// `4^difficulty_bits` for the second.
    pub fn run<C: Clock + ?Sized>(&self, clock: &C) -> Result<SimulationReport, PowError> {
        let seed = self.config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        let mut rng = StdRng::seed_from_u64(seed);
        self.run_with_rng(seed, &mut rng, clock)
    }

    fn run_with_rng<R, C>(
        &self,
        seed: u64,
        rng: &mut R,
        clock: &C,
    ) -> Result<SimulationReport, PowError>
    where
        R: Rng + ?Sized,
        C: Clock + ?Sized,
    {
        let cfg = &self.config;
        log::info!(
            "Simulating at difficulty {} (data {:?}, seed {}, {} selection)",
            cfg.difficulty_bits,
            cfg.data,
            seed,
            cfg.selection.name()
        );

        let single = search_single(&cfg.data, cfg.difficulty_bits, HashFunction::Sha256, clock)?;
        let single_q = estimate(single.nonce);

        let dual = search_dual(&cfg.data, cfg.difficulty_bits, cfg.selection, rng, clock)?;
        let dual_q = estimate_dual(dual.nonce, &dual.selected);

        Ok(SimulationReport {
            difficulty_bits: cfg.difficulty_bits,
            data: cfg.data.clone(),
            seed,
            selection: cfg.selection,
            single: SchemeReport::new(single, single_q),
            dual: SchemeReport::new(dual, dual_q),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::meets_difficulty;

    /// Clock that always reads zero, for stable report text.
    struct FrozenClock;

    impl Clock for FrozenClock {
        fn now_seconds(&self) -> f64 {
            0.0
        }
    }

    fn seeded(difficulty_bits: u32, seed: u64) -> Simulation {
        Simulation::new(SimulationConfig {
            seed: Some(seed),
            ..SimulationConfig::with_difficulty(difficulty_bits)
        })
        .unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.difficulty_bits, 1);
        assert_eq!(config.data, "blockdata");
        assert_eq!(config.seed, None);
        assert_eq!(config.selection, SelectionMode::PerAttempt);
    }

    #[test]
    fn test_rejects_impossible_difficulty() {
        assert_eq!(
            Simulation::new(SimulationConfig::with_difficulty(400)).unwrap_err(),
            PowError::DifficultyOutOfRange(400)
        );
    }

    #[test]
    fn test_run_is_reproducible_with_seed() {
        let a = seeded(3, 11).run(&FrozenClock).unwrap();
        let b = seeded(3, 11).run(&FrozenClock).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.seed, 11);
    }

    #[test]
    fn test_run_derives_estimates() {
        let report = seeded(4, 3).run(&FrozenClock).unwrap();

        assert!(meets_difficulty(&report.single.search.digests[0], 4));
        assert_eq!(report.single.quantum_estimate, estimate(report.single.search.nonce));
        assert_eq!(
            report.dual.quantum_estimate,
            estimate_dual(report.dual.search.nonce, &report.dual.search.selected)
        );
        assert_eq!(report.dual.search.selected.len(), 2);
    }

    #[test]
    fn test_zero_difficulty_report_text() {
        let report = seeded(0, 1).run(&FrozenClock).unwrap();
        let selected = &report.dual.search.selected;
        let expected = format!(
            "Simulation at Difficulty 0\n\
             \n\
             SHA-256 Only\n\
             Classical: nonce = 0, time = 0.00s\n\
             Quantum Estimate: 0, speedup = undefined\n\
             \n\
             Multi-Hash (2-of-3)\n\
             Classical: nonce = 0, time = 0.00s\n\
             Hashes Used: [{}, {}]\n\
             Quantum Estimate: 0, speedup = undefined",
            selected[0].name(),
            selected[1].name()
        );
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn test_report_serializes() {
        let report = seeded(2, 8).run(&FrozenClock).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["difficulty_bits"], 2);
        assert_eq!(json["seed"], 8);
        assert_eq!(json["selection"], "per-attempt");
        assert_eq!(json["single"]["search"]["selected"][0], "sha256");
        assert_eq!(
            json["single"]["search"]["digests"][0].as_str().map(str::len),
            Some(64)
        );
    }
}
