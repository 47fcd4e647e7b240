//! JS-facing views of simulation results.

use pow_core::{SchemeReport, SimulationReport};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Convert any serializable value to a JS value.
///
/// `u64` values (nonces, seeds) become `BigInt` so large seeds survive the
/// trip, and an undefined speedup becomes `null`.
pub fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::new()
        .serialize_large_number_types_as_bigints(true)
        .serialize_missing_as_null(true);
    value
        .serialize(&serializer)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
}

/// Flat per-scheme numbers for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemeSummary {
    /// Winning classical nonce.
    pub nonce: u64,
    /// Elapsed search time in milliseconds.
    pub elapsed_ms: f64,
    /// Hash rate over the search (hashes per second).
    pub hash_rate: f64,
    /// Formatted hash rate.
    pub hash_rate_display: String,
    /// Names of the functions used on the winning attempt.
    pub hashes_used: Vec<String>,
    /// Estimated quantum queries.
    pub quantum_estimate: u64,
    /// Classical/quantum ratio, `None` when the estimate is zero.
    pub speedup: Option<f64>,
    /// Formatted ratio ("3.33x" or "undefined").
    pub speedup_display: String,
}

impl SchemeSummary {
    /// `hashes_per_attempt` is 1 for the single scheme and 2 for "2-of-3".
    fn from_scheme(scheme: &SchemeReport, hashes_per_attempt: u64) -> Self {
        let search = &scheme.search;
        let hashes = search.attempts * hashes_per_attempt;
        let hash_rate = if search.elapsed_seconds > 0.0 {
            hashes as f64 / search.elapsed_seconds
        } else {
            0.0
        };

        SchemeSummary {
            nonce: search.nonce,
            elapsed_ms: search.elapsed_seconds * 1000.0,
            hash_rate,
            hash_rate_display: format_hash_rate(hash_rate),
            hashes_used: search.selected.iter().map(|h| h.name().to_string()).collect(),
            quantum_estimate: scheme.quantum_estimate,
            speedup: scheme.speedup.ratio(),
            speedup_display: scheme.speedup.to_string(),
        }
    }
}

/// Summary of a whole run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    /// Difficulty in leading zero bits.
    pub difficulty_bits: u32,
    /// Seed used for pair sampling.
    pub seed: u64,
    /// SHA-256 only.
    pub single: SchemeSummary,
    /// Multi-hash "2-of-3".
    pub dual: SchemeSummary,
}

impl RunSummary {
    pub fn from_report(report: &SimulationReport) -> Self {
        RunSummary {
            difficulty_bits: report.difficulty_bits,
            seed: report.seed,
            single: SchemeSummary::from_scheme(&report.single, 1),
            dual: SchemeSummary::from_scheme(&report.dual, 2),
        }
    }

    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        to_js(self)
    }
}

/// Format hash rate for display.
pub fn format_hash_rate(hash_rate: f64) -> String {
    if hash_rate >= 1_000_000_000.0 {
        format!("{:.2} GH/s", hash_rate / 1_000_000_000.0)
    } else if hash_rate >= 1_000_000.0 {
        format!("{:.2} MH/s", hash_rate / 1_000_000.0)
    } else if hash_rate >= 1_000.0 {
        format!("{:.2} KH/s", hash_rate / 1_000.0)
    } else {
        format!("{:.2} H/s", hash_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pow_core::{Clock, Simulation, SimulationConfig};

    struct StepClock(std::cell::Cell<f64>);

    impl Clock for StepClock {
        fn now_seconds(&self) -> f64 {
            let now = self.0.get();
            self.0.set(now + 0.5);
            now
        }
    }

    #[test]
    fn test_format_hash_rate() {
        assert_eq!(format_hash_rate(12.0), "12.00 H/s");
        assert_eq!(format_hash_rate(1_500.0), "1.50 KH/s");
        assert_eq!(format_hash_rate(2_000_000.0), "2.00 MH/s");
        assert_eq!(format_hash_rate(3_000_000_000.0), "3.00 GH/s");
    }

    #[test]
    fn test_summary_from_report() {
        let config = SimulationConfig {
            difficulty_bits: 3,
            seed: Some(4),
            ..SimulationConfig::default()
        };
        let report = Simulation::new(config)
            .unwrap()
            .run(&StepClock(std::cell::Cell::new(0.0)))
            .unwrap();
        let summary = RunSummary::from_report(&report);

        assert_eq!(summary.seed, 4);
        assert_eq!(summary.single.nonce, report.single.search.nonce);
        assert_eq!(summary.single.hashes_used, vec!["sha256".to_string()]);
        assert_eq!(summary.dual.hashes_used.len(), 2);
        // Each search spans exactly one clock step
        assert_eq!(summary.single.elapsed_ms, 500.0);
        assert_eq!(
            summary.dual.hash_rate,
            (report.dual.search.attempts * 2) as f64 / 0.5
        );
        assert_eq!(summary.single.speedup, report.single.speedup.ratio());
    }
}
