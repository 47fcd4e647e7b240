//! Simulation controller for the WASM build.

use pow_core::{Clock, SelectionMode, Simulation, SimulationConfig, SimulationReport};
use wasm_bindgen::prelude::*;

use crate::state::{to_js, RunSummary};

/// Clock backed by `performance.now()`, or `Date.now()` outside a browser window.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsClock;

impl Clock for JsClock {
    fn now_seconds(&self) -> f64 {
        let millis = web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now);
        millis / 1000.0
    }
}

/// Draw a seed from the platform entropy source.
fn entropy_seed() -> Result<u64, JsValue> {
    let mut buf = [0u8; 8];
    getrandom::getrandom(&mut buf)
        .map_err(|e| JsValue::from_str(&format!("Entropy error: {}", e)))?;
    Ok(u64::from_le_bytes(buf))
}

/// The main simulation controller.
#[wasm_bindgen]
pub struct Simulator {
    /// Run parameters; `seed` stays `None` until JS sets one.
    config: SimulationConfig,
    /// Most recent completed run.
    last_report: Option<SimulationReport>,
}

#[wasm_bindgen]
impl Simulator {
    /// Create a new simulator.
    ///
    /// # Arguments
    /// * `difficulty_bits` - Required leading zero bits (1-10 recommended)
    /// * `data` - Block data, or `undefined` for "blockdata"
    #[wasm_bindgen(constructor)]
    pub fn new(difficulty_bits: u32, data: Option<String>) -> Result<Simulator, JsValue> {
        let mut config = SimulationConfig::with_difficulty(difficulty_bits);
        if let Some(data) = data {
            config.data = data;
        }
        config
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(Simulator {
            config,
            last_report: None,
        })
    }

    /// Fix the pair-sampling seed, or clear it with `undefined`.
    #[wasm_bindgen]
    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.config.seed = seed;
    }

    /// Draw the 2-of-3 pair once per search instead of once per nonce.
    #[wasm_bindgen]
    pub fn set_per_search_selection(&mut self, enabled: bool) {
        self.config.selection = if enabled {
            SelectionMode::PerSearch
        } else {
            SelectionMode::PerAttempt
        };
    }

    /// Get the configured difficulty.
    #[wasm_bindgen(getter)]
    pub fn difficulty_bits(&self) -> u32 {
        self.config.difficulty_bits
    }

    /// Get the configured block data.
    #[wasm_bindgen(getter)]
    pub fn data(&self) -> String {
        self.config.data.clone()
    }

    /// Run both searches and return the full report.
    ///
    /// Blocks the calling thread for the whole search.
    #[wasm_bindgen]
    pub fn run(&mut self) -> Result<JsValue, JsValue> {
        let report = self.simulate()?;
        to_js(report)
    }

    /// Run both searches and return the plain-text report.
    #[wasm_bindgen]
    pub fn run_text(&mut self) -> Result<String, JsValue> {
        let report = self.simulate()?;
        Ok(report.to_string())
    }

    /// Get the last report, or `null` before the first run.
    #[wasm_bindgen]
    pub fn last_report(&self) -> Result<JsValue, JsValue> {
        match &self.last_report {
            Some(report) => to_js(report),
            None => Ok(JsValue::NULL),
        }
    }

    /// Get flat display numbers for the last run, or `null` before the first run.
    #[wasm_bindgen]
    pub fn summary(&self) -> Result<JsValue, JsValue> {
        match &self.last_report {
            Some(report) => RunSummary::from_report(report).to_js(),
            None => Ok(JsValue::NULL),
        }
    }

    /// Forget the last report.
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.last_report = None;
    }
}

impl Simulator {
    fn simulate(&mut self) -> Result<&SimulationReport, JsValue> {
        let mut config = self.config.clone();
        if config.seed.is_none() {
            config.seed = Some(entropy_seed()?);
        }

        let report = Simulation::new(config)
            .and_then(|sim| sim.run(&JsClock))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        console_log(&format!(
            "Difficulty {}: single nonce {}, 2-of-3 nonce {}",
            report.difficulty_bits, report.single.search.nonce, report.dual.search.nonce
        ));

        Ok(self.last_report.insert(report))
    }
}

/// Log to the browser console.
#[wasm_bindgen]
pub fn console_log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}
