//! WebAssembly bindings for the quantum proof-of-work simulator.
//!
//! This crate provides JavaScript-accessible APIs for:
//! - Running a full classical vs. quantum simulation
//! - Hashing with any function in the pool
//! - Checking hex digests against a difficulty

use wasm_bindgen::prelude::*;

pub mod simulator;
pub mod state;

// Re-export main types for JS access
pub use simulator::{JsClock, Simulator};

/// Initialize the WASM module with better panic messages.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Hash `input` with the named pool function ("sha256", "sha3", "swifft_mock").
#[wasm_bindgen]
pub fn hash_hex(name: &str, input: &str) -> Result<String, JsValue> {
    let hash_fn = pow_core::HashFunction::from_name(name)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown hash function: {}", name)))?;
    Ok(hash_fn.hash_hex(input))
}

/// Check whether a 64-character hex digest has `difficulty_bits` leading zero bits.
#[wasm_bindgen]
pub fn meets_difficulty(hex_digest: &str, difficulty_bits: u32) -> Result<bool, JsValue> {
    pow_core::meets_difficulty_hex(hex_digest, difficulty_bits)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
