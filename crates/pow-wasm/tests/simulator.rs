#![cfg(target_arch = "wasm32")]

use pow_wasm::{hash_hex, meets_difficulty, Simulator};
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn test_run_text_is_reproducible_with_seed() {
    let mut first = Simulator::new(3, None).unwrap();
    first.set_seed(Some(21));
    let mut second = Simulator::new(3, None).unwrap();
    second.set_seed(Some(21));

    let a = first.run_text().unwrap();
    let b = second.run_text().unwrap();
    assert!(a.starts_with("Simulation at Difficulty 3"));
    // Timings differ; everything else matches
    let strip = |s: &str| -> Vec<String> {
        s.lines()
            .filter(|l| !l.starts_with("Classical:"))
            .map(str::to_string)
            .collect()
    };
    assert_eq!(strip(&a), strip(&b));
}

#[wasm_bindgen_test]
fn test_last_report_before_and_after_run() {
    let mut sim = Simulator::new(1, Some("blockdata".to_string())).unwrap();
    assert!(sim.last_report().unwrap().is_null());
    assert!(sim.summary().unwrap().is_null());

    sim.run().unwrap();
    assert!(!sim.last_report().unwrap().is_null());
    assert!(sim.summary().unwrap().is_object());

    sim.reset();
    assert!(sim.last_report().unwrap().is_null());
}

#[wasm_bindgen_test]
fn test_rejects_impossible_difficulty() {
    assert!(Simulator::new(300, None).is_err());
}

#[wasm_bindgen_test]
fn test_hash_and_difficulty_bindings() {
    assert_eq!(
        hash_hex("sha256", "abc").unwrap(),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert!(hash_hex("md5", "abc").is_err());
    assert!(meets_difficulty(
        "0fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        4
    )
    .unwrap());
    assert!(meets_difficulty("xyz", 1).is_err());
}
