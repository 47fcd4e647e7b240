//! Turns parsed arguments into a validated simulation config.

use pow_core::difficulty::{
    expected_attempts, format_attempts, MAX_DIFFICULTY_BITS, PRACTICAL_DIFFICULTY_BITS,
};
use pow_core::SimulationConfig;
use thiserror::Error;

use crate::cli::Args;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("difficulty {bits} exceeds the {max}-bit digest width; the search would never finish")]
    DifficultyTooHigh { bits: u32, max: u32 },
}

/// Build a [`SimulationConfig`] from command-line arguments.
pub fn from_args(args: &Args) -> Result<SimulationConfig, ConfigError> {
    if args.difficulty > MAX_DIFFICULTY_BITS {
        return Err(ConfigError::DifficultyTooHigh {
            bits: args.difficulty,
            max: MAX_DIFFICULTY_BITS,
        });
    }

    if args.difficulty > PRACTICAL_DIFFICULTY_BITS && !args.no_warn {
        let attempts = expected_attempts(args.difficulty);
        log::warn!(
            "Difficulty {} is above {}: expect ~{} single-hash attempts and ~{} for 2-of-3",
            args.difficulty,
            PRACTICAL_DIFFICULTY_BITS,
            format_attempts(attempts),
            format_attempts(attempts * attempts)
        );
    }

    Ok(SimulationConfig {
        difficulty_bits: args.difficulty,
        data: args.data.clone(),
        seed: args.seed,
        selection: args.selection.into(),
    })
}
