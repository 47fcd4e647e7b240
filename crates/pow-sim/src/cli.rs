use clap::{Parser, ValueEnum};
use pow_core::SelectionMode;

/// pow-sim - classical vs. quantum proof-of-work search comparison
#[derive(Parser, Debug)]
#[command(name = "pow-sim")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compare brute-force nonce search against a Grover-style quantum estimate")]
#[command(long_about = "
Runs one simulation at the given difficulty:
- SHA-256 only: first nonce whose digest has the required leading zero bits
- Multi-hash (2-of-3): two of SHA-256, SHA3-256 and a SWIFFT mock must both pass

Search cost doubles per difficulty bit. Values in 1..=10 finish quickly;
above ~12 the 2-of-3 search can run for a very long time.
")]
pub struct Args {
    /// Required leading zero bits
    #[arg(short, long, default_value_t = 1, env = "POW_SIM_DIFFICULTY", value_name = "BITS")]
    pub difficulty: u32,

    /// Block data that nonces are appended to
    #[arg(long, default_value = "blockdata", env = "POW_SIM_DATA", value_name = "DATA")]
    pub data: String,

    /// Seed for the 2-of-3 pair sampling (random when omitted)
    #[arg(short, long, env = "POW_SIM_SEED", value_name = "SEED")]
    pub seed: Option<u64>,

    /// When the 2-of-3 pair is drawn
    #[arg(long, value_enum, default_value_t = Selection::PerAttempt)]
    pub selection: Selection,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Allow difficulties above the practical limit without a warning
    #[arg(long)]
    pub no_warn: bool,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    pub debug: bool,
}

/// Pair selection for the 2-of-3 search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Selection {
    /// Draw a new pair for every nonce
    PerAttempt,
    /// Draw one pair for the whole search
    PerSearch,
}

impl From<Selection> for SelectionMode {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::PerAttempt => SelectionMode::PerAttempt,
            Selection::PerSearch => SelectionMode::PerSearch,
        }
    }
}
