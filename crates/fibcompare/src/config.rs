//! Application configuration from CLI flags and environment.

use clap::Parser;

/// fibcompare — compare Fibonacci computation strategies.
#[derive(Parser, Debug)]
#[command(name = "fibcompare", version, about)]
pub struct AppConfig {
    /// Fibonacci index to compute. Prompts interactively when omitted.
    #[arg(short, long, env = "FIBCOMPARE_N")]
    pub n: Option<u64>,

    /// Strategy to run: iterative, recursive, closed-form, bottom-up,
    /// memo-vec, memo-map, or all.
    #[arg(long, default_value = "all")]
    pub strategy: String,

    /// Verbose output (print full values regardless of length).
    #[arg(short, long)]
    pub verbose: bool,

    /// Show detailed information (bit length, digit count).
    #[arg(short, long)]
    pub details: bool,

    /// Quiet mode (only output the number).
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the run report as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Write the computed value to a file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
