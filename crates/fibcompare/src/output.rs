//! CLI output formatting and report serialization.

use std::io::{self, Write};
use std::time::Duration;

use num_bigint::BigUint;
use serde::Serialize;

use fibcompare_orchestration::interfaces::RunRecord;

/// Format a `BigUint` for display, potentially truncating.
#[must_use]
pub fn format_result(value: &BigUint, verbose: bool) -> String {
    let s = value.to_string();
    if !verbose && s.len() > 100 {
        format!("{}...{} ({} digits)", &s[..50], &s[s.len() - 50..], s.len())
    } else {
        s
    }
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Write the computed value to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, value: &BigUint) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write!(file, "{value}")?;
    Ok(())
}

/// JSON-serializable report of a full comparison run.
#[derive(Debug, Serialize)]
pub struct RunReport {
    /// The requested index.
    pub n: u64,
    /// One entry per executed strategy, in execution order.
    pub runs: Vec<RunEntry>,
}

/// One strategy's contribution to a [`RunReport`].
#[derive(Debug, Serialize)]
pub struct RunEntry {
    /// Strategy display name.
    pub strategy: String,
    /// Decimal rendering of the computed value.
    pub value: String,
    /// Wall-clock duration in nanoseconds.
    pub duration_ns: u128,
}

impl RunReport {
    /// Build a report from run records.
    #[must_use]
    pub fn from_records(n: u64, records: &[RunRecord]) -> Self {
        Self {
            n,
            runs: records
                .iter()
                .map(|record| RunEntry {
                    strategy: record.strategy.clone(),
                    value: record.value.to_string(),
                    duration_ns: record.duration.as_nanos(),
                })
                .collect(),
        }
    }
}
