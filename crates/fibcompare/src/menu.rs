//! Interactive prompt used when no index is given on the command line.

use std::io::{BufRead, Write};

use anyhow::Result;

use fibcompare_core::error::FibError;
use fibcompare_core::registry::StrategyFactory;
use fibcompare_core::strategy::Strategy;

/// Print the strategy menu and read an index from `input`.
///
/// Rejects anything that is not a non-negative integer (negative
/// numbers included, which `u64` parsing refuses) with
/// `FibError::InvalidInput`, before any strategy is reached.
pub fn prompt_for_index(
    factory: &dyn StrategyFactory,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<u64> {
    write_menu(factory, output)?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let trimmed = line.trim();
    let n = trimmed.parse::<u64>().map_err(|_| {
        FibError::InvalidInput(format!("not a non-negative integer: {trimmed:?}"))
    })?;
    Ok(n)
}

fn write_menu(factory: &dyn StrategyFactory, output: &mut dyn Write) -> std::io::Result<()> {
    writeln!(output)?;
    writeln!(output, "Available strategies:")?;
    for name in factory.available() {
        let strategy = factory
            .create(name)
            .expect("registered names always resolve");
        match strategy.advisory_ceiling() {
            Some(ceiling) => writeln!(
                output,
                "  - {:<16} [advised for n <= {ceiling}]",
                strategy.name()
            )?,
            None => writeln!(output, "  - {}", strategy.name())?,
        }
    }
    writeln!(output)?;
    writeln!(output, "Which Fibonacci index should be computed?")?;
    output.flush()
}
