//! CLI result presenter.

use console::style;

use fibcompare_orchestration::interfaces::{ResultPresenter, RunRecord};

use crate::output::{format_duration, format_number, format_result};

/// Presents run results on the terminal.
pub struct CliPresenter {
    verbose: bool,
    quiet: bool,
    details: bool,
}

impl CliPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, details: bool) -> Self {
        Self {
            verbose,
            quiet,
            details,
        }
    }
}

impl ResultPresenter for CliPresenter {
    fn present_run(&self, n: u64, record: &RunRecord) {
        if self.quiet {
            println!("{}", record.value);
            return;
        }

        println!();
        println!("Strategy: {}", style(&record.strategy).bold());
        println!("Duration: {}", format_duration(record.duration));

        if self.details {
            let bits = record.value.bits();
            let digits = record.value.to_string().len();
            println!("Result bits: {bits}");
            println!("Result digits: {digits}");
        }

        println!(
            "F({}) = {}",
            format_number(n),
            format_result(&record.value, self.verbose)
        );
    }

    fn present_comparison(&self, records: &[RunRecord]) {
        if self.quiet {
            return;
        }

        println!();
        println!("{}", style("Comparison").bold());
        println!("{:-<48}", "");
        for record in records {
            println!(
                "  {:<20} {:>12}",
                record.strategy,
                format_duration(record.duration)
            );
        }
    }

    fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}
