//! Application entry point and dispatch.

use anyhow::Result;

use fibcompare_core::registry::DefaultFactory;
use fibcompare_orchestration::interfaces::ResultPresenter;
use fibcompare_orchestration::runner::{analyze_run_results, execute_runs};
use fibcompare_orchestration::selection::strategies_to_run;

use crate::config::AppConfig;
use crate::menu;
use crate::output::{write_to_file, RunReport};
use crate::presenter::CliPresenter;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        crate::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let factory = DefaultFactory::new();

    // Index from the flag, or interactively when omitted.
    let n = match config.n {
        Some(n) => n,
        None => {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut output = std::io::stdout();
            menu::prompt_for_index(&factory, &mut input, &mut output)?
        }
    };

    let mut strategies = strategies_to_run(&config.strategy, n, &factory)?;
    let records = execute_runs(&mut strategies, n);

    // Cross-check values when more than one strategy ran.
    if records.len() > 1 {
        if let Err(e) = analyze_run_results(&records, n) {
            eprintln!("Warning: {e}");
        }
    }

    if config.json {
        let report = RunReport::from_records(n, &records);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let presenter = CliPresenter::new(config.verbose, config.quiet, config.details);
        for record in &records {
            presenter.present_run(n, record);
        }
        if records.len() > 1 {
            presenter.present_comparison(&records);
        }
    }

    // Write the value to a file if requested.
    if let Some(ref path) = config.output {
        if let Some(record) = records.first() {
            write_to_file(path, &record.value)?;
        }
    }

    Ok(())
}
