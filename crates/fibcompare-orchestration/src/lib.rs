//! # fibcompare-orchestration
//!
//! Sequential timed execution, strategy selection against advisory
//! ceilings, and cross-strategy result analysis.

pub mod interfaces;
pub mod runner;
pub mod selection;

pub use interfaces::{ResultPresenter, RunRecord};
pub use runner::{analyze_run_results, execute_runs};
pub use selection::strategies_to_run;
