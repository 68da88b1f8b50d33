pub mod config;
pub mod error;
pub mod report;
pub mod scenarios;
pub mod test_case;
pub mod test_context;
pub mod test_suite;

use crate::config::Config;
use crate::report::RunSummary;
use crate::test_case::TestCase;
use crate::test_suite::TestSuite;

/// Runs the backend scenarios against `config.base_url`, prints the summary and
/// saves it to `config.output_path`.
pub fn exec(config: &Config) -> anyhow::Result<RunSummary> {
    exec_test_cases(scenarios::default_test_cases(), config)
}

pub fn exec_test_cases(test_cases: Vec<TestCase>, config: &Config) -> anyhow::Result<RunSummary> {
    tracing::info!(base_url = %config.base_url, count = test_cases.len(), "running test suite");

    let mut test_suite = TestSuite::new(test_cases, config)?;
    let summary = test_suite.run();

    summary.print_stats();
    summary.persist(&config.output_path)?;
    Ok(summary)
}
